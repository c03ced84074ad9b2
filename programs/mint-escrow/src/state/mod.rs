pub mod config;
pub mod pda;
pub mod refund_claim;

pub use config::*;
pub use pda::*;
pub use refund_claim::*;
