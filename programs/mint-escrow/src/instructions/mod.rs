pub mod close_config;
pub mod initialize_config;
pub mod record_purchase;
pub mod refund;
pub mod release_funds;

pub use close_config::*;
pub use initialize_config::*;
pub use record_purchase::*;
pub use refund::*;
pub use release_funds::*;
