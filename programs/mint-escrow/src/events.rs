use anchor_lang::prelude::*;

#[event]
pub struct ConfigInitialized {
    pub config: Pubkey,
    pub creator: Pubkey,
    pub sale_price: u64,
    pub max_quantity: u64,
    pub threshold_level: u64,
    pub end_sales_time: i64,
}

#[event]
pub struct PurchaseRecorded {
    pub config: Pubkey,
    pub holder: Pubkey,
    pub quantity: u64,
    pub amount: u64,
    pub units_sold: u64,
}

#[event]
pub struct FundsReleased {
    pub config: Pubkey,
    pub creator: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RefundIssued {
    pub config: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ConfigClosed {
    pub config: Pubkey,
    pub creator: Pubkey,
}
