//! Per-holder refund claim
//!
//! Created when a purchase is recorded and closed back to the holder when a
//! refund is paid, so a contribution can never be reclaimed twice. Existence
//! of the claim at its derived address is the holder-verification proof.

use anchor_lang::prelude::*;

#[account]
pub struct RefundClaim {
    pub config: Pubkey, // 32 - Escrow config this contribution belongs to
    pub holder: Pubkey, // 32 - Purchaser eligible for the refund
    pub amount: u64,    // 8  - Lamports contributed
    pub bump: u8,       // 1  - Canonical claim PDA bump
}

impl RefundClaim {
    pub const SIZE: usize = 8 + 32 + 32 + 8 + 1;
}
