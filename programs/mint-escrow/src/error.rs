use anchor_lang::prelude::*;

// Errors
#[error_code]
pub enum EscrowError {
    #[msg("Invalid campaign parameters")]
    InvalidParameters,
    #[msg("An escrow config already exists for this creator")]
    AlreadyExists,
    #[msg("Math operation resulted in overflow")]
    Overflow,
    #[msg("Signer is not the campaign creator")]
    Unauthorized,
    #[msg("Cannot settle before the end of the sales window")]
    TooEarly,
    #[msg("Funding threshold is not met")]
    ThresholdNotMet,
    #[msg("Refunds are closed: the funding threshold was met and released")]
    ThresholdAlreadyMet,
    #[msg("Funds were already released to the creator")]
    AlreadySettled,
    #[msg("No verified contribution found for this holder")]
    UnverifiedHolder,
    #[msg("Custody balance is below the recorded contribution")]
    InsufficientCustody,
    #[msg("Sales window has closed; purchases are no longer recorded")]
    SaleClosed,
    #[msg("Requested quantity exceeds the campaign maximum")]
    SoldOut,
    #[msg("Custody must be fully drained before closing the config")]
    UnsettledFunds,
}
