//! Escrow config state
//!
//! Durable record for one mint campaign: sale parameters, the funding
//! threshold, and the settlement flag. The custody balance is not a stored
//! field; it is the config account's own lamports less the rent-exempt
//! reserve, so it can only be moved, never forged.

use anchor_lang::prelude::*;

use crate::error::EscrowError;

/// Derived settlement state of a campaign. Only `Released` is backed by a
/// stored flag; the rest is a pure function of the clock and custody balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementPhase {
    /// Sales window still open; only balance-increasing purchases are legal
    Open,
    /// Window closed with custody at or above the threshold, not yet swept
    EligibleForRelease,
    /// Funds swept to the creator (terminal)
    Released,
    /// Window closed below the threshold; holders may reclaim contributions
    EligibleForRefund,
}

#[account]
pub struct EscrowConfig {
    pub creator_address: Pubkey, // 32 - Campaign beneficiary, immutable
    pub sale_price: u64,         // 8  - Lamports per unit
    pub max_quantity: u64,       // 8  - Maximum sellable units
    pub units_sold: u64,         // 8  - Units recorded so far
    pub threshold_level: u64,    // 8  - Minimum proceeds for release
    pub end_sales_time: i64,     // 8  - Settlement permitted at/after this time
    pub threshold_met: bool,     // 1  - Set once by a successful release
    pub bump: u8,                // 1  - Canonical config PDA bump
}

impl EscrowConfig {
    pub const SIZE: usize = 8 + 32 + 8 + 8 + 8 + 8 + 8 + 1 + 1;

    /// Resolve the funding threshold at initialization time.
    ///
    /// Defaults to the total possible proceeds; an explicitly supplied level
    /// must be nonzero and must not exceed that product.
    pub fn derive_threshold(
        sale_price: u64,
        max_quantity: u64,
        explicit: Option<u64>,
    ) -> Result<u64> {
        let total_proceeds = sale_price
            .checked_mul(max_quantity)
            .ok_or(EscrowError::Overflow)?;

        match explicit {
            None => Ok(total_proceeds),
            Some(level) => {
                require!(level > 0, EscrowError::InvalidParameters);
                require!(level <= total_proceeds, EscrowError::InvalidParameters);
                Ok(level)
            }
        }
    }

    /// Campaign custody: account lamports less the rent-exempt reserve.
    /// The reserve is storage deposit, not proceeds.
    pub fn custody_balance(account: &AccountInfo) -> Result<u64> {
        let rent_reserve = Rent::get()?.minimum_balance(account.data_len());
        Ok(account.lamports().saturating_sub(rent_reserve))
    }

    pub fn settlement_phase(&self, now: i64, custody: u64) -> SettlementPhase {
        if self.threshold_met {
            SettlementPhase::Released
        } else if now < self.end_sales_time {
            SettlementPhase::Open
        } else if custody >= self.threshold_level {
            SettlementPhase::EligibleForRelease
        } else {
            SettlementPhase::EligibleForRefund
        }
    }

    /// Release gates, checked in order, fail-fast.
    ///
    /// Gate (c) also passes once `threshold_met` is set: the sweep drains
    /// custody below the threshold, and a repeat call must surface
    /// `AlreadySettled` rather than `ThresholdNotMet`.
    pub fn assert_release_allowed(&self, caller: &Pubkey, now: i64, custody: u64) -> Result<()> {
        require!(now >= self.end_sales_time, EscrowError::TooEarly);
        require_keys_eq!(*caller, self.creator_address, EscrowError::Unauthorized);
        require!(
            custody >= self.threshold_level || self.threshold_met,
            EscrowError::ThresholdNotMet
        );
        require!(!self.threshold_met, EscrowError::AlreadySettled);
        Ok(())
    }

    /// Refund gates shared by every per-holder claim
    pub fn assert_refund_allowed(&self, now: i64) -> Result<()> {
        require!(now >= self.end_sales_time, EscrowError::TooEarly);
        require!(!self.threshold_met, EscrowError::ThresholdAlreadyMet);
        Ok(())
    }

    /// Custody must cover every recorded contribution. A shortfall is a
    /// bookkeeping fault, not a routine rejection.
    pub fn assert_custody_covers(custody: u64, contribution: u64) -> Result<()> {
        require!(custody >= contribution, EscrowError::InsufficientCustody);
        Ok(())
    }

    /// Purchase gates: legal only while the sale is open and within the
    /// campaign maximum. Returns the updated unit count and the lamport
    /// amount due.
    pub fn assert_purchase_allowed(&self, now: i64, quantity: u64) -> Result<(u64, u64)> {
        require!(now < self.end_sales_time, EscrowError::SaleClosed);
        require!(quantity > 0, EscrowError::InvalidParameters);

        let units_sold = self
            .units_sold
            .checked_add(quantity)
            .ok_or(EscrowError::Overflow)?;
        require!(units_sold <= self.max_quantity, EscrowError::SoldOut);

        let amount = self
            .sale_price
            .checked_mul(quantity)
            .ok_or(EscrowError::Overflow)?;

        Ok((units_sold, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::assert_escrow_err;

    fn campaign(threshold_level: u64, end_sales_time: i64) -> EscrowConfig {
        EscrowConfig {
            creator_address: Pubkey::new_unique(),
            sale_price: 2,
            max_quantity: 1000,
            units_sold: 0,
            threshold_level,
            end_sales_time,
            threshold_met: false,
            bump: 255,
        }
    }

    #[test]
    fn threshold_defaults_to_total_proceeds() {
        let level = EscrowConfig::derive_threshold(2, 1000, None).unwrap();
        assert_eq!(level, 2000);
    }

    #[test]
    fn explicit_threshold_bounds() {
        assert_eq!(EscrowConfig::derive_threshold(2, 1000, Some(1500)).unwrap(), 1500);
        assert_escrow_err(
            EscrowConfig::derive_threshold(2, 1000, Some(0)).map(|_| ()),
            EscrowError::InvalidParameters,
        );
        assert_escrow_err(
            EscrowConfig::derive_threshold(2, 1000, Some(2001)).map(|_| ()),
            EscrowError::InvalidParameters,
        );
    }

    #[test]
    fn threshold_product_overflow() {
        assert_escrow_err(
            EscrowConfig::derive_threshold(u64::MAX, 2, None).map(|_| ()),
            EscrowError::Overflow,
        );
    }

    #[test]
    fn release_rejected_before_deadline_regardless_of_balance() {
        let config = campaign(2000, 100);
        let creator = config.creator_address;
        assert_escrow_err(
            config.assert_release_allowed(&creator, 99, 1_000_000),
            EscrowError::TooEarly,
        );
        // A stranger gets the same answer: the time gate fires first
        assert_escrow_err(
            config.assert_release_allowed(&Pubkey::new_unique(), 99, 1_000_000),
            EscrowError::TooEarly,
        );
    }

    #[test]
    fn release_rejects_non_creator_after_deadline() {
        let config = campaign(2000, 100);
        assert_escrow_err(
            config.assert_release_allowed(&Pubkey::new_unique(), 100, 2000),
            EscrowError::Unauthorized,
        );
    }

    #[test]
    fn release_requires_threshold() {
        let config = campaign(2000, 100);
        let creator = config.creator_address;
        assert_escrow_err(
            config.assert_release_allowed(&creator, 100, 1999),
            EscrowError::ThresholdNotMet,
        );
        assert!(config.assert_release_allowed(&creator, 100, 2000).is_ok());
    }

    #[test]
    fn second_release_is_already_settled() {
        let mut config = campaign(2000, 100);
        let creator = config.creator_address;
        assert!(config.assert_release_allowed(&creator, 100, 2000).is_ok());

        // Sweep committed: flag set, custody drained
        config.threshold_met = true;
        assert_escrow_err(
            config.assert_release_allowed(&creator, 101, 0),
            EscrowError::AlreadySettled,
        );
    }

    #[test]
    fn refund_gates() {
        let mut config = campaign(2000, 100);
        assert_escrow_err(config.assert_refund_allowed(99), EscrowError::TooEarly);
        assert!(config.assert_refund_allowed(100).is_ok());

        config.threshold_met = true;
        assert_escrow_err(
            config.assert_refund_allowed(100),
            EscrowError::ThresholdAlreadyMet,
        );
    }

    #[test]
    fn purchase_gates() {
        let mut config = campaign(2000, 100);

        // Happy path: 3 units at price 2
        assert_eq!(config.assert_purchase_allowed(99, 3).unwrap(), (3, 6));

        assert_escrow_err(
            config.assert_purchase_allowed(100, 1).map(|_| ()),
            EscrowError::SaleClosed,
        );
        assert_escrow_err(
            config.assert_purchase_allowed(99, 0).map(|_| ()),
            EscrowError::InvalidParameters,
        );
        assert_escrow_err(
            config.assert_purchase_allowed(99, 1001).map(|_| ()),
            EscrowError::SoldOut,
        );

        // The last unit sells; one past the maximum does not
        config.units_sold = 999;
        assert_eq!(config.assert_purchase_allowed(99, 1).unwrap(), (1000, 2));
        assert_escrow_err(
            config.assert_purchase_allowed(99, 2).map(|_| ()),
            EscrowError::SoldOut,
        );
    }

    #[test]
    fn purchase_math_overflow() {
        let mut config = campaign(2000, 100);
        config.units_sold = u64::MAX;
        assert_escrow_err(
            config.assert_purchase_allowed(99, 1).map(|_| ()),
            EscrowError::Overflow,
        );

        let mut config = campaign(2000, 100);
        config.sale_price = u64::MAX;
        config.max_quantity = u64::MAX;
        assert_escrow_err(
            config.assert_purchase_allowed(99, 2).map(|_| ()),
            EscrowError::Overflow,
        );
    }

    #[test]
    fn phase_derivation() {
        let mut config = campaign(2000, 110);

        assert_eq!(config.settlement_phase(100, 0), SettlementPhase::Open);
        assert_eq!(
            config.settlement_phase(110, 2000),
            SettlementPhase::EligibleForRelease
        );
        assert_eq!(
            config.settlement_phase(110, 500),
            SettlementPhase::EligibleForRefund
        );

        config.threshold_met = true;
        assert_eq!(config.settlement_phase(110, 0), SettlementPhase::Released);
    }
}
