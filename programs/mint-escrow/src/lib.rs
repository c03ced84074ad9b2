//! Threshold-gated escrow for protected mint campaigns.
//!
//! A creator's sale proceeds accumulate in a program-derived config account.
//! Once the sales window closes, either the funding threshold was reached and
//! the creator sweeps the whole balance, or it was not and verified
//! purchasers reclaim their contributions one by one.

#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod mint_escrow {
    use super::*;

    /// Create the escrow config for a campaign. The threshold defaults to
    /// `sale_price * max_quantity` when not supplied explicitly.
    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        threshold_level: Option<u64>,
        end_sales_time: i64,
        sale_price: u64,
        max_quantity: u64,
    ) -> Result<()> {
        instructions::initialize_config(
            ctx,
            threshold_level,
            end_sales_time,
            sale_price,
            max_quantity,
        )
    }

    /// Pay for `quantity` units and record the holder's refund claim
    pub fn record_purchase(ctx: Context<RecordPurchase>, quantity: u64) -> Result<()> {
        instructions::record_purchase(ctx, quantity)
    }

    /// Sweep the full custody balance to the creator once the window has
    /// closed with the threshold met
    pub fn release_funds(ctx: Context<ReleaseFunds>) -> Result<()> {
        instructions::release_funds(ctx)
    }

    /// Return a verified holder's contribution after a failed campaign
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        instructions::refund(ctx)
    }

    /// Reclaim the config account's rent once custody is fully drained
    pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
        instructions::close_config(ctx)
    }
}
