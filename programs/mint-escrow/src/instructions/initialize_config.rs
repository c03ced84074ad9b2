use anchor_lang::prelude::*;

use crate::{
    error::EscrowError,
    events::ConfigInitialized,
    state::{config::EscrowConfig, pda::CONFIG_SEED},
};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    // Deterministic derivation from the creator key: one config per creator,
    // and a second init fails on the existing account
    #[account(
        init,
        payer = creator,
        space = EscrowConfig::SIZE,
        seeds = [CONFIG_SEED, creator.key().as_ref()],
        bump
    )]
    pub config: Account<'info, EscrowConfig>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Create the escrow config for a campaign. Duplicate creation for the same
/// creator is the `AlreadyExists` rejection, surfaced by the system program
/// failing the PDA `init` on the existing account rather than by this
/// handler.
pub fn initialize_config(
    ctx: Context<InitializeConfig>,
    threshold_level: Option<u64>,
    end_sales_time: i64,
    sale_price: u64,
    max_quantity: u64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    require!(sale_price > 0, EscrowError::InvalidParameters);
    require!(max_quantity > 0, EscrowError::InvalidParameters);
    require!(end_sales_time > now, EscrowError::InvalidParameters);

    let threshold_level =
        EscrowConfig::derive_threshold(sale_price, max_quantity, threshold_level)?;

    let creator_key = ctx.accounts.creator.key();
    let config = &mut ctx.accounts.config;
    config.creator_address = creator_key;
    config.sale_price = sale_price;
    config.max_quantity = max_quantity;
    config.units_sold = 0;
    config.threshold_level = threshold_level;
    config.end_sales_time = end_sales_time;
    config.threshold_met = false;
    config.bump = ctx.bumps.config;

    // Sale proceeds (e.g. the mint treasury) should be pointed at this address
    msg!("Escrow config address: {}", config.key());

    emit!(ConfigInitialized {
        config: config.key(),
        creator: creator_key,
        sale_price,
        max_quantity,
        threshold_level,
        end_sales_time,
    });

    Ok(())
}
