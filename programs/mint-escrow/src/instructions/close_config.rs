use anchor_lang::prelude::*;

use crate::{
    error::EscrowError,
    events::ConfigClosed,
    state::{config::EscrowConfig, pda::CONFIG_SEED},
};

#[derive(Accounts)]
pub struct CloseConfig<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.creator_address.as_ref()],
        bump = config.bump,
        constraint = config.creator_address == creator.key() @ EscrowError::Unauthorized,
        close = creator
    )]
    pub config: Account<'info, EscrowConfig>,

    #[account(mut)]
    pub creator: Signer<'info>,
}

/// Optional cleanup once a campaign is fully settled: reclaims the config
/// account's rent. Only legal after the deadline with custody at exactly
/// zero, so unclaimed holder funds can never be swept out through closure.
pub fn close_config(ctx: Context<CloseConfig>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &ctx.accounts.config;

    require!(now >= config.end_sales_time, EscrowError::TooEarly);

    let custody = EscrowConfig::custody_balance(&config.to_account_info())?;
    require!(custody == 0, EscrowError::UnsettledFunds);

    emit!(ConfigClosed {
        config: config.key(),
        creator: config.creator_address,
    });

    Ok(())
}
