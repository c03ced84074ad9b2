use anchor_lang::prelude::*;

use crate::{
    error::EscrowError,
    events::FundsReleased,
    state::{config::EscrowConfig, pda::CONFIG_SEED},
};

#[derive(Accounts)]
pub struct ReleaseFunds<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.creator_address.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, EscrowConfig>,

    // Compared against the stored creator inside the handler so the time
    // gate is evaluated first
    #[account(mut)]
    pub creator: Signer<'info>,
}

pub fn release_funds(ctx: Context<ReleaseFunds>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config_info = ctx.accounts.config.to_account_info();
    let creator_info = ctx.accounts.creator.to_account_info();

    let custody = EscrowConfig::custody_balance(&config_info)?;
    ctx.accounts
        .config
        .assert_release_allowed(&creator_info.key(), now, custody)?;

    // Full sweep: exactly the custody balance, leaving the rent reserve so
    // the account can absorb any proceeds that land after the deadline
    **config_info.try_borrow_mut_lamports()? = config_info
        .lamports()
        .checked_sub(custody)
        .ok_or(EscrowError::Overflow)?;
    **creator_info.try_borrow_mut_lamports()? = creator_info
        .lamports()
        .checked_add(custody)
        .ok_or(EscrowError::Overflow)?;

    let config = &mut ctx.accounts.config;
    config.threshold_met = true;

    emit!(FundsReleased {
        config: config.key(),
        creator: config.creator_address,
        amount: custody,
    });

    Ok(())
}
