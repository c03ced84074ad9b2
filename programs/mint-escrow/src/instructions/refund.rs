use anchor_lang::prelude::*;

use crate::{
    error::EscrowError,
    events::RefundIssued,
    state::{
        config::EscrowConfig,
        pda::{CONFIG_SEED, REFUND_CLAIM_SEED},
        refund_claim::RefundClaim,
    },
};

#[derive(Accounts)]
pub struct Refund<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.creator_address.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, EscrowConfig>,

    // The claim at the derived address is the holder-verification proof.
    // Unverified holders fail on one of two surfaces: no recorded
    // contribution means no account at this PDA (AccountNotInitialized),
    // and presenting another holder's claim hits UnverifiedHolder below.
    // Closing to the holder consumes the claim and returns its rent.
    #[account(
        mut,
        seeds = [REFUND_CLAIM_SEED, config.key().as_ref(), holder.key().as_ref()],
        bump = refund_claim.bump,
        has_one = holder @ EscrowError::UnverifiedHolder,
        close = holder
    )]
    pub refund_claim: Account<'info, RefundClaim>,

    #[account(mut)]
    pub holder: Signer<'info>,
}

pub fn refund(ctx: Context<Refund>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.config.assert_refund_allowed(now)?;

    let amount = ctx.accounts.refund_claim.amount;
    require!(amount > 0, EscrowError::UnverifiedHolder);

    let config_info = ctx.accounts.config.to_account_info();
    let holder_info = ctx.accounts.holder.to_account_info();

    let custody = EscrowConfig::custody_balance(&config_info)?;
    if let Err(err) = EscrowConfig::assert_custody_covers(custody, amount) {
        // Bookkeeping invariant violation: claims can never exceed what was
        // paid in. Surface loudly; nothing is mutated.
        msg!(
            "consistency fault: custody {} below recorded contribution {}",
            custody,
            amount
        );
        return Err(err);
    }

    **config_info.try_borrow_mut_lamports()? = config_info
        .lamports()
        .checked_sub(amount)
        .ok_or(EscrowError::Overflow)?;
    **holder_info.try_borrow_mut_lamports()? = holder_info
        .lamports()
        .checked_add(amount)
        .ok_or(EscrowError::Overflow)?;

    emit!(RefundIssued {
        config: ctx.accounts.config.key(),
        holder: ctx.accounts.holder.key(),
        amount,
    });

    Ok(())
}
