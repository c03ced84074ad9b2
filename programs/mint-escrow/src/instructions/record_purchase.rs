use anchor_lang::{prelude::*, system_program};

use crate::{
    events::PurchaseRecorded,
    state::{
        config::EscrowConfig,
        pda::{CONFIG_SEED, REFUND_CLAIM_SEED},
        refund_claim::RefundClaim,
    },
};

#[derive(Accounts)]
pub struct RecordPurchase<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED, config.creator_address.as_ref()],
        bump = config.bump
    )]
    pub config: Account<'info, EscrowConfig>,

    // One claim per holder per campaign; a repeat purchase fails here, so
    // buyers aggregate their quantity in a single purchase
    #[account(
        init,
        payer = holder,
        space = RefundClaim::SIZE,
        seeds = [REFUND_CLAIM_SEED, config.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub refund_claim: Account<'info, RefundClaim>,

    #[account(mut)]
    pub holder: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn record_purchase(ctx: Context<RecordPurchase>, quantity: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let (units_sold, amount) = ctx.accounts.config.assert_purchase_allowed(now, quantity)?;

    // Proceeds move into custody before any record is written; the holder is
    // a system account, so this is a plain system transfer
    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        system_program::Transfer {
            from: ctx.accounts.holder.to_account_info(),
            to: ctx.accounts.config.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    let config_key = ctx.accounts.config.key();
    let holder_key = ctx.accounts.holder.key();

    let config = &mut ctx.accounts.config;
    config.units_sold = units_sold;

    let claim = &mut ctx.accounts.refund_claim;
    claim.config = config_key;
    claim.holder = holder_key;
    claim.amount = amount;
    claim.bump = ctx.bumps.refund_claim;

    emit!(PurchaseRecorded {
        config: config_key,
        holder: holder_key,
        quantity,
        amount,
        units_sold,
    });

    Ok(())
}
