/// PDA derivation module. Single source of truth for all seeds used by the
/// program; any client can recompute a config address from the creator key
/// alone, so no registry account is needed.
use anchor_lang::prelude::*;

pub const CONFIG_SEED: &[u8] = b"escrow-config";
pub const REFUND_CLAIM_SEED: &[u8] = b"refund-claim";

/// Derive the escrow config PDA for a creator
pub fn derive_config_pda(creator: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, creator.as_ref()], program_id)
}

/// Derive a holder's refund claim PDA for a given config
pub fn derive_refund_claim_pda(
    config: &Pubkey,
    holder: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[REFUND_CLAIM_SEED, config.as_ref(), holder.as_ref()],
        program_id,
    )
}
