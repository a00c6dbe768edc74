use super::{Instruction, ProtocolAccounts};
use crate::constants::discriminators;
use crate::error::PdaError;
use crate::pda::find_redemption_request_pda;
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;

/// Builds `claim_redemption`: a fulfiller takes a pending request of `user`
pub fn build_claim_redemption_ix(
    accounts: &ProtocolAccounts,
    fulfiller: &Pubkey,
    user: &Pubkey,
    request_id: u64,
) -> Result<Instruction, PdaError> {
    let (redemption_request, _) =
        find_redemption_request_pda(&accounts.program_id, user, request_id)?;

    Ok(Instruction {
        program_id: accounts.program_id,
        accounts: vec![
            AccountMeta::new_readonly(accounts.protocol_state, false),
            AccountMeta::new(redemption_request, false),
            AccountMeta::new(*fulfiller, true),
        ],
        data: discriminators::CLAIM_REDEMPTION.to_vec(),
    })
}
