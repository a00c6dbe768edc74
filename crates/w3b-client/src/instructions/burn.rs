use super::{Instruction, ProtocolAccounts};
use crate::constants::discriminators;
use crate::error::PdaError;
use crate::pda::{find_redemption_request_pda, find_user_profile_pda};
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::solana_program::system_program;

/// Builds `burn_w3b(amount, request_id)`, opening a redemption request.
///
/// `request_id` seeds the request PDA, so it must be unique per user. Ids made
/// from wall-clock time can collide when one user burns twice in quick
/// succession; take them from an authoritative counter.
pub fn build_burn_ix(
    accounts: &ProtocolAccounts,
    user: &Pubkey,
    user_token_account: &Pubkey,
    amount: u64,
    request_id: u64,
) -> Result<Instruction, PdaError> {
    let (user_profile, _) = find_user_profile_pda(&accounts.program_id, user)?;
    build_burn_ix_with_profile(
        accounts,
        user,
        user_token_account,
        Some(&user_profile),
        amount,
        request_id,
    )
}

pub fn build_burn_ix_with_profile(
    accounts: &ProtocolAccounts,
    user: &Pubkey,
    user_token_account: &Pubkey,
    user_profile: Option<&Pubkey>,
    amount: u64,
    request_id: u64,
) -> Result<Instruction, PdaError> {
    let (redemption_request, _) =
        find_redemption_request_pda(&accounts.program_id, user, request_id)?;

    let mut data = discriminators::BURN_W3B.to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&request_id.to_le_bytes());

    Ok(Instruction {
        program_id: accounts.program_id,
        accounts: vec![
            AccountMeta::new(accounts.protocol_state, false),
            AccountMeta::new(*user, true),
            AccountMeta::new(*user_token_account, false),
            AccountMeta::new(accounts.token_mint, false),
            AccountMeta::new(redemption_request, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            accounts.optional_writable(user_profile),
        ],
        data,
    })
}
