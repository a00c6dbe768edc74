use super::{Instruction, ProtocolAccounts};
use crate::constants::discriminators;
use crate::error::PdaError;
use crate::pda::find_user_profile_pda;
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::solana_program::system_program;

/// Builds `buy_w3b(amount)`, crediting points to the buyer's profile PDA.
///
/// The profile must already exist on-chain; use
/// [`build_buy_ix_with_profile`] with `None` for buyers without one.
pub fn build_buy_ix(
    accounts: &ProtocolAccounts,
    buyer: &Pubkey,
    buyer_token_account: &Pubkey,
    sol_receiver: &Pubkey,
    amount: u64,
) -> Result<Instruction, PdaError> {
    let (user_profile, _) = find_user_profile_pda(&accounts.program_id, buyer)?;
    Ok(build_buy_ix_with_profile(
        accounts,
        buyer,
        buyer_token_account,
        sol_receiver,
        Some(&user_profile),
        amount,
    ))
}

pub fn build_buy_ix_with_profile(
    accounts: &ProtocolAccounts,
    buyer: &Pubkey,
    buyer_token_account: &Pubkey,
    sol_receiver: &Pubkey,
    user_profile: Option<&Pubkey>,
    amount: u64,
) -> Instruction {
    let mut data = discriminators::BUY_W3B.to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: accounts.program_id,
        accounts: vec![
            // declared `mut` by the program
            AccountMeta::new(accounts.protocol_state, false),
            AccountMeta::new(*buyer, true),
            AccountMeta::new(*buyer_token_account, false),
            AccountMeta::new(accounts.treasury, false),
            AccountMeta::new(*sol_receiver, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(accounts.token_program, false),
            accounts.optional_writable(user_profile),
        ],
        data,
    }
}
