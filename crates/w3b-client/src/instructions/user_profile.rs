use super::{Instruction, ProtocolAccounts};
use crate::constants::discriminators;
use crate::error::PdaError;
use crate::pda::find_user_profile_pda;
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;
use anchor_lang::solana_program::system_program;

/// Builds `init_user_profile`; the user pays rent for the profile PDA
pub fn build_init_user_profile_ix(
    accounts: &ProtocolAccounts,
    user: &Pubkey,
) -> Result<Instruction, PdaError> {
    let (user_profile, _) = find_user_profile_pda(&accounts.program_id, user)?;

    Ok(Instruction {
        program_id: accounts.program_id,
        accounts: vec![
            AccountMeta::new(user_profile, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data: discriminators::INIT_USER_PROFILE.to_vec(),
    })
}
