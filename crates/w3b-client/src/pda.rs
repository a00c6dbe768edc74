//! Program-derived address helpers.
//!
//! Seeds must match the `seeds = [...]` constraints of the program byte for
//! byte: a different encoding still yields a valid address, just not the one
//! the program checks, and the transaction then fails on submission.

use crate::constants::seeds;
use crate::error::PdaError;
use anchor_lang::prelude::Pubkey;

/// Maximum number of seeds accepted by the runtime
pub const MAX_SEEDS: usize = 16;

/// Maximum length of a single seed
pub const MAX_SEED_LEN: usize = 32;

/// Derives a program address with the standard bump search (255 down to 0).
///
/// # Errors
/// `InvalidSeed` when the seeds break the runtime limits, `NoViableBump` when
/// every bump lands on the curve.
pub fn derive_address(program_id: &Pubkey, seeds: &[&[u8]]) -> Result<(Pubkey, u8), PdaError> {
    // one slot is taken by the bump itself
    if seeds.len() >= MAX_SEEDS {
        return Err(PdaError::InvalidSeed(format!(
            "{} seeds given, at most {} allowed",
            seeds.len(),
            MAX_SEEDS - 1
        )));
    }
    if let Some((index, seed)) = seeds
        .iter()
        .enumerate()
        .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
    {
        return Err(PdaError::InvalidSeed(format!(
            "seed {index} is {} bytes, at most {MAX_SEED_LEN} allowed",
            seed.len()
        )));
    }

    Pubkey::try_find_program_address(seeds, program_id).ok_or(PdaError::NoViableBump {
        program_id: *program_id,
    })
}

pub fn find_protocol_state_pda(program_id: &Pubkey) -> Result<(Pubkey, u8), PdaError> {
    derive_address(program_id, &[seeds::PROTOCOL_STATE])
}

pub fn find_user_profile_pda(program_id: &Pubkey, user: &Pubkey) -> Result<(Pubkey, u8), PdaError> {
    derive_address(program_id, &[seeds::USER_PROFILE, user.as_ref()])
}

/// Address of the request created by `burn_w3b` for `(user, request_id)`
pub fn find_redemption_request_pda(
    program_id: &Pubkey,
    user: &Pubkey,
    request_id: u64,
) -> Result<(Pubkey, u8), PdaError> {
    derive_address(
        program_id,
        &[seeds::REDEMPTION, user.as_ref(), &request_id.to_le_bytes()],
    )
}

/// Associated token account of `owner` for `mint` under `token_program`
pub fn associated_token_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    anchor_spl::associated_token::get_associated_token_address_with_program_id(
        owner,
        mint,
        token_program,
    )
}
