//! Raw instruction builders for the W3B program.
//!
//! Each builder returns an unsigned [`Instruction`]: discriminator, packed
//! little-endian arguments and the account list in the order the program's
//! `#[derive(Accounts)]` struct declares them. Fee payer, blockhash and
//! signatures are added by the wallet layer.
//!
//! Builders do not second-guess arguments (a zero amount is encoded as is);
//! pre-flight checks such as the pause flag live in [`crate::utils::pricing`].

pub mod buy;
pub mod burn;
pub mod redemption;
pub mod user_profile;

pub use buy::*;
pub use burn::*;
pub use redemption::*;
pub use user_profile::*;

use crate::constants::TOKEN_2022_PROGRAM_ID;
use crate::error::PdaError;
use crate::pda::find_protocol_state_pda;
use crate::state::ProtocolState;
use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::instruction::AccountMeta;

pub use anchor_lang::solana_program::instruction::Instruction;

/// Fixed protocol addresses shared by every instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolAccounts {
    pub program_id: Pubkey,
    pub protocol_state: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub token_program: Pubkey,
}

impl ProtocolAccounts {
    /// Derives the protocol state PDA and assumes the Token-2022 program
    pub fn new(program_id: Pubkey, token_mint: Pubkey, treasury: Pubkey) -> Result<Self, PdaError> {
        let (protocol_state, _) = find_protocol_state_pda(&program_id)?;
        Ok(Self {
            program_id,
            protocol_state,
            token_mint,
            treasury,
            token_program: TOKEN_2022_PROGRAM_ID,
        })
    }

    /// Takes mint and treasury from a decoded state account
    pub fn from_state(
        program_id: Pubkey,
        protocol_state: Pubkey,
        state: &ProtocolState,
    ) -> Self {
        Self {
            program_id,
            protocol_state,
            token_mint: state.token_mint,
            treasury: state.treasury,
            token_program: TOKEN_2022_PROGRAM_ID,
        }
    }

    pub fn with_token_program(mut self, token_program: Pubkey) -> Self {
        self.token_program = token_program;
        self
    }

    /// Meta for an Anchor `Option<Account>` slot; the program id stands in for `None`
    fn optional_writable(&self, account: Option<&Pubkey>) -> AccountMeta {
        match account {
            Some(key) => AccountMeta::new(*key, false),
            None => AccountMeta::new_readonly(self.program_id, false),
        }
    }
}
