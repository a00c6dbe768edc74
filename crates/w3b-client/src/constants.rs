use anchor_lang::prelude::Pubkey;

/// Deployed W3B protocol program
pub const W3B_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("9xZaf2jccNqsfStFKqcXS9ubKfcZcqNbCmgPuHDLLtd6");

/// Token-2022 program, owner of the W3B mint and treasury
pub const TOKEN_2022_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

/// Original SPL Token program
pub const TOKEN_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// PDA seeds used by the program for account derivation
pub mod seeds {
    /// Seed for the singleton protocol state account
    pub const PROTOCOL_STATE: &[u8] = b"protocol_state";

    /// Seed for per-user profile accounts
    pub const USER_PROFILE: &[u8] = b"user_profile";

    /// Seed for redemption request accounts
    pub const REDEMPTION: &[u8] = b"redemption";
}

/// Anchor discriminators published by the program IDL.
///
/// Instruction discriminators are `sha256("global:<name>")[..8]`, account
/// discriminators `sha256("account:<Name>")[..8]`. They are embedded as fixed
/// values and never recomputed at runtime.
pub mod discriminators {
    pub const BUY_W3B: [u8; 8] = [32, 152, 242, 112, 159, 221, 39, 173];
    pub const BURN_W3B: [u8; 8] = [207, 123, 197, 201, 16, 132, 251, 254];
    pub const INIT_USER_PROFILE: [u8; 8] = [148, 35, 126, 247, 28, 169, 135, 175];
    pub const CLAIM_REDEMPTION: [u8; 8] = [109, 110, 9, 188, 195, 217, 112, 83];

    pub const PROTOCOL_STATE_ACCOUNT: [u8; 8] = [33, 51, 173, 134, 35, 140, 195, 248];
    pub const USER_PROFILE_ACCOUNT: [u8; 8] = [32, 37, 119, 205, 179, 180, 13, 194];
    pub const REDEMPTION_REQUEST_ACCOUNT: [u8; 8] = [117, 157, 214, 214, 64, 160, 31, 58];
}

/// Length of the Anchor account discriminator prefix
pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;

/// Lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Maximum possible value of basis points (100%)
pub const MAX_BASIS_POINTS: u16 = 10_000;

/// Per-transaction purchase cap enforced by `buy_w3b`
pub const MAX_TOKENS_PER_PURCHASE: u64 = 1_000;

/// Age after which the program refuses to mint against a reserve proof
pub const PROOF_STALENESS_SECONDS: i64 = 48 * 3600;
