use crate::state::LayoutVersion;
use anchor_lang::prelude::Pubkey;
use thiserror::Error;

/// Errors raised while decoding raw account bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The buffer ends before the named field does
    #[error("account data too short: `{field}` at offset {offset} needs {required} bytes, got {actual}")]
    BufferTooShort {
        field: &'static str,
        offset: usize,
        required: usize,
        actual: usize,
    },
    /// The account discriminator does not belong to the expected account type
    #[error("discriminator mismatch for {account}: expected {expected:?}, found {found:?}")]
    DiscriminatorMismatch {
        account: &'static str,
        expected: [u8; 8],
        found: [u8; 8],
    },
    /// A boolean field holds something other than 0 or 1
    #[error("invalid bool byte {value} for `{field}` at offset {offset}")]
    InvalidBool {
        field: &'static str,
        offset: usize,
        value: u8,
    },
    /// A timestamp outside the representable date range
    #[error("timestamp {seconds} for `{field}` is out of range")]
    InvalidTimestamp { field: &'static str, seconds: i64 },
    /// An enum field holds an unknown tag
    #[error("unknown {kind} tag {value}")]
    UnknownTag { kind: &'static str, value: u8 },
    /// The account is sized for a different layout than the one requested
    #[error("{len}-byte account does not hold the {layout:?} layout")]
    LayoutMismatch { layout: LayoutVersion, len: usize },
    /// Borsh payload could not be deserialized
    #[error("failed to deserialize {account}: {reason}")]
    Deserialize {
        account: &'static str,
        reason: String,
    },
}

/// Errors raised while deriving program addresses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PdaError {
    #[error("invalid seeds: {0}")]
    InvalidSeed(String),
    #[error("no viable bump seed found for program {program_id}")]
    NoViableBump { program_id: Pubkey },
}

/// Arithmetic errors from the pricing and fee helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("math overflow")]
    Overflow,
    #[error("fee rate of {0} bps must be below 10000")]
    InvalidFeeRate(u16),
}

/// Pre-flight checks mirroring the program's purchase constraints
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("protocol is paused")]
    ProtocolPaused,
    #[error("price not set")]
    PriceNotSet,
    #[error("purchase of {amount} exceeds per-transaction cap of {cap}")]
    ExceedsTransactionCap { amount: u64, cap: u64 },
    #[error(transparent)]
    Math(#[from] MathError),
}

/// Errors raised while building a client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid address for `{field}`: {value}")]
    InvalidAddress { field: &'static str, value: String },
    #[error("unknown {kind} `{value}`")]
    UnknownValue { kind: &'static str, value: String },
    #[error("config needs either `cluster` or `rpc_url`")]
    MissingEndpoint,
    #[error(transparent)]
    Pda(#[from] PdaError),
}

/// Errors surfaced by the state access façade
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed; never converted into a default value
    #[error("rpc request failed: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("account {address} is owned by {owner}, expected {expected}")]
    UnexpectedOwner {
        address: Pubkey,
        owner: Pubkey,
        expected: Pubkey,
    },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Pda(#[from] PdaError),
}

pub type Result<T, E = ClientError> = std::result::Result<T, E>;
