//! Client core for the W3B silver-backed token program.
//!
//! Decodes the program's on-chain accounts, derives its program addresses,
//! builds unsigned instructions for buying, burning and redemption, and
//! exposes read-only access to live state through [`client::ProtocolClient`].
//!
//! Signing, transaction assembly and submission are left to the wallet layer:
//! every builder returns a plain [`instructions::Instruction`].

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

pub use client::{AccountSource, FetchedAccount, ProtocolClient};
pub use config::{ClientConfig, Cluster};
pub use error::{ClientError, ConfigError, LayoutError, MathError, PdaError, PurchaseError};
pub use state::{LayoutVersion, ProtocolState};
