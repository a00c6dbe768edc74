//! Decoders for the program's on-chain accounts.

pub mod accounts;
pub mod format;
pub mod protocol_state;
pub mod reader;

pub use accounts::*;
pub use format::{format_merkle_root, timestamp_to_datetime};
pub use protocol_state::*;
pub use reader::FieldReader;
