use crate::error::LayoutError;
use chrono::{DateTime, Utc};

/// Formats a 32-byte digest as `0x` followed by 64 lowercase hex digits
pub fn format_merkle_root(root: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(root))
}

/// Converts a unix timestamp read from an account into an instant.
///
/// Zero is the account's zero-initialized default and means "never set", so it
/// maps to `None` instead of the unix epoch.
pub fn timestamp_to_datetime(seconds: i64) -> Result<Option<DateTime<Utc>>, LayoutError> {
    decode_timestamp("timestamp", seconds)
}

pub(crate) fn decode_timestamp(
    field: &'static str,
    seconds: i64,
) -> Result<Option<DateTime<Utc>>, LayoutError> {
    if seconds == 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(seconds, 0)
        .map(Some)
        .ok_or(LayoutError::InvalidTimestamp { field, seconds })
}
