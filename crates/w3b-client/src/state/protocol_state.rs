use crate::constants::{discriminators, ANCHOR_DISCRIMINATOR_LEN};
use crate::error::LayoutError;
use crate::state::format::{decode_timestamp, format_merkle_root};
use crate::state::reader::FieldReader;
use anchor_lang::prelude::Pubkey;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Size of the zeroed tail the current layout keeps for later extensions
pub const RESERVED_LEN: usize = 64;

/// On-chain layout revision of the protocol state account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVersion {
    /// First deployment: no operator, burn counter or yield fields
    Legacy,
    /// Layout written by `initialize_v2` and `fix_v2_layout`
    #[default]
    Current,
}

impl LayoutVersion {
    /// Minimum account length, discriminator included
    pub const fn account_len(self) -> usize {
        match self {
            LayoutVersion::Legacy => 210,
            LayoutVersion::Current => 332,
        }
    }

    /// Field names and widths after the discriminator, in storage order
    fn fields(self) -> &'static [(&'static str, usize)] {
        match self {
            LayoutVersion::Legacy => LEGACY_FIELDS,
            LayoutVersion::Current => CURRENT_FIELDS,
        }
    }

    /// Field covering `offset`, if it lies inside the layout
    fn field_at(self, offset: usize) -> Option<&'static str> {
        let mut end = ANCHOR_DISCRIMINATOR_LEN;
        for &(name, width) in self.fields() {
            end += width;
            if offset < end {
                return Some(name);
            }
        }
        None
    }
}

const LEGACY_FIELDS: &[(&str, usize)] = &[
    ("authority", 32),
    ("token_mint", 32),
    ("treasury", 32),
    ("current_merkle_root", 32),
    ("last_root_update", 8),
    ("last_proof_timestamp", 8),
    ("proven_reserves", 8),
    ("total_supply", 8),
    ("is_paused", 1),
    ("bump", 1),
    ("price_lamports", 8),
    ("sol_receiver", 32),
];

const CURRENT_FIELDS: &[(&str, usize)] = &[
    ("authority", 32),
    ("operator", 32),
    ("token_mint", 32),
    ("treasury", 32),
    ("total_supply", 8),
    ("total_burned", 8),
    ("current_merkle_root", 32),
    ("proven_reserves", 8),
    ("last_root_update", 8),
    ("last_proof_timestamp", 8),
    ("price_lamports", 8),
    ("sol_receiver", 32),
    ("yield_apy_bps", 2),
    ("total_yield_distributed", 8),
    ("last_yield_distribution", 8),
    ("is_paused", 1),
    ("bump", 1),
    ("reserved", RESERVED_LEN),
];

/// Yield bookkeeping, present only in the current layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YieldStats {
    /// APY in basis points (350 = 3.5%)
    pub apy_bps: u16,
    /// Total W3B distributed as yield
    pub total_distributed: u64,
    /// Last recorded distribution, `None` if never distributed
    pub last_distribution: Option<DateTime<Utc>>,
}

/// Decoded protocol state account
///
/// Fields that only exist in the current layout are `None` when decoded from
/// a legacy account rather than being filled with defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolState {
    /// Layout the record was decoded from
    pub layout: LayoutVersion,
    /// Admin key: pause, parameter overrides, migrations
    pub authority: Pubkey,
    /// Hot key for routine operations (price updates, merkle roots, yield)
    pub operator: Option<Pubkey>,
    /// W3B Token-2022 mint
    pub token_mint: Pubkey,
    /// Program-owned token account holding unsold W3B
    pub treasury: Pubkey,
    /// Tokens currently minted
    pub total_supply: u64,
    /// Tokens burned for redemption
    pub total_burned: Option<u64>,
    /// Merkle root over the serial numbers of the backing bars
    pub current_merkle_root: [u8; 32],
    /// Physical units committed to by `current_merkle_root`
    pub proven_reserves: u64,
    pub last_root_update: Option<DateTime<Utc>>,
    pub last_proof_timestamp: Option<DateTime<Utc>>,
    /// Price of one W3B in lamports
    pub price_lamports: u64,
    /// Receives SOL paid by `buy_w3b`
    pub sol_receiver: Pubkey,
    pub yield_stats: Option<YieldStats>,
    /// When set the program rejects buys and burns
    pub is_paused: bool,
    /// Bump of the protocol state PDA
    pub bump: u8,
}

impl ProtocolState {
    /// Decodes raw account data using the requested layout.
    ///
    /// Trailing bytes beyond the current layout are ignored (the program
    /// allocates more space than the layout uses).
    ///
    /// # Errors
    /// `DiscriminatorMismatch` if the account is not a `ProtocolState`,
    /// `BufferTooShort` if the data ends before the layout does (checked
    /// before any field is read), `LayoutMismatch` if a legacy decode is asked
    /// of an account sized for the current layout, and
    /// `InvalidBool`/`InvalidTimestamp` for malformed field values.
    pub fn decode(data: &[u8], layout: LayoutVersion) -> Result<Self, LayoutError> {
        let mut reader = FieldReader::new(data);
        let found = reader.read_bytes::<ANCHOR_DISCRIMINATOR_LEN>("discriminator")?;
        if found != discriminators::PROTOCOL_STATE_ACCOUNT {
            return Err(LayoutError::DiscriminatorMismatch {
                account: "ProtocolState",
                expected: discriminators::PROTOCOL_STATE_ACCOUNT,
                found,
            });
        }

        check_len(data, layout)?;

        let state = match layout {
            LayoutVersion::Legacy => Self::decode_legacy(&mut reader)?,
            LayoutVersion::Current => Self::decode_current(&mut reader)?,
        };
        debug_assert_eq!(reader.offset(), layout.account_len());
        Ok(state)
    }

    fn decode_legacy(reader: &mut FieldReader) -> Result<Self, LayoutError> {
        let authority = reader.read_pubkey("authority")?;
        let token_mint = reader.read_pubkey("token_mint")?;
        let treasury = reader.read_pubkey("treasury")?;
        let current_merkle_root = reader.read_bytes("current_merkle_root")?;
        let last_root_update = read_timestamp(reader, "last_root_update")?;
        let last_proof_timestamp = read_timestamp(reader, "last_proof_timestamp")?;
        let proven_reserves = reader.read_u64_le("proven_reserves")?;
        let total_supply = reader.read_u64_le("total_supply")?;
        let is_paused = reader.read_bool("is_paused")?;
        let bump = reader.read_u8("bump")?;
        let price_lamports = reader.read_u64_le("price_lamports")?;
        let sol_receiver = reader.read_pubkey("sol_receiver")?;

        Ok(Self {
            layout: LayoutVersion::Legacy,
            authority,
            operator: None,
            token_mint,
            treasury,
            total_supply,
            total_burned: None,
            current_merkle_root,
            proven_reserves,
            last_root_update,
            last_proof_timestamp,
            price_lamports,
            sol_receiver,
            yield_stats: None,
            is_paused,
            bump,
        })
    }

    fn decode_current(reader: &mut FieldReader) -> Result<Self, LayoutError> {
        let authority = reader.read_pubkey("authority")?;
        let operator = reader.read_pubkey("operator")?;
        let token_mint = reader.read_pubkey("token_mint")?;
        let treasury = reader.read_pubkey("treasury")?;
        let total_supply = reader.read_u64_le("total_supply")?;
        let total_burned = reader.read_u64_le("total_burned")?;
        let current_merkle_root = reader.read_bytes("current_merkle_root")?;
        let proven_reserves = reader.read_u64_le("proven_reserves")?;
        let last_root_update = read_timestamp(reader, "last_root_update")?;
        let last_proof_timestamp = read_timestamp(reader, "last_proof_timestamp")?;
        let price_lamports = reader.read_u64_le("price_lamports")?;
        let sol_receiver = reader.read_pubkey("sol_receiver")?;
        let apy_bps = reader.read_u16_le("yield_apy_bps")?;
        let total_distributed = reader.read_u64_le("total_yield_distributed")?;
        let last_distribution = read_timestamp(reader, "last_yield_distribution")?;
        let is_paused = reader.read_bool("is_paused")?;
        let bump = reader.read_u8("bump")?;
        reader.skip("reserved", RESERVED_LEN)?;

        Ok(Self {
            layout: LayoutVersion::Current,
            authority,
            operator: Some(operator),
            token_mint,
            treasury,
            total_supply,
            total_burned: Some(total_burned),
            current_merkle_root,
            proven_reserves,
            last_root_update,
            last_proof_timestamp,
            price_lamports,
            sol_receiver,
            yield_stats: Some(YieldStats {
                apy_bps,
                total_distributed,
                last_distribution,
            }),
            is_paused,
            bump,
        })
    }

    /// Hex form of the current merkle root
    pub fn merkle_root_hex(&self) -> String {
        format_merkle_root(&self.current_merkle_root)
    }
}

/// Whole-buffer checks run before any field value is interpreted.
///
/// Current accounts are allocated at 512 bytes or more, so a buffer long
/// enough to hold the current layout cannot be a legacy account.
fn check_len(data: &[u8], layout: LayoutVersion) -> Result<(), LayoutError> {
    let required = layout.account_len();
    if data.len() < required {
        return Err(LayoutError::BufferTooShort {
            field: layout.field_at(data.len()).unwrap_or("discriminator"),
            offset: data.len(),
            required,
            actual: data.len(),
        });
    }
    if layout == LayoutVersion::Legacy && data.len() >= LayoutVersion::Current.account_len() {
        return Err(LayoutError::LayoutMismatch {
            layout,
            len: data.len(),
        });
    }
    Ok(())
}

fn read_timestamp(
    reader: &mut FieldReader,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, LayoutError> {
    let seconds = reader.read_i64_le(field)?;
    decode_timestamp(field, seconds)
}
