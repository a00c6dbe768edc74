//! Explicit client configuration.
//!
//! Nothing is read from the environment: every network endpoint and address is
//! a value handed to [`crate::client::ProtocolClient`], so several
//! configurations can live side by side in one process.

use crate::constants::W3B_PROGRAM_ID;
use crate::error::ConfigError;
use crate::pda::find_protocol_state_pda;
use crate::state::LayoutVersion;
use anchor_lang::prelude::Pubkey;
use serde::Deserialize;
use solana_commitment_config::CommitmentConfig;
use std::str::FromStr;

/// Named Solana clusters with their public RPC endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cluster {
    Mainnet,
    Devnet,
    Localnet,
}

impl Cluster {
    pub fn rpc_url(self) -> &'static str {
        match self {
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
    /// Address of the protocol state account
    pub protocol_state: Pubkey,
    /// Layout the state account is expected to have
    pub layout: LayoutVersion,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    cluster: Option<Cluster>,
    rpc_url: Option<String>,
    commitment: Option<String>,
    program_id: Option<String>,
    protocol_state: Option<String>,
    #[serde(default)]
    layout: LayoutVersion,
}

impl ClientConfig {
    /// Deployed program on `cluster`, confirmed commitment, current layout
    pub fn new(cluster: Cluster) -> Result<Self, ConfigError> {
        Self::for_program(cluster.rpc_url(), W3B_PROGRAM_ID)
    }

    /// Any deployment of the program; the state address is derived
    pub fn for_program(rpc_url: impl Into<String>, program_id: Pubkey) -> Result<Self, ConfigError> {
        let (protocol_state, _) = find_protocol_state_pda(&program_id)?;
        Ok(Self {
            rpc_url: rpc_url.into(),
            commitment: CommitmentConfig::confirmed(),
            program_id,
            protocol_state,
            layout: LayoutVersion::Current,
        })
    }

    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn with_layout(mut self, layout: LayoutVersion) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_protocol_state(mut self, protocol_state: Pubkey) -> Self {
        self.protocol_state = protocol_state;
        self
    }

    /// Parses a TOML document such as
    ///
    /// ```toml
    /// cluster = "devnet"
    /// commitment = "finalized"
    /// layout = "legacy"
    /// ```
    ///
    /// `rpc_url` overrides the cluster endpoint; `program_id` defaults to the
    /// deployed program and `protocol_state` to its PDA.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(source)?;

        let rpc_url = match (raw.rpc_url, raw.cluster) {
            (Some(url), _) => url,
            (None, Some(cluster)) => cluster.rpc_url().to_string(),
            (None, None) => return Err(ConfigError::MissingEndpoint),
        };
        let program_id = match raw.program_id {
            Some(value) => parse_address("program_id", &value)?,
            None => W3B_PROGRAM_ID,
        };

        let mut config = Self::for_program(rpc_url, program_id)?.with_layout(raw.layout);
        if let Some(value) = raw.protocol_state {
            config.protocol_state = parse_address("protocol_state", &value)?;
        }
        if let Some(value) = raw.commitment {
            config.commitment = parse_commitment(&value)?;
        }
        Ok(config)
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Pubkey, ConfigError> {
    Pubkey::from_str(value).map_err(|_| ConfigError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig, ConfigError> {
    match value {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(ConfigError::UnknownValue {
            kind: "commitment",
            value: other.to_string(),
        }),
    }
}
