//! Read-only access to live protocol accounts.
//!
//! Every call performs one fresh read through the [`AccountSource`]; there is
//! no caching, retrying or request de-duplication. A missing account is a
//! legitimate "not initialized yet" answer and comes back as `Ok(None)`, while
//! transport failures propagate as [`ClientError::Network`].

use crate::config::ClientConfig;
use crate::constants::{TOKEN_2022_PROGRAM_ID, TOKEN_PROGRAM_ID};
use crate::error::{ClientError, LayoutError, Result};
use crate::instructions::ProtocolAccounts;
use crate::pda::{find_redemption_request_pda, find_user_profile_pda};
use crate::state::{ProtocolState, RedemptionRequest, UserProfile};
use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;
use log::{debug, warn};
use solana_rpc_client::nonblocking::rpc_client::RpcClient;
use spl_token_2022::extension::StateWithExtensions;

/// Raw account as returned by a ledger read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedAccount {
    pub owner: Pubkey,
    pub lamports: u64,
    pub data: Vec<u8>,
}

/// Anything that can read one account by address
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// `Ok(None)` when no account exists at `address`
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<FetchedAccount>>;
}

#[async_trait]
impl AccountSource for RpcClient {
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<FetchedAccount>> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await
            .map_err(|err| ClientError::Network(Box::new(err)))?;

        Ok(response.value.map(|account| FetchedAccount {
            owner: account.owner,
            lamports: account.lamports,
            data: account.data,
        }))
    }
}

pub struct ProtocolClient<S> {
    source: S,
    config: ClientConfig,
}

impl ProtocolClient<RpcClient> {
    /// Client over a nonblocking RPC connection built from `config`
    pub fn from_config(config: ClientConfig) -> Self {
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);
        Self::new(rpc, config)
    }
}

impl<S: AccountSource> ProtocolClient<S> {
    pub fn new(source: S, config: ClientConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and decodes the protocol state account.
    ///
    /// # Errors
    /// `Network` on transport failure, `UnexpectedOwner` if the address holds
    /// an account of another program, `Layout` if the bytes do not decode
    /// with the configured layout.
    pub async fn fetch_state(&self) -> Result<Option<ProtocolState>> {
        let address = self.config.protocol_state;
        let Some(account) = self.fetch_program_account(&address).await? else {
            debug!("protocol state {address} not initialized");
            return Ok(None);
        };

        let state = ProtocolState::decode(&account.data, self.config.layout)?;
        debug!(
            "decoded protocol state {address}: supply={} reserves={} price={} paused={}",
            state.total_supply, state.proven_reserves, state.price_lamports, state.is_paused
        );
        Ok(Some(state))
    }

    /// Current price of one W3B in lamports
    pub async fn fetch_price_lamports(&self) -> Result<Option<u64>> {
        Ok(self.fetch_state().await?.map(|state| state.price_lamports))
    }

    /// Account receiving SOL from purchases
    pub async fn fetch_sol_receiver(&self) -> Result<Option<Pubkey>> {
        Ok(self.fetch_state().await?.map(|state| state.sol_receiver))
    }

    pub async fn fetch_user_profile(&self, user: &Pubkey) -> Result<Option<UserProfile>> {
        let (address, _) = find_user_profile_pda(&self.config.program_id, user)?;
        match self.fetch_program_account(&address).await? {
            Some(account) => Ok(Some(UserProfile::decode(&account.data)?)),
            None => Ok(None),
        }
    }

    pub async fn fetch_redemption_request(
        &self,
        user: &Pubkey,
        request_id: u64,
    ) -> Result<Option<RedemptionRequest>> {
        let (address, _) = find_redemption_request_pda(&self.config.program_id, user, request_id)?;
        match self.fetch_program_account(&address).await? {
            Some(account) => Ok(Some(RedemptionRequest::decode(&account.data)?)),
            None => Ok(None),
        }
    }

    /// Raw amount held by an SPL Token or Token-2022 account.
    ///
    /// An account owned by neither token program is `UnexpectedOwner`, with
    /// Token-2022 reported as the expected owner.
    pub async fn fetch_token_balance(&self, token_account: &Pubkey) -> Result<Option<u64>> {
        let Some(account) = self.source.fetch_account(token_account).await? else {
            return Ok(None);
        };
        if account.owner != TOKEN_2022_PROGRAM_ID && account.owner != TOKEN_PROGRAM_ID {
            warn!(
                "token account {token_account} owned by non-token program {}",
                account.owner
            );
            return Err(ClientError::UnexpectedOwner {
                address: *token_account,
                owner: account.owner,
                expected: TOKEN_2022_PROGRAM_ID,
            });
        }
        let unpacked = StateWithExtensions::<spl_token_2022::state::Account>::unpack(&account.data)
            .map_err(|err| LayoutError::Deserialize {
                account: "TokenAccount",
                reason: err.to_string(),
            })?;
        Ok(Some(unpacked.base.amount))
    }

    /// Instruction accounts for the configured deployment and a decoded state
    pub fn protocol_accounts(&self, state: &ProtocolState) -> ProtocolAccounts {
        ProtocolAccounts::from_state(self.config.program_id, self.config.protocol_state, state)
    }

    async fn fetch_program_account(&self, address: &Pubkey) -> Result<Option<FetchedAccount>> {
        let Some(account) = self.source.fetch_account(address).await? else {
            return Ok(None);
        };
        if account.owner != self.config.program_id {
            warn!(
                "account {address} owned by {} instead of {}",
                account.owner, self.config.program_id
            );
            return Err(ClientError::UnexpectedOwner {
                address: *address,
                owner: account.owner,
                expected: self.config.program_id,
            });
        }
        Ok(Some(account))
    }
}
