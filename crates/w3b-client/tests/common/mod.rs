#![allow(dead_code)]

use async_trait::async_trait;
use solana_sdk::{pubkey::Pubkey, signature::Keypair, signer::Signer};
use std::collections::HashMap;
use w3b_client::constants::{discriminators, W3B_PROGRAM_ID};
use w3b_client::{AccountSource, ClientConfig, ClientError, FetchedAccount, ProtocolClient};

// ---------------------------------------------------------------------------
// Anchor discriminators
// ---------------------------------------------------------------------------
pub fn anchor_discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let preimage = format!("{}:{}", namespace, name);
    let hash = solana_sdk::hash::hash(preimage.as_bytes());
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&hash.to_bytes()[..8]);
    disc
}

pub fn ix_discriminator(name: &str) -> [u8; 8] {
    anchor_discriminator("global", name)
}

pub fn new_pubkey() -> Pubkey {
    Keypair::new().pubkey()
}

// ---------------------------------------------------------------------------
// Synthetic protocol state accounts
// ---------------------------------------------------------------------------
pub const LEGACY_LEN: usize = 210;
pub const CURRENT_LEN: usize = 332;

/// Known field values written at the offsets the program uses
#[derive(Debug, Clone)]
pub struct StateFixture {
    pub authority: Pubkey,
    pub operator: Pubkey,
    pub token_mint: Pubkey,
    pub treasury: Pubkey,
    pub total_supply: u64,
    pub total_burned: u64,
    pub merkle_root: [u8; 32],
    pub proven_reserves: u64,
    pub last_root_update: i64,
    pub last_proof_timestamp: i64,
    pub price_lamports: u64,
    pub sol_receiver: Pubkey,
    pub yield_apy_bps: u16,
    pub total_yield_distributed: u64,
    pub last_yield_distribution: i64,
    pub is_paused: bool,
    pub bump: u8,
}

impl StateFixture {
    pub fn sample() -> Self {
        let mut merkle_root = [0u8; 32];
        for (i, byte) in merkle_root.iter_mut().enumerate() {
            *byte = i as u8;
        }
        Self {
            authority: new_pubkey(),
            operator: new_pubkey(),
            token_mint: new_pubkey(),
            treasury: new_pubkey(),
            total_supply: 1_250,
            total_burned: 75,
            merkle_root,
            proven_reserves: 1_300,
            last_root_update: 1_699_990_000,
            last_proof_timestamp: 1_700_000_000,
            price_lamports: 350_000_000,
            sol_receiver: new_pubkey(),
            yield_apy_bps: 350,
            total_yield_distributed: 42,
            last_yield_distribution: 1_700_100_000,
            is_paused: false,
            bump: 254,
        }
    }
}

fn put(buf: &mut [u8], offset: usize, bytes: &[u8]) {
    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
}

pub fn legacy_state_bytes(f: &StateFixture) -> Vec<u8> {
    let mut buf = vec![0u8; LEGACY_LEN];
    put(&mut buf, 0, &discriminators::PROTOCOL_STATE_ACCOUNT);
    put(&mut buf, 8, f.authority.as_ref());
    put(&mut buf, 40, f.token_mint.as_ref());
    put(&mut buf, 72, f.treasury.as_ref());
    put(&mut buf, 104, &f.merkle_root);
    put(&mut buf, 136, &f.last_root_update.to_le_bytes());
    put(&mut buf, 144, &f.last_proof_timestamp.to_le_bytes());
    put(&mut buf, 152, &f.proven_reserves.to_le_bytes());
    put(&mut buf, 160, &f.total_supply.to_le_bytes());
    buf[168] = f.is_paused as u8;
    buf[169] = f.bump;
    put(&mut buf, 170, &f.price_lamports.to_le_bytes());
    put(&mut buf, 178, f.sol_receiver.as_ref());
    buf
}

pub fn current_state_bytes(f: &StateFixture) -> Vec<u8> {
    let mut buf = vec![0u8; CURRENT_LEN];
    put(&mut buf, 0, &discriminators::PROTOCOL_STATE_ACCOUNT);
    put(&mut buf, 8, f.authority.as_ref());
    put(&mut buf, 40, f.operator.as_ref());
    put(&mut buf, 72, f.token_mint.as_ref());
    put(&mut buf, 104, f.treasury.as_ref());
    put(&mut buf, 136, &f.total_supply.to_le_bytes());
    put(&mut buf, 144, &f.total_burned.to_le_bytes());
    put(&mut buf, 152, &f.merkle_root);
    put(&mut buf, 184, &f.proven_reserves.to_le_bytes());
    put(&mut buf, 192, &f.last_root_update.to_le_bytes());
    put(&mut buf, 200, &f.last_proof_timestamp.to_le_bytes());
    put(&mut buf, 208, &f.price_lamports.to_le_bytes());
    put(&mut buf, 216, f.sol_receiver.as_ref());
    put(&mut buf, 248, &f.yield_apy_bps.to_le_bytes());
    put(&mut buf, 250, &f.total_yield_distributed.to_le_bytes());
    put(&mut buf, 258, &f.last_yield_distribution.to_le_bytes());
    buf[266] = f.is_paused as u8;
    buf[267] = f.bump;
    // reserved tail left as garbage to prove it is never read
    for byte in &mut buf[268..] {
        *byte = 0xee;
    }
    buf
}

// ---------------------------------------------------------------------------
// Synthetic auxiliary accounts
// ---------------------------------------------------------------------------
pub fn user_profile_bytes(user: &Pubkey, total_volume: u64, points: u64, tier: u8) -> Vec<u8> {
    let mut buf = discriminators::USER_PROFILE_ACCOUNT.to_vec();
    buf.extend_from_slice(user.as_ref());
    buf.extend_from_slice(&total_volume.to_le_bytes());
    buf.extend_from_slice(&points.to_le_bytes());
    buf.push(tier);
    buf.extend_from_slice(&3u64.to_le_bytes()); // total_redeemed
    buf.extend_from_slice(&0u64.to_le_bytes()); // total_fulfilled
    buf.extend_from_slice(&0u64.to_le_bytes()); // fulfiller_rewards
    buf.push(251);
    buf
}

pub fn redemption_request_bytes(user: &Pubkey, request_id: u64, amount: u64, status: u8) -> Vec<u8> {
    let mut buf = discriminators::REDEMPTION_REQUEST_ACCOUNT.to_vec();
    buf.extend_from_slice(user.as_ref());
    buf.extend_from_slice(&request_id.to_le_bytes());
    buf.extend_from_slice(&amount.to_le_bytes());
    buf.push(status);
    buf.extend_from_slice(&[0u8; 32]); // fulfiller
    buf.extend_from_slice(&1_700_000_000i64.to_le_bytes()); // created_at
    buf.extend_from_slice(&0i64.to_le_bytes()); // claimed_at
    buf.extend_from_slice(&0i64.to_le_bytes()); // confirmed_at
    buf.push(250);
    buf
}

/// Packed SPL token account (165 bytes, initialized, no extensions)
pub fn token_account_bytes(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut buf = vec![0u8; 165];
    put(&mut buf, 0, mint.as_ref());
    put(&mut buf, 32, owner.as_ref());
    put(&mut buf, 64, &amount.to_le_bytes());
    buf[108] = 1; // AccountState::Initialized
    buf
}

// ---------------------------------------------------------------------------
// Mock account source
// ---------------------------------------------------------------------------
#[derive(Default)]
pub struct MockSource {
    accounts: HashMap<Pubkey, FetchedAccount>,
    offline: bool,
}

impl MockSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every fetch fails with a transport error
    pub fn offline() -> Self {
        Self {
            accounts: HashMap::new(),
            offline: true,
        }
    }

    pub fn with_account(mut self, address: Pubkey, owner: Pubkey, data: Vec<u8>) -> Self {
        self.accounts.insert(
            address,
            FetchedAccount {
                owner,
                lamports: 1_000_000_000,
                data,
            },
        );
        self
    }

    pub fn with_program_account(self, address: Pubkey, data: Vec<u8>) -> Self {
        self.with_account(address, W3B_PROGRAM_ID, data)
    }
}

#[async_trait]
impl AccountSource for MockSource {
    async fn fetch_account(&self, address: &Pubkey) -> Result<Option<FetchedAccount>, ClientError> {
        if self.offline {
            return Err(ClientError::Network(Box::new(std::io::Error::other(
                "connection refused",
            ))));
        }
        Ok(self.accounts.get(address).cloned())
    }
}

pub fn test_config() -> ClientConfig {
    ClientConfig::for_program("http://127.0.0.1:8899", W3B_PROGRAM_ID).unwrap()
}

pub fn client_with(source: MockSource) -> ProtocolClient<MockSource> {
    ProtocolClient::new(source, test_config())
}
