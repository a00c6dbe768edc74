use crate::constants::{LAMPORTS_PER_SOL, MAX_TOKENS_PER_PURCHASE, PROOF_STALENESS_SECONDS};
use crate::error::{MathError, PurchaseError};
use crate::state::ProtocolState;
use crate::utils::u64_to_dec9;
use chrono::{DateTime, Utc};
use std::fmt;

/// Reserve coverage of the circulating supply
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolvencyRatio {
    /// No supply outstanding
    Infinite,
    Finite(f64),
}

impl SolvencyRatio {
    pub fn as_f64(self) -> f64 {
        match self {
            SolvencyRatio::Infinite => f64::INFINITY,
            SolvencyRatio::Finite(ratio) => ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solvency {
    pub is_solvent: bool,
    pub ratio: SolvencyRatio,
}

/// Compares proven physical reserves against token supply.
///
/// Exact parity counts as solvent. With no supply the protocol is trivially
/// solvent and the ratio is [`SolvencyRatio::Infinite`].
pub fn solvency(total_supply: u64, proven_reserves: u64) -> Solvency {
    if total_supply == 0 {
        return Solvency {
            is_solvent: true,
            ratio: SolvencyRatio::Infinite,
        };
    }

    Solvency {
        is_solvent: proven_reserves >= total_supply,
        ratio: SolvencyRatio::Finite(proven_reserves as f64 / total_supply as f64),
    }
}

/// SOL owed for a purchase, kept in lamports until displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolCost {
    pub lamports: u64,
}

impl SolCost {
    /// Value in SOL; the only lossy step
    pub fn as_sol(&self) -> f64 {
        self.lamports as f64 / LAMPORTS_PER_SOL as f64
    }
}

impl fmt::Display for SolCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", u64_to_dec9(self.lamports))
    }
}

/// Cost of `amount` tokens at `price_lamports` each, computed the way the
/// program does (`checked_mul`) so a quote never disagrees with the charge.
pub fn sol_cost(amount: u64, price_lamports: u64) -> Result<SolCost, MathError> {
    let lamports = price_lamports
        .checked_mul(amount)
        .ok_or(MathError::Overflow)?;
    Ok(SolCost { lamports })
}

/// Rejects purchases the program would refuse, before anything is signed.
///
/// Mirrors the `buy_w3b` guards: pause flag, unset price, per-transaction cap
/// and cost overflow. Re-fetch the state right before calling this; the price
/// may change between quote and purchase.
pub fn check_purchase(state: &ProtocolState, amount: u64) -> Result<SolCost, PurchaseError> {
    if state.is_paused {
        return Err(PurchaseError::ProtocolPaused);
    }
    if state.price_lamports == 0 {
        return Err(PurchaseError::PriceNotSet);
    }
    if amount > MAX_TOKENS_PER_PURCHASE {
        return Err(PurchaseError::ExceedsTransactionCap {
            amount,
            cap: MAX_TOKENS_PER_PURCHASE,
        });
    }
    Ok(sol_cost(amount, state.price_lamports)?)
}

/// Whether the reserve proof is too old for the program to mint against.
///
/// A proof that was never submitted is stale.
pub fn is_proof_stale(state: &ProtocolState, now: DateTime<Utc>) -> bool {
    match state.last_proof_timestamp {
        Some(proven_at) => (now - proven_at).num_seconds() >= PROOF_STALENESS_SECONDS,
        None => true,
    }
}

/// Tokens that could still be minted before supply exceeds proven reserves
pub fn mintable_headroom(state: &ProtocolState) -> u64 {
    state.proven_reserves.saturating_sub(state.total_supply)
}
