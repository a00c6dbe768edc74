//! Fee math for paying through the privacy pool.
//!
//! The pool withdraws `gross` and keeps `ceil(gross * rate) + fixed_fee`. To
//! land an exact `net` at the recipient the payer must deposit the inverse,
//! rounded up at every step: rounding down leaves the final withdrawal one
//! unit short and it fails on-chain.

use crate::constants::MAX_BASIS_POINTS;
use crate::error::MathError;
use crate::utils::{ceil_div_u128, mul_div_ceil};

/// Proportional plus fixed fee charged by the pool relayer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Proportional rate in basis points
    pub rate_bps: u16,
    /// Flat fee in the smallest unit of the paid asset
    pub fixed_fee: u64,
}

/// Amounts for one pool payment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeQuote {
    /// Amount the payer deposits
    pub gross: u64,
    /// Amount the pool keeps
    pub fee: u64,
    /// Amount the recipient receives, never below the requested net
    pub net: u64,
}

impl FeeSchedule {
    pub fn new(rate_bps: u16, fixed_fee: u64) -> Result<Self, MathError> {
        if rate_bps >= MAX_BASIS_POINTS {
            return Err(MathError::InvalidFeeRate(rate_bps));
        }
        Ok(Self {
            rate_bps,
            fixed_fee,
        })
    }

    /// Forward fee: `ceil(gross * rate) + fixed_fee`
    pub fn fee_for_gross(&self, gross: u64) -> Result<u64, MathError> {
        mul_div_ceil(gross, self.rate_bps as u64, MAX_BASIS_POINTS as u64)
            .and_then(|fee| fee.checked_add(self.fixed_fee))
            .ok_or(MathError::Overflow)
    }

    /// Inverse: `ceil((net + fixed_fee) / (1 - rate))`
    pub fn gross_for_net(&self, net: u64) -> Result<u64, MathError> {
        if self.rate_bps >= MAX_BASIS_POINTS {
            return Err(MathError::InvalidFeeRate(self.rate_bps));
        }
        let required = (net as u128)
            .checked_add(self.fixed_fee as u128)
            .and_then(|v| v.checked_mul(MAX_BASIS_POINTS as u128))
            .ok_or(MathError::Overflow)?;
        let keep_bps = (MAX_BASIS_POINTS - self.rate_bps) as u128;
        let gross = ceil_div_u128(required, keep_bps).ok_or(MathError::Overflow)?;
        u64::try_from(gross).map_err(|_| MathError::Overflow)
    }

    /// Full quote for delivering `net` to the recipient
    pub fn quote_for_net(&self, net: u64) -> Result<FeeQuote, MathError> {
        let gross = self.gross_for_net(net)?;
        let fee = self.fee_for_gross(gross)?;
        let received = gross.checked_sub(fee).ok_or(MathError::Overflow)?;
        debug_assert!(received >= net);
        Ok(FeeQuote {
            gross,
            fee,
            net: received,
        })
    }
}
