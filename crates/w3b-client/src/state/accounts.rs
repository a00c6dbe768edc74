use crate::constants::{discriminators, ANCHOR_DISCRIMINATOR_LEN};
use crate::error::LayoutError;
use crate::state::format::decode_timestamp;
use anchor_lang::prelude::*;
use chrono::{DateTime, Utc};

/// Loyalty tier stored on a user profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProfileTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl ProfileTier {
    /// Tier the program assigns for a points balance after a purchase
    pub fn for_points(points: u64) -> Self {
        match points {
            p if p > 2000 => ProfileTier::Platinum,
            p if p > 500 => ProfileTier::Gold,
            p if p > 100 => ProfileTier::Silver,
            _ => ProfileTier::Bronze,
        }
    }
}

impl TryFrom<u8> for ProfileTier {
    type Error = LayoutError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(ProfileTier::Bronze),
            1 => Ok(ProfileTier::Silver),
            2 => Ok(ProfileTier::Gold),
            3 => Ok(ProfileTier::Platinum),
            value => Err(LayoutError::UnknownTag {
                kind: "profile tier",
                value,
            }),
        }
    }
}

/// Lifecycle of a burn-to-redeem request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionStatus {
    Pending,
    Claimed,
    Shipped,
    Confirmed,
    Cancelled,
}

impl TryFrom<u8> for RedemptionStatus {
    type Error = LayoutError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(RedemptionStatus::Pending),
            1 => Ok(RedemptionStatus::Claimed),
            2 => Ok(RedemptionStatus::Shipped),
            3 => Ok(RedemptionStatus::Confirmed),
            4 => Ok(RedemptionStatus::Cancelled),
            value => Err(LayoutError::UnknownTag {
                kind: "redemption status",
                value,
            }),
        }
    }
}

#[derive(AnchorDeserialize)]
struct RawUserProfile {
    user: Pubkey,
    total_volume: u64,
    points: u64,
    tier: u8,
    total_redeemed: u64,
    total_fulfilled: u64,
    fulfiller_rewards: u64,
    bump: u8,
}

#[derive(AnchorDeserialize)]
struct RawRedemptionRequest {
    user: Pubkey,
    request_id: u64,
    amount: u64,
    status: u8,
    fulfiller: Pubkey,
    created_at: i64,
    claimed_at: i64,
    confirmed_at: i64,
    bump: u8,
}

/// Points and volume tracked per user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user: Pubkey,
    pub total_volume: u64,
    pub points: u64,
    pub tier: ProfileTier,
    pub total_redeemed: u64,
    pub total_fulfilled: u64,
    pub fulfiller_rewards: u64,
    pub bump: u8,
}

impl UserProfile {
    pub fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let raw: RawUserProfile = deserialize_account(
            data,
            "UserProfile",
            discriminators::USER_PROFILE_ACCOUNT,
        )?;
        Ok(Self {
            user: raw.user,
            total_volume: raw.total_volume,
            points: raw.points,
            tier: ProfileTier::try_from(raw.tier)?,
            total_redeemed: raw.total_redeemed,
            total_fulfilled: raw.total_fulfilled,
            fulfiller_rewards: raw.fulfiller_rewards,
            bump: raw.bump,
        })
    }
}

/// A burn-to-redeem order for physical delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionRequest {
    pub user: Pubkey,
    pub request_id: u64,
    pub amount: u64,
    pub status: RedemptionStatus,
    /// Default pubkey until the request is claimed
    pub fulfiller: Pubkey,
    pub created_at: Option<DateTime<Utc>>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub bump: u8,
}

impl RedemptionRequest {
    pub fn decode(data: &[u8]) -> std::result::Result<Self, LayoutError> {
        let raw: RawRedemptionRequest = deserialize_account(
            data,
            "RedemptionRequest",
            discriminators::REDEMPTION_REQUEST_ACCOUNT,
        )?;
        Ok(Self {
            user: raw.user,
            request_id: raw.request_id,
            amount: raw.amount,
            status: RedemptionStatus::try_from(raw.status)?,
            fulfiller: raw.fulfiller,
            created_at: decode_timestamp("created_at", raw.created_at)?,
            claimed_at: decode_timestamp("claimed_at", raw.claimed_at)?,
            confirmed_at: decode_timestamp("confirmed_at", raw.confirmed_at)?,
            bump: raw.bump,
        })
    }

    /// Whether a fulfiller can still claim this request
    pub fn is_claimable(&self) -> bool {
        self.status == RedemptionStatus::Pending
    }
}

fn deserialize_account<T: AnchorDeserialize>(
    data: &[u8],
    account: &'static str,
    expected: [u8; 8],
) -> std::result::Result<T, LayoutError> {
    if data.len() < ANCHOR_DISCRIMINATOR_LEN {
        return Err(LayoutError::BufferTooShort {
            field: "discriminator",
            offset: 0,
            required: ANCHOR_DISCRIMINATOR_LEN,
            actual: data.len(),
        });
    }
    let (head, mut body) = data.split_at(ANCHOR_DISCRIMINATOR_LEN);
    let mut found = [0u8; 8];
    found.copy_from_slice(head);
    if found != expected {
        return Err(LayoutError::DiscriminatorMismatch {
            account,
            expected,
            found,
        });
    }
    T::deserialize(&mut body).map_err(|err| LayoutError::Deserialize {
        account,
        reason: err.to_string(),
    })
}
