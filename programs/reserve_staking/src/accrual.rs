//! Reward accrual.
//!
//! Rewards accrue linearly on the principal, quantized to whole days:
//!
//! `reward = principal * daily_rate_bps * whole_days / 10_000 + reward_accum`
//!
//! Claim, close and preview all go through [`compute_reward`], so the amount
//! a user sees is the amount a settlement pays.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::StakingError;
use crate::state::{RewardPool, StakePosition};

/// Whole days between `last_claim` and `now`.
///
/// A clock that reads earlier than `last_claim` yields zero days rather
/// than a negative duration.
pub fn whole_days_elapsed(last_claim: i64, now: i64) -> u64 {
    if now <= last_claim {
        return 0;
    }
    now.abs_diff(last_claim) / SECONDS_PER_DAY as u64
}

/// Total reward owed to `position` at `now`: previously accumulated reward
/// plus everything accrued over the whole days since `last_claim`.
///
/// A partial day is not lost: `last_claim` only moves on settlement, so the
/// remainder counts towards the next whole day.
pub fn compute_reward(position: &StakePosition, pool: &RewardPool, now: i64) -> Result<u64> {
    if !position.is_active() {
        return Ok(0);
    }

    let days = whole_days_elapsed(position.last_claim, now);
    if days == 0 {
        return Ok(position.reward_accum);
    }

    let newly_accrued = (position.principal as u128)
        .checked_mul(pool.daily_reward_rate_bps as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(days as u128)
        .ok_or(StakingError::MathOverflow)?
        .checked_div(BASIS_POINTS_DENOMINATOR)
        .ok_or(StakingError::MathOverflow)?;

    let newly_accrued = u64::try_from(newly_accrued).map_err(|_| StakingError::MathOverflow)?;

    let total = newly_accrued
        .checked_add(position.reward_accum)
        .ok_or(StakingError::MathOverflow)?;

    Ok(total)
}
