use anchor_lang::prelude::*;

use crate::error::StakingError;

/// Shared reward pool: a single program-wide account.
///
/// `reserve` is the only balance rewards are ever paid from. It is unsigned,
/// and every payout goes through [`RewardPool::debit_reserve`], which checks
/// and subtracts in the same call.
#[account]
#[derive(Default, Debug)]
pub struct RewardPool {
    pub admin: Pubkey,
    pub staking_mint: Pubkey,
    pub reserve_vault: Pubkey,

    pub daily_reward_rate_bps: u16,

    pub reserve: u64,
    pub total_deposited: u64,
    pub total_distributed: u64,

    pub created_at: i64,
    pub last_updated: i64,

    pub reserve_vault_bump: u8,
    pub bump: u8,
}

impl RewardPool {
    pub const LEN: usize = 8
        + (32 * 3)
        + 2
        + (8 * 3)
        + (8 * 2)
        + 2;

    /// Absorb `amount` into the reserve. Deposits are not tracked per depositor.
    pub fn credit_reserve(&mut self, amount: u64) -> Result<u64> {
        let reserve = self
            .reserve
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.reserve = reserve;
        self.total_deposited = total_deposited;
        Ok(reserve)
    }

    /// Fails with `InsufficientReserve` and leaves the pool untouched if the
    /// reserve cannot cover `amount`.
    pub fn debit_reserve(&mut self, amount: u64) -> Result<u64> {
        let reserve = self
            .reserve
            .checked_sub(amount)
            .ok_or(StakingError::InsufficientReserve)?;
        let total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;

        self.reserve = reserve;
        self.total_distributed = total_distributed;
        Ok(reserve)
    }
}
