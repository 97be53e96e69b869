use anchor_lang::prelude::*;

use crate::accrual::compute_reward;
use crate::constants::*;
use crate::error::StakingError;
use crate::state::{RewardPool, StakePosition};

/// Read-only view of a position's settleable reward.
#[derive(Accounts)]
pub struct PreviewReward<'info> {
    #[account(
        seeds = [REWARD_POOL_SEED],
        bump = reward_pool.bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    #[account(has_one = reward_pool @ StakingError::PoolMismatch)]
    pub stake_position: Account<'info, StakePosition>,
}

pub fn handler(ctx: Context<PreviewReward>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let reward = compute_reward(&ctx.accounts.stake_position, &ctx.accounts.reward_pool, now)?;

    msg!("Position {} reward at {}: {}", ctx.accounts.stake_position.position_id, now, reward);

    Ok(reward)
}
