use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub reward_pool: Pubkey,
    pub admin: Pubkey,
    pub staking_mint: Pubkey,
    pub daily_reward_rate_bps: u16,
}

#[event]
pub struct PositionOpened {
    pub stake_position: Pubkey,
    pub owner: Pubkey,
    pub position_id: u64,
    pub principal: u64,
    pub start_time: i64,
}

#[event]
pub struct ReserveDeposited {
    pub reward_pool: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
    pub new_reserve: u64,
}

#[event]
pub struct RewardClaimed {
    pub stake_position: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub remaining_reserve: u64,
}

#[event]
pub struct PositionClosed {
    pub stake_position: Pubkey,
    pub owner: Pubkey,
    pub principal: u64,
    pub reward: u64,
    pub remaining_reserve: u64,
}
