//! Program constants for the Reserve Staking program.
//!
//! PDA seeds, the accrual period, and the configured reward rate.

/// Seed for deriving the reward pool PDA; the pool is a single program-wide account
pub const REWARD_POOL_SEED: &[u8] = b"reward_pool";

/// Seed for deriving the reserve vault PDA
pub const RESERVE_VAULT_SEED: &[u8] = b"reserve_vault";

/// Seed for deriving stake position PDAs
pub const STAKE_POSITION_SEED: &[u8] = b"stake_position";

/// Seed for deriving the per-position escrow vault PDA
pub const ESCROW_VAULT_SEED: &[u8] = b"escrow_vault";

/// Number of seconds in a day; rewards accrue in whole days only
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Basis points denominator (100% = 10000 basis points)
pub const BASIS_POINTS_DENOMINATOR: u128 = 10_000;

/// Daily reward rate set at initialization (0.10% per day)
pub const DAILY_REWARD_RATE_BPS: u16 = 10;
