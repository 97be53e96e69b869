//! # Reserve Staking Program
//!
//! A single-token staking program. Each stake is its own position with an
//! escrowed principal; rewards accrue daily on the principal and are paid
//! from a reserve the pool admin tops up.
//!
//! ## Features
//! - Linear reward accrual, quantized to whole days
//! - Claim rewards without touching the principal
//! - Close a position to recover principal plus any unpaid reward
//! - Admin-funded reserve; every payout is checked against it
//! - Safe math with overflow protection

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod accrual;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

#[program]
pub mod reserve_staking {
    use super::*;

    /// Creates the reward pool and its reserve vault. Can run only once.
    ///
    /// The signer becomes the admin; the daily rate is `DAILY_REWARD_RATE_BPS`.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Locks `amount` tokens into a new position owned by the signer.
    ///
    /// # Arguments
    /// * `ctx` - The context containing all accounts needed for staking
    /// * `position_id` - Identifier for the new position, unique per owner
    /// * `amount` - Amount of tokens to lock
    ///
    /// # Errors
    /// Returns an error if:
    /// - Amount is zero
    /// - The owner already has a position with this id
    /// - Insufficient balance
    pub fn open_position(ctx: Context<OpenPosition>, position_id: u64, amount: u64) -> Result<()> {
        instructions::open_position::handler(ctx, position_id, amount)
    }

    /// Admin deposit into the reward reserve.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the pool admin
    /// - Amount is zero
    pub fn deposit_reserve(ctx: Context<DepositReserve>, amount: u64) -> Result<()> {
        instructions::deposit_reserve::handler(ctx, amount)
    }

    /// Claims accrued rewards, keeping the position open.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the position owner
    /// - No reward has accrued
    /// - The reserve cannot cover the reward
    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::claim::handler(ctx)
    }

    /// Pays remaining rewards, returns the principal and deletes the position.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Caller is not the position owner
    /// - The reserve cannot cover a non-zero reward
    pub fn close_position(ctx: Context<ClosePosition>) -> Result<()> {
        instructions::close_position::handler(ctx)
    }

    /// Returns the reward a settlement would pay right now.
    pub fn preview_reward(ctx: Context<PreviewReward>) -> Result<u64> {
        instructions::preview_reward::handler(ctx)
    }
}
