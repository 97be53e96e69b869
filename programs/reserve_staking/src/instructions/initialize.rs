/// Initialize instruction handler.
///
/// Creates the reward pool and its reserve vault.
///
/// ## Security Guarantees
/// - Pool is a PDA with a constant seed, so it can be created only once
/// - Reserve vault is a PDA owned by the reward pool
/// - Admin, mint and reward rate are fixed at creation

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::events::PoolInitialized;
use crate::state::RewardPool;

/// Accounts required for pool initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The initializer; becomes the permanent pool admin.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The reward pool account to be created.
    /// SECURITY: `init` on a constant-seed PDA fails if the pool already exists.
    #[account(
        init,
        payer = authority,
        space = RewardPool::LEN,
        seeds = [REWARD_POOL_SEED],
        bump
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The mint for the staked and rewarded token.
    pub staking_mint: Account<'info, Mint>,

    /// The vault that will hold the reward reserve.
    /// SECURITY: PDA of the pool, authority set to the pool PDA.
    #[account(
        init,
        payer = authority,
        seeds = [RESERVE_VAULT_SEED, reward_pool.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = reward_pool
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,

    /// Token program for token account operations.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar for rent-exempt calculations.
    pub rent: Sysvar<'info, Rent>,
}

/// Initialize the reward pool.
///
/// The reward rate is the configured `DAILY_REWARD_RATE_BPS`.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let daily_reward_rate_bps = DAILY_REWARD_RATE_BPS;
    let reward_pool_key = ctx.accounts.reward_pool.key();
    let reward_pool = &mut ctx.accounts.reward_pool;
    let clock = Clock::get()?;

    // === STATE INITIALIZATION ===

    reward_pool.admin = ctx.accounts.authority.key();
    reward_pool.staking_mint = ctx.accounts.staking_mint.key();
    reward_pool.reserve_vault = ctx.accounts.reserve_vault.key();
    reward_pool.daily_reward_rate_bps = daily_reward_rate_bps;
    reward_pool.reserve = 0;
    reward_pool.total_deposited = 0;
    reward_pool.total_distributed = 0;
    reward_pool.created_at = clock.unix_timestamp;
    reward_pool.last_updated = clock.unix_timestamp;
    reward_pool.bump = ctx.bumps.reward_pool;
    reward_pool.reserve_vault_bump = ctx.bumps.reserve_vault;

    msg!("Reward pool initialized");
    msg!("Admin: {}", reward_pool.admin);
    msg!("Mint: {}", reward_pool.staking_mint);
    msg!("Daily reward rate: {}bp", daily_reward_rate_bps);

    emit!(PoolInitialized {
        reward_pool: reward_pool_key,
        admin: reward_pool.admin,
        staking_mint: reward_pool.staking_mint,
        daily_reward_rate_bps,
    });

    Ok(())
}
