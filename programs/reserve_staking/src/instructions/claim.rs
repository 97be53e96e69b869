//! Claim instruction handler.
//!
//! Pays accrued rewards from the reserve without touching the principal.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::RewardClaimed;
use crate::state::{RewardPool, StakePosition};

/// Accounts required for claiming rewards.
#[derive(Accounts)]
pub struct Claim<'info> {
    /// The position owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The reward pool.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED],
        bump = reward_pool.bump,
        has_one = reserve_vault @ StakingError::ReserveVaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,

    /// The position being settled.
    #[account(
        mut,
        seeds = [
            STAKE_POSITION_SEED,
            reward_pool.key().as_ref(),
            stake_position.owner.as_ref(),
            &stake_position.position_id.to_le_bytes()
        ],
        bump = stake_position.bump,
        has_one = owner @ StakingError::Unauthorized,
        has_one = reward_pool @ StakingError::PoolMismatch
    )]
    pub stake_position: Box<Account<'info, StakePosition>>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Owner's token account for receiving rewards.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = owner_token_account.owner == owner.key() @ StakingError::Unauthorized
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// Pool's reserve vault.
    #[account(
        mut,
        seeds = [RESERVE_VAULT_SEED, reward_pool.key().as_ref()],
        bump = reward_pool.reserve_vault_bump
    )]
    pub reserve_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Claim accrued rewards.
///
/// Fails with `NothingToClaim` before the first full day and with
/// `InsufficientReserve` if the reserve cannot cover the payout.
pub fn handler(ctx: Context<Claim>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    // Checks and bookkeeping first; the transfer below reverts everything on failure
    let accounts = &mut *ctx.accounts;
    let reward = accounts
        .stake_position
        .settle_claim(&mut accounts.reward_pool, &owner, now)?;
    accounts.reward_pool.last_updated = now;

    let seeds = &[REWARD_POOL_SEED, &[accounts.reward_pool.bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: accounts.reserve_vault.to_account_info(),
        to: accounts.owner_token_account.to_account_info(),
        authority: accounts.reward_pool.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, reward)?;

    msg!("Claimed {} reward tokens", reward);
    msg!("Remaining reserve: {}", accounts.reward_pool.reserve);

    emit!(RewardClaimed {
        stake_position: accounts.stake_position.key(),
        owner,
        amount: reward,
        remaining_reserve: accounts.reward_pool.reserve,
    });

    Ok(())
}
