//! Close position instruction handler.
//!
//! Pays out remaining rewards, returns the escrowed principal, and deletes
//! the position together with its escrow vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PositionClosed;
use crate::state::{RewardPool, StakePosition};

/// Accounts required for closing a position.
#[derive(Accounts)]
pub struct ClosePosition<'info> {
    /// The position owner; receives principal, reward and rent.
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

    /// The position being closed; deleted when the instruction completes.
    #[account(
        mut,
        close = owner,
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

    /// Escrow vault holding the principal. Its full balance is returned.
    #[account(
        mut,
        seeds = [ESCROW_VAULT_SEED, stake_position.key().as_ref()],
        bump = stake_position.escrow_vault_bump
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Owner's token account for receiving principal and rewards.
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

/// Close a position.
///
/// Uses the same accrual as `claim`; a zero reward is not an error here.
/// Fails with `InsufficientReserve` if a non-zero reward cannot be covered,
/// in which case the position stays open with its escrow intact.
pub fn handler(ctx: Context<ClosePosition>) -> Result<()> {
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;
    let owner = ctx.accounts.owner.key();

    let accounts = &mut *ctx.accounts;
    let settlement = accounts
        .stake_position
        .settle_close(&mut accounts.reward_pool, &owner, now)?;
    accounts.reward_pool.last_updated = now;

    // Reward leg, signed by the pool
    if settlement.reward > 0 {
        let pool_seeds = &[REWARD_POOL_SEED, &[accounts.reward_pool.bump]];
        let pool_signer = &[&pool_seeds[..]];

        let cpi_accounts = Transfer {
            from: accounts.reserve_vault.to_account_info(),
            to: accounts.owner_token_account.to_account_info(),
            authority: accounts.reward_pool.to_account_info(),
        };
        let cpi_program = accounts.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, pool_signer);
        token::transfer(cpi_ctx, settlement.reward)?;
    }

    // Principal leg and escrow vault teardown, signed by the position.
    // The whole vault balance goes out so the close below always finds it
    // empty, including tokens sent to the vault by anyone else.
    let reward_pool_key = accounts.reward_pool.key();
    let position_id_bytes = accounts.stake_position.position_id.to_le_bytes();
    let position_seeds = &[
        STAKE_POSITION_SEED,
        reward_pool_key.as_ref(),
        owner.as_ref(),
        &position_id_bytes,
        &[accounts.stake_position.bump],
    ];
    let position_signer = &[&position_seeds[..]];

    let cpi_accounts = Transfer {
        from: accounts.escrow_vault.to_account_info(),
        to: accounts.owner_token_account.to_account_info(),
        authority: accounts.stake_position.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, position_signer);
    token::transfer(cpi_ctx, accounts.escrow_vault.amount)?;

    let cpi_accounts = CloseAccount {
        account: accounts.escrow_vault.to_account_info(),
        destination: accounts.owner.to_account_info(),
        authority: accounts.stake_position.to_account_info(),
    };
    let cpi_program = accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, position_signer);
    token::close_account(cpi_ctx)?;

    msg!(
        "Closed position {}: returned {} principal, paid {} reward",
        accounts.stake_position.position_id,
        settlement.principal,
        settlement.reward
    );
    msg!("Remaining reserve: {}", accounts.reward_pool.reserve);

    emit!(PositionClosed {
        stake_position: accounts.stake_position.key(),
        owner,
        principal: settlement.principal,
        reward: settlement.reward,
        remaining_reserve: accounts.reward_pool.reserve,
    });

    Ok(())
}
