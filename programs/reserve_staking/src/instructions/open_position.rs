//! Open position instruction handler.
//!
//! Locks tokens into a new stake position and its escrow vault.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PositionOpened;
use crate::state::{Escrow, RewardPool, StakePosition};

/// Accounts required for opening a position.
///
/// The pool is read-only here: opening a position never touches the reserve.
#[derive(Accounts)]
#[instruction(position_id: u64)]
pub struct OpenPosition<'info> {
    /// The user staking tokens; becomes the position owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The reward pool the position accrues against.
    #[account(
        seeds = [REWARD_POOL_SEED],
        bump = reward_pool.bump,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub reward_pool: Box<Account<'info, RewardPool>>,

    /// The new position.
    /// SECURITY: `init` fails if this owner already used `position_id` in this pool.
    #[account(
        init,
        payer = owner,
        space = StakePosition::LEN,
        seeds = [
            STAKE_POSITION_SEED,
            reward_pool.key().as_ref(),
            owner.key().as_ref(),
            &position_id.to_le_bytes()
        ],
        bump
    )]
    pub stake_position: Box<Account<'info, StakePosition>>,

    /// Escrow vault holding the principal, controlled by the position PDA.
    #[account(
        init,
        payer = owner,
        seeds = [ESCROW_VAULT_SEED, stake_position.key().as_ref()],
        bump,
        token::mint = staking_mint,
        token::authority = stake_position
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Owner's token account the principal is taken from.
    #[account(
        mut,
        constraint = owner_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = owner_token_account.owner == owner.key() @ StakingError::Unauthorized
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,

    /// Rent sysvar.
    pub rent: Sysvar<'info, Rent>,
}

/// Open a new stake position.
///
/// # Arguments
/// * `ctx` - OpenPosition accounts context
/// * `position_id` - Owner-chosen identifier, unique per owner and pool
/// * `amount` - Amount of tokens to lock as principal
pub fn handler(ctx: Context<OpenPosition>, position_id: u64, amount: u64) -> Result<()> {
    require!(amount > 0, StakingError::ZeroAmount);

    let clock = Clock::get()?;

    // Move the principal into escrow
    let cpi_accounts = Transfer {
        from: ctx.accounts.owner_token_account.to_account_info(),
        to: ctx.accounts.escrow_vault.to_account_info(),
        authority: ctx.accounts.owner.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let stake_position_key = ctx.accounts.stake_position.key();
    let stake_position = &mut ctx.accounts.stake_position;

    stake_position.reward_pool = ctx.accounts.reward_pool.key();
    stake_position.owner = ctx.accounts.owner.key();
    stake_position.position_id = position_id;
    stake_position.principal = amount;
    stake_position.reward_accum = 0;
    stake_position.start_time = clock.unix_timestamp;
    stake_position.last_claim = clock.unix_timestamp;
    stake_position.escrow = Escrow::Held { amount };
    stake_position.bump = ctx.bumps.stake_position;
    stake_position.escrow_vault_bump = ctx.bumps.escrow_vault;

    msg!("Opened position {} with {} tokens", position_id, amount);
    msg!("Owner: {}", stake_position.owner);

    emit!(PositionOpened {
        stake_position: stake_position_key,
        owner: stake_position.owner,
        position_id,
        principal: amount,
        start_time: stake_position.start_time,
    });

    Ok(())
}
