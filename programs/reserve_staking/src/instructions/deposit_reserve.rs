/// Deposit reserve instruction handler.
///
/// Tops up the reward reserve from the admin's token account.
///
/// ## Security Guarantees
/// - Only the pool admin can deposit
/// - Reserve vault must be the pool's PDA vault
/// - Deposits merge into the reserve; they are not tracked per depositor

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::ReserveDeposited;
use crate::state::RewardPool;

/// Accounts required for depositing into the reserve.
#[derive(Accounts)]
pub struct DepositReserve<'info> {
    /// The pool admin.
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The reward pool.
    /// SECURITY: PDA + has_one validations; `has_one = admin` is the admin check.
    #[account(
        mut,
        seeds = [REWARD_POOL_SEED],
        bump = reward_pool.bump,
        has_one = admin @ StakingError::Unauthorized,
        has_one = reserve_vault @ StakingError::ReserveVaultMismatch,
        has_one = staking_mint @ StakingError::MintMismatch
    )]
    pub reward_pool: Account<'info, RewardPool>,

    /// The staking token mint.
    pub staking_mint: Account<'info, Mint>,

    /// Admin's token account.
    #[account(
        mut,
        constraint = admin_token_account.mint == staking_mint.key() @ StakingError::MintMismatch,
        constraint = admin_token_account.owner == admin.key() @ StakingError::Unauthorized
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

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

/// Deposit reward tokens into the reserve.
///
/// # Arguments
/// * `ctx` - DepositReserve accounts context
/// * `amount` - Amount of tokens to deposit
pub fn handler(ctx: Context<DepositReserve>, amount: u64) -> Result<()> {
    // === INPUT VALIDATION ===

    require!(amount > 0, StakingError::ZeroAmount);

    // === STATE UPDATE ===

    let clock = Clock::get()?;
    let reward_pool_key = ctx.accounts.reward_pool.key();
    let reward_pool = &mut ctx.accounts.reward_pool;
    let new_reserve = reward_pool.credit_reserve(amount)?;
    reward_pool.last_updated = clock.unix_timestamp;

    // === TOKEN TRANSFER ===

    let cpi_accounts = Transfer {
        from: ctx.accounts.admin_token_account.to_account_info(),
        to: ctx.accounts.reserve_vault.to_account_info(),
        authority: ctx.accounts.admin.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    msg!("Reserve funded with {} tokens", amount);
    msg!("New reserve: {}", new_reserve);

    emit!(ReserveDeposited {
        reward_pool: reward_pool_key,
        admin: ctx.accounts.admin.key(),
        amount,
        new_reserve,
    });

    Ok(())
}
