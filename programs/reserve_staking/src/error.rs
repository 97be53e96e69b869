//! Error types for the Reserve Staking program.
//!
//! Every error is a rejection with no side effects: the transaction reverts
//! and all accounts keep their prior contents.

use anchor_lang::prelude::*;

/// Custom error codes for the Reserve Staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset).
#[error_code]
pub enum StakingError {
    // ========== Input Validation Errors ==========

    /// [6000] Cannot stake or deposit a zero amount.
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    // ========== Position/Reserve State Errors ==========

    /// [6001] The position has already been consumed.
    #[msg("Position is no longer active")]
    InactivePosition,

    /// [6002] Accrued reward is zero.
    #[msg("No rewards available to claim")]
    NothingToClaim,

    /// [6003] The reserve cannot cover the computed payout.
    #[msg("Insufficient reward reserve for payout")]
    InsufficientReserve,

    /// [6004] Escrowed principal was already released.
    #[msg("Escrowed principal has already been released")]
    EscrowAlreadyReleased,

    // ========== Math Errors ==========

    /// [6005] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    // ========== Authorization Errors ==========

    /// [6006] Caller is not the position owner or the pool admin.
    #[msg("Unauthorized: caller is not the position owner or pool admin")]
    Unauthorized,

    // ========== Account Validation Errors ==========

    /// [6007] The provided mint does not match the pool's staking token.
    #[msg("Token mint mismatch - wrong token for this pool")]
    MintMismatch,

    /// [6008] The provided vault does not match the pool's reserve vault.
    #[msg("Reserve vault address mismatch")]
    ReserveVaultMismatch,

    /// [6009] The position belongs to a different reward pool.
    #[msg("Stake position does not belong to this pool")]
    PoolMismatch,
}
