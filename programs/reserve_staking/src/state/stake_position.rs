use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::accrual::compute_reward;
use crate::error::StakingError;
use crate::state::RewardPool;

/// Custody of a position's principal.
///
/// `Held` for the whole life of the position; `release` moves it to
/// `Released` and hands back the amount exactly once.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Escrow {
    Held { amount: u64 },
    #[default]
    Released,
}

impl Escrow {
    /// Borsh size of the largest variant.
    pub const LEN: usize = 1 + 8;

    pub fn is_held(&self) -> bool {
        matches!(self, Escrow::Held { .. })
    }

    pub fn release(&mut self) -> Result<u64> {
        match core::mem::replace(self, Escrow::Released) {
            Escrow::Held { amount } => Ok(amount),
            Escrow::Released => Err(StakingError::EscrowAlreadyReleased.into()),
        }
    }
}

/// Payout produced when a position is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseSettlement {
    pub reward: u64,
    pub principal: u64,
}

#[account]
#[derive(Default, Debug)]
pub struct StakePosition {
    pub reward_pool: Pubkey,
    pub owner: Pubkey,
    pub position_id: u64,

    pub principal: u64,
    pub reward_accum: u64,

    pub start_time: i64,
    pub last_claim: i64,

    pub escrow: Escrow,

    pub escrow_vault_bump: u8,
    pub bump: u8,
}

impl StakePosition {
    pub const LEN: usize = 8
        + (32 * 2)
        + (8 * 3)
        + (8 * 2)
        + Escrow::LEN
        + 2;

    /// A position is active exactly while it still holds its escrow.
    pub fn is_active(&self) -> bool {
        self.escrow.is_held()
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, StakingError::Unauthorized);
        Ok(())
    }

    pub fn ensure_active(&self) -> Result<()> {
        require!(self.is_active(), StakingError::InactivePosition);
        Ok(())
    }

    /// Pay out everything accrued so far and restart the accrual window at `now`.
    ///
    /// All checks run before the pool or the position is touched.
    pub fn settle_claim(
        &mut self,
        pool: &mut RewardPool,
        caller: &Pubkey,
        now: i64,
    ) -> Result<u64> {
        self.ensure_owner(caller)?;
        self.ensure_active()?;

        let reward = compute_reward(self, pool, now)?;
        require!(reward > 0, StakingError::NothingToClaim);

        pool.debit_reserve(reward)?;

        self.reward_accum = 0;
        self.last_claim = now;

        Ok(reward)
    }

    /// Final settlement: pays any accrued reward and releases the escrowed
    /// principal. The caller is expected to delete the account afterwards.
    pub fn settle_close(
        &mut self,
        pool: &mut RewardPool,
        caller: &Pubkey,
        now: i64,
    ) -> Result<CloseSettlement> {
        self.ensure_owner(caller)?;
        self.ensure_active()?;

        let reward = compute_reward(self, pool, now)?;
        if reward > 0 {
            pool.debit_reserve(reward)?;
        }

        self.reward_accum = 0;
        self.last_claim = now;
        let principal = self.escrow.release()?;

        Ok(CloseSettlement { reward, principal })
    }
}
