//! Property-based tests for reserve accounting and position settlement.
//!
//! Invariants tested:
//! - The reserve always equals total deposits minus total payouts, and a
//!   payout never exceeds the reserve
//! - Rejected settlements leave the pool and the position unchanged
//! - Only the owner can settle a position
//! - Accrual matches the whole-day closed form

use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;
use reserve_staking::accrual::compute_reward;
use reserve_staking::constants::{BASIS_POINTS_DENOMINATOR, SECONDS_PER_DAY};
use reserve_staking::error::StakingError;
use reserve_staking::state::{Escrow, RewardPool, StakePosition};

// ── Helpers ───────────────────────────────────────────────────────────────────

const T0: i64 = 1_700_000_000;
const POSITIONS: usize = 4;

fn staking_err(err: StakingError) -> Error {
    err.into()
}

fn new_pool(rate_bps: u16) -> RewardPool {
    RewardPool {
        admin: Pubkey::new_unique(),
        daily_reward_rate_bps: rate_bps,
        ..RewardPool::default()
    }
}

fn open(principal: u64, now: i64) -> StakePosition {
    StakePosition {
        owner: Pubkey::new_unique(),
        principal,
        start_time: now,
        last_claim: now,
        escrow: Escrow::Held { amount: principal },
        ..StakePosition::default()
    }
}

#[derive(Clone, Debug)]
enum Op {
    Deposit(u64),
    Advance(i64),
    Claim(usize),
    Close(usize),
    ForeignClaim(usize),
    ForeignClose(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..5_000).prop_map(Op::Deposit),
        (0i64..3 * SECONDS_PER_DAY).prop_map(Op::Advance),
        (0..POSITIONS).prop_map(Op::Claim),
        (0..POSITIONS).prop_map(Op::Close),
        (0..POSITIONS).prop_map(Op::ForeignClaim),
        (0..POSITIONS).prop_map(Op::ForeignClose),
    ]
}

fn assert_untouched(
    pool: &RewardPool,
    position: &StakePosition,
    pool_before: &RewardPool,
    position_before: &StakePosition,
) -> Result<(), TestCaseError> {
    prop_assert_eq!(pool.reserve, pool_before.reserve);
    prop_assert_eq!(pool.total_distributed, pool_before.total_distributed);
    prop_assert_eq!(position.reward_accum, position_before.reward_accum);
    prop_assert_eq!(position.last_claim, position_before.last_claim);
    prop_assert_eq!(position.escrow, position_before.escrow);
    Ok(())
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    /// Across any interleaving of deposits, claims and closes, the reserve is
    /// exactly what was deposited minus what was paid out.
    #[test]
    fn prop_reserve_conserved(
        rate in 1u16..=100u16,
        principals in prop::collection::vec(1u64..1_000_000u64, POSITIONS),
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let mut pool = new_pool(rate);
        let mut now = T0;
        let mut positions: Vec<StakePosition> =
            principals.iter().map(|p| open(*p, now)).collect();
        let mut deposited: u64 = 0;
        let mut paid: u64 = 0;
        let mut released: u64 = 0;

        for op in ops {
            match op {
                Op::Deposit(amount) => {
                    pool.credit_reserve(amount).unwrap();
                    deposited += amount;
                }
                Op::Advance(secs) => now += secs,
                Op::Claim(i) => {
                    let owner = positions[i].owner;
                    let (pool_before, position_before) = (pool.clone(), positions[i].clone());
                    match positions[i].settle_claim(&mut pool, &owner, now) {
                        Ok(reward) => {
                            prop_assert!(reward > 0);
                            prop_assert!(reward <= pool_before.reserve);
                            prop_assert_eq!(positions[i].last_claim, now);
                            prop_assert_eq!(positions[i].reward_accum, 0);
                            paid += reward;
                        }
                        Err(_) => assert_untouched(
                            &pool, &positions[i], &pool_before, &position_before,
                        )?,
                    }
                }
                Op::Close(i) => {
                    let owner = positions[i].owner;
                    let (pool_before, position_before) = (pool.clone(), positions[i].clone());
                    match positions[i].settle_close(&mut pool, &owner, now) {
                        Ok(settlement) => {
                            prop_assert!(settlement.reward <= pool_before.reserve);
                            prop_assert_eq!(settlement.principal, positions[i].principal);
                            prop_assert!(!positions[i].is_active());
                            paid += settlement.reward;
                            released += settlement.principal;
                        }
                        Err(_) => assert_untouched(
                            &pool, &positions[i], &pool_before, &position_before,
                        )?,
                    }
                }
                Op::ForeignClaim(i) => {
                    let intruder = Pubkey::new_unique();
                    let (pool_before, position_before) = (pool.clone(), positions[i].clone());
                    let err = positions[i].settle_claim(&mut pool, &intruder, now).unwrap_err();
                    prop_assert_eq!(err, staking_err(StakingError::Unauthorized));
                    assert_untouched(&pool, &positions[i], &pool_before, &position_before)?;
                }
                Op::ForeignClose(i) => {
                    let admin = pool.admin;
                    let (pool_before, position_before) = (pool.clone(), positions[i].clone());
                    let err = positions[i].settle_close(&mut pool, &admin, now).unwrap_err();
                    prop_assert_eq!(err, staking_err(StakingError::Unauthorized));
                    assert_untouched(&pool, &positions[i], &pool_before, &position_before)?;
                }
            }

            prop_assert!(paid <= deposited);
            prop_assert_eq!(pool.reserve, deposited - paid);
            prop_assert_eq!(pool.total_distributed, paid);
            prop_assert_eq!(pool.total_deposited, deposited);
        }

        let still_escrowed: u64 = positions
            .iter()
            .filter(|p| p.is_active())
            .map(|p| p.principal)
            .sum();
        prop_assert_eq!(still_escrowed + released, principals.iter().sum::<u64>());
    }

    /// Accrual is `principal * rate * whole_days / 10_000` plus the carried
    /// reward, independent of the seconds past the last whole day.
    #[test]
    fn prop_accrual_matches_closed_form(
        principal in 0u64..10_000_000_000u64,
        rate in 1u16..=100u16,
        days in 0i64..3_650i64,
        extra_secs in 0i64..SECONDS_PER_DAY,
        carried in 0u64..1_000_000u64,
    ) {
        let pool = new_pool(rate);
        let mut position = open(principal, T0);
        position.reward_accum = carried;

        let now = T0 + days * SECONDS_PER_DAY + extra_secs;
        let expected = (principal as u128 * rate as u128 * days as u128
            / BASIS_POINTS_DENOMINATOR) as u64
            + carried;

        prop_assert_eq!(compute_reward(&position, &pool, now).unwrap(), expected);
    }

    /// A clock reading earlier than the last settlement accrues nothing new.
    #[test]
    fn prop_clock_regression_accrues_nothing(
        principal in 1u64..1_000_000_000u64,
        back in 1i64..(100 * SECONDS_PER_DAY),
        carried in 0u64..1_000u64,
    ) {
        let pool = new_pool(10);
        let mut position = open(principal, T0);
        position.reward_accum = carried;

        prop_assert_eq!(compute_reward(&position, &pool, T0 - back).unwrap(), carried);
    }

    /// Claiming twice at the same instant: the second claim finds nothing.
    #[test]
    fn prop_claim_resets_window(
        principal in 10_000u64..1_000_000_000u64,
        days in 1i64..365i64,
    ) {
        let mut pool = new_pool(10);
        pool.credit_reserve(u64::MAX / 2).unwrap();
        let mut position = open(principal, T0);
        let owner = position.owner;
        let now = T0 + days * SECONDS_PER_DAY;

        position.settle_claim(&mut pool, &owner, now).unwrap();
        prop_assert_eq!(compute_reward(&position, &pool, now).unwrap(), 0);

        let reserve = pool.reserve;
        let err = position.settle_claim(&mut pool, &owner, now).unwrap_err();
        prop_assert_eq!(err, staking_err(StakingError::NothingToClaim));
        prop_assert_eq!(pool.reserve, reserve);
    }
}
