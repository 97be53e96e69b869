//! State structures for the Reserve Staking program.
//!
//! This module defines all account structures used to store program state.

pub mod reward_pool;
pub mod stake_position;

pub use reward_pool::*;
pub use stake_position::*;
