//! Instruction handlers for the Reserve Staking program.
//!
//! This module contains all instruction implementations.

pub mod claim;
pub mod close_position;
pub mod deposit_reserve;
pub mod initialize;
pub mod open_position;
pub mod preview_reward;

pub use claim::*;
pub use close_position::*;
pub use deposit_reserve::*;
pub use initialize::*;
pub use open_position::*;
pub use preview_reward::*;
