//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, integer arithmetic only
//! - Seeded RNG only, consumed by the round controller
//! - Stable brick scan order (bottom row first, left to right)
//! - No rendering or platform dependencies

pub mod collision;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{Rect, WallContact, in_brick_zone, is_approaching_paddle, wall_contact};
pub use round::{replay, reset_round};
pub use state::{
    Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle, RngState, RoundOutcome,
};
pub use tick::{TickInput, tick};
