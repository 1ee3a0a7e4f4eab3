//! Round controller
//!
//! Serves a fresh round and gates the replay action.

use glam::IVec2;
use rand::Rng;

use super::state::{Ball, BrickGrid, GamePhase, GameState, Paddle};
use crate::consts::*;

/// Reset ball, paddle and bricks and start playing
///
/// The ball serves from a random column at [`SERVE_Y`], heading down and
/// randomly left or right.
pub fn reset_round(state: &mut GameState) {
    let mut rng = state.rng_state.next_rng();
    let x = rng.random_range(BALL_X_MIN..BALL_X_MAX);
    let vx = if rng.random_bool(0.5) {
        BALL_SPEED
    } else {
        -BALL_SPEED
    };

    state.ball = Ball {
        pos: IVec2::new(x, SERVE_Y),
        vel: IVec2::new(vx, BALL_SPEED),
    };
    state.paddle = Paddle::default();
    state.bricks = BrickGrid::new();
    state.phase = GamePhase::Playing;
    state.outcome = None;
    state.round += 1;

    log::info!(
        "Round {} served: ball at ({}, {}) heading {}",
        state.round,
        x,
        SERVE_Y,
        if vx > 0 { "right" } else { "left" }
    );
}

/// Start a new round if the current one is over
///
/// Returns true if a new round was served.
pub fn replay(state: &mut GameState) -> bool {
    if state.phase != GamePhase::GameOver {
        log::debug!("Replay ignored: round {} still in play", state.round);
        return false;
    }
    reset_round(state);
    true
}
