//! Fixed timestep simulation tick
//!
//! Core game step that advances the simulation deterministically.

use super::collision::{in_brick_zone, is_approaching_paddle, wall_contact};
use super::state::{GameEvent, GamePhase, GameState, RoundOutcome};
use crate::consts::*;

/// Input for a single tick: which direction keys are held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one fixed timestep
///
/// Returns the events that happened, in order. Does nothing once the round
/// is over; only the round controller can resume play.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ticks += 1;

    // Held keys keep the paddle moving every tick
    if input.left {
        state.paddle.shift(-PADDLE_SPEED);
    }
    if input.right {
        state.paddle.shift(PADDLE_SPEED);
    }

    state.ball.advance();

    // Walls: overshoot is corrected by the flip on later ticks, not clamped
    let walls = wall_contact(state.ball.pos);
    if walls.horizontal {
        state.ball.bounce_x();
    }
    if walls.top {
        state.ball.bounce_y();
    }
    if walls.horizontal || walls.top {
        events.push(GameEvent::WallBounce {
            horizontal: walls.horizontal,
            top: walls.top,
        });
    }
    if walls.below {
        if state.end_round(RoundOutcome::BallLost) {
            events.push(GameEvent::RoundOver(RoundOutcome::BallLost));
        }
        return events;
    }

    let ball_rect = state.ball.rect();

    let paddle_bounce =
        is_approaching_paddle(&state.ball) && ball_rect.intersects(&state.paddle.rect());
    if paddle_bounce {
        state.ball.bounce_y();
        events.push(GameEvent::PaddleBounce);
    }

    // At most one brick per tick
    if !paddle_bounce && in_brick_zone(&state.ball) {
        if let Some((row, column)) = state.bricks.first_hit(&ball_rect) {
            state.bricks.destroy(row, column);
            state.ball.bounce_y();
            log::debug!(
                "Brick ({}, {}) destroyed, {} left",
                row,
                column,
                state.bricks.remaining()
            );
            events.push(GameEvent::BrickDestroyed { row, column });
        }
    }

    if state.bricks.remaining() == 0 && state.end_round(RoundOutcome::Cleared) {
        events.push(GameEvent::RoundOver(RoundOutcome::Cleared));
    }

    events
}
