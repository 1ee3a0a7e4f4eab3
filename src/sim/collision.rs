//! Collision detection for axis-aligned rectangles
//!
//! Everything in the playfield is an axis-aligned box: the ball, the paddle
//! and every brick. Responses are pure velocity sign flips, so the checks
//! here only answer "did they touch" and leave the response to the tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::state::Ball;
use crate::consts::*;

/// An axis-aligned rectangle in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: IVec2, size: IVec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// A rectangle with no area never intersects anything
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Strict overlap test
    ///
    /// Rectangles that share only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let overlap_x = self.right().min(other.right()) - self.x.max(other.x);
        let overlap_y = self.bottom().min(other.bottom()) - self.y.max(other.y);
        overlap_x > 0 && overlap_y > 0
    }
}

/// Which playfield walls the ball is past
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallContact {
    /// Past the left or right wall
    pub horizontal: bool,
    /// Past the top wall
    pub top: bool,
    /// Fell out of the bottom
    pub below: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.horizontal || self.top || self.below
    }
}

/// Check the ball position against the playfield bounds
///
/// The top wall takes precedence over the bottom: a ball can't be past both.
pub fn wall_contact(pos: IVec2) -> WallContact {
    let horizontal = pos.x < BALL_X_MIN || pos.x > BALL_X_MAX;
    let top = pos.y < BALL_Y_MIN;
    let below = !top && pos.y > BALL_Y_MAX;
    WallContact {
        horizontal,
        top,
        below,
    }
}

/// True when the ball is falling and close enough to the paddle to test it
pub fn is_approaching_paddle(ball: &Ball) -> bool {
    ball.vel.y > 0 && ball.pos.y + BALL_SIZE >= PADDLE_Y - PADDLE_APPROACH_MARGIN
}

/// True when the ball's top edge is inside the band covered by the bricks
pub fn in_brick_zone(ball: &Ball) -> bool {
    ball.pos.y < BRICK_FIELD_BOTTOM
}
