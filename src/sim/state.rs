//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; it is passed by
//! reference to the tick and the round controller.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::round::reset_round;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Round ended, waiting for replay
    GameOver,
}

/// Why a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Ball fell out of the bottom of the playfield
    BallLost,
    /// Every brick was destroyed
    Cleared,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the side and/or top walls
    WallBounce { horizontal: bool, top: bool },
    /// Ball bounced off the paddle
    PaddleBounce,
    /// A brick was hit and destroyed
    BrickDestroyed { row: usize, column: usize },
    /// Round is over
    RoundOver(RoundOutcome),
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: IVec2,
    /// Pixels per tick
    pub vel: IVec2,
}

impl Ball {
    pub const SIZE: IVec2 = IVec2::splat(BALL_SIZE);

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Self::SIZE)
    }

    /// Move by one velocity step
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// The player's paddle
///
/// Only the horizontal position changes; the paddle always rides at
/// [`PADDLE_Y`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_X_MAX / 2,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, PADDLE_Y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move horizontally, clamped to the playfield
    pub fn shift(&mut self, dx: i32) {
        self.x = (self.x + dx).clamp(PADDLE_X_MIN, PADDLE_X_MAX);
    }
}

/// A single brick in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub column: usize,
    pub rect: Rect,
    pub alive: bool,
}

impl Brick {
    /// Live brick at its fixed grid cell
    pub fn at(row: usize, column: usize) -> Self {
        let x = BRICK_ORIGIN_X + column as i32 * (BRICK_WIDTH + BRICK_GAP);
        let y = BRICK_ORIGIN_Y + row as i32 * (BRICK_HEIGHT + BRICK_GAP);
        Self {
            row,
            column,
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            alive: true,
        }
    }
}

/// Fixed 3x10 brick grid with a running count of live bricks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    cells: [[Brick; BRICK_COLUMNS]; BRICK_ROWS],
    remaining: u32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// Full grid, every brick alive
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|row| std::array::from_fn(|column| Brick::at(row, column))),
            remaining: BRICK_COUNT,
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Brick> {
        self.cells.get(row).and_then(|r| r.get(column))
    }

    /// Number of bricks still alive
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Every brick, top row first
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter().flatten()
    }

    /// Live bricks, top row first
    pub fn alive(&self) -> impl Iterator<Item = &Brick> {
        self.iter().filter(|b| b.alive)
    }

    /// Collision scan order: bottom row to top row, left to right
    pub fn scan_order(&self) -> impl Iterator<Item = &Brick> {
        self.cells.iter().rev().flatten()
    }

    /// First live brick overlapping `rect` in scan order
    pub fn first_hit(&self, rect: &Rect) -> Option<(usize, usize)> {
        self.scan_order()
            .find(|b| b.alive && b.rect.intersects(rect))
            .map(|b| (b.row, b.column))
    }

    /// Destroy a brick. Returns false if it was already gone or out of range.
    pub fn destroy(&mut self, row: usize, column: usize) -> bool {
        let Some(brick) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) else {
            return false;
        };
        if !brick.alive {
            return false;
        }
        brick.alive = false;
        self.remaining -= 1;
        true
    }
}

/// RNG state wrapper for serialization
///
/// Each round draws from a fresh generator derived from the run seed and
/// the round's stream index, so a run is reproducible from its seed alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, stream: 0 }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed.wrapping_add(self.stream))
    }

    /// Generator for the next round; advances the stream
    pub fn next_rng(&mut self) -> Pcg32 {
        let rng = self.to_rng();
        self.stream += 1;
        rng
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// RNG state, carrying the run seed
    pub rng_state: RngState,
    /// Rounds started this run (1 after the first serve)
    pub round: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// How the last round ended, while in GameOver
    pub outcome: Option<RoundOutcome>,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Create a new game state with the given seed and serve the first round
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            rng_state: RngState::new(seed),
            round: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            outcome: None,
            ball: Ball {
                pos: IVec2::ZERO,
                vel: IVec2::ZERO,
            },
            paddle: Paddle::default(),
            bricks: BrickGrid::new(),
        };

        reset_round(&mut state);

        state
    }

    pub fn remaining_bricks(&self) -> u32 {
        self.bricks.remaining()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Transition to GameOver. Only the first call per round has any effect.
    pub(crate) fn end_round(&mut self, outcome: RoundOutcome) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        log::info!(
            "Round {} over: {:?} ({} bricks left, tick {})",
            self.round,
            outcome,
            self.bricks.remaining(),
            self.time_ticks
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick_layout() {
        let grid = BrickGrid::new();
        assert_eq!(grid.remaining(), 30);
        assert_eq!(grid.iter().count(), 30);

        let first = grid.get(0, 0).unwrap();
        assert_eq!(first.rect, Rect::new(33, 50, 64, 32));

        let last = grid.get(2, 9).unwrap();
        assert_eq!(last.rect, Rect::new(33 + 9 * 74, 50 + 2 * 42, 64, 32));
        assert_eq!(last.rect.bottom(), BRICK_FIELD_BOTTOM);
        assert!(last.rect.right() <= SCREEN_WIDTH);

        assert!(grid.get(3, 0).is_none());
        assert!(grid.get(0, 10).is_none());
    }

    #[test]
    fn test_scan_order_bottom_row_first() {
        let grid = BrickGrid::new();
        let order: Vec<_> = grid.scan_order().map(|b| (b.row, b.column)).collect();
        assert_eq!(order[0], (2, 0));
        assert_eq!(order[9], (2, 9));
        assert_eq!(order[10], (1, 0));
        assert_eq!(order[29], (0, 9));
    }

    #[test]
    fn test_destroy_brick_once() {
        let mut grid = BrickGrid::new();
        assert!(grid.destroy(1, 4));
        assert_eq!(grid.remaining(), 29);
        assert!(!grid.get(1, 4).unwrap().alive);

        // Second destroy is a no-op
        assert!(!grid.destroy(1, 4));
        assert_eq!(grid.remaining(), 29);

        // Out of range
        assert!(!grid.destroy(5, 0));
        assert_eq!(grid.remaining(), 29);
        assert_eq!(grid.alive().count(), 29);
    }

    #[test]
    fn test_first_hit_prefers_lower_row() {
        let grid = BrickGrid::new();
        // Straddles the gap between row 0 and row 1 in column 0
        let probe = Rect::new(40, 70, 30, 30);
        assert_eq!(grid.first_hit(&probe), Some((1, 0)));
    }

    #[test]
    fn test_first_hit_prefers_left_column() {
        let grid = BrickGrid::new();
        // Straddles columns 2 and 3 of the bottom row
        let x = BRICK_ORIGIN_X + 3 * (BRICK_WIDTH + BRICK_GAP) - 20;
        let probe = Rect::new(x, 140, 30, 30);
        assert_eq!(grid.first_hit(&probe), Some((2, 2)));
    }

    #[test]
    fn test_first_hit_skips_dead_bricks() {
        let mut grid = BrickGrid::new();
        let probe = Rect::new(40, 70, 30, 30);
        grid.destroy(1, 0);
        assert_eq!(grid.first_hit(&probe), Some((0, 0)));
        grid.destroy(0, 0);
        assert_eq!(grid.first_hit(&probe), None);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle { x: 2 };
        paddle.shift(-PADDLE_SPEED);
        assert_eq!(paddle.x, 0);

        let mut paddle = Paddle { x: PADDLE_X_MAX - 1 };
        paddle.shift(PADDLE_SPEED);
        assert_eq!(paddle.x, PADDLE_X_MAX);
    }

    #[test]
    fn test_end_round_only_once() {
        let mut state = GameState::new(7);
        assert!(state.end_round(RoundOutcome::BallLost));
        assert!(!state.end_round(RoundOutcome::Cleared));
        assert_eq!(state.outcome, Some(RoundOutcome::BallLost));
    }

    #[test]
    fn test_rng_streams_differ() {
        use rand::Rng;

        let mut rng_state = RngState::new(42);
        let a: u64 = rng_state.next_rng().random();
        let b: u64 = rng_state.next_rng().random();
        assert_ne!(a, b);
        assert_eq!(rng_state.stream, 2);
    }

    #[test]
    fn test_state_seed_lives_in_rng_state() {
        let state = GameState::new(99);
        assert_eq!(state.rng_state.seed, 99);
        // The first serve consumed stream 0
        assert_eq!(state.rng_state.stream, 1);

        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("seed").is_none());
        assert_eq!(json["rng_state"]["seed"], 99);
    }
}
