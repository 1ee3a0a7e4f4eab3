//! Brick - a Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, round control)
//! - `scene`: Game state to draw commands
//! - `renderer`: wgpu rendering pipeline
//! - `platform`: Native window, event loop and input
//! - `settings`: Presentation preferences

pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// All coordinates are screen pixels with the origin at the top-left
/// corner and y growing downward.
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 30;
    pub const BALL_SPEED: i32 = 2;
    pub const BALL_X_MIN: i32 = 0;
    pub const BALL_X_MAX: i32 = SCREEN_WIDTH - BALL_SIZE;
    pub const BALL_Y_MIN: i32 = 0;
    pub const BALL_Y_MAX: i32 = SCREEN_HEIGHT - BALL_SIZE;

    /// Paddle defaults - sits one ball height above the bottom edge
    pub const PADDLE_WIDTH: i32 = 104;
    pub const PADDLE_HEIGHT: i32 = 24;
    pub const PADDLE_SPEED: i32 = 6;
    pub const PADDLE_X_MIN: i32 = 0;
    pub const PADDLE_X_MAX: i32 = SCREEN_WIDTH - PADDLE_WIDTH;
    pub const PADDLE_Y: i32 = SCREEN_HEIGHT - PADDLE_HEIGHT - BALL_SIZE;
    /// How far above the paddle top the ball's bottom edge may be before
    /// paddle collision is tested
    pub const PADDLE_APPROACH_MARGIN: i32 = 8;

    /// Brick grid layout
    pub const BRICK_WIDTH: i32 = 64;
    pub const BRICK_HEIGHT: i32 = 32;
    pub const BRICK_ROWS: usize = 3;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_COUNT: u32 = (BRICK_ROWS * BRICK_COLUMNS) as u32;
    pub const BRICK_GAP: i32 = 10;
    pub const BRICK_ORIGIN_X: i32 = 33;
    pub const BRICK_ORIGIN_Y: i32 = 50;
    /// Lowest pixel row covered by the brick field
    pub const BRICK_FIELD_BOTTOM: i32 = BRICK_ORIGIN_Y
        + (BRICK_ROWS as i32 - 1) * (BRICK_HEIGHT + BRICK_GAP)
        + BRICK_HEIGHT;

    /// Height at which a new round serves the ball
    pub const SERVE_Y: i32 = PADDLE_Y - 350;
}
