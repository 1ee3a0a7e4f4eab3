//! Presentation settings
//!
//! Read once at startup from the `BRICK_SETTINGS` environment variable as
//! JSON. Gameplay is not configurable; these only affect the window.

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Window scale limits
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 4.0;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window size multiplier over the 800x600 playfield
    pub scale: f32,
    /// Wait for vertical blank before presenting
    pub vsync: bool,
    /// Fixed run seed; drawn from the wall clock when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            vsync: true,
            seed: None,
        }
    }
}

impl Settings {
    /// Environment variable holding the JSON settings
    pub const ENV_VAR: &'static str = "BRICK_SETTINGS";

    /// Parse settings from JSON, clamping out-of-range values
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.scale = if settings.scale.is_finite() {
            settings.scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            1.0
        };
        Ok(settings)
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::ENV_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed {}: {}", Self::ENV_VAR, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Initial window size in logical pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            (SCREEN_WIDTH as f32 * self.scale).round() as u32,
            (SCREEN_HEIGHT as f32 * self.scale).round() as u32,
        )
    }
}
