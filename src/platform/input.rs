//! Keyboard state tracking
//!
//! Paddle movement follows held keys, so the arrows are tracked as
//! pressed/released state and sampled once per tick. Replay and quit are
//! discrete actions reported as they happen.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::sim::TickInput;

/// Discrete actions triggered by a single key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Space released: start a new round if the current one is over
    Replay,
    /// Escape pressed: close the window
    Quit,
}

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a key transition, returning any discrete action it triggers
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> Option<KeyAction> {
        let pressed = state == ElementState::Pressed;
        match key {
            KeyCode::ArrowLeft => {
                self.left = pressed;
                None
            }
            KeyCode::ArrowRight => {
                self.right = pressed;
                None
            }
            KeyCode::Space if !pressed => Some(KeyAction::Replay),
            KeyCode::Escape if pressed => Some(KeyAction::Quit),
            _ => None,
        }
    }

    /// Release everything (window lost focus, so releases may never arrive)
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Snapshot for the next simulation tick
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
        }
    }
}
