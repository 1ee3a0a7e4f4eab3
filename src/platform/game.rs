//! Frame driver
//!
//! Holds the game state and the held-key input, and turns variable frame
//! times into fixed simulation ticks.

use crate::consts::*;
use crate::renderer::{Vertex, shapes};
use crate::scene;
use crate::sim::{GameEvent, GameState, replay, tick};

use super::input::InputState;

/// Game instance holding all state
pub struct Game {
    pub state: GameState,
    pub input: InputState,
    accumulator: f32,
    /// Events from the ticks run by the last `update`
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            input: InputState::new(),
            accumulator: 0.0,
            events: Vec::new(),
        }
    }

    /// Run simulation ticks for `dt` seconds of wall time
    ///
    /// Returns the number of ticks run.
    pub fn update(&mut self, dt: f32) -> u32 {
        let dt = dt.clamp(0.0, 0.1);
        self.accumulator += dt;
        self.events.clear();

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.tick_input();
            self.events.extend(tick(&mut self.state, &input));
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        substeps
    }

    /// What happened during the last `update`
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Serve a new round if the current one is over
    pub fn replay(&mut self) -> bool {
        let served = replay(&mut self.state);
        if served {
            self.accumulator = 0.0;
        }
        served
    }

    /// Vertices for the current frame
    pub fn frame_vertices(&self) -> Vec<Vertex> {
        shapes::frame(&scene::compose(&self.state))
    }
}
