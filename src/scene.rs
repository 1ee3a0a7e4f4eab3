//! Scene composition
//!
//! Turns a [`GameState`] into an ordered list of draw commands. Pure, so the
//! frame contents can be checked without a GPU.

use crate::consts::*;
use crate::renderer::glyphs::{text_height, text_width};
use crate::sim::{GamePhase, GameState, Rect};

/// Prompt shown on the game-over screen
pub const REPLAY_PROMPT: &str = "Press Spacebar to Replay";
/// Banner shown on the game-over screen
pub const GAME_OVER_BANNER: &str = "Game Over";

/// Pixels per font cell for the replay prompt (about a 32px font)
pub const PROMPT_SCALE: i32 = 4;
/// Pixels per font cell for the banner
pub const BANNER_SCALE: i32 = 10;

/// Top of the replay prompt
pub const PROMPT_Y: i32 = SCREEN_HEIGHT / 2 + 50;

/// Things the renderer knows how to paint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Background,
    Ball,
    Paddle,
    Brick,
    GameOver,
}

/// A single draw call in painter's order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Sprite { sprite: Sprite, rect: Rect },
    Text {
        text: &'static str,
        x: i32,
        y: i32,
        scale: i32,
    },
}

impl DrawCommand {
    fn sprite(sprite: Sprite, rect: Rect) -> Self {
        Self::Sprite { sprite, rect }
    }

    /// Text horizontally centered on the playfield
    fn centered_text(text: &'static str, y: i32, scale: i32) -> Self {
        Self::Text {
            text,
            x: (SCREEN_WIDTH - text_width(text, scale)) / 2,
            y,
            scale,
        }
    }
}

const FULL_SCREEN: Rect = Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT);

/// Build this frame's draw list
///
/// While playing: background, live bricks, ball, paddle. Once the round is
/// over: the game-over screen, a banner and the centered replay prompt. Both
/// round outcomes share the same screen.
pub fn compose(state: &GameState) -> Vec<DrawCommand> {
    match state.phase {
        GamePhase::Playing => {
            let mut commands = Vec::with_capacity(3 + BRICK_COUNT as usize);
            commands.push(DrawCommand::sprite(Sprite::Background, FULL_SCREEN));
            commands.extend(
                state
                    .bricks
                    .alive()
                    .map(|brick| DrawCommand::sprite(Sprite::Brick, brick.rect)),
            );
            commands.push(DrawCommand::sprite(Sprite::Ball, state.ball.rect()));
            commands.push(DrawCommand::sprite(Sprite::Paddle, state.paddle.rect()));
            commands
        }
        GamePhase::GameOver => {
            let banner_y = SCREEN_HEIGHT / 2 - 50 - text_height(BANNER_SCALE);
            vec![
                DrawCommand::sprite(Sprite::GameOver, FULL_SCREEN),
                DrawCommand::centered_text(GAME_OVER_BANNER, banner_y, BANNER_SCALE),
                DrawCommand::centered_text(REPLAY_PROMPT, PROMPT_Y, PROMPT_SCALE),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RoundOutcome;

    fn sprites(commands: &[DrawCommand]) -> Vec<Sprite> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite { sprite, .. } => Some(*sprite),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_playing_draw_order() {
        let state = GameState::new(1);
        let commands = compose(&state);
        let sprites = sprites(&commands);
        assert_eq!(sprites.len(), 3 + 30);
        assert_eq!(sprites[0], Sprite::Background);
        assert!(sprites[1..31].iter().all(|s| *s == Sprite::Brick));
        assert_eq!(sprites[31], Sprite::Ball);
        assert_eq!(sprites[32], Sprite::Paddle);
        assert_eq!(
            commands[31],
            DrawCommand::Sprite {
                sprite: Sprite::Ball,
                rect: state.ball.rect()
            }
        );
    }

    #[test]
    fn test_only_live_bricks_drawn() {
        let mut state = GameState::new(1);
        state.bricks.destroy(0, 0);
        state.bricks.destroy(1, 1);
        let commands = compose(&state);
        let bricks: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Sprite {
                    sprite: Sprite::Brick,
                    rect,
                } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(bricks.len(), 28);
        assert!(!bricks.contains(&state.bricks.get(0, 0).unwrap().rect));
        assert!(bricks.contains(&state.bricks.get(0, 1).unwrap().rect));
    }

    #[test]
    fn test_game_over_screen() {
        for outcome in [RoundOutcome::BallLost, RoundOutcome::Cleared] {
            let mut state = GameState::new(1);
            state.end_round(outcome);
            let commands = compose(&state);
            assert_eq!(sprites(&commands), vec![Sprite::GameOver]);

            let prompt = commands
                .iter()
                .find_map(|c| match c {
                    DrawCommand::Text {
                        text: REPLAY_PROMPT,
                        x,
                        y,
                        scale,
                    } => Some((*x, *y, *scale)),
                    _ => None,
                })
                .unwrap();
            let width = text_width(REPLAY_PROMPT, PROMPT_SCALE);
            assert_eq!(prompt, ((800 - width) / 2, 350, PROMPT_SCALE));
            assert!(prompt.0 > 0);
        }
    }

    #[test]
    fn test_banner_above_prompt() {
        let mut state = GameState::new(1);
        state.end_round(RoundOutcome::Cleared);
        let commands = compose(&state);
        let DrawCommand::Text { y, scale, x, .. } = &commands[1] else {
            panic!("expected banner text");
        };
        assert!(*y + text_height(*scale) < PROMPT_Y);
        assert!(*x >= 0);
    }
}
