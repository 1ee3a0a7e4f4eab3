//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen pixel coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::glyphs::{GLYPH_ADVANCE, glyph, lit_cells};
use super::vertex::{Vertex, colors};
use crate::scene::{DrawCommand, Sprite};
use crate::sim::Rect;

/// Border thickness for bricks and the paddle
const BEVEL: f32 = 3.0;
/// Triangles in the ball's circle
const BALL_SEGMENTS: u32 = 24;

/// Two triangles covering [x0, x1] x [y0, y1], shaded top to bottom
fn quad(x0: f32, y0: f32, x1: f32, y1: f32, top: [f32; 4], bottom: [f32; 4]) -> [Vertex; 6] {
    [
        Vertex::new(x0, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Solid rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(r, color, color)
}

/// Rectangle with a vertical color gradient
pub fn gradient_rect(r: &Rect, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    quad(
        r.x as f32,
        r.y as f32,
        r.right() as f32,
        r.bottom() as f32,
        top,
        bottom,
    )
    .to_vec()
}

/// Rectangle with a darker border inset by [`BEVEL`]
pub fn bevel_rect(r: &Rect, fill: [f32; 4], edge: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = rect(r, edge);
    let (x0, y0) = (r.x as f32 + BEVEL, r.y as f32 + BEVEL);
    let (x1, y1) = (r.right() as f32 - BEVEL, r.bottom() as f32 - BEVEL);
    if x1 > x0 && y1 > y0 {
        vertices.extend_from_slice(&quad(x0, y0, x1, y1, fill, fill));
    }
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Ball sprite: a disc inscribed in its box with a small highlight
fn ball(r: &Rect) -> Vec<Vertex> {
    let radius = r.w.min(r.h) as f32 / 2.0;
    let center = Vec2::new(r.x as f32 + r.w as f32 / 2.0, r.y as f32 + r.h as f32 / 2.0);
    let mut vertices = circle(center, radius, colors::BALL, BALL_SEGMENTS);
    let shine = center - Vec2::splat(radius * 0.35);
    vertices.extend(circle(shine, radius * 0.25, colors::BALL_SHINE, BALL_SEGMENTS / 2));
    vertices
}

/// Generate vertices for a line of bitmap text, top-left at (x, y)
pub fn text(text: &str, x: i32, y: i32, scale: i32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let cell = scale as f32;

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = glyph(ch) else {
            continue;
        };
        let origin_x = (x + i as i32 * GLYPH_ADVANCE * scale) as f32;
        for (col, row) in lit_cells(glyph) {
            let x0 = origin_x + col as f32 * cell;
            let y0 = y as f32 + row as f32 * cell;
            vertices.extend_from_slice(&quad(x0, y0, x0 + cell, y0 + cell, color, color));
        }
    }

    vertices
}

/// Vertices for one sprite filling `r`
pub fn sprite(sprite: Sprite, r: &Rect) -> Vec<Vertex> {
    match sprite {
        Sprite::Background => {
            gradient_rect(r, colors::BACKGROUND_TOP, colors::BACKGROUND_BOTTOM)
        }
        Sprite::Ball => ball(r),
        Sprite::Paddle => bevel_rect(r, colors::PADDLE, colors::PADDLE_EDGE),
        Sprite::Brick => bevel_rect(r, colors::BRICK, colors::BRICK_EDGE),
        Sprite::GameOver => gradient_rect(r, colors::GAME_OVER_TOP, colors::GAME_OVER_BOTTOM),
    }
}

/// Flatten a frame's draw list into one triangle list, in painter's order
pub fn frame(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Sprite { sprite: s, rect: r } => vertices.extend(sprite(*s, r)),
            DrawCommand::Text {
                text: t,
                x,
                y,
                scale,
            } => vertices.extend(text(t, *x, *y, *scale, colors::TEXT)),
        }
    }
    vertices
}
