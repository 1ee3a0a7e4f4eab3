//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND_TOP: [f32; 4] = [0.02, 0.03, 0.12, 1.0];
    pub const BACKGROUND_BOTTOM: [f32; 4] = [0.10, 0.04, 0.18, 1.0];
    pub const BALL: [f32; 4] = [0.95, 0.95, 1.0, 1.0];
    pub const BALL_SHINE: [f32; 4] = [1.0, 1.0, 1.0, 0.6];
    pub const PADDLE: [f32; 4] = [0.85, 0.15, 0.15, 1.0];
    pub const PADDLE_EDGE: [f32; 4] = [0.45, 0.05, 0.05, 1.0];
    pub const BRICK: [f32; 4] = [0.4, 0.7, 1.0, 1.0];
    pub const BRICK_EDGE: [f32; 4] = [0.15, 0.3, 0.55, 1.0];
    pub const GAME_OVER_TOP: [f32; 4] = [0.25, 0.0, 0.02, 1.0];
    pub const GAME_OVER_BOTTOM: [f32; 4] = [0.02, 0.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CLEAR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
