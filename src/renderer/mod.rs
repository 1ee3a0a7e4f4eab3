//! wgpu rendering module
//!
//! Draw commands from [`crate::scene`] are flattened into one colored
//! triangle list per frame and drawn in a single pass.

pub mod glyphs;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use vertex::Vertex;
