//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Screen-space position (pixels, y down)
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

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for sprite fallbacks
pub mod colors {
    pub const SPRITE_FALLING: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const SPRITE_FLAPPING: [f32; 4] = [1.0, 0.85, 0.2, 1.0];
}
