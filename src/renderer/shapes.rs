//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::{Color, SpriteKind, Surface, TextAnchor};
use crate::sim::Rect;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.min;
    let max = rect.max();

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Surface that tessellates a frame into a triangle list ready for upload
#[derive(Debug, Clone, Default)]
pub struct VertexSurface {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    /// Text runs are left to a glyph renderer
    pub text_runs: usize,
    /// Completed frames
    pub frames: u64,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vertex data as raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Surface for VertexSurface {
    fn clear(&mut self, color: Color) {
        self.clear_color = color.to_rgba();
        self.vertices.clear();
        self.text_runs = 0;
    }

    fn fill_rect(&mut self, r: Rect, color: Color) {
        if r.is_empty() {
            return;
        }
        self.vertices.extend_from_slice(&rect(&r, color.to_rgba()));
    }

    fn draw_sprite(&mut self, kind: SpriteKind, r: Rect) {
        let color = match kind {
            SpriteKind::Flapping => colors::SPRITE_FLAPPING,
            SpriteKind::Falling => colors::SPRITE_FALLING,
        };
        self.vertices.extend_from_slice(&rect(&r, color));
    }

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _anchor: TextAnchor, _color: Color) {
        self.text_runs += 1;
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("Frame {}: {} vertices", self.frames, self.vertices.len());
    }
}
