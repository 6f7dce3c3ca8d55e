//! Rendering module
//!
//! The core never owns a window. Each tick it describes the frame as a list
//! of `DrawCommand`s which a `Surface` implementation turns into pixels.

pub mod shapes;
pub mod vertex;

pub use shapes::VertexSurface;
pub use vertex::Vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Actor, GamePhase, GameState, Obstacle, Rect};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(255, 0, 0);
    /// Stand-in for a missing actor sprite
    pub const PLACEHOLDER: Color = Color(255, 255, 0);

    /// Normalized RGBA for GPU upload
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
            1.0,
        ]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Color(r, g, b)
    }
}

/// Actor sprite variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    /// Wings spread, jump key held
    Flapping,
    Falling,
}

/// Which point of the text box `pos` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    TopLeft,
    Center,
}

/// A single draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear(Color),
    FillRect {
        rect: Rect,
        color: Color,
    },
    Sprite {
        kind: SpriteKind,
        rect: Rect,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: TextAnchor,
        color: Color,
    },
}

impl DrawCommand {
    /// Replay this command onto a surface
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        match self {
            DrawCommand::Clear(color) => surface.clear(*color),
            DrawCommand::FillRect { rect, color } => surface.fill_rect(*rect, *color),
            DrawCommand::Sprite { kind, rect } => surface.draw_sprite(*kind, *rect),
            DrawCommand::Text {
                text,
                pos,
                anchor,
                color,
            } => surface.draw_text(text, *pos, *anchor, *color),
        }
    }
}

/// Render target supplied by the host
pub trait Surface {
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Surfaces without sprite images fall back to a solid placeholder
    fn draw_sprite(&mut self, _kind: SpriteKind, rect: Rect) {
        self.fill_rect(rect, Color::PLACEHOLDER);
    }

    /// Surfaces without a font skip text
    fn draw_text(&mut self, _text: &str, _pos: Vec2, _anchor: TextAnchor, _color: Color) {}

    /// Called once after every command of a frame has been issued
    fn present(&mut self) {}
}

/// Recording surface: collects the commands instead of drawing them
impl Surface for Vec<DrawCommand> {
    fn clear(&mut self, color: Color) {
        self.push(DrawCommand::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_sprite(&mut self, kind: SpriteKind, rect: Rect) {
        self.push(DrawCommand::Sprite { kind, rect });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, anchor: TextAnchor, color: Color) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            anchor,
            color,
        });
    }
}

impl Actor {
    pub fn sprite(&self) -> SpriteKind {
        if self.flapping {
            SpriteKind::Flapping
        } else {
            SpriteKind::Falling
        }
    }

    /// Draw the actor sprite at its current position
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_sprite(self.sprite(), self.rect());
    }
}

impl Obstacle {
    /// Draw both solid segments
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, color: Color) {
        surface.fill_rect(self.top_rect(), color);
        surface.fill_rect(self.bottom_rect(), color);
    }
}

/// Describe the current frame
pub fn frame(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    draw_state(state, &mut commands);
    commands
}

/// Draw the current frame straight onto a surface and present it
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    draw_state(state, surface);
    surface.present();
}

fn draw_state<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    match state.phase {
        GamePhase::Playing => draw_playing(state, surface),
        GamePhase::GameOver => draw_game_over(state, surface),
    }
}

fn draw_playing<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let config = state.config();
    surface.clear(config.background_color);

    for obstacle in &state.obstacles {
        obstacle.draw(surface, config.obstacle_color);
    }

    state.actor.draw(surface);

    surface.draw_text(
        &format!("Score: {}", state.score.current()),
        Vec2::new(10.0, 10.0),
        TextAnchor::TopLeft,
        Color::WHITE,
    );
}

fn draw_game_over<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let config = state.config();
    let center = Vec2::new(config.window_width / 2.0, config.window_height / 2.0);

    surface.clear(Color::BLACK);
    surface.draw_text(
        "Game Over",
        center - Vec2::new(0.0, 50.0),
        TextAnchor::Center,
        Color::RED,
    );
    surface.draw_text(
        &format!("Final Score: {}", state.score.current()),
        center,
        TextAnchor::Center,
        Color::WHITE,
    );
    surface.draw_text(
        "Press SPACE to play again",
        center + Vec2::new(0.0, 50.0),
        TextAnchor::Center,
        Color::WHITE,
    );
}
