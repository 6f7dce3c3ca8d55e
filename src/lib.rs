//! Flappy - a side-scrolling gap-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, obstacles, collisions, game state)
//! - `renderer`: Draw command generation and vertex tessellation
//! - `audio`: Sound cue dispatch to a pluggable backend
//! - `platform`: Input events and fixed-rate tick throttling
//! - `config`: Immutable game configuration

pub mod audio;
pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::Game;

/// Default tuning values, used only to build `GameConfig::default()`
pub mod consts {
    /// Window dimensions
    pub const WINDOW_WIDTH: f32 = 400.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;

    /// Sky blue
    pub const BACKGROUND_COLOR: [u8; 3] = [135, 206, 235];
    pub const OBSTACLE_COLOR: [u8; 3] = [0, 128, 0];

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 30.0;
    pub const ACTOR_START_X: f32 = 50.0;
    pub const ACTOR_START_Y: f32 = WINDOW_HEIGHT / 2.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.5;
    /// Upward impulse applied by a jump (units/tick, negative is up)
    pub const JUMP_IMPULSE: f32 = -8.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 70.0;
    pub const OBSTACLE_GAP: f32 = 150.0;
    pub const OBSTACLE_SPEED: f32 = 3.0;

    /// Ticks between obstacle spawns (~2s at 60 Hz)
    pub const SPAWN_INTERVAL: u32 = 120;
    /// Keeps gaps fully within the screen
    pub const SAFE_MARGIN: f32 = 80.0;

    /// Audio levels (0.0 - 1.0)
    pub const MASTER_VOLUME: f32 = 0.8;
    pub const SFX_VOLUME: f32 = 1.0;
    pub const MUSIC_VOLUME: f32 = 0.7;
}
