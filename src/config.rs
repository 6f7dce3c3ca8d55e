//! Game configuration
//!
//! Every tuning value the simulation depends on lives in one immutable
//! `GameConfig` that is handed to each component explicitly.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::renderer::Color;

/// Errors produced while loading or validating a configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for `GameConfig`
    Parse(serde_json::Error),
    /// A value is outside the range the game can run with
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid { field, reason } => {
                write!(f, "invalid config field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Fixed game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub background_color: Color,
    pub obstacle_color: Color,

    // === Actor ===
    pub actor_start_x: f32,
    pub actor_start_y: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Added to the actor's velocity every tick
    pub gravity: f32,
    /// Velocity set by a jump (must be negative, i.e. upward)
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    /// Leftward movement per tick
    pub obstacle_speed: f32,
    /// Ticks between spawns
    pub spawn_interval: u32,
    /// Minimum distance between a gap edge and the window top/bottom
    pub safe_margin: f32,

    // === Audio ===
    pub master_volume: f32,
    pub sfx_volume: f32,
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tick_rate: TICK_RATE,
            background_color: Color::from(BACKGROUND_COLOR),
            obstacle_color: Color::from(OBSTACLE_COLOR),

            actor_start_x: ACTOR_START_X,
            actor_start_y: ACTOR_START_Y,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            safe_margin: SAFE_MARGIN,

            master_volume: MASTER_VOLUME,
            sfx_volume: SFX_VOLUME,
            music_volume: MUSIC_VOLUME,
            muted: false,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Check that the game is well defined with these values
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid {
                field,
                reason: reason.into(),
            })
        }

        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("obstacle_speed", self.obstacle_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return invalid(field, format!("must be a positive number, got {value}"));
            }
        }

        if self.tick_rate == 0 {
            return invalid("tick_rate", "must be at least 1");
        }
        if self.spawn_interval == 0 {
            return invalid("spawn_interval", "must be at least 1");
        }
        if !(self.gravity.is_finite() && self.gravity >= 0.0) {
            return invalid("gravity", format!("must be non-negative, got {}", self.gravity));
        }
        if !(self.jump_impulse.is_finite() && self.jump_impulse < 0.0) {
            return invalid(
                "jump_impulse",
                format!("must be negative (upward), got {}", self.jump_impulse),
            );
        }
        if !(self.safe_margin.is_finite() && self.safe_margin >= 0.0) {
            return invalid(
                "safe_margin",
                format!("must be non-negative, got {}", self.safe_margin),
            );
        }
        if !(self.actor_start_y.is_finite() && self.actor_start_y >= 0.0) {
            return invalid(
                "actor_start_y",
                format!("must be non-negative, got {}", self.actor_start_y),
            );
        }
        let volumes = [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ];
        for (field, value) in volumes {
            if !(0.0..=1.0).contains(&value) {
                return invalid(field, format!("must be between 0 and 1, got {value}"));
            }
        }
        if !self.actor_start_x.is_finite() {
            return invalid("actor_start_x", "must be finite");
        }

        let (lo, hi) = self.gap_center_range();
        if lo > hi {
            return invalid(
                "safe_margin",
                format!(
                    "gap of {} with margin {} does not fit a window of height {}",
                    self.gap_height, self.safe_margin, self.window_height
                ),
            );
        }

        Ok(())
    }

    /// Inclusive range the spawner draws gap centers from
    pub fn gap_center_range(&self) -> (f32, f32) {
        let half_gap = self.gap_height / 2.0;
        (
            self.safe_margin + half_gap,
            self.window_height - self.safe_margin - half_gap,
        )
    }

    /// Wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Where the actor starts each round
    pub fn actor_start(&self) -> Vec2 {
        Vec2::new(self.actor_start_x, self.actor_start_y)
    }
}
