//! Tick-counted obstacle scheduler

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Decides when a new obstacle enters and where its gap sits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Ticks since the last spawn (or since the round began)
    pub ticks_since_spawn: u32,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            ticks_since_spawn: 0,
        }
    }

    /// Count one tick. When the interval is reached the counter resets and
    /// the gap center for a new obstacle is returned.
    pub fn tick<R: Rng + ?Sized>(&mut self, config: &GameConfig, rng: &mut R) -> Option<f32> {
        self.ticks_since_spawn += 1;
        if self.ticks_since_spawn < config.spawn_interval {
            return None;
        }
        self.ticks_since_spawn = 0;
        Some(draw_gap_center(config, rng))
    }

    pub fn reset(&mut self) {
        self.ticks_since_spawn = 0;
    }
}

/// Uniform draw from the safe gap-center range, so both obstacle segments
/// keep a non-negative height.
pub fn draw_gap_center<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> f32 {
    let (lo, hi) = config.gap_center_range();
    if lo.is_nan() || hi.is_nan() || lo > hi {
        // Gap can't fit with the margin; center it so neither segment goes negative
        let half_window = config.window_height / 2.0;
        log::warn!("Empty gap range [{lo}, {hi}], centering gap at {half_window}");
        return half_window;
    }
    rng.random_range(lo..=hi)
}
