//! Pass-through score counter

use serde::{Deserialize, Serialize};

/// Monotonic count of obstacles cleared this round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    points: u64,
}

impl Score {
    pub fn new() -> Self {
        Self { points: 0 }
    }

    pub fn add_point(&mut self) {
        self.points += 1;
    }

    pub fn current(&self) -> u64 {
        self.points
    }
}
