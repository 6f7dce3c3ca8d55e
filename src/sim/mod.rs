//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected, seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{
    collides_with_ceiling, collides_with_ground, collides_with_obstacle, has_passed,
};
pub use obstacle::{Obstacle, ObstacleQueue};
pub use rect::Rect;
pub use score::Score;
pub use spawner::{Spawner, draw_gap_center};
pub use state::{DeathCause, GameEvent, GamePhase, GameState};
pub use tick::{InputEvent, TickInput, TickOutput, tick};
