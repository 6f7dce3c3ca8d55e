//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game loop:
//! - Input events (drained once per tick)
//! - Tick timing (fixed-rate throttle)

pub mod input;
pub mod time;

pub use input::{Autopilot, InputSource, ScriptedInput};
pub use time::FixedRate;
