//! The player-controlled actor: falls under gravity, jumps on command

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// The falling/jumping entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/tick, negative is up)
    pub vel: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    /// Cosmetic wing state, no physics effect
    pub flapping: bool,
}

impl Actor {
    /// Create an actor at the configured start position, at rest
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.actor_start(),
            size: Vec2::new(config.actor_width, config.actor_height),
            vel: 0.0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            flapping: false,
        }
    }

    /// Apply one tick of gravity, then clamp against the top boundary.
    ///
    /// There is no ground clamp; falling out the bottom is a collision.
    pub fn update(&mut self) {
        self.vel += self.gravity;
        self.pos.y += self.vel;
        self.clamp_top();
    }

    fn clamp_top(&mut self) {
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel = 0.0;
        }
    }

    /// Replace the current velocity with the upward impulse
    pub fn jump(&mut self) {
        self.vel = self.jump_impulse;
    }

    pub fn start_flapping(&mut self) {
        self.flapping = true;
    }

    pub fn stop_flapping(&mut self) {
        self.flapping = false;
    }

    /// Collision rectangle at the current position
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_at_rest() {
        let config = GameConfig::default();
        let actor = Actor::new(&config);
        assert_eq!(actor.pos, Vec2::new(50.0, 300.0));
        assert_eq!(actor.vel, 0.0);
        assert!(!actor.flapping);
    }

    #[test]
    fn test_update_applies_gravity_then_moves() {
        let mut actor = Actor::new(&GameConfig::default());
        actor.update();
        assert_eq!(actor.vel, 0.5);
        assert_eq!(actor.pos.y, 300.5);
        actor.update();
        assert_eq!(actor.vel, 1.0);
        assert_eq!(actor.pos.y, 301.5);
    }

    #[test]
    fn test_jump_overrides_velocity_without_moving() {
        let mut actor = Actor::new(&GameConfig::default());
        actor.vel = 12.0;
        actor.jump();
        assert_eq!(actor.vel, -8.0);
        assert_eq!(actor.pos.y, 300.0);

        // Repeated jumps reset, they don't stack
        actor.jump();
        assert_eq!(actor.vel, -8.0);
    }

    #[test]
    fn test_top_clamp_zeroes_velocity() {
        let mut actor = Actor::new(&GameConfig::default());
        actor.pos.y = 3.0;
        actor.jump();
        actor.update();
        assert_eq!(actor.pos.y, 0.0);
        assert_eq!(actor.vel, 0.0);
    }

    #[test]
    fn test_no_ground_clamp() {
        let config = GameConfig::default();
        let mut actor = Actor::new(&config);
        actor.pos.y = config.window_height + 10.0;
        actor.update();
        assert!(actor.pos.y > config.window_height);
    }

    #[test]
    fn test_flapping_is_cosmetic() {
        let mut a = Actor::new(&GameConfig::default());
        let mut b = a.clone();
        b.start_flapping();
        a.update();
        b.update();
        assert_eq!(a.pos, b.pos);
        assert_eq!(a.vel, b.vel);
        b.stop_flapping();
        assert!(!b.flapping);
    }

    proptest! {
        #[test]
        fn prop_never_above_top(
            y in -50.0f32..700.0,
            vel in -30.0f32..30.0,
            jump in any::<bool>(),
        ) {
            let mut actor = Actor::new(&GameConfig::default());
            actor.pos.y = y.max(0.0);
            actor.vel = vel;
            if jump {
                actor.jump();
            }
            let expected_y = actor.pos.y + (actor.vel + actor.gravity);
            actor.update();
            prop_assert!(actor.pos.y >= 0.0);
            if expected_y < 0.0 {
                prop_assert_eq!(actor.vel, 0.0);
            }
        }
    }
}
