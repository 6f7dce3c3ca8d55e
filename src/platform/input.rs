//! Input sources
//!
//! A source hands over every event that arrived since the previous tick, in
//! arrival order. Real devices ignore the state view; synthetic sources
//! (scripts, the autopilot) may look at it.

use std::collections::VecDeque;

use crate::sim::{GamePhase, GameState};

pub use crate::sim::InputEvent;

/// Anything that can feed the game loop
pub trait InputSource {
    /// Take all pending events
    fn drain(&mut self, state: &GameState) -> Vec<InputEvent>;
}

/// Replays a fixed per-tick script, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    /// One entry per tick
    pub fn new(frames: Vec<Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// `ticks` ticks with no input
    pub fn idle(ticks: usize) -> Self {
        Self::new(vec![Vec::new(); ticks])
    }

    /// Ticks still scripted
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn drain(&mut self, _state: &GameState) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

/// Demo player: jumps when the actor sinks below the next gap's center,
/// restarts after a pause on the game-over screen, quits after a tick budget.
#[derive(Debug, Clone)]
pub struct Autopilot {
    max_ticks: Option<u64>,
    ticks: u64,
    holding: bool,
    game_over_ticks: u32,
}

impl Autopilot {
    /// Ticks spent on the game-over screen before restarting
    pub const RESTART_DELAY: u32 = 60;

    pub fn new(max_ticks: Option<u64>) -> Self {
        Self {
            max_ticks,
            ticks: 0,
            holding: false,
            game_over_ticks: 0,
        }
    }

    fn decide(&mut self, state: &GameState) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.holding {
            events.push(InputEvent::JumpReleased);
            self.holding = false;
        }

        match state.phase {
            GamePhase::GameOver => {
                self.game_over_ticks += 1;
                if self.game_over_ticks >= Self::RESTART_DELAY {
                    self.game_over_ticks = 0;
                    events.push(InputEvent::JumpPressed);
                    self.holding = true;
                }
            }
            GamePhase::Playing => {
                let config = state.config();
                let actor = &state.actor;
                let target = state
                    .obstacles
                    .next_ahead_of(actor.pos.x)
                    .map(|o| o.gap_center)
                    .unwrap_or(config.window_height / 2.0);
                let actor_center = actor.pos.y + actor.size.y / 2.0;

                // Only jump on the way down so impulses don't stack up
                if actor_center > target && actor.vel >= 0.0 {
                    events.push(InputEvent::JumpPressed);
                    self.holding = true;
                }
            }
        }

        events
    }
}

impl InputSource for Autopilot {
    fn drain(&mut self, state: &GameState) -> Vec<InputEvent> {
        self.ticks += 1;
        if self.max_ticks.is_some_and(|max| self.ticks > max) {
            return vec![InputEvent::Quit];
        }
        self.decide(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_script_then_quit() {
        let state = GameState::new(GameConfig::default());
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::JumpPressed, InputEvent::JumpReleased],
            vec![],
        ]);
        assert_eq!(
            input.drain(&state),
            vec![InputEvent::JumpPressed, InputEvent::JumpReleased]
        );
        assert!(input.drain(&state).is_empty());
        assert_eq!(input.remaining(), 0);
        assert_eq!(input.drain(&state), vec![InputEvent::Quit]);
    }

    #[test]
    fn test_autopilot_jumps_below_target() {
        let mut state = GameState::new(GameConfig::default());
        let mut pilot = Autopilot::new(None);

        // Above the window center: no jump
        state.actor.pos.y = 200.0;
        assert!(pilot.drain(&state).is_empty());

        // Below it and falling: jump, then release next tick
        state.actor.pos.y = 400.0;
        state.actor.vel = 1.0;
        assert_eq!(pilot.drain(&state), vec![InputEvent::JumpPressed]);
        state.actor.vel = -7.0;
        assert_eq!(pilot.drain(&state), vec![InputEvent::JumpReleased]);
    }

    #[test]
    fn test_autopilot_targets_next_gap() {
        let mut state = GameState::new(GameConfig::default());
        state.spawn_obstacle(450.0);
        let mut pilot = Autopilot::new(None);
        state.actor.pos.y = 400.0;
        assert!(pilot.drain(&state).is_empty());
    }

    #[test]
    fn test_autopilot_restarts_after_delay() {
        let mut state = GameState::new(GameConfig::default());
        state.phase = GamePhase::GameOver;
        let mut pilot = Autopilot::new(None);
        for _ in 0..Autopilot::RESTART_DELAY - 1 {
            assert!(pilot.drain(&state).is_empty());
        }
        assert_eq!(pilot.drain(&state), vec![InputEvent::JumpPressed]);
    }

    #[test]
    fn test_autopilot_quits_after_budget() {
        let state = GameState::new(GameConfig::default());
        let mut pilot = Autopilot::new(Some(2));
        pilot.drain(&state);
        pilot.drain(&state);
        assert_eq!(pilot.drain(&state), vec![InputEvent::Quit]);
    }
}
