//! Game state and core simulation types

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::{Obstacle, ObstacleQueue};
use super::score::Score;
use super::spawner::Spawner;
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Round ended, simulation frozen until restart
    GameOver,
}

/// What ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Hit the obstacle with this id
    Obstacle(u32),
    /// Fell to the bottom of the window
    Ground,
}

/// Side effects produced by a tick, for audio/presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Actor jumped
    Jumped,
    /// Actor cleared an obstacle
    Scored { obstacle_id: u32, score: u64 },
    /// A new obstacle entered at the right edge
    ObstacleSpawned { obstacle_id: u32, gap_center: f32 },
    /// Playing -> GameOver edge (emitted once per round)
    GameOver { score: u64, cause: DeathCause },
    /// GameOver -> Playing, all entities reinitialized
    Restarted { round: u32 },
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    config: GameConfig,
    /// Current phase
    pub phase: GamePhase,
    pub actor: Actor,
    /// Live obstacles (spawn order)
    pub obstacles: ObstacleQueue,
    pub score: Score,
    pub spawner: Spawner,
    /// Simulation ticks in the current round
    pub time_ticks: u64,
    /// Rounds started, including the current one
    pub round: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh round with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let actor = Actor::new(&config);
        Self {
            config,
            phase: GamePhase::Playing,
            actor,
            obstacles: ObstacleQueue::new(),
            score: Score::new(),
            spawner: Spawner::new(),
            time_ticks: 0,
            round: 1,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Reinitialize every entity and resume play
    pub fn reset(&mut self) {
        self.actor = Actor::new(&self.config);
        self.obstacles.clear();
        self.score = Score::new();
        self.spawner.reset();
        self.time_ticks = 0;
        self.round += 1;
        self.phase = GamePhase::Playing;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append an obstacle at the right edge of the window
    pub fn spawn_obstacle(&mut self, gap_center: f32) -> u32 {
        let id = self.next_entity_id();
        let obstacle = Obstacle::new(id, self.config.window_width, gap_center, &self.config);
        self.obstacles.push(obstacle);
        id
    }

    /// Count one spawner tick, appending an obstacle when the interval is up.
    /// Returns the new obstacle's id and gap center.
    pub fn tick_spawner<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(u32, f32)> {
        let gap_center = self.spawner.tick(&self.config, rng)?;
        Some((self.spawn_obstacle(gap_center), gap_center))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor, Actor::new(state.config()));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score.current(), 0);
        assert_eq!(state.round, 1);
    }

    #[test]
    fn test_spawn_at_right_edge_with_unique_ids() {
        let mut state = GameState::new(GameConfig::default());
        let a = state.spawn_obstacle(300.0);
        let b = state.spawn_obstacle(200.0);
        assert_ne!(a, b);
        assert_eq!(state.obstacles.len(), 2);
        assert!(state.obstacles.iter().all(|o| o.x == 400.0));
    }

    #[test]
    fn test_reset_reinitializes() {
        let mut state = GameState::new(GameConfig::default());
        state.actor.pos.y = 550.0;
        state.actor.vel = 9.0;
        state.actor.start_flapping();
        state.spawn_obstacle(300.0);
        state.score.add_point();
        state.spawner.ticks_since_spawn = 77;
        state.time_ticks = 500;
        state.phase = GamePhase::GameOver;

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.actor, Actor::new(state.config()));
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score.current(), 0);
        assert_eq!(state.spawner.ticks_since_spawn, 0);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.round, 2);
    }
}
