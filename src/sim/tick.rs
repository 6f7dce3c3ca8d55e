//! Fixed timestep simulation tick
//!
//! Core game loop step that advances simulation deterministically: the same
//! state, input and RNG stream always produce the same result.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::{collides_with_ground, collides_with_obstacle, has_passed};
use super::state::{DeathCause, GameEvent, GamePhase, GameState};

/// A discrete input event, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Leave the game from any phase
    Quit,
    /// Jump while playing, restart while game over
    JumpPressed,
    /// Jump key let go (cosmetic only)
    JumpReleased,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Every event drained since the previous tick
    pub events: Vec<InputEvent>,
}

impl TickInput {
    pub fn new(events: Vec<InputEvent>) -> Self {
        Self { events }
    }
}

/// Result of a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutput {
    /// Side effects for the audio/presentation collaborators, in order
    pub events: Vec<GameEvent>,
    /// A quit event was seen; the loop should stop
    pub quit: bool,
}

/// Advance the game state by one fixed timestep.
///
/// Input events are applied in order before simulating. A `Quit` stops
/// processing immediately and skips the simulation step.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) -> TickOutput {
    let mut out = TickOutput::default();

    for &event in &input.events {
        match event {
            InputEvent::Quit => {
                out.quit = true;
                return out;
            }
            InputEvent::JumpPressed => match state.phase {
                GamePhase::Playing => {
                    state.actor.start_flapping();
                    state.actor.jump();
                    out.events.push(GameEvent::Jumped);
                }
                GamePhase::GameOver => {
                    state.reset();
                    log::info!("Round {} started", state.round);
                    out.events.push(GameEvent::Restarted { round: state.round });
                }
            },
            InputEvent::JumpReleased => {
                // Frozen frame stays frozen
                if state.phase == GamePhase::Playing {
                    state.actor.stop_flapping();
                }
            }
        }
    }

    if state.phase == GamePhase::Playing {
        step_playing(state, rng, &mut out.events);
    }

    out
}

/// One simulation step of the Playing phase
fn step_playing<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    state.actor.update();

    state.obstacles.advance();
    state.obstacles.prune();

    // Collision and pass-through, front to back. The first hit ends the
    // round and nothing behind it is scored this tick.
    let mut hit = None;
    for obstacle in state.obstacles.iter_mut() {
        if collides_with_obstacle(&state.actor, obstacle) {
            hit = Some(obstacle.id);
            break;
        }

        if !obstacle.scored && has_passed(&state.actor, obstacle) {
            obstacle.scored = true;
            state.score.add_point();
            log::debug!("Passed obstacle {} (score {})", obstacle.id, state.score.current());
            events.push(GameEvent::Scored {
                obstacle_id: obstacle.id,
                score: state.score.current(),
            });
        }
    }

    if let Some(id) = hit {
        enter_game_over(state, DeathCause::Obstacle(id), events);
    }

    let window_height = state.config().window_height;
    if collides_with_ground(&state.actor, window_height) {
        enter_game_over(state, DeathCause::Ground, events);
    }

    if state.is_over() {
        return;
    }

    if let Some((id, gap_center)) = state.tick_spawner(rng) {
        log::debug!("Spawned obstacle {id} with gap at {gap_center:.1}");
        events.push(GameEvent::ObstacleSpawned {
            obstacle_id: id,
            gap_center,
        });
    }
}

/// Playing -> GameOver. Only the first call per round has an effect.
fn enter_game_over(state: &mut GameState, cause: DeathCause, events: &mut Vec<GameEvent>) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    let score = state.score.current();
    log::info!(
        "Game over after {} ticks: {:?}, final score {}",
        state.time_ticks,
        cause,
        score
    );
    events.push(GameEvent::GameOver { score, cause });
}
