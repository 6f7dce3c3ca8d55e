//! Game runner
//!
//! Owns everything a session needs (state, RNG, audio) and drives the
//! drain → tick → audio → render → throttle loop until a quit arrives.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::AudioManager;
use crate::config::GameConfig;
use crate::platform::{FixedRate, InputSource};
use crate::renderer::{self, Surface};
use crate::sim::{GameEvent, GameState, InputEvent, TickInput, TickOutput, tick};

/// Totals for a finished session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks run, frozen game-over ticks included and the quitting tick excluded
    pub ticks: u64,
    /// Rounds started, the first one included
    pub rounds: u32,
    /// Best score reached in any round
    pub best_score: u64,
}

pub struct Game {
    state: GameState,
    rng: Pcg32,
    audio: AudioManager,
    summary: RunSummary,
}

impl Game {
    /// Build a session, apply the configured audio levels and start the
    /// background music
    pub fn new(config: GameConfig, seed: u64, mut audio: AudioManager) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        audio.apply_config(&config);
        let mut game = Self {
            state: GameState::new(config),
            rng: Pcg32::seed_from_u64(seed),
            audio,
            summary: RunSummary {
                rounds: 1,
                ..Default::default()
            },
        };
        game.audio.start_music();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Run one tick and forward its events to the audio manager
    pub fn step(&mut self, events: Vec<InputEvent>) -> TickOutput {
        let out = tick(&mut self.state, &TickInput::new(events), &mut self.rng);
        if !out.quit {
            self.summary.ticks += 1;
        }
        // A restart queued ahead of the quit still happened
        for event in &out.events {
            if matches!(event, GameEvent::Restarted { .. }) {
                self.summary.rounds += 1;
            }
            self.audio.handle(event);
        }
        self.summary.best_score = self.summary.best_score.max(self.state.score.current());
        out
    }

    /// Loop until the input source asks to quit, then tear down audio
    pub fn run<I, S>(&mut self, input: &mut I, surface: &mut S, clock: &mut FixedRate) -> RunSummary
    where
        I: InputSource + ?Sized,
        S: Surface + ?Sized,
    {
        loop {
            let events = input.drain(&self.state);
            if self.step(events).quit {
                break;
            }
            renderer::render(&self.state, surface);
            clock.wait();
        }

        self.audio.stop_music();
        log::info!(
            "Session ended after {} ticks, {} rounds, best score {}",
            self.summary.ticks,
            self.summary.rounds,
            self.summary.best_score
        );
        self.summary
    }
}
