//! Audio cue dispatch
//!
//! The core only decides *when* a sound plays. Decoding and mixing belong
//! to an `AudioBackend` supplied by the host; without one the manager is
//! silent and the game runs unchanged.

use crate::config::GameConfig;
use crate::consts::{MASTER_VOLUME, MUSIC_VOLUME, SFX_VOLUME};
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Actor jumped
    Jump,
    /// Obstacle cleared
    Score,
    /// Round lost
    GameOver,
}

/// Host audio device
pub trait AudioBackend {
    /// Fire a one-shot effect at the given volume (0.0 - 1.0)
    fn play(&mut self, effect: SoundEffect, volume: f32);
    /// Start the looping background track from the top
    fn start_music(&mut self, volume: f32);
    fn stop_music(&mut self);
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    /// Background loop should be running
    music_playing: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend - audio disabled");
        }
        Self::with_backend(backend)
    }

    /// Silent manager, no warning
    pub fn disabled() -> Self {
        Self::with_backend(None)
    }

    fn with_backend(backend: Option<Box<dyn AudioBackend>>) -> Self {
        Self {
            backend,
            master_volume: MASTER_VOLUME,
            sfx_volume: SFX_VOLUME,
            music_volume: MUSIC_VOLUME,
            muted: false,
            music_playing: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0), applied next time the loop starts
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio. The music loop pauses while muted.
    pub fn set_muted(&mut self, muted: bool) {
        if self.muted == muted {
            return;
        }
        self.muted = muted;
        if !self.music_playing {
            return;
        }
        let volume = self.music_volume * self.master_volume;
        if let Some(backend) = &mut self.backend {
            if muted {
                backend.stop_music();
            } else {
                backend.start_music(volume);
            }
        }
    }

    /// Take the levels and mute flag from the configuration
    pub fn apply_config(&mut self, config: &GameConfig) {
        self.set_master_volume(config.master_volume);
        self.set_sfx_volume(config.sfx_volume);
        self.set_music_volume(config.music_volume);
        self.set_muted(config.muted);
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = &mut self.backend else { return };
        backend.play(effect, vol);
    }

    /// Start the background loop (restarts it if already running)
    pub fn start_music(&mut self) {
        self.music_playing = true;
        if self.muted {
            return;
        }
        let volume = self.music_volume * self.master_volume;
        if let Some(backend) = &mut self.backend {
            backend.start_music(volume);
        }
    }

    pub fn stop_music(&mut self) {
        if !self.music_playing {
            return;
        }
        self.music_playing = false;
        if let Some(backend) = &mut self.backend {
            backend.stop_music();
        }
    }

    /// React to a simulation event
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Jumped => self.play(SoundEffect::Jump),
            GameEvent::Scored { .. } => self.play(SoundEffect::Score),
            GameEvent::GameOver { .. } => {
                self.play(SoundEffect::GameOver);
                self.stop_music();
            }
            GameEvent::Restarted { .. } => self.start_music(),
            GameEvent::ObstacleSpawned { .. } => {}
        }
    }
}
