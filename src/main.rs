//! Flappy entry point
//!
//! Native headless session: the autopilot plays into an offscreen vertex
//! surface at the configured tick rate.
//!
//! Usage: `flappy [config.json] [seconds]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use flappy::audio::AudioManager;
    use flappy::platform::{Autopilot, FixedRate};
    use flappy::renderer::shapes::VertexSurface;
    use flappy::{Game, GameConfig};

    env_logger::init();
    log::info!("Flappy (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load(&path).unwrap_or_else(|err| {
            log::warn!("Failed to load config from {}: {} - using defaults", path, err);
            GameConfig::default()
        }),
        None => GameConfig::default(),
    };
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(30);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut clock = FixedRate::from_config(&config);
    let mut input = Autopilot::new(Some(seconds.saturating_mul(u64::from(config.tick_rate))));
    let mut surface = VertexSurface::new();
    let mut game = Game::new(config, seed, AudioManager::new(None));

    let summary = game.run(&mut input, &mut surface, &mut clock);
    log::info!(
        "Rendered {} frames, best score {}",
        surface.frames,
        summary.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host; the library is usable from a custom one
}
