//! Hex Popper entry point
//!
//! Native headless driver: runs the fixed-timestep loop with a random-aim
//! autoplayer until the game ends, then prints the final board as JSON.
//!
//! Usage: `hex-popper [config.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use glam::Vec2;
    use hex_popper::GameConfig;
    use hex_popper::consts::*;
    use hex_popper::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    /// Give up after ten simulated minutes
    const MAX_TICKS: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Hex Popper (native) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(Path::new(&path)),
        None => GameConfig::default(),
    };
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x00C0_FFEE);

    let mut state = GameState::with_config(config.clone(), seed);
    let mut aim_rng = Pcg32::seed_from_u64(seed ^ 0xA11A);

    let frame_dt = SIM_DT;
    let mut accumulator = 0.0;
    let (mut shots, mut bursts, mut drops, mut rows) = (0u32, 0usize, 0usize, 0u32);

    while state.phase() == GamePhase::Playing && state.time_ticks() < MAX_TICKS {
        accumulator += frame_dt;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = if state.projectile().is_at_rest() {
                // Aim somewhere in the upper half of the playfield
                let target = Vec2::new(
                    aim_rng.random_range(0.0..config.width),
                    aim_rng.random_range(0.0..config.height / 2.0),
                );
                TickInput {
                    pointer: Some(target),
                    fire: true,
                    ..Default::default()
                }
            } else {
                TickInput::default()
            };

            tick(&mut state, &input, SIM_DT);
            accumulator -= SIM_DT;
            substeps += 1;

            for event in state.events() {
                log::trace!("{:?}", event);
                match event {
                    GameEvent::Fired { .. } => shots += 1,
                    GameEvent::Burst { cells } => bursts += cells.len(),
                    GameEvent::Dropped { cells } => drops += cells.len(),
                    GameEvent::RowInjected { .. } => rows += 1,
                    _ => {}
                }
            }
        }
    }

    match state.phase() {
        GamePhase::GameOver => log::info!("Game over after {} ticks", state.time_ticks()),
        GamePhase::Playing => log::info!("Stopped after {} ticks", state.time_ticks()),
    }
    log::info!(
        "{} shots, {} burst, {} dropped, {} rows injected, {} spheres left",
        shots,
        bursts,
        drops,
        rows,
        state.grid().len()
    );

    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final board: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The presentation shell drives `hex_popper::sim::tick` directly on the web
}
