//! Sky Hop entry point
//!
//! Runs a headless session: no window, no renderer, just the frame-paced
//! simulation loop. A rendering front end would read `world.scene()` after
//! every tick; here the scene is only logged.
//!
//! Usage: `sky-hop [seed]`. Set `SKY_HOP_TUNING=path.json` to override the
//! default tuning.

use std::process::ExitCode;

use sky_hop::sim::{TickInput, World, tick};
use sky_hop::{FrameClock, Tuning};

fn main() -> ExitCode {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                log::error!("seed must be an unsigned integer, got {arg:?}");
                return ExitCode::FAILURE;
            }
        },
        None => rand::random(),
    };

    let tuning = match std::env::var_os("SKY_HOP_TUNING") {
        Some(path) => match Tuning::load(std::path::Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => Tuning::default(),
    };

    log::info!("Sky Hop starting with seed {seed}");
    let mut world = World::new(seed, tuning);
    let mut clock = FrameClock::new();

    // input → tick → render, once per frame; headless, so the render
    // collaborator is a no-op
    while world.running {
        let input = TickInput::default();
        let dt = clock.tick();
        tick(&mut world, &input, dt);

        if world.time_ticks % 60 == 0 {
            log::debug!(
                "tick {} hopper at ({:.1}, {:.1}) {:?}",
                world.time_ticks,
                world.hopper.pos.x,
                world.hopper.pos.y,
                world.hopper.state,
            );
        }
    }

    log::info!("session over after {} ticks", world.time_ticks);
    ExitCode::SUCCESS
}
