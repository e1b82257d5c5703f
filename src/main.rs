//! Lava Run headless runner
//!
//! Plays every level of a pack for a fixed stretch of simulated time and logs
//! the outcome. Player input is not simulated, so levels only end when a
//! hazard reaches the player.
//!
//! Usage: `lava-run [pack.json] [settings.json]`

use lava_run::sim::{LevelStatus, advance};
use lava_run::{LevelPack, Result, Settings};

/// Simulated seconds per level
const RUN_TIME: f32 = 30.0;

fn main() {
    env_logger::init();
    log::info!("Lava Run (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args().skip(1);

    let pack = match args.next() {
        Some(path) => LevelPack::from_json(&std::fs::read_to_string(path)?)?,
        None => LevelPack::demo()?,
    };
    let settings = match args.next() {
        Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
        None => Settings::default(),
    };

    for (index, schema) in pack.iter().enumerate() {
        let mut level = settings.parse(schema);
        let ticks = advance(&mut level, RUN_TIME, settings.max_step);

        match level.status {
            LevelStatus::InProgress => log::info!(
                "Level {}: still running after {} ticks, {} actors left",
                index + 1,
                ticks,
                level.actors.len()
            ),
            status => log::info!("Level {}: {:?} after {} ticks", index + 1, status, ticks),
        }
    }

    Ok(())
}
