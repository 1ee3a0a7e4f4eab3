//! Brick entry point
//!
//! Sets up logging and settings, picks the run seed and hands over to the
//! platform event loop.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use brick::Settings;

/// Seed drawn from the wall clock
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Run seed: {}", seed);

    match brick::platform::run(settings, seed) {
        Ok(()) => {
            log::info!("Brick closed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("brick: {}", e);
            ExitCode::FAILURE
        }
    }
}
