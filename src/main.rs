//! Penguin Drift entry point
//!
//! No windowed frontend is wired up yet; the scripted headless frontend
//! plays a full run, which exercises the whole game and doubles as a demo.
//! Pass a number as the first argument to fix the run seed.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use penguin_drift::consts::TUNING_FILE;
use penguin_drift::game::{self, GameConfig, RunOutcome};
use penguin_drift::platform::HeadlessFrontend;
use penguin_drift::tuning::Tuning;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut config = GameConfig::new(seed);
    config.tuning = Tuning::load_or_default(Path::new(TUNING_FILE));

    log::info!("Penguin Drift starting (seed {seed})");

    let mut frontend = HeadlessFrontend::new();
    match game::run(&mut frontend, &config) {
        RunOutcome::Completed(summary) => {
            if summary.caught {
                log::info!("caught by the hunter, run over with 0");
            }
            if summary.new_record {
                log::info!("final score {}: new record!", summary.total);
            } else {
                log::info!("final score {}, best {}", summary.total, summary.best);
            }
        }
        RunOutcome::QuitRequested => log::info!("quit requested, bye"),
    }
}
