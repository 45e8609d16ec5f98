//! Top-level game driver
//!
//! Owns the real-time concerns the simulation stays clear of: wall-clock
//! level timing, frame pacing, the blocking title/banner screens, the
//! cumulative score across levels, and the high score file. A quit event is
//! honored in every loop, blocking screens included.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{FPS, HIGHSCORE_FILE, LEVELS_COUNT, LEVEL_DURATION};
use crate::highscores::HighScoreStore;
use crate::platform::{Event, Frontend};
use crate::sim::{SessionPhase, SessionState, TickInput, tick};
use crate::tuning::Tuning;
use crate::ui::{self, Scene};

/// Fixed configuration for one process, built once at startup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Run seed; each level derives its session seed from it
    pub seed: u64,
    /// Per-level balance table
    pub tuning: Tuning,
    /// Wall-clock length of each level (seconds)
    pub level_duration: f32,
    /// How long the between-level banner holds
    pub banner_duration: Duration,
    /// Frame pacing target
    pub frame_duration: Duration,
    /// High score file location
    pub highscore_path: PathBuf,
}

impl GameConfig {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tuning: Tuning::default(),
            level_duration: LEVEL_DURATION,
            banner_duration: Duration::from_secs(1),
            frame_duration: Duration::from_secs(1) / FPS,
            highscore_path: PathBuf::from(HIGHSCORE_FILE),
        }
    }
}

/// What a finished run looked like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Cumulative score across levels (0 after a catch)
    pub total: u32,
    /// Best score on record before this run
    pub best: u32,
    /// Whether this run rewrote the record
    pub new_record: bool,
    /// Whether the hunter ended the run
    pub caught: bool,
}

/// How the process left the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(GameSummary),
    /// Quit arrived before the run finished; nothing was persisted
    QuitRequested,
}

struct LevelOutcome {
    score: u32,
    caught: bool,
}

/// Play one full run: title screen, levels 1..=3, summary screen.
pub fn run(frontend: &mut dyn Frontend, config: &GameConfig) -> RunOutcome {
    log::info!("starting run, seed {}", config.seed);
    let mut rng = Pcg32::seed_from_u64(config.seed);

    if wait_for_key(frontend, config, ui::title_lines()).is_none() {
        return RunOutcome::QuitRequested;
    }

    let mut total: u32 = 0;
    let mut caught = false;
    for level in 1..=LEVELS_COUNT {
        if hold_banner(frontend, config, ui::level_banner(level)).is_none() {
            return RunOutcome::QuitRequested;
        }
        let outcome = match run_level(frontend, config, level, rng.random()) {
            Some(outcome) => outcome,
            None => return RunOutcome::QuitRequested,
        };
        log::info!(
            "level {level} over: score {}, caught {}",
            outcome.score,
            outcome.caught
        );
        if outcome.caught {
            total = 0;
            caught = true;
            break;
        }
        total += outcome.score;
    }

    let store = HighScoreStore::new(&config.highscore_path);
    let best = store.load();
    let new_record = store.record(total);
    let summary = GameSummary {
        total,
        best,
        new_record,
        caught,
    };

    // The run is sealed at this point; a quit on the summary screen changes
    // nothing about its outcome.
    let _ = wait_for_key(frontend, config, ui::summary_lines(total, best, new_record));
    RunOutcome::Completed(summary)
}

/// One timed level round: the 60 Hz frame loop.
fn run_level(
    frontend: &mut dyn Frontend,
    config: &GameConfig,
    level: u32,
    seed: u64,
) -> Option<LevelOutcome> {
    let mut state = SessionState::new(level, config.tuning.level(level), seed);
    state.duration = config.level_duration;

    let start = Instant::now();
    let mut next_frame = start + config.frame_duration;
    loop {
        for event in frontend.poll_events() {
            if event == Event::Quit {
                log::info!("quit requested during level {level}");
                return None;
            }
        }

        let input = TickInput {
            pointer: frontend.pointer(),
            elapsed_secs: start.elapsed().as_secs_f32(),
        };
        tick(&mut state, &input);

        let remaining = state.duration - input.elapsed_secs;
        frontend.present(&ui::frame_scene(&state, input.pointer, remaining));

        if state.phase != SessionPhase::Running {
            return Some(LevelOutcome {
                score: state.score,
                caught: state.phase == SessionPhase::Caught,
            });
        }

        let now = Instant::now();
        if next_frame > now {
            thread::sleep(next_frame - now);
        }
        next_frame += config.frame_duration;
    }
}

/// Show a text screen and block until a key press. None means quit.
fn wait_for_key(
    frontend: &mut dyn Frontend,
    config: &GameConfig,
    lines: Vec<String>,
) -> Option<()> {
    frontend.present(&Scene::text(lines));
    loop {
        for event in frontend.poll_events() {
            match event {
                Event::Quit => return None,
                Event::KeyDown => return Some(()),
            }
        }
        thread::sleep(config.frame_duration);
    }
}

/// Show a text screen for a fixed delay, still honoring quit. None means quit.
fn hold_banner(
    frontend: &mut dyn Frontend,
    config: &GameConfig,
    lines: Vec<String>,
) -> Option<()> {
    frontend.present(&Scene::text(lines));
    let deadline = Instant::now() + config.banner_duration;
    while Instant::now() < deadline {
        for event in frontend.poll_events() {
            if event == Event::Quit {
                return None;
            }
        }
        thread::sleep(config.frame_duration.min(config.banner_duration));
    }
    Some(())
}
