//! Penguin Drift - a windy arena arcade game
//!
//! The player's penguin is blown away from the mouse-driven fan. Catch the
//! fish to score before the level timer runs out; from level 2 on, a hunter
//! chases the penguin and ends the run on contact.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `tuning`: Data-driven per-level balance
//! - `highscores`: Single-integer high score file
//! - `platform`: Frontend boundary (events, pointer, present)
//! - `ui`: Scene and text strings handed to the frontend
//! - `game`: Top-level driver (title, three levels, summary)

pub mod game;
pub mod highscores;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{GameConfig, GameSummary, RunOutcome};
pub use tuning::LevelSettings;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 700.0;

    /// Target frame rate (simulation runs one tick per frame)
    pub const FPS: u32 = 60;

    /// Border margin around the playable arena
    pub const BORDER_SIZE: f32 = 50.0;

    /// Sprite sizes (square sprites)
    pub const PLAYER_SIZE: f32 = 100.0;
    pub const HUNTER_SIZE: f32 = 70.0;
    pub const FAN_SIZE: f32 = 60.0;

    /// Fan repulsion reaches this far from the player center
    pub const PUSH_DISTANCE: f32 = 120.0;
    /// Base player speed before proximity scaling
    pub const PLAYER_BASE_SPEED: f32 = 3.0;
    /// Proximity scaling adds up to this on top of the base multiplier of 1
    pub const MAX_SPEED_MULTIPLIER: f32 = 2.0;
    /// Multiplicative velocity damping applied every tick
    pub const INERTIA_DECAY: f32 = 0.95;
    /// Push is an acceleration impulse, not a velocity set
    pub const PUSH_FACTOR: f32 = 0.1;

    /// Wall-clock length of one level (seconds)
    pub const LEVEL_DURATION: f32 = 30.0;
    /// Number of levels in a run
    pub const LEVELS_COUNT: u32 = 3;

    /// Hunter spawns at least this far from the player center
    pub const MIN_HUNTER_DISTANCE: f32 = 150.0;
    /// Hunter spawn placement retry cap
    pub const HUNTER_SPAWN_ATTEMPTS: u32 = 128;

    /// Explosion animation frame count and ticks per frame
    pub const EXPLOSION_FRAMES: usize = 6;
    pub const EXPLOSION_FRAME_TICKS: u32 = 3;

    /// High score file name (one integer on the first line)
    pub const HIGHSCORE_FILE: &str = "highscore.txt";
    /// Optional balance override file, read at startup when present
    pub const TUNING_FILE: &str = "tuning.json";
}
