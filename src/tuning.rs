//! Data-driven game balance
//!
//! The built-in level table matches the shipped game. A JSON file with the
//! same shape can override it for playtesting without a rebuild; any problem
//! reading it falls back to the built-ins.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::LEVELS_COUNT;

/// Static per-level configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSettings {
    /// Side length of the square target sprite
    pub target_size: f32,
    /// Whether the target drifts and bounces
    pub target_moves: bool,
    /// Magnitude of each target velocity component
    pub target_speed: f32,
    /// Points per capture
    pub score_multiplier: u32,
    /// Hunter pursuit speed (pixels per tick)
    pub hunter_speed: f32,
    /// Whether a hunter spawns at all
    pub hunter_enabled: bool,
}

/// The shipped three-level difficulty curve.
pub fn builtin_levels() -> [LevelSettings; LEVELS_COUNT as usize] {
    [
        LevelSettings {
            target_size: 50.0,
            target_moves: true,
            target_speed: 0.0,
            score_multiplier: 1,
            hunter_speed: 0.0,
            hunter_enabled: false,
        },
        LevelSettings {
            target_size: 40.0,
            target_moves: false,
            target_speed: 0.0,
            score_multiplier: 2,
            hunter_speed: 1.0,
            hunter_enabled: true,
        },
        LevelSettings {
            target_size: 40.0,
            target_moves: true,
            target_speed: 2.0,
            score_multiplier: 3,
            hunter_speed: 2.0,
            hunter_enabled: true,
        },
    ]
}

/// Level table indexed by level number 1..=`LEVELS_COUNT`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    pub levels: [LevelSettings; LEVELS_COUNT as usize],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            levels: builtin_levels(),
        }
    }
}

impl Tuning {
    /// Settings for a 1-based level number.
    pub fn level(&self, level: u32) -> LevelSettings {
        self.levels[(level - 1) as usize]
    }

    /// Load overrides from a JSON file. An absent file is the normal case and
    /// loads the built-ins silently; a malformed one is reported and ignored.
    pub fn load_or_default(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&json) {
            Ok(tuning) => {
                log::info!("loaded tuning overrides from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!(
                    "ignoring malformed tuning file {}: {}",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_difficulty_curve() {
        let tuning = Tuning::default();

        let first = tuning.level(1);
        assert_eq!(first.target_size, 50.0);
        assert_eq!(first.score_multiplier, 1);
        assert!(!first.hunter_enabled);

        let second = tuning.level(2);
        assert!(!second.target_moves);
        assert_eq!(second.score_multiplier, 2);
        assert!(second.hunter_enabled);
        assert_eq!(second.hunter_speed, 1.0);

        let third = tuning.level(3);
        assert!(third.target_moves);
        assert_eq!(third.target_speed, 2.0);
        assert_eq!(third.score_multiplier, 3);
        assert_eq!(third.hunter_speed, 2.0);
    }

    #[test]
    fn test_missing_override_file_loads_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let tuning = Tuning::load_or_default(&dir.path().join("nope.json"));
        assert_eq!(tuning.levels, builtin_levels());
    }

    #[test]
    fn test_malformed_override_file_loads_builtins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");
        fs::write(&path, "{ not json").unwrap();
        let tuning = Tuning::load_or_default(&path);
        assert_eq!(tuning.levels, builtin_levels());
    }

    #[test]
    fn test_override_file_replaces_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.json");

        let mut custom = Tuning::default();
        custom.levels[0].score_multiplier = 10;
        fs::write(&path, serde_json::to_string(&custom).unwrap()).unwrap();

        let tuning = Tuning::load_or_default(&path);
        assert_eq!(tuning.level(1).score_multiplier, 10);
        assert_eq!(tuning.level(2), builtin_levels()[1]);
    }
}
