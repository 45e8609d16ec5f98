//! High score persistence
//!
//! The store is a text file holding one non-negative integer on its first
//! line. A missing or unparsable file reads as 0: missing state is a fresh
//! start, never an error. The file is only rewritten when a run strictly
//! beats the stored value.

use std::fs;
use std::path::{Path, PathBuf};

/// Handle to the high score file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Best score on record, 0 when there is none (or the file is garbage).
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.lines().next()?.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Record a finished run. The file is overwritten only when `total`
    /// strictly exceeds the stored best; returns true in that case. A write
    /// failure loses the record but never fails the run.
    pub fn record(&self, total: u32) -> bool {
        let best = self.load();
        if total <= best {
            return false;
        }
        match fs::write(&self.path, format!("{total}\n")) {
            Ok(()) => log::info!("new high score {total} (was {best})"),
            Err(err) => log::warn!(
                "could not write high score to {}: {err}",
                self.path.display()
            ),
        }
        true
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
