//! High score persistence.
//!
//! The all-time best score lives in a small JSON file under the platform
//! data directory. Reads and writes are best effort: a missing or mangled
//! file loads as zero, and a failed write is dropped rather than
//! interrupting the game.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Copy, Default)]
struct HighScore {
    best: u32,
}

/// File-backed store for the all-time best score.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store under the platform data directory
    /// (`<data_dir>/tui-bombtris/highscore.json`).
    pub fn new() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("tui-bombtris");
        path.push("highscore.json");
        Self { path }
    }

    /// Store at an explicit file path.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Zero when the file is missing or unreadable.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(data) => {
                serde_json::from_str::<HighScore>(&data)
                    .unwrap_or_default()
                    .best
            }
            Err(_) => 0,
        }
    }

    /// Best effort; a failure leaves the previous file (or nothing) behind.
    pub fn save(&self, best: u32) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(data) = serde_json::to_string_pretty(&HighScore { best }) {
            let _ = fs::write(&self.path, data);
        }
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}
