//! Persistent eco-points ledger.
//!
//! Completed sessions convert score into eco-points
//! (`score / SCORE_PER_ECO_POINT`) which are credited here and saved as
//! JSON under `~/.ecoquest/`. Load failures fall back to an empty
//! ledger; the games never depend on persistence succeeding.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::engine::SessionSummary;

const LEDGER_FILE: &str = "ledger.json";

/// One credited session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerEntry {
    /// Human-readable source, e.g. "Ocean Cleanup (Score: 340)".
    pub label: String,
    pub points: i64,
    /// Unix timestamp of the credit.
    pub timestamp: i64,
}

/// The player's accumulated eco-points across all sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EcoPointsLedger {
    pub total_points: i64,
    pub entries: Vec<LedgerEntry>,
}

impl EcoPointsLedger {
    /// Credit a completed session. Zero-point sessions are not recorded.
    /// Returns whether anything was credited.
    pub fn credit(&mut self, game_name: &str, summary: &SessionSummary) -> bool {
        if summary.points_earned <= 0 {
            return false;
        }
        self.total_points += summary.points_earned;
        self.entries.push(LedgerEntry {
            label: format!("{} (Score: {})", game_name, summary.final_score),
            points: summary.points_earned,
            timestamp: chrono::Utc::now().timestamp(),
        });
        true
    }

    /// Load the saved ledger, or an empty one if missing or unreadable.
    pub fn load() -> Self {
        load_json_or_default(LEDGER_FILE)
    }

    pub fn save(&self) -> io::Result<()> {
        save_json(LEDGER_FILE, self)
    }
}

/// Get the `~/.ecoquest/` directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".ecoquest");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path for a save file in `~/.ecoquest/`.
pub fn save_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file from `~/.ecoquest/`, returning `T::default()` if
/// missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match save_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON to `~/.ecoquest/`.
pub fn save_json<T: Serialize>(filename: &str, data: &T) -> io::Result<()> {
    let path = save_path(filename)?;
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
