//! Best-score persistence.
//!
//! The engine only proposes best-score candidates; this module is the
//! external slot they are written to. One integer, stored as a small JSON
//! record so the file is self-describing. A missing file reads as zero.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct BestScoreRecord {
    best_score: u32,
}

/// A get/set slot for the persisted best score.
#[derive(Debug, Clone)]
pub struct BestScoreStore {
    path: PathBuf,
}

impl BestScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store location under the user's home directory, falling back to the
    /// working directory when no home is set.
    pub fn default_path() -> PathBuf {
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join(".tui-2048").join("best_score.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted best score. A missing file is an empty slot, not
    /// an error.
    pub fn load(&self) -> Result<u32> {
        if !self.path.exists() {
            return Ok(0);
        }

        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read best score from {:?}", self.path))?;
        let record: BestScoreRecord = serde_json::from_str(&json)
            .with_context(|| format!("malformed best score file {:?}", self.path))?;
        Ok(record.best_score)
    }

    /// Write a new best score, creating parent directories as needed.
    pub fn save(&self, best_score: u32) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {:?}", parent))?;
        }

        let json = serde_json::to_string_pretty(&BestScoreRecord { best_score })
            .context("failed to serialize best score")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write best score to {:?}", self.path))?;
        Ok(())
    }
}
