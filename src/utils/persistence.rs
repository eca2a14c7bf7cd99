//! File persistence: the JSON settings file and the high-score file.
//!
//! Settings reads are strict and the caller decides on a fallback. The
//! high-score store is best-effort: an unreadable file means 0, and a
//! failed write is logged and otherwise ignored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read and parse a JSON file. A missing file is `NotFound`, bad JSON is
/// `InvalidData`.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> io::Result<T> {
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Where the best distance lives between runs.
pub trait HighScoreStore {
    /// Stored best distance; 0 when nothing usable is stored.
    fn load(&self) -> u64;
    /// Persist a new best. Failures are swallowed.
    fn save(&self, score: u64);
}

/// High score kept as decimal text in a single file.
#[derive(Debug, Clone)]
pub struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    /// Relative paths are resolved against the working directory at startup.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.is_relative() {
            std::env::current_dir()
                .map(|cwd| cwd.join(&path))
                .unwrap_or(path)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strict read: surfaces I/O and parse errors.
    pub fn read(&self) -> io::Result<u64> {
        let text = fs::read_to_string(&self.path)?;
        parse_score(&text)
    }

    /// Strict write: replaces the whole file.
    pub fn write(&self, score: u64) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

impl HighScoreStore for HighScoreFile {
    fn load(&self) -> u64 {
        match self.read() {
            Ok(score) => score,
            Err(e) => {
                log::debug!("high score unavailable at {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&self, score: u64) {
        if let Err(e) = self.write(score) {
            log::warn!("could not save high score to {}: {}", self.path.display(), e);
        }
    }
}

/// Parse trimmed decimal text. Negative values count as 0.
pub fn parse_score(text: &str) -> io::Result<u64> {
    let value: i64 = text
        .trim()
        .parse()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(value.max(0) as u64)
}
