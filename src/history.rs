//! Rolling calculation history for front ends.
//!
//! The evaluation pipeline never touches this module; a front end records an
//! entry after each successful `compute` and persists the list as JSON.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub expression: String,
    pub result: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Failed to access history file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed history file {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Newest-first list of results, capped at a fixed number of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    /// Whatever was last left in the input, restored on the next start.
    #[serde(default)]
    last_input: String,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            last_input: String::new(),
            capacity,
        }
    }

    /// Loads history from `path`. A missing file yields an empty history.
    pub fn load(path: &Path, capacity: usize) -> Result<Self, HistoryError> {
        if !path.exists() {
            debug!("No history file at {}", path.display());
            return Ok(Self::with_capacity(capacity));
        }

        let contents = fs::read_to_string(path).map_err(|source| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut history: History =
            serde_json::from_str(&contents).map_err(|source| HistoryError::Format {
                path: path.to_path_buf(),
                source,
            })?;

        history.capacity = capacity;
        history.entries.truncate(capacity);
        debug!(
            "Loaded {} history entries from {}",
            history.entries.len(),
            path.display()
        );
        Ok(history)
    }

    /// Writes history to `path` as JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        let io_error = |source: std::io::Error| HistoryError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents = serde_json::to_string_pretty(self).map_err(|source| HistoryError::Format {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, contents).map_err(io_error)
    }

    /// Records a successful calculation as the newest entry.
    pub fn push(&mut self, expression: impl Into<String>, result: impl Into<String>) {
        self.entries.insert(
            0,
            HistoryEntry {
                expression: expression.into(),
                result: result.into(),
                timestamp: now_millis(),
            },
        );
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    pub fn set_last_input(&mut self, input: impl Into<String>) {
        self.last_input = input.into();
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("minicalc-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_push_is_newest_first() {
        let mut history = History::new();
        history.push("1+1", "2");
        history.push("2*3", "6");

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].expression, "2*3");
        assert_eq!(history.entries()[1].result, "2");
        assert!(history.entries()[0].timestamp > 0);
    }

    #[test]
    fn test_capped_at_capacity() {
        let mut history = History::new();
        for i in 0..40 {
            history.push(format!("{}+0", i), i.to_string());
        }

        assert_eq!(history.len(), DEFAULT_CAPACITY);
        assert_eq!(history.get(0).unwrap().result, "39");
        assert_eq!(history.get(29).unwrap().result, "10");
        assert!(history.get(30).is_none());
    }

    #[test]
    fn test_clear_keeps_last_input() {
        let mut history = History::with_capacity(5);
        history.push("1+1", "2");
        history.set_last_input("2");
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.last_input(), "2");
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("save_and_load/history.json");
        let mut history = History::with_capacity(10);
        history.push("sin(90)", "1");
        history.push("2^10", "1024");
        history.set_last_input("1024");
        history.save(&path).unwrap();

        let loaded = History::load(&path, 10).unwrap();
        assert_eq!(loaded, history);

        let truncated = History::load(&path, 1).unwrap();
        assert_eq!(truncated.len(), 1);
        assert_eq!(truncated.entries()[0].expression, "2^10");
        assert_eq!(truncated.capacity(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let history = History::load(&temp_path("does-not-exist.json"), 30).unwrap();
        assert!(history.is_empty());
        assert_eq!(history.last_input(), "");
    }

    #[test]
    fn test_load_malformed_file() {
        let path = temp_path("malformed/history.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result = History::load(&path, 30);
        assert!(matches!(result, Err(HistoryError::Format { .. })));

        let _ = fs::remove_file(&path);
    }
}
