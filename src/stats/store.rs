//! Statistics persistence
//!
//! Reads and writes the single JSON statistics record. Reads never fail:
//! a missing file yields defaults and a corrupt file yields defaults with a
//! warning, so a damaged record can't take the game down.

use super::Statistics;
use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for the statistics record
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    /// Create a store keyed to the given file path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record, substituting defaults on any failure
    #[must_use]
    pub fn load(&self) -> Statistics {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(stats) => stats,
                Err(e) => {
                    warn!(
                        "Could not parse statistics file {} ({e}). Starting fresh.",
                        self.path.display()
                    );
                    Statistics::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Statistics::default(),
            Err(e) => {
                warn!(
                    "Could not read statistics file {} ({e}). Starting fresh.",
                    self.path.display()
                );
                Statistics::default()
            }
        }
    }

    /// Overwrite the persisted record with pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the parent directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self, stats: &Statistics) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, contents)
    }

    /// Apply one game outcome and persist the updated record
    ///
    /// This is the only write path. A write failure is warned about and
    /// swallowed; the updated record is still returned so the player sees
    /// their result either way.
    pub fn record_outcome(&self, won: bool, score: u32) -> Statistics {
        let mut stats = self.load();
        stats.record(won, score);

        if let Err(e) = self.save(&stats) {
            warn!("Could not save statistics ({e})");
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> StatsStore {
        StatsStore::new(dir.path().join("statistics.json"))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load(), Statistics::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json {{{").unwrap();
        assert_eq!(store.load(), Statistics::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut stats = Statistics::default();
        stats.record(true, 35);
        stats.record(false, 0);

        store.save(&stats).unwrap();
        assert_eq!(store.load(), stats);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("nested/deep/statistics.json"));
        store.save(&Statistics::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn record_outcome_accumulates_across_calls() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.record_outcome(true, 30);
        store.record_outcome(false, 0);
        let stats = store.record_outcome(true, 50);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.total_score, 80);

        // And the persisted copy matches what was returned
        assert_eq!(store.load(), stats);
    }

    #[test]
    fn record_outcome_overwrites_rather_than_appends() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.record_outcome(true, 10);
        store.record_outcome(true, 10);

        let content = fs::read_to_string(store.path()).unwrap();
        let parsed: Statistics = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.games_played, 2);
    }

    #[test]
    fn partial_record_on_disk_is_backfilled() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"wins": 4}"#).unwrap();

        let stats = store.load();
        assert_eq!(stats.wins, 4);
        assert_eq!(stats.games_played, 0);
    }
}
