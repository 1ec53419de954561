//! Per-game transcript logging
//!
//! Each completed game gets its own `game<N>/log.txt` under the log
//! directory. Game numbers come from scanning existing `game<N>` directories
//! and taking the maximum plus one, so deleting old logs never reuses a
//! number.

pub mod transcript;

use crate::core::GameState;
use crate::stats::Statistics;
use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writer for per-game transcript files
#[derive(Debug, Clone)]
pub struct GameLogger {
    log_dir: PathBuf,
}

impl GameLogger {
    /// Create a logger rooted at the given directory
    #[must_use]
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    #[must_use]
    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Next sequential game number based on existing `game<N>` directories
    ///
    /// Gap-tolerant: returns max existing + 1, or 1 when the directory is
    /// missing or holds no game directories.
    #[must_use]
    pub fn next_game_number(&self) -> u32 {
        let Ok(entries) = fs::read_dir(&self.log_dir) else {
            return 1;
        };

        let max = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_prefix("game"))
                    .and_then(|digits| digits.parse::<u32>().ok())
            })
            .max()
            .unwrap_or(0);

        max + 1
    }

    /// Write the transcript for a completed game
    ///
    /// Creates `game<N>/log.txt` keyed by the game's number and returns its
    /// path. Existing transcripts are never touched.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory or file cannot be created.
    pub fn write(
        &self,
        state: &GameState,
        score: u32,
        stats: &Statistics,
    ) -> io::Result<PathBuf> {
        let game_dir = self.log_dir.join(format!("game{}", state.game_number()));
        fs::create_dir_all(&game_dir)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let contents = transcript::render(state, score, stats, &timestamp);

        let log_file = game_dir.join("log.txt");
        fs::write(&log_file, contents)?;
        Ok(log_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_game_is_number_one() {
        let dir = tempfile::tempdir().unwrap();
        let logger = GameLogger::new(dir.path().join("game_log"));
        assert_eq!(logger.next_game_number(), 1);
    }

    #[test]
    fn numbering_is_gap_tolerant() {
        let dir = tempfile::tempdir().unwrap();
        let logger = GameLogger::new(dir.path());

        fs::create_dir_all(dir.path().join("game1")).unwrap();
        fs::create_dir_all(dir.path().join("game7")).unwrap();
        fs::create_dir_all(dir.path().join("game3")).unwrap();

        assert_eq!(logger.next_game_number(), 8);
    }

    #[test]
    fn unrelated_entries_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let logger = GameLogger::new(dir.path());

        fs::create_dir_all(dir.path().join("game2")).unwrap();
        fs::create_dir_all(dir.path().join("gameXYZ")).unwrap();
        fs::create_dir_all(dir.path().join("notes")).unwrap();
        fs::write(dir.path().join("game9"), "a file, not a dir").unwrap();

        assert_eq!(logger.next_game_number(), 3);
    }

    #[test]
    fn write_creates_one_file_per_game() {
        let dir = tempfile::tempdir().unwrap();
        let logger = GameLogger::new(dir.path());

        let mut game = GameState::new("cat", "animals", 4);
        game.guess_word("cat");

        let path = logger.write(&game, 30, &Statistics::default()).unwrap();
        assert_eq!(path, dir.path().join("game4").join("log.txt"));

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Game 4 Log"));
        assert!(contents.contains("Word: cat"));
    }
}
