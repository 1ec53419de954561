//! Hangman
//!
//! A terminal hangman game: pick a category, guess letters (or the whole
//! word) against a six-wrong-guess budget. Scores, cumulative statistics and
//! a per-game transcript persist across sessions.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, GuessOutcome, score};
//!
//! let mut game = GameState::new("cat", "animals", 1);
//! assert_eq!(game.guess_letter('c'), GuessOutcome::Correct);
//! assert_eq!(game.guess_letter('a'), GuessOutcome::Correct);
//! assert_eq!(game.guess_letter('t'), GuessOutcome::Correct);
//! assert!(game.won());
//! assert_eq!(score(3, game.wrong_guesses(), game.won()), 30);
//! ```

// Game state machine and scoring
pub mod core;

// Word pools and selection
pub mod words;

// Persistent statistics
pub mod stats;

// Per-game transcripts
pub mod gamelog;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
