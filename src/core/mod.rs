//! Core domain types for Hangman
//!
//! This module contains the game state machine and the scoring function.
//! All types here are pure, testable, and have clear mathematical properties.

mod game;
mod score;

pub use game::{GameState, GuessOutcome, MAX_WRONG_GUESSES};
pub use score::score;
