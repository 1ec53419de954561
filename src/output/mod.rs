//! Terminal output formatting
//!
//! Gallows art and display utilities for the interactive game.

pub mod art;
pub mod display;

pub use art::gallows_stage;
