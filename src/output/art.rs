//! Gallows ASCII art
//!
//! One drawing per wrong-guess count, 0 (empty gallows) through 6 (game
//! over), plus the welcome and end-of-game banners.

use crate::core::MAX_WRONG_GUESSES;

/// Gallows drawings indexed by wrong-guess count
const GALLOWS_STAGES: [&str; 7] = [
    r"    +---+
    |   |
        |
        |
        |
        |
    =========",
    r"    +---+
    |   |
    O   |
        |
        |
        |
    =========",
    r"    +---+
    |   |
    O   |
    |   |
        |
        |
    =========",
    r"    +---+
    |   |
    O   |
   /|   |
        |
        |
    =========",
    r"    +---+
    |   |
    O   |
   /|\  |
        |
        |
    =========",
    r"    +---+
    |   |
    O   |
   /|\  |
   /    |
        |
    =========",
    r"    +---+
    |   |
    O   |
   /|\  |
   / \  |
        |
    =========",
];

pub const WELCOME_ART: &str = r"╔══════════════════════════════╗
║        HANGMAN GAME          ║
║                              ║
║     Can you guess the        ║
║        word in time?         ║
╚══════════════════════════════╝";

pub const WIN_ART: &str = r"🎉 CONGRATULATIONS! 🎉
    You Won!

    \    o    /
     \   |   /
      \  |  /
       \ | /
        \|/
        /|\
       / | \
      /  |  \
     /   |   \
    /    o    \";

pub const LOSE_ART: &str = r"💀 GAME OVER 💀
    You Lost!

    Better luck next time!";

/// Gallows drawing for the given wrong-guess count, clamped at the last stage
#[must_use]
pub fn gallows_stage(wrong_guesses: u32) -> &'static str {
    let index = wrong_guesses.min(MAX_WRONG_GUESSES) as usize;
    GALLOWS_STAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_stage_per_wrong_guess() {
        assert_eq!(GALLOWS_STAGES.len() as u32, MAX_WRONG_GUESSES + 1);
    }

    #[test]
    fn stages_are_distinct() {
        for i in 0..GALLOWS_STAGES.len() {
            for j in (i + 1)..GALLOWS_STAGES.len() {
                assert_ne!(GALLOWS_STAGES[i], GALLOWS_STAGES[j]);
            }
        }
    }

    #[test]
    fn stage_clamps_past_the_end() {
        assert_eq!(gallows_stage(6), gallows_stage(10));
        assert_eq!(gallows_stage(0), GALLOWS_STAGES[0]);
    }

    #[test]
    fn final_stage_has_both_legs() {
        assert!(gallows_stage(6).contains(r"/ \"));
    }
}
