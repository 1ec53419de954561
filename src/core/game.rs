//! Hangman game state machine
//!
//! A `GameState` owns the authoritative state of one in-progress game and is
//! advanced by `guess_letter` and `guess_word`. Win and loss are terminal:
//! once either flag is set, further guesses are ignored.

use std::collections::BTreeSet;

/// Wrong guesses allowed before the game is lost
pub const MAX_WRONG_GUESSES: u32 = 6;

/// Outcome of a single accepted (or rejected) guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was already guessed; nothing changed
    Repeated,
    /// The guess revealed letters (or matched the whole word)
    Correct,
    /// The guess was wrong and consumed one unit of the wrong-guess budget
    Wrong,
}

/// State of one hangman game
///
/// Created at game start, discarded at the next game start. The letter sets
/// are ordered so transcripts and displays are deterministic.
///
/// Invariants: `correct_letters ∪ wrong_letters == guessed_letters` and the
/// two subsets are disjoint (whole-word attempts touch no letter set on a
/// miss). `won` and `lost` are mutually exclusive and absorbing.
///
/// # Examples
/// ```
/// use hangman::core::{GameState, GuessOutcome};
///
/// let mut game = GameState::new("cat", "animals", 1);
/// assert_eq!(game.guess_letter('c'), GuessOutcome::Correct);
/// assert_eq!(game.guess_letter('c'), GuessOutcome::Repeated);
/// assert_eq!(game.progress(), "c _ _");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    target: String,
    category: String,
    guessed_letters: BTreeSet<char>,
    correct_letters: BTreeSet<char>,
    wrong_letters: BTreeSet<char>,
    wrong_guesses: u32,
    guess_count: u32,
    won: bool,
    lost: bool,
    progress_trace: Vec<String>,
    game_number: u32,
}

impl GameState {
    /// Start a new game for the given target word
    ///
    /// The word is lowercased and stays fixed for the game's duration. The
    /// first progress-trace entry (the fully masked word) is recorded here.
    #[must_use]
    pub fn new(word: &str, category: &str, game_number: u32) -> Self {
        let mut state = Self {
            target: word.to_lowercase(),
            category: category.to_lowercase(),
            guessed_letters: BTreeSet::new(),
            correct_letters: BTreeSet::new(),
            wrong_letters: BTreeSet::new(),
            wrong_guesses: 0,
            guess_count: 0,
            won: false,
            lost: false,
            progress_trace: Vec::new(),
            game_number,
        };

        let initial = state.progress();
        state.progress_trace.push(initial);
        state
    }

    /// Process a single-letter guess
    ///
    /// Returns `Repeated` without changing anything if the letter was already
    /// guessed (or the game is over). Otherwise the letter joins
    /// `guessed_letters` and exactly one of the correct/wrong sets, the
    /// progress trace grows by one entry, and the win/loss condition is
    /// re-evaluated.
    ///
    /// The letter is case-folded before comparison; callers are expected to
    /// pass a single alphabetic character.
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Repeated;
        }

        let letter = letter.to_ascii_lowercase();
        if self.guessed_letters.contains(&letter) {
            return GuessOutcome::Repeated;
        }

        self.guessed_letters.insert(letter);
        self.guess_count += 1;

        if self.target.contains(letter) {
            self.correct_letters.insert(letter);
            let progress = self.progress();
            self.progress_trace.push(progress);

            if self.is_complete() {
                self.won = true;
            }
            GuessOutcome::Correct
        } else {
            self.wrong_letters.insert(letter);
            self.wrong_guesses += 1;

            let progress = self.progress();
            self.progress_trace
                .push(format!("{progress} ({letter} wrong — no progress change)"));

            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.lost = true;
            }
            GuessOutcome::Wrong
        }
    }

    /// Process a whole-word guess
    ///
    /// Both sides are case-folded and space-stripped before comparison. A
    /// match reveals every alphabetic character of the target at once; a miss
    /// costs exactly one wrong guess no matter how far off it was. Unlike
    /// letter guesses, repeats are not detected — every attempt counts.
    pub fn guess_word(&mut self, guess: &str) -> GuessOutcome {
        if self.is_over() {
            return GuessOutcome::Repeated;
        }

        let folded = guess.to_lowercase().replace(' ', "");
        let target = self.target.replace(' ', "");
        self.guess_count += 1;

        if folded == target {
            for letter in self.target.chars().filter(|c| c.is_alphabetic()) {
                self.guessed_letters.insert(letter);
                self.correct_letters.insert(letter);
            }
            self.won = true;

            let progress = self.progress();
            self.progress_trace.push(progress);
            GuessOutcome::Correct
        } else {
            self.wrong_guesses += 1;

            let progress = self.progress();
            self.progress_trace
                .push(format!("{progress} (word '{folded}' wrong — no progress change)"));

            if self.wrong_guesses >= MAX_WRONG_GUESSES {
                self.lost = true;
            }
            GuessOutcome::Wrong
        }
    }

    /// Render the current progress as a space-joined mask
    ///
    /// Correctly guessed letters show as themselves; unguessed letters as
    /// `_`. Non-alphabetic characters (spaces, hyphens) are revealed from the
    /// start, since they can never pass the single-letter input gate and the
    /// win condition only ranges over alphabetic characters.
    #[must_use]
    pub fn progress(&self) -> String {
        self.target
            .chars()
            .map(|c| {
                if !c.is_alphabetic() || self.correct_letters.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True when every alphabetic character of the target has been revealed
    fn is_complete(&self) -> bool {
        self.target
            .chars()
            .filter(|c| c.is_alphabetic())
            .all(|c| self.correct_letters.contains(&c))
    }

    /// The target word (lowercase)
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The category this word was drawn from (`"mixed"` for unfiltered draws)
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub const fn lost(&self) -> bool {
        self.lost
    }

    /// True once the game has reached a terminal state
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.won || self.lost
    }

    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.wrong_guesses
    }

    /// Total accepted guesses (letters plus whole-word attempts)
    #[must_use]
    pub const fn guess_count(&self) -> u32 {
        self.guess_count
    }

    /// Wrong guesses still available
    #[must_use]
    pub const fn remaining_attempts(&self) -> u32 {
        MAX_WRONG_GUESSES.saturating_sub(self.wrong_guesses)
    }

    /// All guessed letters, in sorted order
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Correctly guessed letters, in sorted order
    #[must_use]
    pub const fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct_letters
    }

    /// Wrongly guessed letters, in sorted order
    #[must_use]
    pub const fn wrong_letters(&self) -> &BTreeSet<char> {
        &self.wrong_letters
    }

    /// One masked-progress snapshot per accepted guess, oldest first
    #[must_use]
    pub fn progress_trace(&self) -> &[String] {
        &self.progress_trace
    }

    #[must_use]
    pub const fn game_number(&self) -> u32 {
        self.game_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_starts_masked() {
        let game = GameState::new("python", "programming", 1);
        assert_eq!(game.progress(), "_ _ _ _ _ _");
        assert_eq!(game.progress_trace(), &["_ _ _ _ _ _".to_string()]);
        assert!(!game.is_over());
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.remaining_attempts(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn new_game_lowercases_target() {
        let game = GameState::new("PyThOn", "Programming", 7);
        assert_eq!(game.target(), "python");
        assert_eq!(game.category(), "programming");
        assert_eq!(game.game_number(), 7);
    }

    #[test]
    fn correct_letter_reveals_positions() {
        let mut game = GameState::new("speed", "mixed", 1);
        assert_eq!(game.guess_letter('e'), GuessOutcome::Correct);
        assert_eq!(game.progress(), "_ _ e e _");
        assert_eq!(game.wrong_guesses(), 0);
        assert_eq!(game.guess_count(), 1);
    }

    #[test]
    fn wrong_letter_consumes_budget() {
        let mut game = GameState::new("cat", "animals", 1);
        assert_eq!(game.guess_letter('z'), GuessOutcome::Wrong);
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.remaining_attempts(), 5);
        assert!(game.wrong_letters().contains(&'z'));
        assert!(!game.correct_letters().contains(&'z'));
    }

    #[test]
    fn repeated_letter_changes_nothing() {
        let mut game = GameState::new("cat", "animals", 1);
        game.guess_letter('c');
        game.guess_letter('z');
        let before = game.clone();

        assert_eq!(game.guess_letter('c'), GuessOutcome::Repeated);
        assert_eq!(game.guess_letter('z'), GuessOutcome::Repeated);
        assert_eq!(game, before);
    }

    #[test]
    fn letter_guess_is_case_folded() {
        let mut game = GameState::new("cat", "animals", 1);
        assert_eq!(game.guess_letter('C'), GuessOutcome::Correct);
        assert_eq!(game.guess_letter('c'), GuessOutcome::Repeated);
    }

    #[test]
    fn covering_all_letters_wins_without_losing() {
        let mut game = GameState::new("cat", "animals", 1);
        assert_eq!(game.guess_letter('t'), GuessOutcome::Correct);
        assert_eq!(game.guess_letter('a'), GuessOutcome::Correct);
        assert!(!game.won());
        assert_eq!(game.guess_letter('c'), GuessOutcome::Correct);
        assert!(game.won());
        assert!(!game.lost());
    }

    #[test]
    fn six_distinct_wrong_letters_lose() {
        let mut game = GameState::new("dog", "animals", 1);
        for (i, letter) in ['a', 'b', 'c', 'e', 'f', 'h'].iter().enumerate() {
            assert!(!game.lost(), "lost before guess {}", i + 1);
            assert_eq!(game.guess_letter(*letter), GuessOutcome::Wrong);
        }
        assert!(game.lost());
        assert!(!game.won());
        assert_eq!(game.wrong_guesses(), MAX_WRONG_GUESSES);
    }

    #[test]
    fn loss_order_independent() {
        let mut one = GameState::new("dog", "animals", 1);
        let mut two = GameState::new("dog", "animals", 1);
        let letters = ['a', 'b', 'c', 'e', 'f', 'h'];

        for letter in letters {
            one.guess_letter(letter);
        }
        for letter in letters.iter().rev() {
            two.guess_letter(*letter);
        }

        assert!(one.lost() && two.lost());
        assert_eq!(one.wrong_guesses(), two.wrong_guesses());
        assert_eq!(one.wrong_letters(), two.wrong_letters());
    }

    #[test]
    fn terminal_state_ignores_further_guesses() {
        let mut game = GameState::new("cat", "animals", 1);
        game.guess_word("cat");
        assert!(game.won());

        let before = game.clone();
        assert_eq!(game.guess_letter('z'), GuessOutcome::Repeated);
        assert_eq!(game.guess_word("dog"), GuessOutcome::Repeated);
        assert_eq!(game, before);
    }

    #[test]
    fn scenario_cat_mixed_guesses() {
        let mut game = GameState::new("cat", "animals", 1);
        let results = [
            game.guess_letter('c'),
            game.guess_letter('x'),
            game.guess_letter('a'),
            game.guess_letter('t'),
        ];
        assert_eq!(
            results,
            [
                GuessOutcome::Correct,
                GuessOutcome::Wrong,
                GuessOutcome::Correct,
                GuessOutcome::Correct,
            ]
        );
        assert!(game.won());
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.guess_count(), 4);
    }

    #[test]
    fn correct_word_guess_fills_letter_sets() {
        let mut game = GameState::new("dog", "animals", 1);
        assert_eq!(game.guess_word("dog"), GuessOutcome::Correct);
        assert!(game.won());

        for letter in ['d', 'o', 'g'] {
            assert!(game.guessed_letters().contains(&letter));
            assert!(game.correct_letters().contains(&letter));
        }
        assert!(game.wrong_letters().is_empty());
        assert_eq!(game.progress(), "d o g");
    }

    #[test]
    fn word_guess_folds_case_and_spaces() {
        let mut game = GameState::new("new zealand", "countries", 1);
        assert_eq!(game.guess_word("New Zealand"), GuessOutcome::Correct);
        assert!(game.won());
    }

    #[test]
    fn wrong_word_guess_costs_one() {
        let mut game = GameState::new("dog", "animals", 1);
        assert_eq!(game.guess_word("cat"), GuessOutcome::Wrong);
        assert_eq!(game.wrong_guesses(), 1);
        assert_eq!(game.guess_count(), 1);
        // Word attempts never touch the letter sets
        assert!(game.guessed_letters().is_empty());
        assert!(game.wrong_letters().is_empty());
    }

    #[test]
    fn repeated_word_guess_still_counts() {
        let mut game = GameState::new("dog", "animals", 1);
        game.guess_word("cat");
        game.guess_word("cat");
        assert_eq!(game.wrong_guesses(), 2);
        assert_eq!(game.guess_count(), 2);
    }

    #[test]
    fn trace_annotates_wrong_guesses() {
        let mut game = GameState::new("cat", "animals", 1);
        game.guess_letter('a');
        game.guess_letter('z');
        game.guess_word("car");

        assert_eq!(
            game.progress_trace(),
            &[
                "_ _ _".to_string(),
                "_ a _".to_string(),
                "_ a _ (z wrong — no progress change)".to_string(),
                "_ a _ (word 'car' wrong — no progress change)".to_string(),
            ]
        );
    }

    #[test]
    fn non_alphabetic_characters_revealed_from_start() {
        let game = GameState::new("costa rica", "countries", 1);
        assert_eq!(game.progress(), "_ _ _ _ _   _ _ _ _");
    }

    #[test]
    fn multi_word_target_winnable_through_letters() {
        let mut game = GameState::new("costa rica", "countries", 1);
        for letter in ['c', 'o', 's', 't', 'a', 'r', 'i'] {
            game.guess_letter(letter);
        }
        assert!(game.won());
        assert_eq!(game.progress(), "c o s t a   r i c a");
    }
}
