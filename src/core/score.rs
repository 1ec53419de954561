//! Score calculation
//!
//! Pure function from game outcome to points. No I/O, no state.

/// Calculate the score for a finished game
///
/// A loss scores 0. A win scores 10 points per letter of the word, minus 5
/// per wrong guess, floored at 10 so every win is worth something.
///
/// # Examples
/// ```
/// use hangman::core::score;
///
/// assert_eq!(score(5, 0, true), 50);
/// assert_eq!(score(5, 3, true), 35);
/// assert_eq!(score(5, 10, true), 10); // floor applies
/// assert_eq!(score(5, 0, false), 0);
/// ```
#[must_use]
pub fn score(word_length: usize, wrong_guesses: u32, won: bool) -> u32 {
    if !won {
        return 0;
    }

    let base = word_length as u32 * 10;
    let penalty = wrong_guesses * 5;

    base.saturating_sub(penalty).max(10)
}
