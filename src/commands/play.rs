//! Interactive game session
//!
//! The blocking prompt loop: category menu, one turn per accepted guess,
//! then scoring, statistics and the transcript on a terminal state. Quitting
//! is an ordinary sentinel value from the input boundary; end-of-input and
//! read errors map to the same sentinel, nothing is thrown.

use crate::core::{GameState, GuessOutcome, score};
use crate::gamelog::GameLogger;
use crate::output::display;
use crate::stats::StatsStore;
use crate::words::WordSource;
use log::warn;
use std::io::{self, Write};

/// Player's pick from the category menu
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuChoice {
    /// A named category
    Category(String),
    /// Unfiltered draw from the general pool
    Mixed,
    Quit,
}

/// Player's action for one turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnInput {
    Letter(char),
    /// Switch to a whole-word attempt
    WordAttempt,
    Quit,
}

/// Run the interactive session until the player quits or declines a rematch
pub fn run_play(source: &WordSource, stats: &StatsStore, logger: &GameLogger) {
    display::print_welcome();

    loop {
        let categories = source.categories();
        display::print_categories(&categories);

        let filter = match prompt_category(&categories) {
            MenuChoice::Quit => break,
            MenuChoice::Mixed => None,
            MenuChoice::Category(name) => Some(name),
        };

        let (word, category) = match source.random_word(filter.as_deref()) {
            Ok(pair) => pair,
            Err(e) => {
                display::print_error(&format!("Could not start game: {e}"));
                continue;
            }
        };

        let mut game = GameState::new(&word, &category, logger.next_game_number());
        display::print_game_start(game.category(), game.target().chars().count());

        if !play_one(&mut game) {
            // Player quit mid-game: nothing is scored or recorded
            break;
        }

        finish_game(&game, stats, logger);

        if !ask_play_again() {
            break;
        }
    }

    display::print_goodbye();
}

/// Drive one game to a terminal state
///
/// Returns false if the player quit before the game ended.
fn play_one(game: &mut GameState) -> bool {
    while !game.is_over() {
        display::print_game_state(game);

        match prompt_turn() {
            TurnInput::Quit => return false,
            TurnInput::WordAttempt => {
                let Some(guess) = prompt_word_guess() else {
                    return false;
                };
                match game.guess_word(&guess) {
                    GuessOutcome::Correct => display::print_correct_word_guess(&guess),
                    _ => display::print_wrong_word_guess(&guess, game.wrong_guesses()),
                }
            }
            TurnInput::Letter(letter) => match game.guess_letter(letter) {
                GuessOutcome::Repeated => display::print_repeated_guess(letter),
                GuessOutcome::Correct => display::print_correct_guess(letter, &game.progress()),
                GuessOutcome::Wrong => display::print_wrong_guess(letter, game.wrong_guesses()),
            },
        }
    }
    true
}

/// Score the finished game, fold it into the statistics, show the result
/// and write the transcript
fn finish_game(game: &GameState, stats: &StatsStore, logger: &GameLogger) {
    let points = score(
        game.target().chars().count(),
        game.wrong_guesses(),
        game.won(),
    );
    let updated = stats.record_outcome(game.won(), points);

    if game.won() {
        display::print_win(game.target(), points, updated.total_score);
    } else {
        display::print_lose(game.target(), updated.total_score);
    }
    display::print_statistics(&updated);

    if let Err(e) = logger.write(game, points, &updated) {
        warn!("Could not save game log ({e})");
    }
}

/// Read one trimmed, lowercased line; `None` on end-of-input or read error
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

/// Prompt until the player picks a category, the mixed option, or quits
///
/// Accepts a menu number (the entry after the last category means mixed),
/// a category name, or one of `all`/`mixed`/`any`.
fn prompt_category(categories: &[&str]) -> MenuChoice {
    loop {
        let Some(input) =
            read_line("Choose a category (enter number or name, 'quit' to exit): ")
        else {
            return MenuChoice::Quit;
        };

        if is_quit(&input) {
            return MenuChoice::Quit;
        }

        if let Ok(number) = input.parse::<usize>() {
            if (1..=categories.len()).contains(&number) {
                return MenuChoice::Category(categories[number - 1].to_string());
            }
            if number == categories.len() + 1 {
                return MenuChoice::Mixed;
            }
            println!(
                "Please enter a number between 1 and {}",
                categories.len() + 1
            );
            continue;
        }

        if matches!(input.as_str(), "all" | "mixed" | "any") {
            return MenuChoice::Mixed;
        }

        if let Some(name) = categories
            .iter()
            .find(|c| input == **c || input == c.replace('_', " "))
        {
            return MenuChoice::Category((*name).to_string());
        }

        println!("Invalid choice. Please try again.");
    }
}

/// Prompt until the player enters a single letter, `guess`, or quits
fn prompt_turn() -> TurnInput {
    loop {
        let Some(input) =
            read_line("Enter a letter (or type 'guess' to guess full word, 'quit' to exit): ")
        else {
            return TurnInput::Quit;
        };

        if is_quit(&input) {
            return TurnInput::Quit;
        }
        if input == "guess" {
            return TurnInput::WordAttempt;
        }

        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => return TurnInput::Letter(c),
            (Some(_), Some(_)) => {
                println!(
                    "Please enter only a single letter, or type 'guess' to guess the full word."
                );
            }
            _ => println!("Please enter a valid letter."),
        }
    }
}

/// Prompt for a whole-word attempt; `None` means the player quit
fn prompt_word_guess() -> Option<String> {
    loop {
        let input = read_line("Enter your guess for the full word: ")?;

        if is_quit(&input) {
            return None;
        }

        if !input.is_empty() && input.chars().all(|c| c.is_ascii_alphabetic() || c == ' ') {
            return Some(input);
        }

        println!("Please enter a valid word (letters only).");
    }
}

fn ask_play_again() -> bool {
    loop {
        let Some(input) = read_line("Would you like to play again? (y/n): ") else {
            return false;
        };

        match input.as_str() {
            "y" | "yes" | "yeah" | "yep" => return true,
            "n" | "no" | "nope" => return false,
            _ => println!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}
