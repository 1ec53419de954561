//! Terminal rendering of game state and results

use super::art;
use crate::core::{GameState, MAX_WRONG_GUESSES};
use crate::gamelog::transcript::title_case;
use crate::stats::Statistics;
use colored::Colorize;

/// Print the welcome banner
pub fn print_welcome() {
    println!("{}", art::WELCOME_ART.bright_cyan());
    println!();
}

/// Print the category menu, numbered, with the mixed option last
pub fn print_categories(categories: &[&str]) {
    println!("{}", "Available Categories:".bright_cyan().bold());
    for (i, category) in categories.iter().enumerate() {
        println!("{}. {}", i + 1, title_case(category));
    }
    println!("{}. All Categories (Mixed)", categories.len() + 1);
    println!();
}

pub fn print_game_start(category: &str, word_length: usize) {
    println!(
        "\nNew word selected from '{}' (length {word_length})",
        title_case(category).bright_yellow()
    );
    println!();
}

/// Print the per-turn view: mask, guessed letters, attempts left, gallows
pub fn print_game_state(state: &GameState) {
    println!("Word: {}", state.progress().bright_white().bold());

    let guessed = if state.guessed_letters().is_empty() {
        "None".to_string()
    } else {
        state
            .guessed_letters()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("Guessed letters: {guessed}");
    println!("Remaining attempts: {}", state.remaining_attempts());
    println!();
    println!("{}", art::gallows_stage(state.wrong_guesses()));
    println!();
}

pub fn print_correct_guess(letter: char, progress: &str) {
    println!(
        "{} '{}' is in the word.",
        "Correct!".green().bold(),
        letter.to_uppercase()
    );
    println!("Progress: {progress}");
    println!();
}

pub fn print_wrong_guess(letter: char, wrong_guesses: u32) {
    println!(
        "{} '{}' is not in the word.",
        "Wrong!".red().bold(),
        letter.to_uppercase()
    );
    println!("Wrong guesses: {wrong_guesses}/{MAX_WRONG_GUESSES}");
    println!();
}

pub fn print_repeated_guess(letter: char) {
    println!(
        "You already guessed '{}'. No penalty!",
        letter.to_uppercase()
    );
    println!();
}

pub fn print_correct_word_guess(word: &str) {
    println!(
        "{} You guessed the word '{}' correctly!",
        "Excellent!".green().bold(),
        word.to_uppercase()
    );
    println!();
}

pub fn print_wrong_word_guess(guess: &str, wrong_guesses: u32) {
    println!(
        "{} '{}' is not the correct word.",
        "Wrong!".red().bold(),
        guess.to_uppercase()
    );
    println!("Wrong guesses: {wrong_guesses}/{MAX_WRONG_GUESSES}");
    println!();
}

pub fn print_win(word: &str, points: u32, total_score: u32) {
    println!("{}", art::WIN_ART.bright_green());
    println!(
        "\n{} Word: {}",
        "You win!".bright_green().bold(),
        word.to_uppercase().bright_yellow()
    );
    println!("Points earned this round: {points}");
    println!("Total score: {total_score}");
    println!();
}

pub fn print_lose(word: &str, total_score: u32) {
    println!("{}", art::LOSE_ART.bright_red());
    println!(
        "\n{} The word was: {}",
        "You lose!".bright_red().bold(),
        word.to_uppercase().bright_yellow()
    );
    println!("Points earned this round: 0");
    println!("Total score: {total_score}");
    println!();
}

/// Print the statistics block shown after every game
pub fn print_statistics(stats: &Statistics) {
    println!("{}", "=== GAME STATISTICS ===".bright_cyan().bold());
    println!("Games played: {}", stats.games_played);
    println!("Wins: {}", stats.wins);
    println!("Losses: {}", stats.losses);
    println!("Win rate: {:.2}%", stats.win_rate);
    println!("Average score per game: {:.1}", stats.average_score);
    println!("Total score: {}", stats.total_score);
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", "Error:".red().bold());
    println!();
}

pub fn print_goodbye() {
    println!("\nThanks for playing Hangman! Goodbye!");
    println!();
}
