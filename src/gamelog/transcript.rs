//! Transcript rendering
//!
//! Pure text rendering of one completed game: header, the numbered letter
//! guesses, the outcome and score, the statistics after the round, and the
//! progress trace as an arrow-joined chain. Letters are listed in sorted
//! order so the transcript is deterministic.

use crate::core::{GameState, MAX_WRONG_GUESSES};
use crate::stats::Statistics;

/// Render the full transcript for a completed game
#[must_use]
pub fn render(state: &GameState, score: u32, stats: &Statistics, timestamp: &str) -> String {
    let result = if state.won() { "Win" } else { "Loss" };
    let gallows_stage = state.wrong_guesses().min(MAX_WRONG_GUESSES);

    let mut lines = vec![
        format!("Game {} Log", state.game_number()),
        format!("Category: {}", title_case(state.category())),
        format!("Word: {}", state.target()),
        format!("Word Length: {}", state.target().chars().count()),
        format!("Date & Time: {timestamp}"),
        String::new(),
        "Guesses (in order):".to_string(),
    ];

    for (i, letter) in state.guessed_letters().iter().enumerate() {
        let verdict = if state.correct_letters().contains(letter) {
            "Correct"
        } else {
            "Wrong"
        };
        lines.push(format!("{}. {letter} → {verdict} (letter)", i + 1));
    }

    lines.extend([
        String::new(),
        format!("Wrong Guesses List: {}", wrong_list(state)),
        format!("Wrong Guesses Count: {}", state.wrong_guesses()),
        format!("Remaining Attempts at End: {}", state.remaining_attempts()),
        format!("Result: {result}"),
        format!("Points Earned: {score}"),
        format!("Total Score (after this round): {}", stats.total_score),
        format!("Games Played: {}", stats.games_played),
        format!("Wins: {}", stats.wins),
        format!("Losses: {}", stats.losses),
        format!("Win Rate: {:.2}%", stats.win_rate),
        String::new(),
        "---------------------------------------".to_string(),
        "Session Notes:".to_string(),
        format!(
            "- ASCII hangman reached state {gallows_stage} after {} wrong guess(es).",
            state.wrong_guesses()
        ),
        "- Progress trace:".to_string(),
    ]);

    for (i, progress) in state.progress_trace().iter().enumerate() {
        let arrow = if i > 0 { " -> " } else { " " };
        lines.push(format!("{arrow}{progress}"));
    }

    lines.push("---------------------------------------".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn wrong_list(state: &GameState) -> String {
    if state.wrong_letters().is_empty() {
        "None".to_string()
    } else {
        state
            .wrong_letters()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Title-case a category label: underscores become spaces, words capitalize
pub(crate) fn title_case(category: &str) -> String {
    category
        .replace('_', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
