//! Cumulative game statistics
//!
//! One persisted record per installation, updated after every game.

mod store;

pub use store::StatsStore;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Running totals across all games
///
/// Every field defaults individually, so a partially-valid persisted record
/// is backfilled instead of rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Statistics {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub total_score: u32,
    pub win_rate: f64,
    pub average_score: f64,
    pub last_played: Option<DateTime<Local>>,
}

impl Statistics {
    /// Fold one game outcome into the totals
    ///
    /// Increments `games_played` and exactly one of `wins`/`losses`, adds the
    /// score (0 for losses), recomputes the derived rates and stamps
    /// `last_played`.
    pub fn record(&mut self, won: bool, score: u32) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.total_score += score;

        self.win_rate = f64::from(self.wins) / f64::from(self.games_played) * 100.0;
        self.average_score = f64::from(self.total_score) / f64::from(self.games_played);
        self.last_played = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_zero() {
        let stats = Statistics::default();
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.wins, 0);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.total_score, 0);
        assert!(stats.last_played.is_none());
    }

    #[test]
    fn record_win_updates_totals() {
        let mut stats = Statistics::default();
        stats.record(true, 25);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.total_score, 25);
        assert!((stats.win_rate - 100.0).abs() < f64::EPSILON);
        assert!((stats.average_score - 25.0).abs() < f64::EPSILON);
        assert!(stats.last_played.is_some());
    }

    #[test]
    fn record_loss_scores_nothing() {
        let mut stats = Statistics::default();
        stats.record(false, 0);

        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.total_score, 0);
        assert!(stats.win_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn aggregates_are_interleaving_independent() {
        let outcomes = [(true, 30), (false, 0), (true, 10), (false, 0), (true, 50)];

        let mut forward = Statistics::default();
        for (won, score) in outcomes {
            forward.record(won, score);
        }

        let mut backward = Statistics::default();
        for (won, score) in outcomes.iter().rev() {
            backward.record(*won, *score);
        }

        assert_eq!(forward.games_played, backward.games_played);
        assert_eq!(forward.wins, backward.wins);
        assert_eq!(forward.losses, backward.losses);
        assert_eq!(forward.total_score, backward.total_score);
        assert!((forward.win_rate - backward.win_rate).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_fields_backfill_with_defaults() {
        let stats: Statistics = serde_json::from_str(r#"{"games_played": 3, "wins": 2}"#).unwrap();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.total_score, 0);
        assert!(stats.last_played.is_none());
    }
}
