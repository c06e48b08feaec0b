//! Leaderboard list shown after a run

use crate::leaderboard::ScoreRecord;

/// One line of the ranked list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    /// 1-indexed
    pub rank: usize,
    pub text: String,
    /// The current player's just-finished run
    pub highlight: bool,
}

/// Number the entries and mark the player's row
pub fn rows(entries: &[ScoreRecord], player: &str, final_score: u32) -> Vec<LeaderboardRow> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| LeaderboardRow {
            rank: i + 1,
            text: format!("{}. {}: {}", i + 1, e.name, e.score),
            highlight: e.name == player && e.score == final_score,
        })
        .collect()
}

/// The player's own entry, if it made the list
pub fn personal_best(entries: &[ScoreRecord], player: &str) -> Option<String> {
    entries
        .iter()
        .find(|e| e.name == player)
        .map(|e| format!("\u{2b50} {}: {}", e.name, e.score))
}
