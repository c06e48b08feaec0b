//! Browser-independent UI logic
//!
//! The DOM glue in the binary calls into these for validation and text.

pub mod leaderboard_view;
pub mod name_entry;

pub use leaderboard_view::{LeaderboardRow, personal_best, rows};
pub use name_entry::{NameError, claim_name, normalize_name};
