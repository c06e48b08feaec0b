//! Leaderboard error taxonomy

/// Everything that can go wrong talking to the score store
#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    /// Missing or empty request field
    #[error("{0}")]
    Validation(&'static str),
    /// Store answered with a non-success status
    #[error("Store returned {status}: {message}")]
    Status { status: u16, message: String },
    /// Request never completed
    #[error("Transport error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl LeaderboardError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> u16 {
        match self {
            LeaderboardError::Validation(_) => 400,
            LeaderboardError::Status { status, .. } => *status,
            LeaderboardError::Transport(_) => 502,
            LeaderboardError::Decode(_) => 500,
        }
    }

    /// Validation failures are the caller's fault; everything else is the store's
    pub fn is_validation(&self) -> bool {
        matches!(self, LeaderboardError::Validation(_))
    }
}
