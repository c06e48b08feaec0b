//! Name entry flow shown before the first game

use crate::leaderboard::LeaderboardClient;

/// Why a name was refused; the message is shown inline
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Please enter a name.")]
    Empty,
    #[error("Name already taken. Try another.")]
    Taken,
}

/// Trim the raw input; empty names are refused
pub fn normalize_name(raw: &str) -> Result<String, NameError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(name.to_string())
}

/// Validate a name and make sure nobody on the leaderboard owns it.
///
/// If the leaderboard cannot be reached the name is accepted; the game runs
/// without a leaderboard rather than not at all.
pub async fn claim_name<C: LeaderboardClient>(client: &C, raw: &str) -> Result<String, NameError> {
    let name = normalize_name(raw)?;
    match client.check_name_taken(&name).await {
        Ok(true) => Err(NameError::Taken),
        Ok(false) => Ok(name),
        Err(e) => {
            log::warn!("Name check failed, continuing offline: {}", e);
            Ok(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::{
        ApiRequest, ApiResponse, LeaderboardError, LocalClient, MemoryStore, ScoreStore,
    };

    struct Unreachable;

    impl LeaderboardClient for Unreachable {
        async fn send(&self, _request: &ApiRequest) -> Result<ApiResponse, LeaderboardError> {
            Err(LeaderboardError::Transport("connection refused".into()))
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_name("  alice "), Ok("alice".to_string()));
        assert_eq!(normalize_name("   "), Err(NameError::Empty));
        assert_eq!(normalize_name(""), Err(NameError::Empty));
    }

    #[test]
    fn test_claim_name() {
        let mut store = MemoryStore::new();
        store.submit("alice", 10);
        let client = LocalClient::new(store);

        assert_eq!(
            pollster::block_on(claim_name(&client, "alice")),
            Err(NameError::Taken)
        );
        assert_eq!(
            pollster::block_on(claim_name(&client, " bob ")),
            Ok("bob".to_string())
        );
        assert_eq!(
            pollster::block_on(claim_name(&client, "")),
            Err(NameError::Empty)
        );
    }

    #[test]
    fn test_offline_accepts_name() {
        assert_eq!(
            pollster::block_on(claim_name(&Unreachable, "carol")),
            Ok("carol".to_string())
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(NameError::Empty.to_string(), "Please enter a name.");
        assert_eq!(NameError::Taken.to_string(), "Name already taken. Try another.");
    }
}
