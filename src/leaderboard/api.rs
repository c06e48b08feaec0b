//! Leaderboard request/response contract
//!
//! Routes and JSON bodies shared by the HTTP client and the in-process
//! service:
//!
//! | Route | Request | Response |
//! |---|---|---|
//! | `GET /api/check-name?name=` | query | `{ "taken": bool }` |
//! | `POST /api/submit-score` | `{ "name", "score" }` | `{ "success": true }` |
//! | `GET /api/leaderboard` | - | `[{ "name", "score" }]` |
//!
//! Validation failures answer 400 with `{ "error": "..." }`.

use serde::{Deserialize, Serialize};

use super::error::LeaderboardError;
use super::store::{ScoreRecord, ScoreStore};
use crate::consts::LEADERBOARD_SIZE;

pub const CHECK_NAME_PATH: &str = "/api/check-name";
pub const SUBMIT_SCORE_PATH: &str = "/api/submit-score";
pub const LEADERBOARD_PATH: &str = "/api/leaderboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckNameResponse {
    pub taken: bool,
}

/// Body of a score submission. Fields are optional so a malformed body
/// still parses and is rejected by validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScoreRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl SubmitScoreRequest {
    pub fn new(name: &str, score: u32) -> Self {
        Self {
            name: Some(name.to_string()),
            score: Some(score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitScoreResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A typed request to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    CheckName { name: Option<String> },
    SubmitScore(SubmitScoreRequest),
    Leaderboard,
}

impl ApiRequest {
    pub fn method(&self) -> &'static str {
        match self {
            ApiRequest::SubmitScore(_) => "POST",
            ApiRequest::CheckName { .. } | ApiRequest::Leaderboard => "GET",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ApiRequest::CheckName { .. } => CHECK_NAME_PATH,
            ApiRequest::SubmitScore(_) => SUBMIT_SCORE_PATH,
            ApiRequest::Leaderboard => LEADERBOARD_PATH,
        }
    }
}

/// Status code and JSON body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(&LeaderboardError::from(e)),
        }
    }

    fn error(err: &LeaderboardError) -> Self {
        let body = ErrorBody {
            error: err.to_string(),
        };
        Self {
            status: err.status_code(),
            body: serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The store's request handlers, independent of any HTTP server
#[derive(Debug, Default)]
pub struct LeaderboardService<S> {
    store: S,
}

impl<S: ScoreStore> LeaderboardService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn check_name(&self, name: Option<&str>) -> Result<CheckNameResponse, LeaderboardError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(LeaderboardError::Validation("Name required"))?;
        Ok(CheckNameResponse {
            taken: self.store.find(name).is_some(),
        })
    }

    /// Insert-or-raise; a lower or equal score is accepted and ignored
    pub fn submit_score(
        &mut self,
        request: &SubmitScoreRequest,
    ) -> Result<SubmitScoreResponse, LeaderboardError> {
        let (Some(name), Some(score)) = (
            request.name.as_deref().filter(|n| !n.is_empty()),
            request.score,
        ) else {
            return Err(LeaderboardError::Validation("Name and score required"));
        };

        if self.store.submit(name, score) {
            log::debug!("Stored {} for {}", score, name);
        }
        Ok(SubmitScoreResponse { success: true })
    }

    pub fn leaderboard(&self) -> Vec<ScoreRecord> {
        self.store.top(LEADERBOARD_SIZE)
    }

    /// Answer a request the way the HTTP store would
    pub fn dispatch(&mut self, request: &ApiRequest) -> ApiResponse {
        let result = match request {
            ApiRequest::CheckName { name } => self
                .check_name(name.as_deref())
                .map(|r| ApiResponse::json(&r)),
            ApiRequest::SubmitScore(body) => {
                self.submit_score(body).map(|r| ApiResponse::json(&r))
            }
            ApiRequest::Leaderboard => Ok(ApiResponse::json(&self.leaderboard())),
        };
        result.unwrap_or_else(|e| {
            log::warn!("{} {} rejected: {}", request.method(), request.path(), e);
            ApiResponse::error(&e)
        })
    }
}

/// Turn a store response into its typed body, or the store's error
pub fn decode_response<T: serde::de::DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<T, LeaderboardError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.to_string());
        return Err(LeaderboardError::Status { status, message });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::store::MemoryStore;

    fn service() -> LeaderboardService<MemoryStore> {
        LeaderboardService::new(MemoryStore::new())
    }

    #[test]
    fn test_end_to_end_scores() {
        let mut svc = service();
        svc.submit_score(&SubmitScoreRequest::new("alice", 10)).unwrap();
        svc.submit_score(&SubmitScoreRequest::new("alice", 7)).unwrap();
        assert_eq!(svc.store().find("alice"), Some(10));
        svc.submit_score(&SubmitScoreRequest::new("alice", 15)).unwrap();
        assert_eq!(svc.store().find("alice"), Some(15));

        assert!(svc.check_name(Some("alice")).unwrap().taken);
        assert!(!svc.check_name(Some("bob")).unwrap().taken);
    }

    #[test]
    fn test_validation() {
        let mut svc = service();
        let err = svc.check_name(None).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(svc.check_name(Some("")).unwrap_err().is_validation());

        let missing_score = SubmitScoreRequest {
            name: Some("alice".into()),
            score: None,
        };
        assert!(svc.submit_score(&missing_score).unwrap_err().is_validation());
        let missing_name = SubmitScoreRequest {
            name: None,
            score: Some(3),
        };
        assert!(svc.submit_score(&missing_name).unwrap_err().is_validation());
        assert!(svc.store().is_empty());
    }

    #[test]
    fn test_leaderboard_limited_to_ten() {
        let mut svc = service();
        for i in 0..15u32 {
            svc.submit_score(&SubmitScoreRequest::new(&format!("p{i}"), i)).unwrap();
        }
        let board = svc.leaderboard();
        assert_eq!(board.len(), 10);
        assert_eq!(board[0].score, 14);
        assert_eq!(board[9].score, 5);
    }

    #[test]
    fn test_dispatch_json() {
        let mut svc = service();
        let resp = svc.dispatch(&ApiRequest::SubmitScore(SubmitScoreRequest::new("alice", 3)));
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, r#"{"success":true}"#);

        let resp = svc.dispatch(&ApiRequest::Leaderboard);
        assert_eq!(resp.body, r#"[{"name":"alice","score":3}]"#);

        let resp = svc.dispatch(&ApiRequest::CheckName { name: None });
        assert_eq!(resp.status, 400);
        assert_eq!(resp.body, r#"{"error":"Name required"}"#);
    }

    #[test]
    fn test_decode_response() {
        let ok: CheckNameResponse = decode_response(200, r#"{"taken":true}"#).unwrap();
        assert!(ok.taken);

        let err = decode_response::<CheckNameResponse>(400, r#"{"error":"Name required"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            LeaderboardError::Status { status: 400, ref message } if message == "Name required"
        ));

        let err = decode_response::<CheckNameResponse>(200, "not json").unwrap_err();
        assert!(matches!(err, LeaderboardError::Decode(_)));
    }

    #[test]
    fn test_submit_body_accepts_missing_fields() {
        let req: SubmitScoreRequest = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(req.score, None);
        assert_eq!(
            serde_json::to_string(&SubmitScoreRequest::new("x", 2)).unwrap(),
            r#"{"name":"x","score":2}"#
        );
    }
}
