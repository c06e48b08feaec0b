//! Leaderboard clients
//!
//! A client only has to deliver one request and hand back the raw response;
//! the three leaderboard operations are built on top of that.

use std::cell::RefCell;
use std::rc::Rc;

use super::api::{
    ApiRequest, ApiResponse, CheckNameResponse, LeaderboardService, SubmitScoreRequest,
    SubmitScoreResponse, decode_response,
};
use super::error::LeaderboardError;
use super::store::{ScoreRecord, ScoreStore};

/// Request/response access to the score store.
///
/// Futures are not `Send`; clients are driven on the browser's single thread.
#[allow(async_fn_in_trait)]
pub trait LeaderboardClient {
    /// Deliver one request
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, LeaderboardError>;

    async fn check_name_taken(&self, name: &str) -> Result<bool, LeaderboardError> {
        let request = ApiRequest::CheckName {
            name: Some(name.to_string()),
        };
        let resp = self.send(&request).await?;
        let body: CheckNameResponse = decode_response(resp.status, &resp.body)?;
        Ok(body.taken)
    }

    async fn submit_score(&self, name: &str, score: u32) -> Result<(), LeaderboardError> {
        let request = ApiRequest::SubmitScore(SubmitScoreRequest::new(name, score));
        let resp = self.send(&request).await?;
        let _: SubmitScoreResponse = decode_response(resp.status, &resp.body)?;
        Ok(())
    }

    async fn get_leaderboard(&self) -> Result<Vec<ScoreRecord>, LeaderboardError> {
        let resp = self.send(&ApiRequest::Leaderboard).await?;
        decode_response(resp.status, &resp.body)
    }
}

/// In-process client backed by a `LeaderboardService`
pub struct LocalClient<S> {
    service: Rc<RefCell<LeaderboardService<S>>>,
}

impl<S: ScoreStore> LocalClient<S> {
    pub fn new(store: S) -> Self {
        Self {
            service: Rc::new(RefCell::new(LeaderboardService::new(store))),
        }
    }

    /// Shared access to the service behind this client
    pub fn service(&self) -> Rc<RefCell<LeaderboardService<S>>> {
        Rc::clone(&self.service)
    }
}

impl<S> Clone for LocalClient<S> {
    fn clone(&self) -> Self {
        Self {
            service: Rc::clone(&self.service),
        }
    }
}

impl<S: ScoreStore> LeaderboardClient for LocalClient<S> {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, LeaderboardError> {
        Ok(self.service.borrow_mut().dispatch(request))
    }
}
