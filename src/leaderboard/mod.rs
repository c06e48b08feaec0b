//! Online leaderboard
//!
//! - `store`: best-score-per-name storage contract and the in-memory store
//! - `api`: routes, JSON bodies and the request handlers
//! - `client`: the client trait and the in-process client
//! - `http`: browser `fetch` client (wasm only)
//! - `report`: one submit-then-fetch per completed run, in order

pub mod api;
pub mod client;
pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod http;
pub mod report;
pub mod store;

pub use api::{ApiRequest, ApiResponse, LeaderboardService};
pub use client::{LeaderboardClient, LocalClient};
pub use error::LeaderboardError;
#[cfg(target_arch = "wasm32")]
pub use http::HttpClient;
pub use report::{RankedRun, ReportQueue, RunReport, drain, report_run};
pub use store::{MemoryStore, ScoreRecord, ScoreStore};
