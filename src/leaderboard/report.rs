//! Reporting completed runs to the leaderboard
//!
//! Every completed run gets exactly one score submission followed by one
//! leaderboard fetch. Runs are processed one at a time in completion order,
//! so a quick restart can never interleave two submissions. A ranked result
//! is only delivered if its run is still the most recently completed one.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::client::LeaderboardClient;
use super::error::LeaderboardError;
use super::store::ScoreRecord;

/// A completed run waiting to be reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub run_id: u64,
    pub name: String,
    pub score: u32,
}

/// Leaderboard as it stood right after a run was submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRun {
    pub report: RunReport,
    pub entries: Vec<ScoreRecord>,
}

/// FIFO of completed runs plus the bookkeeping for a single drain task
#[derive(Debug, Default)]
pub struct ReportQueue {
    pending: VecDeque<RunReport>,
    draining: bool,
    in_flight: Option<u64>,
    latest_run: u64,
}

impl ReportQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completed run. Returns true if the caller has to start a
    /// drain task; false if one is already running and will pick it up.
    pub fn enqueue(&mut self, report: RunReport) -> bool {
        self.latest_run = self.latest_run.max(report.run_id);
        self.pending.push_back(report);
        if self.draining {
            false
        } else {
            self.draining = true;
            true
        }
    }

    /// Take the next run to report. Returning `None` ends the drain.
    pub fn next(&mut self) -> Option<RunReport> {
        let next = self.pending.pop_front();
        self.in_flight = next.as_ref().map(|r| r.run_id);
        if next.is_none() {
            self.draining = false;
        }
        next
    }

    /// True if `run_id` is the most recently completed run
    pub fn is_current(&self, run_id: u64) -> bool {
        run_id == self.latest_run
    }

    /// Run whose requests are currently outstanding
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_draining(&self) -> bool {
        self.draining
    }
}

/// Submit one run's score, then fetch the ranked leaderboard
pub async fn report_run<C: LeaderboardClient>(
    client: &C,
    report: &RunReport,
) -> Result<Vec<ScoreRecord>, LeaderboardError> {
    client.submit_score(&report.name, report.score).await?;
    client.get_leaderboard().await
}

/// Report queued runs until the queue is empty.
///
/// Failures are logged and skipped; stale results are dropped. The queue is
/// never borrowed across an `.await`.
pub async fn drain<C, F>(client: &C, queue: &RefCell<ReportQueue>, mut on_ranked: F)
where
    C: LeaderboardClient,
    F: FnMut(RankedRun),
{
    loop {
        let Some(report) = queue.borrow_mut().next() else {
            break;
        };

        match report_run(client, &report).await {
            Ok(entries) => {
                if queue.borrow().is_current(report.run_id) {
                    on_ranked(RankedRun { report, entries });
                } else {
                    log::debug!("Dropping stale leaderboard for run {}", report.run_id);
                }
            }
            Err(e) => {
                log::warn!("Leaderboard update for run {} failed: {}", report.run_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::api::{ApiRequest, ApiResponse};
    use crate::leaderboard::client::LocalClient;
    use crate::leaderboard::store::{MemoryStore, ScoreStore};
    use std::cell::Cell;
    use std::rc::Rc;

    fn report(run_id: u64, score: u32) -> RunReport {
        RunReport {
            run_id,
            name: "alice".into(),
            score,
        }
    }

    /// Records request order and can inject a run completion mid-flight
    struct ScriptedClient {
        inner: LocalClient<MemoryStore>,
        queue: Rc<RefCell<ReportQueue>>,
        inject: RefCell<Option<RunReport>>,
        log: RefCell<Vec<&'static str>>,
    }

    impl LeaderboardClient for ScriptedClient {
        async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, LeaderboardError> {
            self.log.borrow_mut().push(request.path());
            if let Some(late) = self.inject.borrow_mut().take() {
                let must_start = self.queue.borrow_mut().enqueue(late);
                assert!(!must_start, "drain already running");
            }
            self.inner.send(request).await
        }
    }

    struct OfflineClient {
        calls: Cell<u32>,
    }

    impl LeaderboardClient for OfflineClient {
        async fn send(&self, _request: &ApiRequest) -> Result<ApiResponse, LeaderboardError> {
            self.calls.set(self.calls.get() + 1);
            Err(LeaderboardError::Transport("offline".into()))
        }
    }

    #[test]
    fn test_enqueue_starts_one_drain() {
        let mut queue = ReportQueue::new();
        assert!(queue.enqueue(report(1, 3)));
        assert!(!queue.enqueue(report(2, 5)));
        assert_eq!(queue.pending(), 2);

        assert_eq!(queue.next().map(|r| r.run_id), Some(1));
        assert_eq!(queue.in_flight(), Some(1));
        assert_eq!(queue.next().map(|r| r.run_id), Some(2));
        assert!(queue.next().is_none());
        assert!(!queue.is_draining());
        assert_eq!(queue.in_flight(), None);

        // Drained queue hands the next run back to the caller
        assert!(queue.enqueue(report(3, 1)));
    }

    #[test]
    fn test_drain_submits_then_fetches() {
        let client = LocalClient::new(MemoryStore::new());
        let queue = RefCell::new(ReportQueue::new());
        queue.borrow_mut().enqueue(report(1, 4));

        let mut ranked = Vec::new();
        pollster::block_on(drain(&client, &queue, |r| ranked.push(r)));

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].report.run_id, 1);
        assert_eq!(
            ranked[0].entries,
            vec![ScoreRecord {
                name: "alice".into(),
                score: 4
            }]
        );
        assert!(!queue.borrow().is_draining());
    }

    #[test]
    fn test_stale_result_dropped() {
        let queue = Rc::new(RefCell::new(ReportQueue::new()));
        let client = ScriptedClient {
            inner: LocalClient::new(MemoryStore::new()),
            queue: Rc::clone(&queue),
            // Run 2 completes while run 1's submission is in flight
            inject: RefCell::new(Some(report(2, 9))),
            log: RefCell::new(Vec::new()),
        };
        assert!(queue.borrow_mut().enqueue(report(1, 6)));

        let mut ranked = Vec::new();
        pollster::block_on(drain(&client, &queue, |r| ranked.push(r)));

        // Serialized: each run submits then fetches before the next starts
        assert_eq!(
            *client.log.borrow(),
            [
                "/api/submit-score",
                "/api/leaderboard",
                "/api/submit-score",
                "/api/leaderboard",
            ]
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].report.run_id, 2);
        assert_eq!(ranked[0].entries[0].score, 9);
        assert_eq!(
            client.inner.service().borrow().store().find("alice"),
            Some(9)
        );
    }

    #[test]
    fn test_transport_errors_are_swallowed() {
        let client = OfflineClient {
            calls: Cell::new(0),
        };
        let queue = RefCell::new(ReportQueue::new());
        queue.borrow_mut().enqueue(report(1, 1));
        queue.borrow_mut().enqueue(report(2, 2));

        let mut ranked = Vec::new();
        pollster::block_on(drain(&client, &queue, |r| ranked.push(r)));

        assert!(ranked.is_empty());
        // Submission failed for both runs, no fetch attempted
        assert_eq!(client.calls.get(), 2);
        assert!(!queue.borrow().is_draining());
    }
}
