//! Player score store
//!
//! One record per player name holding that player's best score. The real
//! store sits behind the HTTP API; `MemoryStore` has the same semantics and
//! backs the in-process client.

use serde::{Deserialize, Serialize};

/// A leaderboard row as it travels over the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
}

/// Storage contract for best scores keyed by unique name
pub trait ScoreStore {
    /// Best score for `name`, if the player has one
    fn find(&self, name: &str) -> Option<u32>;

    /// Insert `name`, or raise its score if `score` is strictly greater.
    /// Returns true if the store changed.
    fn submit(&mut self, name: &str, score: u32) -> bool;

    /// Highest scores first, at most `limit` rows
    fn top(&self, limit: usize) -> Vec<ScoreRecord>;
}

/// A stored record with the sequence number of its last raise
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredScore {
    name: String,
    score: u32,
    seq: u64,
}

/// In-memory store, kept sorted by score descending then by sequence
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    entries: Vec<StoredScore>,
    next_seq: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

impl ScoreStore for MemoryStore {
    fn find(&self, name: &str) -> Option<u32> {
        self.position_of(name).map(|i| self.entries[i].score)
    }

    fn submit(&mut self, name: &str, score: u32) -> bool {
        if let Some(i) = self.position_of(name) {
            if score <= self.entries[i].score {
                return false;
            }
            self.entries.remove(i);
        }

        let entry = StoredScore {
            name: name.to_string(),
            score,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        // Equal scores keep earlier submissions first
        let pos = self.entries.iter().position(|e| score > e.score);
        match pos {
            Some(i) => self.entries.insert(i, entry),
            None => self.entries.push(entry),
        }
        true
    }

    fn top(&self, limit: usize) -> Vec<ScoreRecord> {
        self.entries
            .iter()
            .take(limit)
            .map(|e| ScoreRecord {
                name: e.name.clone(),
                score: e.score,
            })
            .collect()
    }
}
