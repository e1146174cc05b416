//! Bounded battle log.
//!
//! Keeps the most recent `capacity` messages; pushing onto a full log
//! evicts the oldest entry first. Backed by `im::Vector` so that view
//! snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

/// Default number of messages retained.
pub const DEFAULT_LOG_CAPACITY: usize = 5;

/// FIFO message log with a fixed capacity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLog {
    entries: Vector<String>,
    capacity: usize,
}

impl BattleLog {
    /// Create an empty log holding at most `capacity` messages.
    ///
    /// A capacity of 0 is raised to 1 so the latest message is always visible.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a message, evicting the oldest if full.
    pub fn push(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(%message, "battle log");
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    /// Remove all messages.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recent message.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(String::as_str)
    }

    /// Iterate messages oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for BattleLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}
