//! Record of the state changes an interaction has gone through.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of changes kept before the oldest ones are evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 256;

/// A single move from one named state to another.
///
/// # Example
///
/// ```rust
/// use gazeflow::core::StateChange;
/// use chrono::Utc;
///
/// let change = StateChange {
///     from: "Idle".to_string(),
///     to: "Greeting".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(change.to, "Greeting");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateChange {
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered, bounded history of state changes.
///
/// # Example
///
/// ```rust
/// use gazeflow::core::{StateChange, StateHistory};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateChange {
///     from: "Start".to_string(),
///     to: "Middle".to_string(),
///     timestamp: Utc::now(),
/// });
/// history.record(StateChange {
///     from: "Middle".to_string(),
///     to: "End".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    changes: VecDeque<StateChange>,
    capacity: usize,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history that keeps at most `capacity` changes.
    ///
    /// A capacity of zero is bumped to one so the latest change is always
    /// available.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            changes: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Append a change, evicting the oldest one when full.
    pub fn record(&mut self, change: StateChange) {
        if self.changes.len() == self.capacity {
            self.changes.pop_front();
        }
        self.changes.push_back(change);
    }

    /// All retained changes, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateChange> {
        self.changes.iter()
    }

    pub fn last(&self) -> Option<&StateChange> {
        self.changes.back()
    }

    /// States traversed: the `from` of the oldest retained change, then the
    /// `to` of every change.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.front() {
            path.push(first.from.as_str());
        }
        path.extend(self.changes.iter().map(|c| c.to.as_str()));
        path
    }

    /// Time between the oldest and newest retained change.
    ///
    /// Returns `None` when empty or when timestamps run backwards.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.changes.front()?, self.changes.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }
}
