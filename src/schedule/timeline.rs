//! Virtual-clock timeline of delayed tasks.
//!
//! Time only moves when the owner says so. Tasks come due in `due` order;
//! tasks due at the same instant run in the order they were scheduled.
//! Popping a task moves the clock to its due time, so a task scheduled
//! while handling another is delayed relative to the moment the first one
//! ran, not to when `advance` was called.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::continuation::SessionEpoch;

/// Identifier of a scheduled task, unique per timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

/// A task waiting on the timeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled<T> {
    pub id: TaskId,

    /// Virtual time (ms) at which the task runs.
    pub due: u64,

    /// Session epoch the task was scheduled in.
    pub epoch: SessionEpoch,

    pub payload: T,
}

/// Pending tasks ordered by `(due, id)`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Timeline<T> {
    now: u64,
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Timeline<T> {
    fn default() -> Self {
        Self {
            now: 0,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Timeline<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Schedule `payload` to run `delay` after now.
    pub fn schedule(&mut self, delay: Duration, epoch: SessionEpoch, payload: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let due = self.now.saturating_add(delay_ms);

        // Insert after every task due at or before `due` to keep FIFO ties.
        let at = self.pending.partition_point(|t| t.due <= due);
        self.pending.insert(
            at,
            Scheduled {
                id,
                due,
                epoch,
                payload,
            },
        );
        tracing::trace!(task = id.0, due, "scheduled");
        id
    }

    /// Due time of the earliest pending task.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.first().map(|t| t.due)
    }

    /// Time remaining until the earliest pending task.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.next_due()
            .map(|due| Duration::from_millis(due.saturating_sub(self.now)))
    }

    /// Remove the earliest task if it is due at or before `until`.
    ///
    /// Moves the clock forward to the task's due time.
    pub fn pop_due(&mut self, until: u64) -> Option<Scheduled<T>> {
        if self.pending.first()?.due > until {
            return None;
        }
        let task = self.pending.remove(0);
        self.now = self.now.max(task.due);
        Some(task)
    }

    /// Move the clock forward to `time`. Never moves it backwards.
    pub fn advance_to(&mut self, time: u64) {
        self.now = self.now.max(time);
    }

    /// Keep only the pending tasks matching `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&Scheduled<T>) -> bool) {
        let before = self.pending.len();
        self.pending.retain(|t| keep(t));
        tracing::trace!(dropped = before - self.pending.len(), "timeline pruned");
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Iterate pending tasks in run order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled<T>> {
        self.pending.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: SessionEpoch = SessionEpoch(0);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_empty_timeline() {
        let mut timeline: Timeline<&str> = Timeline::new();

        assert!(timeline.is_empty());
        assert_eq!(timeline.now(), 0);
        assert_eq!(timeline.next_due(), None);
        assert!(timeline.pop_due(u64::MAX).is_none());
    }

    #[test]
    fn test_pops_in_due_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(1000), E, "late");
        timeline.schedule(ms(500), E, "early");

        assert_eq!(timeline.next_due(), Some(500));
        assert_eq!(timeline.pop_due(2000).unwrap().payload, "early");
        assert_eq!(timeline.now(), 500);
        assert_eq!(timeline.pop_due(2000).unwrap().payload, "late");
        assert_eq!(timeline.now(), 1000);
    }

    #[test]
    fn test_ties_run_in_schedule_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(100), E, 1);
        timeline.schedule(ms(100), E, 2);
        timeline.schedule(ms(100), E, 3);

        let order: Vec<_> = std::iter::from_fn(|| timeline.pop_due(100))
            .map(|t| t.payload)
            .collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(1000), E, ());

        assert!(timeline.pop_due(999).is_none());
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.now(), 0);
    }

    #[test]
    fn test_schedule_relative_to_now() {
        let mut timeline = Timeline::new();
        timeline.advance_to(300);
        timeline.schedule(ms(200), E, ());

        assert_eq!(timeline.next_due(), Some(500));
        assert_eq!(timeline.next_due_in(), Some(ms(200)));
    }

    #[test]
    fn test_advance_never_rewinds() {
        let mut timeline: Timeline<()> = Timeline::new();
        timeline.advance_to(100);
        timeline.advance_to(50);

        assert_eq!(timeline.now(), 100);
    }

    #[test]
    fn test_retain_keeps_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(ms(300), E, "a");
        timeline.schedule(ms(100), SessionEpoch(1), "b");
        timeline.schedule(ms(200), E, "c");

        timeline.retain(|t| t.epoch == E);

        let left: Vec<_> = timeline.iter().map(|t| t.payload).collect();
        assert_eq!(left, vec!["c", "a"]);
        assert_eq!(timeline.next_due(), Some(200));
    }

    #[test]
    fn test_task_ids_unique() {
        let mut timeline = Timeline::new();
        let a = timeline.schedule(ms(0), E, ());
        let b = timeline.schedule(ms(0), SessionEpoch(1), ());

        assert_ne!(a, b);
        let epochs: Vec<_> = timeline.iter().map(|t| t.epoch).collect();
        assert_eq!(epochs, vec![E, SessionEpoch(1)]);
    }
}
