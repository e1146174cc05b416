//! Delayed continuations.
//!
//! A player action resolves synchronously, then leaves work for later: the
//! enemy's counter-attack, the reward for a kill, the next enemy's arrival.
//! That work is scheduled on a `Timeline` as a `Continuation`, stamped with
//! the session's `SessionEpoch`.
//!
//! The timeline is driven by its owner. Nothing runs until the session is
//! advanced, so tests step through a duel one continuation at a time.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use wizard_duel::schedule::{Continuation, SessionEpoch, Timeline};
//!
//! let mut timeline = Timeline::new();
//! timeline.schedule(Duration::from_millis(1000), SessionEpoch(0), Continuation::EnemyAttack { spawn: 1 });
//!
//! assert!(timeline.pop_due(999).is_none());
//! let task = timeline.pop_due(1000).unwrap();
//! assert_eq!(task.payload, Continuation::EnemyAttack { spawn: 1 });
//! assert_eq!(timeline.now(), 1000);
//! ```

mod continuation;
mod timeline;

pub use continuation::{Continuation, SessionEpoch};
pub use timeline::{Scheduled, TaskId, Timeline};
