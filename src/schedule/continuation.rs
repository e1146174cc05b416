//! Delayed effects a session schedules for itself.

use serde::{Deserialize, Serialize};

/// Generation counter of a session.
///
/// Bumped on every reset. A continuation scheduled under an older epoch
/// belongs to a game that no longer exists and must be dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionEpoch(pub u32);

impl SessionEpoch {
    /// The epoch after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "epoch {}", self.0)
    }
}

/// A delayed effect.
///
/// Enemy-bound continuations carry the spawn number of the enemy they were
/// scheduled against; they do nothing once that enemy has left the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continuation {
    /// The enemy counter-attacks.
    EnemyAttack { spawn: u32 },

    /// The defeated enemy's reward is paid out. Schedules `SpawnEnemy`.
    EnemyDefeated { spawn: u32 },

    /// A fresh enemy arrives.
    SpawnEnemy,
}

impl std::fmt::Display for Continuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Continuation::EnemyAttack { spawn } => write!(f, "enemy #{} attacks", spawn),
            Continuation::EnemyDefeated { spawn } => write!(f, "enemy #{} defeated", spawn),
            Continuation::SpawnEnemy => f.write_str("spawn enemy"),
        }
    }
}
