//! Player actions and the history that records them.
//!
//! Every accepted action is recorded with the round it happened in, a
//! per-session sequence number, and the virtual time it was taken. Replaying
//! the recorded actions against a session with the same seed reproduces the
//! same duel.

use serde::{Deserialize, Serialize};

use super::player::House;

/// A player action that changes the session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Begin the duel.
    Start { name: String, house: House },

    /// Cast a spell by name.
    Cast { spell: String },

    /// Channel mana instead of casting.
    RestoreMana,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Start { name, house } => write!(f, "start {} of {}", name, house),
            Action::Cast { spell } => write!(f, "cast {}", spell),
            Action::RestoreMana => f.write_str("restore mana"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Round number when the action was taken.
    pub round: u32,

    /// Sequence number within the session (for ordering).
    pub sequence: u32,

    /// Virtual time in milliseconds when the action was taken.
    pub at_ms: u64,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, round: u32, sequence: u32, at_ms: u64) -> Self {
        Self {
            action,
            round,
            sequence,
            at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_display() {
        let start = Action::Start {
            name: "Harry".to_string(),
            house: House::Gryffindor,
        };
        assert_eq!(start.to_string(), "start Harry of Gryffindor");
        assert_eq!(
            Action::Cast { spell: "Stupefy".to_string() }.to_string(),
            "cast Stupefy"
        );
        assert_eq!(Action::RestoreMana.to_string(), "restore mana");
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Action::RestoreMana, 3, 5, 1500);

        assert_eq!(record.action, Action::RestoreMana);
        assert_eq!(record.round, 3);
        assert_eq!(record.sequence, 5);
        assert_eq!(record.at_ms, 1500);
    }

    #[test]
    fn test_action_record_serialization() {
        let action = Action::Cast { spell: "Protego".to_string() };
        let record = ActionRecord::new(action, 2, 3, 0);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
