//! Session phase.

use serde::{Deserialize, Serialize};

/// Where the session is in its lifecycle.
///
/// ```text
/// Start --start_game--> Playing --hp hits 0--> Defeat
///                          |
///                          +--max_rounds cleared--> Victory
/// ```
///
/// `reset_game` returns any phase to `Start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Choosing a name and house.
    #[default]
    Start,
    /// Duelling.
    Playing,
    /// Cleared the configured number of rounds.
    Victory,
    /// Player hp reached 0.
    Defeat,
}

impl Phase {
    /// Check if the session has ended (victory or defeat).
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Phase::Victory | Phase::Defeat)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::Playing => "playing",
            Phase::Victory => "victory",
            Phase::Defeat => "defeat",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_start() {
        assert_eq!(Phase::default(), Phase::Start);
    }

    #[test]
    fn test_is_over() {
        assert!(!Phase::Start.is_over());
        assert!(!Phase::Playing.is_over());
        assert!(Phase::Victory.is_over());
        assert!(Phase::Defeat.is_over());
    }
}
