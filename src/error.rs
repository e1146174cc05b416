//! Error types for session operations.
//!
//! Insufficient mana is not an error: it is a normal cast outcome and is
//! reported through `CastOutcome::NotEnoughMana`. Everything here leaves the
//! session untouched.

use thiserror::Error;

use crate::core::Phase;

/// Result type alias for session operations.
pub type DuelResult<T> = Result<T, DuelError>;

#[derive(Debug, Error)]
pub enum DuelError {
    /// Name is blank or no house was selected.
    #[error("a wizard needs both a name and a house to begin")]
    IncompleteProfile,

    /// Operation not allowed in the current phase.
    #[error("cannot {action} during the {phase} phase")]
    WrongPhase { action: &'static str, phase: Phase },

    /// The current enemy is defeated and its replacement has not arrived.
    #[error("no enemy to duel right now")]
    NoActiveEnemy,

    #[error("unknown spell: {0}")]
    UnknownSpell(String),

    #[error("unknown house: {0}")]
    UnknownHouse(String),

    /// Two catalog entries share a name.
    #[error("duplicate catalog entry: {0}")]
    DuplicateEntry(String),

    #[error("invalid config: {field}: {message}")]
    InvalidConfig { field: &'static str, message: String },

    #[error(transparent)]
    ConfigParse(#[from] toml::de::Error),
}
