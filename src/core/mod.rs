//! Core duel types: player, phase, log, actions, RNG, configuration.
//!
//! These are the building blocks the session is assembled from. None of
//! them schedule anything or know about time.

pub mod action;
pub mod battle_log;
pub mod config;
pub mod phase;
pub mod player;
pub mod rng;

pub use action::{Action, ActionRecord};
pub use battle_log::{BattleLog, DEFAULT_LOG_CAPACITY};
pub use config::DuelConfig;
pub use phase::Phase;
pub use player::{House, Player};
pub use rng::{GameRng, GameRngState};
