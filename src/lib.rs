//! # wizard-duel
//!
//! A turn-based wizard duel. The player picks a name and house, then faces
//! an endless line of randomly drawn enemies with a fixed grimoire of spells.
//!
//! ## Design Principles
//!
//! 1. **Owned Session**: All state lives in a `Session` value. No globals,
//!    so a duel can be driven and inspected without any front-end.
//!
//! 2. **Virtual Time**: Enemy answers, kill rewards and respawns are
//!    continuations on a timeline that only moves when the session is
//!    advanced. Tests step through a duel deterministically.
//!
//! 3. **Epoch Guards**: Every continuation is stamped with the session epoch.
//!    Resetting bumps the epoch, so work left over from an old game can never
//!    touch a new one.
//!
//! ## Modules
//!
//! - `core`: Player, house, phase, battle log, actions, RNG, configuration
//! - `catalog`: Spell and enemy catalogs
//! - `schedule`: Virtual-clock timeline of continuations
//! - `session`: The duel session and turn resolution
//! - `view`: Display snapshot of a session

pub mod catalog;
pub mod core;
pub mod error;
pub mod schedule;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, BattleLog, DuelConfig, GameRng, GameRngState, House, Phase, Player,
};

pub use crate::catalog::{Bestiary, Catalog, CatalogEntry, Enemy, EnemySpecies, Grimoire, SpellDefinition};

pub use crate::error::{DuelError, DuelResult};

pub use crate::schedule::{Continuation, Scheduled, SessionEpoch, TaskId, Timeline};

pub use crate::session::{CastOutcome, DuelEvent, DuelEvents, Session};

pub use crate::view::SessionView;
