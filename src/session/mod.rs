//! The duel session and its turn resolution.
//!
//! A turn is a player action followed by the enemy's delayed answer:
//!
//! 1. The player casts (or restores mana). Mana, damage, heal and the log
//!    entries are applied immediately.
//! 2. If the cast felled the enemy, the reward is scheduled and then the
//!    next enemy; there is no counter-attack.
//! 3. Otherwise the enemy's attack is scheduled. If it drops the player to
//!    0 hp, the duel ends in defeat.
//!
//! Scheduled work runs only when the session is advanced, and only if the
//! session has not been reset or finished in the meantime.

mod engine;
mod outcome;

pub use engine::Session;
pub use outcome::{CastOutcome, DuelEvent, DuelEvents};
