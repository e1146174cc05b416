//! What player actions and continuations report back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Result of a cast that was accepted by the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastOutcome {
    /// Mana was short. Only the log changed.
    NotEnoughMana { have: u32, need: u32 },

    /// The spell resolved and the enemy will answer.
    Resolved {
        /// Damage dealt, if the spell has a damage component.
        damage: Option<u32>,
        /// Enemy hp after the hit.
        enemy_hp: u32,
        /// Hp actually gained, if the spell has a heal component.
        healed: Option<u32>,
    },

    /// The spell finished the enemy. No counter-attack follows.
    EnemyDefeated { damage: u32 },
}

impl CastOutcome {
    /// Check if the cast went off (mana was spent).
    #[must_use]
    pub fn was_cast(&self) -> bool {
        !matches!(self, CastOutcome::NotEnoughMana { .. })
    }
}

/// Something a continuation did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelEvent {
    EnemySpawned { enemy: String, max_hp: u32 },

    EnemyAttacked {
        enemy: String,
        damage: u32,
        /// Player hp after the attack.
        player_hp: u32,
    },

    EnemyDefeated {
        enemy: String,
        /// Score after the reward.
        score: u32,
        /// Round after advancing.
        round: u32,
    },

    PlayerDefeated { score: u32, round: u32 },

    Victory { score: u32, rounds: u32 },
}

/// Events from one `advance`/`settle` call, in the order they happened.
pub type DuelEvents = SmallVec<[DuelEvent; 4]>;
