//! The duelling wizard: identity, house, and clamped vital stats.
//!
//! ## House
//!
//! One of the four fixed houses. Parsed case-insensitively from text.
//!
//! ## Player
//!
//! Holds hp, mana, score and round. All hp/mana mutation goes through
//! methods that clamp to `[0, cap]`, so the stats can never leave range.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DuelError;

/// A wizarding house.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Slytherin,
    Ravenclaw,
    Hufflepuff,
}

impl House {
    /// All houses, in display order.
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Slytherin,
        House::Ravenclaw,
        House::Hufflepuff,
    ];

    /// House name as shown to the player.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            House::Gryffindor => "Gryffindor",
            House::Slytherin => "Slytherin",
            House::Ravenclaw => "Ravenclaw",
            House::Hufflepuff => "Hufflepuff",
        }
    }
}

impl std::fmt::Display for House {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for House {
    type Err = DuelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        House::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DuelError::UnknownHouse(wanted.to_string()))
    }
}

/// Player stats for one session.
///
/// `hp` and `mana` are kept within `[0, max_hp]` and `[0, max_mana]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Wizard name (free text).
    pub name: String,

    /// Selected house. `None` until the game starts.
    pub house: Option<House>,

    hp: u32,
    mana: u32,
    max_hp: u32,
    max_mana: u32,

    /// Points earned from defeated enemies.
    pub score: u32,

    /// Current round (starts at 1).
    pub round: u32,
}

impl Player {
    /// Create a fresh, unnamed player at full hp and mana.
    #[must_use]
    pub fn new(max_hp: u32, max_mana: u32) -> Self {
        Self {
            name: String::new(),
            house: None,
            hp: max_hp,
            mana: max_mana,
            max_hp,
            max_mana,
            score: 0,
            round: 1,
        }
    }

    #[must_use]
    pub fn hp(&self) -> u32 {
        self.hp
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    #[must_use]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    /// Check if the player is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Check if the player can pay `cost` mana.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.mana >= cost
    }

    /// Heal, capped at `max_hp`. Returns the hp actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    /// Take damage, floored at 0. Returns the remaining hp.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp = self.hp.saturating_sub(amount);
        self.hp
    }

    /// Spend mana if affordable.
    ///
    /// Returns false (and leaves mana untouched) when `cost` exceeds mana.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.mana -= cost;
        true
    }

    /// Restore mana, capped at `max_mana`. Returns the mana actually gained.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let before = self.mana;
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
        self.mana - before
    }

    /// Overwrite hp, clamped to range.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Overwrite mana, clamped to range.
    pub fn set_mana(&mut self, mana: u32) {
        self.mana = mana.min(self.max_mana);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_parse() {
        assert_eq!("Gryffindor".parse::<House>().unwrap(), House::Gryffindor);
        assert_eq!(" ravenclaw ".parse::<House>().unwrap(), House::Ravenclaw);
        assert!(matches!(
            "Durmstrang".parse::<House>(),
            Err(DuelError::UnknownHouse(name)) if name == "Durmstrang"
        ));
    }

    #[test]
    fn test_house_display() {
        assert_eq!(format!("{}", House::Hufflepuff), "Hufflepuff");
        assert_eq!(House::ALL.len(), 4);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(100, 100);

        assert_eq!(player.hp(), 100);
        assert_eq!(player.mana(), 100);
        assert_eq!(player.score, 0);
        assert_eq!(player.round, 1);
        assert!(player.house.is_none());
        assert!(player.is_alive());
    }

    #[test]
    fn test_heal_capped() {
        let mut player = Player::new(100, 100);
        player.set_hp(90);

        assert_eq!(player.heal(25), 10);
        assert_eq!(player.hp(), 100);
    }

    #[test]
    fn test_damage_floored() {
        let mut player = Player::new(100, 100);
        player.set_hp(15);

        assert_eq!(player.take_damage(20), 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_spend_mana() {
        let mut player = Player::new(100, 100);
        player.set_mana(10);

        assert!(!player.spend_mana(25));
        assert_eq!(player.mana(), 10);

        assert!(player.spend_mana(10));
        assert_eq!(player.mana(), 0);
    }

    #[test]
    fn test_restore_mana_capped() {
        let mut player = Player::new(100, 100);
        player.set_mana(85);

        assert_eq!(player.restore_mana(30), 15);
        assert_eq!(player.mana(), 100);
    }

    #[test]
    fn test_setters_clamp() {
        let mut player = Player::new(100, 100);
        player.set_hp(500);
        player.set_mana(500);

        assert_eq!(player.hp(), 100);
        assert_eq!(player.mana(), 100);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(100, 100);
        player.name = "Harry".to_string();
        player.house = Some(House::Gryffindor);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
