//! Duel configuration.
//!
//! Every tunable number in a session lives here: stat caps, continuation
//! delays, rewards, and the spell and enemy catalogs. Defaults reproduce the
//! standard game. Configs can be loaded from TOML; missing keys fall back to
//! their defaults.
//!
//! ```
//! use wizard_duel::core::DuelConfig;
//!
//! let config = DuelConfig::from_toml_str("seed = 7\nmax_rounds = 3").unwrap();
//! assert_eq!(config.seed, 7);
//! assert_eq!(config.max_rounds, Some(3));
//! assert_eq!(config.enemy_attack_delay_ms, 1000);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::catalog::{standard_enemies, standard_spells, EnemySpecies, SpellDefinition};
use crate::error::{DuelError, DuelResult};

use super::battle_log::DEFAULT_LOG_CAPACITY;

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DuelConfig {
    /// Seed for enemy selection.
    pub seed: u64,

    /// Player hp cap (and starting hp).
    pub max_hp: u32,

    /// Player mana cap (and starting mana).
    pub max_mana: u32,

    /// Delay between a player action and the enemy's counter-attack.
    pub enemy_attack_delay_ms: u64,

    /// Delay between the killing blow and the defeat reward.
    pub defeat_reward_delay_ms: u64,

    /// Delay between the defeat reward and the next enemy.
    pub respawn_delay_ms: u64,

    /// Score awarded per defeated enemy.
    pub defeat_score: u32,

    /// Mana restored when an enemy is defeated.
    pub defeat_mana_bonus: u32,

    /// Mana restored by the restore action.
    pub restore_mana_amount: u32,

    /// Battle log capacity.
    pub log_capacity: usize,

    /// Clearing this many rounds wins the duel. `None` duels forever.
    pub max_rounds: Option<u32>,

    /// Spells, in display order.
    pub spells: Vec<SpellDefinition>,

    /// Enemy species that can spawn.
    pub enemies: Vec<EnemySpecies>,
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_hp: 100,
            max_mana: 100,
            enemy_attack_delay_ms: 1000,
            defeat_reward_delay_ms: 500,
            respawn_delay_ms: 1000,
            defeat_score: 100,
            defeat_mana_bonus: 30,
            restore_mana_amount: 20,
            log_capacity: DEFAULT_LOG_CAPACITY,
            max_rounds: None,
            spells: standard_spells(),
            enemies: standard_enemies(),
        }
    }
}

impl DuelConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str) -> DuelResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file and validate it.
    pub fn load(path: &Path) -> DuelResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DuelError::InvalidConfig {
            field: "path",
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&text)
    }

    /// Check the config describes a playable duel.
    pub fn validate(&self) -> DuelResult<()> {
        if self.max_hp == 0 {
            return Err(invalid("max_hp", "must be positive"));
        }
        if self.max_mana == 0 {
            return Err(invalid("max_mana", "must be positive"));
        }
        if self.log_capacity == 0 {
            return Err(invalid("log_capacity", "must be positive"));
        }
        if self.max_rounds == Some(0) {
            return Err(invalid("max_rounds", "must be positive when set"));
        }
        if self.spells.is_empty() {
            return Err(invalid("spells", "must not be empty"));
        }
        if let Some(spell) = self.spells.iter().find(|s| !s.has_effect()) {
            return Err(invalid(
                "spells",
                format!("{} has neither damage nor heal", spell.name),
            ));
        }
        if self.enemies.is_empty() {
            return Err(invalid("enemies", "must not be empty"));
        }
        if let Some(species) = self.enemies.iter().find(|e| e.max_hp == 0) {
            return Err(invalid("enemies", format!("{} has no hp", species.name)));
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    pub fn with_spells(mut self, spells: Vec<SpellDefinition>) -> Self {
        self.spells = spells;
        self
    }

    pub fn with_enemies(mut self, enemies: Vec<EnemySpecies>) -> Self {
        self.enemies = enemies;
        self
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    #[must_use]
    pub fn enemy_attack_delay(&self) -> Duration {
        Duration::from_millis(self.enemy_attack_delay_ms)
    }

    #[must_use]
    pub fn defeat_reward_delay(&self) -> Duration {
        Duration::from_millis(self.defeat_reward_delay_ms)
    }

    #[must_use]
    pub fn respawn_delay(&self) -> Duration {
        Duration::from_millis(self.respawn_delay_ms)
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> DuelError {
    DuelError::InvalidConfig {
        field,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DuelConfig::default();

        assert_eq!(config.max_hp, 100);
        assert_eq!(config.max_mana, 100);
        assert_eq!(config.enemy_attack_delay_ms, 1000);
        assert_eq!(config.defeat_reward_delay_ms, 500);
        assert_eq!(config.respawn_delay_ms, 1000);
        assert_eq!(config.log_capacity, 5);
        assert_eq!(config.max_rounds, None);
        assert_eq!(config.spells.len(), 5);
        assert_eq!(config.enemies.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DuelConfig::default()
            .with_seed(123)
            .with_max_rounds(3)
            .with_log_capacity(8);

        assert_eq!(config.seed, 123);
        assert_eq!(config.max_rounds, Some(3));
        assert_eq!(config.log_capacity, 8);
    }

    #[test]
    fn test_toml_partial() {
        let config = DuelConfig::from_toml_str(
            r#"
            seed = 9
            enemy_attack_delay_ms = 250

            [[enemies]]
            name = "Boggart"
            max_hp = 40
            damage = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, 9);
        assert_eq!(config.enemy_attack_delay(), Duration::from_millis(250));
        assert_eq!(config.enemies, vec![EnemySpecies::new("Boggart", 40, 5)]);
        assert_eq!(config.spells.len(), 5);
    }

    #[test]
    fn test_toml_spells() {
        let config = DuelConfig::from_toml_str(
            r#"
            [[spells]]
            name = "Episkey"
            heal = 10
            mana_cost = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.spells, vec![SpellDefinition::healing("Episkey", 10, 5)]);
    }

    #[test]
    fn test_toml_parse_error() {
        let err = DuelConfig::from_toml_str("seed = \"nope\"").unwrap_err();
        assert!(matches!(err, DuelError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_empty_enemies() {
        let err = DuelConfig::default().with_enemies(vec![]).validate().unwrap_err();
        assert!(matches!(err, DuelError::InvalidConfig { field: "enemies", .. }));
    }

    #[test]
    fn test_validate_rejects_effectless_spell() {
        let lumos = SpellDefinition {
            name: "Lumos".to_string(),
            damage: None,
            heal: None,
            mana_cost: 5,
        };
        let err = DuelConfig::default().with_spells(vec![lumos]).validate().unwrap_err();
        assert!(matches!(err, DuelError::InvalidConfig { field: "spells", .. }));
    }

    #[test]
    fn test_validate_rejects_zero_rounds() {
        let err = DuelConfig::default().with_max_rounds(0).validate().unwrap_err();
        assert!(matches!(err, DuelError::InvalidConfig { field: "max_rounds", .. }));
    }

    #[test]
    fn test_serialization() {
        let config = DuelConfig::default().with_max_rounds(4);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: DuelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
