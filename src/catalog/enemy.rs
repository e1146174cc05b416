//! Enemy species and live enemy instances.

use serde::{Deserialize, Serialize};

use super::registry::{Catalog, CatalogEntry};

/// A kind of enemy: fixed max hp and attack damage.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemySpecies {
    pub name: String,
    pub max_hp: u32,
    pub damage: u32,
}

impl EnemySpecies {
    pub fn new(name: impl Into<String>, max_hp: u32, damage: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            damage,
        }
    }
}

impl CatalogEntry for EnemySpecies {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The enemies that can spawn.
pub type Bestiary = Catalog<EnemySpecies>;

/// The four standard species.
#[must_use]
pub fn standard_enemies() -> Vec<EnemySpecies> {
    vec![
        EnemySpecies::new("Dementor", 100, 15),
        EnemySpecies::new("Death Eater", 80, 20),
        EnemySpecies::new("Basilisk", 150, 25),
        EnemySpecies::new("Troll", 120, 18),
    ]
}

impl Catalog<EnemySpecies> {
    /// The standard bestiary.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_distinct(standard_enemies())
    }
}

/// An enemy on the field.
///
/// `current_hp` is always within `0..=species.max_hp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    species: EnemySpecies,
    current_hp: u32,
}

impl Enemy {
    /// Spawn an enemy at full health.
    #[must_use]
    pub fn spawn(species: &EnemySpecies) -> Self {
        Self {
            species: species.clone(),
            current_hp: species.max_hp,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.species.name
    }

    #[must_use]
    pub fn max_hp(&self) -> u32 {
        self.species.max_hp
    }

    #[must_use]
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    #[must_use]
    pub fn damage(&self) -> u32 {
        self.species.damage
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.current_hp == 0
    }

    /// Take damage, floored at 0. Returns the remaining hp.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp
    }
}
