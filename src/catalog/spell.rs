//! Spell definitions and the standard grimoire.

use serde::{Deserialize, Serialize};

use super::registry::{Catalog, CatalogEntry};

/// An immutable spell.
///
/// A spell may damage, heal, or both. Casting always costs `mana_cost`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpellDefinition {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<u32>,

    pub mana_cost: u32,
}

impl SpellDefinition {
    /// Damage-only spell.
    pub fn attack(name: impl Into<String>, damage: u32, mana_cost: u32) -> Self {
        Self {
            name: name.into(),
            damage: Some(damage),
            heal: None,
            mana_cost,
        }
    }

    /// Heal-only spell.
    pub fn healing(name: impl Into<String>, heal: u32, mana_cost: u32) -> Self {
        Self {
            name: name.into(),
            damage: None,
            heal: Some(heal),
            mana_cost,
        }
    }

    /// Add a heal component.
    #[must_use]
    pub fn with_heal(mut self, heal: u32) -> Self {
        self.heal = Some(heal);
        self
    }

    /// Check if the spell has any effect at all.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.damage.is_some() || self.heal.is_some()
    }
}

impl CatalogEntry for SpellDefinition {
    fn name(&self) -> &str {
        &self.name
    }
}

/// The spells a player can cast.
pub type Grimoire = Catalog<SpellDefinition>;

/// The five standard spells, in display order.
#[must_use]
pub fn standard_spells() -> Vec<SpellDefinition> {
    vec![
        SpellDefinition::attack("Expelliarmus", 20, 15),
        SpellDefinition::attack("Stupefy", 30, 25),
        SpellDefinition::healing("Protego", 25, 20),
        SpellDefinition::attack("Expecto Patronum", 50, 40),
        SpellDefinition::attack("Petrificus Totalus", 35, 30),
    ]
}

impl Catalog<SpellDefinition> {
    /// The standard grimoire.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_distinct(standard_spells())
    }

    /// Spells affordable with `mana`, in display order.
    pub fn castable(&self, mana: u32) -> impl Iterator<Item = &SpellDefinition> {
        self.find(move |s| s.mana_cost <= mana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grimoire() {
        let grimoire = Grimoire::standard();

        assert_eq!(grimoire.len(), 5);
        let stupefy = grimoire.get("Stupefy").unwrap();
        assert_eq!(stupefy.damage, Some(30));
        assert_eq!(stupefy.mana_cost, 25);

        let protego = grimoire.get("Protego").unwrap();
        assert_eq!(protego.damage, None);
        assert_eq!(protego.heal, Some(25));
    }

    #[test]
    fn test_castable() {
        let grimoire = Grimoire::standard();

        let names: Vec<_> = grimoire.castable(20).map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Expelliarmus", "Protego"]);

        assert_eq!(grimoire.castable(0).count(), 0);
        assert_eq!(grimoire.castable(100).count(), 5);
    }

    #[test]
    fn test_builder() {
        let spell = SpellDefinition::attack("Sectumsempra", 40, 35).with_heal(5);
        assert!(spell.has_effect());
        assert_eq!(spell.heal, Some(5));

        let empty = SpellDefinition {
            name: "Lumos".to_string(),
            damage: None,
            heal: None,
            mana_cost: 1,
        };
        assert!(!empty.has_effect());
    }

    #[test]
    fn test_serialization_omits_missing_components() {
        let spell = SpellDefinition::healing("Protego", 25, 20);
        let json = serde_json::to_string(&spell).unwrap();

        assert!(!json.contains("damage"));
        let deserialized: SpellDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(spell, deserialized);
    }
}
