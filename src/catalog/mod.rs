//! Spell and enemy catalogs.
//!
//! Both are immutable for the life of a session. The standard catalogs can
//! be replaced wholesale through `DuelConfig`.

mod enemy;
mod registry;
mod spell;

pub use enemy::{standard_enemies, Bestiary, Enemy, EnemySpecies};
pub use registry::{Catalog, CatalogEntry};
pub use spell::{standard_spells, Grimoire, SpellDefinition};
