//! Named catalog with lookup by name.
//!
//! `Catalog<T>` keeps entries in insertion order (the order they are shown
//! to the player) and indexes them by name for fast lookup.

use rustc_hash::FxHashMap;

use crate::error::{DuelError, DuelResult};

/// Anything that can live in a catalog.
pub trait CatalogEntry {
    /// Unique display name.
    fn name(&self) -> &str;
}

/// Ordered, name-indexed catalog of immutable entries.
///
/// ## Example
///
/// ```
/// use wizard_duel::catalog::{Grimoire, SpellDefinition};
///
/// let mut grimoire = Grimoire::new();
/// grimoire.register(SpellDefinition::attack("Stupefy", 30, 25)).unwrap();
///
/// let found = grimoire.get("Stupefy").unwrap();
/// assert_eq!(found.damage, Some(30));
/// ```
#[derive(Clone, Debug)]
pub struct Catalog<T> {
    entries: Vec<T>,
    by_name: FxHashMap<String, usize>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_name: FxHashMap::default(),
        }
    }
}

impl<T: CatalogEntry> Catalog<T> {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, rejecting duplicate names.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> DuelResult<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.register(entry)?;
        }
        Ok(catalog)
    }

    /// Build a catalog from a built-in list whose names are known distinct.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a name.
    #[must_use]
    pub fn from_distinct(entries: impl IntoIterator<Item = T>) -> Self {
        match Self::from_entries(entries) {
            Ok(catalog) => catalog,
            Err(e) => panic!("built-in catalog is malformed: {}", e),
        }
    }

    /// Register an entry.
    ///
    /// Returns `DuelError::DuplicateEntry` if the name is already taken.
    pub fn register(&mut self, entry: T) -> DuelResult<()> {
        let name = entry.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(DuelError::DuplicateEntry(name));
        }
        self.by_name.insert(name, self.entries.len());
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Look up an entry by position (display order).
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    /// All entries as a slice, in display order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Find entries matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &T>
    where
        F: Fn(&T) -> bool,
    {
        self.entries.iter().filter(move |e| predicate(e))
    }
}
