//! Identifier-keyed registry of file definitions.
//!
//! The catalog refuses to overwrite an identifier that is already present but
//! does not treat that as an error; deciding whether a repeated identifier is
//! fatal is left to the loader.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::file_definition::FileDefinition;

/// Registry of [`FileDefinition`] values keyed by identifier.
///
/// Catalogs are produced by [`SchemaLoader::load`] and are not mutated once
/// returned, so they can be shared by reference between readers.
///
/// [`SchemaLoader::load`]: crate::SchemaLoader::load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    definitions: HashMap<String, FileDefinition>,
}

impl Catalog {
    /// Inserts `definition` unless its identifier is already present.
    ///
    /// Returns `true` when the definition was inserted.
    pub(crate) fn insert(&mut self, definition: FileDefinition) -> bool {
        match self.definitions.entry(definition.id().to_owned()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(definition);
                true
            }
        }
    }

    /// Returns `true` if a definition with `id` is present.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Returns the definition with `id`, if present.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FileDefinition> {
        self.definitions.get(id)
    }

    /// Returns every definition marked as a synchronisation source.
    ///
    /// The order of the returned definitions is unspecified.
    #[must_use]
    pub fn source_definitions(&self) -> Vec<&FileDefinition> {
        self.definitions
            .values()
            .filter(|definition| definition.is_source())
            .collect()
    }

    /// Resolves the destination definition of a source.
    ///
    /// Returns `None` when `source` is not a source or its destination
    /// identifier is not in the catalog.
    #[must_use]
    pub fn destination_of(&self, source: &FileDefinition) -> Option<&FileDefinition> {
        if !source.is_source() {
            return None;
        }
        self.get(source.target().destination_id())
    }

    /// Returns source definitions whose destination is missing from the
    /// catalog.
    #[must_use]
    pub fn unresolved_sources(&self) -> Vec<&FileDefinition> {
        self.definitions
            .values()
            .filter(|definition| {
                definition.is_source() && !self.contains(definition.target().destination_id())
            })
            .collect()
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` if the catalog holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates over all definitions in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &FileDefinition> {
        self.definitions.values()
    }

    /// Iterates over all identifiers in unspecified order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }
}
