//! Mapping registry: the ordered list of assertions a run checks.
//!
//! The registry is data. Production registries are table literals of
//! [`MappingFamily`] rows, TOML mapping files, or GIR documents; all of
//! them go through [`RegistryBuilder`], which validates the whole set
//! before anything is resolved.

pub mod types;
pub mod builder;
pub mod loader;

pub use builder::RegistryBuilder;
pub use types::{MappingEntry, MappingFamily};

use parity_core::errors::RegistryError;
use parity_core::SymbolPath;

/// Immutable, validated, ordered set of mapping entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingRegistry {
    entries: Vec<MappingEntry>,
}

impl MappingRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build from a static family table, joining bare group names to
    /// `namespace`.
    pub fn from_families(
        namespace: Option<&SymbolPath>,
        families: &[MappingFamily],
    ) -> Result<Self, RegistryError> {
        let mut builder = RegistryBuilder::new();
        if let Some(ns) = namespace {
            builder = builder.namespace(ns.clone());
        }
        families
            .iter()
            .fold(builder, |b, family| b.family(family))
            .build()
    }

    /// Called by the builder only, after validation.
    pub(crate) fn from_validated(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MappingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct groups in first-appearance order.
    pub fn groups(&self) -> Vec<&SymbolPath> {
        let mut seen: Vec<&SymbolPath> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&&entry.binding_group) {
                seen.push(&entry.binding_group);
            }
        }
        seen
    }

    /// Entries for one group, in registry order.
    pub fn entries_for<'a>(&'a self, group: &'a SymbolPath) -> impl Iterator<Item = &'a MappingEntry> + 'a {
        self.entries.iter().filter(move |e| &e.binding_group == group)
    }
}

impl<'a> IntoIterator for &'a MappingRegistry {
    type Item = &'a MappingEntry;
    type IntoIter = std::slice::Iter<'a, MappingEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
