//! `RegistryBuilder`: collects rows, validates them all at `build()`.

use std::path::Path;

use parity_core::errors::RegistryError;
use parity_core::types::collections::{fx_map_with_capacity, FxHashMap};
use parity_core::{Identifier, SymbolPath};

use super::loader;
use super::types::{MappingEntry, MappingFamily};
use super::MappingRegistry;

#[derive(Debug, Clone)]
enum Pending {
    Raw {
        expected: i64,
        group: String,
        member: String,
        namespace: Option<SymbolPath>,
    },
    Parsed(MappingEntry),
}

/// Accumulates mapping rows in order.
///
/// Rows added with string names are parsed at `build()` against the
/// namespace active when they were added. `build()` fails on the first
/// malformed name or duplicated `(group, member)` pair.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    namespace: Option<SymbolPath>,
    pending: Vec<Pending>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing registry's entries.
    pub fn from_registry(registry: &MappingRegistry) -> Self {
        Self {
            namespace: None,
            pending: registry.iter().cloned().map(Pending::Parsed).collect(),
        }
    }

    /// Namespace joined to bare group names added after this call.
    pub fn namespace(mut self, namespace: SymbolPath) -> Self {
        self.namespace = Some(namespace);
        self
    }

    pub(crate) fn clear_namespace(mut self) -> Self {
        self.namespace = None;
        self
    }

    pub fn current_namespace(&self) -> Option<&SymbolPath> {
        self.namespace.as_ref()
    }

    pub fn entry(mut self, expected: i64, group: impl Into<String>, member: impl Into<String>) -> Self {
        self.pending.push(Pending::Raw {
            expected,
            group: group.into(),
            member: member.into(),
            namespace: self.namespace.clone(),
        });
        self
    }

    pub fn family(self, family: &MappingFamily) -> Self {
        family
            .members
            .iter()
            .fold(self, |b, (expected, member)| b.entry(*expected, family.group, *member))
    }

    pub fn push(mut self, entry: MappingEntry) -> Self {
        self.pending.push(Pending::Parsed(entry));
        self
    }

    pub fn extend<I: IntoIterator<Item = MappingEntry>>(mut self, entries: I) -> Self {
        self.pending.extend(entries.into_iter().map(Pending::Parsed));
        self
    }

    /// Append the mappings of a TOML document. See [`loader`].
    pub fn load_toml(self, toml_str: &str) -> Result<Self, RegistryError> {
        loader::load_toml(self, toml_str)
    }

    /// Append the mappings of a TOML file.
    pub fn load_file(self, path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading mapping file");
        self.load_toml(&contents)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Validate every row and freeze the registry.
    pub fn build(self) -> Result<MappingRegistry, RegistryError> {
        let mut entries = Vec::with_capacity(self.pending.len());
        let mut seen: FxHashMap<(SymbolPath, Identifier), usize> =
            fx_map_with_capacity(self.pending.len());
        // First index per (unqualified group name, member), split by spelling.
        let mut bare: FxHashMap<(String, Identifier), usize> = FxHashMap::default();
        let mut qualified: FxHashMap<(String, Identifier), usize> = FxHashMap::default();

        for (index, pending) in self.pending.into_iter().enumerate() {
            let entry = match pending {
                Pending::Parsed(entry) => entry,
                Pending::Raw {
                    expected,
                    group,
                    member,
                    namespace,
                } => {
                    let group = SymbolPath::qualify(namespace.as_ref(), &group)
                        .map_err(|source| RegistryError::InvalidSymbol { index, source })?;
                    let member = Identifier::new(&member)
                        .map_err(|source| RegistryError::InvalidSymbol { index, source })?;
                    MappingEntry::new(expected, group, member)
                }
            };

            let key = (entry.binding_group.clone(), entry.member_name.clone());
            if let Some(&first) = seen.get(&key) {
                return Err(RegistryError::DuplicateMapping {
                    group: key.0,
                    member: key.1,
                    first,
                    second: index,
                });
            }

            // A bare group resolves to the qualified group of the same name,
            // so the two spellings name one binding member.
            let by_name = (entry.binding_group.name().to_string(), entry.member_name.clone());
            let (same_kind, other_kind) = if entry.binding_group.is_qualified() {
                (&mut qualified, &bare)
            } else {
                (&mut bare, &qualified)
            };
            if let Some(&first) = other_kind.get(&by_name) {
                return Err(RegistryError::DuplicateMapping {
                    group: key.0,
                    member: key.1,
                    first,
                    second: index,
                });
            }
            same_kind.entry(by_name).or_insert(index);

            seen.insert(key, index);
            entries.push(entry);
        }

        tracing::debug!(entries = entries.len(), "mapping registry built");
        Ok(MappingRegistry::from_validated(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_core::errors::{ErrorCode, FailureKind};

    static ACCESS: MappingFamily = MappingFamily::new(
        "VipsAccess",
        &[(0, "Random"), (1, "Sequential"), (2, "SequentialUnbuffered")],
    );

    #[test]
    fn test_build_preserves_order_and_namespace() {
        let ns = SymbolPath::parse("vips::enums").unwrap();
        let registry = RegistryBuilder::new()
            .namespace(ns)
            .family(&ACCESS)
            .entry(1, "VipsAlign", "Centre")
            .build()
            .unwrap();

        assert_eq!(registry.len(), 4);
        let names: Vec<String> = registry.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "vips::enums::VipsAccess:Random = 0",
                "vips::enums::VipsAccess:Sequential = 1",
                "vips::enums::VipsAccess:SequentialUnbuffered = 2",
                "vips::enums::VipsAlign:Centre = 1",
            ]
        );
        assert_eq!(registry.groups().len(), 2);
    }

    #[test]
    fn test_namespace_applies_only_to_later_rows() {
        let registry = RegistryBuilder::new()
            .entry(0, "Access", "Random")
            .namespace(SymbolPath::parse("vips").unwrap())
            .entry(0, "Align", "Low")
            .build()
            .unwrap();
        assert_eq!(registry.entries()[0].binding_group.as_str(), "Access");
        assert_eq!(registry.entries()[1].binding_group.as_str(), "vips::Align");
    }

    #[test]
    fn test_duplicate_mapping_is_rejected_with_both_indices() {
        let err = RegistryBuilder::new()
            .entry(0, "Access", "Random")
            .entry(1, "Access", "Sequential")
            .entry(0, "Access", "Random")
            .build()
            .unwrap_err();
        match &err {
            RegistryError::DuplicateMapping { first, second, .. } => {
                assert_eq!((*first, *second), (0, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(err.kind(), FailureKind::DuplicateMapping);
    }

    #[test]
    fn test_bare_and_qualified_spellings_of_one_member_are_duplicates() {
        let err = RegistryBuilder::new()
            .entry(0, "VipsAccess", "Random")
            .entry(1, "vips::enums::VipsAccess", "Random")
            .build()
            .unwrap_err();
        match &err {
            RegistryError::DuplicateMapping { group, member, first, second } => {
                assert_eq!(group.as_str(), "vips::enums::VipsAccess");
                assert_eq!(member.as_str(), "Random");
                assert_eq!((*first, *second), (0, 1));
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = RegistryBuilder::new()
            .entry(1, "vips::enums::VipsAccess", "Random")
            .entry(0, "VipsAccess", "Random")
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::DuplicateMapping);
    }

    #[test]
    fn test_distinct_qualified_groups_sharing_a_name_are_allowed() {
        let registry = RegistryBuilder::new()
            .entry(0, "a::Dup", "X")
            .entry(1, "b::Dup", "X")
            .entry(0, "Dup", "Y")
            .build()
            .unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_malformed_names_are_configuration_defects() {
        let err = RegistryBuilder::new()
            .entry(0, "Access", "Random")
            .entry(1, "Access", "not an identifier")
            .build()
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidSymbol { index: 1, .. }));
        assert_eq!(err.kind(), FailureKind::InvalidSymbol);
    }

    #[test]
    fn test_from_registry_extends_existing() {
        let base = MappingRegistry::from_families(None, &[ACCESS]).unwrap();
        let extended = RegistryBuilder::from_registry(&base)
            .entry(0, "VipsAlign", "Low")
            .build()
            .unwrap();
        assert_eq!(extended.len(), 4);
        assert_eq!(extended.entries()[..3], base.entries()[..]);
    }
}
