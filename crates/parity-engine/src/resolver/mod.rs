//! Value resolver: reads the integer a binding currently associates with a
//! registry entry, through the introspection contract only.
//!
//! Three steps, each with its own failure:
//! 1. group by qualified path → `UnknownGroup`
//! 2. member by name → `UnknownMember`
//! 3. integer through the member's accessor → `NoAccessor` / `AccessorFailed`
//!
//! Values are read fresh on every call; nothing is cached between entries.

use parity_core::errors::ResolveError;
use parity_core::traits::{BindingMember, SymbolGroup};
use parity_core::types::collections::FxHashMap;
use parity_core::{BindingRuntime, Identifier, SymbolPath};
use serde::Serialize;

use crate::registry::MappingEntry;

/// Both sides of one mapping entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    /// The native constant, as registered.
    pub native: i64,
    /// The value read from the binding.
    pub binding: i64,
}

impl ResolvedValue {
    pub fn matches(&self) -> bool {
        self.native == self.binding
    }
}

/// Resolves `(group, member)` pairs against a binding runtime.
pub struct ValueResolver<'r> {
    runtime: &'r dyn BindingRuntime,
    /// Unqualified type name → qualified paths carrying it.
    by_name: FxHashMap<&'r str, Vec<&'r SymbolPath>>,
    allow_unqualified: bool,
}

impl<'r> ValueResolver<'r> {
    pub fn new(runtime: &'r dyn BindingRuntime) -> Self {
        let mut by_name: FxHashMap<&'r str, Vec<&'r SymbolPath>> = FxHashMap::default();
        for path in runtime.group_paths() {
            by_name.entry(path.name()).or_default().push(path);
        }
        Self {
            runtime,
            by_name,
            allow_unqualified: true,
        }
    }

    /// Whether a bare group name (`VipsAccess`) may resolve to a qualified
    /// group (`vips::enums::VipsAccess`) when exactly one group carries that
    /// name. On by default.
    pub fn allow_unqualified(mut self, allow: bool) -> Self {
        self.allow_unqualified = allow;
        self
    }

    pub fn runtime(&self) -> &'r dyn BindingRuntime {
        self.runtime
    }

    /// Native and binding values for `entry`.
    pub fn resolve_entry(&self, entry: &MappingEntry) -> Result<ResolvedValue, ResolveError> {
        let binding = self.resolve(&entry.binding_group, &entry.member_name)?;
        Ok(ResolvedValue {
            native: entry.expected_value,
            binding,
        })
    }

    /// The binding's integer for `group::member`.
    pub fn resolve(&self, group: &SymbolPath, member: &Identifier) -> Result<i64, ResolveError> {
        let symbol_group = self.locate_group(group)?;
        let binding_member = locate_member(symbol_group, group, member)?;
        extract_integer(binding_member, group, member)
    }

    /// Step 1: group lookup.
    pub fn locate_group(&self, group: &SymbolPath) -> Result<&'r dyn SymbolGroup, ResolveError> {
        if let Some(found) = self.runtime.group(group) {
            return Ok(found);
        }

        if self.allow_unqualified && !group.is_qualified() {
            match self.by_name.get(group.as_str()).map(Vec::as_slice) {
                Some([only]) => {
                    if let Some(found) = self.runtime.group(only) {
                        tracing::trace!(requested = %group, resolved = %only, "resolved unqualified group");
                        return Ok(found);
                    }
                }
                Some(candidates) if candidates.len() > 1 => {
                    tracing::warn!(
                        group = %group,
                        candidates = candidates.len(),
                        "ambiguous unqualified group name"
                    );
                }
                _ => {}
            }
        }

        Err(ResolveError::UnknownGroup {
            group: group.clone(),
        })
    }
}

/// Step 2: member lookup within a located group.
fn locate_member<'g>(
    symbol_group: &'g dyn SymbolGroup,
    group: &SymbolPath,
    member: &Identifier,
) -> Result<&'g dyn BindingMember, ResolveError> {
    symbol_group
        .member(member.as_str())
        .ok_or_else(|| ResolveError::UnknownMember {
            group: group.clone(),
            member: member.clone(),
        })
}

/// Step 3: integer extraction through the accessor contract.
fn extract_integer(
    binding_member: &dyn BindingMember,
    group: &SymbolPath,
    member: &Identifier,
) -> Result<i64, ResolveError> {
    let accessor = binding_member
        .accessor()
        .ok_or_else(|| ResolveError::NoAccessor {
            group: group.clone(),
            member: member.clone(),
        })?;

    accessor
        .as_integer()
        .map_err(|source| ResolveError::AccessorFailed {
            group: group.clone(),
            member: member.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use parity_core::errors::{AccessorError, ErrorCode, FailureKind};
    use parity_core::traits::{DynamicGroup, OpaqueGroup};
    use parity_core::SymbolTable;

    fn path(s: &str) -> SymbolPath {
        SymbolPath::parse(s).unwrap()
    }

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    fn runtime() -> SymbolTable {
        SymbolTable::new()
            .with_group(
                DynamicGroup::new(path("vips::enums::Access"))
                    .with_value("Random", 0)
                    .with_value("Sequential", 1)
                    .with_accessor("Broken", || Err(AccessorError::new("native symbol missing"))),
            )
            .with_group(OpaqueGroup::new(path("vips::enums::Handle"), ["Default"]))
            .with_group(DynamicGroup::new(path("a::Dup")).with_value("X", 1))
            .with_group(DynamicGroup::new(path("b::Dup")).with_value("X", 2))
    }

    #[test]
    fn test_resolves_qualified_member() {
        let rt = runtime();
        let resolver = ValueResolver::new(&rt);
        assert_eq!(resolver.resolve(&path("vips::enums::Access"), &id("Sequential")), Ok(1));
    }

    #[test]
    fn test_resolve_entry_pairs_native_and_binding() {
        let rt = runtime();
        let resolver = ValueResolver::new(&rt);
        let entry = MappingEntry::parse(0, "vips::enums::Access", "Sequential").unwrap();
        let resolved = resolver.resolve_entry(&entry).unwrap();
        assert_eq!(resolved, ResolvedValue { native: 0, binding: 1 });
        assert!(!resolved.matches());
    }

    #[test]
    fn test_unique_bare_name_resolves() {
        let rt = runtime();
        let resolver = ValueResolver::new(&rt);
        assert_eq!(resolver.resolve(&path("Access"), &id("Random")), Ok(0));
    }

    #[test]
    fn test_bare_name_rejected_when_disabled_or_ambiguous() {
        let rt = runtime();
        let strict = ValueResolver::new(&rt).allow_unqualified(false);
        let err = strict.resolve(&path("Access"), &id("Random")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownGroup);

        let lenient = ValueResolver::new(&rt);
        let err = lenient.resolve(&path("Dup"), &id("X")).unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownGroup);
    }

    #[test]
    fn test_unknown_group() {
        let rt = runtime();
        let err = ValueResolver::new(&rt)
            .resolve(&path("vips::enums::Nope"), &id("Random"))
            .unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownGroup {
                group: path("vips::enums::Nope")
            }
        );
    }

    #[test]
    fn test_unknown_member() {
        let rt = runtime();
        let err = ValueResolver::new(&rt)
            .resolve(&path("vips::enums::Access"), &id("Shuffled"))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::UnknownMember);
        assert_eq!(err.member(), Some(&id("Shuffled")));
    }

    #[test]
    fn test_no_accessor() {
        let rt = runtime();
        let err = ValueResolver::new(&rt)
            .resolve(&path("vips::enums::Handle"), &id("Default"))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::NoAccessor);
    }

    #[test]
    fn test_accessor_failed_carries_reason() {
        let rt = runtime();
        let err = ValueResolver::new(&rt)
            .resolve(&path("vips::enums::Access"), &id("Broken"))
            .unwrap_err();
        assert_eq!(err.kind(), FailureKind::AccessorFailed);
        assert!(err.to_string().contains("native symbol missing"));
    }
}
