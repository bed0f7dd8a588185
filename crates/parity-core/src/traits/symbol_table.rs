//! `SymbolTable`: name-to-group registry built once at startup.

use crate::errors::SymbolError;
use crate::types::collections::FxHashMap;
use crate::types::SymbolPath;

use super::binding::{BindingEnum, BindingRuntime, SymbolGroup};
use super::groups::EnumGroup;

/// Maps qualified group paths to type-erased group handles.
///
/// Populated once, then only read. Registering a path twice replaces the
/// earlier group and keeps its original position in `group_paths()`.
#[derive(Default)]
pub struct SymbolTable {
    groups: FxHashMap<SymbolPath, Box<dyn SymbolGroup>>,
    order: Vec<SymbolPath>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a group, returning the one it replaced.
    pub fn insert_group(&mut self, group: Box<dyn SymbolGroup>) -> Option<Box<dyn SymbolGroup>> {
        let path = group.path().clone();
        let previous = self.groups.insert(path.clone(), group);
        match previous {
            Some(_) => {
                tracing::warn!(group = %path, "symbol group registered twice, replacing");
            }
            None => self.order.push(path),
        }
        previous
    }

    /// Builder form of [`insert_group`](Self::insert_group).
    pub fn with_group(mut self, group: impl SymbolGroup + 'static) -> Self {
        self.insert_group(Box::new(group));
        self
    }

    /// Register a typed binding enum as `namespace::TYPE_NAME`.
    pub fn register_enum<E: BindingEnum>(
        &mut self,
        namespace: Option<&SymbolPath>,
    ) -> Result<&mut Self, SymbolError> {
        let group = EnumGroup::<E>::in_namespace(namespace)?;
        self.insert_group(Box::new(group));
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, path: &SymbolPath) -> bool {
        self.groups.contains_key(path)
    }

    /// Total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.values().map(|g| g.len()).sum()
    }
}

impl BindingRuntime for SymbolTable {
    fn group(&self, path: &SymbolPath) -> Option<&dyn SymbolGroup> {
        self.groups.get(path).map(|g| g.as_ref())
    }

    fn group_paths(&self) -> Vec<&SymbolPath> {
        self.order.iter().collect()
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("groups", &self.order)
            .finish()
    }
}
