//! `LayeredRuntime`: overrides on top of a base runtime.
//!
//! Used to replay a drifted binding (one group swapped for a modified copy)
//! without rebuilding the real symbol table.

use crate::types::SymbolPath;

use super::binding::{BindingRuntime, SymbolGroup};
use super::symbol_table::SymbolTable;

pub struct LayeredRuntime<'a> {
    overrides: SymbolTable,
    base: &'a dyn BindingRuntime,
}

impl<'a> LayeredRuntime<'a> {
    pub fn new(base: &'a dyn BindingRuntime) -> Self {
        Self {
            overrides: SymbolTable::new(),
            base,
        }
    }

    /// Shadow the base group at the same path (or add a new one).
    pub fn with_override(mut self, group: impl SymbolGroup + 'static) -> Self {
        self.overrides.insert_group(Box::new(group));
        self
    }
}

impl BindingRuntime for LayeredRuntime<'_> {
    fn group(&self, path: &SymbolPath) -> Option<&dyn SymbolGroup> {
        self.overrides.group(path).or_else(|| self.base.group(path))
    }

    fn group_paths(&self) -> Vec<&SymbolPath> {
        let mut paths = self.base.group_paths();
        for p in self.overrides.group_paths() {
            if !paths.contains(&p) {
                paths.push(p);
            }
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DynamicGroup;

    #[test]
    fn test_override_shadows_base_group() {
        let access = SymbolPath::parse("Access").unwrap();
        let align = SymbolPath::parse("Align").unwrap();
        let base = SymbolTable::new()
            .with_group(DynamicGroup::new(access.clone()).with_value("Random", 0))
            .with_group(DynamicGroup::new(align.clone()).with_value("Low", 0));

        let layered = LayeredRuntime::new(&base)
            .with_override(DynamicGroup::new(access.clone()).with_value("Random", 1));

        let read = |p: &SymbolPath, m: &str| {
            layered
                .group(p)
                .and_then(|g| g.member(m))
                .and_then(|m| m.accessor())
                .map(|a| a.as_integer())
        };
        assert_eq!(read(&access, "Random"), Some(Ok(1)));
        assert_eq!(read(&align, "Low"), Some(Ok(0)));
        assert_eq!(layered.group_paths().len(), 2);
    }
}
