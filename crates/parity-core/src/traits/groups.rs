//! Concrete `SymbolGroup` implementations.
//!
//! - [`EnumGroup`] wraps a typed [`BindingEnum`].
//! - [`DynamicGroup`] holds members whose values are read through closures,
//!   for bindings whose values are only known at runtime.
//! - [`OpaqueGroup`] exposes names only; its members have no accessor.

use std::fmt;
use std::marker::PhantomData;

use crate::errors::{AccessorError, SymbolError};
use crate::types::collections::{fx_map_with_capacity, FxHashMap};
use crate::types::SymbolPath;

use super::binding::{BindingEnum, BindingMember, IntegerAccessor, SymbolGroup};

/// Type-erased view of a `BindingEnum`.
pub struct EnumGroup<E: BindingEnum> {
    path: SymbolPath,
    members: Vec<EnumMember<E>>,
    index: FxHashMap<&'static str, usize>,
    _marker: PhantomData<E>,
}

struct EnumMember<E: BindingEnum>(E);

impl<E: BindingEnum> BindingMember for EnumMember<E> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn accessor(&self) -> Option<&dyn IntegerAccessor> {
        Some(self)
    }
}

impl<E: BindingEnum> IntegerAccessor for EnumMember<E> {
    fn as_integer(&self) -> Result<i64, AccessorError> {
        Ok(i64::from(self.0.value()))
    }
}

impl<E: BindingEnum> EnumGroup<E> {
    /// Register `E` under an explicit path.
    pub fn new(path: SymbolPath) -> Self {
        let variants = E::variants();
        let mut index = fx_map_with_capacity(variants.len());
        let mut members = Vec::with_capacity(variants.len());
        for (i, v) in variants.iter().copied().enumerate() {
            index.insert(v.name(), i);
            members.push(EnumMember(v));
        }
        Self {
            path,
            members,
            index,
            _marker: PhantomData,
        }
    }

    /// Register `E` as `namespace::TYPE_NAME`.
    pub fn in_namespace(namespace: Option<&SymbolPath>) -> Result<Self, SymbolError> {
        Ok(Self::new(SymbolPath::qualify(namespace, E::TYPE_NAME)?))
    }
}

impl<E: BindingEnum> SymbolGroup for EnumGroup<E> {
    fn path(&self) -> &SymbolPath {
        &self.path
    }

    fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.0.name()).collect()
    }

    fn member(&self, name: &str) -> Option<&dyn BindingMember> {
        let i = *self.index.get(name)?;
        Some(&self.members[i] as &dyn BindingMember)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

type ReadFn = Box<dyn Fn() -> Result<i64, AccessorError> + Send + Sync>;

/// Group whose member values come from closures.
pub struct DynamicGroup {
    path: SymbolPath,
    members: Vec<DynamicMember>,
}

struct DynamicMember {
    name: String,
    read: ReadFn,
}

impl BindingMember for DynamicMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn accessor(&self) -> Option<&dyn IntegerAccessor> {
        Some(self)
    }
}

impl IntegerAccessor for DynamicMember {
    fn as_integer(&self) -> Result<i64, AccessorError> {
        (self.read)()
    }
}

impl DynamicGroup {
    pub fn new(path: SymbolPath) -> Self {
        Self {
            path,
            members: Vec::new(),
        }
    }

    /// Add a member with a fixed value.
    pub fn with_value(self, name: impl Into<String>, value: i64) -> Self {
        self.with_accessor(name, move || Ok(value))
    }

    /// Add a member read through `read` on every lookup.
    pub fn with_accessor<F>(mut self, name: impl Into<String>, read: F) -> Self
    where
        F: Fn() -> Result<i64, AccessorError> + Send + Sync + 'static,
    {
        let name = name.into();
        self.members.retain(|m| m.name != name);
        self.members.push(DynamicMember {
            name,
            read: Box::new(read),
        });
        self
    }

    /// Copy every member of `E` as a fixed value, letting callers then
    /// override single members.
    pub fn from_enum<E: BindingEnum>(path: SymbolPath) -> Self {
        E::variants()
            .iter()
            .fold(Self::new(path), |group, v| group.with_value(v.name(), i64::from(v.value())))
    }
}

impl SymbolGroup for DynamicGroup {
    fn path(&self) -> &SymbolPath {
        &self.path
    }

    fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    fn member(&self, name: &str) -> Option<&dyn BindingMember> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .map(|m| m as &dyn BindingMember)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

impl fmt::Debug for DynamicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicGroup")
            .field("path", &self.path)
            .field("members", &self.member_names())
            .finish()
    }
}

/// Group that names members but offers no integer accessor.
#[derive(Debug, Clone)]
pub struct OpaqueGroup {
    path: SymbolPath,
    members: Vec<OpaqueMember>,
}

#[derive(Debug, Clone)]
struct OpaqueMember {
    name: String,
}

impl BindingMember for OpaqueMember {
    fn name(&self) -> &str {
        &self.name
    }

    fn accessor(&self) -> Option<&dyn IntegerAccessor> {
        None
    }
}

impl OpaqueGroup {
    pub fn new<I, S>(path: SymbolPath, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path,
            members: names
                .into_iter()
                .map(|n| OpaqueMember { name: n.into() })
                .collect(),
        }
    }
}

impl SymbolGroup for OpaqueGroup {
    fn path(&self) -> &SymbolPath {
        &self.path
    }

    fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.name.as_str()).collect()
    }

    fn member(&self, name: &str) -> Option<&dyn BindingMember> {
        self.members
            .iter()
            .find(|m| m.name == name)
            .map(|m| m as &dyn BindingMember)
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Access {
        Random,
        Sequential,
        SequentialUnbuffered,
    }

    impl BindingEnum for Access {
        const TYPE_NAME: &'static str = "Access";

        fn variants() -> &'static [Self] {
            &[Self::Random, Self::Sequential, Self::SequentialUnbuffered]
        }

        fn name(self) -> &'static str {
            match self {
                Self::Random => "Random",
                Self::Sequential => "Sequential",
                Self::SequentialUnbuffered => "SequentialUnbuffered",
            }
        }

        fn value(self) -> i32 {
            self as i32
        }
    }

    fn read(group: &dyn SymbolGroup, name: &str) -> Option<Result<i64, AccessorError>> {
        group.member(name)?.accessor().map(|a| a.as_integer())
    }

    #[test]
    fn test_enum_group_exposes_members_in_order() {
        let group = EnumGroup::<Access>::in_namespace(None).unwrap();
        assert_eq!(group.path().as_str(), "Access");
        assert_eq!(
            group.member_names(),
            vec!["Random", "Sequential", "SequentialUnbuffered"]
        );
        assert_eq!(group.len(), 3);
        assert_eq!(read(&group, "SequentialUnbuffered"), Some(Ok(2)));
        assert!(group.member("Missing").is_none());
    }

    #[test]
    fn test_binding_enum_reverse_lookups() {
        assert_eq!(Access::from_value(1), Some(Access::Sequential));
        assert_eq!(Access::from_value(7), None);
        assert_eq!(Access::from_name("Random"), Some(Access::Random));
    }

    #[test]
    fn test_dynamic_group_override_replaces_member() {
        let path = SymbolPath::parse("Access").unwrap();
        let group = DynamicGroup::from_enum::<Access>(path).with_value("Random", 1);
        assert_eq!(group.len(), 3);
        assert_eq!(read(&group, "Random"), Some(Ok(1)));
        assert_eq!(read(&group, "Sequential"), Some(Ok(1)));
    }

    #[test]
    fn test_dynamic_group_accessor_can_fail() {
        let path = SymbolPath::parse("Access").unwrap();
        let group = DynamicGroup::new(path)
            .with_accessor("Random", || Err(AccessorError::new("library not loaded")));
        let result = read(&group, "Random").unwrap();
        assert_eq!(result, Err(AccessorError::new("library not loaded")));
    }

    #[test]
    fn test_opaque_group_has_no_accessor() {
        let path = SymbolPath::parse("Access").unwrap();
        let group = OpaqueGroup::new(path, ["Random"]);
        let member = group.member("Random").unwrap();
        assert_eq!(member.name(), "Random");
        assert!(member.accessor().is_none());
    }
}
