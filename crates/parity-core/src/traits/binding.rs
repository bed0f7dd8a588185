//! Traits a binding runtime implements to be verifiable.

use crate::errors::AccessorError;
use crate::types::SymbolPath;

/// Zero-argument integer accessor: "get my numeric value".
pub trait IntegerAccessor {
    fn as_integer(&self) -> Result<i64, AccessorError>;
}

/// One named member of a group.
pub trait BindingMember {
    fn name(&self) -> &str;

    /// The member's integer accessor. `None` when the member type does not
    /// implement the accessor contract at all.
    fn accessor(&self) -> Option<&dyn IntegerAccessor>;
}

/// A binding-side enumeration type, located by its qualified path.
pub trait SymbolGroup: Send + Sync {
    fn path(&self) -> &SymbolPath;

    /// Member names in declaration order.
    fn member_names(&self) -> Vec<&str>;

    fn member(&self, name: &str) -> Option<&dyn BindingMember>;

    fn len(&self) -> usize {
        self.member_names().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The binding's symbol space: named lookup of groups.
pub trait BindingRuntime {
    fn group(&self, path: &SymbolPath) -> Option<&dyn SymbolGroup>;

    /// Paths of every group, in registration order.
    fn group_paths(&self) -> Vec<&SymbolPath>;
}

/// A statically typed binding enumeration.
///
/// Implemented by the binding's own enum types; [`EnumGroup`](super::EnumGroup)
/// erases the type so the enum can sit in a [`SymbolTable`](super::SymbolTable).
pub trait BindingEnum: Copy + Send + Sync + 'static {
    /// Unqualified type name, e.g. `VipsAccess`.
    const TYPE_NAME: &'static str;

    /// Every member, in declaration order.
    fn variants() -> &'static [Self];

    /// Member name as the binding spells it, e.g. `SequentialUnbuffered`.
    fn name(self) -> &'static str;

    /// The integer passed across the FFI boundary.
    fn value(self) -> i32;

    /// Reverse lookup by integer value.
    fn from_value(value: i32) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.value() == value)
    }

    /// Lookup by member name.
    fn from_name(name: &str) -> Option<Self> {
        Self::variants().iter().copied().find(|v| v.name() == name)
    }
}
