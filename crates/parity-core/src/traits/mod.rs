//! The binding introspection contract and its type-erased symbol table.
//!
//! The verifier never names a binding type. Everything it needs goes through
//! three lookups: group by path, member by name, integer by accessor.

pub mod binding;
pub mod groups;
pub mod symbol_table;
pub mod layered;

pub use binding::{BindingEnum, BindingMember, BindingRuntime, IntegerAccessor, SymbolGroup};
pub use groups::{DynamicGroup, EnumGroup, OpaqueGroup};
pub use layered::LayeredRuntime;
pub use symbol_table::SymbolTable;
