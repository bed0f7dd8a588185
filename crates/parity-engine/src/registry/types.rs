//! Registry row types.

use std::fmt;

use parity_core::errors::SymbolError;
use parity_core::{Identifier, SymbolPath};
use serde::{Deserialize, Serialize};

/// One assertion: `binding_group::member_name` must equal `expected_value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Authoritative native constant.
    pub expected_value: i64,
    pub binding_group: SymbolPath,
    pub member_name: Identifier,
}

impl MappingEntry {
    pub fn new(expected_value: i64, binding_group: SymbolPath, member_name: Identifier) -> Self {
        Self {
            expected_value,
            binding_group,
            member_name,
        }
    }

    /// Parse both names from strings.
    pub fn parse(expected_value: i64, group: &str, member: &str) -> Result<Self, SymbolError> {
        Ok(Self::new(
            expected_value,
            SymbolPath::parse(group)?,
            Identifier::new(member)?,
        ))
    }
}

impl fmt::Display for MappingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} = {}",
            self.binding_group, self.member_name, self.expected_value
        )
    }
}

/// A native enumeration mirrored member by member: one group, many
/// `(native value, member name)` pairs. Suited to `static` tables.
#[derive(Debug, Clone, Copy)]
pub struct MappingFamily {
    pub group: &'static str,
    pub members: &'static [(i64, &'static str)],
}

impl MappingFamily {
    pub const fn new(group: &'static str, members: &'static [(i64, &'static str)]) -> Self {
        Self { group, members }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
