//! Resolution errors: the binding does not have what the registry names,
//! or breaks the integer accessor contract.

use crate::types::{Identifier, SymbolPath};

use super::error_code::{ErrorCode, FailureKind};

/// Error raised by a binding-side integer accessor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct AccessorError(pub String);

impl AccessorError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("binding group {group} not found")]
    UnknownGroup { group: SymbolPath },

    #[error("member {group}:{member} not found")]
    UnknownMember { group: SymbolPath, member: Identifier },

    #[error("{group} does not expose an integer value accessor (requested by {group}:{member})")]
    NoAccessor { group: SymbolPath, member: Identifier },

    #[error("integer accessor of {group}:{member} failed: {source}")]
    AccessorFailed {
        group: SymbolPath,
        member: Identifier,
        #[source]
        source: AccessorError,
    },
}

impl ResolveError {
    pub fn group(&self) -> &SymbolPath {
        match self {
            Self::UnknownGroup { group }
            | Self::UnknownMember { group, .. }
            | Self::NoAccessor { group, .. }
            | Self::AccessorFailed { group, .. } => group,
        }
    }

    /// Member the lookup was for; `None` when the group itself is missing.
    pub fn member(&self) -> Option<&Identifier> {
        match self {
            Self::UnknownGroup { .. } => None,
            Self::UnknownMember { member, .. }
            | Self::NoAccessor { member, .. }
            | Self::AccessorFailed { member, .. } => Some(member),
        }
    }
}

impl ErrorCode for ResolveError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::UnknownGroup { .. } => FailureKind::UnknownGroup,
            Self::UnknownMember { .. } => FailureKind::UnknownMember,
            Self::NoAccessor { .. } => FailureKind::NoAccessor,
            Self::AccessorFailed { .. } => FailureKind::AccessorFailed,
        }
    }
}
