//! The error a verification run ends with.

use crate::types::{Identifier, SymbolPath};

use super::error_code::{ErrorCode, FailureKind};
use super::resolve::ResolveError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParityError {
    /// The binding's value differs from the native constant.
    #[error("{group}:{member} is not equal to expected value ({expected})")]
    ValueMismatch {
        group: SymbolPath,
        member: Identifier,
        expected: i64,
        actual: i64,
    },

    /// The entry could not be resolved against the binding.
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl ParityError {
    pub fn group(&self) -> &SymbolPath {
        match self {
            Self::ValueMismatch { group, .. } => group,
            Self::Resolve(e) => e.group(),
        }
    }

    pub fn member(&self) -> Option<&Identifier> {
        match self {
            Self::ValueMismatch { member, .. } => Some(member),
            Self::Resolve(e) => e.member(),
        }
    }
}

impl ErrorCode for ParityError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::ValueMismatch { .. } => FailureKind::ValueMismatch,
            Self::Resolve(e) => e.kind(),
        }
    }
}
