//! Symbol naming errors.

use super::error_code::{ErrorCode, FailureKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    #[error("symbol path is empty")]
    EmptyPath,

    #[error("invalid segment '{segment}' in symbol path '{input}'")]
    InvalidSegment { input: String, segment: String },

    #[error("invalid member identifier '{0}'")]
    InvalidIdentifier(String),
}

impl ErrorCode for SymbolError {
    fn kind(&self) -> FailureKind {
        FailureKind::InvalidSymbol
    }
}
