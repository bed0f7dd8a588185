//! Failure kinds and their stable error codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What kind of defect a failure represents.
///
/// `ValueMismatch` is numeric drift between binding and native library.
/// Every other kind is a structural defect in the registry, the binding, or
/// the inputs feeding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    ValueMismatch,
    UnknownGroup,
    UnknownMember,
    NoAccessor,
    AccessorFailed,
    InvalidSymbol,
    DuplicateMapping,
    Config,
    Gir,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValueMismatch => "value-mismatch",
            Self::UnknownGroup => "unknown-group",
            Self::UnknownMember => "unknown-member",
            Self::NoAccessor => "no-accessor",
            Self::AccessorFailed => "accessor-failed",
            Self::InvalidSymbol => "invalid-symbol",
            Self::DuplicateMapping => "duplicate-mapping",
            Self::Config => "config",
            Self::Gir => "gir",
        }
    }

    /// True for numeric drift, false for structural defects.
    pub fn is_drift(&self) -> bool {
        matches!(self, Self::ValueMismatch)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable machine-readable code for an error, e.g. `PARITY_VALUE_MISMATCH`.
pub trait ErrorCode {
    fn kind(&self) -> FailureKind;

    fn code(&self) -> &'static str {
        match self.kind() {
            FailureKind::ValueMismatch => "PARITY_VALUE_MISMATCH",
            FailureKind::UnknownGroup => "PARITY_UNKNOWN_GROUP",
            FailureKind::UnknownMember => "PARITY_UNKNOWN_MEMBER",
            FailureKind::NoAccessor => "PARITY_NO_ACCESSOR",
            FailureKind::AccessorFailed => "PARITY_ACCESSOR_FAILED",
            FailureKind::InvalidSymbol => "PARITY_INVALID_SYMBOL",
            FailureKind::DuplicateMapping => "PARITY_DUPLICATE_MAPPING",
            FailureKind::Config => "PARITY_CONFIG_ERROR",
            FailureKind::Gir => "PARITY_GIR_ERROR",
        }
    }
}
