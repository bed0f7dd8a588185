//! Outcome types for a verification run.

use parity_core::config::FailurePolicy;
use parity_core::errors::{ErrorCode, FailureKind};
use parity_core::ParityError;
use serde::Serialize;

use crate::error::VerificationFailed;
use crate::registry::MappingEntry;

/// Returned when every entry passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerificationSummary {
    /// Entries checked (all of them, on success).
    pub checked: usize,
    /// Distinct binding groups touched.
    pub groups: usize,
}

/// One failing entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryFailure {
    /// Position in the registry.
    pub index: usize,
    pub entry: MappingEntry,
    pub kind: FailureKind,
    pub code: &'static str,
    pub message: String,
    #[serde(skip)]
    pub error: ParityError,
}

impl EntryFailure {
    pub fn new(index: usize, entry: &MappingEntry, error: ParityError) -> Self {
        Self {
            index,
            entry: entry.clone(),
            kind: error.kind(),
            code: error.code(),
            message: error.to_string(),
            error,
        }
    }
}

/// Full record of a run under either failure policy.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub policy: FailurePolicy,
    pub total_entries: usize,
    pub checked: usize,
    pub passed: usize,
    pub groups: usize,
    pub failures: Vec<EntryFailure>,
    /// True when the run stopped before the end of the registry.
    pub truncated: bool,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn first_failure(&self) -> Option<&EntryFailure> {
        self.failures.first()
    }

    /// Failures of numeric drift only.
    pub fn drift(&self) -> impl Iterator<Item = &EntryFailure> {
        self.failures.iter().filter(|f| f.kind.is_drift())
    }

    pub fn into_result(self) -> Result<VerificationSummary, VerificationFailed> {
        if self.failures.is_empty() {
            Ok(VerificationSummary {
                checked: self.checked,
                groups: self.groups,
            })
        } else {
            Err(VerificationFailed {
                checked: self.checked,
                failures: self.failures,
            })
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
