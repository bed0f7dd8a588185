//! Errors surfaced by the top-level entry points.

use parity_core::errors::{ConfigError, ErrorCode, FailureKind, GirError, RegistryError, SymbolError};
use parity_core::ParityError;

use crate::checker::EntryFailure;

/// A run with one or more failing entries.
#[derive(Debug, thiserror::Error)]
#[error("{}", render_failures(.failures, .checked))]
pub struct VerificationFailed {
    pub checked: usize,
    pub failures: Vec<EntryFailure>,
}

impl VerificationFailed {
    /// The failure first in registry order.
    pub fn first(&self) -> Option<&ParityError> {
        self.failures.first().map(|f| &f.error)
    }

    pub fn kinds(&self) -> Vec<FailureKind> {
        self.failures.iter().map(|f| f.kind).collect()
    }
}

fn render_failures(failures: &[EntryFailure], checked: &usize) -> String {
    match failures {
        [only] => only.error.to_string(),
        _ => {
            let mut out = format!(
                "{} of {checked} checked mappings failed:",
                failures.len()
            );
            for f in failures {
                out.push_str(&format!("\n  [{}] #{}: {}", f.code, f.index, f.error));
            }
            out
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Gir(#[from] GirError),

    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error(transparent)]
    Failed(#[from] VerificationFailed),
}

impl VerifyError {
    /// Kind of the (first) failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Config(e) => e.kind(),
            Self::Registry(e) => e.kind(),
            Self::Gir(e) => e.kind(),
            Self::Symbol(e) => e.kind(),
            Self::Failed(f) => f.failures.first().map(|f| f.kind).unwrap_or(FailureKind::ValueMismatch),
        }
    }
}
