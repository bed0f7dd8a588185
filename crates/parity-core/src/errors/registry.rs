//! Mapping registry construction errors.
//!
//! These are raised before any resolution happens: a registry that fails to
//! build never reaches the checker.

use std::path::PathBuf;

use crate::types::{Identifier, SymbolPath};

use super::error_code::{ErrorCode, FailureKind};
use super::symbol::SymbolError;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("mapping {group}:{member} registered twice (entries #{first} and #{second})")]
    DuplicateMapping {
        group: SymbolPath,
        member: Identifier,
        first: usize,
        second: usize,
    },

    #[error("invalid symbol in mapping #{index}: {source}")]
    InvalidSymbol {
        index: usize,
        #[source]
        source: SymbolError,
    },

    #[error("invalid registry namespace '{namespace}': {source}")]
    InvalidNamespace {
        namespace: String,
        #[source]
        source: SymbolError,
    },

    #[error("I/O error reading mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("mapping file TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ErrorCode for RegistryError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::DuplicateMapping { .. } => FailureKind::DuplicateMapping,
            Self::InvalidSymbol { .. } | Self::InvalidNamespace { .. } => FailureKind::InvalidSymbol,
            Self::Io { .. } | Self::Toml(_) => FailureKind::Config,
        }
    }
}
