//! Configuration loading errors.

use std::path::PathBuf;

use super::error_code::{ErrorCode, FailureKind};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: &'static str, message: String },
}

impl ErrorCode for ConfigError {
    fn kind(&self) -> FailureKind {
        FailureKind::Config
    }
}
