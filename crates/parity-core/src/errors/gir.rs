//! GObject-Introspection parsing errors.

use std::path::PathBuf;

use super::error_code::{ErrorCode, FailureKind};
use super::registry::RegistryError;

#[derive(Debug, thiserror::Error)]
pub enum GirError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed GIR XML at byte {position}: {message}")]
    Xml { position: u64, message: String },

    #[error("<{element}> is missing attribute '{attribute}'")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },

    #[error("member {member} of {enumeration} has non-integer value '{value}'")]
    InvalidValue {
        enumeration: String,
        member: String,
        value: String,
    },

    #[error("GIR produced an invalid registry: {0}")]
    Registry(#[from] RegistryError),
}

impl ErrorCode for GirError {
    fn kind(&self) -> FailureKind {
        match self {
            Self::Registry(e) => e.kind(),
            _ => FailureKind::Gir,
        }
    }
}
