//! Error types for every stage of a verification run.
//!
//! Each concern owns one `thiserror` enum. Everything that can end a run
//! reports a [`FailureKind`] so callers (and tests) can branch on what went
//! wrong instead of matching message text.

pub mod error_code;
pub mod symbol;
pub mod resolve;
pub mod parity;
pub mod config;
pub mod registry;
pub mod gir;

pub use error_code::{ErrorCode, FailureKind};
pub use symbol::SymbolError;
pub use resolve::{AccessorError, ResolveError};
pub use parity::ParityError;
pub use config::ConfigError;
pub use registry::RegistryError;
pub use gir::GirError;
