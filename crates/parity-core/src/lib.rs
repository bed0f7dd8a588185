//! # parity-core
//!
//! Foundation crate for the binding-parity verifier.
//! Provides the symbol types, the binding introspection contract, errors,
//! configuration, events, tracing setup, and constants shared by every
//! other crate in the workspace.
//!
//! Architecture:
//! - `types`: `SymbolPath`, `Identifier`, collection aliases
//! - `traits`: binding contract (`IntegerAccessor`, `SymbolGroup`,
//!   `BindingRuntime`, `BindingEnum`) and the `SymbolTable` that erases it
//! - `errors`: one `thiserror` enum per concern, tagged by `FailureKind`
//! - `config`: TOML-backed `ParityConfig`
//! - `events`: observer hooks fired by the checker
//! - `tracing`: subscriber initialization

pub mod constants;
pub mod types;
pub mod traits;
pub mod errors;
pub mod config;
pub mod events;
pub mod tracing;

pub use config::ParityConfig;
pub use errors::{FailureKind, ParityError, ResolveError};
pub use traits::{BindingEnum, BindingRuntime, SymbolTable};
pub use types::{Identifier, SymbolPath};
