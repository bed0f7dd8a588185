//! TOML-backed configuration.

pub mod parity_config;

pub use parity_config::{
    FailurePolicy, LoggingConfig, ParityConfig, RegistryConfig, VerificationConfig,
};
