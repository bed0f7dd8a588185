//! Workspace-wide constants.

/// Separator used by the normalized form of a [`SymbolPath`](crate::types::SymbolPath).
pub const PATH_SEPARATOR: &str = "::";

/// Separators accepted when parsing a symbol path. JNI descriptors use `/`,
/// JVM and GIR names use `.`.
pub const FOREIGN_PATH_SEPARATORS: &[char] = &['/', '.'];

/// Name of the configuration file looked up at a project root.
pub const CONFIG_FILE_NAME: &str = "parity.toml";

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable consulted before the configured log level.
pub const LOG_ENV_VAR: &str = "RUST_LOG";
