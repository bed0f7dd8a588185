//! `ParityConfig`: verification policy, extra registry inputs, logging.
//!
//! ```toml
//! [verification]
//! failure_policy = "collect-all"
//! max_failures = 50
//!
//! [registry]
//! namespace = "vips::enums"
//! mapping_files = ["mappings/extra.toml"]
//!
//! [logging]
//! level = "debug"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_LEVEL};
use crate::errors::ConfigError;
use crate::types::SymbolPath;

/// What the checker does after the first failing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first failure.
    #[default]
    FailFast,
    /// Check every entry and report all failures together.
    CollectAll,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FailFast => "fail-fast",
            Self::CollectAll => "collect-all",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub failure_policy: FailurePolicy,
    /// Stop collecting after this many failures. Only read under `collect-all`.
    pub max_failures: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Namespace joined to bare group names in mapping files.
    pub namespace: Option<String>,
    /// Extra TOML mapping files, relative to the config file's directory.
    pub mapping_files: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit ANSI colours.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            ansi: false,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParityConfig {
    pub verification: VerificationConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
    /// Directory relative paths are resolved against. Not serialized.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl ParityConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a project.
    ///
    /// `override_path` wins when given. Otherwise `parity.toml` at `root` is
    /// used if it exists, and defaults apply if it does not.
    pub fn load(root: &Path, override_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => {
                let candidate = root.join(CONFIG_FILE_NAME);
                if !candidate.is_file() {
                    tracing::debug!(root = %root.display(), "no {CONFIG_FILE_NAME}, using defaults");
                    return Ok(Self {
                        base_dir: Some(root.to_path_buf()),
                        ..Self::default()
                    });
                }
                candidate
            }
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let mut config = Self::from_toml(&contents)?;
        config.base_dir = Some(
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
        );
        tracing::debug!(path = %path.display(), policy = %config.verification.failure_policy, "loaded config");
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification.max_failures == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "verification.max_failures",
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(ns) = &self.registry.namespace {
            SymbolPath::parse(ns).map_err(|e| ConfigError::InvalidValue {
                field: "registry.namespace",
                message: e.to_string(),
            })?;
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The registry namespace as a parsed path.
    pub fn namespace(&self) -> Option<SymbolPath> {
        self.registry
            .namespace
            .as_deref()
            .and_then(|ns| SymbolPath::parse(ns).ok())
    }

    /// Mapping files resolved against `base_dir`.
    pub fn mapping_file_paths(&self) -> Vec<PathBuf> {
        self.registry
            .mapping_files
            .iter()
            .map(|p| match &self.base_dir {
                Some(base) if p.is_relative() => base.join(p),
                _ => p.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ParityConfig::from_toml("").unwrap();
        assert_eq!(config.verification.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.verification.max_failures, None);
        assert_eq!(config.logging.level, "info");
        assert!(config.registry.mapping_files.is_empty());
    }

    #[test]
    fn test_full_toml() {
        let config = ParityConfig::from_toml(
            r#"
            [verification]
            failure_policy = "collect-all"
            max_failures = 10

            [registry]
            namespace = "vips/enums"
            mapping_files = ["extra.toml"]

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.verification.failure_policy, FailurePolicy::CollectAll);
        assert_eq!(config.verification.max_failures, Some(10));
        assert_eq!(config.namespace().unwrap().as_str(), "vips::enums");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_rejects_unknown_policy_and_zero_cap() {
        let bad_policy = ParityConfig::from_toml("[verification]\nfailure_policy = \"retry\"");
        assert!(matches!(bad_policy, Err(ConfigError::Toml(_))));

        let zero_cap = ParityConfig::from_toml("[verification]\nmax_failures = 0");
        assert!(matches!(
            zero_cap,
            Err(ConfigError::InvalidValue { field: "verification.max_failures", .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_namespace() {
        let result = ParityConfig::from_toml("[registry]\nnamespace = \"vips::::enums\"");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { field: "registry.namespace", .. })
        ));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ParityConfig::load(dir.path(), None).unwrap();
        assert_eq!(config.verification.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.base_dir.as_deref(), Some(dir.path()));
    }

    #[test]
    fn test_load_reads_root_file_and_resolves_mapping_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[registry]\nmapping_files = [\"maps/extra.toml\"]\n",
        )
        .unwrap();

        let config = ParityConfig::load(dir.path(), None).unwrap();
        assert_eq!(
            config.mapping_file_paths(),
            vec![dir.path().join("maps/extra.toml")]
        );
    }

    #[test]
    fn test_load_missing_override_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = ParityConfig::load(dir.path(), Some(&missing));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
