//! # parity-engine
//!
//! Verification engine for the binding-parity verifier.
//! Checks that every symbolic constant a binding exposes carries the integer
//! the native library defines for it.
//!
//! Pipeline: `registry` (what must hold) → `resolver` (what the binding
//! says) → `checker` (compare, stop or collect) → `VerificationReport`.
//! `gir` builds registries straight from GObject-Introspection data.

pub mod registry;
pub mod resolver;
pub mod checker;
pub mod gir;
pub mod error;

use std::borrow::Cow;

use parity_core::errors::RegistryError;
use parity_core::{BindingRuntime, ParityConfig, ParityError};

pub use checker::{EntryFailure, ParityChecker, VerificationReport, VerificationSummary};
pub use error::VerifyError;
pub use registry::{MappingEntry, MappingFamily, MappingRegistry, RegistryBuilder};
pub use resolver::{ResolvedValue, ValueResolver};

/// Verify `registry` against `runtime`, stopping at the first failure.
pub fn verify(
    registry: &MappingRegistry,
    runtime: &dyn BindingRuntime,
) -> Result<VerificationSummary, ParityError> {
    ParityChecker::new(runtime).verify(registry)
}

/// `registry` extended with the mapping files `config` names.
///
/// Bare group names in those files are joined to `[registry] namespace`
/// unless the file sets its own. Without mapping files the registry is
/// borrowed unchanged.
pub fn registry_with_config<'a>(
    registry: &'a MappingRegistry,
    config: &ParityConfig,
) -> Result<Cow<'a, MappingRegistry>, RegistryError> {
    let files = config.mapping_file_paths();
    if files.is_empty() {
        return Ok(Cow::Borrowed(registry));
    }

    let mut builder = RegistryBuilder::from_registry(registry);
    if let Some(ns) = config.namespace() {
        builder = builder.namespace(ns);
    }
    for file in &files {
        builder = builder.load_file(file)?;
    }
    let extended = builder.build()?;
    tracing::debug!(
        files = files.len(),
        added = extended.len() - registry.len(),
        "registry extended from config"
    );
    Ok(Cow::Owned(extended))
}

/// Full report under `config`: mapping files appended, then the configured
/// failure policy applied.
pub fn report_with_config(
    registry: &MappingRegistry,
    runtime: &dyn BindingRuntime,
    config: &ParityConfig,
) -> Result<VerificationReport, VerifyError> {
    let registry = registry_with_config(registry, config)?;
    Ok(ParityChecker::from_config(runtime, &config.verification).run(&registry))
}

/// Verify with settings from `config`.
///
/// Mapping files named by the config are appended to `registry` before the
/// run, and the failure policy decides whether the run stops at the first
/// failure or reports all of them.
pub fn verify_with_config(
    registry: &MappingRegistry,
    runtime: &dyn BindingRuntime,
    config: &ParityConfig,
) -> Result<VerificationSummary, VerifyError> {
    let report = report_with_config(registry, runtime, config)?;
    Ok(report.into_result()?)
}
