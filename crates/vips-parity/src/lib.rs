//! # vips-parity
//!
//! Checks that every libvips enumeration mirrored by `vips-enums` carries
//! the integer the native headers define. The mapping table lives in
//! [`table`]; the entry points below run it against the binding's symbol
//! table or against any other [`BindingRuntime`].

pub mod table;

pub use table::VIPS_FAMILIES;

use parity_core::errors::RegistryError;
use parity_core::{BindingRuntime, ParityConfig, SymbolPath};
use parity_engine::{MappingRegistry, ParityChecker, VerificationReport, VerificationSummary, VerifyError};

/// The full libvips registry, groups qualified under `vips::enums`.
pub fn vips_registry() -> Result<MappingRegistry, RegistryError> {
    let namespace = SymbolPath::parse(vips_enums::NAMESPACE).map_err(|source| {
        RegistryError::InvalidNamespace {
            namespace: vips_enums::NAMESPACE.to_string(),
            source,
        }
    })?;
    let registry = MappingRegistry::from_families(Some(&namespace), VIPS_FAMILIES)?;
    tracing::debug!(
        families = VIPS_FAMILIES.len(),
        entries = registry.len(),
        "vips registry built"
    );
    Ok(registry)
}

/// Verify the shipped binding. Stops at the first failing mapping.
pub fn verify_vips_bindings() -> Result<VerificationSummary, VerifyError> {
    verify_vips_bindings_against(vips_enums::symbol_table()?)
}

/// Verify an arbitrary runtime against the libvips registry.
pub fn verify_vips_bindings_against(
    runtime: &dyn BindingRuntime,
) -> Result<VerificationSummary, VerifyError> {
    let registry = vips_registry()?;
    let report = ParityChecker::new(runtime).run(&registry);
    match report.into_result() {
        Ok(summary) => {
            tracing::info!(checked = summary.checked, "vips bindings match native values");
            Ok(summary)
        }
        Err(failed) => {
            tracing::warn!(
                checked = failed.checked,
                failures = failed.failures.len(),
                "vips bindings drifted"
            );
            Err(failed.into())
        }
    }
}

/// Full report for the shipped binding under `config`, including the
/// mapping files it names.
pub fn vips_report(config: &ParityConfig) -> Result<VerificationReport, VerifyError> {
    let registry = vips_registry()?;
    parity_engine::report_with_config(&registry, vips_enums::symbol_table()?, config)
}

/// Verify with settings (policy, extra mapping files) from `config`.
pub fn verify_vips_bindings_with_config(
    runtime: &dyn BindingRuntime,
    config: &ParityConfig,
) -> Result<VerificationSummary, VerifyError> {
    let registry = vips_registry()?;
    parity_engine::verify_with_config(&registry, runtime, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_every_family() {
        let registry = vips_registry().unwrap();
        assert_eq!(registry.len(), 312);
        assert_eq!(registry.groups().len(), VIPS_FAMILIES.len());
    }

    #[test]
    fn test_registry_order_follows_table() {
        let registry = vips_registry().unwrap();
        let first = &registry.entries()[0];
        assert_eq!(first.binding_group.as_str(), "vips::enums::VipsAccess");
        assert_eq!(first.member_name.as_str(), "Random");
        assert_eq!(first.expected_value, 0);
    }
}
