//! Config-driven runs: failure policy, mapping files, registry namespace.

use parity_core::errors::{FailureKind, RegistryError};
use parity_core::traits::DynamicGroup;
use parity_core::{ParityConfig, SymbolPath, SymbolTable};
use parity_engine::{registry_with_config, verify_with_config, MappingRegistry, VerifyError};

fn path(s: &str) -> SymbolPath {
    SymbolPath::parse(s).unwrap()
}

fn letters() -> SymbolTable {
    SymbolTable::new().with_group(
        DynamicGroup::new(path("Letters"))
            .with_value("A", 1)
            .with_value("B", 3)
            .with_value("C", 6),
    )
}

fn letters_registry(b: i64, c: i64) -> MappingRegistry {
    MappingRegistry::builder()
        .entry(1, "Letters", "A")
        .entry(b, "Letters", "B")
        .entry(c, "Letters", "C")
        .build()
        .unwrap()
}

fn write_project(parity_toml: &str, extra_toml: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("parity.toml"), parity_toml).unwrap();
    std::fs::write(dir.path().join("extra.toml"), extra_toml).unwrap();
    dir
}

#[test]
fn test_collect_all_renders_every_failure() {
    let config =
        ParityConfig::from_toml("[verification]\nfailure_policy = \"collect-all\"\n").unwrap();
    let runtime = letters();

    let err = verify_with_config(&letters_registry(2, 5), &runtime, &config).unwrap_err();
    assert_eq!(err.kind(), FailureKind::ValueMismatch);
    assert_eq!(
        err.to_string(),
        "2 of 3 checked mappings failed:\n  \
         [PARITY_VALUE_MISMATCH] #1: Letters:B is not equal to expected value (2)\n  \
         [PARITY_VALUE_MISMATCH] #2: Letters:C is not equal to expected value (5)"
    );
    match err {
        VerifyError::Failed(failed) => {
            assert_eq!(failed.checked, 3);
            assert_eq!(failed.kinds(), vec![FailureKind::ValueMismatch; 2]);
        }
        other => panic!("expected a failed run, got {other:?}"),
    }
}

#[test]
fn test_single_failure_renders_as_its_own_message() {
    let config =
        ParityConfig::from_toml("[verification]\nfailure_policy = \"collect-all\"\n").unwrap();
    let runtime = letters();

    let err = verify_with_config(&letters_registry(3, 5), &runtime, &config).unwrap_err();
    assert_eq!(err.to_string(), "Letters:C is not equal to expected value (5)");
}

#[test]
fn test_fail_fast_config_stops_at_first_drift() {
    let config = ParityConfig::default();
    let runtime = letters();

    let err = verify_with_config(&letters_registry(2, 5), &runtime, &config).unwrap_err();
    assert_eq!(err.to_string(), "Letters:B is not equal to expected value (2)");
}

#[test]
fn test_successful_config_run_counts_file_mappings() {
    let dir = write_project(
        "[registry]\nmapping_files = [\"extra.toml\"]\n",
        "[[mapping]]\nexpected = 6\ngroup = \"Letters\"\nmember = \"C\"\n",
    );
    let config = ParityConfig::load(dir.path(), None).unwrap();
    let base = MappingRegistry::builder()
        .entry(1, "Letters", "A")
        .entry(3, "Letters", "B")
        .build()
        .unwrap();

    let summary = verify_with_config(&base, &letters(), &config).unwrap();
    assert_eq!(summary.checked, 3);
    assert_eq!(summary.groups, 1);
}

#[test]
fn test_registry_namespace_qualifies_bare_groups_in_files() {
    let dir = write_project(
        "[registry]\nnamespace = \"app::enums\"\nmapping_files = [\"extra.toml\"]\n",
        "[[mapping]]\nexpected = 1\ngroup = \"Letters\"\nmember = \"A\"\n",
    );
    let config = ParityConfig::load(dir.path(), None).unwrap();
    // Two groups named `Letters`: only the namespaced one carries A = 1.
    let runtime = SymbolTable::new()
        .with_group(DynamicGroup::new(path("app::enums::Letters")).with_value("A", 1))
        .with_group(DynamicGroup::new(path("other::Letters")).with_value("A", 9));

    let empty = MappingRegistry::default();
    let registry = registry_with_config(&empty, &config).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entries()[0].binding_group.as_str(), "app::enums::Letters");

    let summary = verify_with_config(&empty, &runtime, &config).unwrap();
    assert_eq!(summary.checked, 1);
}

#[test]
fn test_bare_group_without_namespace_is_ambiguous() {
    let dir = write_project(
        "[registry]\nmapping_files = [\"extra.toml\"]\n",
        "[[mapping]]\nexpected = 1\ngroup = \"Letters\"\nmember = \"A\"\n",
    );
    let config = ParityConfig::load(dir.path(), None).unwrap();
    let runtime = SymbolTable::new()
        .with_group(DynamicGroup::new(path("app::enums::Letters")).with_value("A", 1))
        .with_group(DynamicGroup::new(path("other::Letters")).with_value("A", 9));

    let err = verify_with_config(&MappingRegistry::default(), &runtime, &config).unwrap_err();
    assert_eq!(err.kind(), FailureKind::UnknownGroup);
}

#[test]
fn test_without_mapping_files_the_registry_is_borrowed() {
    let base = letters_registry(3, 6);
    let registry = registry_with_config(&base, &ParityConfig::default()).unwrap();
    assert!(matches!(registry, std::borrow::Cow::Borrowed(_)));
}

#[test]
fn test_missing_mapping_file_is_a_registry_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("parity.toml"),
        "[registry]\nmapping_files = [\"absent.toml\"]\n",
    )
    .unwrap();
    let config = ParityConfig::load(dir.path(), None).unwrap();

    let err = verify_with_config(&MappingRegistry::default(), &letters(), &config).unwrap_err();
    assert!(matches!(err, VerifyError::Registry(RegistryError::Io { .. })));
    assert_eq!(err.kind(), FailureKind::Config);
}
