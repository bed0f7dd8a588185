//! TOML mapping files.
//!
//! Extends a registry without code changes:
//!
//! ```toml
//! namespace = "vips::enums"          # optional, for bare group names below
//!
//! [[mapping]]
//! expected = 0
//! group = "VipsAccess"
//! member = "Random"
//!
//! [[family]]
//! group = "VipsAlign"
//! members = [
//!     { name = "Low", expected = 0 },
//!     { name = "Centre", expected = 1 },
//! ]
//! ```
//!
//! Single mappings come before families in the resulting order; each list
//! keeps document order. A file-level `namespace` applies to this file only.

use parity_core::errors::RegistryError;
use parity_core::SymbolPath;
use serde::Deserialize;

use super::builder::RegistryBuilder;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingFile {
    namespace: Option<String>,
    #[serde(default)]
    mapping: Vec<MappingRow>,
    #[serde(default)]
    family: Vec<FamilyRow>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MappingRow {
    expected: i64,
    group: String,
    member: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FamilyRow {
    group: String,
    members: Vec<FamilyMember>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FamilyMember {
    name: String,
    expected: i64,
}

/// Append the contents of `toml_str` to `builder`.
pub fn load_toml(builder: RegistryBuilder, toml_str: &str) -> Result<RegistryBuilder, RegistryError> {
    let file: MappingFile = toml::from_str(toml_str)?;

    let outer_namespace = builder.current_namespace().cloned();
    let mut builder = match file.namespace.as_deref() {
        Some(ns) => {
            let ns = SymbolPath::parse(ns).map_err(|source| RegistryError::InvalidNamespace {
                namespace: ns.to_string(),
                source,
            })?;
            builder.namespace(ns)
        }
        None => builder,
    };

    for row in file.mapping {
        builder = builder.entry(row.expected, row.group, row.member);
    }
    for family in file.family {
        for member in family.members {
            builder = builder.entry(member.expected, family.group.as_str(), member.name);
        }
    }

    Ok(match outer_namespace {
        Some(ns) => builder.namespace(ns),
        None => builder.clear_namespace(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAPPINGS: &str = r#"
        namespace = "vips::enums"

        [[mapping]]
        expected = 0
        group = "VipsAccess"
        member = "Random"

        [[family]]
        group = "VipsAlign"
        members = [
            { name = "Low", expected = 0 },
            { name = "Centre", expected = 1 },
            { name = "High", expected = 2 },
        ]
    "#;

    #[test]
    fn test_load_mappings_and_families() {
        let registry = RegistryBuilder::new().load_toml(MAPPINGS).unwrap().build().unwrap();
        assert_eq!(registry.len(), 4);
        let first = &registry.entries()[0];
        assert_eq!(first.binding_group.as_str(), "vips::enums::VipsAccess");
        assert_eq!(first.member_name, "Random");
        assert_eq!(registry.entries()[3].expected_value, 2);
    }

    #[test]
    fn test_file_namespace_does_not_leak() {
        let registry = RegistryBuilder::new()
            .load_toml(MAPPINGS)
            .unwrap()
            .entry(3, "VipsTextWrap", "None")
            .build()
            .unwrap();
        assert_eq!(registry.entries()[4].binding_group.as_str(), "VipsTextWrap");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result = RegistryBuilder::new().load_toml("[[mapping]]\nexpected = 0\ngroup = \"A\"\nmember = \"B\"\nvalue = 1\n");
        assert!(matches!(result, Err(RegistryError::Toml(_))));
    }

    #[test]
    fn test_malformed_file_namespace_is_reported_as_namespace() {
        let err = RegistryBuilder::new()
            .load_toml("namespace = \"vips::9bad\"\n")
            .unwrap_err();
        match &err {
            RegistryError::InvalidNamespace { namespace, .. } => assert_eq!(namespace, "vips::9bad"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RegistryBuilder::new().load_file(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(RegistryError::Io { .. })));
    }

    #[test]
    fn test_load_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.toml");
        std::fs::write(&path, MAPPINGS).unwrap();
        let registry = RegistryBuilder::new().load_file(&path).unwrap().build().unwrap();
        assert_eq!(registry.groups().len(), 2);
    }
}
