//! Registry generation from GObject-Introspection data.
//!
//! The expected values come straight from the `.gir` file the native library
//! ships, so a registry built here checks the binding against the library
//! build the GIR describes.

pub mod naming;
pub mod parser;

pub use parser::{parse_gir, parse_gir_file, GirEnumeration, GirKind, GirMember};

use std::path::Path;

use parity_core::errors::GirError;
use parity_core::SymbolPath;

use crate::registry::{MappingRegistry, RegistryBuilder};

/// Build a registry from parsed enumerations.
///
/// Families are emitted sorted by GIR name, members in document order.
/// Groups are `Vips<Name>`, joined to `namespace` when given.
pub fn registry_from_gir(
    enumerations: &[GirEnumeration],
    namespace: Option<&SymbolPath>,
) -> Result<MappingRegistry, GirError> {
    let mut sorted: Vec<&GirEnumeration> = enumerations.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut builder = RegistryBuilder::new();
    if let Some(ns) = namespace {
        builder = builder.namespace(ns.clone());
    }

    for enumeration in sorted {
        let group = naming::group_name(&enumeration.name);
        for member in &enumeration.members {
            let name = naming::member_name(&member.c_identifier, &enumeration.name);
            builder = builder.entry(member.value, group.as_str(), name);
        }
    }

    let registry = builder.build()?;
    tracing::debug!(
        families = enumerations.len(),
        entries = registry.len(),
        "built registry from GIR"
    );
    Ok(registry)
}

/// `parse_gir_file` followed by `registry_from_gir`.
pub fn registry_from_gir_file(
    path: &Path,
    namespace: Option<&SymbolPath>,
) -> Result<MappingRegistry, GirError> {
    let enumerations = parse_gir_file(path)?;
    registry_from_gir(&enumerations, namespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enumeration(name: &str, members: &[(&str, i64)]) -> GirEnumeration {
        GirEnumeration {
            name: name.to_string(),
            c_type: Some(format!("Vips{name}")),
            kind: GirKind::Enumeration,
            doc: None,
            members: members
                .iter()
                .map(|(c_id, value)| GirMember {
                    name: c_id.to_ascii_lowercase(),
                    value: *value,
                    c_identifier: c_id.to_string(),
                    doc: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_families_sorted_members_in_order() {
        let enums = vec![
            enumeration("BandFormat", &[("VIPS_FORMAT_NOTSET", -1), ("VIPS_FORMAT_UCHAR", 0)]),
            enumeration("Access", &[("VIPS_ACCESS_SEQUENTIAL", 1), ("VIPS_ACCESS_RANDOM", 0)]),
        ];
        let registry = registry_from_gir(&enums, None).unwrap();
        let rows: Vec<String> = registry.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rows,
            vec![
                "VipsAccess:Sequential = 1",
                "VipsAccess:Random = 0",
                "VipsBandFormat:FormatNotset = -1",
                "VipsBandFormat:FormatUchar = 0",
            ]
        );
    }

    #[test]
    fn test_namespace_is_applied() {
        let ns = SymbolPath::parse("vips::enums").unwrap();
        let enums = vec![enumeration("Access", &[("VIPS_ACCESS_RANDOM", 0)])];
        let registry = registry_from_gir(&enums, Some(&ns)).unwrap();
        assert_eq!(
            registry.entries()[0].binding_group.as_str(),
            "vips::enums::VipsAccess"
        );
    }

    #[test]
    fn test_colliding_member_names_are_rejected() {
        let enums = vec![enumeration(
            "Access",
            &[("VIPS_ACCESS_RANDOM", 0), ("VIPS_ACCESS_RANDOM", 1)],
        )];
        let err = registry_from_gir(&enums, None).unwrap_err();
        assert!(matches!(err, GirError::Registry(_)));
    }
}
