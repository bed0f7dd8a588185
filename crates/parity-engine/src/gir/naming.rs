//! Binding-side names derived from GIR data.

const C_PREFIX: &str = "VIPS_";
const GROUP_PREFIX: &str = "Vips";

/// `VIPS_FORMAT_UCHAR` → `FormatUchar`.
///
/// Strips the library prefix, lowercases, and capitalizes each
/// `_`-separated part.
pub fn pascal_case_identifier(c_identifier: &str) -> String {
    let stripped = c_identifier.strip_prefix(C_PREFIX).unwrap_or(c_identifier);
    stripped
        .to_ascii_lowercase()
        .split('_')
        .map(capitalize)
        .collect()
}

/// Binding member name for a GIR member of enumeration `gir_name`.
///
/// The enumeration's own name is stripped from the front when present
/// (`AccessRandom` in `Access` → `Random`). The match is case-sensitive, so
/// `FormatUchar` in `BandFormat` and `PcsLab` in `PCS` are kept whole. A
/// member whose name would become empty keeps the unstripped form.
pub fn member_name(c_identifier: &str, gir_name: &str) -> String {
    let full = pascal_case_identifier(c_identifier);
    match full.strip_prefix(gir_name) {
        Some(rest) if !rest.is_empty() => rest.to_string(),
        _ => full,
    }
}

/// `Access` → `VipsAccess`.
pub fn group_name(gir_name: &str) -> String {
    format!("{GROUP_PREFIX}{gir_name}")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
