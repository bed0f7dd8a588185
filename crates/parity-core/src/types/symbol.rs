//! Symbol naming: qualified group paths and member identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::constants::{FOREIGN_PATH_SEPARATORS, PATH_SEPARATOR};
use crate::errors::SymbolError;

/// Qualified locator of a binding-side enumeration type.
///
/// Stored in normalized `a::b::Name` form. Parsing also accepts JNI class
/// names (`com/criteo/vips/enums/VipsAccess`), JNI field descriptors
/// (`Lcom/criteo/vips/enums/VipsAccess;`) and dotted names, so registries
/// written against any of those spellings resolve to the same group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolPath(String);

impl SymbolPath {
    /// Parse and normalize a path.
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        let trimmed = raw.trim();
        let unwrapped = strip_descriptor(trimmed);
        if unwrapped.is_empty() {
            return Err(SymbolError::EmptyPath);
        }

        let mut segments: SmallVec<[&str; 8]> = SmallVec::new();
        for part in unwrapped.split(PATH_SEPARATOR) {
            for segment in part.split(FOREIGN_PATH_SEPARATORS) {
                if !is_identifier(segment) {
                    return Err(SymbolError::InvalidSegment {
                        input: raw.to_string(),
                        segment: segment.to_string(),
                    });
                }
                segments.push(segment);
            }
        }

        Ok(Self(segments.join(PATH_SEPARATOR)))
    }

    /// Join a namespace and a bare or qualified name.
    ///
    /// A `name` that is already qualified is returned as-is.
    pub fn qualify(namespace: Option<&SymbolPath>, name: &str) -> Result<Self, SymbolError> {
        let path = Self::parse(name)?;
        match namespace {
            Some(ns) if !path.is_qualified() => {
                Ok(Self(format!("{}{PATH_SEPARATOR}{}", ns.0, path.0)))
            }
            _ => Ok(path),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, outermost first.
    pub fn segments(&self) -> SmallVec<[&str; 4]> {
        self.0.split(PATH_SEPARATOR).collect()
    }

    /// Last segment: the type name itself.
    pub fn name(&self) -> &str {
        self.0
            .rsplit(PATH_SEPARATOR)
            .next()
            .unwrap_or(self.0.as_str())
    }

    /// Everything before the last segment, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.0.rsplit_once(PATH_SEPARATOR).map(|(ns, _)| ns)
    }

    pub fn is_qualified(&self) -> bool {
        self.0.contains(PATH_SEPARATOR)
    }
}

impl fmt::Display for SymbolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SymbolPath {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SymbolPath> for String {
    fn from(path: SymbolPath) -> Self {
        path.0
    }
}

impl std::str::FromStr for SymbolPath {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Name of a member within a symbol group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: &str) -> Result<Self, SymbolError> {
        let trimmed = raw.trim();
        if is_identifier(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(SymbolError::InvalidIdentifier(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = SymbolError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// `Lpkg/Type;` → `pkg/Type`.
fn strip_descriptor(s: &str) -> &str {
    match s.strip_prefix('L').and_then(|rest| rest.strip_suffix(';')) {
        Some(inner) => inner,
        None => s,
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_jni_class_name() {
        let path = SymbolPath::parse("com/criteo/vips/enums/VipsAccess").unwrap();
        assert_eq!(path.as_str(), "com::criteo::vips::enums::VipsAccess");
        assert_eq!(path.name(), "VipsAccess");
        assert_eq!(path.namespace(), Some("com::criteo::vips::enums"));
    }

    #[test]
    fn test_parse_strips_field_descriptor() {
        let a = SymbolPath::parse("Lcom/criteo/vips/enums/VipsAccess;").unwrap();
        let b = SymbolPath::parse("com.criteo.vips.enums.VipsAccess").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bare_name_is_unqualified() {
        let path = SymbolPath::parse("Access").unwrap();
        assert!(!path.is_qualified());
        assert_eq!(path.name(), "Access");
        assert_eq!(path.namespace(), None);
        assert_eq!(path.segments().len(), 1);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(matches!(SymbolPath::parse("  "), Err(SymbolError::EmptyPath)));
        assert!(matches!(
            SymbolPath::parse("vips::::Access"),
            Err(SymbolError::InvalidSegment { .. })
        ));
        assert!(SymbolPath::parse("vips::9Access").is_err());
    }

    #[test]
    fn test_qualify_prefixes_bare_names_only() {
        let ns = SymbolPath::parse("vips::enums").unwrap();
        let bare = SymbolPath::qualify(Some(&ns), "VipsAlign").unwrap();
        assert_eq!(bare.as_str(), "vips::enums::VipsAlign");

        let qualified = SymbolPath::qualify(Some(&ns), "other::VipsAlign").unwrap();
        assert_eq!(qualified.as_str(), "other::VipsAlign");
    }

    #[test]
    fn test_identifier_validation() {
        assert!(Identifier::new("SequentialUnbuffered").is_ok());
        assert!(Identifier::new("D270").is_ok());
        assert!(Identifier::new("270").is_err());
        assert!(Identifier::new("Rint Ceil").is_err());
        assert_eq!(Identifier::new(" Random ").unwrap(), "Random");
    }

    #[test]
    fn test_serde_round_trips_through_normalized_string() {
        let path: SymbolPath = serde_json::from_str("\"vips/enums/VipsKernel\"").unwrap();
        assert_eq!(path.as_str(), "vips::enums::VipsKernel");
        let rejected: Result<Identifier, _> = serde_json::from_str("\"not valid\"");
        assert!(rejected.is_err());
    }
}
