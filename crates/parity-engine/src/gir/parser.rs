//! Streaming GIR reader: collects every `<enumeration>` and `<bitfield>`
//! with its members and documentation.

use std::fmt;
use std::path::Path;

use parity_core::errors::GirError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GirKind {
    Enumeration,
    Bitfield,
}

impl GirKind {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"enumeration" => Some(Self::Enumeration),
            b"bitfield" => Some(Self::Bitfield),
            _ => None,
        }
    }

    fn tag(self) -> &'static str {
        match self {
            Self::Enumeration => "enumeration",
            Self::Bitfield => "bitfield",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GirMember {
    /// GIR member name, e.g. `random`.
    pub name: String,
    pub value: i64,
    /// C enumerator, e.g. `VIPS_ACCESS_RANDOM`.
    pub c_identifier: String,
    pub doc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GirEnumeration {
    /// GIR type name without namespace, e.g. `Access`.
    pub name: String,
    /// C type, e.g. `VipsAccess`.
    pub c_type: Option<String>,
    pub kind: GirKind,
    pub doc: Option<String>,
    pub members: Vec<GirMember>,
}

/// Where a `<doc>` element's text goes.
#[derive(Clone, Copy)]
enum DocTarget {
    Enumeration,
    Member,
    Ignored,
}

pub fn parse_gir_file(path: &Path) -> Result<Vec<GirEnumeration>, GirError> {
    let xml = std::fs::read_to_string(path).map_err(|source| GirError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let enums = parse_gir(&xml)?;
    tracing::debug!(path = %path.display(), enumerations = enums.len(), "parsed GIR file");
    Ok(enums)
}

/// Parse GIR XML. Enumerations without members are skipped; the rest are
/// returned in document order.
pub fn parse_gir(xml: &str) -> Result<Vec<GirEnumeration>, GirError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut enums = Vec::new();
    let mut current: Option<GirEnumeration> = None;
    // Local names of open elements.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut doc_target: Option<DocTarget> = None;

    loop {
        let event = reader
            .read_event()
            .map_err(|err| xml_error(&reader, err))?;

        match event {
            Event::Start(ref e) => {
                let local = e.local_name().as_ref().to_vec();
                open_element(&reader, e, &local, &stack, &mut current, &mut doc_target)?;
                stack.push(local);
            }
            Event::Empty(ref e) => {
                let local = e.local_name().as_ref().to_vec();
                open_element(&reader, e, &local, &stack, &mut current, &mut doc_target)?;
                // An empty element closes immediately.
                close_element(&local, &mut current, &mut enums, &mut doc_target);
            }
            Event::Text(ref t) => {
                if let (Some(target), Some(enumeration)) = (doc_target, current.as_mut()) {
                    let text = t.unescape().map_err(|err| xml_error(&reader, err))?;
                    append_doc(enumeration, target, &text);
                }
            }
            Event::End(ref e) => {
                let local = e.local_name().as_ref().to_vec();
                stack.pop();
                close_element(&local, &mut current, &mut enums, &mut doc_target);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(enums)
}

fn open_element(
    reader: &Reader<&[u8]>,
    e: &BytesStart<'_>,
    local: &[u8],
    stack: &[Vec<u8>],
    current: &mut Option<GirEnumeration>,
    doc_target: &mut Option<DocTarget>,
) -> Result<(), GirError> {
    let parent = stack.last().map(Vec::as_slice);

    if let Some(kind) = GirKind::from_tag(local) {
        let attrs = read_attributes(reader, e)?;
        let name = attrs.name.ok_or(GirError::MissingAttribute {
            element: kind.tag(),
            attribute: "name",
        })?;
        *current = Some(GirEnumeration {
            name,
            c_type: attrs.c_type,
            kind,
            doc: None,
            members: Vec::new(),
        });
        return Ok(());
    }

    let Some(enumeration) = current.as_mut() else {
        return Ok(());
    };
    let parent_is_enum = parent.and_then(GirKind::from_tag).is_some();

    match local {
        b"member" if parent_is_enum => {
            let attrs = read_attributes(reader, e)?;
            let name = attrs.name.ok_or(GirError::MissingAttribute {
                element: "member",
                attribute: "name",
            })?;
            let raw_value = attrs.value.ok_or(GirError::MissingAttribute {
                element: "member",
                attribute: "value",
            })?;
            let c_identifier = attrs.c_identifier.ok_or(GirError::MissingAttribute {
                element: "member",
                attribute: "c:identifier",
            })?;
            let value = raw_value
                .trim()
                .parse::<i64>()
                .map_err(|_| GirError::InvalidValue {
                    enumeration: enumeration.name.clone(),
                    member: name.clone(),
                    value: raw_value.clone(),
                })?;
            enumeration.members.push(GirMember {
                name,
                value,
                c_identifier,
                doc: None,
            });
        }
        b"doc" => {
            *doc_target = Some(match parent {
                Some(p) if GirKind::from_tag(p).is_some() => DocTarget::Enumeration,
                Some(b"member") if stack.len() >= 2 && GirKind::from_tag(&stack[stack.len() - 2]).is_some() => {
                    DocTarget::Member
                }
                _ => DocTarget::Ignored,
            });
        }
        _ => {}
    }
    Ok(())
}

fn close_element(
    local: &[u8],
    current: &mut Option<GirEnumeration>,
    enums: &mut Vec<GirEnumeration>,
    doc_target: &mut Option<DocTarget>,
) {
    if local == b"doc" {
        *doc_target = None;
        return;
    }
    if GirKind::from_tag(local).is_some() {
        if let Some(enumeration) = current.take() {
            if enumeration.members.is_empty() {
                tracing::trace!(name = %enumeration.name, "skipping enumeration without members");
            } else {
                enums.push(enumeration);
            }
        }
    }
}

fn append_doc(enumeration: &mut GirEnumeration, target: DocTarget, text: &str) {
    let slot = match target {
        DocTarget::Enumeration => &mut enumeration.doc,
        DocTarget::Member => match enumeration.members.last_mut() {
            Some(member) => &mut member.doc,
            None => return,
        },
        DocTarget::Ignored => return,
    };
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return;
    }
    match slot {
        Some(existing) => {
            existing.push(' ');
            existing.push_str(&normalized);
        }
        None => *slot = Some(normalized),
    }
}

#[derive(Default)]
struct Attributes {
    name: Option<String>,
    value: Option<String>,
    c_identifier: Option<String>,
    c_type: Option<String>,
}

fn read_attributes(reader: &Reader<&[u8]>, e: &BytesStart<'_>) -> Result<Attributes, GirError> {
    let mut out = Attributes::default();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| xml_error(reader, err))?;
        let slot = match attr.key.as_ref() {
            b"name" => &mut out.name,
            b"value" => &mut out.value,
            b"c:identifier" => &mut out.c_identifier,
            b"c:type" => &mut out.c_type,
            _ => continue,
        };
        let value = attr
            .unescape_value()
            .map_err(|err| xml_error(reader, err))?;
        *slot = Some(value.into_owned());
    }
    Ok(out)
}

fn xml_error(reader: &Reader<&[u8]>, err: impl fmt::Display) -> GirError {
    GirError::Xml {
        position: reader.error_position(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0"?>
<repository xmlns="http://www.gtk.org/introspection/core/1.0"
            xmlns:c="http://www.gtk.org/introspection/c/1.0">
  <namespace name="Vips">
    <enumeration name="Access" c:type="VipsAccess">
      <doc xml:space="preserve">The type of access
        an operation has.</doc>
      <member name="random" value="0" c:identifier="VIPS_ACCESS_RANDOM">
        <doc xml:space="preserve">can read anywhere</doc>
      </member>
      <member name="sequential" value="1" c:identifier="VIPS_ACCESS_SEQUENTIAL"/>
      <function name="get_type" c:identifier="vips_access_get_type">
        <doc>not a member doc</doc>
      </function>
    </enumeration>
    <bitfield name="ForeignKeep" c:type="VipsForeignKeep">
      <member name="none" value="0" c:identifier="VIPS_FOREIGN_KEEP_NONE"/>
      <member name="all" value="63" c:identifier="VIPS_FOREIGN_KEEP_ALL"/>
    </bitfield>
    <enumeration name="Empty" c:type="VipsEmpty"/>
  </namespace>
</repository>"#;

    #[test]
    fn test_parses_enumerations_and_bitfields() {
        let enums = parse_gir(SAMPLE).unwrap();
        assert_eq!(enums.len(), 2);

        let access = &enums[0];
        assert_eq!(access.name, "Access");
        assert_eq!(access.c_type.as_deref(), Some("VipsAccess"));
        assert_eq!(access.kind, GirKind::Enumeration);
        assert_eq!(access.doc.as_deref(), Some("The type of access an operation has."));
        assert_eq!(access.members.len(), 2);
        assert_eq!(access.members[0].c_identifier, "VIPS_ACCESS_RANDOM");
        assert_eq!(access.members[0].doc.as_deref(), Some("can read anywhere"));
        assert_eq!(access.members[1].doc, None);

        let keep = &enums[1];
        assert_eq!(keep.kind, GirKind::Bitfield);
        assert_eq!(keep.members[1].value, 63);
    }

    #[test]
    fn test_missing_identifier_is_reported() {
        let xml = r#"<repository><enumeration name="A"><member name="x" value="1"/></enumeration></repository>"#;
        let err = parse_gir(xml).unwrap_err();
        assert!(matches!(
            err,
            GirError::MissingAttribute {
                element: "member",
                attribute: "c:identifier"
            }
        ));
    }

    #[test]
    fn test_non_integer_value_is_reported() {
        let xml = r#"<repository><enumeration name="A"><member name="x" value="one" c:identifier="VIPS_A_X"/></enumeration></repository>"#;
        let err = parse_gir(xml).unwrap_err();
        assert!(matches!(err, GirError::InvalidValue { ref value, .. } if value == "one"));
    }

    #[test]
    fn test_malformed_xml_is_reported() {
        let err = parse_gir("<repository><enumeration name=\"A\"></bitfield>").unwrap_err();
        match &err {
            GirError::Xml { position, .. } => assert!(*position > 0),
            other => panic!("expected an XML error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("malformed GIR XML at byte "));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_gir_file(Path::new("/nonexistent/Vips-8.0.gir")).unwrap_err();
        assert!(matches!(err, GirError::Io { .. }));
    }
}
