//! Reading base class definitions from NXDL XML documents.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::schema::{
    default_group_name, AttributeDef, BaseClassDef, ClassCategory, FieldDef, GroupDef,
};
use crate::domain::types::{NexusType, NexusUnit};

/// Where the parser is in the element hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Scope {
    Definition,
    Field(usize),
    Enumeration(usize),
    /// Anything whose content is irrelevant to the definition.
    Other,
}

fn xml_err(err: impl ToString) -> DomainError {
    DomainError::InvalidNxdl(err.to_string())
}

fn attribute_value(event: &BytesStart<'_>, name: &[u8]) -> DomainResult<Option<String>> {
    for attr in event.attributes() {
        let attr = attr.map_err(xml_err)?;
        if attr.key.as_ref() == name {
            let value = attr.unescape_value().map_err(xml_err)?;
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                return Ok(None);
            }
            return Ok(Some(trimmed));
        }
    }
    Ok(None)
}

fn read_text(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> DomainResult<String> {
    let end_buf = start.name().as_ref().to_vec();
    reader
        .read_text(QName(&end_buf))
        .map(|cow| cow.into_owned())
        .map_err(xml_err)
}

/// NXDL types outside the compiled set degrade to the closest known type.
fn nexus_type(raw: Option<String>) -> NexusType {
    match raw.as_deref() {
        None => NexusType::Char,
        Some("ISO8601") => NexusType::DateTime,
        Some(name) => name.parse().unwrap_or_else(|_| {
            warn!("unsupported NXDL type {}, treating as NX_CHAR_OR_NUMBER", name);
            NexusType::CharOrNumber
        }),
    }
}

fn nexus_unit(raw: Option<String>) -> Option<NexusUnit> {
    let name = raw?;
    match name.parse() {
        Ok(unit) => Some(unit),
        Err(_) => {
            warn!("unsupported unit category {}", name);
            None
        }
    }
}

fn category(raw: Option<&str>) -> ClassCategory {
    match raw {
        Some("application") => ClassCategory::Application,
        Some("contributed") => ClassCategory::Contributed,
        _ => ClassCategory::Base,
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

struct DefinitionBuilder {
    def: Option<BaseClassDef>,
    stack: Vec<Scope>,
}

impl DefinitionBuilder {
    fn scope(&self) -> Option<Scope> {
        self.stack.last().copied()
    }

    fn def_mut(&mut self) -> DomainResult<&mut BaseClassDef> {
        self.def
            .as_mut()
            .ok_or_else(|| xml_err("content outside of <definition>"))
    }

    /// Handle an opening tag and return the scope of its content.
    fn open(&mut self, e: &BytesStart<'_>) -> DomainResult<Scope> {
        let scope = match (self.scope(), e.local_name().as_ref()) {
            (None, b"definition") => {
                let name = attribute_value(e, b"name")?
                    .ok_or_else(|| xml_err("definition without a name"))?;
                let mut def = BaseClassDef::new(
                    name,
                    category(attribute_value(e, b"category")?.as_deref()),
                );
                def.extends = attribute_value(e, b"extends")?;
                self.def = Some(def);
                Scope::Definition
            }
            (None, other) => {
                return Err(xml_err(format!(
                    "expected <definition>, found <{}>",
                    String::from_utf8_lossy(other)
                )))
            }
            (Some(Scope::Definition), b"field") => {
                let name = attribute_value(e, b"name")?
                    .ok_or_else(|| xml_err("field without a name"))?;
                let mut field = FieldDef::new(name, nexus_type(attribute_value(e, b"type")?));
                field.units = nexus_unit(attribute_value(e, b"units")?);
                field.deprecated = attribute_value(e, b"deprecated")?;
                let def = self.def_mut()?;
                def.fields.push(field);
                Scope::Field(def.fields.len() - 1)
            }
            (Some(Scope::Definition), b"group") => {
                let class = attribute_value(e, b"type")?
                    .ok_or_else(|| xml_err("group without a type"))?;
                let name = match attribute_value(e, b"name")? {
                    Some(name) => name,
                    None => default_group_name(&class),
                };
                let deprecated = attribute_value(e, b"deprecated")?;
                self.def_mut()?.groups.push(GroupDef {
                    name,
                    class,
                    deprecated,
                });
                Scope::Other
            }
            (Some(Scope::Definition), b"attribute") => {
                let name = attribute_value(e, b"name")?
                    .ok_or_else(|| xml_err("attribute without a name"))?;
                let nx_type = nexus_type(attribute_value(e, b"type")?);
                self.def_mut()?.attributes.push(AttributeDef { name, nx_type });
                Scope::Other
            }
            (Some(Scope::Field(idx)), b"attribute") => {
                if let Some(name) = attribute_value(e, b"name")? {
                    if let Some(field) = self.def_mut()?.fields.get_mut(idx) {
                        field.attributes.push(name);
                    }
                }
                Scope::Other
            }
            (Some(Scope::Field(idx)), b"enumeration") => Scope::Enumeration(idx),
            (Some(Scope::Enumeration(idx)), b"item") => {
                if let Some(value) = attribute_value(e, b"value")? {
                    if let Some(field) = self.def_mut()?.fields.get_mut(idx) {
                        field.enumeration.push(value);
                    }
                }
                Scope::Other
            }
            _ => Scope::Other,
        };
        Ok(scope)
    }
}

/// Parse one NXDL document into a definition.
///
/// Only the direct members of `<definition>` are collected: its fields
/// (with units, enumeration, attributes and deprecation), child group slots
/// and group attributes. Nested groups of application definitions are skipped.
pub fn parse_nxdl(xml: &str) -> DomainResult<BaseClassDef> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();
    let mut builder = DefinitionBuilder {
        def: None,
        stack: Vec::new(),
    };

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if builder.scope() == Some(Scope::Definition) && e.local_name().as_ref() == b"doc" {
                    let text = read_text(&mut reader, &e)?;
                    builder.def_mut()?.doc = Some(collapse_whitespace(&text));
                } else {
                    let scope = builder.open(&e)?;
                    builder.stack.push(scope);
                }
            }
            Ok(Event::Empty(e)) => {
                builder.open(&e)?;
            }
            Ok(Event::End(_)) => {
                builder.stack.pop();
            }
            Ok(Event::Eof) if !builder.stack.is_empty() => {
                return Err(xml_err("unexpected end of document"))
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(xml_err(err)),
            _ => {}
        }
        buf.clear();
    }

    let def = builder
        .def
        .ok_or_else(|| xml_err("document has no <definition>"))?;
    debug!(
        "parsed NXDL {}: {} fields, {} groups",
        def.name,
        def.fields.len(),
        def.groups.len()
    );
    Ok(def)
}
