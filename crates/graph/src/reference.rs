//! Resolution of `#/collection/.../name` references.
//!
//! A reference walks nested collections from the document root, one segment at a time. The
//! last segment is not a collection: it is matched against the identifying field of every
//! member of the final collection ([`Member::identifier`]), in collection order. The first
//! member that matches wins; later duplicates are never looked at.
//!
//! | Reference | Walk | Match |
//! |-----------|------|-------|
//! | `#/components/schemas/Pet` | `components` → `schemas` | schema named `Pet` |
//! | `#/components/examples/dog` | `components` → `examples` | example named `dog` |
//! | `components/schemas/Pet` | none | not a reference |

use indexmap::IndexMap;
use serde_json::Value;

use crate::document::{DocumentRoot, Member, Node};
use crate::error::{GraphError, Result};
use crate::hint::HintBlock;
use crate::nodes::{Example, ExampleEntry, Property, Schema, SchemaRef};

/// A parsed reference string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference<'a> {
    raw: &'a str,
    collections: Vec<&'a str>,
    name: &'a str,
}

impl<'a> Reference<'a> {
    /// Parses `"#" ("/" segment)+`.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let mut segments = raw.split('/');
        if segments.next() != Some("#") {
            return Err(GraphError::NotAReference(raw.to_string()));
        }
        let mut collections: Vec<&str> = segments.collect();
        let name = collections
            .pop()
            .ok_or_else(|| GraphError::NotAReference(raw.to_string()))?;
        Ok(Self {
            raw,
            collections,
            name,
        })
    }

    /// The reference as written.
    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Intermediate collection segments.
    pub fn collections(&self) -> &[&'a str] {
        &self.collections
    }

    /// The terminal segment, matched against member identifiers.
    pub fn name(&self) -> &'a str {
        self.name
    }

    fn not_resolved(&self) -> GraphError {
        GraphError::ReferenceNotResolved(self.raw.to_string())
    }
}

/// What to return once a reference has matched a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selector<'s> {
    /// The whole matched node.
    Node,
    /// One named field of the matched node.
    Field(&'s str),
}

/// The target of a resolved reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolved<'a> {
    Node(&'a Member),
    Field(FieldValue<'a>),
}

/// A borrowed view of one field of a member.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Value(&'a Value),
    Xml(&'a HintBlock),
    Properties(&'a [Property]),
    Schema(&'a SchemaRef),
    Examples(&'a IndexMap<String, ExampleEntry>),
}

impl Member {
    /// Reads one field by its serialized name. Absent optional fields are `None`.
    pub fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match (self, name) {
            (Member::Schema(schema), "name") => Some(FieldValue::Text(&schema.name)),
            (Member::Schema(schema), "xml") => schema.xml.as_ref().map(FieldValue::Xml),
            (Member::Schema(schema), "properties") => {
                Some(FieldValue::Properties(&schema.properties))
            }
            (Member::Property(property), "property") => Some(FieldValue::Text(&property.property)),
            (Member::Property(property), "xml") => property.xml.as_ref().map(FieldValue::Xml),
            (Member::Property(property), "schema") => {
                property.schema.as_ref().map(FieldValue::Schema)
            }
            (Member::Example(example), "name") => Some(FieldValue::Text(&example.name)),
            (Member::Example(example), "summary") => {
                example.summary.as_deref().map(FieldValue::Text)
            }
            (Member::Example(example), "description") => {
                example.description.as_deref().map(FieldValue::Text)
            }
            (Member::Example(example), "value") => example.value.as_ref().map(FieldValue::Value),
            (Member::MediaType(media_type), "mediaType") => {
                Some(FieldValue::Text(&media_type.media_type))
            }
            (Member::MediaType(media_type), "schema") => {
                media_type.schema.as_ref().map(FieldValue::Schema)
            }
            (Member::MediaType(media_type), "examples") => {
                Some(FieldValue::Examples(&media_type.examples))
            }
            _ => None,
        }
    }
}

/// Resolves `reference` against `root`, explaining why when nothing is found.
pub fn try_resolve<'a>(
    reference: &str,
    root: &'a DocumentRoot,
    selector: Selector<'_>,
) -> Result<Resolved<'a>> {
    let reference = Reference::parse(reference)?;
    let member = find_member(&reference, root).ok_or_else(|| reference.not_resolved())?;
    match selector {
        Selector::Node => Ok(Resolved::Node(member)),
        Selector::Field(field) => member
            .field(field)
            .map(Resolved::Field)
            .ok_or_else(|| reference.not_resolved()),
    }
}

/// Resolves `reference` against `root`.
///
/// Returns `None` both for strings that are not references and for references that match
/// nothing.
pub fn resolve<'a>(
    reference: &str,
    root: &'a DocumentRoot,
    selector: Selector<'_>,
) -> Option<Resolved<'a>> {
    match try_resolve(reference, root, selector) {
        Ok(resolved) => Some(resolved),
        Err(err) => {
            tracing::trace!(reference = %reference, error = %err, "Reference lookup missed");
            None
        }
    }
}

/// Resolves `reference` to a schema node.
pub fn resolve_schema<'a>(reference: &str, root: &'a DocumentRoot) -> Result<&'a Schema> {
    match try_resolve(reference, root, Selector::Node)? {
        Resolved::Node(Member::Schema(schema)) => Ok(schema),
        resolved => Err(unexpected(reference, "schema", resolved)),
    }
}

/// Resolves `reference` to an example node.
pub fn resolve_example<'a>(reference: &str, root: &'a DocumentRoot) -> Result<&'a Example> {
    match try_resolve(reference, root, Selector::Node)? {
        Resolved::Node(Member::Example(example)) => Ok(example),
        resolved => Err(unexpected(reference, "example", resolved)),
    }
}

fn unexpected(reference: &str, expected: &'static str, resolved: Resolved<'_>) -> GraphError {
    let found = match resolved {
        Resolved::Node(member) => member.kind(),
        Resolved::Field(_) => "field",
    };
    GraphError::UnexpectedNode {
        reference: reference.to_string(),
        expected,
        found,
    }
}

fn find_member<'a>(reference: &Reference<'_>, root: &'a DocumentRoot) -> Option<&'a Member> {
    let members = match root.node(reference.collections())? {
        Node::Members(members) => members,
        Node::Collection(_) => return None,
    };
    members
        .iter()
        .find(|member| member.identifier() == reference.name())
}
