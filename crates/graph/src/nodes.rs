//! Annotation nodes held by the document graph.
//!
//! Every node is a plain serde struct with explicit optional fields. Field names follow the
//! serialized document (`property`, `mediaType`, `$ref`) so that reference selectors can address
//! them by the same names.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hint::{HintBlock, XmlHint, read_hint};

/// A named schema with its declared properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<HintBlock>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_xml(mut self, hint: XmlHint) -> Self {
        self.xml = Some(hint.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// The usable XML hint. A malformed block is logged and ignored.
    pub fn xml_hint(&self) -> Option<&XmlHint> {
        read_hint(&self.name, self.xml.as_ref())
    }

    /// Name of the element this schema renders as: the hint name, else the schema name.
    pub fn element_name(&self) -> &str {
        self.xml_hint()
            .and_then(XmlHint::name)
            .unwrap_or(&self.name)
    }

    /// Finds the declared property whose key equals `key`.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.property == key)
    }
}

/// Finds the declared property of `schema` whose key equals `key`.
///
/// An absent schema simply has no properties.
pub fn find_property<'a>(schema: Option<&'a Schema>, key: &str) -> Option<&'a Property> {
    schema?.property(key)
}

/// A schema either given inline or pointed to with `$ref`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaRef {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    Inline(Box<Schema>),
}

impl SchemaRef {
    pub fn reference(reference: impl Into<String>) -> Self {
        SchemaRef::Reference {
            reference: reference.into(),
        }
    }

    /// The `$ref` string, when this is a reference.
    pub fn as_reference(&self) -> Option<&str> {
        match self {
            SchemaRef::Reference { reference } => Some(reference),
            SchemaRef::Inline(_) => None,
        }
    }
}

/// A declared property of a schema.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The JSON field name this property describes.
    #[serde(default)]
    pub property: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<HintBlock>,

    /// Schema of the property's value when it is an object or a sequence of objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

impl Property {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..Default::default()
        }
    }

    pub fn with_xml(mut self, hint: XmlHint) -> Self {
        self.xml = Some(hint.into());
        self
    }

    pub fn with_schema(mut self, schema: SchemaRef) -> Self {
        self.schema = Some(schema);
        self
    }

    /// The usable XML hint. A malformed block is logged and ignored.
    pub fn xml_hint(&self) -> Option<&XmlHint> {
        read_hint(&self.property, self.xml.as_ref())
    }
}

/// A named example value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Example {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            ..Default::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}

/// One entry of a media type's `examples` map.
///
/// An entry is a *reference* while it carries `$ref` and no inline value. Rendering an entry
/// fills in `summary` and `value` and leaves `$ref` as it was.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ExampleEntry {
    pub fn reference(reference: impl Into<String>) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Default::default()
        }
    }

    pub fn inline(value: Value) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// The `$ref` string while the entry still points elsewhere in the document.
    pub fn as_reference(&self) -> Option<&str> {
        match (&self.reference, &self.value) {
            (Some(reference), None) => Some(reference),
            _ => None,
        }
    }

    /// Stores a rendered value, keeping the reference string.
    pub fn render(&mut self, summary: impl Into<String>, value: impl Into<String>) {
        self.summary = Some(summary.into());
        self.value = Some(Value::String(value.into()));
    }
}

/// A media type descriptor (`content` entry) of a request or response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaType {
    #[serde(default)]
    pub media_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub examples: IndexMap<String, ExampleEntry>,
}

impl MediaType {
    pub fn new(media_type: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            ..Default::default()
        }
    }

    pub fn with_schema(mut self, schema: SchemaRef) -> Self {
        self.schema = Some(schema);
        self
    }

    pub fn with_example(mut self, name: impl Into<String>, entry: ExampleEntry) -> Self {
        self.examples.insert(name.into(), entry);
        self
    }
}
