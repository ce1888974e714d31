//! Schema-directed synthesis of an XML element tree from a JSON-shaped value.
//!
//! Every map key becomes an element name; sequence members are named after the enclosing
//! wrap token (or `item<index>` without one). At each level the key is looked up among the
//! schema's declared properties, and the property's XML hint decides the element name and
//! whether the value is a wrapped list:
//!
//! | Value | Property hint | Output |
//! |-------|---------------|--------|
//! | `{"name": "Rex"}` | no property | `<name>Rex</name>` |
//! | `{"tags": ["a"]}` | no property | `<tags><tag>a</tag></tags>` |
//! | `{"tags": ["a"]}` | none, property declared | `<tags><item0>a</item0></tags>` |
//! | `{"tags": ["a"]}` | `{name: "tags", wrapped: true}` | `<tags><tag>a</tag></tags>` |
//! | `{"tags": [{"Tag": "a"}]}` | `{name: "Tag", wrapped: true}` | `<Tag>a</Tag>` |
//!
//! Singular forms strip the configured plural suffix (`s` by default). This is the naive
//! heuristic rendered examples have always used, not an inflector.

use std::borrow::Cow;

use apidoc_graph::{
    DocumentRoot, Property, Schema, SchemaRef, XmlHint, find_property, resolve_schema,
};
use serde_json::Value;
use tracing::trace;

use crate::config::AugmentOptions;
use crate::xml::tree::XmlElement;
use crate::xml::utils;

/// Key of one entry of a composite value.
#[derive(Debug, Clone, Copy)]
enum Key<'v> {
    Named(&'v str),
    Index(usize),
}

impl Key<'_> {
    fn raw(&self) -> Cow<'_, str> {
        match self {
            Key::Named(name) => Cow::Borrowed(name),
            Key::Index(index) => Cow::Owned(index.to_string()),
        }
    }

    fn is_positional(&self) -> bool {
        match self {
            Key::Named(name) => utils::is_positional_key(name),
            Key::Index(_) => true,
        }
    }
}

/// One key/value pair of a map, or one member of a sequence.
#[derive(Debug, Clone, Copy)]
struct Entry<'v> {
    key: Key<'v>,
    value: &'v Value,
}

fn entries(value: &Value) -> Vec<Entry<'_>> {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| Entry {
                key: Key::Named(key),
                value,
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, value)| Entry {
                key: Key::Index(index),
                value,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// The sole entry of a one-entry map.
fn sole_entry(value: &Value) -> Option<(&str, &Value)> {
    match value {
        Value::Object(map) if map.len() == 1 => map.iter().next().map(|(k, v)| (k.as_str(), v)),
        _ => None,
    }
}

/// Collapses `{token: inner}` members of a wrapped value to `inner`.
///
/// The source value often spells the item wrapper after the JSON key rather than after the
/// hint name (`"bars": [{"Bar": ..}]`), so the singular of the key matches too, ignoring
/// ASCII case. Collapsed members become positional.
fn unwrap_entries<'v>(value: &'v Value, token: &str, alias: &str) -> Vec<Entry<'v>> {
    entries(value)
        .into_iter()
        .enumerate()
        .map(|(position, entry)| match sole_entry(entry.value) {
            Some((key, inner)) if key == token || key.eq_ignore_ascii_case(alias) => Entry {
                key: Key::Index(position),
                value: inner,
            },
            _ => entry,
        })
        .collect()
}

/// Converts example values into XML element trees.
///
/// With a document attached, property schemas given as `$ref` are followed; without one only
/// inline property schemas guide nested levels.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer<'a> {
    document: Option<&'a DocumentRoot>,
    options: AugmentOptions,
}

impl<'a> Synthesizer<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizer that follows property schema references into `document`.
    pub fn for_document(document: &'a DocumentRoot) -> Self {
        Self {
            document: Some(document),
            options: AugmentOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AugmentOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &AugmentOptions {
        &self.options
    }

    /// Synthesizes the elements for every entry of `value`, in input order.
    ///
    /// `wrap_context` names positional entries; without it they become `item<index>`.
    /// Scalars and `null` have no entries and yield nothing.
    pub fn synthesize(
        &self,
        value: &Value,
        schema: Option<&Schema>,
        wrap_context: Option<&str>,
    ) -> Vec<XmlElement> {
        self.elements(entries(value), schema, wrap_context)
    }

    /// Synthesizes a root element named `root_name` around the elements of `value`.
    pub fn synthesize_root(
        &self,
        root_name: &str,
        value: &Value,
        schema: Option<&Schema>,
    ) -> XmlElement {
        XmlElement::with_children(root_name, self.synthesize(value, schema, None))
    }

    /// Synthesizes the rendering of an example value under `schema`.
    ///
    /// The root element is named after the schema. Blank top-level entries are left out (see
    /// [`utils::is_blank`]), and an absent or scalar value gives an empty root element.
    pub fn synthesize_example(&self, schema: &Schema, value: Option<&Value>) -> XmlElement {
        let filtered = value
            .map(entries)
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| !utils::is_blank(entry.value))
            .collect();
        XmlElement::with_children(
            schema.element_name(),
            self.elements(filtered, Some(schema), None),
        )
    }

    fn elements<'s>(
        &'s self,
        members: Vec<Entry<'s>>,
        schema: Option<&'s Schema>,
        wrap_context: Option<&str>,
    ) -> Vec<XmlElement> {
        let mut elements = Vec::with_capacity(members.len());
        for entry in members {
            let raw = entry.key.raw();
            let positional = entry.key.is_positional();
            let name = match (positional, wrap_context) {
                (true, Some(wrap)) => wrap.to_string(),
                (true, None) => format!("{}{}", self.options.item_prefix, raw),
                (false, _) => raw.to_string(),
            };

            if !utils::is_composite(entry.value) {
                elements.push(match utils::scalar_text(entry.value) {
                    Some(text) => XmlElement::text(name, text),
                    None => XmlElement::new(name),
                });
                continue;
            }

            match find_property(schema, &raw) {
                Some(property) => {
                    self.property_elements(&mut elements, property, &raw, entry.value)
                }
                None => {
                    trace!(key = %raw, "No declared property, naming element after key");
                    let wrap = utils::singular(&name, &self.options.plural_suffix).to_string();
                    // members of a sequence are described by the sequence's schema
                    let item_schema = if positional { schema } else { None };
                    let children =
                        self.elements(entries(entry.value), item_schema, Some(wrap.as_str()));
                    elements.push(XmlElement::with_children(name, children));
                }
            }
        }
        elements
    }

    /// Appends the element(s) for a composite value described by `property`.
    fn property_elements<'s>(
        &'s self,
        elements: &mut Vec<XmlElement>,
        property: &'s Property,
        key: &str,
        value: &'s Value,
    ) {
        let hint = property.xml_hint();
        let name = hint
            .and_then(XmlHint::name)
            .unwrap_or(&property.property);
        let nested = self.nested_schema(property);

        if !hint.is_some_and(XmlHint::is_wrapped) {
            let children = self.elements(entries(value), nested, None);
            elements.push(XmlElement::with_children(name, children));
            return;
        }

        let suffix = &self.options.plural_suffix;
        let token = utils::singular(name, suffix);
        let members = unwrap_entries(value, token, utils::singular(key, suffix));
        let children = self.elements(members, nested, Some(token));
        if name == token && value.is_array() {
            // `<Tag><Tag>a</Tag></Tag>` says nothing `<Tag>a</Tag>` doesn't
            elements.extend(children);
        } else {
            elements.push(XmlElement::with_children(name, children));
        }
    }

    /// The schema describing a property's value, following `$ref` when a document is attached.
    fn nested_schema<'s>(&'s self, property: &'s Property) -> Option<&'s Schema> {
        match property.schema.as_ref()? {
            SchemaRef::Inline(schema) => Some(&**schema),
            SchemaRef::Reference { reference } => {
                let document = self.document?;
                match resolve_schema(reference, document) {
                    Ok(schema) => Some(schema),
                    Err(err) => {
                        trace!(
                            property = %property.property,
                            error = %err,
                            "Property schema not resolved"
                        );
                        None
                    }
                }
            }
        }
    }
}
