//! # apidoc-xml
//!
//! Renders the examples of XML media types in an API description document.
//!
//! API descriptions usually carry examples as JSON-shaped values. For a media type such as
//! `application/xml` this crate builds the matching XML text from the example value and the
//! schema's XML hints, then stores it back into the document graph so the example shows real
//! markup.
//!
//! ## Features
//!
//! - **Synthesis**: [`Synthesizer`] maps objects, arrays and scalars onto an element tree,
//!   honouring `xml.name` and `xml.wrapped` hints on schemas and properties.
//! - **Formatting**: [`Formatter`] writes a declaration, indents nested elements and collapses
//!   empty ones, and is idempotent.
//! - **Augmentation**: [`augment`] finds every qualifying media type in a [`DocumentRoot`],
//!   resolves its schema and example references and rewrites the entries in place.
//!
//! ## Examples
//!
//! ```
//! use apidoc_graph::{
//!     DocumentRoot, Example, ExampleEntry, MediaType, Member, Property, Schema, SchemaRef,
//! };
//! use apidoc_xml::augment;
//! use serde_json::json;
//!
//! let mut doc = DocumentRoot::new();
//! doc.insert(
//!     &["components", "schemas"],
//!     Member::Schema(Schema::new("Pet").with_property(Property::new("name"))),
//! )
//! .insert(
//!     &["components", "examples"],
//!     Member::Example(Example::new("dog", json!({"name": "Rex"}))),
//! )
//! .insert(
//!     &["paths", "/pets", "content"],
//!     Member::MediaType(
//!         MediaType::new("application/xml")
//!             .with_schema(SchemaRef::reference("#/components/schemas/Pet"))
//!             .with_example("dog", ExampleEntry::reference("#/components/examples/dog")),
//!     ),
//! );
//!
//! let report = augment(&mut doc);
//! assert_eq!(report.rendered, 1);
//!
//! let entry = &doc.media_types()[0].examples["dog"];
//! assert_eq!(
//!     entry.value.as_ref().and_then(|v| v.as_str()),
//!     Some("<?xml version=\"1.0\"?>\n<Pet>\n  <name>Rex</name>\n</Pet>\n")
//! );
//! ```
//!
//! [`DocumentRoot`]: apidoc_graph::DocumentRoot

pub mod augment;
pub mod config;
pub mod error;
pub mod xml;

pub use augment::{AugmentReport, MediaTypeAugmentor, SkippedExample, augment, augment_with};
pub use config::{AugmentOptions, XML_MEDIA_TYPE};
pub use error::{Result, XmlError};
pub use xml::{Content, Formatter, Synthesizer, XmlElement, format, format_str};
