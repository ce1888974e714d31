//! # apidoc-graph
//!
//! The annotation graph of an API description document, and the `#/...` reference resolver
//! that walks it.
//!
//! The graph is a closed set of node kinds ([`Schema`], [`Property`], [`Example`],
//! [`MediaType`]) held in named collections under a [`DocumentRoot`]. Every field that a
//! document may leave out is an `Option`, so sparse documents read fine and lookups degrade to
//! "not found" instead of failing.
//!
//! ```
//! use apidoc_graph::{DocumentRoot, Selector, resolve, resolve_schema};
//! use serde_json::json;
//!
//! let doc = DocumentRoot::from_json(json!({
//!     "components": {
//!         "schemas": [{"kind": "schema", "name": "Pet", "xml": {"name": "pet"}}]
//!     }
//! }))
//! .unwrap();
//!
//! let pet = resolve_schema("#/components/schemas/Pet", &doc).unwrap();
//! assert_eq!(pet.element_name(), "pet");
//! assert!(resolve("#/components/examples/dog", &doc, Selector::Node).is_none());
//! ```

pub mod document;
pub mod error;
pub mod hint;
pub mod nodes;
pub mod reference;

pub use document::{DocumentRoot, Member, Node};
pub use error::{GraphError, Result};
pub use hint::{HintBlock, XmlHint};
pub use nodes::{Example, ExampleEntry, MediaType, Property, Schema, SchemaRef, find_property};
pub use reference::{
    FieldValue, Reference, Resolved, Selector, resolve, resolve_example, resolve_schema,
    try_resolve,
};
