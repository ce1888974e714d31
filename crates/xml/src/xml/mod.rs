//! Schema-directed XML synthesis.
//!
//! An example value is turned into markup in three steps:
//!
//! - [`synth`] walks the JSON-shaped value alongside its schema and builds an [`XmlElement`]
//!   tree, choosing element names from XML hints and unwrapping wrapped arrays
//! - [`tree`] serializes the tree through quick-xml, escaping text on the way out
//! - [`format`] reads the markup back and writes it again with a declaration and indentation
//!
//! ## Value ↔ XML Mapping
//!
//! | Value | XML |
//! |-------|-----|
//! | `{"name": "Rex"}` | `<name>Rex</name>` |
//! | `{"active": true}` | `<active>true</active>` |
//! | `{"tags": ["a", "b"]}` (no schema) | `<tags><tag>a</tag><tag>b</tag></tags>` |
//! | `["a", "b"]` (top level) | `<item0>a</item0><item1>b</item1>` |
//! | `{"tags": [{"tag": {...}}]}` (wrapped `tags`) | `<tags><tag>...</tag></tags>` |
//! | `{"note": null}` | `<note/>` |

pub mod format;
pub mod synth;
pub mod tree;
pub mod utils;

pub use format::{Formatter, format, format_str};
pub use synth::Synthesizer;
pub use tree::{Content, XmlElement, to_xml_string, to_xml_vec, to_xml_writer};
