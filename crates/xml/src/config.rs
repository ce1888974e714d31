//! Options for XML example rendering.
//!
//! Every field has a default matching the behaviour annotation processors expect, so a
//! partial configuration block is enough:
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `media_type` | `application/xml` | Media type whose examples are rendered |
//! | `item_prefix` | `item` | Element name prefix for unnamed sequence members (`item0`, `item1`, ...) |
//! | `plural_suffix` | `s` | Suffix stripped to get an element's singular form |
//! | `declaration` | `true` | Emit `<?xml version="1.0"?>` before the root element |
//! | `indent` | `2` | Spaces per nesting level |
//!
//! # Example
//!
//! ```rust
//! use apidoc_xml::AugmentOptions;
//!
//! let options: AugmentOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
//! assert_eq!(options.media_type, "application/xml");
//!
//! let options = AugmentOptions::default().with_media_type("text/xml");
//! assert_eq!(options.indent, 2);
//! ```

use serde::{Deserialize, Serialize};

/// Media type whose examples are rendered by default.
pub const XML_MEDIA_TYPE: &str = "application/xml";

/// Rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentOptions {
    /// Media type identifier a descriptor must carry, compared exactly.
    pub media_type: String,

    /// Prefix for elements made from sequence indices when no wrap token applies.
    pub item_prefix: String,

    /// Plural marker stripped to derive wrap tokens.
    ///
    /// This is a naive suffix heuristic (`tags` → `tag`, but `boxes` → `boxe`). It is kept
    /// because rendered examples depend on it; a real inflector would need to be opt-in.
    pub plural_suffix: String,

    /// Whether formatted output starts with an XML declaration.
    pub declaration: bool,

    /// Indentation width in spaces.
    pub indent: usize,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            media_type: XML_MEDIA_TYPE.to_string(),
            item_prefix: "item".to_string(),
            plural_suffix: "s".to_string(),
            declaration: true,
            indent: 2,
        }
    }
}

impl AugmentOptions {
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = media_type.into();
        self
    }

    pub fn with_item_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.item_prefix = prefix.into();
        self
    }

    pub fn with_plural_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.plural_suffix = suffix.into();
        self
    }

    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
