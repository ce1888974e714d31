//! Error types for the document graph.
//!
//! Nothing in this crate fails hard on sparse input. These variants exist so that
//! callers can tell *why* a lookup came back empty (for diagnostics and logging)
//! even though the augmentation pass treats every case as "skip".

use thiserror::Error;

/// Signals raised while reading the document graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The string does not follow the `#/segment/.../name` grammar.
    #[error("`{0}` is not a document reference")]
    NotAReference(String),

    /// The reference is well formed but nothing in the document matches it.
    #[error("reference `{0}` could not be resolved")]
    ReferenceNotResolved(String),

    /// The reference resolved to a node of a different kind than requested.
    #[error("reference `{reference}` resolved to a {found} node, expected a {expected} node")]
    UnexpectedNode {
        /// The reference string that was resolved.
        reference: String,
        /// Kind of node the caller asked for.
        expected: &'static str,
        /// Kind of node that was found.
        found: &'static str,
    },

    /// An `xml` hint block is present but not shaped like `{name?, wrapped?}`.
    #[error("malformed xml hint on `{owner}`: {detail}")]
    MalformedXmlHint {
        /// Name of the schema or property carrying the hint.
        owner: String,
        /// The offending block, rendered as JSON.
        detail: String,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
