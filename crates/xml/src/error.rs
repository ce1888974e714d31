use apidoc_graph::GraphError;
use thiserror::Error;

/// Error types for XML rendering.
#[derive(Debug, Error)]
pub enum XmlError {
    /// Markup could not be read back or written
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error while writing markup
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered bytes were not valid UTF-8
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An entity reference other than the five predefined ones
    #[error("unknown entity reference `&{0};`")]
    UnknownEntity(String),

    /// A document reference could not be followed
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for XML rendering operations
pub type Result<T> = std::result::Result<T, XmlError>;
