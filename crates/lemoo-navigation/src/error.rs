//! Error types for navigation file handling.

use std::path::PathBuf;

/// Error while loading or saving a navigation file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CodecError {
    /// Navigation file does not exist.
    #[error("navigation file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Document has no usable root element.
    #[error("malformed navigation file: {0}")]
    Malformed(String),

    /// XML syntax error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    /// Whether the error means the file is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
