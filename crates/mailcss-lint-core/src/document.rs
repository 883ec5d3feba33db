//! Document abstraction provided by the host.
//!
//! The host owns document lifecycle and content; the core only reads a
//! snapshot per validation pass.

use std::fmt;

/// Stable identity of a host document, typically its URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Creates a new document key.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content type tag of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// A pure CSS document.
    Css,
    /// An HTML document that may embed inline style blocks.
    Html,
    /// Anything else; never validated.
    Other,
}

impl ContentType {
    /// Parses a host language identifier, case-insensitively.
    ///
    /// Unrecognized identifiers map to [`ContentType::Other`].
    #[must_use]
    pub fn from_language_id(id: &str) -> Self {
        match id.to_ascii_lowercase().as_str() {
            "css" => Self::Css,
            "html" => Self::Html,
            _ => Self::Other,
        }
    }

    /// Returns true for content types a validation pass accepts.
    #[must_use]
    pub fn is_lintable(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A read-only snapshot of a host document.
///
/// The version counter increases monotonically per edit; it drives the
/// per-document ordering guard in the session.
#[derive(Debug, Clone)]
pub struct Document {
    key: DocumentKey,
    content_type: ContentType,
    version: u64,
    text: String,
}

impl Document {
    /// Creates a new document snapshot.
    #[must_use]
    pub fn new(
        key: DocumentKey,
        content_type: ContentType,
        version: u64,
        text: impl Into<String>,
    ) -> Self {
        Self {
            key,
            content_type,
            version,
            text: text.into(),
        }
    }

    /// Returns the document identity.
    #[must_use]
    pub fn key(&self) -> &DocumentKey {
        &self.key
    }

    /// Returns the content type tag.
    #[must_use]
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Returns the edit version this snapshot was taken at.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the full document text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
