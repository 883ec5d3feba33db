//! Core types for diagnostics flowing through the filter pipeline.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Source tag attached to every reported diagnostic.
///
/// Distinct from the host's generic `css`/`html` diagnostic sources, so a
/// host can tell this linter's output apart from the diagnostics it
/// suppresses on its own side.
pub const SOURCE_TAG: &str = "mailcss-lint";

/// A zero-based line/character position within the extracted CSS text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (0-indexed).
    pub line: usize,
    /// Character offset within the line (0-indexed).
    pub character: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A position range (`start..end`) within the extracted CSS text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// Range start (inclusive).
    pub start: Position,
    /// Range end (exclusive).
    pub end: Position,
}

impl Range {
    /// Creates a new range.
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns true if the end does not precede the start.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }
}

/// A diagnostic as produced by the validation collaborator.
///
/// Immutable once produced; the filter drops whole diagnostics, never edits
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDiagnostic {
    /// Position range relative to the validated CSS text.
    pub range: Range,
    /// Human-readable message.
    pub message: String,
    /// Severity ordinal as reported by the collaborator (1..=4 defined;
    /// anything else is unknown).
    pub severity: Option<u8>,
}

impl RawDiagnostic {
    /// Creates a new raw diagnostic.
    #[must_use]
    pub fn new(range: Range, message: impl Into<String>, severity: Option<u8>) -> Self {
        Self {
            range,
            message: message.into(),
            severity,
        }
    }
}

/// Severity in the host's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A problem that must be fixed.
    Error,
    /// A problem that should be addressed.
    Warning,
    /// Informational message.
    Information,
    /// Editor hint.
    Hint,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Information => write!(f, "information"),
            Self::Hint => write!(f, "hint"),
        }
    }
}

/// A diagnostic translated into host-displayable form.
///
/// This is the unit stored per document and read by the host to render
/// problem markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedDiagnostic {
    /// Position range, copied unchanged from the raw diagnostic.
    pub range: Range,
    /// Human-readable message.
    pub message: String,
    /// Translated severity.
    pub severity: Severity,
    /// Source tag, always [`SOURCE_TAG`] for diagnostics from this linter.
    pub source: String,
}

impl ReportedDiagnostic {
    /// Creates a reported diagnostic tagged with [`SOURCE_TAG`].
    #[must_use]
    pub fn new(range: Range, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            range,
            message: message.into(),
            severity,
            source: SOURCE_TAG.to_string(),
        }
    }
}

/// Renders a [`ReportedDiagnostic`] as a miette Diagnostic.
///
/// For hosts that display problems in a terminal with source snippets
/// rather than through an editor's marker UI.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct DisplayDiagnostic {
    message: String,
    #[label("{severity}")]
    span: SourceSpan,
    severity: String,
}

impl DisplayDiagnostic {
    /// Builds a renderable diagnostic from a reported one and the CSS text
    /// its range refers to.
    #[must_use]
    pub fn new(diagnostic: &ReportedDiagnostic, css_text: &str) -> Self {
        let start = byte_offset(css_text, diagnostic.range.start);
        let end = byte_offset(css_text, diagnostic.range.end).max(start);
        Self {
            message: diagnostic.message.clone(),
            span: SourceSpan::from((start, end - start)),
            severity: diagnostic.severity.to_string(),
        }
    }
}

/// Byte offset of a zero-based line/character position within `text`.
///
/// Positions past the end of a line clamp to the line length; positions past
/// the last line clamp to the text length.
fn byte_offset(text: &str, position: Position) -> usize {
    let mut offset = 0;
    for (i, line) in text.split('\n').enumerate() {
        if i == position.line {
            return offset + position.character.min(line.len());
        }
        offset += line.len() + 1;
    }
    text.len()
}
