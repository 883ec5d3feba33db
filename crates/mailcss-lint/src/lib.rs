//! # mailcss-lint
//!
//! Email-aware CSS linting: validates CSS embedded in documents and
//! suppresses the false positives that email-client selector hacks provoke
//! in generic CSS validators.
//!
//! This is the main facade crate, re-exporting the core pipeline and the
//! built-in heuristics.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mailcss_lint::{recommended_session, Document, DocumentKey, ContentType};
//!
//! // `validator` is the host's CSS validation capability.
//! let mut session = recommended_session(validator);
//!
//! let doc = Document::new(
//!     DocumentKey::new("file:///newsletter.html"),
//!     ContentType::Html,
//!     1,
//!     html_text,
//! );
//! session.validate_document(&doc);
//!
//! for diagnostic in session.diagnostics(doc.key()).unwrap_or_default() {
//!     // render problem markers
//! }
//! ```
//!
//! ## Custom Heuristics
//!
//! Suppression rules are data; hosts can extend the built-in set or load
//! their own from TOML:
//!
//! ```ignore
//! let heuristics = HeuristicSet::from_toml(toml_text)?;
//! let session = LintSession::new(validator).with_heuristics(heuristics);
//! ```

#![forbid(unsafe_code)]

// Re-export core types and pipeline stages
pub use mailcss_lint_core::*;

/// Built-in heuristics and presets.
pub mod rules {
    pub use mailcss_lint_rules::*;
}

/// Creates a lint session wired with the recommended heuristic set.
#[must_use]
pub fn recommended_session<V: CssValidator>(validator: V) -> LintSession<V> {
    LintSession::new(validator).with_heuristics(rules::presets::recommended())
}
