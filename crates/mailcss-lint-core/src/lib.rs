//! # mailcss-lint-core
//!
//! Diagnostics filtering for CSS embedded in email-authoring documents.
//!
//! A generic CSS validator flags the selector hacks email authors write on
//! purpose (the Yahoo Mail `.&` prefix, for one) as syntax errors. This
//! crate sits between such a validator and a host editor's problem display
//! and runs, per document:
//!
//! extract → validate → filter → translate → store
//!
//! - [`extract_css`] pulls CSS out of CSS or HTML documents
//! - [`CssValidator`] is the pluggable validation collaborator, behind
//!   [`ValidationAdapter`]
//! - [`HeuristicSet`] drops diagnostics matching known-benign authoring
//!   conventions
//! - [`translate`] maps severities into the host vocabulary and tags the
//!   linter source
//! - [`LintSession`] composes the stages and stores results keyed by
//!   document identity, replacing the prior entry per pass
//!
//! Built-in heuristics live in the `mailcss-lint-rules` crate; this crate
//! also loads heuristic tables from TOML via [`HeuristicSet::from_toml`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod document;
mod extract;
mod heuristics;
mod session;
mod translate;
mod types;
mod validator;

pub use config::ConfigError;
pub use document::{ContentType, Document, DocumentKey};
pub use extract::extract_css;
pub use heuristics::{HeuristicSet, SuppressionRule};
pub use session::{LintSession, PassOutcome};
pub use translate::{map_severity, translate};
pub use types::{
    DisplayDiagnostic, Position, Range, RawDiagnostic, ReportedDiagnostic, Severity, SOURCE_TAG,
};
pub use validator::{CssValidator, ValidateError, ValidationAdapter};
