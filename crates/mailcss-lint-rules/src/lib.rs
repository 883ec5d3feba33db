//! # mailcss-lint-rules
//!
//! Built-in suppression heuristics for mailcss-lint.
//!
//! Each rule names one email-CSS authoring convention that generic CSS
//! validators flag as a syntax error.
//!
//! ## Available Rules
//!
//! | Name | Description |
//! |------|-------------|
//! | `yahoo-selector-hack` | Keeps `.&`-prefixed selectors targeting Yahoo Mail |
//!
//! ## Usage
//!
//! ```ignore
//! use mailcss_lint_core::LintSession;
//! use mailcss_lint_rules::presets;
//!
//! let session = LintSession::new(validator).with_heuristics(presets::recommended());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod yahoo_selector_hack;

pub mod presets;

pub use yahoo_selector_hack::{yahoo_selector_hack, NAME as YAHOO_SELECTOR_HACK};
