//! The Yahoo Mail `.&` selector hack.
//!
//! Yahoo Mail's CSS parser gives selectors prefixed with `.&` special
//! meaning, so email authors write rules like
//!
//! ```css
//! .& .promo-banner { display: none; }
//! ```
//!
//! to target Yahoo Mail specifically. Standard CSS grammars reject `&` at
//! that position with an "identifier expected" class of error.

use mailcss_lint_core::SuppressionRule;

/// Rule name for the Yahoo Mail selector hack.
pub const NAME: &str = "yahoo-selector-hack";

/// Message fragment the generic CSS grammar emits for a `.&` selector.
const MESSAGE_FRAGMENT: &str = "identifier expected";

/// Line marker of the hack.
const LINE_MARKER: &str = ".&";

/// Builds the suppression rule for the Yahoo Mail `.&` selector hack.
///
/// Drops diagnostics whose message contains "identifier expected" when the
/// source line they point at contains `.&`. The match is textual; an
/// unrelated identifier error sharing a line with a `.&` selector is
/// suppressed too.
#[must_use]
pub fn yahoo_selector_hack() -> SuppressionRule {
    SuppressionRule::new(NAME, MESSAGE_FRAGMENT, LINE_MARKER)
}
