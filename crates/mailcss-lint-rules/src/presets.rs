//! Heuristic presets for common configurations.

use mailcss_lint_core::{HeuristicSet, SuppressionRule};

use crate::yahoo_selector_hack::yahoo_selector_hack;

/// Returns the recommended heuristic set.
///
/// Includes:
/// - `yahoo-selector-hack` - drops "identifier expected" errors on lines
///   carrying the Yahoo Mail `.&` prefix
#[must_use]
pub fn recommended() -> HeuristicSet {
    HeuristicSet::new(all_rules())
}

/// Returns every built-in suppression rule, in evaluation order.
#[must_use]
pub fn all_rules() -> Vec<SuppressionRule> {
    vec![yahoo_selector_hack()]
}
