//! Suppression heuristics for email-CSS authoring conventions.
//!
//! Email authors write selector hacks on purpose; standard CSS grammars flag
//! them as invalid. Each heuristic names one such convention as a pair of
//! substring predicates: one over the diagnostic message, one over the
//! source line the diagnostic points at. Matching is textual, not semantic:
//! it can both under- and over-suppress, trading precision for simplicity.

use tracing::debug;

use crate::types::RawDiagnostic;

/// One named suppression heuristic: a (message predicate, line predicate)
/// pair. A diagnostic is suppressed when both substrings are present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionRule {
    name: String,
    message_contains: String,
    line_contains: String,
}

impl SuppressionRule {
    /// Creates a named suppression pair.
    ///
    /// An empty pattern is a substring of every string and therefore matches
    /// unconditionally; [`HeuristicSet::from_toml`] rejects empty patterns
    /// at load time.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        message_contains: impl Into<String>,
        line_contains: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            message_contains: message_contains.into(),
            line_contains: line_contains.into(),
        }
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message substring predicate.
    #[must_use]
    pub fn message_contains(&self) -> &str {
        &self.message_contains
    }

    /// Returns the source-line substring predicate.
    #[must_use]
    pub fn line_contains(&self) -> &str {
        &self.line_contains
    }

    /// Tests whether this rule suppresses a diagnostic with `message`
    /// pointing at source `line`. Case-sensitive on both sides.
    #[must_use]
    pub fn matches(&self, message: &str, line: &str) -> bool {
        message.contains(&self.message_contains) && line.contains(&self.line_contains)
    }
}

/// An ordered set of suppression rules evaluated with OR semantics: a
/// diagnostic is dropped as soon as any rule matches it.
#[derive(Debug, Clone, Default)]
pub struct HeuristicSet {
    rules: Vec<SuppressionRule>,
}

impl HeuristicSet {
    /// Creates a heuristic set from rules, preserving their order.
    #[must_use]
    pub fn new(rules: Vec<SuppressionRule>) -> Self {
        Self { rules }
    }

    /// Creates a set with no rules; every diagnostic passes through.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the set holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[SuppressionRule] {
        &self.rules
    }

    /// Appends a rule, evaluated after all existing ones.
    pub fn push(&mut self, rule: SuppressionRule) {
        self.rules.push(rule);
    }

    /// Returns the diagnostics no rule suppresses, in input order.
    ///
    /// The source line for each diagnostic is looked up by its zero-based
    /// start line in `css_text` split on `\n`; the split happens once per
    /// call. Lines past the end of the text read as empty.
    #[must_use]
    pub fn filter(&self, diagnostics: Vec<RawDiagnostic>, css_text: &str) -> Vec<RawDiagnostic> {
        if self.rules.is_empty() {
            return diagnostics;
        }

        let lines: Vec<&str> = css_text.split('\n').collect();
        diagnostics
            .into_iter()
            .filter(|diagnostic| match self.suppressed_by(diagnostic, &lines) {
                Some(rule) => {
                    debug!(
                        "Suppressed by {}: line {}: {}",
                        rule.name(),
                        diagnostic.range.start.line,
                        diagnostic.message
                    );
                    false
                }
                None => true,
            })
            .collect()
    }

    fn suppressed_by(
        &self,
        diagnostic: &RawDiagnostic,
        lines: &[&str],
    ) -> Option<&SuppressionRule> {
        let line = lines
            .get(diagnostic.range.start.line)
            .copied()
            .unwrap_or("");
        self.rules
            .iter()
            .find(|rule| rule.matches(&diagnostic.message, line))
    }
}
