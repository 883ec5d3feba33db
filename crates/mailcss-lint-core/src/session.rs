//! Per-document lint sessions.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::document::{Document, DocumentKey};
use crate::extract::extract_css;
use crate::heuristics::HeuristicSet;
use crate::translate::translate;
use crate::types::ReportedDiagnostic;
use crate::validator::{CssValidator, ValidationAdapter};

/// What a single validation pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassOutcome {
    /// The document is neither CSS nor HTML; nothing happened.
    SkippedContentType,
    /// A pass for a newer version of this document is already stored;
    /// this one was discarded.
    SkippedStale,
    /// No CSS could be extracted; any prior entry is left untouched.
    NoCss,
    /// The validation collaborator failed; the document's entry was
    /// replaced with an empty set. The next open/edit event retries.
    ValidatorFailed,
    /// The document's entry was replaced.
    Published {
        /// Diagnostics stored for the document.
        published: usize,
        /// Diagnostics dropped by suppression heuristics.
        suppressed: usize,
    },
}

/// One stored validation pass.
#[derive(Debug, Clone)]
struct StoredPass {
    version: u64,
    diagnostics: Vec<ReportedDiagnostic>,
}

/// Orchestrates extract → validate → filter → translate per document and
/// keeps the resulting diagnostics keyed by document identity.
///
/// Each pass fully replaces the stored entry for its document, never
/// appends. Passes for the same document are serialized by a version guard:
/// a pass whose originating version is older than the stored entry is
/// discarded, so out-of-order event delivery cannot resurface outdated
/// diagnostics. Re-running an identical version is allowed and idempotent.
#[derive(Debug)]
pub struct LintSession<V> {
    adapter: ValidationAdapter<V>,
    heuristics: HeuristicSet,
    store: HashMap<DocumentKey, StoredPass>,
}

impl<V: CssValidator> LintSession<V> {
    /// Creates a session around a validation backend, with no suppression
    /// heuristics.
    #[must_use]
    pub fn new(validator: V) -> Self {
        Self {
            adapter: ValidationAdapter::new(validator),
            heuristics: HeuristicSet::empty(),
            store: HashMap::new(),
        }
    }

    /// Replaces the heuristic set used by subsequent passes.
    #[must_use]
    pub fn with_heuristics(mut self, heuristics: HeuristicSet) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Runs one validation pass for `doc`.
    ///
    /// Degrades to a no-op rather than failing: unacceptable content types,
    /// stale versions, and extraction misses leave the store as it was, and
    /// a collaborator failure stores an empty entry for the pass.
    pub fn validate_document(&mut self, doc: &Document) -> PassOutcome {
        if !doc.content_type().is_lintable() {
            return PassOutcome::SkippedContentType;
        }

        if let Some(stored) = self.store.get(doc.key()) {
            if doc.version() < stored.version {
                debug!(
                    "Discarding stale pass for {} (v{} < stored v{})",
                    doc.key(),
                    doc.version(),
                    stored.version
                );
                return PassOutcome::SkippedStale;
            }
        }

        let Some(css) = extract_css(doc.text(), doc.content_type()) else {
            debug!("No CSS found in {}", doc.key());
            return PassOutcome::NoCss;
        };

        let raw = match self.adapter.validate(&css) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("Validation of {} failed: {}", doc.key(), error);
                self.replace(doc, Vec::new());
                return PassOutcome::ValidatorFailed;
            }
        };

        let found = raw.len();
        let kept = self.heuristics.filter(raw, &css);
        let suppressed = found - kept.len();
        let reported = translate(kept);
        let published = reported.len();

        info!(
            "{} v{}: {} diagnostic(s) published, {} suppressed",
            doc.key(),
            doc.version(),
            published,
            suppressed
        );
        self.replace(doc, reported);
        PassOutcome::Published {
            published,
            suppressed,
        }
    }

    /// Runs a validation pass for every document, in iteration order.
    ///
    /// Hosts use this on activation to cover documents that were already
    /// open before events started flowing.
    pub fn validate_all<'a, I>(&mut self, docs: I)
    where
        I: IntoIterator<Item = &'a Document>,
    {
        for doc in docs {
            self.validate_document(doc);
        }
    }

    /// Returns the diagnostics currently stored for a document.
    #[must_use]
    pub fn diagnostics(&self, key: &DocumentKey) -> Option<&[ReportedDiagnostic]> {
        self.store.get(key).map(|pass| pass.diagnostics.as_slice())
    }

    /// Returns the document version that produced the stored entry.
    #[must_use]
    pub fn stored_version(&self, key: &DocumentKey) -> Option<u64> {
        self.store.get(key).map(|pass| pass.version)
    }

    /// Returns the number of documents with a stored entry.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.store.len()
    }

    /// Releases every stored diagnostic set.
    ///
    /// Hosts call this on teardown so their problem display clears; the
    /// session remains usable afterwards.
    pub fn dispose(&mut self) {
        debug!("Disposing {} stored document(s)", self.store.len());
        self.store.clear();
    }

    fn replace(&mut self, doc: &Document, diagnostics: Vec<ReportedDiagnostic>) {
        self.store.insert(
            doc.key().clone(),
            StoredPass {
                version: doc.version(),
                diagnostics,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ContentType;
    use crate::heuristics::SuppressionRule;
    use crate::types::{Position, RawDiagnostic, Range, Severity};
    use crate::validator::ValidateError;

    /// Returns a scripted set of diagnostics for every call.
    struct ScriptedValidator(Vec<RawDiagnostic>);

    impl CssValidator for ScriptedValidator {
        fn validate(&self, _css: &str) -> Result<Vec<RawDiagnostic>, ValidateError> {
            Ok(self.0.clone())
        }
    }

    struct FailingValidator;

    impl CssValidator for FailingValidator {
        fn validate(&self, _css: &str) -> Result<Vec<RawDiagnostic>, ValidateError> {
            Err(ValidateError::Backend {
                message: "backend unavailable".to_string(),
            })
        }
    }

    fn diagnostic(line: usize, message: &str) -> RawDiagnostic {
        RawDiagnostic::new(
            Range::new(Position::new(line, 0), Position::new(line, 4)),
            message,
            Some(1),
        )
    }

    fn hack_set() -> HeuristicSet {
        HeuristicSet::new(vec![SuppressionRule::new(
            "yahoo-selector-hack",
            "identifier expected",
            ".&",
        )])
    }

    fn css_doc(version: u64, text: &str) -> Document {
        Document::new(
            DocumentKey::new("file:///styles.css"),
            ContentType::Css,
            version,
            text,
        )
    }

    #[test]
    fn other_content_type_is_a_no_op() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "x")]));
        let doc = Document::new(
            DocumentKey::new("file:///readme.md"),
            ContentType::Other,
            1,
            "# readme",
        );

        assert_eq!(
            session.validate_document(&doc),
            PassOutcome::SkippedContentType
        );
        assert_eq!(session.document_count(), 0);
    }

    #[test]
    fn pass_publishes_translated_diagnostics() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "colon expected")]));
        let doc = css_doc(1, ".a { color red }");

        let outcome = session.validate_document(&doc);
        assert_eq!(
            outcome,
            PassOutcome::Published {
                published: 1,
                suppressed: 0
            }
        );

        let stored = session.diagnostics(doc.key()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].severity, Severity::Error);
        assert_eq!(stored[0].source, crate::types::SOURCE_TAG);
    }

    #[test]
    fn heuristics_thin_the_published_set() {
        let mut session = LintSession::new(ScriptedValidator(vec![
            diagnostic(0, "identifier expected"),
            diagnostic(1, "colon expected"),
        ]))
        .with_heuristics(hack_set());
        let doc = css_doc(1, ".& .a {}\n.b { color red }");

        let outcome = session.validate_document(&doc);
        assert_eq!(
            outcome,
            PassOutcome::Published {
                published: 1,
                suppressed: 1
            }
        );
        assert_eq!(session.diagnostics(doc.key()).unwrap().len(), 1);
    }

    #[test]
    fn html_without_css_leaves_prior_entry_untouched() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "kept")]));
        let key = DocumentKey::new("file:///mail.html");
        let with_style = Document::new(
            key.clone(),
            ContentType::Html,
            1,
            "<style>.a {}</style>",
        );
        let without_style = Document::new(key.clone(), ContentType::Html, 2, "<p>plain</p>");

        session.validate_document(&with_style);
        assert_eq!(session.diagnostics(&key).unwrap().len(), 1);

        assert_eq!(session.validate_document(&without_style), PassOutcome::NoCss);
        assert_eq!(session.diagnostics(&key).unwrap().len(), 1);
        assert_eq!(session.stored_version(&key), Some(1));
    }

    #[test]
    fn repeated_pass_is_idempotent() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "colon expected")]));
        let doc = css_doc(3, ".a { color red }");

        let first = session.validate_document(&doc);
        let stored_first = session.diagnostics(doc.key()).unwrap().to_vec();
        let second = session.validate_document(&doc);
        let stored_second = session.diagnostics(doc.key()).unwrap().to_vec();

        assert_eq!(first, second);
        assert_eq!(stored_first, stored_second);
        assert_eq!(session.document_count(), 1);
    }

    #[test]
    fn stale_pass_is_discarded() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "old problem")]));
        let newer = css_doc(2, ".a {}");
        let older = css_doc(1, ".a { color red }");

        session.validate_document(&newer);
        // The v1 pass completes after v2 was stored; it must not win.
        assert_eq!(session.validate_document(&older), PassOutcome::SkippedStale);
        assert_eq!(session.stored_version(newer.key()), Some(2));
    }

    #[test]
    fn validator_failure_stores_an_empty_entry() {
        let mut session = LintSession::new(FailingValidator);
        let doc = css_doc(1, ".a {}");

        assert_eq!(
            session.validate_document(&doc),
            PassOutcome::ValidatorFailed
        );
        assert_eq!(session.diagnostics(doc.key()), Some(&[][..]));
        assert_eq!(session.stored_version(doc.key()), Some(1));
    }

    #[test]
    fn validate_all_sweeps_every_document() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "x")]));
        let docs = vec![
            css_doc(1, ".a {}"),
            Document::new(
                DocumentKey::new("file:///mail.html"),
                ContentType::Html,
                1,
                "<style>.b {}</style>",
            ),
            Document::new(
                DocumentKey::new("file:///notes.txt"),
                ContentType::Other,
                1,
                "notes",
            ),
        ];

        session.validate_all(&docs);
        assert_eq!(session.document_count(), 2);
    }

    #[test]
    fn dispose_releases_the_store() {
        let mut session = LintSession::new(ScriptedValidator(vec![diagnostic(0, "x")]));
        let doc = css_doc(1, ".a {}");
        session.validate_document(&doc);
        assert_eq!(session.document_count(), 1);

        session.dispose();
        assert_eq!(session.document_count(), 0);
        assert_eq!(session.diagnostics(doc.key()), None);
    }
}
