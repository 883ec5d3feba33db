//! Validation collaborator boundary.
//!
//! The core never parses CSS itself. Hosts plug a validation capability in
//! behind [`CssValidator`]; the adapter in front of it keeps the filter and
//! translator testable independent of any concrete backend.

use thiserror::Error;

use crate::types::{Position, RawDiagnostic};

/// Errors surfaced at the validation boundary.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The validation backend failed outright.
    #[error("css validation backend failed: {message}")]
    Backend {
        /// Backend-reported failure description.
        message: String,
    },

    /// The backend returned a diagnostic whose range end precedes its start.
    #[error("validator returned malformed diagnostic: end {end:?} precedes start {start:?}")]
    Malformed {
        /// Reported range start.
        start: Position,
        /// Reported range end.
        end: Position,
    },
}

/// An external CSS validation capability.
///
/// Given CSS text, implementations return zero or more diagnostics with
/// position ranges relative to that text.
pub trait CssValidator: Send + Sync {
    /// Validates CSS text, returning raw diagnostics in source order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Backend`] when the capability fails.
    fn validate(&self, css: &str) -> Result<Vec<RawDiagnostic>, ValidateError>;
}

/// Pass-through boundary in front of a [`CssValidator`].
///
/// Performs no interpretation of diagnostics. Empty input short-circuits to
/// an empty result without invoking the backend, and malformed backend
/// output is rejected before it reaches downstream stages.
#[derive(Debug)]
pub struct ValidationAdapter<V> {
    backend: V,
}

impl<V: CssValidator> ValidationAdapter<V> {
    /// Wraps a validation backend.
    #[must_use]
    pub fn new(backend: V) -> Self {
        Self { backend }
    }

    /// Runs validation on extracted CSS text.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Backend`] when the backend fails and
    /// [`ValidateError::Malformed`] when it reports an inverted range.
    pub fn validate(&self, css: &str) -> Result<Vec<RawDiagnostic>, ValidateError> {
        if css.is_empty() {
            return Ok(Vec::new());
        }

        let diagnostics = self.backend.validate(css)?;
        for diagnostic in &diagnostics {
            if !diagnostic.range.is_ordered() {
                return Err(ValidateError::Malformed {
                    start: diagnostic.range.start,
                    end: diagnostic.range.end,
                });
            }
        }
        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Range;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingValidator {
        calls: AtomicUsize,
        result: Vec<RawDiagnostic>,
    }

    impl CountingValidator {
        fn returning(result: Vec<RawDiagnostic>) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result,
            }
        }
    }

    impl CssValidator for CountingValidator {
        fn validate(&self, _css: &str) -> Result<Vec<RawDiagnostic>, ValidateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.result.clone())
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

    #[test]
    fn empty_input_short_circuits_without_invoking_backend() {
        let backend = CountingValidator::returning(vec![diagnostic(0, "should not surface")]);
        let adapter = ValidationAdapter::new(backend);

        let result = adapter.validate("").unwrap();
        assert!(result.is_empty());
        assert_eq!(adapter.backend.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn diagnostics_pass_through_unchanged() {
        let expected = vec![diagnostic(0, "a"), diagnostic(2, "b")];
        let adapter = ValidationAdapter::new(CountingValidator::returning(expected.clone()));

        let result = adapter.validate(".a {}").unwrap();
        assert_eq!(result, expected);
        assert_eq!(adapter.backend.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backend_failure_propagates() {
        let adapter = ValidationAdapter::new(FailingValidator);
        let result = adapter.validate(".a {}");
        assert!(matches!(result, Err(ValidateError::Backend { .. })));
    }

    #[test]
    fn inverted_range_is_rejected_as_malformed() {
        let inverted = RawDiagnostic::new(
            Range::new(Position::new(3, 0), Position::new(1, 0)),
            "backwards",
            Some(1),
        );
        let adapter = ValidationAdapter::new(CountingValidator::returning(vec![inverted]));

        let result = adapter.validate(".a {}");
        assert!(matches!(result, Err(ValidateError::Malformed { .. })));
    }
}
