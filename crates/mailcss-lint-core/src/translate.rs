//! Translation of raw diagnostics into the host vocabulary.

use crate::types::{RawDiagnostic, ReportedDiagnostic, Severity};

/// Maps a collaborator severity ordinal to the host vocabulary.
///
/// The defined set is 1 → Error, 2 → Warning, 3 → Information, 4 → Hint.
/// Any other value, including absent, maps to [`Severity::Error`]: a problem
/// of unknown severity is shown loudly rather than quietly hidden.
#[must_use]
pub fn map_severity(ordinal: Option<u8>) -> Severity {
    match ordinal {
        Some(2) => Severity::Warning,
        Some(3) => Severity::Information,
        Some(4) => Severity::Hint,
        _ => Severity::Error,
    }
}

/// Translates surviving diagnostics into host-displayable form, copying each
/// range unchanged and tagging each entry with [`crate::SOURCE_TAG`].
#[must_use]
pub fn translate(diagnostics: Vec<RawDiagnostic>) -> Vec<ReportedDiagnostic> {
    diagnostics
        .into_iter()
        .map(|diagnostic| {
            ReportedDiagnostic::new(
                diagnostic.range,
                diagnostic.message,
                map_severity(diagnostic.severity),
            )
        })
        .collect()
}
