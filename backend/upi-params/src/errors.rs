//! Error types for the parameter engine.

/// A single per-field validation failure.
///
/// Exactly one violation is reported per offending key; the constraint order
/// (max length, then pattern, then allowed values) decides which one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldViolation {
    #[error("{field} is required")]
    MissingRequired { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be {expected}")]
    BadFormat {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{field} must be one of: {}", .allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        allowed: &'static [&'static str],
    },
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fatal validation failure raised by the build path only; the advisory
/// [`validate`](crate::validate::validate) never errs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid UPI parameters: {}", summarize(.violations))]
pub struct ValidationError {
    /// The structured per-field failures, for programmatic inspection.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// The comma-joined human-readable summary.
    pub fn summary(&self) -> String {
        summarize(&self.violations)
    }
}

/// A URI that could not be accepted as a UPI link.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UriParseError {
    #[error("failed to parse UPI URI")]
    Malformed,
    #[error("unsupported URI scheme `{scheme}`, expected `upi`")]
    UnsupportedScheme { scheme: String },
    #[error("unrecognized UPI action `{action}`, expected `pay` or `mandate`")]
    UnrecognizedAction { action: String },
    #[error("UPI URI parameters failed validation: {summary}")]
    InvalidParameters { summary: String },
}
