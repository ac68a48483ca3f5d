//! Validation failure types
//!
//! A failed pass produces one `ValidationFailure` carrying an ordered
//! `ViolationReport`: one `(field, message)` entry per failed field.
//! Failures are recovered locally by the submission layer and converted
//! into per-field display errors; they are never surfaced raw.

use std::fmt;

use thiserror::Error;

use super::types::required_message;

/// A single failed constraint: the field that broke it and the message
/// to show next to that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field identifier as declared by the schema
    pub field: String,
    /// Human-readable message for the form-display layer
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Violation for a missing or empty required field
    pub fn required(field: &str) -> Self {
        Self::new(field, required_message(field))
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of violations from one validation pass.
///
/// Order follows schema declaration order; a field appears at most once.
pub type ViolationReport = Vec<Violation>;

/// Validation failure carrying the full report of a collect-all pass.
#[derive(Debug, Clone, Error)]
#[error("validation failed with {} violation(s)", .report.len())]
pub struct ValidationFailure {
    /// Every failed field from the pass, in schema order
    pub report: ViolationReport,
}

impl ValidationFailure {
    pub fn new(report: ViolationReport) -> Self {
        Self { report }
    }

    /// Failure with a single violation
    pub fn single(violation: Violation) -> Self {
        Self::new(vec![violation])
    }

    /// The violations from this pass, in schema order
    pub fn report(&self) -> &ViolationReport {
        &self.report
    }

    /// Whether some field failed with exactly this message
    pub fn contains(&self, field: &str, message: &str) -> bool {
        self.report
            .iter()
            .any(|v| v.field == field && v.message == message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_violation_message() {
        let v = Violation::required("description");
        assert_eq!(v.field, "description");
        assert_eq!(v.message, "description is required");
    }

    #[test]
    fn test_failure_display_counts_violations() {
        let failure = ValidationFailure::new(vec![
            Violation::required("name"),
            Violation::required("image"),
        ]);
        assert_eq!(failure.to_string(), "validation failed with 2 violation(s)");
    }

    #[test]
    fn test_contains() {
        let failure = ValidationFailure::single(Violation::required("name"));
        assert!(failure.contains("name", "name is required"));
        assert!(!failure.contains("name", "name must be a valid URL"));
    }
}
