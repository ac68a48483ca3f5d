//! Violation-report normalization
//!
//! Converts the validator's ordered report into the flat field-to-message
//! map a form-display layer consumes. Pure and total: no input makes this
//! step fail, and the report is never mutated.

use std::collections::BTreeMap;

use crate::schema::ViolationReport;

/// Field identifier to a single display message, keys unique.
pub type FieldErrorMap = BTreeMap<String, String>;

/// Flattens a violation report into one message per field.
///
/// Entries are applied in report order, so if a field somehow appears
/// more than once the last entry wins. An empty report yields an empty
/// map. An empty field name is a programming error upstream; the report
/// shape itself cannot express anything else malformed.
pub fn field_error_map(report: &ViolationReport) -> FieldErrorMap {
    let mut errors = FieldErrorMap::new();

    for violation in report {
        debug_assert!(!violation.field.is_empty(), "violation without a field");
        errors.insert(violation.field.clone(), violation.message.clone());
    }

    errors
}
