//! Form-state holder
//!
//! The per-form mutable state an event-driven UI would own: current raw
//! field values, the per-field error display, and whether the form is
//! still open. Only the owning form session writes the error display.

use serde_json::Value;

use crate::schema::RawRecord;

use super::normalize::FieldErrorMap;

/// Current values and error display of one open form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: RawRecord,
    errors: FieldErrorMap,
    closed: bool,
}

impl FormState {
    /// Fresh, open form with no values and no errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Open form pre-filled with initial values (an edit form)
    pub fn with_values(values: RawRecord) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Set a field's current value
    pub fn set_value(&mut self, field: &str, value: impl Into<Value>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Snapshot of the current raw field values
    pub fn values(&self) -> &RawRecord {
        &self.values
    }

    /// Replace the error display wholesale.
    ///
    /// Fields absent from the map lose any previous error, so applying a
    /// fresh map also clears stale annotations.
    pub fn set_field_errors(&mut self, errors: FieldErrorMap) {
        self.errors = errors;
    }

    /// Drop every field error
    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Message currently displayed for a field, if any
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// The full error display
    pub fn errors(&self) -> &FieldErrorMap {
        &self.errors
    }

    /// Whether any field is currently annotated
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Mark the form closed (modal dismissed)
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Whether the form is still open
    pub fn is_open(&self) -> bool {
        !self.closed
    }
}
