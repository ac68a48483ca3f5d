//! Collect-all validator for raw form records
//!
//! Validation semantics:
//! - Every declared field is evaluated on every pass
//! - All violations are accumulated into one report (never fail-fast);
//!   the form layer must be able to highlight every invalid field at once
//! - At most one violation per field: presence is checked first, then the
//!   field's kind constraint
//! - A missing key, an explicit null, and an empty string all count as
//!   absent and report "required"
//! - Validation is deterministic and does not mutate the raw record
//!
//! On success the validator returns a [`NormalizedRecord`]: identical to
//! the input except that a price supplied as a numeric string has been
//! coerced to a number. Undeclared keys (for example `id` or `available`
//! merged in by a caller) are dropped from the normalized record.

use serde_json::{Map, Number, Value};
use url::Url;

use super::errors::{ValidationFailure, Violation};
use super::types::{FieldDef, FieldKind, Schema};

/// Raw field values as held by a form: field identifier to the current
/// string or number value.
pub type RawRecord = Map<String, Value>;

/// Output of a successful validation pass.
///
/// Contains exactly the declared fields, each well-typed for its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRecord {
    record: Map<String, Value>,
}

impl NormalizedRecord {
    fn new(record: Map<String, Value>) -> Self {
        Self { record }
    }

    /// Text value of a field, if present
    pub fn text(&self, field: &str) -> Option<&str> {
        self.record.get(field).and_then(Value::as_str)
    }

    /// Numeric value of a field, if present
    pub fn number(&self, field: &str) -> Option<f64> {
        self.record.get(field).and_then(Value::as_f64)
    }

    /// Whether the record carries this field
    pub fn contains(&self, field: &str) -> bool {
        self.record.contains_key(field)
    }

    /// The underlying normalized key/value map
    pub fn into_inner(self) -> Map<String, Value> {
        self.record
    }
}

/// Validates a raw record against a schema, collecting all violations.
///
/// # Errors
///
/// Returns `ValidationFailure` carrying one violation per failed field,
/// in schema declaration order.
pub fn validate(schema: &Schema, raw: &RawRecord) -> Result<NormalizedRecord, ValidationFailure> {
    let mut record = Map::new();
    let mut report = Vec::new();

    for def in schema.fields() {
        match check_field(def, raw.get(def.name)) {
            Ok(Some(value)) => {
                record.insert(def.name.to_string(), value);
            }
            Ok(None) => {}
            Err(violation) => report.push(violation),
        }
    }

    if report.is_empty() {
        Ok(NormalizedRecord::new(record))
    } else {
        Err(ValidationFailure::new(report))
    }
}

/// Evaluates one field definition against the raw value.
///
/// `Ok(Some(value))` carries the normalized value; `Ok(None)` means an
/// optional field was absent.
fn check_field(def: &FieldDef, value: Option<&Value>) -> Result<Option<Value>, Violation> {
    let value = match value {
        None | Some(Value::Null) => return check_absent(def),
        Some(value) => value,
    };

    match &def.kind {
        FieldKind::Text => check_text(def, value),
        FieldKind::Price { min } => check_price(def, value, *min),
        FieldKind::ImageUrl => check_image_url(def, value),
    }
}

fn check_absent(def: &FieldDef) -> Result<Option<Value>, Violation> {
    if def.required {
        Err(Violation::required(def.name))
    } else {
        Ok(None)
    }
}

fn check_text(def: &FieldDef, value: &Value) -> Result<Option<Value>, Violation> {
    match value {
        Value::String(s) if s.is_empty() => check_absent(def),
        Value::String(s) => Ok(Some(Value::String(s.clone()))),
        // Form inputs may hand a number to a text field; stringify it
        Value::Number(n) => Ok(Some(Value::String(n.to_string()))),
        _ => Err(constraint_violation(def)),
    }
}

fn check_price(def: &FieldDef, value: &Value, min: f64) -> Result<Option<Value>, Violation> {
    let parsed = match value {
        // An empty input box is an absent answer, not a malformed number
        Value::String(s) if s.is_empty() => return check_absent(def),
        Value::String(s) => s.parse::<f64>().map_err(|_| constraint_violation(def))?,
        Value::Number(n) => n.as_f64().ok_or_else(|| constraint_violation(def))?,
        _ => return Err(constraint_violation(def)),
    };

    if !parsed.is_finite() || parsed < min {
        return Err(constraint_violation(def));
    }

    Number::from_f64(parsed)
        .map(|n| Some(Value::Number(n)))
        .ok_or_else(|| constraint_violation(def))
}

fn check_image_url(def: &FieldDef, value: &Value) -> Result<Option<Value>, Violation> {
    match value {
        Value::String(s) if s.is_empty() => check_absent(def),
        Value::String(s) => match Url::parse(s) {
            Ok(_) => Ok(Some(Value::String(s.clone()))),
            Err(_) => Err(constraint_violation(def)),
        },
        _ => Err(constraint_violation(def)),
    }
}

fn constraint_violation(def: &FieldDef) -> Violation {
    Violation::new(def.name, def.kind.constraint_message(def.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be a JSON object"),
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let record = raw(json!({
            "name": "Ham and eggs",
            "price": "19.90",
            "description": "Breakfast plate",
            "image": "https://example.com/ham.png",
        }));

        let normalized = validate(&Schema::food(), &record).unwrap();
        assert_eq!(normalized.text("name"), Some("Ham and eggs"));
        assert_eq!(normalized.number("price"), Some(19.90));
        assert_eq!(normalized.text("image"), Some("https://example.com/ham.png"));
    }

    #[test]
    fn test_collects_every_failed_field() {
        let record = raw(json!({
            "name": "",
            "price": -5,
            "description": "ok",
            "image": "not-a-url",
        }));

        let failure = validate(&Schema::food(), &record).unwrap_err();
        let fields: Vec<_> = failure.report().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "price", "image"]);
    }

    #[test]
    fn test_price_type_violation_is_not_required() {
        let record = raw(json!({
            "name": "Pizza",
            "price": "abc",
            "description": "Cheese",
            "image": "https://example.com/p.png",
        }));

        let failure = validate(&Schema::food(), &record).unwrap_err();
        assert!(failure.contains("price", "price must be a non-negative number"));
    }

    #[test]
    fn test_empty_price_string_reports_required() {
        let record = raw(json!({
            "name": "Pizza",
            "price": "",
            "description": "Cheese",
            "image": "https://example.com/p.png",
        }));

        let failure = validate(&Schema::food(), &record).unwrap_err();
        assert!(failure.contains("price", "price is required"));
    }

    #[test]
    fn test_relative_url_is_rejected() {
        let record = raw(json!({
            "name": "Pizza",
            "price": 10,
            "description": "Cheese",
            "image": "/images/p.png",
        }));

        let failure = validate(&Schema::food(), &record).unwrap_err();
        assert!(failure.contains("image", "image must be a valid URL"));
    }

    #[test]
    fn test_undeclared_keys_are_dropped() {
        let record = raw(json!({
            "name": "Pizza",
            "price": 10,
            "description": "Cheese",
            "image": "https://example.com/p.png",
            "id": 7,
            "available": true,
        }));

        let normalized = validate(&Schema::food(), &record).unwrap();
        assert!(!normalized.contains("id"));
        assert!(!normalized.contains("available"));
    }

    #[test]
    fn test_validation_is_deterministic() {
        let record = raw(json!({
            "name": "",
            "price": "-1",
            "description": "",
            "image": "bad",
        }));

        let first = validate(&Schema::food(), &record).unwrap_err();
        for _ in 0..100 {
            let next = validate(&Schema::food(), &record).unwrap_err();
            assert_eq!(next.report(), first.report());
        }
    }
}
