//! Food-plate records
//!
//! `FoodPlate` is the persisted menu entry; `FoodInput` is the four
//! user-editable fields of one form submission. `id` and `available`
//! belong to the menu layer and never travel through a form.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{
    validate, NormalizedRecord, RawRecord, Schema, ValidationFailure, Violation,
};

/// A menu entry as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPlate {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub available: bool,
}

impl FoodPlate {
    /// Returns a copy with the input's fields applied.
    ///
    /// Pure: `self` is untouched, `id` and `available` are preserved.
    #[must_use]
    pub fn merge(&self, input: &FoodInput) -> FoodPlate {
        FoodPlate {
            id: self.id,
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            image: input.image.clone(),
            available: self.available,
        }
    }

    /// Returns a copy with availability flipped.
    #[must_use]
    pub fn toggled(&self) -> FoodPlate {
        FoodPlate {
            available: !self.available,
            ..self.clone()
        }
    }

    /// Raw form values for pre-filling an edit form with this plate.
    ///
    /// Only the user-editable fields are exposed.
    pub fn form_values(&self) -> RawRecord {
        let mut values = Map::new();
        values.insert("name".to_string(), Value::String(self.name.clone()));
        values.insert("price".to_string(), Value::String(self.price.to_string()));
        values.insert(
            "description".to_string(),
            Value::String(self.description.clone()),
        );
        values.insert("image".to_string(), Value::String(self.image.clone()));
        values
    }
}

/// The user-editable fields of a menu item, normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodInput {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}

impl FoodInput {
    /// Validates raw form values against the food schema.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailure` with one violation per failed field,
    /// in schema order.
    pub fn validate(raw: &RawRecord) -> Result<Self, ValidationFailure> {
        let record = validate(&Schema::food(), raw)?;
        Self::from_record(&record)
    }

    /// Extracts the typed input from a normalized food record.
    ///
    /// A record produced by a successful food-schema pass always carries
    /// all four fields; an absent field here is a programming error and
    /// fails with the matching required violation rather than panicking.
    pub fn from_record(record: &NormalizedRecord) -> Result<Self, ValidationFailure> {
        let name = Self::text(record, "name")?;
        let description = Self::text(record, "description")?;
        let image = Self::text(record, "image")?;
        let price = record
            .number("price")
            .ok_or_else(|| ValidationFailure::single(Violation::required("price")))?;

        Ok(Self {
            name,
            price,
            description,
            image,
        })
    }

    fn text(record: &NormalizedRecord, field: &str) -> Result<String, ValidationFailure> {
        record
            .text(field)
            .map(String::from)
            .ok_or_else(|| ValidationFailure::single(Violation::required(field)))
    }
}
