//! Schema type definitions for the food form
//!
//! Supported field kinds:
//! - text: non-empty UTF-8 string
//! - price: non-negative number, accepted as a JSON number or a numeric
//!   string (form inputs hold strings)
//! - image url: absolute URL

/// Constraint descriptor for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// Non-empty string
    Text,
    /// Number with an inclusive lower bound
    Price {
        /// Smallest accepted value
        min: f64,
    },
    /// Absolute URL
    ImageUrl,
}

impl FieldKind {
    /// Returns the kind name for diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Price { .. } => "price",
            FieldKind::ImageUrl => "image url",
        }
    }

    /// Message reported when a present value breaks this kind's constraint.
    ///
    /// Text fields have no constraint beyond presence, so their message is
    /// the required message.
    pub fn constraint_message(&self, field: &str) -> String {
        match self {
            FieldKind::Text => required_message(field),
            FieldKind::Price { .. } => format!("{field} must be a non-negative number"),
            FieldKind::ImageUrl => format!("{field} must be a valid URL"),
        }
    }
}

/// Message reported when a required field is missing or empty.
pub fn required_message(field: &str) -> String {
    format!("{field} is required")
}

/// Field definition: a named kind plus a presence requirement.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field identifier as used by the form
    pub name: &'static str,
    /// Constraint descriptor
    pub kind: FieldKind,
    /// Whether the field must be present and non-empty
    pub required: bool,
}

impl FieldDef {
    /// Create a required text field
    pub fn required_text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: true,
        }
    }

    /// Create a required price field with an inclusive minimum
    pub fn required_price(name: &'static str, min: f64) -> Self {
        Self {
            name,
            kind: FieldKind::Price { min },
            required: true,
        }
    }

    /// Create a required image-URL field
    pub fn required_image_url(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::ImageUrl,
            required: true,
        }
    }
}

/// An ordered set of field definitions.
///
/// Declaration order fixes the order of violations in a report.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldDef>,
}

impl Schema {
    /// Build a schema from an ordered list of field definitions
    pub fn new(fields: Vec<FieldDef>) -> Self {
        Self { fields }
    }

    /// The food-plate form schema: name, price, description, image.
    pub fn food() -> Self {
        Self::new(vec![
            FieldDef::required_text("name"),
            FieldDef::required_price("price", 0.0),
            FieldDef::required_text("description"),
            FieldDef::required_image_url("image"),
        ])
    }

    /// Field definitions in declaration order
    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Whether the schema declares a field with this name
    pub fn declares(&self, field: &str) -> bool {
        self.fields.iter().any(|def| def.name == field)
    }
}
