//! Form subsystem for platter
//!
//! Bridges the schema validator and a form-display layer:
//!
//! - `normalize` flattens a violation report into one message per field
//! - `state` holds a form's current values and per-field error display
//! - `submit` orchestrates one submission: validate, commit, signal

mod normalize;
mod state;
mod submit;

pub use normalize::{field_error_map, FieldErrorMap};
pub use state::FormState;
pub use submit::{FormSession, SubmitOutcome};
