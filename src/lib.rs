//! platter - A strict, deterministic food-menu management core
//!
//! Schema validation, error normalization, and form-submission
//! orchestration for a menu of food plates.

pub mod form;
pub mod menu;
pub mod observability;
pub mod schema;
