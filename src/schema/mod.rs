//! Schema Validator subsystem for platter
//!
//! Field constraints for a food plate are declared as typed descriptors
//! and enforced by a generic, collect-all validator.
//!
//! # Design Principles
//!
//! - Every field is evaluated on every pass; validation never stops at
//!   the first failing field
//! - At most one violation per field per pass
//! - Violations are ordered by schema declaration order
//! - Deterministic validation: same raw record, same report
//! - Failures are values (`ValidationFailure`), never panics

mod errors;
mod types;
mod validator;

pub use errors::{ValidationFailure, Violation, ViolationReport};
pub use types::{FieldDef, FieldKind, Schema};
pub use validator::{validate, NormalizedRecord, RawRecord};
