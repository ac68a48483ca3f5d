//! Menu subsystem for platter
//!
//! The food-plate records, the backend collaborator standing in for the
//! excluded REST layer, and the menu service keeping the UI's cached
//! food list consistent with that backend.

mod backend;
mod food;
mod service;

pub use backend::{BackendError, BackendResult, FoodBackend, InMemoryBackend};
pub use food::{FoodInput, FoodPlate};
pub use service::MenuService;
