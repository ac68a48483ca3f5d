//! Observability for platter
//!
//! Structured, synchronous JSON logging of the submission and menu
//! lifecycle. One log line per event, deterministic field ordering.

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
