//! Observable events
//!
//! Every externally observable step of the submission pipeline and the
//! menu collection operations has a typed event. Events are explicit:
//! log sites never invent ad-hoc names.

use std::fmt;

/// Observable events across the crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Submission pipeline
    /// A form submission entered the pipeline
    SubmitStart,
    /// A submission was dropped because one was already in flight
    SubmitIgnored,
    /// Validation failed; field errors applied to the form
    ValidationFailed,
    /// Commit completed and the success signal fired
    CommitComplete,
    /// The form closed while pending; the result was discarded
    SubmitDiscarded,

    // Menu collection
    /// The cached food list was replaced from the backend
    FoodsLoaded,
    /// A plate was created
    FoodAdded,
    /// A plate was edited
    FoodUpdated,
    /// A plate was removed
    FoodDeleted,
    /// A plate's availability was flipped
    FoodToggled,
}

impl Event {
    /// Returns the event name used in log output
    pub fn name(&self) -> &'static str {
        match self {
            Event::SubmitStart => "SUBMIT_START",
            Event::SubmitIgnored => "SUBMIT_IGNORED",
            Event::ValidationFailed => "VALIDATION_FAILED",
            Event::CommitComplete => "COMMIT_COMPLETE",
            Event::SubmitDiscarded => "SUBMIT_DISCARDED",
            Event::FoodsLoaded => "FOODS_LOADED",
            Event::FoodAdded => "FOOD_ADDED",
            Event::FoodUpdated => "FOOD_UPDATED",
            Event::FoodDeleted => "FOOD_DELETED",
            Event::FoodToggled => "FOOD_TOGGLED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
