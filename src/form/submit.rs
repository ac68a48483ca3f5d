//! Submission orchestration
//!
//! One `FormSession` per open form. A submission runs the full pipeline:
//!
//! 1. Snapshot the form's raw values
//! 2. Validate (collect-all)
//! 3. Invalid: normalize the report and apply it to the error display;
//!    the form stays open and the commit callback is never invoked
//! 4. Valid: clear prior errors, await the caller's commit callback with
//!    the normalized input, then fire the success hook (modal close).
//!    The success hook never fires before the commit completes
//!
//! Policies (deterministic, covered by the test suite):
//! - At most one submission in flight per session; a second trigger while
//!   one is pending is ignored
//! - If the form is closed while a submission is pending, its result is
//!   discarded: no error display write, no success signal
//! - A commit failure propagates to the caller untouched; it is never
//!   turned into field errors

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;

use crate::menu::FoodInput;
use crate::observability::{Event, Logger};
use crate::schema::RawRecord;

use super::normalize::{field_error_map, FieldErrorMap};
use super::state::FormState;

/// How one submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed, commit completed, success hook fired
    Committed,
    /// Validation failed; field errors applied to the form
    Rejected,
    /// Another submission was already in flight; this one was dropped
    Ignored,
    /// The form was closed while pending; the result was discarded
    Discarded,
}

/// Submission handler for a single form instance.
///
/// Owns the form's state and guarantees only one submission is in flight
/// at a time. Shared with the UI runtime behind an `Arc`.
pub struct FormSession {
    label: &'static str,
    state: RwLock<FormState>,
    in_flight: AtomicBool,
}

impl FormSession {
    /// Fresh session for an empty form (an add form)
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            state: RwLock::new(FormState::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Session pre-filled with initial values (an edit form)
    pub fn with_values(label: &'static str, values: RawRecord) -> Self {
        Self {
            label,
            state: RwLock::new(FormState::with_values(values)),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Label identifying this form in logs
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Set a field's current value
    pub fn set_value(&self, field: &str, value: impl Into<Value>) {
        self.write_state().set_value(field, value);
    }

    /// Message currently displayed for a field, if any
    pub fn field_error(&self, field: &str) -> Option<String> {
        self.read_state().field_error(field).map(String::from)
    }

    /// Snapshot of the full error display
    pub fn errors(&self) -> FieldErrorMap {
        self.read_state().errors().clone()
    }

    /// Whether any field is currently annotated
    pub fn has_errors(&self) -> bool {
        self.read_state().has_errors()
    }

    /// Whether the form is still open
    pub fn is_open(&self) -> bool {
        self.read_state().is_open()
    }

    /// Close the form externally (modal dismissed)
    pub fn close(&self) {
        self.write_state().close();
    }

    /// Run one submission.
    ///
    /// `commit` receives the normalized input; caller-owned fields such
    /// as `id` and `available` never pass through. `on_success` is the
    /// success signal (typically the modal-close toggle) and fires only
    /// after a completed commit on a still-open form.
    ///
    /// # Errors
    ///
    /// Propagates a commit-callback failure unchanged. Validation failure
    /// is not an error here: it is recovered into the error display and
    /// reported as `SubmitOutcome::Rejected`.
    pub async fn submit<C, Fut, E, S>(&self, commit: C, on_success: S) -> Result<SubmitOutcome, E>
    where
        C: FnOnce(FoodInput) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        S: FnOnce(),
    {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            Logger::warn(Event::SubmitIgnored.name(), &[("form", self.label)]);
            return Ok(SubmitOutcome::Ignored);
        }

        let result = self.run(commit, on_success).await;
        self.in_flight.store(false, Ordering::SeqCst);

        result
    }

    async fn run<C, Fut, E, S>(&self, commit: C, on_success: S) -> Result<SubmitOutcome, E>
    where
        C: FnOnce(FoodInput) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        S: FnOnce(),
    {
        Logger::info(Event::SubmitStart.name(), &[("form", self.label)]);
        let values = self.read_state().values().clone();

        let input = match FoodInput::validate(&values) {
            Ok(input) => input,
            Err(failure) => {
                let errors = field_error_map(failure.report());
                let count = errors.len().to_string();

                let mut state = self.write_state();
                if !state.is_open() {
                    Logger::info(Event::SubmitDiscarded.name(), &[("form", self.label)]);
                    return Ok(SubmitOutcome::Discarded);
                }

                state.set_field_errors(errors);
                Logger::warn(
                    Event::ValidationFailed.name(),
                    &[("fields", count.as_str()), ("form", self.label)],
                );
                return Ok(SubmitOutcome::Rejected);
            }
        };

        self.write_state().clear_errors();
        commit(input).await?;

        if !self.read_state().is_open() {
            Logger::info(Event::SubmitDiscarded.name(), &[("form", self.label)]);
            return Ok(SubmitOutcome::Discarded);
        }

        on_success();
        Logger::info(Event::CommitComplete.name(), &[("form", self.label)]);

        Ok(SubmitOutcome::Committed)
    }

    // The display state carries no cross-field invariants, so a guard
    // recovered from a poisoned lock is still usable.
    fn read_state(&self) -> RwLockReadGuard<'_, FormState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FormState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
