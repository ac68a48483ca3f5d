//! Submission Flow Tests
//!
//! End-to-end behavior of a form session:
//! - Valid submit: commit once, success signal once, no residual errors
//! - Invalid submit: every invalid field annotated, commit never invoked,
//!   form stays open
//! - One submission in flight per session; concurrent triggers ignored
//! - Closing the form while pending discards the result
//! - Commit failures pass through untouched

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use platter::form::{FormSession, SubmitOutcome};
use platter::menu::FoodInput;
use tokio::sync::oneshot;

// =============================================================================
// Helper Functions
// =============================================================================

fn filled_session(label: &'static str) -> FormSession {
    let session = FormSession::new(label);
    session.set_value("name", "Pizza");
    session.set_value("price", "19.90");
    session.set_value("description", "Cheese");
    session.set_value("image", "https://x.com/p.png");
    session
}

// =============================================================================
// Success Path
// =============================================================================

/// Valid submit: the commit callback receives the normalized record, the
/// success signal fires exactly once, and no error state remains.
#[tokio::test]
async fn test_valid_submit_end_to_end() {
    let session = filled_session("add-food");
    let committed: Arc<Mutex<Vec<FoodInput>>> = Arc::new(Mutex::new(Vec::new()));
    let closes = AtomicUsize::new(0);

    let outcome = session
        .submit(
            {
                let committed = Arc::clone(&committed);
                move |input| async move {
                    committed.lock().unwrap().push(input);
                    Ok::<_, std::convert::Infallible>(())
                }
            },
            || {
                closes.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Committed);
    assert_eq!(closes.load(Ordering::SeqCst), 1);
    assert!(!session.has_errors());

    let committed = committed.lock().unwrap();
    assert_eq!(committed.len(), 1);
    assert_eq!(committed[0].name, "Pizza");
    assert_eq!(committed[0].price, 19.90);
    assert_eq!(committed[0].description, "Cheese");
    assert_eq!(committed[0].image, "https://x.com/p.png");
}

/// A rejected submission followed by a corrected one ends with a clean
/// error display.
#[tokio::test]
async fn test_errors_clear_after_corrected_resubmit() {
    let session = FormSession::new("add-food");
    session.set_value("name", "Pizza");

    let outcome = session
        .submit(
            |_| async { Ok::<_, std::convert::Infallible>(()) },
            || {},
        )
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(session.errors().len(), 3);

    session.set_value("price", "12.00");
    session.set_value("description", "Cheese");
    session.set_value("image", "https://x.com/p.png");

    let outcome = session
        .submit(
            |_| async { Ok::<_, std::convert::Infallible>(()) },
            || {},
        )
        .await
        .unwrap();
    assert_eq!(outcome, SubmitOutcome::Committed);
    assert!(!session.has_errors());
}

// =============================================================================
// Failure Path
// =============================================================================

/// The all-invalid submit: four annotated fields, no commit, form open.
#[tokio::test]
async fn test_invalid_submit_annotates_every_field() {
    let session = FormSession::new("edit-food");
    session.set_value("name", "");
    session.set_value("price", "-1");
    session.set_value("description", "");
    session.set_value("image", "bad");

    let commits = AtomicUsize::new(0);
    let outcome = session
        .submit(
            |_| {
                commits.fetch_add(1, Ordering::SeqCst);
                async { Ok::<_, std::convert::Infallible>(()) }
            },
            || panic!("success hook must not fire"),
        )
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(commits.load(Ordering::SeqCst), 0);
    assert!(session.is_open());

    let errors = session.errors();
    assert_eq!(errors.len(), 4);
    assert_eq!(session.field_error("name").as_deref(), Some("name is required"));
    assert_eq!(
        session.field_error("price").as_deref(),
        Some("price must be a non-negative number")
    );
    assert_eq!(
        session.field_error("description").as_deref(),
        Some("description is required")
    );
    assert_eq!(
        session.field_error("image").as_deref(),
        Some("image must be a valid URL")
    );
}

/// A commit failure propagates unchanged and never shows up as field
/// errors.
#[tokio::test]
async fn test_commit_failure_is_not_a_validation_failure() {
    let session = filled_session("edit-food");

    let err = session
        .submit(
            |_| async { Err("503 service unavailable") },
            || panic!("success hook after failed commit"),
        )
        .await
        .unwrap_err();

    assert_eq!(err, "503 service unavailable");
    assert!(!session.has_errors());
    assert!(session.is_open());
}

// =============================================================================
// In-Flight Guard
// =============================================================================

/// While one submission is parked on its commit callback, a second
/// trigger is ignored; the first still completes normally.
#[tokio::test]
async fn test_second_submit_while_pending_is_ignored() {
    let session = Arc::new(filled_session("add-food"));
    let (entered_tx, entered_rx) = oneshot::channel::<()>();
    let (release_tx, release_rx) = oneshot::channel::<()>();

    let first = tokio::spawn({
        let session = Arc::clone(&session);
        async move {
            session
                .submit(
                    move |_| async move {
                        entered_tx.send(()).ok();
                        release_rx.await.map_err(|_| "release dropped")?;
                        Ok::<_, &str>(())
                    },
                    || {},
                )
                .await
        }
    });

    entered_rx.await.unwrap();

    let second = session
        .submit(
            |_| async { Ok::<_, &str>(()) },
            || panic!("ignored submit must not signal success"),
        )
        .await
        .unwrap();
    assert_eq!(second, SubmitOutcome::Ignored);

    release_tx.send(()).unwrap();
    assert_eq!(first.await.unwrap().unwrap(), SubmitOutcome::Committed);
}

/// Once the pending submission finishes, the session accepts new ones.
#[tokio::test]
async fn test_guard_releases_after_completion() {
    let session = filled_session("add-food");

    let first = session
        .submit(|_| async { Ok::<_, &str>(()) }, || {})
        .await
        .unwrap();
    assert_eq!(first, SubmitOutcome::Committed);

    let second = session
        .submit(|_| async { Ok::<_, &str>(()) }, || {})
        .await
        .unwrap();
    assert_eq!(second, SubmitOutcome::Committed);
}

// =============================================================================
// Cancellation
// =============================================================================

/// Closing the form while the commit is pending discards the success
/// signal.
#[tokio::test]
async fn test_close_while_commit_pending_discards_result() {
    let session = Arc::new(filled_session("edit-food"));
    let (entered_tx, entered_rx) = oneshot::channel::<()>();
    let (release_tx, release_rx) = oneshot::channel::<()>();
    let closes = Arc::new(AtomicUsize::new(0));

    let pending = tokio::spawn({
        let session = Arc::clone(&session);
        let closes = Arc::clone(&closes);
        async move {
            session
                .submit(
                    move |_| async move {
                        entered_tx.send(()).ok();
                        release_rx.await.map_err(|_| "release dropped")?;
                        Ok::<_, &str>(())
                    },
                    move || {
                        closes.fetch_add(1, Ordering::SeqCst);
                    },
                )
                .await
        }
    });

    entered_rx.await.unwrap();
    session.close();
    release_tx.send(()).unwrap();

    assert_eq!(pending.await.unwrap().unwrap(), SubmitOutcome::Discarded);
    assert_eq!(closes.load(Ordering::SeqCst), 0);
    assert!(!session.has_errors());
}

/// A submission against an already-closed form never touches the error
/// display.
#[tokio::test]
async fn test_invalid_submit_on_closed_form_is_discarded() {
    let session = FormSession::new("edit-food");
    session.close();

    let outcome = session
        .submit(
            |_| async { Ok::<_, std::convert::Infallible>(()) },
            || panic!("success hook on closed form"),
        )
        .await
        .unwrap();

    assert_eq!(outcome, SubmitOutcome::Discarded);
    assert!(!session.has_errors());
}
