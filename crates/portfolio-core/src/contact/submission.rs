//! Timed submission lifecycle.

use std::time::Duration;

use crate::contact::{ContactMessage, ContactTransport, SubmissionEvent};

/// Final step the driver reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Delivered, and the reset window elapsed
    Completed,
    /// The transport failed; no reset is scheduled
    Failed(String),
}

/// Run one submission: deliver, report, and after a success wait
/// `reset_after` before asking the form to clear.
///
/// The caller owns the future. Dropping it (component teardown, a newer
/// submission) cancels whatever delay is still pending, and no further
/// events are emitted.
pub async fn drive_submission<T, F>(
    transport: &T,
    message: ContactMessage,
    reset_after: Duration,
    mut apply: F,
) -> SubmissionOutcome
where
    T: ContactTransport,
    F: FnMut(SubmissionEvent),
{
    match transport.deliver(&message).await {
        Ok(()) => {
            apply(SubmissionEvent::Delivered);
            tokio::time::sleep(reset_after).await;
            apply(SubmissionEvent::ResetDue);
            SubmissionOutcome::Completed
        }
        Err(e) => {
            let reason = e.to_string();
            tracing::warn!(error = %reason, "contact submission failed");
            apply(SubmissionEvent::Rejected(reason.clone()));
            SubmissionOutcome::Failed(reason)
        }
    }
}
