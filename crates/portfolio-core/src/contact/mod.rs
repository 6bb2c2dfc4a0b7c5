//! Contact form: field state, transports and the timed submission flow.
//!
//! ```text
//! Idle --submit(valid)--> Submitting --delivered--> Success --reset--> Idle
//!                         Submitting --rejected---> Failed --submit--> Submitting
//! ```

mod form;
mod submission;
mod transport;

pub use form::{ContactField, ContactFormState, ContactMessage, SubmissionEvent, SubmitStatus};
pub use submission::{drive_submission, SubmissionOutcome};
pub use transport::{ContactTransport, SimulatedTransport};
