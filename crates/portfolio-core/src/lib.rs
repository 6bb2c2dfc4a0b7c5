//! Portfolio Site Core Library
//!
//! Headless state behind the single-page portfolio: which section is in
//! view, whether the mobile menu is open, when the loading screen lifts,
//! and how the contact form moves through a submission.
//!
//! Nothing here touches a DOM. The renderer feeds scroll snapshots in
//! through [`ViewportObserver`] and drives the contact form through
//! [`drive_submission`], keeping every timer inside a task it owns.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactField, ContactFormState, SimulatedTransport, SiteConfig};
//!
//! let config = SiteConfig::default();
//! let mut form = ContactFormState::new();
//! form.set_field(ContactField::Name, "Ana");
//! // ...
//! let message = form.begin_submission()?;
//! let transport = SimulatedTransport::new(config.timings.submit_latency());
//! drive_submission(&transport, message, config.timings.reset_delay(), |e| form.apply(e)).await;
//! ```

pub mod config;
pub mod contact;
pub mod error;
pub mod navigation;
pub mod scroll;
pub mod section;

// Re-exports
pub use config::{CompanyProfile, Icon, SectionEntry, SiteConfig, Timings};
pub use contact::{
    drive_submission, ContactField, ContactFormState, ContactMessage, ContactTransport,
    SimulatedTransport, SubmissionEvent, SubmissionOutcome, SubmitStatus,
};
pub use error::{SiteError, SiteResult};
pub use navigation::NavigationState;
pub use scroll::{track_scroll, ScrollTracker, SectionBounds, ViewportObserver, ViewportSnapshot};
pub use section::SectionId;
