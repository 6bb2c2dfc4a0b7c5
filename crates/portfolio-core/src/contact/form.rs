//! Contact form fields and submission status.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};

/// The four required inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    /// All fields in form order.
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Message,
        ]
    }

    /// Value of the `name` attribute on the rendered input.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed {
        reason: String,
    },
}

/// Validated payload handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Steps reported by the submission driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The transport accepted the message
    Delivered,
    /// The transport gave up
    Rejected(String),
    /// The success message has been shown long enough
    ResetDue,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    name: String,
    email: String,
    phone: String,
    message: String,
    status: SubmitStatus,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    /// Keystroke handler. No validation happens here.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn is_empty(&self) -> bool {
        ContactField::all().iter().all(|f| self.field(*f).is_empty())
    }

    /// Value as a browser would submit it: email inputs strip surrounding
    /// whitespace, every other field is sent as typed.
    fn submitted_value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Email => self.email.trim(),
            other => self.field(other),
        }
    }

    /// Check the required fields in form order.
    pub fn validate(&self) -> SiteResult<ContactMessage> {
        for field in ContactField::all() {
            if self.submitted_value(*field).is_empty() {
                return Err(SiteError::MissingField(*field));
            }
        }

        let email = self.submitted_value(ContactField::Email);
        if !is_email_shaped(email) {
            return Err(SiteError::InvalidEmail(email.to_string()));
        }

        Ok(ContactMessage {
            name: self.name.clone(),
            email: email.to_string(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        })
    }

    /// Move to `Submitting` and hand back the payload to deliver.
    ///
    /// On error the status is left untouched.
    pub fn begin_submission(&mut self) -> SiteResult<ContactMessage> {
        if self.is_submitting() {
            return Err(SiteError::SubmissionInProgress);
        }
        let message = self.validate()?;
        self.status = SubmitStatus::Submitting;
        Ok(message)
    }

    /// Advance the state machine. Events that do not fit the current status
    /// are dropped, so a late reset cannot wipe a newer submission.
    pub fn apply(&mut self, event: SubmissionEvent) {
        match event {
            SubmissionEvent::Delivered if self.is_submitting() => {
                self.status = SubmitStatus::Success;
            }
            SubmissionEvent::Rejected(reason) if self.is_submitting() => {
                self.status = SubmitStatus::Failed { reason };
            }
            SubmissionEvent::ResetDue if self.status == SubmitStatus::Success => {
                self.reset();
            }
            event => {
                tracing::debug!(?event, status = ?self.status, "ignoring stale submission event");
            }
        }
    }

    /// Clear every field and return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Loose `local@domain` check, matching what an `type="email"` input accepts.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
