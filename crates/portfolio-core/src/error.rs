//! Error types for the portfolio site

use thiserror::Error;

use crate::contact::ContactField;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// A required contact field was left empty
    #[error("Missing required field: {0}")]
    MissingField(ContactField),

    /// The email field is not shaped like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// A submission is already waiting on the transport
    #[error("Submission already in progress")]
    SubmissionInProgress,

    /// The transport could not deliver the message
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),

    /// Section identifier outside the known set
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Configuration parsed but is not usable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::MissingField(ContactField::Phone);
        assert_eq!(format!("{}", err), "Missing required field: phone");

        let err = SiteError::UnknownSection("blog".to_string());
        assert_eq!(format!("{}", err), "Unknown section: blog");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let site_err: SiteError = io_err.into();
        assert!(matches!(site_err, SiteError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Serialization(_)));
    }
}
