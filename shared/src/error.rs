//! Error types for InfluencerFlow contract Lambda functions.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in contract Lambda functions.
#[derive(Error, Debug)]
pub enum Error {
    /// A deal-terms validation rule was violated; the message is surfaced
    /// verbatim to the caller
    #[error("{0}")]
    Validation(String),

    /// Request body did not match the expected envelope shape
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Any other unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    ///
    /// `MalformedRequest` maps to 500: the wire contract does not
    /// distinguish a bad envelope from an unexpected failure, only the
    /// logs do.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) => 400,
            _ => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::Validation("Missing required fields".into()).status_code(),
            400
        );
        assert_eq!(Error::MalformedRequest("eof".into()).status_code(), 500);
        assert_eq!(Error::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_validation_message_is_verbatim() {
        let err = Error::Validation("End date must be after start date".into());
        assert_eq!(err.to_string(), "End date must be after start date");
    }
}
