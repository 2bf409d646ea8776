//! Honeypot Error Types
//!
//! [`SpamError`] is the single failure family returned by
//! [`crate::Honeypot::check`]. Each variant carries a fixed message that
//! callers may surface, but matching should be done on the variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Spam check result type alias
pub type SpamResult<T> = Result<T, SpamError>;

/// Reasons a submission was classified as automated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpamError {
    /// Trap field key is absent from the submission
    #[error("Missing honeypot input")]
    MissingHoneypotInput,

    /// Trap field was filled in
    #[error("Honeypot input not empty")]
    HoneypotNotEmpty,

    /// Valid-from checking is enabled but the field is absent
    #[error("Missing honeypot valid from input")]
    MissingValidFromInput,

    /// Token could not be decrypted or did not hold a timestamp
    #[error("Invalid honeypot valid from input")]
    InvalidValidFromInput,

    /// Decrypted timestamp lies after the current time
    #[error("Honeypot valid from is in future")]
    ValidFromInFuture,

    /// Form came back before the configured minimum elapsed time
    #[error("Honeypot form submitted too fast")]
    SubmittedTooFast,
}

impl SpamError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    /// Stable machine-readable name of the kind
    pub fn kind(&self) -> &'static str {
        match self {
            SpamError::MissingHoneypotInput => "MissingHoneypotInput",
            SpamError::HoneypotNotEmpty => "HoneypotNotEmpty",
            SpamError::MissingValidFromInput => "MissingValidFromInput",
            SpamError::InvalidValidFromInput => "InvalidValidFromInput",
            SpamError::ValidFromInFuture => "ValidFromInFuture",
            SpamError::SubmittedTooFast => "SubmittedTooFast",
        }
    }

    fn log(&self) {
        match self {
            // Usually a form rendered without the honeypot fields
            SpamError::MissingHoneypotInput | SpamError::MissingValidFromInput => {
                tracing::debug!(kind = self.kind(), error = %self, "Honeypot check failed");
            }
            _ => {
                tracing::warn!(kind = self.kind(), "Spam submission rejected");
            }
        }
    }
}

impl IntoResponse for SpamError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        // Return empty body so bots learn nothing about which check tripped
        (status, ()).into_response()
    }
}

/// Invalid [`crate::HoneypotConfig`] detected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoneypotConfigError {
    #[error("Honeypot name field name must not be empty")]
    EmptyNameFieldName,

    #[error("Honeypot valid from field name must not be empty")]
    EmptyValidFromFieldName,

    #[error("Honeypot field names must differ (both are {0:?})")]
    DuplicateFieldName(String),

    #[error("Honeypot encryption seed must not be empty")]
    EmptyEncryptionSeed,
}
