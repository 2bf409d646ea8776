//! Application Configuration
//!
//! Configuration for the honeypot check.

use std::fmt;
use std::time::Duration;

/// Default base name of the trap field
pub const DEFAULT_NAME_FIELD_NAME: &str = "name__confirm";

/// Default name of the encrypted valid-from field
pub const DEFAULT_VALID_FROM_FIELD_NAME: &str = "from__confirm";

/// Default minimum time between render and submission
pub const DEFAULT_VALID_FROM_TIMEOUT: Duration = Duration::from_millis(1000);

/// Honeypot configuration
#[derive(Clone)]
pub struct HoneypotConfig {
    /// Base name of the trap field
    pub name_field_name: String,
    /// Name of the valid-from field; `None` disables timestamp checking
    pub valid_from_field_name: Option<String>,
    /// Passphrase for the valid-from cipher; random per instance when `None`
    pub encryption_seed: Option<String>,
    /// Append a random suffix to the trap field name on every render
    pub randomize_name_field_name: bool,
    /// Minimum elapsed time between render and submission.
    ///
    /// Non-zero values reject a form checked immediately after it was
    /// generated with [`crate::SpamError::SubmittedTooFast`]; set
    /// `Duration::ZERO` to accept instant round-trips.
    pub valid_from_timeout: Duration,
}

impl Default for HoneypotConfig {
    fn default() -> Self {
        Self {
            name_field_name: DEFAULT_NAME_FIELD_NAME.to_string(),
            valid_from_field_name: Some(DEFAULT_VALID_FROM_FIELD_NAME.to_string()),
            encryption_seed: None,
            randomize_name_field_name: false,
            valid_from_timeout: DEFAULT_VALID_FROM_TIMEOUT,
        }
    }
}

impl HoneypotConfig {
    /// Use a fixed seed so tokens survive restarts and work across replicas
    pub fn with_seed(seed: impl Into<String>) -> Self {
        Self {
            encryption_seed: Some(seed.into()),
            ..Default::default()
        }
    }

    /// Disable the valid-from field entirely
    pub fn without_valid_from(self) -> Self {
        Self {
            valid_from_field_name: None,
            ..self
        }
    }

    pub fn with_randomized_name_field(self) -> Self {
        Self {
            randomize_name_field_name: true,
            ..self
        }
    }

    pub fn with_name_field_name(self, name: impl Into<String>) -> Self {
        Self {
            name_field_name: name.into(),
            ..self
        }
    }

    pub fn with_valid_from_timeout(self, timeout: Duration) -> Self {
        Self {
            valid_from_timeout: timeout,
            ..self
        }
    }

    /// Timeout in milliseconds, saturating at `i64::MAX`
    pub fn valid_from_timeout_ms(&self) -> i64 {
        i64::try_from(self.valid_from_timeout.as_millis()).unwrap_or(i64::MAX)
    }
}

impl fmt::Debug for HoneypotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HoneypotConfig")
            .field("name_field_name", &self.name_field_name)
            .field("valid_from_field_name", &self.valid_from_field_name)
            .field(
                "encryption_seed",
                &self.encryption_seed.as_ref().map(|_| "<redacted>"),
            )
            .field("randomize_name_field_name", &self.randomize_name_field_name)
            .field("valid_from_timeout", &self.valid_from_timeout)
            .finish()
    }
}
