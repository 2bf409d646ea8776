//! Honeypot Use Cases
//!
//! Generation of the hidden field descriptors for a rendered form and
//! validation of the submitted fields against them.

use crate::application::config::HoneypotConfig;
use crate::domain::services::{ValidFromVerdict, evaluate_valid_from, parse_valid_from};
use crate::domain::submission::SubmittedFields;
use crate::domain::value_objects::{ValidFromCipher, is_randomized_variant, randomized_field_name};
use crate::error::{HoneypotConfigError, SpamError, SpamResult};
use chrono::Utc;
use platform::crypto::{random_bytes, to_base64};

/// Length of the generated seed when none is configured
const GENERATED_SEED_BYTES: usize = 32;

/// Field descriptors to embed in one rendered form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    /// Effective trap field name (base name, or base name plus random suffix)
    pub name_field_name: String,
    pub valid_from_field_name: Option<String>,
    /// Encrypted render timestamp; `None` exactly when valid-from is disabled
    pub encrypted_valid_from: Option<String>,
}

/// Stateless honeypot check.
///
/// Configuration and key are fixed at construction, so one instance can be
/// shared across threads and requests behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Honeypot {
    config: HoneypotConfig,
    cipher: ValidFromCipher,
}

impl Honeypot {
    /// Build a honeypot, rejecting unusable field names.
    ///
    /// When no seed is configured, a random one is generated here and kept for
    /// the lifetime of the instance.
    pub fn new(config: HoneypotConfig) -> Result<Self, HoneypotConfigError> {
        if config.name_field_name.is_empty() {
            return Err(HoneypotConfigError::EmptyNameFieldName);
        }
        if let Some(valid_from) = &config.valid_from_field_name {
            if valid_from.is_empty() {
                return Err(HoneypotConfigError::EmptyValidFromFieldName);
            }
            if *valid_from == config.name_field_name {
                return Err(HoneypotConfigError::DuplicateFieldName(valid_from.clone()));
            }
        }
        if config.encryption_seed.as_deref() == Some("") {
            return Err(HoneypotConfigError::EmptyEncryptionSeed);
        }
        Ok(Self::from_checked_config(config))
    }

    fn from_checked_config(config: HoneypotConfig) -> Self {
        let cipher = match &config.encryption_seed {
            Some(seed) => ValidFromCipher::from_seed(seed),
            None => ValidFromCipher::from_seed(&to_base64(&random_bytes(GENERATED_SEED_BYTES))),
        };

        tracing::debug!(?config, "Honeypot configured");

        Self { config, cipher }
    }

    pub fn config(&self) -> &HoneypotConfig {
        &self.config
    }

    /// Field descriptors for a form rendered now
    pub fn input_props(&self) -> InputProps {
        self.input_props_at(Utc::now().timestamp_millis())
    }

    /// Field descriptors for a form rendered at `now_ms`
    pub fn input_props_at(&self, now_ms: i64) -> InputProps {
        let name_field_name = if self.config.randomize_name_field_name {
            randomized_field_name(&self.config.name_field_name)
        } else {
            self.config.name_field_name.clone()
        };

        let encrypted_valid_from = self
            .config
            .valid_from_field_name
            .as_ref()
            .map(|_| self.cipher.encrypt_timestamp(now_ms));

        tracing::debug!(
            name_field_name = %name_field_name,
            valid_from_enabled = encrypted_valid_from.is_some(),
            "Generated honeypot input props"
        );

        InputProps {
            name_field_name,
            valid_from_field_name: self.config.valid_from_field_name.clone(),
            encrypted_valid_from,
        }
    }

    /// Validate a submission against the current time.
    ///
    /// With the default 1000 ms `valid_from_timeout`, a form checked in the
    /// same second it was generated fails with
    /// [`SpamError::SubmittedTooFast`].
    pub fn check<F>(&self, fields: &F) -> SpamResult<()>
    where
        F: SubmittedFields + ?Sized,
    {
        self.check_at(fields, Utc::now().timestamp_millis())
    }

    /// Validate a submission as if received at `now_ms`
    pub fn check_at<F>(&self, fields: &F, now_ms: i64) -> SpamResult<()>
    where
        F: SubmittedFields + ?Sized,
    {
        let result = self.run_checks(fields, now_ms);
        if let Err(e) = &result {
            tracing::debug!(kind = e.kind(), "Honeypot check rejected submission");
        }
        result
    }

    fn run_checks<F>(&self, fields: &F, now_ms: i64) -> SpamResult<()>
    where
        F: SubmittedFields + ?Sized,
    {
        let trap_value = self
            .trap_field_value(fields)
            .ok_or(SpamError::MissingHoneypotInput)?;
        if !trap_value.is_empty() {
            return Err(SpamError::HoneypotNotEmpty);
        }

        let Some(valid_from_field_name) = &self.config.valid_from_field_name else {
            return Ok(());
        };

        let token = fields
            .field(valid_from_field_name)
            .ok_or(SpamError::MissingValidFromInput)?;

        let valid_from_ms = self
            .cipher
            .decrypt(token)
            .as_deref()
            .and_then(parse_valid_from)
            .ok_or(SpamError::InvalidValidFromInput)?;

        match evaluate_valid_from(valid_from_ms, now_ms, self.config.valid_from_timeout_ms()) {
            ValidFromVerdict::Accepted => Ok(()),
            ValidFromVerdict::InFuture => Err(SpamError::ValidFromInFuture),
            ValidFromVerdict::TooFast => Err(SpamError::SubmittedTooFast),
        }
    }

    /// Randomized suffixes are not remembered between render and submit, so
    /// any `"{base}_{suffix}"` field counts, falling back to the base name.
    ///
    /// When several variants are submitted a filled one is reported first, so
    /// the verdict does not depend on the iteration order of `fields`.
    fn trap_field_value<'a, F>(&self, fields: &'a F) -> Option<&'a str>
    where
        F: SubmittedFields + ?Sized,
    {
        let base = self.config.name_field_name.as_str();
        if self.config.randomize_name_field_name {
            let variant = fields
                .find_field(&|name: &str, value: &str| {
                    is_randomized_variant(base, name) && !value.is_empty()
                })
                .or_else(|| {
                    fields.find_field(&|name: &str, _: &str| is_randomized_variant(base, name))
                });
            if let Some((_, value)) = variant {
                return Some(value);
            }
        }
        fields.field(base)
    }
}

impl Default for Honeypot {
    fn default() -> Self {
        Self::from_checked_config(HoneypotConfig::default())
    }
}
