//! Domain Value Objects
//!
//! Trap field naming and the valid-from token cipher.

use platform::crypto::SealingKey;
use rand::{Rng, distr::Alphanumeric};

/// Separator between the base trap field name and its random suffix
pub const SUFFIX_SEPARATOR: char = '_';

/// Number of random characters appended to a randomized trap field name
pub const RANDOM_SUFFIX_LEN: usize = 12;

/// Build `"{base}_{suffix}"` with a fresh alphanumeric suffix
pub fn randomized_field_name(base: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(RANDOM_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{base}{SUFFIX_SEPARATOR}{suffix}")
}

/// Whether `candidate` is a randomized variant of `base`.
///
/// The suffix is never stored, so any non-empty suffix is accepted.
pub fn is_randomized_variant(base: &str, candidate: &str) -> bool {
    candidate
        .strip_prefix(base)
        .and_then(|rest| rest.strip_prefix(SUFFIX_SEPARATOR))
        .is_some_and(|suffix| !suffix.is_empty())
}

/// Encrypts and decrypts valid-from timestamps with a seed-derived key
#[derive(Debug, Clone)]
pub struct ValidFromCipher {
    key: SealingKey,
}

impl ValidFromCipher {
    pub fn from_seed(seed: &str) -> Self {
        Self {
            key: SealingKey::from_passphrase(seed),
        }
    }

    /// Encrypt arbitrary plaintext into a form-safe token
    pub fn encrypt(&self, plaintext: &str) -> String {
        self.key.seal(plaintext.as_bytes())
    }

    /// Encrypt a millisecond timestamp as its decimal string
    pub fn encrypt_timestamp(&self, timestamp_ms: i64) -> String {
        self.encrypt(&timestamp_ms.to_string())
    }

    /// Decrypt a token; `None` on any decoding, authentication or UTF-8 failure
    pub fn decrypt(&self, token: &str) -> Option<String> {
        let plaintext = match self.key.open(token) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(error = %e, "Valid from token rejected");
                return None;
            }
        };
        String::from_utf8(plaintext).ok()
    }
}
