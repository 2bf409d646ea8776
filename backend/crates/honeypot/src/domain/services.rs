//! Domain Services
//!
//! Pure valid-from timestamp policy.

/// Outcome of comparing a decrypted valid-from timestamp with the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidFromVerdict {
    Accepted,
    /// Timestamp is later than now
    InFuture,
    /// Less than the minimum elapsed time has passed since render
    TooFast,
}

/// Parse decrypted plaintext as milliseconds since the Unix epoch.
///
/// Only a non-empty run of ASCII digits that fits in `i64` is accepted.
pub fn parse_valid_from(plaintext: &str) -> Option<i64> {
    if plaintext.is_empty() || !plaintext.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    plaintext.parse().ok()
}

/// Apply the time window to a valid-from timestamp.
///
/// A timestamp equal to `now_ms` is not in the future. With a zero
/// `timeout_ms` every non-future timestamp is accepted.
pub fn evaluate_valid_from(valid_from_ms: i64, now_ms: i64, timeout_ms: i64) -> ValidFromVerdict {
    if valid_from_ms > now_ms {
        return ValidFromVerdict::InFuture;
    }
    if now_ms.saturating_sub(valid_from_ms) < timeout_ms {
        return ValidFromVerdict::TooFast;
    }
    ValidFromVerdict::Accepted
}
