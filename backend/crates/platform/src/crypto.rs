//! Cryptographic Utilities
//!
//! Random bytes, SHA-256, Base64 and authenticated symmetric encryption
//! (AES-256-GCM) for short opaque tokens that round-trip through clients.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroizing;

/// AES-GCM nonce length in bytes
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes
pub const TAG_LEN: usize = 16;

/// Domain separator mixed into passphrase-derived keys
const KEY_DERIVATION_CONTEXT: &[u8] = b"platform.sealing-key.v1";

/// Errors returned when opening a sealed token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Token is not valid Base64
    #[error("Token is not valid base64")]
    InvalidEncoding,

    /// Token is shorter than nonce + tag
    #[error("Token too short: need at least {min} bytes, got {actual}")]
    Truncated { min: usize, actual: usize },

    /// Tag verification failed (tampered token or wrong key)
    #[error("Token authentication failed")]
    AuthenticationFailed,
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Encode bytes as base64
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Symmetric key for sealing short tokens with AES-256-GCM.
///
/// The key material is wiped from memory when the value is dropped.
///
/// ## Token format
/// ```text
/// base64( nonce[12] || ciphertext || tag[16] )
/// ```
#[derive(Clone)]
pub struct SealingKey {
    key: Zeroizing<[u8; 32]>,
}

impl SealingKey {
    /// Wrap raw 32-byte key material
    pub fn from_bytes(key: [u8; 32]) -> Self {
        Self {
            key: Zeroizing::new(key),
        }
    }

    /// Derive a key from an arbitrary passphrase.
    ///
    /// The same passphrase always yields the same key, so tokens sealed by
    /// one process can be opened by another configured with the same secret.
    pub fn from_passphrase(passphrase: &str) -> Self {
        let mut material = Zeroizing::new(Vec::with_capacity(
            KEY_DERIVATION_CONTEXT.len() + passphrase.len(),
        ));
        material.extend_from_slice(KEY_DERIVATION_CONTEXT);
        material.extend_from_slice(passphrase.as_bytes());
        Self::from_bytes(sha256(&material))
    }

    /// Encrypt `plaintext` under a fresh random nonce.
    ///
    /// # Panics
    ///
    /// AES-GCM only rejects plaintexts larger than 64 GiB; this function is
    /// meant for short tokens and panics in that case.
    pub fn seal(&self, plaintext: &[u8]) -> String {
        let nonce_bytes = random_bytes(NONCE_LEN);
        let ciphertext = self
            .cipher()
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .expect("AES-GCM plaintext exceeds the 64 GiB limit");

        let mut token = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&ciphertext);
        to_base64(&token)
    }

    /// Decode and authenticate a token produced by [`SealingKey::seal`],
    /// returning the original plaintext.
    pub fn open(&self, token: &str) -> Result<Vec<u8>, CryptoError> {
        let data = from_base64(token.trim()).map_err(|_| CryptoError::InvalidEncoding)?;

        let min = NONCE_LEN + TAG_LEN;
        if data.len() < min {
            return Err(CryptoError::Truncated {
                min,
                actual: data.len(),
            });
        }

        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        self.cipher()
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::AuthenticationFailed)
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(self.key.as_slice()))
    }
}

impl std::fmt::Debug for SealingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealingKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_values() {
        // SHA-256 of empty string
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);

        let hash = sha256(b"hello");
        let expected =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);
    }

    #[test]
    fn test_random_bytes() {
        let bytes = random_bytes(32);
        assert_eq!(bytes.len(), 32);
        // Should not be all zeros (statistically)
        assert!(bytes.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_seal_open() {
        let key = SealingKey::from_passphrase("SEED");
        let token = key.seal(b"1700000000000");
        assert_eq!(key.open(&token).unwrap(), b"1700000000000");
    }

    #[test]
    fn test_seal_uses_fresh_nonce() {
        let key = SealingKey::from_passphrase("SEED");
        assert_ne!(key.seal(b"same"), key.seal(b"same"));
    }

    #[test]
    fn test_same_passphrase_same_key() {
        let token = SealingKey::from_passphrase("shared").seal(b"payload");
        let reopened = SealingKey::from_passphrase("shared").open(&token).unwrap();
        assert_eq!(reopened, b"payload");
    }

    #[test]
    fn test_open_with_wrong_key() {
        let token = SealingKey::from_passphrase("A").seal(b"payload");
        let result = SealingKey::from_passphrase("B").open(&token);
        assert_eq!(result, Err(CryptoError::AuthenticationFailed));
    }

    #[test]
    fn test_open_tampered_token() {
        let key = SealingKey::from_bytes([7u8; 32]);
        let mut data = from_base64(&key.seal(b"payload")).unwrap();
        let last = data.len() - 1;
        data[last] ^= 0x01;
        assert_eq!(
            key.open(&to_base64(&data)),
            Err(CryptoError::AuthenticationFailed)
        );
    }

    #[test]
    fn test_open_garbage() {
        let key = SealingKey::from_bytes([7u8; 32]);
        assert_eq!(key.open("not base64 !!"), Err(CryptoError::InvalidEncoding));
        assert_eq!(
            key.open(&to_base64(b"short")),
            Err(CryptoError::Truncated { min: 28, actual: 5 })
        );
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SealingKey::from_bytes([0xAB; 32]);
        assert_eq!(format!("{key:?}"), "SealingKey { .. }");
    }
}
