//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographically secure randomness
//! - SHA-256 and Base64 helpers
//! - Authenticated symmetric encryption for client round-tripped tokens

pub mod crypto;
