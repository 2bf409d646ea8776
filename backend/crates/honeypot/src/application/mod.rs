//! Application Layer - Use Cases
//!
//! Honeypot configuration and the generate/check operations.

pub mod config;
pub mod honeypot;
