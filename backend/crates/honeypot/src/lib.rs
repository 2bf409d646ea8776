//! Honeypot Form Guard
//!
//! Clean Architecture structure:
//! - `domain/` - Field naming, valid-from cipher and time window policy
//! - `application/` - Configuration and the [`Honeypot`] use cases
//! - `presentation/` - HTTP handlers, middleware and router
//!
//! ## Security Model
//! - The trap field is hidden by the page; any value in it marks a bot
//! - The render timestamp travels through the client encrypted with
//!   AES-256-GCM, so it cannot be forged or moved without the seed
//! - No server-side state: the token is the only thing round-tripped

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::HoneypotConfig;
pub use application::honeypot::{Honeypot, InputProps};
pub use domain::submission::SubmittedFields;
pub use error::{HoneypotConfigError, SpamError, SpamResult};
pub use presentation::{honeypot_router, require_honeypot};
