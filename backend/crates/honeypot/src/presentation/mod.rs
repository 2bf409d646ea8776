//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::HoneypotAppState;
pub use middleware::require_honeypot;
pub use router::honeypot_router;
