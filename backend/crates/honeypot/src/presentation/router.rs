//! Honeypot Router

use crate::application::honeypot::Honeypot;
use crate::presentation::handlers::{self, HoneypotAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the honeypot router
///
/// - `GET /props` - field descriptors for a freshly rendered form
/// - `POST /check` - validate an urlencoded submission
pub fn honeypot_router(honeypot: Arc<Honeypot>) -> Router {
    let state = HoneypotAppState::new(honeypot);

    Router::new()
        .route("/props", get(handlers::input_props))
        .route("/check", post(handlers::check_submission))
        .with_state(state)
}
