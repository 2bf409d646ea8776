//! HTTP Handlers

use crate::application::honeypot::Honeypot;
use crate::error::SpamResult;
use crate::presentation::dto::InputPropsResponse;
use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use std::sync::Arc;

/// Shared state for honeypot handlers
#[derive(Clone)]
pub struct HoneypotAppState {
    pub honeypot: Arc<Honeypot>,
}

impl HoneypotAppState {
    pub fn new(honeypot: Arc<Honeypot>) -> Self {
        Self { honeypot }
    }
}

/// GET /api/honeypot/props
pub async fn input_props(State(state): State<HoneypotAppState>) -> Json<InputPropsResponse> {
    Json(state.honeypot.input_props().into())
}

/// POST /api/honeypot/check
///
/// Accepts the urlencoded form exactly as the browser submitted it.
pub async fn check_submission(
    State(state): State<HoneypotAppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> SpamResult<StatusCode> {
    state.honeypot.check(&fields)?;

    tracing::info!(fields = fields.len(), "Honeypot check passed");

    Ok(StatusCode::NO_CONTENT)
}
