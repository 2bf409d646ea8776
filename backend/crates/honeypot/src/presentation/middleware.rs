//! Honeypot Middleware

use crate::presentation::handlers::HoneypotAppState;
use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Largest urlencoded body the middleware will buffer
pub const MAX_FORM_BODY_BYTES: usize = 64 * 1024;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Middleware that rejects form submissions failing the honeypot check.
///
/// Only `application/x-www-form-urlencoded` bodies are supported; anything
/// else (including `multipart/form-data`) is answered with
/// `415 Unsupported Media Type`. The body is buffered, checked, and handed on
/// unchanged to the inner handler.
///
/// ```ignore
/// Router::new()
///     .route("/contact", post(submit_contact))
///     .route_layer(axum::middleware::from_fn_with_state(state, require_honeypot));
/// ```
pub async fn require_honeypot(
    State(state): State<HoneypotAppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if !is_form_urlencoded(req.headers()) {
        tracing::debug!("Honeypot middleware received a non-urlencoded body");
        return Err((StatusCode::UNSUPPORTED_MEDIA_TYPE, ()).into_response());
    }

    let (parts, body) = req.into_parts();

    let bytes = match to_bytes(body, MAX_FORM_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::debug!(error = %e, "Failed to buffer form body");
            return Err((StatusCode::PAYLOAD_TOO_LARGE, ()).into_response());
        }
    };

    let fields: Vec<(String, String)> = url::form_urlencoded::parse(&bytes)
        .into_owned()
        .collect();

    if let Err(e) = state.honeypot.check(&fields) {
        return Err(e.into_response());
    }

    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}

fn is_form_urlencoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_is_form_urlencoded() {
        assert!(is_form_urlencoded(&headers("application/x-www-form-urlencoded")));
        assert!(is_form_urlencoded(&headers(
            "Application/X-WWW-Form-Urlencoded; charset=UTF-8"
        )));
        assert!(!is_form_urlencoded(&headers("multipart/form-data; boundary=x")));
        assert!(!is_form_urlencoded(&headers("application/json")));
        assert!(!is_form_urlencoded(&HeaderMap::new()));
    }
}
