//! Example contact form protected by the honeypot

use axum::extract::{Form, State};
use axum::handler::Handler;
use axum::response::Html;
use axum::routing::get;
use axum::{Router, middleware};
use honeypot::presentation::HoneypotAppState;
use honeypot::{Honeypot, InputProps, require_honeypot};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub message: String,
}

/// `GET /contact` renders the form, `POST /contact` accepts it once the
/// honeypot check has passed.
pub fn contact_router(honeypot: Arc<Honeypot>) -> Router {
    let state = HoneypotAppState::new(honeypot);

    Router::new()
        .route(
            "/contact",
            get(render_form).post(submit_form.layer(middleware::from_fn_with_state(
                state.clone(),
                require_honeypot,
            ))),
        )
        .with_state(state)
}

async fn render_form(State(state): State<HoneypotAppState>) -> Html<String> {
    Html(render_page(&state.honeypot.input_props()))
}

async fn submit_form(Form(form): Form<ContactForm>) -> Html<String> {
    tracing::info!(message_len = form.message.len(), "Contact form accepted");
    Html("<p>Thanks, your message was received.</p>".to_string())
}

fn render_page(props: &InputProps) -> String {
    let mut hidden = format!(
        r#"<div style="position:absolute;left:-9999px" aria-hidden="true">
    <label for="{name}">Please leave this field blank</label>
    <input id="{name}" name="{name}" type="text" value="" autocomplete="off" tabindex="-1">
"#,
        name = props.name_field_name
    );
    if let (Some(field), Some(value)) = (&props.valid_from_field_name, &props.encrypted_valid_from)
    {
        hidden.push_str(&format!(
            "    <input name=\"{field}\" type=\"hidden\" value=\"{value}\">\n"
        ));
    }
    hidden.push_str("  </div>");

    format!(
        r#"<!doctype html>
<form method="post" action="/contact">
  {hidden}
  <textarea name="message"></textarea>
  <button type="submit">Send</button>
</form>
"#
    )
}
