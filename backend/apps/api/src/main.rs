//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level failures are
//! `honeypot::SpamError` responses.

mod contact;

use axum::Router;
use honeypot::{Honeypot, HoneypotConfig, honeypot_router};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,honeypot=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let honeypot = Arc::new(Honeypot::new(load_honeypot_config()?)?);

    tracing::info!(config = ?honeypot.config(), "Honeypot ready");

    // Build router
    let app = Router::new()
        .nest("/api/honeypot", honeypot_router(honeypot.clone()))
        .merge(contact::contact_router(honeypot))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:31113".to_string())
        .parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the honeypot configuration from `HONEYPOT_*` environment variables
fn load_honeypot_config() -> anyhow::Result<HoneypotConfig> {
    let mut config = HoneypotConfig::default();

    match env::var("HONEYPOT_ENCRYPTION_SEED") {
        Ok(seed) => config.encryption_seed = Some(seed),
        // Debug builds fall back to a per-process random seed
        Err(_) if cfg!(debug_assertions) => {
            tracing::warn!("HONEYPOT_ENCRYPTION_SEED not set, tokens will not survive a restart");
        }
        Err(_) => anyhow::bail!("HONEYPOT_ENCRYPTION_SEED must be set in production"),
    }

    if let Ok(name) = env::var("HONEYPOT_NAME_FIELD_NAME") {
        config.name_field_name = name;
    }

    if env_flag("HONEYPOT_RANDOMIZE_NAME_FIELD")? {
        config.randomize_name_field_name = true;
    }

    if env_flag("HONEYPOT_DISABLE_VALID_FROM")? {
        config.valid_from_field_name = None;
    }

    if let Ok(ms) = env::var("HONEYPOT_VALID_FROM_TIMEOUT_MS") {
        config.valid_from_timeout = Duration::from_millis(ms.parse()?);
    }

    Ok(config)
}

fn env_flag(name: &str) -> anyhow::Result<bool> {
    match env::var(name) {
        Ok(value) => Ok(value.parse()?),
        Err(_) => Ok(false),
    }
}
