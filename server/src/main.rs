mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::rate_limit::{RateLimitConfig, RateLimiter};
use crate::services::sink::{LeadForwarder, LogForwarder, WebhookForwarder};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env().expect("invalid server configuration");

    let forwarder: Arc<dyn LeadForwarder> = match config.webhook {
        Some(webhook) => {
            let forwarder = WebhookForwarder::new(webhook).expect("webhook client init failed");
            tracing::info!(url = %forwarder.url(), "forwarding leads to webhook");
            Arc::new(forwarder)
        }
        None => {
            tracing::warn!("LEAD_WEBHOOK_URL not set; accepted leads will only be logged");
            Arc::new(LogForwarder)
        }
    };

    let limits = RateLimitConfig::from_env();
    tracing::info!(
        per_client = limits.per_client_limit,
        global = limits.global_limit,
        "lead rate limits configured"
    );
    if config.trust_proxy_headers {
        tracing::info!("rate limiting on proxy-forwarded client addresses");
    }
    let state = state::AppState::new(forwarder, RateLimiter::new(limits), config.trust_proxy_headers);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "luxor landing listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
