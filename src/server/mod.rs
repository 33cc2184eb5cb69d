// HTTP server module
// Two public endpoints over a shared read-only state

mod handlers;

pub use handlers::{
    create_router, handle_ai, handle_sales_reps, AiRequest, AiResponse, QUESTION_REQUIRED_MSG,
    SERVICE_UNAVAILABLE_MSG,
};

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::providers::LlmProvider;
use crate::store::DataStore;

/// Shared application state, constructed once at startup and passed to
/// handlers by reference. Nothing in here mutates after load.
pub struct AppState {
    /// Sales dataset snapshot
    pub store: DataStore,
    /// Configured LLM gateway; `None` when no API key was supplied
    pub provider: Option<Arc<dyn LlmProvider>>,
}

/// Start the HTTP server and serve until shutdown.
pub async fn serve(state: AppState, config: &Config) -> Result<()> {
    let addr: SocketAddr = config
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", config.bind_address))?;

    let origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("Invalid CORS origin '{}'", config.cors_origin))?;

    // Mirrored headers rather than a wildcard: credentials are allowed, and
    // tower-http rejects wildcard values in that combination.
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    // Natural-language questions are small; 1MB blocks oversized payloads.
    let app = create_router(Arc::new(state))
        .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting salesdesk server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
