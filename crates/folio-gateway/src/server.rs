// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. All handlers are
//! single-request scoped; the state holds only startup-time wiring, never
//! per-conversation data.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use folio_config::model::ServerConfig;
use folio_core::{ChatCompleter, CodeStore, FolioError};
use folio_verify::VerificationService;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Routes completion requests to the selected provider.
    pub completer: Arc<dyn ChatCompleter>,
    /// Verification-code issuance and redemption.
    pub verify: Arc<VerificationService>,
    /// Store handle, used directly only by the keep-alive probe.
    pub store: Arc<dyn CodeStore>,
    /// The synthesized system instruction, composed once at startup.
    pub system_prompt: Arc<str>,
    /// Process start time for uptime reporting.
    pub started: Instant,
}

/// Build the gateway router.
///
/// These endpoints are the browser-facing public surface of the site, so
/// CORS is permissive and there is no auth layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/v1/chat", post(handlers::post_chat))
        .route("/v1/verification-codes", post(handlers::post_issue_code))
        .route(
            "/v1/verification-codes/redeem",
            post(handlers::post_redeem_code),
        )
        .route("/v1/keepalive", get(handlers::get_keepalive))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), FolioError> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| FolioError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
