// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Local validation always runs before any upstream or storage call, and
//! boundary failures collapse to fixed client-facing messages: internal
//! detail (provider status codes, payloads) goes to server-side logs only.

use std::str::FromStr;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use folio_core::{ChatTurn, Provider, ProviderSelection};

use crate::server::AppState;

/// Client-facing message for transcript shape violations.
const MALFORMED_MESSAGES: &str = "Invalid messages format";

/// Client-facing message for providers outside the enumerated set.
const UNSUPPORTED_PROVIDER: &str = "Invalid provider selected";

/// Generic client-facing message for upstream completion failures.
const CHAT_UNAVAILABLE: &str = "The assistant is unavailable right now. Please try again.";

/// Generic client-facing message for code issuance failures.
const ISSUE_FAILED: &str = "Failed to send verification code";

/// Client-facing message for keep-alive failures.
const KEEPALIVE_FAILED: &str = "Keep-alive ping failed";

/// Request body for POST /v1/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Caller transcript. Optional so that its absence is reported as a
    /// malformed request rather than a body-rejection.
    #[serde(default)]
    pub messages: Option<Vec<ChatTurn>>,
    /// Provider name; validated against the enumerated set.
    #[serde(default)]
    pub provider: Option<String>,
    /// Optional model override, passed through unvalidated.
    #[serde(default)]
    pub model: Option<String>,
}

/// Response body for POST /v1/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// The single reply text.
    pub reply: String,
}

/// Request body for POST /v1/verification-codes.
#[derive(Debug, Deserialize)]
pub struct IssueCodeRequest {
    pub email: String,
}

/// Response body for POST /v1/verification-codes.
#[derive(Debug, Serialize)]
pub struct IssueCodeResponse {
    pub status: String,
}

/// Request body for POST /v1/verification-codes/redeem.
#[derive(Debug, Deserialize)]
pub struct RedeemCodeRequest {
    pub email: String,
    pub code: String,
}

/// Response body for POST /v1/verification-codes/redeem.
#[derive(Debug, Serialize)]
pub struct RedeemCodeResponse {
    pub verified: bool,
}

/// Response body for GET /v1/keepalive.
#[derive(Debug, Serialize)]
pub struct KeepAliveResponse {
    pub status: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> axum::response::Response {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// POST /v1/chat
///
/// Relays the caller's transcript to the selected provider, prepending the
/// synthesized system instruction. Precondition checks run in order
/// (transcript shape, then provider membership) before any network call.
pub async fn post_chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> axum::response::Response {
    let Some(messages) = body.messages else {
        return error_response(StatusCode::BAD_REQUEST, MALFORMED_MESSAGES);
    };

    let provider_name = body.provider.unwrap_or_default();
    let Ok(provider) = Provider::from_str(&provider_name) else {
        debug!(provider = %provider_name, "rejected unknown provider");
        return error_response(StatusCode::BAD_REQUEST, UNSUPPORTED_PROVIDER);
    };

    let selection = ProviderSelection {
        provider,
        model: body.model,
    };

    match state
        .completer
        .complete(&selection, &state.system_prompt, &messages)
        .await
    {
        Ok(reply) => (StatusCode::OK, Json(ChatResponse { reply })).into_response(),
        Err(e) => {
            // Provider status codes and bodies stay in the logs.
            error!(provider = %provider, error = %e, "chat completion failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, CHAT_UNAVAILABLE)
        }
    }
}

/// POST /v1/verification-codes
///
/// Issues and delivers a fresh code. The code itself never appears in the
/// response; delivery is the sender's job.
pub async fn post_issue_code(
    State(state): State<AppState>,
    Json(body): Json<IssueCodeRequest>,
) -> axum::response::Response {
    if body.email.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Email is required");
    }

    match state.verify.issue(&body.email).await {
        Ok(_code) => (
            StatusCode::ACCEPTED,
            Json(IssueCodeResponse {
                status: "sent".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(email = %body.email, error = %e, "code issuance failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, ISSUE_FAILED)
        }
    }
}

/// POST /v1/verification-codes/redeem
///
/// Validates and consumes a submitted code. Infrastructure failures read
/// as `verified: false` -- the service fails closed, never open.
pub async fn post_redeem_code(
    State(state): State<AppState>,
    Json(body): Json<RedeemCodeRequest>,
) -> Json<RedeemCodeResponse> {
    let verified = state.verify.redeem(&body.email, &body.code).await;
    Json(RedeemCodeResponse { verified })
}

/// GET /v1/keepalive
///
/// Touches the verification-code table so the hosted database counts
/// activity. Wired to an external cron in deployment.
pub async fn get_keepalive(State(state): State<AppState>) -> axum::response::Response {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(KeepAliveResponse {
                status: "ok".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "keep-alive ping failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, KEEPALIVE_FAILED)
        }
    }
}

/// GET /health
///
/// Liveness only; touches no dependencies.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}
