// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for an OpenAI-compatible chat-completions endpoint.
//!
//! Provides [`ChatClient`] which handles request construction, bearer
//! authentication, and error normalization. Exactly one upstream attempt
//! is made per call: the interactive chat UI retries manually, so the
//! gateway never retries on its own.

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use folio_core::FolioError;

use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client bound to one provider's chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: reqwest::Client,
    base_url: String,
    default_model: String,
}

impl ChatClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Arguments
    /// * `api_key` - bearer credential for the provider
    /// * `base_url` - endpoint base, e.g. `https://api.groq.com/openai/v1`
    /// * `default_model` - model used when the caller supplies none
    pub fn new(
        api_key: &str,
        base_url: impl Into<String>,
        default_model: impl Into<String>,
    ) -> Result<Self, FolioError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
            FolioError::Config(format!("invalid API key header value: {e}"))
        })?;
        auth.set_sensitive(true);
        headers.insert("authorization", auth);
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        // No explicit timeout: the effective timeout is the HTTP client's
        // default, and recovery is the caller's explicit action.
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FolioError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model: default_model.into(),
        })
    }

    /// Returns the default model identifier.
    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    /// Sends one completion request and returns the parsed response.
    ///
    /// Any transport failure or non-success status normalizes to
    /// [`FolioError::Provider`] carrying the status and body detail for
    /// server-side logs.
    pub async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, FolioError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| FolioError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %request.model, "completion response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => match api_err.error.type_ {
                    Some(type_) => {
                        format!("API error ({type_}): {}", api_err.error.message)
                    }
                    None => format!("API error: {}", api_err.error.message),
                },
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(FolioError::Provider {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| FolioError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| FolioError::Provider {
            message: format!("failed to parse API response: {e}"),
            source: Some(Box::new(e)),
        })
    }
}
