// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the external identity provider's admin surface.
//!
//! Folio writes exactly one key into the provider's user metadata bag:
//! `email_verified`, set after a successful code redemption. Everything
//! else about accounts and sessions belongs to the provider.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use folio_core::{FolioError, IdentityDirectory};

/// Identity-directory client speaking to the provider's admin API.
#[derive(Debug, Clone)]
pub struct HttpIdentityDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIdentityDirectory {
    /// Create a client for the admin API at `base_url`, authenticating
    /// with the optional bearer `service_key`.
    pub fn new(base_url: impl Into<String>, service_key: Option<&str>) -> Result<Self, FolioError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        if let Some(key) = service_key {
            let mut auth = HeaderValue::from_str(&format!("Bearer {key}")).map_err(|e| {
                FolioError::Config(format!("invalid identity service key header value: {e}"))
            })?;
            auth.set_sensitive(true);
            headers.insert("authorization", auth);
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FolioError::Identity {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl IdentityDirectory for HttpIdentityDirectory {
    async fn mark_email_verified(&self, email: &str) -> Result<(), FolioError> {
        let url = format!("{}/admin/v1/users/{email}/metadata", self.base_url);

        let response = self
            .client
            .patch(&url)
            .json(&serde_json::json!({ "email_verified": true }))
            .send()
            .await
            .map_err(|e| FolioError::Identity {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FolioError::Identity {
                message: format!("identity provider returned {status}: {body}"),
                source: None,
            });
        }

        debug!(%email, "email-verified flag propagated");
        Ok(())
    }
}
