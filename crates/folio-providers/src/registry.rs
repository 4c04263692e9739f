// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider registry: binds each provider to its endpoint, credential,
//! and default model, and routes completion requests to the right client.

use async_trait::async_trait;
use tracing::warn;

use folio_config::model::{ProviderConfig, ProvidersConfig};
use folio_core::{ChatCompleter, ChatTurn, FolioError, Provider, ProviderSelection};

use crate::client::ChatClient;
use crate::types::{ChatCompletionRequest, WireMessage, CHAT_TEMPERATURE, FALLBACK_REPLY};

/// Compiled default base endpoint for a provider.
pub fn default_base_url(provider: Provider) -> &'static str {
    match provider {
        Provider::Gemini => "https://generativelanguage.googleapis.com/v1beta/openai",
        Provider::Openrouter => "https://openrouter.ai/api/v1",
        Provider::Groq => "https://api.groq.com/openai/v1",
    }
}

/// Compiled default model for a provider.
pub fn default_model(provider: Provider) -> &'static str {
    match provider {
        Provider::Gemini => "gemini-2.0-flash",
        Provider::Openrouter => "meta-llama/llama-4-scout-17b-16e-instruct",
        Provider::Groq => "llama-3.2-11b-vision-preview",
    }
}

/// One client per member of the provider set, built once at startup.
pub struct ProviderRouter {
    gemini: ChatClient,
    openrouter: ChatClient,
    groq: ChatClient,
}

impl ProviderRouter {
    /// Build all clients from configuration.
    ///
    /// A missing API key is logged and replaced with a dummy value so the
    /// failure surfaces as an upstream auth error on first use rather
    /// than aborting startup.
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, FolioError> {
        Ok(Self {
            gemini: build_client(Provider::Gemini, &config.gemini)?,
            openrouter: build_client(Provider::Openrouter, &config.openrouter)?,
            groq: build_client(Provider::Groq, &config.groq)?,
        })
    }

    fn client(&self, provider: Provider) -> &ChatClient {
        match provider {
            Provider::Gemini => &self.gemini,
            Provider::Openrouter => &self.openrouter,
            Provider::Groq => &self.groq,
        }
    }
}

fn build_client(provider: Provider, config: &ProviderConfig) -> Result<ChatClient, FolioError> {
    let api_key = match config.api_key.as_deref() {
        Some(key) if !key.is_empty() => key,
        _ => {
            warn!(provider = %provider, "no API key configured; upstream calls will fail auth");
            "dummy-key"
        }
    };
    let base_url = config
        .base_url
        .as_deref()
        .unwrap_or_else(|| default_base_url(provider));
    let model = config
        .default_model
        .as_deref()
        .unwrap_or_else(|| default_model(provider));
    ChatClient::new(api_key, base_url, model)
}

#[async_trait]
impl ChatCompleter for ProviderRouter {
    async fn complete(
        &self,
        selection: &ProviderSelection,
        system: &str,
        transcript: &[ChatTurn],
    ) -> Result<String, FolioError> {
        let client = self.client(selection.provider);

        let model = selection
            .model
            .clone()
            .unwrap_or_else(|| client.default_model().to_string());

        let mut messages = Vec::with_capacity(transcript.len() + 1);
        messages.push(WireMessage {
            role: folio_core::ChatRole::System,
            content: system.to_string(),
        });
        messages.extend(transcript.iter().map(WireMessage::from));

        let request = ChatCompletionRequest {
            model,
            messages,
            temperature: CHAT_TEMPERATURE,
        };

        let response = client.complete(&request).await?;
        Ok(response
            .first_content()
            .unwrap_or(FALLBACK_REPLY)
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_config::model::ProvidersConfig;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn router_against(server: &MockServer) -> ProviderRouter {
        let uri = server.uri();
        let mut config = ProvidersConfig::default();
        for section in [&mut config.gemini, &mut config.openrouter, &mut config.groq] {
            section.api_key = Some("test-key".to_string());
            section.base_url = Some(uri.clone());
        }
        ProviderRouter::from_config(&config).unwrap()
    }

    fn reply_body(content: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"index": 0, "message": {"role": "assistant", "content": content}}]
        })
    }

    #[tokio::test]
    async fn prepends_exactly_one_system_turn() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [
                    {"role": "system", "content": "scoped instructions"},
                    {"role": "user", "content": "What is a humanoid?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("A robot.")))
            .expect(1)
            .mount(&server)
            .await;

        let router = router_against(&server);
        let reply = router
            .complete(
                &ProviderSelection::new(Provider::Groq),
                "scoped instructions",
                &[ChatTurn::user("What is a humanoid?")],
            )
            .await
            .unwrap();
        assert_eq!(reply, "A robot.");
        server.verify().await;
    }

    #[tokio::test]
    async fn empty_transcript_sends_only_the_system_turn() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "messages": [{"role": "system", "content": "rules only"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("Ask me anything about the book.")))
            .mount(&server)
            .await;

        let router = router_against(&server);
        let reply = router
            .complete(&ProviderSelection::new(Provider::Gemini), "rules only", &[])
            .await
            .unwrap();
        assert_eq!(reply, "Ask me anything about the book.");
    }

    #[tokio::test]
    async fn absent_model_resolves_to_provider_default() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "meta-llama/llama-4-scout-17b-16e-instruct"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let router = router_against(&server);
        router
            .complete(
                &ProviderSelection::new(Provider::Openrouter),
                "sys",
                &[ChatTurn::user("hi")],
            )
            .await
            .unwrap();
        server.verify().await;
    }

    #[tokio::test]
    async fn explicit_model_passes_through_unvalidated() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "totally-made-up-model"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let router = router_against(&server);
        router
            .complete(
                &ProviderSelection::with_model(Provider::Groq, "totally-made-up-model"),
                "sys",
                &[ChatTurn::user("hi")],
            )
            .await
            .unwrap();
        server.verify().await;
    }

    #[tokio::test]
    async fn missing_reply_text_falls_back_to_fixed_string() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let router = router_against(&server);
        let reply = router
            .complete(
                &ProviderSelection::new(Provider::Gemini),
                "sys",
                &[ChatTurn::user("hi")],
            )
            .await
            .unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn upstream_error_surfaces_as_provider_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let router = router_against(&server);
        let err = router
            .complete(
                &ProviderSelection::new(Provider::Groq),
                "sys",
                &[ChatTurn::user("hi")],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::Provider { .. }));
    }

    #[test]
    fn compiled_defaults_cover_every_provider() {
        for provider in Provider::ALL {
            assert!(default_base_url(provider).starts_with("https://"));
            assert!(!default_model(provider).is_empty());
        }
    }

    #[test]
    fn missing_api_key_still_builds_a_router() {
        let config = ProvidersConfig::default();
        assert!(ProviderRouter::from_config(&config).is_ok());
    }
}
