// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible chat-completions request/response types.
//!
//! All three upstream providers accept this wire format; only the base
//! endpoint, credential, and model identifiers differ.

use folio_core::types::{ChatRole, ChatTurn};
use serde::{Deserialize, Serialize};

/// Sampling temperature for every upstream request. Fixed low to bias the
/// restricted-domain assistant toward deterministic, factual output.
pub const CHAT_TEMPERATURE: f32 = 0.3;

/// Reply substituted when a structurally-successful response carries no
/// usable text, so the caller always receives something displayable.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't generate a response.";

/// A request to a chat-completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier, already resolved (caller override or provider
    /// default).
    pub model: String,

    /// System instruction followed by the caller's transcript, verbatim.
    pub messages: Vec<WireMessage>,

    /// Sampling temperature.
    pub temperature: f32,
}

/// One message on the wire. Roles serialize lowercase, matching the
/// transcript roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: String,
}

impl From<&ChatTurn> for WireMessage {
    fn from(turn: &ChatTurn) -> Self {
        Self {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

/// A full response from a chat-completions endpoint.
///
/// Only the fields this gateway reads are modeled; providers may send
/// more.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl ChatCompletionResponse {
    /// The first completion choice's text content, if any.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .filter(|content| !content.is_empty())
    }
}

/// A single completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

/// The message within a completion choice.
#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier, when the provider sends one.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_request_wire_shape() {
        let req = ChatCompletionRequest {
            model: "gemini-2.0-flash".into(),
            messages: vec![
                WireMessage {
                    role: ChatRole::System,
                    content: "You are restricted.".into(),
                },
                WireMessage {
                    role: ChatRole::User,
                    content: "Hello".into(),
                },
            ],
            temperature: CHAT_TEMPERATURE,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gemini-2.0-flash");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Hello");
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn first_content_reads_the_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "First"}},
                {"message": {"role": "assistant", "content": "Second"}}
            ]
        }"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_content(), Some("First"));
    }

    #[test]
    fn first_content_is_none_without_usable_text() {
        let empty: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(empty.first_content(), None);

        let null_content: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert_eq!(null_content.first_content(), None);

        let empty_string: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": ""}}]}"#).unwrap();
        assert_eq!(empty_string.first_content(), None);
    }

    #[test]
    fn deserialize_api_error_with_and_without_type() {
        let with_type: ApiErrorResponse = serde_json::from_str(
            r#"{"error": {"message": "Bad model", "type": "invalid_request_error"}}"#,
        )
        .unwrap();
        assert_eq!(with_type.error.message, "Bad model");
        assert_eq!(with_type.error.type_.as_deref(), Some("invalid_request_error"));

        let without_type: ApiErrorResponse =
            serde_json::from_str(r#"{"error": {"message": "nope"}}"#).unwrap();
        assert!(without_type.error.type_.is_none());
    }
}
