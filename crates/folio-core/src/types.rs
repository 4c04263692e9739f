// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the chat gateway and the verification service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Role of a single conversation turn.
///
/// Callers supply only `user` and `assistant` turns; a `system` turn is
/// synthesized by the gateway and prepended to every upstream request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

/// One role-tagged turn in a conversation transcript.
///
/// Transcripts are ordered, caller-supplied sequences. The gateway treats
/// them as immutable: it never reorders turns, only prepends its system
/// instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }
}

/// The enumerated set of upstream completion providers.
///
/// All three speak the OpenAI chat-completions wire format; each is bound
/// to its own base endpoint, credential, and default model. A request
/// naming anything outside this set is rejected before any upstream call.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Provider {
    Gemini,
    Openrouter,
    Groq,
}

impl Provider {
    /// All members of the enumerated set, in a fixed order.
    pub const ALL: [Provider; 3] = [Provider::Gemini, Provider::Openrouter, Provider::Groq];
}

/// A provider choice plus an optional caller-supplied model override.
///
/// An absent model resolves to the provider's configured default; a present
/// model is passed through unvalidated, so an invalid name surfaces as an
/// upstream error rather than a local one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSelection {
    pub provider: Provider,
    pub model: Option<String>,
}

impl ProviderSelection {
    pub fn new(provider: Provider) -> Self {
        Self {
            provider,
            model: None,
        }
    }

    pub fn with_model(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: Some(model.into()),
        }
    }
}

/// A persisted one-time email verification code.
///
/// `code` is a 6-digit numeric string drawn uniformly from
/// [100000, 999999]. A row is redeemable only while `now < expires_at`;
/// redemption consumes it. Expired rows stay inert (purging is a
/// housekeeping concern outside this core).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    pub email: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn chat_role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ChatRole::User).unwrap(), "user");
        assert_eq!(
            serde_json::to_value(ChatRole::Assistant).unwrap(),
            "assistant"
        );
        assert_eq!(serde_json::to_value(ChatRole::System).unwrap(), "system");
    }

    #[test]
    fn provider_round_trips_through_display_and_from_str() {
        for provider in Provider::ALL {
            let s = provider.to_string();
            assert_eq!(Provider::from_str(&s).unwrap(), provider);
        }
    }

    #[test]
    fn provider_rejects_unknown_names() {
        assert!(Provider::from_str("openai").is_err());
        assert!(Provider::from_str("").is_err());
        assert!(Provider::from_str("Gemini ").is_err());
    }

    #[test]
    fn provider_deserializes_from_lowercase_json() {
        let p: Provider = serde_json::from_str("\"openrouter\"").unwrap();
        assert_eq!(p, Provider::Openrouter);
        assert!(serde_json::from_str::<Provider>("\"acme\"").is_err());
    }

    #[test]
    fn chat_turn_constructors_set_roles() {
        assert_eq!(ChatTurn::user("hi").role, ChatRole::User);
        assert_eq!(ChatTurn::assistant("hello").role, ChatRole::Assistant);
        assert_eq!(ChatTurn::system("rules").role, ChatRole::System);
    }

    #[test]
    fn selection_defaults_to_no_model() {
        let sel = ProviderSelection::new(Provider::Groq);
        assert!(sel.model.is_none());
        let sel = ProviderSelection::with_model(Provider::Gemini, "gemini-2.0-flash");
        assert_eq!(sel.model.as_deref(), Some("gemini-2.0-flash"));
    }
}
