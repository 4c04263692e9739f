// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Folio services.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Folio configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FolioConfig {
    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Assistant identity and corpus settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Verification-code lifecycle settings.
    #[serde(default)]
    pub verify: VerifyConfig,

    /// SMTP delivery settings (used when `verify.sender = "smtp"`).
    #[serde(default)]
    pub smtp: SmtpConfig,

    /// External identity provider settings.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Upstream completion provider settings.
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Assistant identity and corpus configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the service.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Path to the markdown file holding the book corpus spliced into the
    /// system instruction.
    #[serde(default = "default_book_content_file")]
    pub book_content_file: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            book_content_file: default_book_content_file(),
        }
    }
}

fn default_agent_name() -> String {
    "folio".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_book_content_file() -> String {
    "BOOK_CONTENT.md".to_string()
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("folio").join("folio.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("folio.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

/// Verification-code lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyConfig {
    /// Minutes an issued code stays redeemable.
    #[serde(default = "default_code_ttl_minutes")]
    pub code_ttl_minutes: i64,

    /// Delivery sender kind: "console" (development stand-in) or "smtp".
    #[serde(default = "default_sender")]
    pub sender: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: default_code_ttl_minutes(),
            sender: default_sender(),
        }
    }
}

fn default_code_ttl_minutes() -> i64 {
    15
}

fn default_sender() -> String {
    "console".to_string()
}

/// SMTP delivery configuration.
///
/// Required only when `verify.sender = "smtp"`; validation enforces that.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SmtpConfig {
    /// SMTP relay hostname.
    #[serde(default)]
    pub relay: Option<String>,

    /// Relay username.
    #[serde(default)]
    pub username: Option<String>,

    /// Relay password.
    #[serde(default)]
    pub password: Option<String>,

    /// From address on verification mail.
    #[serde(default)]
    pub from: Option<String>,
}

/// External identity provider configuration.
///
/// When `base_url` is unset the email-verified write is disabled (logged
/// once at startup); redemption then reports the primary check alone.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// Base URL of the identity provider's admin API.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Bearer service key for the admin API.
    #[serde(default)]
    pub service_key: Option<String>,
}

/// Per-provider upstream settings, keyed by provider name.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub gemini: ProviderConfig,

    #[serde(default)]
    pub openrouter: ProviderConfig,

    #[serde(default)]
    pub groq: ProviderConfig,
}

/// Settings for one upstream provider.
///
/// Unset `base_url` / `default_model` fall back to compiled per-provider
/// defaults in the provider registry; only `api_key` normally needs to be
/// supplied (via config or `FOLIO_PROVIDERS_<NAME>_API_KEY`).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key for the provider.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base endpoint URL override.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Default model override.
    #[serde(default)]
    pub default_model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = FolioConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.agent.name, "folio");
        assert_eq!(config.agent.book_content_file, "BOOK_CONTENT.md");
        assert_eq!(config.verify.code_ttl_minutes, 15);
        assert_eq!(config.verify.sender, "console");
        assert!(config.storage.wal_mode);
        assert!(config.identity.base_url.is_none());
        assert!(config.providers.gemini.api_key.is_none());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml_str = r#"
[verify]
code_ttl_minuts = 30
"#;
        assert!(toml::from_str::<FolioConfig>(toml_str).is_err());
    }

    #[test]
    fn partial_provider_section_keeps_other_fields_unset() {
        let toml_str = r#"
[providers.groq]
api_key = "gsk-123"
"#;
        let config: FolioConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.groq.api_key.as_deref(), Some("gsk-123"));
        assert!(config.providers.groq.base_url.is_none());
        assert!(config.providers.groq.default_model.is_none());
        assert!(config.providers.gemini.api_key.is_none());
    }
}
