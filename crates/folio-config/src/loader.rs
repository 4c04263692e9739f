// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./folio.toml` > `~/.config/folio/folio.toml` >
//! `/etc/folio/folio.toml` with environment variable overrides via the
//! `FOLIO_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::FolioConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/folio/folio.toml` (system-wide)
/// 3. `~/.config/folio/folio.toml` (user XDG config)
/// 4. `./folio.toml` (local directory)
/// 5. `FOLIO_*` environment variables
pub fn load_config() -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file("/etc/folio/folio.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("folio/folio.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("folio.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<FolioConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(FolioConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `FOLIO_VERIFY_CODE_TTL_MINUTES` must
/// map to `verify.code_ttl_minutes`, not `verify.code.ttl.minutes`. The
/// nested provider tables get their own explicit mappings.
fn env_provider() -> Env {
    Env::prefixed("FOLIO_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: FOLIO_PROVIDERS_GROQ_API_KEY -> "providers_groq_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("providers_gemini_", "providers.gemini.", 1)
            .replacen("providers_openrouter_", "providers.openrouter.", 1)
            .replacen("providers_groq_", "providers.groq.", 1)
            .replacen("server_", "server.", 1)
            .replacen("agent_", "agent.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("verify_", "verify.", 1)
            .replacen("smtp_", "smtp.", 1)
            .replacen("identity_", "identity.", 1);
        mapped.into()
    })
}
