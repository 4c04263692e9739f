// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, a positive code TTL, and a
//! complete SMTP section when the SMTP sender is selected.

use crate::diagnostic::ConfigError;
use crate::model::FolioConfig;

/// Sender kinds accepted by `verify.sender`.
pub const SENDER_KINDS: [&str; 2] = ["console", "smtp"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)`
/// with all collected validation errors (does not fail fast).
pub fn validate_config(config: &FolioConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host is not empty and looks like an IP or hostname
    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if config.server.port == 0 {
        errors.push(ConfigError::Validation {
            message: "server.port must not be 0".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.verify.code_ttl_minutes < 1 {
        errors.push(ConfigError::Validation {
            message: format!(
                "verify.code_ttl_minutes must be at least 1, got {}",
                config.verify.code_ttl_minutes
            ),
        });
    }

    if !SENDER_KINDS.contains(&config.verify.sender.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "verify.sender must be one of {:?}, got `{}`",
                SENDER_KINDS, config.verify.sender
            ),
        });
    }

    // The SMTP section must be complete when the SMTP sender is selected.
    if config.verify.sender == "smtp" {
        for (key, value) in [
            ("smtp.relay", &config.smtp.relay),
            ("smtp.from", &config.smtp.from),
        ] {
            if value.as_deref().map(str::trim).unwrap_or("").is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("{key} is required when verify.sender = \"smtp\""),
                });
            }
        }
    }

    // A service key without a base URL can never be used.
    if config.identity.service_key.is_some() && config.identity.base_url.is_none() {
        errors.push(ConfigError::Validation {
            message: "identity.service_key is set but identity.base_url is missing".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
