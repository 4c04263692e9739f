// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types shared across the Folio services.

use thiserror::Error;

/// The primary error type used across the verification service and the
/// chat gateway.
///
/// Local validation errors (`MalformedRequest`, `UnsupportedProvider`) are
/// raised before any external call is made. Boundary errors (`Storage`,
/// `Provider`, `Delivery`, `Identity`) carry diagnostic detail for
/// server-side logs; that detail never reaches a client response body.
#[derive(Debug, Error)]
pub enum FolioError {
    /// Configuration errors (invalid TOML, missing required fields).
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller input shape violation, detected locally.
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Provider name outside the enumerated set, detected locally.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// Persistence read/write failure.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Upstream completion API failure (transport error or API error).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Code delivery failure (email transport).
    #[error("delivery error: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Identity-directory write failure (email-verified propagation).
    #[error("identity error: {message}")]
    Identity {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl FolioError {
    /// True for errors raised by local input validation, before any
    /// network or storage call.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            FolioError::MalformedRequest(_) | FolioError::UnsupportedProvider(_)
        )
    }
}
