// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upstream completion providers for the Folio chat gateway.
//!
//! One [`ChatClient`] per provider, all speaking the OpenAI-compatible
//! chat-completions wire format, plus the [`ProviderRouter`] that resolves
//! a [`folio_core::ProviderSelection`] to the bound endpoint, credential,
//! and default model.

pub mod client;
pub mod registry;
pub mod types;

pub use client::ChatClient;
pub use registry::{default_base_url, default_model, ProviderRouter};
pub use types::{FALLBACK_REPLY, CHAT_TEMPERATURE};
