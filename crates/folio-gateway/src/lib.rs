// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Folio services.
//!
//! Exposes the chat relay and the verification-code endpoints over axum.
//! The gateway is a pure per-request translator: no session state, no
//! conversation memory beyond what the caller resends, no rate limiting,
//! and no retries.

pub mod handlers;
pub mod prompt;
pub mod server;

pub use prompt::{compose_system_prompt, load_book_content};
pub use server::{router, start_server, AppState};
