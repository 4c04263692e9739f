// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Folio services.
//!
//! This crate provides the error type, domain types, and trait seams used
//! throughout the Folio workspace: the chat-completion gateway and the
//! email-verification-code service both build on what is defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::FolioError;
pub use types::{ChatRole, ChatTurn, Provider, ProviderSelection, VerificationCode};

pub use traits::{ChatCompleter, CodeSender, CodeStore, IdentityDirectory};
