// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Email verification-code issuance and redemption for Folio.
//!
//! Issues short-lived 6-digit codes, persists them through a
//! [`folio_core::CodeStore`], delivers them via a
//! [`folio_core::CodeSender`], and redeems them against the store's
//! atomic validation primitive, propagating the email-verified flag to
//! the external identity provider on success.

pub mod code;
pub mod identity;
pub mod sender;
pub mod service;

pub use code::generate_code;
pub use identity::HttpIdentityDirectory;
pub use sender::{ConsoleSender, SmtpSender};
pub use service::VerificationService;
