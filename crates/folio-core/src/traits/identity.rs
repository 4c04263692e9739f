// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam to the external identity provider.

use async_trait::async_trait;

use crate::error::FolioError;

/// Writes the one piece of user metadata this core owns: the
/// email-verified flag, set after a successful code redemption.
///
/// The identity provider itself (accounts, sessions, credentials) is an
/// opaque external collaborator.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Marks `email` as verified in the identity provider's user metadata.
    async fn mark_email_verified(&self, email: &str) -> Result<(), FolioError>;
}
