// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Out-of-band delivery seam for verification codes.

use async_trait::async_trait;

use crate::error::FolioError;

/// Delivers an issued verification code to its recipient.
#[async_trait]
pub trait CodeSender: Send + Sync {
    /// Sends `code` to `email`. Implementations range from the
    /// development-mode console sender (logs the code) to SMTP.
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), FolioError>;
}
