// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion seam between the gateway and the provider router.

use async_trait::async_trait;

use crate::error::FolioError;
use crate::types::{ChatTurn, ProviderSelection};

/// Dispatches one chat-completion request to an upstream provider.
///
/// Implementations are stateless per call: the full transcript is supplied
/// on every invocation and nothing is retained between calls. Exactly one
/// upstream attempt is made per call; retrying is the caller's explicit
/// action.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Sends `system` followed by `transcript` (verbatim, in order) to the
    /// selected provider and returns the single reply text.
    async fn complete(
        &self,
        selection: &ProviderSelection,
        system: &str,
        transcript: &[ChatTurn],
    ) -> Result<String, FolioError>;
}
