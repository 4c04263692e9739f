// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persistence seam for verification codes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::FolioError;
use crate::types::VerificationCode;

/// Durable storage for verification codes.
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Persists a new code row. Never touches prior rows for the same
    /// email: multiple simultaneously-valid codes per address are allowed.
    async fn insert_code(&self, code: &VerificationCode) -> Result<(), FolioError>;

    /// The atomic validation primitive: consumes at most one matching row
    /// for `(email, code)` that is unexpired at `now`, and reports whether
    /// a row was consumed. Expiry comparison happens inside the primitive.
    async fn redeem_code(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, FolioError>;

    /// Lightweight liveness probe used by the keep-alive endpoint.
    async fn ping(&self) -> Result<(), FolioError>;
}
