// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verification-code issuance and redemption.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, error};

use folio_core::{CodeSender, CodeStore, FolioError, IdentityDirectory, VerificationCode};

use crate::code::generate_code;

/// Orchestrates the verification-code lifecycle against the store, the
/// delivery sender, and the identity directory.
///
/// Stateless between calls; safe to share behind an `Arc`.
pub struct VerificationService {
    store: Arc<dyn CodeStore>,
    sender: Arc<dyn CodeSender>,
    /// `None` disables the email-verified write (development deployments
    /// without an identity provider).
    directory: Option<Arc<dyn IdentityDirectory>>,
    code_ttl: Duration,
}

impl VerificationService {
    pub fn new(
        store: Arc<dyn CodeStore>,
        sender: Arc<dyn CodeSender>,
        directory: Option<Arc<dyn IdentityDirectory>>,
        code_ttl_minutes: i64,
    ) -> Self {
        Self {
            store,
            sender,
            directory,
            code_ttl: Duration::minutes(code_ttl_minutes),
        }
    }

    /// Issue a fresh code for `email`: generate, persist, deliver.
    ///
    /// Prior outstanding codes for the same email are left valid; issuing
    /// never invalidates them. If the persistence write fails the code is
    /// never delivered. Email shape validation is the caller's concern.
    pub async fn issue(&self, email: &str) -> Result<String, FolioError> {
        let code = generate_code();
        let record = VerificationCode {
            email: email.to_string(),
            code: code.clone(),
            expires_at: Utc::now() + self.code_ttl,
        };

        self.store.insert_code(&record).await?;
        self.sender.send_verification(email, &code).await?;
        Ok(code)
    }

    /// Redeem `code` for `email`.
    ///
    /// Delegates validity entirely to the store's atomic primitive and
    /// fails closed: an infrastructure error during validation reads as
    /// "not valid", never as a pass. A successful validation whose
    /// follow-up email-verified write fails is downgraded to `false`:
    /// the code is consumed, but the caller is told verification did not
    /// complete.
    pub async fn redeem(&self, email: &str, code: &str) -> bool {
        let valid = match self.store.redeem_code(email, code, Utc::now()).await {
            Ok(valid) => valid,
            Err(e) => {
                error!(error = %e, %email, "code validation primitive failed; treating as invalid");
                return false;
            }
        };

        if !valid {
            return false;
        }

        match &self.directory {
            Some(directory) => {
                if let Err(e) = directory.mark_email_verified(email).await {
                    error!(
                        error = %e,
                        %email,
                        "email-verified propagation failed after successful redemption"
                    );
                    return false;
                }
            }
            None => {
                debug!(%email, "identity directory disabled; skipping email-verified write");
            }
        }

        true
    }
}
