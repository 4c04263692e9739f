// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Verification-code operations.
//!
//! `redeem_code` is the atomic validation primitive: one DELETE consumes
//! at most one matching, unexpired row, so a code can never validate
//! twice even under concurrent redemption.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_core::FolioError;
use rusqlite::params;

use crate::database::Database;
use crate::models::VerificationCode;

/// Render a timestamp the way rows store them: RFC 3339 UTC with
/// millisecond precision. Fixed-width, so lexicographic order equals
/// chronological order.
fn to_row_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Insert a new code row. Prior rows for the same email are untouched.
pub async fn insert_code(db: &Database, code: &VerificationCode) -> Result<(), FolioError> {
    let code = code.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO verification_codes (user_email, code, expires_at, created_at)
                 VALUES (?1, ?2, ?3, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))",
                params![
                    code.email,
                    code.code,
                    to_row_timestamp(code.expires_at),
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Consume at most one `(email, code)` row still unexpired at `now`.
///
/// Returns true iff a row was consumed. Expired and already-consumed rows
/// both report false; callers cannot distinguish the two.
pub async fn redeem_code(
    db: &Database,
    email: &str,
    code: &str,
    now: DateTime<Utc>,
) -> Result<bool, FolioError> {
    let email = email.to_string();
    let code = code.to_string();
    let now = to_row_timestamp(now);
    db.connection()
        .call(move |conn| {
            let consumed = conn.execute(
                "DELETE FROM verification_codes
                 WHERE id IN (
                     SELECT id FROM verification_codes
                      WHERE user_email = ?1 AND code = ?2 AND expires_at > ?3
                      LIMIT 1
                 )",
                params![email, code, now],
            )?;
            Ok(consumed > 0)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Lightweight probe touching the codes table, for keep-alive pings.
pub async fn ping(db: &Database) -> Result<(), FolioError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT id FROM verification_codes LIMIT 1")?;
            let mut rows = stmt.query([])?;
            let _ = rows.next()?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
