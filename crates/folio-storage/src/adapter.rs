// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the CodeStore trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use folio_config::model::StorageConfig;
use folio_core::{CodeStore, FolioError, VerificationCode};

use crate::database::Database;
use crate::queries;

/// SQLite-backed verification-code store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query module. All access funnels through tokio-rusqlite's single
/// background thread, which is what makes `redeem_code` atomic.
pub struct SqliteCodeStore {
    db: Database,
}

impl SqliteCodeStore {
    /// Open the store at the configured path, running migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, FolioError> {
        let db = Database::open(config).await?;
        debug!(path = %config.database_path, "SQLite code store opened");
        Ok(Self { db })
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Checkpoint and release the store.
    pub async fn close(&self) -> Result<(), FolioError> {
        self.db.close().await
    }
}

#[async_trait]
impl CodeStore for SqliteCodeStore {
    async fn insert_code(&self, code: &VerificationCode) -> Result<(), FolioError> {
        queries::codes::insert_code(&self.db, code).await
    }

    async fn redeem_code(
        &self,
        email: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<bool, FolioError> {
        queries::codes::redeem_code(&self.db, email, code, now).await
    }

    async fn ping(&self) -> Result<(), FolioError> {
        queries::codes::ping(&self.db).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Arc;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    #[tokio::test]
    async fn full_code_lifecycle_through_adapter() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("lifecycle.db");
        let store = SqliteCodeStore::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();

        let now = Utc::now();
        let code = VerificationCode {
            email: "user@example.com".to_string(),
            code: "246810".to_string(),
            expires_at: now + Duration::minutes(15),
        };

        store.insert_code(&code).await.unwrap();
        assert!(store.redeem_code("user@example.com", "246810", now).await.unwrap());
        assert!(!store.redeem_code("user@example.com", "246810", now).await.unwrap());

        store.ping().await.unwrap();
        store.close().await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_inserts_both_persist() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("concurrent.db");
        let store = Arc::new(
            SqliteCodeStore::open(&make_config(db_path.to_str().unwrap()))
                .await
                .unwrap(),
        );

        let now = Utc::now();
        let expires = now + Duration::minutes(15);
        let mut handles = Vec::new();
        for i in 0..2 {
            let store = Arc::clone(&store);
            let code = VerificationCode {
                email: "race@example.com".to_string(),
                code: format!("90000{i}"),
                expires_at: expires,
            };
            handles.push(tokio::spawn(async move {
                store.insert_code(&code).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        // Both rows are live and independently redeemable.
        assert!(store.redeem_code("race@example.com", "900000", now).await.unwrap());
        assert!(store.redeem_code("race@example.com", "900001", now).await.unwrap());

        store.close().await.unwrap();
    }
}
