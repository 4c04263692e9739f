// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, WAL mode, and lifecycle.
//!
//! All access is serialized through tokio-rusqlite's single background
//! thread. Do NOT create additional Connection instances for writes.

use folio_config::model::StorageConfig;
use folio_core::FolioError;
use tracing::debug;

use crate::migrations;

/// Handle to the SQLite database.
///
/// Opening runs PRAGMA setup and all pending embedded migrations.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open (creating if needed) the database at the configured path.
    pub async fn open(config: &StorageConfig) -> Result<Self, FolioError> {
        let path = config.database_path.clone();

        if let Some(parent) = std::path::Path::new(&path).parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| FolioError::Storage {
                source: Box::new(e),
            })?;
        }

        let conn = tokio_rusqlite::Connection::open(&path)
            .await
            .map_err(|e| map_tr_err(e.into()))?;

        let wal_mode = config.wal_mode;
        let migration_result = conn
            .call(move |conn| {
                if wal_mode {
                    // journal_mode returns the resulting mode as a row.
                    let _mode: String =
                        conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
                }
                conn.execute_batch(
                    "PRAGMA synchronous = NORMAL;
                     PRAGMA foreign_keys = ON;
                     PRAGMA busy_timeout = 5000;",
                )?;
                Ok(migrations::run_migrations(conn))
            })
            .await
            .map_err(map_tr_err)?;
        migration_result?;

        debug!(path = %path, wal_mode, "database opened");
        Ok(Self { conn })
    }

    /// Returns the underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Checkpoint the WAL and close the background thread.
    pub async fn close(&self) -> Result<(), FolioError> {
        self.conn
            .call(|conn| {
                conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
                Ok(())
            })
            .await
            .map_err(map_tr_err)?;
        debug!("WAL checkpoint complete");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error variant.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> FolioError {
    FolioError::Storage {
        source: Box::new(e),
    }
}
