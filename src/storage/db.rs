//! SQLite storage layer for promptq
//!
//! A single `pending_entries` table keyed by entry id holds the staging
//! queue. The store is opened lazily once per invocation and provisions
//! its table on first use.

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use super::models::PendingEntry;

/// Errors raised by the local store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be opened at all (unwritable directory,
    /// storage disabled, missing home). Fatal for the invocation.
    #[error("could not open store: {0}")]
    Open(String),

    /// An entry with the same id already exists. Inserts never upsert.
    #[error("an entry with id {id} already exists")]
    DuplicateId {
        /// The conflicting entry id.
        id: String,
    },

    /// Any other storage failure, surfaced per attempt.
    #[error("storage error: {0}")]
    Backend(#[from] rusqlite::Error),
}

/// Get the default database path
pub fn default_db_path() -> Result<PathBuf, StoreError> {
    let data_dir = match std::env::var_os("PROMPTQ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or_else(|| StoreError::Open("could not find home directory".to_string()))?
            .join(".promptq"),
    };

    std::fs::create_dir_all(&data_dir).map_err(|e| StoreError::Open(e.to_string()))?;
    Ok(data_dir.join("queue.db"))
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Open(e.to_string()))?;
        let db = Self { conn };
        db.migrate()?;
        tracing::debug!("store open, {} pending entries", db.pending_count()?);
        Ok(db)
    }

    /// Open the default database
    pub fn open_default() -> Result<Self, StoreError> {
        let path = default_db_path()?;
        Self::open(&path)
    }

    /// Provision the table if it is absent. Idempotent.
    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS pending_entries (
                id TEXT PRIMARY KEY,
                image_file_name TEXT NOT NULL,
                prompt TEXT NOT NULL,
                creation_date TEXT NOT NULL
            );
            "#,
        )?;
        Ok(())
    }

    /// Insert a new pending entry. No upsert: a second entry with the
    /// same id fails with [`StoreError::DuplicateId`].
    pub fn insert_entry(&self, entry: &PendingEntry) -> Result<(), StoreError> {
        let result = self.conn.execute(
            r#"
            INSERT INTO pending_entries (id, image_file_name, prompt, creation_date)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                entry.id,
                entry.image_file_name,
                entry.prompt,
                entry.creation_date,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(StoreError::DuplicateId {
                    id: entry.id.clone(),
                })
            }
            Err(e) => Err(StoreError::Backend(e)),
        }
    }

    /// List every pending entry. Rowid order, which is insertion order
    /// in practice but not guaranteed.
    pub fn list_entries(&self) -> Result<Vec<PendingEntry>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, image_file_name, prompt, creation_date FROM pending_entries",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(PendingEntry {
                id: row.get(0)?,
                image_file_name: row.get(1)?,
                prompt: row.get(2)?,
                creation_date: row.get(3)?,
            })
        })?;

        rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
    }

    /// Delete all pending entries unconditionally. Irreversible.
    /// Returns the number of entries removed.
    pub fn clear_entries(&self) -> Result<usize, StoreError> {
        let deleted = self.conn.execute("DELETE FROM pending_entries", [])?;
        Ok(deleted)
    }

    /// Number of pending entries. Recomputed on every call, never cached.
    pub fn pending_count(&self) -> Result<i64, StoreError> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM pending_entries", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Size of the database file on disk, when backed by a file.
    pub fn file_size(&self) -> Option<u64> {
        self.conn
            .path()
            .and_then(|p| std::fs::metadata(p).ok())
            .map(|m| m.len())
    }
}
