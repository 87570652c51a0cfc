//! Reading Store Implementation

use crate::StorageError;
use readings::Reading;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Schema of the table shared with the client application
const CREATE_READINGS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS readings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    timestamp TEXT NOT NULL,
    value REAL NOT NULL,
    type TEXT NOT NULL
)";

/// A reading row as stored in SQLite
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoredReading {
    /// Row id assigned on insertion
    pub id: i64,
    /// ISO-8601 timestamp string
    pub timestamp: String,
    /// Measured value
    pub value: f64,
    /// Category tag (hr, temp, o2)
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// SQLite-backed store for biometric readings
///
/// Holds a single-connection pool for the lifetime of the run and releases
/// it in [`ReadingStore::close`].
pub struct ReadingStore {
    pool: SqlitePool,
}

impl ReadingStore {
    /// Open a file-backed store, creating the file and any missing parent
    /// directories, and ensure the readings table exists
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        info!("Opening readings store at {}", path.display());
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        Self::connect(options).await
    }

    /// Open an in-memory store (for testing)
    pub async fn open_in_memory() -> Result<Self, StorageError> {
        info!("Opening in-memory readings store");
        Self::connect(SqliteConnectOptions::new().filename(":memory:")).await
    }

    async fn connect(options: SqliteConnectOptions) -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the readings table if it does not exist
    async fn ensure_schema(&self) -> Result<(), StorageError> {
        sqlx::query(CREATE_READINGS_TABLE)
            .execute(&self.pool)
            .await?;
        debug!("Readings table ready");
        Ok(())
    }

    /// Insert a batch of readings inside a single transaction
    pub async fn insert_batch(&self, batch: &[Reading]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        for reading in batch {
            sqlx::query("INSERT INTO readings (timestamp, value, type) VALUES (?1, ?2, ?3)")
                .bind(reading.timestamp.to_rfc3339())
                .bind(reading.value)
                .bind(reading.kind.tag())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        debug!("Committed batch of {} readings", batch.len());
        Ok(())
    }

    /// Total number of rows in the readings table
    pub async fn count(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM readings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count as u64)
    }

    /// Most recently inserted rows, newest first
    pub async fn recent(&self, limit: u32) -> Result<Vec<StoredReading>, StorageError> {
        let rows = sqlx::query_as::<_, StoredReading>(
            "SELECT id, timestamp, value, type FROM readings ORDER BY id DESC LIMIT ?1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Release the database connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use readings::{ReadingKind, Synthesizer};

    fn sample_batch(n: usize) -> Vec<Reading> {
        Synthesizer::seeded(5).take(n).collect()
    }

    #[tokio::test]
    async fn test_insert_and_count() {
        let store = ReadingStore::open_in_memory().await.unwrap();
        store.insert_batch(&sample_batch(7)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let store = ReadingStore::open_in_memory().await.unwrap();
        store.insert_batch(&[]).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let store = ReadingStore::open_in_memory().await.unwrap();
        store.insert_batch(&sample_batch(3)).await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_stored_rows_roundtrip() {
        let store = ReadingStore::open_in_memory().await.unwrap();
        store.insert_batch(&sample_batch(10)).await.unwrap();

        let rows = store.recent(10).await.unwrap();
        assert_eq!(rows.len(), 10);
        for row in &rows {
            assert!(row.id > 0);
            let kind = ReadingKind::from_tag(&row.kind).unwrap();
            let (min, max) = kind.plausible_range();
            assert!(row.value >= min && row.value <= max);
            DateTime::parse_from_rfc3339(&row.timestamp).unwrap();
        }
        // Newest first
        assert!(rows.first().unwrap().id > rows.last().unwrap().id);
    }

    #[tokio::test]
    async fn test_reopen_appends_to_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("readings.db");

        let store = ReadingStore::open(&path).await.unwrap();
        store.insert_batch(&sample_batch(3)).await.unwrap();
        store.close().await;

        let store = ReadingStore::open(&path).await.unwrap();
        store.insert_batch(&sample_batch(2)).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 5);
        store.close().await;
    }

    #[tokio::test]
    async fn test_recent_limit() {
        let store = ReadingStore::open_in_memory().await.unwrap();
        store.insert_batch(&sample_batch(6)).await.unwrap();
        assert_eq!(store.recent(4).await.unwrap().len(), 4);
    }
}
