//! Storage Layer
//!
//! Provides SQLite persistence for biometric readings.

mod store;

pub use store::{ReadingStore, StoredReading};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
