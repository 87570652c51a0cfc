//! Aura Alert Data Populator
//!
//! Seeds the client application's SQLite database with synthetic biometric
//! readings: generate, range-check, and store in batched transactions.

mod cli;

pub use cli::Cli;

use anyhow::Result;
use readings::{check_range, Synthesizer};
use std::path::Path;
use storage::ReadingStore;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Rows inserted per transaction
pub const COMMIT_BATCH_SIZE: usize = 200;

/// Outcome of a populate run
#[derive(Debug, Clone, Copy)]
pub struct PopulateSummary {
    /// Rows inserted by this run
    pub rows_inserted: u64,
    /// Total rows in the readings table after the run
    pub total_rows: u64,
}

/// Initialize logging
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Generate `num_rows` synthetic readings and insert them into the database
/// at `db_path`, committing every [`COMMIT_BATCH_SIZE`] rows
pub async fn populate(db_path: &Path, num_rows: usize) -> Result<PopulateSummary> {
    let store = ReadingStore::open(db_path).await?;
    let mut synth = Synthesizer::new();

    let mut inserted = 0;
    while inserted < num_rows {
        let batch_len = COMMIT_BATCH_SIZE.min(num_rows - inserted);
        let mut batch = Vec::with_capacity(batch_len);
        for _ in 0..batch_len {
            let reading = synth.next_reading();
            check_range(&reading)?;
            batch.push(reading);
        }

        store.insert_batch(&batch).await?;
        inserted += batch_len;
        debug!("Inserted {}/{} readings", inserted, num_rows);
    }

    let total_rows = store.count().await?;
    store.close().await;

    info!(
        "Inserted {} readings into {}",
        inserted,
        db_path.display()
    );
    Ok(PopulateSummary {
        rows_inserted: inserted as u64,
        total_rows,
    })
}
