//! Command-Line Interface

use clap::Parser;
use std::path::PathBuf;

/// Seed an Aura Alert SQLite database with synthetic biometric readings
#[derive(Debug, Parser)]
#[command(name = "populate-db", version, about)]
pub struct Cli {
    /// Path of the database file to create or extend
    #[arg(default_value = "assets/aura_alert.db")]
    pub output_db_path: PathBuf,

    /// Number of synthetic readings to insert
    #[arg(default_value_t = 1000)]
    pub num_rows: usize,
}
