//! Aura Alert Data Populator - Main Entry Point

use clap::Parser;
use populate::{init_logging, populate, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    info!("=== Aura Alert data populator v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Generating {} readings into {}",
        cli.num_rows,
        cli.output_db_path.display()
    );

    let summary = populate(&cli.output_db_path, cli.num_rows).await?;

    println!(
        "Populated {} rows into {}",
        summary.total_rows,
        cli.output_db_path.display()
    );
    Ok(())
}
