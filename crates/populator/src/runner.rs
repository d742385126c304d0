use std::path::PathBuf;

use storage::Database;
use tracing::info;

use crate::Result;
use crate::config::AppConfig;
use crate::sources::read_mapping_file;
use crate::updater::UrlUpdater;

/// Inputs of one populate run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config_file: PathBuf,
    pub csv_file: PathBuf,
    pub backfill: bool,
}

/// Loads the configuration and the CSV file, then applies the CSV URLs and,
/// when asked, the generated backfill.
///
/// The configuration is checked before anything else is read, and the
/// database is only contacted once both inputs are valid.
pub async fn run(options: &RunOptions) -> Result<()> {
    let config = AppConfig::from_file(&options.config_file)?;

    let shows = read_mapping_file(&options.csv_file)?;
    if shows.is_empty() {
        info!("No shows found in CSV file. Skipping.");
    } else {
        info!(
            "Loaded {} show URL(s) from {}",
            shows.len(),
            options.csv_file.display()
        );
    }

    info!(
        "Connecting to database at: {}",
        config.database.display_target()
    );
    let db = Database::connect(config.database.connect_options(), config.database.autocommit)
        .await?;

    let repository = db.shows();
    let updater = UrlUpdater::new(&repository);

    let report = updater.apply_explicit(&shows).await?;
    report.log_summary("CSV import");

    if options.backfill {
        let report = updater.apply_backfill().await?;
        report.log_summary("Backfill");
    }

    db.close().await;

    Ok(())
}
