use clap::Parser;
use populator::{PopulateError, RunOptions, config::DEFAULT_CONFIG_FILE};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "populate-show-urls")]
#[command(about = "Populates NPR.org show URLs in the Wait Wait Stats Database", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file containing show dates in YYYY-MM-DD format and the matching NPR.org URL
    #[arg(short, long)]
    file: PathBuf,

    /// Populate remaining show URLs with generated links after ingesting the CSV file
    #[arg(short, long)]
    backfill: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "populate_show_urls=info,populator=info,storage=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let options = RunOptions {
        config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
        csv_file: cli.file,
        backfill: cli.backfill,
    };

    match populator::run(&options).await {
        Ok(()) => Ok(()),
        Err(PopulateError::ConfigError(e)) => {
            tracing::error!("Database configuration file is not valid: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
