pub mod config;
pub mod error;
pub mod mapping;
pub mod runner;
pub mod show_url;
pub mod sources;
pub mod traits;
pub mod updater;

pub use config::{AppConfig, DatabaseConfig};
pub use error::{PopulateError, Result};
pub use mapping::UrlMapping;
pub use runner::{RunOptions, run};
pub use show_url::generate_url;
pub use traits::ShowStore;
pub use updater::{ApplyReport, UrlUpdater};
