pub mod error;
pub mod models;
pub mod repository;

use sqlx::Executor;
use sqlx::MySqlPool;
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub use error::{Result, StorageError};
pub use models::ShowRecord;
pub use repository::ShowRepository;

/// Handle on the Wait Wait Stats database.
///
/// The underlying pool never holds more than one connection, so every
/// statement issued through a `Database` runs over the same session.
#[derive(Debug, Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Open the connection described by `options`.
    ///
    /// With `autocommit` set, the session is switched to autocommit mode as
    /// soon as it is established, so each statement commits on its own.
    pub async fn connect(options: MySqlConnectOptions, autocommit: bool) -> Result<Self> {
        let pool = MySqlPoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .after_connect(move |conn, _meta| {
                Box::pin(async move {
                    if autocommit {
                        conn.execute("SET autocommit = 1").await?;
                    }
                    Ok(())
                })
            })
            .connect_with(options)
            .await?;

        tracing::debug!("Database connection established (autocommit: {})", autocommit);

        Ok(Self { pool })
    }

    pub fn shows(&self) -> ShowRepository<'_> {
        ShowRepository::new(&self.pool)
    }

    /// Close the connection, waiting for in-flight statements to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
