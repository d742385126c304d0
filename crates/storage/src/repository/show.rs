use chrono::NaiveDate;
use sqlx::MySqlPool;

use crate::error::Result;

/// Repository for `ww_shows` URL operations
pub struct ShowRepository<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ShowRepository<'a> {
    /// Create a new ShowRepository
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// List every show date, oldest first
    pub async fn list_dates(&self) -> Result<Vec<NaiveDate>> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT showdate FROM ww_shows
            ORDER BY showdate ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(dates)
    }

    /// List the dates of shows without a URL, oldest first
    pub async fn list_dates_missing_url(&self) -> Result<Vec<NaiveDate>> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT showdate FROM ww_shows
            WHERE showurl IS NULL
            ORDER BY showdate ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(dates)
    }

    /// Set the URL of the show aired on `show_date`.
    ///
    /// Returns the number of rows MySQL reports as changed, which is zero
    /// when the stored URL already equals `url`.
    pub async fn update_url(&self, show_date: NaiveDate, url: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE ww_shows SET showurl = ?
            WHERE showdate = ?
            "#,
        )
        .bind(url)
        .bind(show_date)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
