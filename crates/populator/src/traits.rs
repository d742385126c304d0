use chrono::NaiveDate;
use storage::ShowRepository;

use crate::Result;

/// The store operations needed to populate show URLs.
#[async_trait::async_trait]
pub trait ShowStore: Send + Sync {
    /// Every show date currently stored.
    async fn known_dates(&self) -> Result<Vec<NaiveDate>>;

    /// Dates of shows whose URL is NULL, oldest first.
    async fn dates_missing_url(&self) -> Result<Vec<NaiveDate>>;

    async fn set_show_url(&self, show_date: NaiveDate, url: &str) -> Result<()>;
}

#[async_trait::async_trait]
impl<'a> ShowStore for ShowRepository<'a> {
    async fn known_dates(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.list_dates().await?)
    }

    async fn dates_missing_url(&self) -> Result<Vec<NaiveDate>> {
        Ok(self.list_dates_missing_url().await?)
    }

    async fn set_show_url(&self, show_date: NaiveDate, url: &str) -> Result<()> {
        let changed = self.update_url(show_date, url).await?;
        tracing::trace!("Updated show {} ({} row(s) changed)", show_date, changed);
        Ok(())
    }
}
