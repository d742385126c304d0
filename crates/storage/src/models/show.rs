use chrono::NaiveDate;

/// A row of `ww_shows` (`showdate`, `showurl`), reduced to the columns this
/// tool reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRecord {
    pub show_date: NaiveDate,
    pub show_url: Option<String>,
}

impl ShowRecord {
    pub fn new(show_date: NaiveDate, show_url: Option<String>) -> Self {
        Self {
            show_date,
            show_url,
        }
    }

    /// True while the show has no URL stored.
    pub fn is_missing_url(&self) -> bool {
        self.show_url.is_none()
    }
}
