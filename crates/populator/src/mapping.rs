use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::NaiveDate;

use crate::{PopulateError, Result};

/// Show date to show URL pairs waiting to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlMapping {
    urls: BTreeMap<NaiveDate, String>,
}

impl UrlMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair. A date can only be mapped once.
    pub fn insert(&mut self, show_date: NaiveDate, url: impl Into<String>) -> Result<()> {
        match self.urls.entry(show_date) {
            Entry::Occupied(existing) => Err(PopulateError::ValidationError(format!(
                "Duplicate show date {} (already mapped to '{}')",
                show_date,
                existing.get()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(url.into());
                Ok(())
            }
        }
    }

    pub fn get(&self, show_date: NaiveDate) -> Option<&str> {
        self.urls.get(&show_date).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &str)> {
        self.urls.iter().map(|(date, url)| (*date, url.as_str()))
    }
}
