use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::Result;
use crate::mapping::UrlMapping;
use crate::show_url::generate_url;
use crate::traits::ShowStore;

/// Outcome of one update pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Shows whose URL was written, in the order they were updated.
    pub updated: Vec<NaiveDate>,
    /// Mapped dates with no matching show.
    pub unmatched: Vec<NaiveDate>,
}

impl ApplyReport {
    pub fn is_noop(&self) -> bool {
        self.updated.is_empty()
    }

    pub fn log_summary(&self, label: &str) {
        info!(
            "{}: {} show URL(s) updated, {} date(s) skipped",
            label,
            self.updated.len(),
            self.unmatched.len()
        );
    }
}

/// Writes show URLs through a [`ShowStore`].
///
/// Every update is issued on its own; a failure stops the pass but leaves
/// the updates already issued in place.
pub struct UrlUpdater<'a, S: ShowStore> {
    store: &'a S,
}

impl<'a, S: ShowStore> UrlUpdater<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Writes the URLs of `mapping` for shows that exist.
    ///
    /// The stored show dates are read once up front; dates missing from that
    /// snapshot are skipped and reported.
    pub async fn apply_explicit(&self, mapping: &UrlMapping) -> Result<ApplyReport> {
        if mapping.is_empty() {
            info!("No show URLs provided. Skipping.");
            return Ok(ApplyReport::default());
        }

        let known_dates: HashSet<NaiveDate> =
            self.store.known_dates().await?.into_iter().collect();
        debug!("Loaded {} known show date(s)", known_dates.len());

        self.apply_with_known_dates(mapping, &known_dates).await
    }

    pub async fn apply_with_known_dates(
        &self,
        mapping: &UrlMapping,
        known_dates: &HashSet<NaiveDate>,
    ) -> Result<ApplyReport> {
        let mut report = ApplyReport::default();

        for (show_date, url) in mapping.iter() {
            if !known_dates.contains(&show_date) {
                info!("Show date {} is not found. Skipping.", show_date);
                report.unmatched.push(show_date);
                continue;
            }

            self.store.set_show_url(show_date, url).await?;
            debug!("Set URL for show {}: {}", show_date, url);
            report.updated.push(show_date);
        }

        Ok(report)
    }

    /// Fills in a generated URL for every show that has none.
    ///
    /// Shows that already have a URL are never touched.
    pub async fn apply_backfill(&self) -> Result<ApplyReport> {
        let mut report = ApplyReport::default();

        let show_dates = self.store.dates_missing_url().await?;
        if show_dates.is_empty() {
            info!("No show URLs to update.");
            return Ok(report);
        }

        info!("Generating URLs for {} show(s)", show_dates.len());

        for show_date in show_dates {
            let url = generate_url(show_date);
            self.store.set_show_url(show_date, &url).await?;
            debug!("Set generated URL for show {}: {}", show_date, url);
            report.updated.push(show_date);
        }

        Ok(report)
    }
}
