use chrono::NaiveDate;

/// First show date served by the current NPR.org program archive.
/// Earlier shows only exist on the legacy site.
pub const MODERN_ARCHIVE_START: NaiveDate = match NaiveDate::from_ymd_opt(2006, 1, 7) {
    Some(date) => date,
    None => panic!("invalid archive start date"),
};

const URL_PREFIX: &str = "https://www.npr.org/programs/wait-wait-dont-tell-me/archive?date=";
const LEGACY_URL_PREFIX: &str = "https://legacy.npr.org/programs/waitwait/archrndwn";
const LEGACY_URL_SUFFIX: &str = ".waitwait.html";

/// Builds the NPR.org show page URL for the show aired on `show_date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use populator::show_url::generate_url;
///
/// let url = generate_url(NaiveDate::from_ymd_opt(2006, 1, 7).unwrap());
/// assert_eq!(
///     url,
///     "https://www.npr.org/programs/wait-wait-dont-tell-me/archive?date=01-07-2006"
/// );
/// ```
pub fn generate_url(show_date: NaiveDate) -> String {
    if show_date >= MODERN_ARCHIVE_START {
        format!("{}{}", URL_PREFIX, show_date.format("%m-%d-%Y"))
    } else {
        let month = show_date.format("%b").to_string().to_lowercase();
        format!(
            "{}/{}/{}/{}{}",
            LEGACY_URL_PREFIX,
            show_date.format("%Y"),
            month,
            show_date.format("%y%m%d"),
            LEGACY_URL_SUFFIX
        )
    }
}
