use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::debug;

use crate::mapping::UrlMapping;
use crate::{PopulateError, Result};

const DATE_COLUMN: &str = "date";
const URL_COLUMN: &str = "url";

/// Reads a show URL CSV file into a [`UrlMapping`].
pub fn read_mapping_file(path: impl AsRef<Path>) -> Result<UrlMapping> {
    let path = path.as_ref();
    debug!("Reading show URLs from {}", path.display());

    let file = std::fs::File::open(path)?;
    read_mapping(file)
}

/// Reads show URL CSV content with a `date,url` header.
///
/// Dates must be written exactly `YYYY-MM-DD`. A malformed or repeated date,
/// or a row too short to hold both values, rejects the whole file. An input
/// without any header yields an empty mapping.
pub fn read_mapping<R: Read>(reader: R) -> Result<UrlMapping> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut mapping = UrlMapping::new();

    if headers.is_empty() {
        return Ok(mapping);
    }

    let date_column = column_index(&headers, DATE_COLUMN)?;
    let url_column = column_index(&headers, URL_COLUMN)?;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let (Some(date), Some(url)) = (record.get(date_column), record.get(url_column)) else {
            return Err(PopulateError::ValidationError(format!(
                "Line {}: expected {} fields, found {}",
                line,
                headers.len(),
                record.len()
            )));
        };

        let show_date = parse_show_date(date).map_err(|msg| {
            PopulateError::ValidationError(format!("Line {}: {}", line, msg))
        })?;

        mapping.insert(show_date, url).map_err(|e| match e {
            PopulateError::ValidationError(msg) => {
                PopulateError::ValidationError(format!("Line {}: {}", line, msg))
            }
            other => other,
        })?;
    }

    debug!("Read {} show URL(s)", mapping.len());

    Ok(mapping)
}

fn column_index(headers: &csv::StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| {
            PopulateError::ValidationError(format!(
                "CSV header is missing the '{}' column",
                column
            ))
        })
}

/// Parses a zero-padded `YYYY-MM-DD` date. chrono alone would also take
/// `2020-1-4`, which never matches a stored date as written.
fn parse_show_date(value: &str) -> std::result::Result<NaiveDate, String> {
    let show_date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("invalid show date '{}': {}", value, e))?;

    if show_date.format("%Y-%m-%d").to_string() != value {
        return Err(format!(
            "invalid show date '{}': expected YYYY-MM-DD",
            value
        ));
    }

    Ok(show_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_read_mapping() {
        let content = "\
date,url
2020-01-04,https://www.npr.org/2020/01/04/wait-wait-1
2019-12-28,https://www.npr.org/2019/12/28/wait-wait-2
";
        let mapping = read_mapping(content.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get(date(2020, 1, 4)),
            Some("https://www.npr.org/2020/01/04/wait-wait-1")
        );
        assert_eq!(
            mapping.get(date(2019, 12, 28)),
            Some("https://www.npr.org/2019/12/28/wait-wait-2")
        );
    }

    #[test]
    fn test_extra_columns_and_order_ignored() {
        let content = "\
notes,url,date
best of,https://example.org/best-of, 2021-07-03
";
        let mapping = read_mapping(content.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(date(2021, 7, 3)), Some("https://example.org/best-of"));
    }

    #[test]
    fn test_header_only_is_empty() {
        let mapping = read_mapping("date,url\n".as_bytes()).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_empty_input_is_empty() {
        let mapping = read_mapping("".as_bytes()).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_url_not_validated() {
        let mapping = read_mapping("date,url\n2020-01-04,\n2020-01-11,not a url\n".as_bytes())
            .unwrap();

        assert_eq!(mapping.get(date(2020, 1, 4)), Some(""));
        assert_eq!(mapping.get(date(2020, 1, 11)), Some("not a url"));
    }

    #[test]
    fn test_missing_column() {
        let result = read_mapping("date,link\n2020-01-04,https://example.org\n".as_bytes());
        assert!(matches!(result, Err(PopulateError::ValidationError(_))));
    }

    #[test]
    fn test_invalid_date() {
        let result = read_mapping("date,url\n01/04/2020,https://example.org\n".as_bytes());
        match result {
            Err(PopulateError::ValidationError(msg)) => assert!(msg.contains("Line 2"), "{msg}"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_unpadded_date_rejected() {
        for value in ["2020-1-4", "2020-01-4", "2020-1-04", "20-01-04", "+2020-01-04"] {
            let content = format!("date,url\n{},https://example.org\n", value);
            match read_mapping(content.as_bytes()) {
                Err(PopulateError::ValidationError(msg)) => {
                    assert!(msg.contains("Line 2"), "{msg}");
                    assert!(msg.contains(value), "{msg}");
                }
                other => panic!("{} accepted: {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_short_row_rejected() {
        let content = "\
date,url
2020-01-04,https://example.org/a
2020-01-11
";
        match read_mapping(content.as_bytes()) {
            Err(PopulateError::ValidationError(msg)) => assert!(msg.contains("Line 3"), "{msg}"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_with_trailing_optional_column() {
        let content = "\
date,url,notes
2020-01-04,https://example.org/a,best of
2020-01-11,https://example.org/b
";
        let mapping = read_mapping(content.as_bytes()).unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(date(2020, 1, 11)), Some("https://example.org/b"));
    }

    #[test]
    fn test_duplicate_date() {
        let content = "\
date,url
2020-01-04,https://example.org/a
2020-01-11,https://example.org/b
2020-01-04,https://example.org/c
";
        match read_mapping(content.as_bytes()) {
            Err(PopulateError::ValidationError(msg)) => {
                assert!(msg.contains("Line 4"), "{msg}");
                assert!(msg.contains("2020-01-04"), "{msg}");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_mapping_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,url").unwrap();
        writeln!(file, "2020-01-04,https://example.org/a").unwrap();
        file.flush().unwrap();

        let mapping = read_mapping_file(file.path()).unwrap();
        assert_eq!(mapping.get(date(2020, 1, 4)), Some("https://example.org/a"));
    }

    #[test]
    fn test_missing_file() {
        let result = read_mapping_file("nonexistent-show-urls.csv");
        assert!(matches!(result, Err(PopulateError::IoError(_))));
    }
}
