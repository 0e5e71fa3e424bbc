//! Normalization of gist timestamps to `YYYY-MM-DD HH:MM:SS`.
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;

use crate::{GistError, Result};

/// Output format of every normalized timestamp
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Re-renders a date/time string as `YYYY-MM-DD HH:MM:SS`.
///
/// Inputs carrying an offset (RFC 3339, RFC 2822) are converted to UTC.
/// Inputs without one are taken as already being UTC.
pub fn normalize_date(raw: &str) -> Result<String> {
    parse_date(raw)
        .map(|parsed| parsed.format(DATE_FORMAT).to_string())
        .ok_or_else(|| {
            debug!("Could not parse date: {:?}", raw);
            GistError::InvalidDate {
                input: raw.to_string(),
            }
        })
}

fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc).naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed.with_timezone(&Utc).naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_timestamps() {
        assert_eq!(
            normalize_date("2016-03-10T14:30:05Z").unwrap(),
            "2016-03-10 14:30:05"
        );
    }

    #[test]
    fn offsets_are_converted_to_utc() {
        assert_eq!(
            normalize_date("2016-03-10T14:30:05+02:00").unwrap(),
            "2016-03-10 12:30:05"
        );
        assert_eq!(
            normalize_date("Thu, 10 Mar 2016 14:30:05 -0100").unwrap(),
            "2016-03-10 15:30:05"
        );
    }

    #[test]
    fn naive_inputs() {
        assert_eq!(
            normalize_date("2016-03-10 14:30:05").unwrap(),
            "2016-03-10 14:30:05"
        );
        assert_eq!(
            normalize_date("2016-03-10 14:30").unwrap(),
            "2016-03-10 14:30:00"
        );
        assert_eq!(normalize_date(" 2016-03-10 ").unwrap(), "2016-03-10 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        let err = normalize_date("yesterday-ish").unwrap_err();
        assert!(matches!(err, GistError::InvalidDate { input } if input == "yesterday-ish"));
        assert!(normalize_date("").is_err());
    }
}
