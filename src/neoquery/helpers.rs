//! Date and time conversions shared by the loaders, the writers and the CLI.

use crate::error::{NeoError, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Format of close-approach dates in the NASA CAD data, e.g. `1900-Jan-01 00:11`.
const CD_FORMAT: &str = "%Y-%b-%d %H:%M";
/// Output format for approach times. Input data has minute precision only.
const OUTPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a NASA-formatted calendar date/time (`cd`) string.
pub fn cd_to_datetime(calendar_date: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(calendar_date.trim(), CD_FORMAT)
        .map_err(|e| NeoError::Parse(format!("invalid approach time '{}': {}", calendar_date, e)))
}

pub fn datetime_to_str(dt: &NaiveDateTime) -> String {
    dt.format(OUTPUT_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` date as given on the command line.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| NeoError::Parse(format!("invalid date '{}': {}", s, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_cad_dates() {
        let dt = cd_to_datetime("1900-Jan-01 00:11").unwrap();
        assert_eq!(dt.year(), 1900);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.minute(), 11);
    }

    #[test]
    fn formats_without_seconds() {
        let dt = cd_to_datetime("2020-Dec-31 23:59").unwrap();
        assert_eq!(datetime_to_str(&dt), "2020-12-31 23:59");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            cd_to_datetime("yesterday"),
            Err(NeoError::Parse(_))
        ));
        assert!(parse_date("2020-13-01").is_err());
    }

    #[test]
    fn parses_cli_dates() {
        let d = parse_date("2020-01-01").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }
}
