//! Conversion of untyped textual arguments into typed query parameters.
//!
//! Callers at the edge (command line, loaders) hand over raw text; the query
//! engine only ever sees validated values. Rejections are typed here and the
//! operation boundary decides which zero value they turn into.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Date-only layouts accepted for dates.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Date-time layouts accepted for dates; the time part is dropped.
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing value")]
    Missing,

    #[error("not an integer: {0:?}")]
    InvalidInteger(String),

    #[error("integer out of range: {0}")]
    OutOfRange(String),

    #[error("not a date: {0:?}")]
    InvalidDate(String),
}

/// Parse a whole decimal integer. Floats, words and blanks are rejected.
pub fn parse_int(raw: &str) -> Result<i64, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Missing);
    }
    s.parse::<i64>()
        .map_err(|_| InputError::InvalidInteger(raw.to_string()))
}

/// Parse a calendar year.
pub fn parse_year(raw: &str) -> Result<i32, InputError> {
    let value = parse_int(raw)?;
    i32::try_from(value).map_err(|_| InputError::OutOfRange(value.to_string()))
}

/// Parse a date in one of the accepted layouts.
pub fn parse_date(raw: &str) -> Result<NaiveDate, InputError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(InputError::Missing);
    }
    // chrono's %Y accepts a sign; calendar dates here never carry one.
    if !s.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(InputError::InvalidDate(raw.to_string()));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| InputError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_int("5"), Ok(5));
        assert_eq!(parse_int(" -3 "), Ok(-3));
        assert_eq!(parse_int("+7"), Ok(7));
        assert_eq!(parse_int(""), Err(InputError::Missing));
        assert!(matches!(parse_int("2.5"), Err(InputError::InvalidInteger(_))));
        assert!(matches!(parse_int("ten"), Err(InputError::InvalidInteger(_))));
    }

    #[test]
    fn years_must_fit() {
        assert_eq!(parse_year("2020"), Ok(2020));
        assert!(matches!(
            parse_year("99999999999"),
            Err(InputError::OutOfRange(_))
        ));
    }

    #[test]
    fn dates_in_several_layouts() {
        let expected = NaiveDate::from_ymd_opt(1957, 10, 4).unwrap();
        assert_eq!(parse_date("1957-10-04"), Ok(expected));
        assert_eq!(parse_date("1957/10/04"), Ok(expected));
        assert_eq!(parse_date("1957-10-04 19:28:00"), Ok(expected));
        assert_eq!(parse_date("1957-10-04T19:28:00"), Ok(expected));
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(matches!(parse_date("not-a-date"), Err(InputError::InvalidDate(_))));
        assert!(matches!(parse_date("2020-13-01"), Err(InputError::InvalidDate(_))));
        assert!(matches!(parse_date("-2020-01-01"), Err(InputError::InvalidDate(_))));
        assert!(matches!(parse_date("+2020-01-01"), Err(InputError::InvalidDate(_))));
        assert_eq!(parse_date("   "), Err(InputError::Missing));
    }
}
