use std::ops::Range;
use chrono::NaiveDate;
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// calendar dates as typed by the operator and stored in the loans file
pub const BORROW_DATE_FMT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` borrow date by fixed-width fields.
///
/// Only the year `[0,4)`, month `[5,7)` and day `[8,10)` slices are read; the
/// separators are not checked. Fields that are not numeric, or that do not
/// form a real calendar date, are rejected.
pub fn parse_borrow_date(input: &str) -> LibraryResult<NaiveDate> {
    let field = |range: Range<usize>| -> LibraryResult<u32> {
        input.get(range)
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| LibraryError::invalid_date(
                format!("invalid borrow date {:?}, expected YYYY-MM-DD", input).as_str()))
    };
    let year = field(0..4)?;
    let month = field(5..7)?;
    let day = field(8..10)?;
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| LibraryError::invalid_date(
            format!("borrow date {:?} is not a calendar date", input).as_str()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(BORROW_DATE_FMT).to_string()
}

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time.format(DATE_FMT).to_string().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crate::core::library::LibraryError;
    use crate::utils::date::{format_date, parse_borrow_date};

    #[tokio::test]
    async fn test_should_parse_borrow_date() {
        let date = parse_borrow_date("2024-03-05").expect("should parse");
        assert_eq!(NaiveDate::from_ymd_opt(2024, 3, 5), Some(date));
        assert_eq!("2024-03-05", format_date(date));
    }

    #[tokio::test]
    async fn test_should_ignore_separators() {
        let date = parse_borrow_date("2024/12/31").expect("should parse");
        assert_eq!(NaiveDate::from_ymd_opt(2024, 12, 31), Some(date));
    }

    #[tokio::test]
    async fn test_should_reject_malformed_dates() {
        for input in ["", "2024-3-5", "abcd-ef-gh", "2024-13-01", "2023-02-29", "2024-03"] {
            assert!(matches!(parse_borrow_date(input), Err(LibraryError::InvalidDate { .. })), "{}", input);
        }
    }
}
