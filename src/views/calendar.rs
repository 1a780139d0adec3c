//! Calendar-day arithmetic in the viewer's local time zone.
//!
//! Everything here works on `NaiveDate`; timestamps never enter a comparison.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse the calendar day of a date or date-time string, discarding any
/// time-of-day component.
///
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let day = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

pub fn add_days(day: NaiveDate, days: i64) -> NaiveDate {
    day + Duration::days(days)
}

/// The coming Sunday, or `day` itself when it is a Sunday.
///
pub fn end_of_week(day: NaiveDate) -> NaiveDate {
    let remaining = 6 - i64::from(day.weekday().num_days_from_monday());
    add_days(day, remaining)
}

/// Last calendar day of `day`'s month.
///
pub fn end_of_month(day: NaiveDate) -> NaiveDate {
    let (year, month) = if day.month() == 12 {
        (day.year() + 1, 1)
    } else {
        (day.year(), day.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| add_days(first, -1))
        .unwrap_or(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(raw: &str) -> NaiveDate {
        parse_day(raw).unwrap()
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2024-02-29"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(
            parse_day("2024-02-29T23:59:59Z"),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_day("2023-02-29"), None);
        assert_eq!(parse_day("tomorrow"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn test_end_of_week() {
        // 2024-06-12 is a Wednesday
        assert_eq!(end_of_week(day("2024-06-12")), day("2024-06-16"));
        assert_eq!(end_of_week(day("2024-06-10")), day("2024-06-16"));
        assert_eq!(end_of_week(day("2024-06-16")), day("2024-06-16"));
    }

    #[test]
    fn test_end_of_month() {
        assert_eq!(end_of_month(day("2024-02-10")), day("2024-02-29"));
        assert_eq!(end_of_month(day("2023-02-01")), day("2023-02-28"));
        assert_eq!(end_of_month(day("2024-12-31")), day("2024-12-31"));
        assert_eq!(end_of_month(day("2024-04-30")), day("2024-04-30"));
    }

    #[test]
    fn test_add_days_crosses_months() {
        assert_eq!(add_days(day("2024-01-31"), 1), day("2024-02-01"));
        assert_eq!(add_days(day("2024-03-01"), -1), day("2024-02-29"));
    }
}
