//! Calendar helpers shared by the band model and its callers.

use chrono::{Local, NaiveDate};

/// Render a date the way roster documents print them, e.g. "Jul 05, 1954".
pub fn format_date(d: NaiveDate) -> String {
    d.format("%b %d, %Y").to_string()
}

/// The earliest date a band can plausibly have started performing.
///
/// Anything before this fails [`crate::Band::is_date_valid`].
pub fn earliest_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1954, 7, 5).unwrap_or(NaiveDate::MIN)
}

/// Today's local calendar date, the upper bound for valid start dates.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(1957, 7, 6).unwrap();
        assert_eq!(format_date(d), "Jul 06, 1957");
    }

    #[test]
    fn test_earliest_start() {
        assert_eq!(
            earliest_start(),
            NaiveDate::from_ymd_opt(1954, 7, 5).unwrap()
        );
    }
}
