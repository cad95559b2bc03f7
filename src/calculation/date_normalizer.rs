//! Spreadsheet date normalization.
//!
//! Order sheets store dates as spreadsheet serial numbers: whole days counted
//! from 1899-12-30, so serial 25569 is 1970-01-01. This module converts those
//! serials into calendar dates.

use chrono::NaiveDate;

use crate::models::Cell;

/// Days between the spreadsheet epoch (1899-12-30) and the Unix epoch.
pub const SPREADSHEET_EPOCH_OFFSET: i64 = 25569;

/// Format used for normalized dates written back to the order sheet.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days from 0001-01-01 (day 1 of the common era) to the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// Converts a spreadsheet date cell into a calendar date.
///
/// Only numeric cells are dates; any fractional time-of-day part is dropped.
/// Text, blanks, booleans, non-finite and out-of-range numbers return `None`.
/// This function never fails: callers decide what a missing date means.
///
/// # Examples
///
/// ```
/// use shipment_rating::calculation::normalize_date;
/// use shipment_rating::models::Cell;
/// use chrono::NaiveDate;
///
/// assert_eq!(
///     normalize_date(&Cell::Number(45597.0)),
///     NaiveDate::from_ymd_opt(2024, 11, 1)
/// );
/// assert_eq!(normalize_date(&Cell::Text("2024-11-01".to_string())), None);
/// ```
pub fn normalize_date(raw: &Cell) -> Option<NaiveDate> {
    let Cell::Number(serial) = raw else {
        return None;
    };
    if !serial.is_finite() {
        return None;
    }

    let days = serial.floor();
    if days.abs() > i32::MAX as f64 {
        return None;
    }

    let days_from_ce = days as i64 - SPREADSHEET_EPOCH_OFFSET + UNIX_EPOCH_DAYS_FROM_CE;
    NaiveDate::from_num_days_from_ce_opt(i32::try_from(days_from_ce).ok()?)
}

/// Converts an outbound or delivered date cell into a calendar date.
///
/// Accepts a spreadsheet serial like [`normalize_date`], and also text already
/// in `YYYY-MM-DD` form, so a rated sheet keeps its dates when rated again.
pub fn normalize_auxiliary_date(raw: &Cell) -> Option<NaiveDate> {
    match raw {
        Cell::Text(text) => NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok(),
        other => normalize_date(other),
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch_offset_maps_to_unix_epoch() {
        assert_eq!(
            normalize_date(&Cell::Number(SPREADSHEET_EPOCH_OFFSET as f64)),
            Some(date(1970, 1, 1))
        );
    }

    #[test]
    fn test_known_serials() {
        assert_eq!(normalize_date(&Cell::Number(45597.0)), Some(date(2024, 11, 1)));
        assert_eq!(normalize_date(&Cell::Number(45626.0)), Some(date(2024, 11, 30)));
        assert_eq!(normalize_date(&Cell::Number(45658.0)), Some(date(2025, 1, 1)));
    }

    #[test]
    fn test_time_of_day_fraction_is_dropped() {
        assert_eq!(normalize_date(&Cell::Number(45597.75)), Some(date(2024, 11, 1)));
    }

    #[test]
    fn test_non_numeric_inputs_return_none() {
        assert_eq!(normalize_date(&Cell::Empty), None);
        assert_eq!(normalize_date(&Cell::Text("45597".to_string())), None);
        assert_eq!(normalize_date(&Cell::Bool(true)), None);
        assert_eq!(normalize_date(&Cell::Number(f64::NAN)), None);
        assert_eq!(normalize_date(&Cell::Number(f64::INFINITY)), None);
    }

    #[test]
    fn test_out_of_range_serial_returns_none() {
        assert_eq!(normalize_date(&Cell::Number(1e18)), None);
        assert_eq!(normalize_date(&Cell::Number(-1e12)), None);
    }

    #[test]
    fn test_auxiliary_date_accepts_serials_and_canonical_text() {
        assert_eq!(normalize_auxiliary_date(&Cell::Number(45601.0)), Some(date(2024, 11, 5)));
        assert_eq!(
            normalize_auxiliary_date(&Cell::Text(" 2024-11-05 ".to_string())),
            Some(date(2024, 11, 5))
        );
        assert_eq!(normalize_auxiliary_date(&Cell::Text("05-11-2024".to_string())), None);
        assert_eq!(normalize_auxiliary_date(&Cell::Text("pending".to_string())), None);
        assert_eq!(normalize_auxiliary_date(&Cell::Empty), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 7)), "2024-03-07");
    }
}
