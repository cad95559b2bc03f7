//! Fuel surcharge lookup.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::reference::FuelScheduleEntry;

/// Returns the fuel surcharge fraction for an order date.
///
/// Scans the schedule in source order and returns the rate of the first
/// window that contains the date (both ends inclusive). A missing date or a
/// date in a gap between windows gives zero.
///
/// # Examples
///
/// ```
/// use shipment_rating::calculation::resolve_fuel_rate;
/// use shipment_rating::reference::FuelScheduleEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let schedule = vec![FuelScheduleEntry {
///     start: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 11, 30).unwrap(),
///     rate: Decimal::new(7, 2),
/// }];
/// let date = NaiveDate::from_ymd_opt(2024, 11, 30);
/// assert_eq!(resolve_fuel_rate(date, &schedule), Decimal::new(7, 2));
/// assert_eq!(resolve_fuel_rate(None, &schedule), Decimal::ZERO);
/// ```
pub fn resolve_fuel_rate(date: Option<NaiveDate>, schedule: &[FuelScheduleEntry]) -> Decimal {
    let Some(date) = date else {
        return Decimal::ZERO;
    };

    schedule
        .iter()
        .find(|entry| entry.contains(date))
        .map(|entry| entry.rate)
        .unwrap_or(Decimal::ZERO)
}

/// Formats a surcharge fraction as a two-decimal percentage, e.g. `"7.00%"`.
///
/// Halves round away from zero. Returns `None` if the percentage does not fit
/// in a `Decimal`.
pub fn format_fuel_rate(rate: Decimal) -> Option<String> {
    let percent = rate
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Some(format!("{:.2}%", percent))
}
