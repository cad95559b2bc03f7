//! Billable weight and total charge arithmetic.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Pounds per kilogram used to derive billable weight.
pub fn pounds_per_kg() -> Decimal {
    Decimal::new(22046, 4)
}

/// Computes the billable weight in pounds from a physical weight in kilograms.
///
/// The converted weight is rounded up to a whole pound. A missing weight
/// gives zero.
///
/// # Examples
///
/// ```
/// use shipment_rating::calculation::billable_weight;
/// use rust_decimal::Decimal;
///
/// assert_eq!(billable_weight(Some(Decimal::from(10))), 23);
/// assert_eq!(billable_weight(None), 0);
/// ```
pub fn billable_weight(physical_weight_kg: Option<Decimal>) -> i64 {
    physical_weight_kg
        .and_then(|kg| kg.checked_mul(pounds_per_kg()))
        .and_then(|lb| lb.ceil().to_i64())
        .unwrap_or(0)
}

/// Computes the total charge from a unit rate and a fuel surcharge fraction.
///
/// The surcharge is applied multiplicatively and the result is rounded up to
/// the next cent. Returns `None` if the amount does not fit in a `Decimal`.
///
/// # Examples
///
/// ```
/// use shipment_rating::calculation::total_charge;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let total = total_charge(Decimal::from_str("5.005").unwrap(), Decimal::from_str("0.07").unwrap());
/// assert_eq!(total, Some(Decimal::from_str("5.36").unwrap()));
/// assert_eq!(total_charge(Decimal::MAX, Decimal::ZERO), None);
/// ```
pub fn total_charge(unit_rate: Decimal, fuel_rate: Decimal) -> Option<Decimal> {
    let cents = Decimal::ONE
        .checked_add(fuel_rate)
        .and_then(|multiplier| unit_rate.checked_mul(multiplier))
        .and_then(|surcharged| surcharged.checked_mul(Decimal::ONE_HUNDRED))?
        .ceil();
    cents.checked_div(Decimal::ONE_HUNDRED)
}
