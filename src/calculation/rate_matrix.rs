//! Unit rate lookup across the base and month-override rate matrices.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::Zone;
use crate::reference::RateMatrix;

/// Selects the rate matrix that applies on a date.
///
/// A month-override matrix replaces the base matrix entirely for orders
/// dated in its month. Without a date, or without an override for the
/// month, the base matrix applies.
pub fn select_rate_matrix<'a>(
    date: Option<NaiveDate>,
    base: &'a RateMatrix,
    overrides: &'a BTreeMap<u32, RateMatrix>,
) -> &'a RateMatrix {
    date.and_then(|d| overrides.get(&d.month())).unwrap_or(base)
}

/// Resolves the unit rate for an order.
///
/// The weight row and zone column are looked up by exact equality in the
/// matrix chosen by [`select_rate_matrix`]. An override matrix is never
/// merged with the base: a key missing from the override resolves to zero
/// even when the base matrix has it. Missing keys, a not-found zone, and
/// blank or zero cells all give zero.
///
/// # Examples
///
/// ```
/// use std::collections::{BTreeMap, HashMap};
/// use shipment_rating::calculation::resolve_unit_rate;
/// use shipment_rating::models::Zone;
/// use shipment_rating::reference::RateMatrix;
/// use rust_decimal::Decimal;
///
/// let mut base = RateMatrix::new(vec!["2".to_string()]);
/// base.insert_row(Decimal::from(23), HashMap::from([("2".to_string(), Decimal::new(1250, 2))]));
///
/// let zone = Zone::Found("2".to_string());
/// let rate = resolve_unit_rate(None, 23, &zone, &base, &BTreeMap::new());
/// assert_eq!(rate, Decimal::new(1250, 2));
/// ```
pub fn resolve_unit_rate(
    date: Option<NaiveDate>,
    billable_weight: i64,
    zone: &Zone,
    base: &RateMatrix,
    overrides: &BTreeMap<u32, RateMatrix>,
) -> Decimal {
    let Zone::Found(label) = zone else {
        return Decimal::ZERO;
    };

    select_rate_matrix(date, base, overrides)
        .lookup(Decimal::from(billable_weight), label)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn zone(label: &str) -> Zone {
        Zone::Found(label.to_string())
    }

    fn matrix<const N: usize>(zones: &[&str], rows: &[(i64, [&str; N])]) -> RateMatrix {
        let mut matrix = RateMatrix::new(zones.iter().map(|z| z.to_string()).collect());
        for (weight, rates) in rows {
            let cells = zones
                .iter()
                .zip(rates.iter())
                .map(|(z, r)| (z.to_string(), dec(r)))
                .collect::<HashMap<_, _>>();
            matrix.insert_row(Decimal::from(*weight), cells);
        }
        matrix
    }

    fn base() -> RateMatrix {
        matrix(&["2", "3"], &[(1, ["5.00", "6.00"]), (23, ["12.50", "14.00"])])
    }

    #[test]
    fn test_base_matrix_lookup() {
        let rate = resolve_unit_rate(date(2024, 10, 3), 23, &zone("3"), &base(), &BTreeMap::new());
        assert_eq!(rate, dec("14.00"));
    }

    #[test]
    fn test_missing_weight_row_is_zero() {
        let rate = resolve_unit_rate(date(2024, 10, 3), 24, &zone("2"), &base(), &BTreeMap::new());
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_missing_zone_column_is_zero() {
        let rate = resolve_unit_rate(date(2024, 10, 3), 23, &zone("9"), &base(), &BTreeMap::new());
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_zone_not_found_is_zero() {
        let rate = resolve_unit_rate(date(2024, 10, 3), 23, &Zone::NotFound, &base(), &BTreeMap::new());
        assert_eq!(rate, Decimal::ZERO);
    }

    #[test]
    fn test_month_override_replaces_base() {
        let overrides = BTreeMap::from([(11, matrix(&["2", "3"], &[(23, ["13.00", "15.00"])]))]);

        let november = resolve_unit_rate(date(2024, 11, 20), 23, &zone("2"), &base(), &overrides);
        let october = resolve_unit_rate(date(2024, 10, 20), 23, &zone("2"), &base(), &overrides);

        assert_eq!(november, dec("13.00"));
        assert_eq!(october, dec("12.50"));
    }

    #[test]
    fn test_override_does_not_fall_back_to_base() {
        // The November matrix has no zone "3" column and no weight-1 row
        let overrides = BTreeMap::from([(11, matrix(&["2"], &[(23, ["13.00"])]))]);

        assert_eq!(
            resolve_unit_rate(date(2024, 11, 20), 23, &zone("3"), &base(), &overrides),
            Decimal::ZERO
        );
        assert_eq!(
            resolve_unit_rate(date(2024, 11, 20), 1, &zone("2"), &base(), &overrides),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_missing_date_uses_base() {
        let overrides = BTreeMap::from([(11, RateMatrix::default())]);
        let selected = select_rate_matrix(None, &base(), &overrides).clone();
        assert_eq!(selected, base());
    }
}
