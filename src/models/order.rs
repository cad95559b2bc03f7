//! Order models.
//!
//! An [`Order`] is one shipment row read from the order sheet. Rating an
//! order produces a [`RatedOrder`], which carries the four computed output
//! fields alongside the normalized auxiliary dates.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Cell;

/// Label written to the zone column when no partition entry matches.
pub const ZONE_NOT_FOUND: &str = "未找到分区";

/// A shipment order as read from one row of the order sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Index of the source row within the order sheet (0-indexed).
    pub row_index: usize,
    /// Physical weight in kilograms; `None` when missing or non-numeric.
    pub physical_weight_kg: Option<Decimal>,
    /// Destination postal code, coerced to text.
    pub postal_code: String,
    /// The raw order date cell.
    pub order_date: Cell,
    /// The raw outbound date cell.
    pub outbound_date: Cell,
    /// The raw delivered date cell.
    pub delivered_date: Cell,
}

impl Order {
    /// Returns the 1-indexed spreadsheet row number for messages.
    pub fn sheet_row(&self) -> usize {
        self.row_index + 1
    }
}

/// A rating zone resolved from a postal code.
///
/// # Example
///
/// ```
/// use shipment_rating::models::Zone;
///
/// assert_eq!(Zone::Found("5".to_string()).label(), "5");
/// assert_eq!(Zone::NotFound.label(), "未找到分区");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The zone label of the first matching partition entry.
    Found(String),
    /// No partition entry matched the postal prefix.
    NotFound,
}

impl Zone {
    /// Returns the text written to the zone column.
    pub fn label(&self) -> &str {
        match self {
            Zone::Found(label) => label,
            Zone::NotFound => ZONE_NOT_FOUND,
        }
    }

    /// Returns true if a partition entry matched.
    pub fn is_found(&self) -> bool {
        matches!(self, Zone::Found(_))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An order with its computed output fields.
///
/// A `RatedOrder` is built once per order per run, so its outputs are
/// written exactly once and never read back before being set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedOrder {
    /// The source order.
    pub order: Order,
    /// The normalized order date.
    pub order_date: NaiveDate,
    /// Billable weight in pounds, rounded up.
    pub billable_weight: i64,
    /// The resolved zone.
    pub zone: Zone,
    /// The fuel surcharge as a fraction (0.07 for 7%).
    pub fuel_rate: Decimal,
    /// The unit rate from the applicable rate matrix, zero on a miss.
    pub unit_rate: Decimal,
    /// The total charge, rounded up to the cent.
    pub total_charge: Decimal,
    /// The normalized outbound date, if parseable.
    pub outbound_date: Option<NaiveDate>,
    /// The normalized delivered date, if parseable.
    pub delivered_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_display_uses_sentinel_when_not_found() {
        assert_eq!(Zone::NotFound.to_string(), ZONE_NOT_FOUND);
        assert_eq!(Zone::Found("8".to_string()).to_string(), "8");
        assert!(!Zone::NotFound.is_found());
    }

    #[test]
    fn test_sheet_row_is_one_indexed() {
        let order = Order {
            row_index: 2,
            physical_weight_kg: None,
            postal_code: "90210".to_string(),
            order_date: Cell::Empty,
            outbound_date: Cell::Empty,
            delivered_date: Cell::Empty,
        };
        assert_eq!(order.sheet_row(), 3);
    }
}
