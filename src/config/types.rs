//! Configuration types for batch rating.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `rating.yaml`. Every field has a default matching
//! the production workbook layout, so a partial file only overrides what
//! it names.

use serde::Deserialize;

/// Names of the sheets a rating workbook must carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SheetNames {
    /// The order sheet.
    pub orders: String,
    /// The zone-partition sheet (prefix, zone).
    pub zones: String,
    /// The fuel-surcharge schedule sheet.
    pub fuel: String,
    /// The base rate-matrix sheet.
    pub base_rate: String,
    /// Suffix of month-override rate sheets, e.g. `月报价单`.
    pub override_suffix: String,
}

impl SheetNames {
    /// Returns the name of the override rate sheet for a calendar month.
    ///
    /// # Example
    ///
    /// ```
    /// use shipment_rating::config::SheetNames;
    ///
    /// let names = SheetNames::default();
    /// assert_eq!(names.month_override(11), "报价单 11月报价单");
    /// ```
    pub fn month_override(&self, month: u32) -> String {
        format!("{} {}{}", self.base_rate, month, self.override_suffix)
    }
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            orders: "订单明细".to_string(),
            zones: "分区表".to_string(),
            fuel: "燃油费率".to_string(),
            base_rate: "报价单".to_string(),
            override_suffix: "月报价单".to_string(),
        }
    }
}

/// Header names of the order sheet columns the engine reads and writes.
///
/// Columns are located by exact match against the header row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderColumns {
    /// Physical weight in kilograms.
    pub physical_weight: String,
    /// Destination postal code.
    pub postal_code: String,
    /// Order date.
    pub order_date: String,
    /// Outbound date.
    pub outbound_date: String,
    /// Delivered date.
    pub delivered_date: String,
    /// Output: billable weight.
    pub billable_weight: String,
    /// Output: zone.
    pub zone: String,
    /// Output: fuel surcharge percentage.
    pub fuel_rate: String,
    /// Output: total charge.
    pub total_charge: String,
}

impl OrderColumns {
    /// Headers that must be present in the order sheet.
    pub fn required_inputs(&self) -> [&str; 5] {
        [
            &self.physical_weight,
            &self.postal_code,
            &self.order_date,
            &self.outbound_date,
            &self.delivered_date,
        ]
    }

    /// Headers the engine fills in, appended when absent.
    pub fn outputs(&self) -> [&str; 4] {
        [
            &self.billable_weight,
            &self.zone,
            &self.fuel_rate,
            &self.total_charge,
        ]
    }
}

impl Default for OrderColumns {
    fn default() -> Self {
        Self {
            physical_weight: "实重(KG)".to_string(),
            postal_code: "邮编".to_string(),
            order_date: "下单日期".to_string(),
            outbound_date: "出库日期".to_string(),
            delivered_date: "签收日期".to_string(),
            billable_weight: "计费重(LB)".to_string(),
            zone: "分区".to_string(),
            fuel_rate: "燃油费率".to_string(),
            total_charge: "总运费".to_string(),
        }
    }
}

/// The complete rating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Sheet names.
    pub sheets: SheetNames,
    /// Order sheet column headers.
    pub columns: OrderColumns,
    /// Orders dated in this year reject the batch. `None` disables the check.
    pub disallowed_order_year: Option<i32>,
    /// Name of the output sheet.
    pub result_sheet: String,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            sheets: SheetNames::default(),
            columns: OrderColumns::default(),
            disallowed_order_year: Some(2025),
            result_sheet: "results".to_string(),
        }
    }
}
