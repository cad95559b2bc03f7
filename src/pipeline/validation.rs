//! Batch-level order date validation.
//!
//! Every order's primary date is checked before any order is rated. One bad
//! date rejects the whole batch, so no partial output is ever produced.

use chrono::{Datelike, NaiveDate};

use crate::calculation::normalize_date;
use crate::error::EngineError;
use crate::models::Order;

/// An order whose primary date passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOrder {
    /// The source order.
    pub order: Order,
    /// The normalized order date.
    pub order_date: NaiveDate,
}

/// The outcome of the validation pre-pass.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchValidation {
    /// Every order has a usable date.
    Accepted(Vec<ValidatedOrder>),
    /// At least one order date is missing, unparseable, or in the disallowed year.
    Rejected {
        /// 1-indexed spreadsheet rows of the rejected orders.
        rows: Vec<usize>,
    },
}

impl BatchValidation {
    /// Converts the outcome into a result, mapping rejection to `InvalidOrderDate`.
    pub fn into_result(self) -> Result<Vec<ValidatedOrder>, EngineError> {
        match self {
            BatchValidation::Accepted(orders) => Ok(orders),
            BatchValidation::Rejected { rows } => Err(EngineError::InvalidOrderDate { rows }),
        }
    }
}

/// Validates the primary date of every order.
///
/// A date is rejected if it does not normalize or if its year equals
/// `disallowed_year`.
///
/// # Examples
///
/// ```
/// use shipment_rating::models::{Cell, Order};
/// use shipment_rating::pipeline::{BatchValidation, validate_orders};
///
/// let order = Order {
///     row_index: 2,
///     physical_weight_kg: None,
///     postal_code: "90210".to_string(),
///     order_date: Cell::Number(45658.0), // 2025-01-01
///     outbound_date: Cell::Empty,
///     delivered_date: Cell::Empty,
/// };
/// assert_eq!(
///     validate_orders(vec![order], Some(2025)),
///     BatchValidation::Rejected { rows: vec![3] }
/// );
/// ```
pub fn validate_orders(orders: Vec<Order>, disallowed_year: Option<i32>) -> BatchValidation {
    let mut accepted = Vec::with_capacity(orders.len());
    let mut rejected_rows = Vec::new();

    for order in orders {
        match normalize_date(&order.order_date) {
            Some(date) if Some(date.year()) != disallowed_year => {
                accepted.push(ValidatedOrder {
                    order,
                    order_date: date,
                });
            }
            _ => rejected_rows.push(order.sheet_row()),
        }
    }

    if rejected_rows.is_empty() {
        BatchValidation::Accepted(accepted)
    } else {
        BatchValidation::Rejected {
            rows: rejected_rows,
        }
    }
}
