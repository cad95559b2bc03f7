//! The order rating pipeline.
//!
//! This module reads the order sheet, validates every order date up front,
//! rates each order against the reference tables and writes the results
//! back into the order sheet's layout.

mod engine;
mod orders;
mod rating;
mod serialize;
mod validation;

pub use engine::{BatchStage, rate_workbook, summarize};
pub use orders::{FIRST_DATA_ROW, HEADER_ROW, OrderSheetLayout, read_orders};
pub use rating::rate_order;
pub use serialize::serialize_results;
pub use validation::{BatchValidation, ValidatedOrder, validate_orders};
