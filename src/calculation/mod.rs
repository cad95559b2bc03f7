//! Calculation logic for the shipment rating engine.
//!
//! This module contains the per-order building blocks: spreadsheet date
//! normalization, zone resolution from postal prefixes, fuel surcharge
//! lookup by date window, unit rate lookup with month-specific matrices,
//! and the billable weight and total charge arithmetic.

mod charge;
mod date_normalizer;
mod fuel_rate;
mod rate_matrix;
mod zone;

pub use charge::{billable_weight, pounds_per_kg, total_charge};
pub use date_normalizer::{
    DATE_FORMAT, SPREADSHEET_EPOCH_OFFSET, format_date, normalize_auxiliary_date, normalize_date,
};
pub use fuel_rate::{format_fuel_rate, resolve_fuel_rate};
pub use rate_matrix::{resolve_unit_rate, select_rate_matrix};
pub use zone::{POSTAL_PREFIX_LEN, resolve_zone};
