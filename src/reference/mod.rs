//! Reference table loading for the shipment rating engine.
//!
//! This module turns the raw zone-partition, fuel-surcharge and rate-matrix
//! sheets of a workbook into typed, immutable lookup tables.

mod loader;
mod tables;

pub use loader::{
    FUEL_RANGE_SEPARATOR, RATE_ROW_WINDOW, load_reference_tables, parse_fuel_schedule,
    parse_rate_matrix, parse_zone_partitions, require_shape, require_sheet,
};
pub use tables::{FuelScheduleEntry, RateMatrix, ReferenceTables, ZonePartitionEntry};
