//! Typed reference tables.
//!
//! These structures are built once per batch by the loader and are never
//! mutated afterwards.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One row of the zone-partition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonePartitionEntry {
    /// Postal-code prefix matched against the order's postal prefix.
    pub prefix: String,
    /// The zone label assigned to matching postal codes.
    pub zone: String,
}

/// One validity window of the fuel-surcharge schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuelScheduleEntry {
    /// First day the rate applies (inclusive).
    pub start: NaiveDate,
    /// Last day the rate applies (inclusive).
    pub end: NaiveDate,
    /// Surcharge as a fraction, e.g. 0.07.
    pub rate: Decimal,
}

impl FuelScheduleEntry {
    /// Returns true if `date` falls inside the closed window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A weight-by-zone table of unit rates.
///
/// Row keys are the discrete weight breakpoints from the row-label column and
/// column keys are the zone labels from the header row. Lookups use exact key
/// equality; there is no interpolation between breakpoints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateMatrix {
    zones: Vec<String>,
    rows: HashMap<Decimal, HashMap<String, Decimal>>,
}

impl RateMatrix {
    /// Creates an empty matrix with the given zone columns.
    pub fn new(zones: Vec<String>) -> Self {
        Self {
            zones,
            rows: HashMap::new(),
        }
    }

    /// Adds a weight row. The first row with a given weight wins.
    pub fn insert_row(&mut self, weight: Decimal, cells: HashMap<String, Decimal>) {
        self.rows.entry(weight.normalize()).or_insert(cells);
    }

    /// Returns the rate for (`weight`, `zone`), if the cell holds a value.
    pub fn lookup(&self, weight: Decimal, zone: &str) -> Option<Decimal> {
        self.rows
            .get(&weight.normalize())
            .and_then(|row| row.get(zone))
            .copied()
    }

    /// Returns the zone column labels in header order.
    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    /// Returns the number of weight rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// All reference data for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTables {
    /// Zone partitions in source order.
    pub zone_partitions: Vec<ZonePartitionEntry>,
    /// Fuel schedule in source order.
    pub fuel_schedule: Vec<FuelScheduleEntry>,
    /// The base rate matrix.
    pub base_matrix: RateMatrix,
    /// Month-specific matrices keyed by calendar month (1-12).
    pub month_overrides: BTreeMap<u32, RateMatrix>,
}
