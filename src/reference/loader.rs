//! Reference table loading.
//!
//! Parses the raw zone-partition, fuel-surcharge and rate-matrix sheets of a
//! workbook into [`ReferenceTables`]. Any missing or malformed reference data
//! rejects the batch.

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::SheetNames;
use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, Sheet, Workbook};

use super::tables::{FuelScheduleEntry, RateMatrix, ReferenceTables, ZonePartitionEntry};

/// Rows of a rate sheet that hold weight breakpoints (0-indexed; sheet rows 2 through 72).
pub const RATE_ROW_WINDOW: RangeInclusive<usize> = 1..=71;

/// Separator between the two dates of a fuel schedule range.
pub const FUEL_RANGE_SEPARATOR: char = '~';

const FUEL_DATE_FORMAT: &str = "%d-%m-%Y";

/// Looks up a sheet that the batch cannot run without.
pub fn require_sheet<'a>(workbook: &'a Workbook, name: &str) -> EngineResult<&'a Sheet> {
    workbook.sheet(name).ok_or_else(|| EngineError::MissingSheet {
        sheet: name.to_string(),
    })
}

/// Checks that a sheet has at least the given number of rows and columns.
pub fn require_shape(sheet: &Sheet, min_rows: usize, min_columns: usize) -> EngineResult<()> {
    if sheet.row_count() < min_rows {
        return Err(invalid_format(
            sheet,
            format!(
                "expected at least {} rows, found {}",
                min_rows,
                sheet.row_count()
            ),
        ));
    }
    if sheet.column_count() < min_columns {
        return Err(invalid_format(
            sheet,
            format!(
                "expected at least {} columns, found {}",
                min_columns,
                sheet.column_count()
            ),
        ));
    }
    Ok(())
}

fn invalid_format(sheet: &Sheet, message: String) -> EngineError {
    EngineError::InvalidSheetFormat {
        sheet: sheet.name.clone(),
        message,
    }
}

/// Loads every reference table the rating run needs.
///
/// The zone, fuel and base rate sheets are required. Month-override rate
/// sheets are picked up for every month whose sheet is present.
///
/// # Errors
///
/// - `MissingSheet` if a required sheet is absent
/// - `InvalidSheetFormat` if a sheet is smaller than its minimum shape or a
///   fuel schedule row cannot be parsed
pub fn load_reference_tables(
    workbook: &Workbook,
    sheets: &SheetNames,
) -> EngineResult<ReferenceTables> {
    let zone_sheet = require_sheet(workbook, &sheets.zones)?;
    let fuel_sheet = require_sheet(workbook, &sheets.fuel)?;
    let base_sheet = require_sheet(workbook, &sheets.base_rate)?;

    let zone_partitions = parse_zone_partitions(zone_sheet)?;
    let fuel_schedule = parse_fuel_schedule(fuel_sheet)?;
    let base_matrix = parse_rate_matrix(base_sheet)?;

    let mut month_overrides = BTreeMap::new();
    for month in 1..=12 {
        if let Some(sheet) = workbook.sheet(&sheets.month_override(month)) {
            month_overrides.insert(month, parse_rate_matrix(sheet)?);
        }
    }

    debug!(
        zone_partitions = zone_partitions.len(),
        fuel_windows = fuel_schedule.len(),
        base_rows = base_matrix.row_count(),
        base_zones = ?base_matrix.zones(),
        override_months = ?month_overrides.keys().collect::<Vec<_>>(),
        "Loaded reference tables"
    );

    Ok(ReferenceTables {
        zone_partitions,
        fuel_schedule,
        base_matrix,
        month_overrides,
    })
}

/// Parses the zone-partition sheet: prefix in column A, zone in column B, no header.
///
/// Rows with a blank prefix are skipped. Source order is kept.
pub fn parse_zone_partitions(sheet: &Sheet) -> EngineResult<Vec<ZonePartitionEntry>> {
    require_shape(sheet, 1, 2)?;

    Ok(sheet
        .rows
        .iter()
        .enumerate()
        .filter(|(row, _)| !sheet.cell(*row, 0).is_blank())
        .map(|(row, _)| ZonePartitionEntry {
            prefix: sheet.cell(row, 0).as_text().trim().to_string(),
            zone: sheet.cell(row, 1).as_text().trim().to_string(),
        })
        .collect())
}

/// Parses the fuel-surcharge sheet: `dd-mm-yyyy~dd-mm-yyyy` in column A and the
/// rate in column B. The header row is skipped, as are rows with a blank range.
pub fn parse_fuel_schedule(sheet: &Sheet) -> EngineResult<Vec<FuelScheduleEntry>> {
    require_shape(sheet, 2, 2)?;

    let mut schedule = Vec::new();
    for row in 1..sheet.row_count() {
        let range = sheet.cell(row, 0);
        if range.is_blank() {
            continue;
        }

        let range_text = range.as_text();
        let (start, end) = parse_date_range(&range_text).ok_or_else(|| {
            invalid_format(
                sheet,
                format!("row {}: invalid date range '{}'", row + 1, range_text),
            )
        })?;

        let rate_cell = sheet.cell(row, 1);
        let rate = parse_fraction(rate_cell).ok_or_else(|| {
            invalid_format(
                sheet,
                format!(
                    "row {}: invalid fuel rate '{}'",
                    row + 1,
                    rate_cell.as_text()
                ),
            )
        })?;

        schedule.push(FuelScheduleEntry { start, end, rate });
    }

    Ok(schedule)
}

fn parse_date_range(text: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (start, end) = text.split_once(FUEL_RANGE_SEPARATOR)?;
    Some((parse_day_month_year(start)?, parse_day_month_year(end)?))
}

fn parse_day_month_year(text: &str) -> Option<NaiveDate> {
    let text = text.trim().replace('/', "-");
    NaiveDate::parse_from_str(&text, FUEL_DATE_FORMAT).ok()
}

/// Parses a rate written as a fraction (`0.07`) or a percentage (`7%`).
fn parse_fraction(cell: &Cell) -> Option<Decimal> {
    if let Cell::Text(text) = cell {
        if let Some(percent) = text.trim().strip_suffix('%') {
            return Decimal::from_str(percent.trim())
                .ok()
                .map(|value| value / Decimal::ONE_HUNDRED);
        }
    }
    cell.as_decimal()
}

/// Parses a rate-matrix sheet.
///
/// The header row supplies zone labels from column B onwards, column A of
/// each row in [`RATE_ROW_WINDOW`] supplies the weight breakpoint, and the
/// grid supplies unit rates. Rows beyond the sheet, rows with a non-numeric
/// weight and blank or zero cells are left out, so they resolve to no rate.
pub fn parse_rate_matrix(sheet: &Sheet) -> EngineResult<RateMatrix> {
    require_shape(sheet, 2, 2)?;

    let width = sheet.column_count();
    let zone_columns: Vec<(usize, String)> = (1..width)
        .map(|col| (col, sheet.cell(0, col).as_text().trim().to_string()))
        .filter(|(_, zone)| !zone.is_empty())
        .collect();

    let mut matrix = RateMatrix::new(zone_columns.iter().map(|(_, z)| z.clone()).collect());

    for row in RATE_ROW_WINDOW {
        if row >= sheet.row_count() {
            break;
        }
        let Some(weight) = sheet.cell(row, 0).as_decimal() else {
            continue;
        };

        let mut cells = HashMap::new();
        for (col, zone) in &zone_columns {
            if let Some(rate) = sheet.cell(row, *col).as_decimal() {
                if !rate.is_zero() {
                    cells.entry(zone.clone()).or_insert(rate);
                }
            }
        }
        matrix.insert_row(weight, cells);
    }

    Ok(matrix)
}
