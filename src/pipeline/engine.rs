//! Batch rating entry point.
//!
//! A run moves through `Loading -> Validating -> Rating -> Serializing -> Done`.
//! Missing or malformed sheets stop it in `Loading`, and a bad order date
//! stops it in `Validating`. An amount too large to represent fails the run
//! with `ProcessingFailed`. In every case no rows are produced.

use std::fmt;
use std::time::Instant;

use rust_decimal::Decimal;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::config::RatingConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{BatchSummary, RatedBatch, RatedOrder, RatingWarning, Workbook};
use crate::reference::{load_reference_tables, require_sheet};

use super::orders::{OrderSheetLayout, read_orders};
use super::rating::rate_order;
use super::serialize::serialize_results;
use super::validation::validate_orders;

/// Stages of a batch run, used in log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStage {
    /// Parsing reference tables and the order sheet.
    Loading,
    /// Checking every order date.
    Validating,
    /// Rating orders.
    Rating,
    /// Building the output table.
    Serializing,
    /// Output handed to the caller.
    Done,
    /// The batch was rejected.
    Rejected,
}

impl fmt::Display for BatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BatchStage::Loading => "loading",
            BatchStage::Validating => "validating",
            BatchStage::Rating => "rating",
            BatchStage::Serializing => "serializing",
            BatchStage::Done => "done",
            BatchStage::Rejected => "rejected",
        };
        f.write_str(name)
    }
}

/// Rates every order in a workbook.
///
/// This is a pure function of its inputs: the same workbook and
/// configuration always produce the same rated orders and output rows.
///
/// # Errors
///
/// - `MissingSheet` if the order, zone, fuel or base rate sheet is absent
/// - `InvalidSheetFormat` if a sheet is too small, an order column header is
///   missing, or a fuel schedule row is malformed
/// - `InvalidOrderDate` if any order date is missing, unparseable, or in the
///   disallowed year
/// - `ProcessingFailed` if a charge, percentage or the batch total is too
///   large to represent
///
/// # Example
///
/// ```no_run
/// use shipment_rating::config::RatingConfig;
/// use shipment_rating::models::Workbook;
/// use shipment_rating::pipeline::rate_workbook;
///
/// let workbook: Workbook = serde_json::from_str("{\"sheets\": []}").unwrap();
/// let batch = rate_workbook(&workbook, &RatingConfig::default())?;
/// println!("Rated {} orders", batch.summary.order_count);
/// # Ok::<(), shipment_rating::error::EngineError>(())
/// ```
pub fn rate_workbook(workbook: &Workbook, config: &RatingConfig) -> EngineResult<RatedBatch> {
    let batch_id = Uuid::new_v4();
    let start_time = Instant::now();

    info!(batch_id = %batch_id, stage = %BatchStage::Loading, "Starting batch rating");
    let loaded = require_sheet(workbook, &config.sheets.orders).and_then(|order_sheet| {
        let tables = load_reference_tables(workbook, &config.sheets)?;
        let layout = OrderSheetLayout::from_sheet(order_sheet, &config.columns)?;
        Ok((order_sheet, tables, layout))
    });
    let (order_sheet, tables, layout) = match loaded {
        Ok(loaded) => loaded,
        Err(err) => {
            warn!(batch_id = %batch_id, stage = %BatchStage::Rejected, error = %err, "Batch rejected while loading");
            return Err(err);
        }
    };
    let orders = read_orders(order_sheet, &layout);

    info!(batch_id = %batch_id, stage = %BatchStage::Validating, orders = orders.len());
    let validated = match validate_orders(orders, config.disallowed_order_year).into_result() {
        Ok(validated) => validated,
        Err(err) => {
            warn!(batch_id = %batch_id, stage = %BatchStage::Rejected, error = %err, "Batch rejected by order date validation");
            return Err(err);
        }
    };

    info!(batch_id = %batch_id, stage = %BatchStage::Rating, orders = validated.len());
    let processed = validated
        .into_iter()
        .map(|order| rate_order(order, &tables))
        .collect::<EngineResult<Vec<RatedOrder>>>()
        .and_then(|rated| {
            info!(batch_id = %batch_id, stage = %BatchStage::Serializing);
            let table = serialize_results(order_sheet, &layout, &rated, &config.result_sheet)?;
            let summary = summarize(batch_id, &rated)?;
            Ok((rated, table, summary))
        });
    let (rated, table, summary) = match processed {
        Ok(processed) => processed,
        Err(err) => {
            error!(batch_id = %batch_id, stage = %BatchStage::Rejected, error = %err, "Batch processing failed");
            return Err(err);
        }
    };

    info!(
        batch_id = %batch_id,
        stage = %BatchStage::Done,
        orders = summary.order_count,
        warnings = summary.warnings.len(),
        total_charge = %summary.total_charge,
        duration_us = start_time.elapsed().as_micros(),
        "Batch rating completed"
    );

    Ok(RatedBatch {
        orders: rated,
        table,
        summary,
    })
}

/// Collects per-order lookup misses and totals for a rated batch.
///
/// Returns `ProcessingFailed` if the grand total overflows.
pub fn summarize(batch_id: Uuid, rated: &[RatedOrder]) -> EngineResult<BatchSummary> {
    let mut summary = BatchSummary {
        batch_id,
        order_count: rated.len(),
        zone_misses: 0,
        fuel_gaps: 0,
        rate_misses: 0,
        total_charge: Decimal::ZERO,
        warnings: Vec::new(),
    };

    for order in rated {
        let row = order.order.sheet_row();
        summary.total_charge = summary
            .total_charge
            .checked_add(order.total_charge)
            .ok_or_else(|| EngineError::ProcessingFailed {
                message: format!("batch total overflows at row {}", row),
            })?;

        if !order.zone.is_found() {
            summary.zone_misses += 1;
            summary.warnings.push(RatingWarning {
                row,
                code: "ZONE_NOT_FOUND".to_string(),
                message: format!("No zone for postal code '{}'", order.order.postal_code),
            });
        }
        if order.fuel_rate.is_zero() {
            summary.fuel_gaps += 1;
            summary.warnings.push(RatingWarning {
                row,
                code: "FUEL_RATE_NOT_FOUND".to_string(),
                message: format!("No fuel surcharge applies on {}", order.order_date),
            });
        }
        if order.unit_rate.is_zero() {
            summary.rate_misses += 1;
            if order.zone.is_found() {
                summary.warnings.push(RatingWarning {
                    row,
                    code: "RATE_NOT_FOUND".to_string(),
                    message: format!(
                        "No rate for {} lb in zone {} on {}",
                        order.billable_weight, order.zone, order.order_date
                    ),
                });
            }
        }
    }

    for warning in &summary.warnings {
        warn!(batch_id = %batch_id, row = warning.row, code = %warning.code, "{}", warning.message);
    }

    Ok(summary)
}
