//! Batch result models.
//!
//! This module contains the [`RatedBatch`] type returned by a successful run,
//! together with the [`ResultTable`] handed to the transport layer and the
//! [`BatchSummary`] used for logging and reporting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cell, RatedOrder};
use crate::error::{EngineError, EngineResult};

/// A per-order lookup miss that did not block the batch.
///
/// # Example
///
/// ```
/// use shipment_rating::models::RatingWarning;
///
/// let warning = RatingWarning {
///     row: 5,
///     code: "ZONE_NOT_FOUND".to_string(),
///     message: "No zone for postal prefix 999".to_string(),
/// };
/// assert_eq!(warning.row, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingWarning {
    /// The 1-indexed spreadsheet row of the order.
    pub row: usize,
    /// A code identifying the kind of miss.
    pub code: String,
    /// A human-readable description.
    pub message: String,
}

/// Aggregate figures for one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Unique identifier of the run.
    pub batch_id: Uuid,
    /// Number of orders rated.
    pub order_count: usize,
    /// Orders whose postal prefix matched no partition entry.
    pub zone_misses: usize,
    /// Orders whose order date fell in no fuel schedule window.
    pub fuel_gaps: usize,
    /// Orders whose rate-matrix lookup resolved to zero.
    pub rate_misses: usize,
    /// Sum of all total charges.
    pub total_charge: Decimal,
    /// Per-order warnings, in row order.
    pub warnings: Vec<RatingWarning>,
}

/// The rated order sheet, ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    /// The name of the output sheet.
    pub sheet_name: String,
    /// Rows in the order sheet's layout with output columns filled in.
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    /// Encodes the table as CSV bytes.
    ///
    /// Rows keep their own widths; short rows are not padded.
    pub fn to_csv(&self) -> EngineResult<Vec<u8>> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());

        for row in &self.rows {
            writer
                .write_record(row.iter().map(Cell::as_text))
                .map_err(|e| EngineError::ProcessingFailed {
                    message: format!("failed to encode row: {}", e),
                })?;
        }

        writer
            .into_inner()
            .map_err(|e| EngineError::ProcessingFailed {
                message: format!("failed to flush CSV output: {}", e),
            })
    }
}

/// The outcome of a successful batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedBatch {
    /// The rated orders in source row order.
    pub orders: Vec<RatedOrder>,
    /// The serialized output table.
    pub table: ResultTable,
    /// Aggregate figures for the run.
    pub summary: BatchSummary,
}
