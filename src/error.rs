//! Error types for the shipment rating engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that rejects a batch. Per-order lookup misses are
//! not errors; they are reported as warnings in the batch summary.

use thiserror::Error;

/// The main error type for the shipment rating engine.
///
/// Every variant rejects the whole batch: no output rows are produced
/// when a run returns an error.
///
/// # Example
///
/// ```
/// use shipment_rating::error::EngineError;
///
/// let error = EngineError::MissingSheet {
///     sheet: "分区表".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required sheet not found: 分区表");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required reference or order sheet is absent from the workbook.
    #[error("Required sheet not found: {sheet}")]
    MissingSheet {
        /// The name of the missing sheet.
        sheet: String,
    },

    /// A required sheet exists but does not have the shape the loader needs.
    #[error("Invalid format in sheet '{sheet}': {message}")]
    InvalidSheetFormat {
        /// The name of the malformed sheet.
        sheet: String,
        /// A description of what is wrong with the sheet.
        message: String,
    },

    /// At least one order has a missing, unparseable, or disallowed order date.
    ///
    /// Row numbers are 1-indexed spreadsheet rows.
    #[error("订单日期缺失、格式错误或属于不允许的年份 (rows: {})", format_rows(.rows))]
    InvalidOrderDate {
        /// The spreadsheet rows carrying a rejected order date.
        rows: Vec<usize>,
    },

    /// An unexpected internal failure while processing the batch.
    #[error("Processing failed: {message}")]
    ProcessingFailed {
        /// A description of the failure, for logs only.
        message: String,
    },
}

fn format_rows(rows: &[usize]) -> String {
    rows.iter()
        .map(|row| row.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
