//! HTTP API module for the shipment rating engine.
//!
//! This module is the transport boundary: it accepts a workbook as JSON,
//! runs the batch, and returns either the rated sheet as CSV or a
//! structured error.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{BATCH_ID_HEADER, create_router};
pub use request::{RatingRequest, SheetRequest};
pub use response::{ApiError, ApiErrorResponse, PROCESSING_FAILED_MESSAGE};
pub use state::AppState;
