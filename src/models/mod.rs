//! Core data models for the shipment rating engine.
//!
//! This module contains the workbook input model, the order models and the
//! batch result models used throughout the engine.

mod batch_result;
mod order;
mod workbook;

pub use batch_result::{BatchSummary, RatedBatch, RatingWarning, ResultTable};
pub use order::{Order, RatedOrder, ZONE_NOT_FOUND, Zone};
pub use workbook::{Cell, Sheet, Workbook};
