//! Batch rating engine for shipment orders
//!
//! This crate rates a workbook of shipment orders against its zone-partition,
//! fuel-surcharge and rate-matrix reference sheets, producing a billable
//! weight, zone, fuel surcharge and total charge for every order. A batch
//! either rates completely or is rejected as a whole.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod reference;
