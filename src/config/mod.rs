//! Configuration loading and management for the shipment rating engine.
//!
//! This module provides functionality to load the rating configuration
//! (sheet names, order column headers and the disallowed order year) from
//! a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use shipment_rating::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Orders sheet: {}", loader.config().sheets.orders);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{OrderColumns, RatingConfig, SheetNames};
