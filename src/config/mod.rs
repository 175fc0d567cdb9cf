//! Configuration loading and management for the quoting engine.
//!
//! This module provides the immutable [`RateTable`] that every calculator
//! reads its constants from, and a [`ConfigLoader`] for reading the table
//! from a YAML file.
//!
//! # Example
//!
//! ```
//! use quote_engine::config::RateTable;
//!
//! let rates = RateTable::default();
//! println!("Helper rate: {}/hour", rates.helper_hourly_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{FloorAccessFees, RateTable, UrgencyMultipliers, VanSizeRates};
