//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the pricing
//! rate table from a YAML file.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// Loads and provides access to the pricing rate table.
///
/// The `ConfigLoader` reads a YAML rate table from a directory and performs
/// basic sanity checks before handing it to the engine.
///
/// # Directory Structure
///
/// ```text
/// config/pricing/
/// └── rates.yaml   # The complete rate table
/// ```
///
/// # Example
///
/// ```no_run
/// use quote_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pricing").unwrap();
/// println!("Minimum price: {}", loader.rates().minimum_price);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads the rate table from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/pricing")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `rates.yaml` is missing from the directory
    /// - The file contains invalid YAML or is missing required fields
    /// - Any rate fails the sanity checks (negative rates, percentages
    ///   outside 0..=1)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_path = path.as_ref().join("rates.yaml");
        let path_str = rates_path.display().to_string();

        let content = fs::read_to_string(&rates_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let rates: RateTable =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        Self::validate(&rates, &path_str)?;

        Ok(Self { rates })
    }

    /// Builds a loader around the compiled-in default rate table.
    ///
    /// Useful for tests and for running without a config directory.
    pub fn with_defaults() -> Self {
        Self {
            rates: RateTable::default(),
        }
    }

    /// Returns the loaded rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Rejects rate tables that could only produce nonsensical prices.
    fn validate(rates: &RateTable, path: &str) -> EngineResult<()> {
        let non_negative = [
            ("minimum_price", rates.minimum_price),
            ("base_rate_per_mile_min", rates.base_rate_per_mile_min),
            ("base_rate_per_mile_max", rates.base_rate_per_mile_max),
            ("helper_hourly_rate", rates.helper_hourly_rate),
            ("fuel_cost_per_litre", rates.fuel_cost_per_litre),
            ("litres_per_gallon", rates.litres_per_gallon),
        ];
        for (name, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("{} must not be negative, got {}", name, value),
                });
            }
        }

        let per_size = [
            ("van_size_multipliers", &rates.van_size_multipliers),
            ("hourly_rates", &rates.hourly_rates),
        ];
        for (name, table) in per_size {
            for (size, value) in [
                ("small", table.small),
                ("medium", table.medium),
                ("large", table.large),
                ("luton", table.luton),
            ] {
                if value < Decimal::ZERO {
                    return Err(EngineError::ConfigParseError {
                        path: path.to_string(),
                        message: format!("{}.{} must not be negative, got {}", name, size, value),
                    });
                }
            }
        }

        // MPG figures are divisors, so zero is as fatal as negative
        for (size, value) in [
            ("small", rates.fuel_efficiency_mpg.small),
            ("medium", rates.fuel_efficiency_mpg.medium),
            ("large", rates.fuel_efficiency_mpg.large),
            ("luton", rates.fuel_efficiency_mpg.luton),
        ] {
            if value <= Decimal::ZERO {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!(
                        "fuel_efficiency_mpg.{} must be positive, got {}",
                        size, value
                    ),
                });
            }
        }

        let fractions = [
            ("lift_discount", rates.lift_discount),
            ("return_journey_factor", rates.return_journey_factor),
            ("platform_fee_percentage", rates.platform_fee_percentage),
            ("vat_rate", rates.vat_rate),
            ("deposit_percentage", rates.deposit_percentage),
        ];
        for (name, value) in fractions {
            if value < Decimal::ZERO || value > Decimal::ONE {
                return Err(EngineError::ConfigParseError {
                    path: path.to_string(),
                    message: format!("{} must be between 0 and 1, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}
