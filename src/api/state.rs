//! Application state for the Quote Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::{HolidayCalendar, UkBankHolidayCalendar};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded rate table and the holiday calendar used for schedule surcharges.
#[derive(Clone)]
pub struct AppState {
    /// The loaded pricing configuration.
    config: Arc<ConfigLoader>,
    /// The calendar consulted for public-holiday surcharges.
    calendar: Arc<dyn HolidayCalendar + Send + Sync>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader
    /// and the built-in UK bank holiday calendar.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_calendar(config, Arc::new(UkBankHolidayCalendar))
    }

    /// Creates a new application state with a custom holiday calendar.
    pub fn with_calendar(
        config: ConfigLoader,
        calendar: Arc<dyn HolidayCalendar + Send + Sync>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            calendar,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the holiday calendar.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }
}
