//! Core data models for the quoting engine.
//!
//! This module contains the domain models used throughout the engine.

mod price_breakdown;
mod pricing_history;
mod quote_request;

pub use price_breakdown::{LineItem, PriceBreakdown, QuoteEstimate};
pub use pricing_history::PricingHistoryRecord;
pub use quote_request::{FloorAccess, QuoteRequest, UrgencyLevel, VanSize};
