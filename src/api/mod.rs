//! HTTP API module for the Quote Engine.
//!
//! This module provides the REST API endpoints for pricing removals jobs
//! and producing quick landing-page estimates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EstimateRequest, QuoteApiRequest};
pub use response::{ApiError, EstimateResponse, QuoteResponse};
pub use state::AppState;
