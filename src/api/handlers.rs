//! HTTP request handlers for the Quote Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{build_price_breakdown, calculate_quote_estimate};
use crate::models::{QuoteRequest, VanSize};

use super::request::{parse_move_date, EstimateRequest, QuoteApiRequest};
use super::response::{ApiError, ApiErrorResponse, EstimateResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/quote", post(quote_handler))
        .route("/quote/estimate", post(estimate_handler))
        .with_state(state)
}

/// Handler for the POST /quote endpoint.
///
/// Accepts a quote request and returns the full price breakdown.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteApiRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let quote: QuoteRequest = request.into();

    let start_time = Instant::now();
    match build_price_breakdown(&quote, state.config().rates(), state.calendar()) {
        Ok(breakdown) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                distance_miles = %quote.distance_miles,
                van_size = %quote.van_size,
                total = %breakdown.total,
                duration_us = duration.as_micros(),
                "Quote completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(QuoteResponse {
                    quote_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    breakdown,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Quote failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /quote/estimate endpoint.
///
/// Accepts the minimal landing-page fields and returns a simplified
/// estimate with a travel-time prediction.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let van_size = request
        .van_size
        .as_deref()
        .map(VanSize::from_key)
        .unwrap_or_default();
    let move_date = request.move_date.as_deref().and_then(parse_move_date);

    match calculate_quote_estimate(
        request.distance_miles,
        van_size,
        move_date,
        request.is_urban,
        state.config().rates(),
        state.calendar(),
    ) {
        Ok(estimate) => {
            info!(
                correlation_id = %correlation_id,
                distance_miles = %request.distance_miles,
                total = %estimate.breakdown.total,
                "Estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(EstimateResponse {
                    quote_id: Uuid::new_v4(),
                    timestamp: Utc::now(),
                    engine_version: env!("CARGO_PKG_VERSION").to_string(),
                    estimate,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Estimate failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Maps a JSON extraction rejection onto a 400 response.
fn rejection_response(
    rejection: JsonRejection,
    correlation_id: Uuid,
) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
