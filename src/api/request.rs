//! Request types for the Quote Engine API.
//!
//! This module defines the JSON request structures for the `/quote` and
//! `/quote/estimate` endpoints. Incoming payloads are deliberately loose:
//! enum fields arrive as free-text strings and dates as free-text
//! timestamps, and anything unrecognized falls back to a safe default
//! rather than rejecting the booking.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{FloorAccess, QuoteRequest, UrgencyLevel, VanSize};

/// Request body for the `/quote` endpoint.
///
/// Only `distance_miles` is required; every other field has a neutral
/// default so partially filled booking forms still price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteApiRequest {
    /// One-way driving distance in miles.
    pub distance_miles: Decimal,
    /// Van size key ("small", "medium", "large", "luton").
    #[serde(default)]
    pub van_size: Option<String>,
    /// Number of helpers requested.
    #[serde(default)]
    pub helpers: u32,
    /// Booked duration in hours.
    #[serde(default)]
    pub hours: Decimal,
    /// Floor access tier key ("ground", "firstFloor", ...).
    #[serde(default)]
    pub floor_access: Option<String>,
    /// Whether a lift is available at the pickup.
    #[serde(default)]
    pub lift_available: bool,
    /// Scheduled move date, e.g. "2026-03-14" or "2026-03-14T09:30:00".
    #[serde(default)]
    pub move_date: Option<String>,
    /// Customer-entered start time, e.g. "6:30pm" or "18:30".
    #[serde(default)]
    pub move_time: Option<String>,
    /// Urgency key ("standard", "priority", "express").
    #[serde(default)]
    pub urgency: Option<String>,
    /// Whether the job is within an urban area.
    #[serde(default)]
    pub is_urban: bool,
}

/// Request body for the `/quote/estimate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// One-way driving distance in miles.
    pub distance_miles: Decimal,
    /// Van size key ("small", "medium", "large", "luton").
    #[serde(default)]
    pub van_size: Option<String>,
    /// Scheduled move date, e.g. "2026-03-14".
    #[serde(default)]
    pub move_date: Option<String>,
    /// Whether the job is within an urban area.
    #[serde(default)]
    pub is_urban: bool,
}

/// Parses a customer-entered date string.
///
/// Accepts an ISO datetime with or without the `T` separator, or a bare
/// date (taken as midnight). Anything else yields `None`, which prices
/// with no schedule surcharge.
pub(super) fn parse_move_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

impl From<QuoteApiRequest> for QuoteRequest {
    fn from(req: QuoteApiRequest) -> Self {
        QuoteRequest {
            distance_miles: req.distance_miles,
            van_size: req
                .van_size
                .as_deref()
                .map(VanSize::from_key)
                .unwrap_or_default(),
            helpers: req.helpers,
            hours: req.hours,
            floor_access: req
                .floor_access
                .as_deref()
                .map(FloorAccess::from_key)
                .unwrap_or_default(),
            lift_available: req.lift_available,
            move_date: req.move_date.as_deref().and_then(parse_move_date),
            move_time: req.move_time,
            urgency: req
                .urgency
                .as_deref()
                .map(UrgencyLevel::from_key)
                .unwrap_or_default(),
            is_urban: req.is_urban,
        }
    }
}
