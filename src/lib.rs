//! Quote Engine for an on-demand man-and-van transport marketplace
//!
//! This crate provides deterministic price quoting for removals jobs: distance
//! and time charges, helper and floor-access fees, schedule and urgency
//! surcharges, fuel and return-journey costs, VAT decomposition, and the
//! platform/driver revenue split.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
