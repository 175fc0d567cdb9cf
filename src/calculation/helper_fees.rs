//! Helper crew and floor-access fee calculation.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::FloorAccess;

/// The minimum number of billable hours for helper crew.
///
/// The floor applies regardless of actual booked hours, including when the
/// booking has no hours at all.
pub const HELPER_MINIMUM_BILLABLE_HOURS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Calculates the extra-helper fee.
///
/// Helper fee = helper count × helper hourly rate × max(booked hours, 2).
///
/// # Example
///
/// ```
/// use quote_engine::calculation::calculate_helper_fee;
/// use quote_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// // Two helpers with no booked hours still bill the 2-hour floor
/// let fee = calculate_helper_fee(2, Decimal::ZERO, &rates);
/// assert_eq!(fee, Decimal::from(80));
/// ```
pub fn calculate_helper_fee(helpers: u32, hours: Decimal, rates: &RateTable) -> Decimal {
    let billable_hours = hours.max(HELPER_MINIMUM_BILLABLE_HOURS);
    Decimal::from(helpers) * rates.helper_hourly_rate * billable_hours
}

/// Calculates the floor-access fee.
///
/// The fee is a fixed lookup by tier (ground is free). When a lift is
/// available the fee is discounted by `rates.lift_discount` (50% by default).
pub fn calculate_floor_access_fee(
    floor_access: FloorAccess,
    lift_available: bool,
    rates: &RateTable,
) -> Decimal {
    let base_fee = rates.floor_access_fees.for_tier(floor_access);
    if lift_available {
        base_fee * rates.lift_discount
    } else {
        base_fee
    }
}
