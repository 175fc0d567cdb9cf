//! Travel time estimation.
//!
//! Used by the landing-page estimate to give customers a rough duration:
//! driving time at a mixed-roads average speed, a fixed loading/unloading
//! block, and a proportional traffic buffer.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Assumed average speed across urban, rural, and motorway driving.
pub const AVERAGE_SPEED_MPH: u32 = 40;

/// Fixed loading and unloading time in minutes.
pub const LOADING_MINUTES: u32 = 30;

/// Traffic buffer as a fraction of driving time.
pub const TRAFFIC_BUFFER: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Estimates total travel time in minutes for a journey.
///
/// Minutes = (distance ÷ 40 mph × 60) + 30 loading minutes + 15% of the
/// driving portion as a traffic buffer, rounded up to the next whole minute.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::estimate_travel_minutes;
/// use rust_decimal::Decimal;
///
/// // 40 miles: 60 driving + 30 loading + 9 buffer
/// assert_eq!(estimate_travel_minutes(Decimal::from(40)), 99);
/// ```
pub fn estimate_travel_minutes(distance_miles: Decimal) -> u64 {
    let driving_minutes = distance_miles / Decimal::from(AVERAGE_SPEED_MPH) * Decimal::from(60);
    let buffer = driving_minutes * TRAFFIC_BUFFER;
    let total = driving_minutes + Decimal::from(LOADING_MINUTES) + buffer;
    total.ceil().to_u64().unwrap_or(0)
}

/// Renders a minute count as "X hours and Y minutes" or "Y minutes".
///
/// # Example
///
/// ```
/// use quote_engine::calculation::format_travel_time;
///
/// assert_eq!(format_travel_time(99), "1 hour and 39 minutes");
/// assert_eq!(format_travel_time(45), "45 minutes");
/// ```
pub fn format_travel_time(minutes: u64) -> String {
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if hours > 0 {
        format!(
            "{} hour{} and {} minutes",
            hours,
            if hours == 1 { "" } else { "s" },
            remainder
        )
    } else {
        format!("{} minutes", remainder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_distance_is_loading_time_only() {
        assert_eq!(estimate_travel_minutes(Decimal::ZERO), 30);
    }

    #[test]
    fn test_forty_miles() {
        // 60 driving + 30 loading + 9 buffer
        assert_eq!(estimate_travel_minutes(dec("40")), 99);
    }

    #[test]
    fn test_fractional_minutes_round_up() {
        // 10 miles: 15 driving + 30 loading + 2.25 buffer = 47.25 -> 48
        assert_eq!(estimate_travel_minutes(dec("10")), 48);
    }

    #[test]
    fn test_format_under_an_hour() {
        assert_eq!(format_travel_time(45), "45 minutes");
        assert_eq!(format_travel_time(0), "0 minutes");
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_travel_time(60), "1 hour and 0 minutes");
        assert_eq!(format_travel_time(99), "1 hour and 39 minutes");
        assert_eq!(format_travel_time(150), "2 hours and 30 minutes");
    }
}
