//! Van size multiplier and time-based labour charge.
//!
//! Both lookups are keyed by van size. Unrecognized van-size strings have
//! already been mapped to the medium tier by
//! [`VanSize::from_key`](crate::models::VanSize::from_key), so these lookups
//! are total and never error.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::VanSize;

/// Returns the price multiplier for the given van size.
pub fn van_size_multiplier(van_size: VanSize, rates: &RateTable) -> Decimal {
    rates.van_size_multipliers.for_size(van_size)
}

/// Returns the hourly labour rate for the given van size, in pounds.
pub fn hourly_rate(van_size: VanSize, rates: &RateTable) -> Decimal {
    rates.hourly_rates.for_size(van_size)
}

/// Calculates the time-based labour charge.
///
/// Time charge = hourly rate for the van size × booked hours. Zero hours
/// (the default for unset bookings) produces a zero charge.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::calculate_time_charge;
/// use quote_engine::config::RateTable;
/// use quote_engine::models::VanSize;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// let charge = calculate_time_charge(VanSize::Large, Decimal::from(3), &rates);
/// assert_eq!(charge, Decimal::from(105));
/// ```
pub fn calculate_time_charge(van_size: VanSize, hours: Decimal, rates: &RateTable) -> Decimal {
    if hours <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    hourly_rate(van_size, rates) * hours
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_by_van_size() {
        let rates = RateTable::default();
        assert_eq!(van_size_multiplier(VanSize::Small, &rates), dec("1.0"));
        assert_eq!(van_size_multiplier(VanSize::Medium, &rates), dec("1.2"));
        assert_eq!(van_size_multiplier(VanSize::Large, &rates), dec("1.4"));
        assert_eq!(van_size_multiplier(VanSize::Luton, &rates), dec("1.6"));
    }

    #[test]
    fn test_hourly_rate_by_van_size() {
        let rates = RateTable::default();
        assert_eq!(hourly_rate(VanSize::Small, &rates), dec("25"));
        assert_eq!(hourly_rate(VanSize::Luton, &rates), dec("40"));
    }

    #[test]
    fn test_time_charge_is_rate_times_hours() {
        let rates = RateTable::default();
        assert_eq!(
            calculate_time_charge(VanSize::Medium, dec("2.5"), &rates),
            dec("75")
        );
    }

    #[test]
    fn test_zero_hours_means_zero_charge() {
        let rates = RateTable::default();
        assert_eq!(
            calculate_time_charge(VanSize::Luton, Decimal::ZERO, &rates),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_unrecognized_size_already_behaves_as_medium() {
        let rates = RateTable::default();
        let fallback = VanSize::from_key("suv");
        assert_eq!(
            calculate_time_charge(fallback, dec("2"), &rates),
            calculate_time_charge(VanSize::Medium, dec("2"), &rates)
        );
    }
}
