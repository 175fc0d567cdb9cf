//! Distance charge calculation.
//!
//! The distance charge is a base fare (the minimum price) plus a per-mile
//! rate chosen by rate regime: urban and short journeys pay the higher bound,
//! rural long hauls pay the lower bound.

use rust_decimal::Decimal;

use crate::config::RateTable;

/// Journeys shorter than this many miles always use the higher per-mile rate.
pub const SHORT_HAUL_THRESHOLD_MILES: Decimal = Decimal::from_parts(10, 0, 0, false, 0);

/// Calculates the distance-based charge for a journey.
///
/// The per-mile rate is the higher bound when `is_urban` is set or the
/// distance is under [`SHORT_HAUL_THRESHOLD_MILES`], otherwise the lower
/// bound. The minimum price acts as a base fare, so the result is at least
/// `rates.minimum_price` for any non-negative distance, and is monotonically
/// non-decreasing in distance within a fixed rate regime.
///
/// # Arguments
///
/// * `distance_miles` - One-way journey distance, assumed non-negative
/// * `is_urban` - Whether the journey is within an urban area
/// * `rates` - The rate table
///
/// # Example
///
/// ```
/// use quote_engine::calculation::calculate_distance_charge;
/// use quote_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// // 10 rural miles: 15 base + 10 x 0.80
/// let charge = calculate_distance_charge(Decimal::from(10), false, &rates);
/// assert_eq!(charge, Decimal::from(23));
/// ```
pub fn calculate_distance_charge(
    distance_miles: Decimal,
    is_urban: bool,
    rates: &RateTable,
) -> Decimal {
    let per_mile_rate = if is_urban || distance_miles < SHORT_HAUL_THRESHOLD_MILES {
        rates.base_rate_per_mile_max
    } else {
        rates.base_rate_per_mile_min
    };

    rates.minimum_price + distance_miles * per_mile_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rural_journey_uses_lower_rate() {
        let rates = RateTable::default();
        // 20 miles at 0.80 plus 15 base fare
        let charge = calculate_distance_charge(dec("20"), false, &rates);
        assert_eq!(charge, dec("31"));
    }

    #[test]
    fn test_urban_journey_uses_higher_rate() {
        let rates = RateTable::default();
        // 20 miles at 1.20 plus 15 base fare
        let charge = calculate_distance_charge(dec("20"), true, &rates);
        assert_eq!(charge, dec("39"));
    }

    #[test]
    fn test_short_haul_uses_higher_rate_even_when_rural() {
        let rates = RateTable::default();
        // 9.9 miles is under the 10-mile threshold
        let charge = calculate_distance_charge(dec("9.9"), false, &rates);
        assert_eq!(charge, dec("15") + dec("9.9") * dec("1.20"));
    }

    #[test]
    fn test_ten_mile_boundary_switches_to_lower_rate() {
        let rates = RateTable::default();
        // Exactly 10 miles is not short haul
        let charge = calculate_distance_charge(dec("10"), false, &rates);
        assert_eq!(charge, dec("23"));
    }

    #[test]
    fn test_zero_distance_returns_base_fare() {
        let rates = RateTable::default();
        let charge = calculate_distance_charge(dec("0"), false, &rates);
        assert_eq!(charge, rates.minimum_price);
    }

    #[test]
    fn test_charge_never_below_minimum_price() {
        let rates = RateTable::default();
        for miles in ["0", "0.1", "5", "9.99", "10", "50", "250"] {
            for urban in [false, true] {
                let charge = calculate_distance_charge(dec(miles), urban, &rates);
                assert!(
                    charge >= rates.minimum_price,
                    "charge {} below minimum for {} miles",
                    charge,
                    miles
                );
            }
        }
    }

    #[test]
    fn test_monotonic_within_rate_regime() {
        let rates = RateTable::default();
        let mut previous = Decimal::ZERO;
        // Urban regime is fixed-rate across the whole range
        for miles in 0..100 {
            let charge = calculate_distance_charge(Decimal::from(miles), true, &rates);
            assert!(charge >= previous);
            previous = charge;
        }
    }
}
