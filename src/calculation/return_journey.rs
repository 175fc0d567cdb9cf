//! Return-journey cost estimation.
//!
//! Models the vehicle's empty trip back to origin. The driver is already
//! out, so there is no base fare and no urban adjustment; the leg uses the
//! lowest per-mile rate discounted by the return-journey factor.

use rust_decimal::Decimal;

use crate::config::RateTable;

/// Calculates the discounted cost of the empty return leg.
///
/// Cost = distance × lowest per-mile rate × return-journey factor.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::calculate_return_journey_cost;
/// use quote_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// // 10 miles x 0.80 x 0.50
/// let cost = calculate_return_journey_cost(Decimal::from(10), &rates);
/// assert_eq!(cost, Decimal::from(4));
/// ```
pub fn calculate_return_journey_cost(distance_miles: Decimal, rates: &RateTable) -> Decimal {
    distance_miles * rates.base_rate_per_mile_min * rates.return_journey_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_half_of_lowest_rate_mileage() {
        let rates = RateTable::default();
        assert_eq!(calculate_return_journey_cost(dec("10"), &rates), dec("4"));
        assert_eq!(calculate_return_journey_cost(dec("25"), &rates), dec("10"));
    }

    #[test]
    fn test_no_base_fare() {
        let rates = RateTable::default();
        assert_eq!(
            calculate_return_journey_cost(Decimal::ZERO, &rates),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_ignores_urban_rate() {
        let rates = RateTable::default();
        // Always the min rate: 5 x 0.80 x 0.5, never 5 x 1.20 x 0.5
        assert_eq!(calculate_return_journey_cost(dec("5"), &rates), dec("2"));
    }
}
