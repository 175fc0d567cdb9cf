//! Fuel cost estimation.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::VanSize;

/// Estimates the fuel cost for a journey.
///
/// Cost = (distance ÷ van's miles-per-gallon) × fuel price per litre ×
/// litres per UK gallon. The MPG figure is a per-van-size lookup.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::calculate_fuel_cost;
/// use quote_engine::config::RateTable;
/// use quote_engine::models::VanSize;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// // 30 miles in a medium van (30 mpg) burns exactly one gallon
/// let cost = calculate_fuel_cost(Decimal::from(30), VanSize::Medium, &rates);
/// assert_eq!(cost, rates.fuel_cost_per_litre * rates.litres_per_gallon);
/// ```
pub fn calculate_fuel_cost(
    distance_miles: Decimal,
    van_size: VanSize,
    rates: &RateTable,
) -> Decimal {
    let mpg = rates.fuel_efficiency_mpg.for_size(van_size);
    (distance_miles / mpg) * rates.fuel_cost_per_litre * rates.litres_per_gallon
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_one_gallon_journey() {
        let rates = RateTable::default();
        // 34 miles in a small van (34 mpg): one gallon
        let cost = calculate_fuel_cost(dec("34"), VanSize::Small, &rates);
        assert_eq!(cost, dec("1.40") * dec("4.54609"));
    }

    #[test]
    fn test_thirstier_van_costs_more() {
        let rates = RateTable::default();
        let distance = dec("50");
        let small = calculate_fuel_cost(distance, VanSize::Small, &rates);
        let luton = calculate_fuel_cost(distance, VanSize::Luton, &rates);
        assert!(luton > small);
    }

    #[test]
    fn test_zero_distance_zero_cost() {
        let rates = RateTable::default();
        assert_eq!(
            calculate_fuel_cost(Decimal::ZERO, VanSize::Luton, &rates),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_ten_mile_medium_van_example() {
        let rates = RateTable::default();
        // (10 / 30) x 1.40 x 4.54609, roughly £2.12
        let cost = calculate_fuel_cost(dec("10"), VanSize::Medium, &rates);
        assert!(cost > dec("2.12") && cost < dec("2.13"));
    }
}
