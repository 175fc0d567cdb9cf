//! Configuration types for the quoting engine.
//!
//! This module contains the strongly-typed rate table that is either
//! deserialized from a YAML configuration file or built from the compiled-in
//! defaults. Every calculator reads its constants from here; nothing is
//! hardcoded in the calculation modules.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{FloorAccess, VanSize};

/// A per-van-size table of decimal values.
///
/// Used for multipliers, hourly rates, and fuel economy figures. The lookup
/// is total over [`VanSize`], so the fallback-to-medium behavior lives in the
/// enum parsing, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct VanSizeRates {
    /// Value for a small van.
    pub small: Decimal,
    /// Value for a medium van.
    pub medium: Decimal,
    /// Value for a large van.
    pub large: Decimal,
    /// Value for a Luton van.
    pub luton: Decimal,
}

impl VanSizeRates {
    /// Returns the value for the given van size.
    pub fn for_size(&self, size: VanSize) -> Decimal {
        match size {
            VanSize::Small => self.small,
            VanSize::Medium => self.medium,
            VanSize::Large => self.large,
            VanSize::Luton => self.luton,
        }
    }
}

/// Fixed fees by floor-access tier. Ground floor is always free.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorAccessFees {
    /// Fee for ground floor access.
    pub ground: Decimal,
    /// Fee for first floor access.
    pub first_floor: Decimal,
    /// Fee for second floor access.
    pub second_floor: Decimal,
    /// Fee for third floor or higher.
    pub third_floor_plus: Decimal,
}

impl FloorAccessFees {
    /// Returns the base fee for the given floor-access tier.
    pub fn for_tier(&self, tier: FloorAccess) -> Decimal {
        match tier {
            FloorAccess::Ground => self.ground,
            FloorAccess::FirstFloor => self.first_floor,
            FloorAccess::SecondFloor => self.second_floor,
            FloorAccess::ThirdFloorPlus => self.third_floor_plus,
        }
    }
}

/// Multiplicative premiums by urgency tier. Standard is always 1.0.
#[derive(Debug, Clone, Deserialize)]
pub struct UrgencyMultipliers {
    /// Multiplier for a standard booking.
    pub standard: Decimal,
    /// Multiplier for a priority booking.
    pub priority: Decimal,
    /// Multiplier for an express booking.
    pub express: Decimal,
}

impl UrgencyMultipliers {
    /// Returns the multiplier for the given urgency tier.
    pub fn for_tier(&self, tier: crate::models::UrgencyLevel) -> Decimal {
        match tier {
            crate::models::UrgencyLevel::Standard => self.standard,
            crate::models::UrgencyLevel::Priority => self.priority,
            crate::models::UrgencyLevel::Express => self.express,
        }
    }
}

/// The complete, immutable rate table for the quoting engine.
///
/// This is the single source of truth for all tunable pricing constants. It
/// is loaded once at process start (from YAML via
/// [`ConfigLoader`](crate::config::ConfigLoader) or from [`Default`]) and
/// never mutated; calculators receive it by shared reference, so concurrent
/// quote requests need no coordination.
///
/// # Example
///
/// ```
/// use quote_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// assert_eq!(rates.minimum_price, Decimal::from(15));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RateTable {
    /// Minimum price in pounds. Doubles as the base fare on every journey.
    pub minimum_price: Decimal,
    /// Lower per-mile rate, applied to rural/long-haul journeys.
    pub base_rate_per_mile_min: Decimal,
    /// Higher per-mile rate, applied to urban or short (< 10 mile) journeys.
    pub base_rate_per_mile_max: Decimal,
    /// Price multipliers by van size.
    pub van_size_multipliers: VanSizeRates,
    /// Hourly labour rates by van size, in pounds.
    pub hourly_rates: VanSizeRates,
    /// Hourly rate per extra helper, in pounds.
    pub helper_hourly_rate: Decimal,
    /// Fixed fees by floor-access tier, in pounds.
    pub floor_access_fees: FloorAccessFees,
    /// Fraction of the floor fee discounted when a lift is available.
    pub lift_discount: Decimal,
    /// Additive surcharge fraction for weekday commute-hour moves.
    pub peak_time_surcharge: Decimal,
    /// Additive surcharge fraction for moves at or after 18:00.
    pub evening_surcharge: Decimal,
    /// Additive surcharge fraction for Saturday or Sunday moves.
    pub weekend_surcharge: Decimal,
    /// Additive surcharge fraction for public-holiday moves.
    pub holiday_surcharge: Decimal,
    /// Multiplicative premiums by urgency tier.
    pub urgency_multipliers: UrgencyMultipliers,
    /// Fuel economy in miles per UK gallon, by van size.
    pub fuel_efficiency_mpg: VanSizeRates,
    /// Fuel price per litre, in pounds.
    pub fuel_cost_per_litre: Decimal,
    /// Litres per UK gallon.
    pub litres_per_gallon: Decimal,
    /// Fraction of the one-way per-mile cost charged for the empty return leg.
    pub return_journey_factor: Decimal,
    /// Fraction of the total kept by the platform.
    pub platform_fee_percentage: Decimal,
    /// VAT rate. The displayed VAT amount is extracted from the VAT-inclusive
    /// total, not added on top.
    pub vat_rate: Decimal,
    /// Fraction of the total collected upfront as a deposit.
    pub deposit_percentage: Decimal,
}

impl Default for RateTable {
    /// The documented UK defaults, matching `config/pricing/rates.yaml`.
    fn default() -> Self {
        Self {
            minimum_price: Decimal::from(15),
            base_rate_per_mile_min: Decimal::new(80, 2),  // 0.80
            base_rate_per_mile_max: Decimal::new(120, 2), // 1.20
            van_size_multipliers: VanSizeRates {
                small: Decimal::new(10, 1),  // 1.0
                medium: Decimal::new(12, 1), // 1.2
                large: Decimal::new(14, 1),  // 1.4
                luton: Decimal::new(16, 1),  // 1.6
            },
            hourly_rates: VanSizeRates {
                small: Decimal::from(25),
                medium: Decimal::from(30),
                large: Decimal::from(35),
                luton: Decimal::from(40),
            },
            helper_hourly_rate: Decimal::from(20),
            floor_access_fees: FloorAccessFees {
                ground: Decimal::ZERO,
                first_floor: Decimal::from(20),
                second_floor: Decimal::from(40),
                third_floor_plus: Decimal::from(60),
            },
            lift_discount: Decimal::new(5, 1),       // 0.5
            peak_time_surcharge: Decimal::new(15, 2), // 0.15
            evening_surcharge: Decimal::new(10, 2),   // 0.10
            weekend_surcharge: Decimal::new(12, 2),   // 0.12
            holiday_surcharge: Decimal::new(20, 2),   // 0.20
            urgency_multipliers: UrgencyMultipliers {
                standard: Decimal::ONE,
                priority: Decimal::new(115, 2), // 1.15
                express: Decimal::new(130, 2),  // 1.30
            },
            fuel_efficiency_mpg: VanSizeRates {
                small: Decimal::from(34),
                medium: Decimal::from(30),
                large: Decimal::from(25),
                luton: Decimal::from(20),
            },
            fuel_cost_per_litre: Decimal::new(140, 2), // 1.40
            litres_per_gallon: Decimal::new(454609, 5), // 4.54609
            return_journey_factor: Decimal::new(50, 2), // 0.50
            platform_fee_percentage: Decimal::new(25, 2), // 0.25
            vat_rate: Decimal::new(20, 2),              // 0.20
            deposit_percentage: Decimal::new(25, 2),    // 0.25
        }
    }
}

impl RateTable {
    /// Fraction of the total paid to the driver.
    ///
    /// Derived rather than stored so the two shares always sum to 1.
    pub fn driver_share_percentage(&self) -> Decimal {
        Decimal::ONE - self.platform_fee_percentage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UrgencyLevel;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rate_table_constants() {
        let rates = RateTable::default();
        assert_eq!(rates.minimum_price, dec("15"));
        assert_eq!(rates.base_rate_per_mile_min, dec("0.80"));
        assert_eq!(rates.base_rate_per_mile_max, dec("1.20"));
        assert_eq!(rates.helper_hourly_rate, dec("20"));
        assert_eq!(rates.litres_per_gallon, dec("4.54609"));
        assert_eq!(rates.vat_rate, dec("0.20"));
    }

    #[test]
    fn test_van_size_rates_lookup() {
        let rates = RateTable::default();
        assert_eq!(rates.van_size_multipliers.for_size(VanSize::Small), dec("1.0"));
        assert_eq!(rates.van_size_multipliers.for_size(VanSize::Medium), dec("1.2"));
        assert_eq!(rates.van_size_multipliers.for_size(VanSize::Large), dec("1.4"));
        assert_eq!(rates.van_size_multipliers.for_size(VanSize::Luton), dec("1.6"));
        assert_eq!(rates.hourly_rates.for_size(VanSize::Luton), dec("40"));
        assert_eq!(rates.fuel_efficiency_mpg.for_size(VanSize::Large), dec("25"));
    }

    #[test]
    fn test_floor_access_fee_lookup() {
        let rates = RateTable::default();
        assert_eq!(rates.floor_access_fees.for_tier(FloorAccess::Ground), dec("0"));
        assert_eq!(
            rates.floor_access_fees.for_tier(FloorAccess::FirstFloor),
            dec("20")
        );
        assert_eq!(
            rates.floor_access_fees.for_tier(FloorAccess::ThirdFloorPlus),
            dec("60")
        );
    }

    #[test]
    fn test_urgency_multiplier_lookup() {
        let rates = RateTable::default();
        assert_eq!(
            rates.urgency_multipliers.for_tier(UrgencyLevel::Standard),
            dec("1.0")
        );
        assert_eq!(
            rates.urgency_multipliers.for_tier(UrgencyLevel::Express),
            dec("1.30")
        );
    }

    #[test]
    fn test_driver_share_is_complement_of_platform_fee() {
        let rates = RateTable::default();
        assert_eq!(
            rates.platform_fee_percentage + rates.driver_share_percentage(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_rate_table_deserializes_from_yaml() {
        let yaml = r#"
minimum_price: "15"
base_rate_per_mile_min: "0.80"
base_rate_per_mile_max: "1.20"
van_size_multipliers: { small: "1.0", medium: "1.2", large: "1.4", luton: "1.6" }
hourly_rates: { small: "25", medium: "30", large: "35", luton: "40" }
helper_hourly_rate: "20"
floor_access_fees: { ground: "0", first_floor: "20", second_floor: "40", third_floor_plus: "60" }
lift_discount: "0.5"
peak_time_surcharge: "0.15"
evening_surcharge: "0.10"
weekend_surcharge: "0.12"
holiday_surcharge: "0.20"
urgency_multipliers: { standard: "1.0", priority: "1.15", express: "1.30" }
fuel_efficiency_mpg: { small: "34", medium: "30", large: "25", luton: "20" }
fuel_cost_per_litre: "1.40"
litres_per_gallon: "4.54609"
return_journey_factor: "0.50"
platform_fee_percentage: "0.25"
vat_rate: "0.20"
deposit_percentage: "0.25"
"#;
        let rates: RateTable = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rates.minimum_price, dec("15"));
        assert_eq!(rates.van_size_multipliers.for_size(VanSize::Luton), dec("1.6"));
        assert_eq!(rates.deposit_percentage, dec("0.25"));
    }
}
