//! Pricing-history record for the persistence collaborator.
//!
//! The engine owns no storage; it hands this serializable record to the
//! persistence layer, which stores it as an opaque row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::price_breakdown::PriceBreakdown;
use super::quote_request::VanSize;

/// A snapshot of how a quoted price came to be.
///
/// `original_price` is the rounded price before schedule and urgency
/// surcharges; `final_price` is the quoted total. `factors` lists the labels
/// of every charge that contributed, so the history row stays readable
/// without re-running the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingHistoryRecord {
    /// The collection location.
    pub from_location: String,
    /// The delivery location.
    pub to_location: String,
    /// One-way distance in miles.
    pub distance_miles: Decimal,
    /// The booked van size.
    pub van_size: VanSize,
    /// The quoted VAT-inclusive total.
    pub final_price: Decimal,
    /// The rounded price before schedule and urgency surcharges.
    pub original_price: Decimal,
    /// Labels of the line items that made up the price.
    pub factors: Vec<String>,
}

impl PricingHistoryRecord {
    /// Builds a history record from a finished breakdown.
    pub fn from_breakdown(
        from_location: impl Into<String>,
        to_location: impl Into<String>,
        distance_miles: Decimal,
        van_size: VanSize,
        breakdown: &PriceBreakdown,
    ) -> Self {
        let pre_surcharge =
            breakdown.total - breakdown.peak_time_surcharge - breakdown.urgency_surcharge;
        Self {
            from_location: from_location.into(),
            to_location: to_location.into(),
            distance_miles,
            van_size,
            final_price: breakdown.total,
            original_price: pre_surcharge.ceil(),
            factors: breakdown
                .line_items
                .iter()
                .map(|item| item.label.clone())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineItem;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn breakdown_with_surcharges() -> PriceBreakdown {
        PriceBreakdown {
            line_items: vec![
                LineItem::new("Distance (10.0 miles)", dec("23")),
                LineItem::new("Urgency surcharge (15%)", dec("4.14")),
            ],
            subtotal: dec("38"),
            vat_amount: dec("6.34"),
            total: dec("38"),
            platform_fee: dec("10"),
            driver_share: dec("28"),
            deposit_pence: dec("1000"),
            distance_charge: dec("23"),
            time_charge: dec("0"),
            helpers_fee: dec("0"),
            floor_access_fee: dec("0"),
            peak_time_surcharge: dec("0"),
            urgency_surcharge: dec("4.14"),
            fuel_cost: dec("2.13"),
            return_journey_cost: dec("4"),
        }
    }

    #[test]
    fn test_record_captures_final_and_original_price() {
        let breakdown = breakdown_with_surcharges();
        let record = PricingHistoryRecord::from_breakdown(
            "Leeds",
            "York",
            dec("10"),
            VanSize::Medium,
            &breakdown,
        );

        assert_eq!(record.final_price, dec("38"));
        // 38 - 4.14 urgency, rounded back up to whole pounds
        assert_eq!(record.original_price, dec("34"));
        assert_eq!(record.from_location, "Leeds");
        assert_eq!(record.van_size, VanSize::Medium);
    }

    #[test]
    fn test_factors_mirror_line_item_labels() {
        let breakdown = breakdown_with_surcharges();
        let record = PricingHistoryRecord::from_breakdown(
            "Leeds",
            "York",
            dec("10"),
            VanSize::Medium,
            &breakdown,
        );
        assert_eq!(
            record.factors,
            vec![
                "Distance (10.0 miles)".to_string(),
                "Urgency surcharge (15%)".to_string()
            ]
        );
    }

    #[test]
    fn test_record_serialization() {
        let record = PricingHistoryRecord::from_breakdown(
            "Leeds",
            "York",
            dec("10"),
            VanSize::Luton,
            &breakdown_with_surcharges(),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"from_location\":\"Leeds\""));
        assert!(json.contains("\"van_size\":\"luton\""));
    }
}
