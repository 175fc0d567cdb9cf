//! Price breakdown models produced by the aggregator.
//!
//! A [`PriceBreakdown`] is the engine's one output: an ordered list of
//! labeled line items for display, the rounded totals, the VAT
//! decomposition, the revenue split, and the raw component amounts for
//! downstream consumers (deposit calculation, pricing-history logging) that
//! need fields without re-parsing the line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single labeled monetary line in a price breakdown.
///
/// # Example
///
/// ```
/// use quote_engine::models::LineItem;
/// use rust_decimal::Decimal;
///
/// let item = LineItem {
///     label: "Fuel".to_string(),
///     amount: Decimal::new(212, 2),
/// };
/// assert_eq!(item.label, "Fuel");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Human-readable description of the charge.
    pub label: String,
    /// The monetary amount in pounds.
    pub amount: Decimal,
}

impl LineItem {
    /// Creates a line item from a label and amount.
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The complete price breakdown for a single quote.
///
/// Immutable once built; the engine produces exactly one per call and
/// retains nothing. The `total` is VAT-inclusive and equals the rounded
/// subtotal: the VAT amount is a reported decomposition of the final price,
/// not an additive charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Ordered display line items. Optional charges (floor access, peak and
    /// urgency surcharges) appear only when greater than zero.
    pub line_items: Vec<LineItem>,
    /// The component sum rounded up to whole pounds.
    pub subtotal: Decimal,
    /// VAT extracted from the VAT-inclusive total.
    pub vat_amount: Decimal,
    /// The final VAT-inclusive price in whole pounds.
    pub total: Decimal,
    /// The platform's cut of the total.
    pub platform_fee: Decimal,
    /// The driver's share of the total. Always `total - platform_fee`.
    pub driver_share: Decimal,
    /// The upfront deposit in pence.
    pub deposit_pence: Decimal,
    /// Raw distance charge before the van multiplier.
    pub distance_charge: Decimal,
    /// Time-based labour charge.
    pub time_charge: Decimal,
    /// Extra-helper fee.
    pub helpers_fee: Decimal,
    /// Floor-access fee after any lift discount.
    pub floor_access_fee: Decimal,
    /// Schedule (weekend/holiday/evening/commute) surcharge amount.
    pub peak_time_surcharge: Decimal,
    /// Urgency premium amount.
    pub urgency_surcharge: Decimal,
    /// Estimated fuel cost.
    pub fuel_cost: Decimal,
    /// Discounted cost of the empty return leg.
    pub return_journey_cost: Decimal,
}

/// A simplified quote for the landing page.
///
/// Wraps a full [`PriceBreakdown`] computed with no helpers, ground-floor
/// access, no lift, and standard urgency, overlaid with a travel-time
/// estimate and a short natural-language explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteEstimate {
    /// The underlying full breakdown.
    pub breakdown: PriceBreakdown,
    /// Estimated door-to-door time in minutes.
    pub estimated_minutes: u64,
    /// The estimate rendered as "X hours and Y minutes" or "Y minutes".
    pub estimated_time: String,
    /// The total formatted for display, e.g. "£34.00".
    pub price_string: String,
    /// A one-sentence summary of the quote.
    pub explanation: String,
}
