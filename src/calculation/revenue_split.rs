//! Platform/driver revenue split, VAT extraction, and deposit derivation.
//!
//! The VAT amount here is a reported decomposition of an already-final,
//! VAT-inclusive price: the total equals the rounded subtotal and the VAT
//! line is extracted from it, never added on top.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateTable;

use super::rounding::round_up_to_penny;

/// The result of splitting a total between the platform and the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevenueSplit {
    /// The platform's cut, rounded to whole pounds.
    pub platform_fee: Decimal,
    /// The driver's share: total minus platform fee.
    pub driver_share: Decimal,
}

/// Splits a rounded whole-pound total between the platform and the driver.
///
/// Platform fee = round(total × platform fee percentage), half away from
/// zero, so £8.50 rounds to £9. The driver share is derived by subtraction
/// rather than computed independently, which guarantees
/// `platform_fee + driver_share == total` with no rounding drift.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::split_revenue;
/// use quote_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let split = split_revenue(Decimal::from(34), &RateTable::default());
/// assert_eq!(split.platform_fee, Decimal::from(9));
/// assert_eq!(split.driver_share, Decimal::from(25));
/// ```
pub fn split_revenue(total: Decimal, rates: &RateTable) -> RevenueSplit {
    let platform_fee = (total * rates.platform_fee_percentage)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    RevenueSplit {
        platform_fee,
        driver_share: total - platform_fee,
    }
}

/// Extracts the VAT amount from a VAT-inclusive total.
///
/// Uses the inclusive-extraction formula `total × rate / (1 + rate)`, rounded
/// up to penny precision.
pub fn extract_vat(total: Decimal, rates: &RateTable) -> Decimal {
    round_up_to_penny(total * rates.vat_rate / (Decimal::ONE + rates.vat_rate))
}

/// Derives the upfront deposit in minor currency units (pence).
///
/// Deposit = ceil(total × deposit percentage), converted to pence. Shares
/// the round-up policy with the quote total so the payment layer can never
/// disagree with the engine about the amount.
pub fn deposit_in_pence(total: Decimal, rates: &RateTable) -> Decimal {
    (total * rates.deposit_percentage).ceil() * Decimal::from(100)
}
