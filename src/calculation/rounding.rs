//! Money rounding and formatting policy.
//!
//! All price finalization goes through [`round_up_to_pound`] so the quote
//! total and the deposit calculation can never diverge. The policy always
//! rounds up to the next whole pound.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount up to the next whole pound.
///
/// This is the single named rounding operation for finalized money. Exact
/// whole-pound amounts are returned unchanged.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::round_up_to_pound;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_up_to_pound(Decimal::from_str("33.72").unwrap()), Decimal::from(34));
/// assert_eq!(round_up_to_pound(Decimal::from(15)), Decimal::from(15));
/// ```
pub fn round_up_to_pound(amount: Decimal) -> Decimal {
    amount.ceil()
}

/// Rounds an amount up to two decimal places (penny precision).
///
/// Used for reported decompositions such as the VAT amount, which is
/// always ceiled at penny precision.
pub fn round_up_to_penny(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::ToPositiveInfinity)
}

/// Formats a price for display as `£` followed by a 2-decimal amount.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::from(34)), "£34.00");
/// ```
pub fn format_price(amount: Decimal) -> String {
    format!("£{:.2}", amount)
}
