//! Urgency surcharge calculation.
//!
//! The urgency premium follows the same multiplicative-percentage pattern as
//! the schedule surcharge and is computed on the same base amount, but the
//! two are summed as independent line items, never compounded.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::UrgencyLevel;

/// Returns the urgency multiplier for the given tier.
///
/// Unrecognized tier strings have already been mapped to
/// [`UrgencyLevel::Standard`] by the enum parser, so this lookup is total.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::urgency_multiplier;
/// use quote_engine::config::RateTable;
/// use quote_engine::models::UrgencyLevel;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = RateTable::default();
/// assert_eq!(urgency_multiplier(UrgencyLevel::Standard, &rates), Decimal::ONE);
/// assert_eq!(
///     urgency_multiplier(UrgencyLevel::Express, &rates),
///     Decimal::from_str("1.30").unwrap()
/// );
/// ```
pub fn urgency_multiplier(urgency: UrgencyLevel, rates: &RateTable) -> Decimal {
    rates.urgency_multipliers.for_tier(urgency)
}
