//! The breakdown aggregator: composes every leaf calculator into one quote.
//!
//! Data flows one way. The aggregator calls each leaf with fields from the
//! request and the rate table, sums their outputs, rounds once, and emits a
//! [`PriceBreakdown`]. No leaf calls another leaf and nothing retains state
//! between calls, so concurrent quoting needs no coordination.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::error::{EngineError, EngineResult};
use crate::models::{LineItem, PriceBreakdown, QuoteEstimate, QuoteRequest, VanSize};

/// Longest journey the engine will price, in miles.
///
/// Well past any real booking, but small enough that the subtotal
/// arithmetic can never overflow `Decimal`.
pub const MAX_DISTANCE_MILES: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Longest labour booking the engine will price, in hours.
pub const MAX_HOURS: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

use super::distance_charge::calculate_distance_charge;
use super::fuel_cost::calculate_fuel_cost;
use super::helper_fees::{calculate_floor_access_fee, calculate_helper_fee};
use super::holiday_calendar::HolidayCalendar;
use super::return_journey::calculate_return_journey_cost;
use super::revenue_split::{deposit_in_pence, extract_vat, split_revenue};
use super::rounding::{format_price, round_up_to_pound};
use super::schedule_surcharge::schedule_multiplier;
use super::time_charge::{calculate_time_charge, van_size_multiplier};
use super::travel_time::{estimate_travel_minutes, format_travel_time};
use super::urgency_surcharge::urgency_multiplier;

/// Builds the complete price breakdown for a quote request.
///
/// Subtotal = distance charge × van multiplier + time charge + helper fee +
/// floor-access fee + schedule surcharge + urgency surcharge + fuel cost +
/// return-journey cost. The total is the subtotal rounded up to the next
/// whole pound (rounding in the provider's favor), treated as VAT-inclusive.
///
/// Both surcharges are computed on the same base (distance × multiplier +
/// time charge) and added as independent line items; they never compound on
/// each other.
///
/// # Errors
///
/// Returns [`EngineError::InvalidQuote`] for negative distance or booked
/// hours, or values past [`MAX_DISTANCE_MILES`] / [`MAX_HOURS`]. Everything
/// else degrades gracefully per the field defaults.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::{build_price_breakdown, UkBankHolidayCalendar};
/// use quote_engine::config::RateTable;
/// use quote_engine::models::QuoteRequest;
/// use rust_decimal::Decimal;
///
/// let request = QuoteRequest {
///     distance_miles: Decimal::from(10),
///     ..QuoteRequest::default()
/// };
/// let breakdown =
///     build_price_breakdown(&request, &RateTable::default(), &UkBankHolidayCalendar).unwrap();
/// assert_eq!(breakdown.total, Decimal::from(34));
/// ```
pub fn build_price_breakdown(
    request: &QuoteRequest,
    rates: &RateTable,
    calendar: &dyn HolidayCalendar,
) -> EngineResult<PriceBreakdown> {
    validate_request(request)?;

    // Leaf calculators
    let distance_charge = calculate_distance_charge(request.distance_miles, request.is_urban, rates);
    let multiplier = van_size_multiplier(request.van_size, rates);
    let time_charge = calculate_time_charge(request.van_size, request.hours, rates);
    let helpers_fee = calculate_helper_fee(request.helpers, request.hours, rates);
    let floor_access_fee =
        calculate_floor_access_fee(request.floor_access, request.lift_available, rates);
    let fuel_cost = calculate_fuel_cost(request.distance_miles, request.van_size, rates);
    let return_journey_cost = calculate_return_journey_cost(request.distance_miles, rates);

    // Both surcharges share one base and are summed, not compounded
    let surcharge_base = distance_charge * multiplier + time_charge;
    let peak_multiplier = schedule_multiplier(
        request.move_date,
        request.move_time.as_deref(),
        rates,
        calendar,
    );
    let peak_time_surcharge = surcharge_base * (peak_multiplier - Decimal::ONE);
    let urgency_mult = urgency_multiplier(request.urgency, rates);
    let urgency_surcharge = surcharge_base * (urgency_mult - Decimal::ONE);

    let raw_subtotal = distance_charge * multiplier
        + time_charge
        + helpers_fee
        + floor_access_fee
        + peak_time_surcharge
        + urgency_surcharge
        + fuel_cost
        + return_journey_cost;

    let subtotal = round_up_to_pound(raw_subtotal);
    // The rounded subtotal already includes VAT; the VAT line is extracted
    // from it for reporting, never added on top
    let total = subtotal;
    let vat_amount = extract_vat(total, rates);
    let split = split_revenue(total, rates);
    let deposit_pence = deposit_in_pence(total, rates);

    let mut line_items = vec![
        LineItem::new(
            format!("Distance ({:.1} miles)", request.distance_miles),
            distance_charge,
        ),
        LineItem::new(
            format!("Van size ({})", request.van_size),
            distance_charge * multiplier - distance_charge,
        ),
        LineItem::new(format!("Helpers ({})", request.helpers), helpers_fee),
        LineItem::new("Fuel", fuel_cost),
        LineItem::new("Return journey", return_journey_cost),
    ];

    // Optional lines appear only when they actually charge something
    if floor_access_fee > Decimal::ZERO {
        let lift_note = if request.lift_available {
            ", with lift"
        } else {
            ""
        };
        line_items.push(LineItem::new(
            format!("Floor access ({}{})", request.floor_access, lift_note),
            floor_access_fee,
        ));
    }
    if peak_time_surcharge > Decimal::ZERO {
        line_items.push(LineItem::new(
            format!("Peak time surcharge ({}%)", percent(peak_multiplier)),
            peak_time_surcharge,
        ));
    }
    if urgency_surcharge > Decimal::ZERO {
        line_items.push(LineItem::new(
            format!("Urgency surcharge ({}%)", percent(urgency_mult)),
            urgency_surcharge,
        ));
    }

    line_items.push(LineItem::new("Subtotal (excluding VAT)", subtotal));
    line_items.push(LineItem::new(
        format!("VAT ({}%)", (rates.vat_rate * Decimal::from(100)).normalize()),
        vat_amount,
    ));
    line_items.push(LineItem::new("Total (including VAT)", total));
    line_items.push(LineItem::new(
        format!(
            "Platform fee ({}%)",
            (rates.platform_fee_percentage * Decimal::from(100)).normalize()
        ),
        split.platform_fee,
    ));
    line_items.push(LineItem::new(
        format!(
            "Driver payment ({}%)",
            (rates.driver_share_percentage() * Decimal::from(100)).normalize()
        ),
        split.driver_share,
    ));

    Ok(PriceBreakdown {
        line_items,
        subtotal,
        vat_amount,
        total,
        platform_fee: split.platform_fee,
        driver_share: split.driver_share,
        deposit_pence,
        distance_charge,
        time_charge,
        helpers_fee,
        floor_access_fee,
        peak_time_surcharge,
        urgency_surcharge,
        fuel_cost,
        return_journey_cost,
    })
}

/// Builds the simplified landing-page estimate.
///
/// Calls the full aggregator with no helpers, ground-floor access, no lift,
/// and standard urgency, then overlays a travel-time estimate and a short
/// natural-language explanation.
pub fn calculate_quote_estimate(
    distance_miles: Decimal,
    van_size: VanSize,
    move_date: Option<chrono::NaiveDateTime>,
    is_urban: bool,
    rates: &RateTable,
    calendar: &dyn HolidayCalendar,
) -> EngineResult<QuoteEstimate> {
    let request = QuoteRequest {
        distance_miles,
        van_size,
        move_date,
        is_urban,
        ..QuoteRequest::default()
    };
    let breakdown = build_price_breakdown(&request, rates, calendar)?;

    let estimated_minutes = estimate_travel_minutes(distance_miles);
    let estimated_time = format_travel_time(estimated_minutes);
    let explanation = format!(
        "£{} for a {} van, {:.1} miles. Estimated time: {}.",
        breakdown.total.normalize(),
        van_size,
        distance_miles,
        estimated_time
    );
    let price_string = format_price(breakdown.total);

    Ok(QuoteEstimate {
        breakdown,
        estimated_minutes,
        estimated_time,
        price_string,
        explanation,
    })
}

/// Fail-fast guard for the required numeric fields.
///
/// Schedule and enum fields degrade gracefully and are never rejected here.
fn validate_request(request: &QuoteRequest) -> EngineResult<()> {
    if request.distance_miles < Decimal::ZERO {
        return Err(EngineError::InvalidQuote {
            field: "distance_miles".to_string(),
            message: format!("must not be negative, got {}", request.distance_miles),
        });
    }
    if request.distance_miles > MAX_DISTANCE_MILES {
        return Err(EngineError::InvalidQuote {
            field: "distance_miles".to_string(),
            message: format!(
                "must not exceed {} miles, got {}",
                MAX_DISTANCE_MILES, request.distance_miles
            ),
        });
    }
    if request.hours < Decimal::ZERO {
        return Err(EngineError::InvalidQuote {
            field: "hours".to_string(),
            message: format!("must not be negative, got {}", request.hours),
        });
    }
    if request.hours > MAX_HOURS {
        return Err(EngineError::InvalidQuote {
            field: "hours".to_string(),
            message: format!(
                "must not exceed {} hours, got {}",
                MAX_HOURS, request.hours
            ),
        });
    }
    Ok(())
}

/// Renders a multiplier as its percentage-over-one, e.g. 1.15 -> "15".
fn percent(multiplier: Decimal) -> Decimal {
    ((multiplier - Decimal::ONE) * Decimal::from(100)).normalize()
}
