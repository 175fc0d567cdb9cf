//! Deterministic pricing calculators.
//!
//! Each pricing rule lives in its own module as a pure function over
//! [`Decimal`](rust_decimal::Decimal) inputs and the loaded
//! [`RateTable`](crate::config::RateTable). The [`breakdown`] module is the
//! only aggregation point; everything else is a leaf with no dependencies on
//! its siblings.

pub mod breakdown;
pub mod distance_charge;
pub mod fuel_cost;
pub mod helper_fees;
pub mod holiday_calendar;
pub mod return_journey;
pub mod revenue_split;
pub mod rounding;
pub mod schedule_surcharge;
pub mod time_charge;
pub mod travel_time;
pub mod urgency_surcharge;

pub use breakdown::{
    build_price_breakdown, calculate_quote_estimate, MAX_DISTANCE_MILES, MAX_HOURS,
};
pub use distance_charge::{calculate_distance_charge, SHORT_HAUL_THRESHOLD_MILES};
pub use fuel_cost::calculate_fuel_cost;
pub use helper_fees::{
    calculate_floor_access_fee, calculate_helper_fee, HELPER_MINIMUM_BILLABLE_HOURS,
};
pub use holiday_calendar::{HolidayCalendar, UkBankHolidayCalendar};
pub use return_journey::calculate_return_journey_cost;
pub use revenue_split::{deposit_in_pence, extract_vat, split_revenue, RevenueSplit};
pub use rounding::{format_price, round_up_to_penny, round_up_to_pound};
pub use schedule_surcharge::{schedule_multiplier, EVENING_START_HOUR};
pub use time_charge::{calculate_time_charge, hourly_rate, van_size_multiplier};
pub use travel_time::{
    estimate_travel_minutes, format_travel_time, AVERAGE_SPEED_MPH, LOADING_MINUTES,
    TRAFFIC_BUFFER,
};
pub use urgency_surcharge::urgency_multiplier;
