//! Schedule surcharge calculation.
//!
//! Produces a single multiplier starting at 1.0 with additive percentage
//! components for weekend, holiday, evening, and weekday peak-commute moves.
//! Everything here degrades gracefully: a missing move date yields 1.0 and a
//! malformed time string simply skips the evening check.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::config::RateTable;

use super::holiday_calendar::HolidayCalendar;

/// Moves at or after this hour attract the evening surcharge.
pub const EVENING_START_HOUR: u32 = 18;

/// Calculates the schedule surcharge multiplier for a move.
///
/// Starts at 1.0 and adds, in percentage terms:
/// - the weekend surcharge when the date is a Saturday or Sunday
/// - the holiday surcharge when the calendar reports a public holiday
/// - the evening surcharge when the move time is 18:00 or later; the time
///   comes from `move_time` when present (best-effort parse, malformed
///   strings are ignored), otherwise from the hour of `move_date`
/// - the peak-commute surcharge on weekdays between 07:00-09:00 or
///   16:00-19:00, always from the hour of `move_date`
///
/// A `None` move date means no schedule information, so the multiplier is
/// exactly 1.0. The components are additive here and applied once by the
/// aggregator; they never compound with the urgency premium.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::{schedule_multiplier, UkBankHolidayCalendar};
/// use quote_engine::config::RateTable;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::default();
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2026-01-17 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let multiplier = schedule_multiplier(Some(saturday), None, &rates, &UkBankHolidayCalendar);
/// assert_eq!(multiplier, Decimal::ONE + rates.weekend_surcharge);
/// ```
pub fn schedule_multiplier(
    move_date: Option<NaiveDateTime>,
    move_time: Option<&str>,
    rates: &RateTable,
    calendar: &dyn HolidayCalendar,
) -> Decimal {
    let Some(datetime) = move_date else {
        return Decimal::ONE;
    };

    let mut multiplier = Decimal::ONE;
    let weekday = datetime.weekday();

    if weekday == Weekday::Sat || weekday == Weekday::Sun {
        multiplier += rates.weekend_surcharge;
    }

    if calendar.is_holiday(datetime.date()) {
        multiplier += rates.holiday_surcharge;
    }

    // Evening check: an explicit time string takes precedence over the hour
    // component of the date. A string that fails to parse skips the check
    // entirely rather than falling back.
    match move_time {
        Some(time) => {
            if let Some(hour) = parse_time_hour(time) {
                if hour >= EVENING_START_HOUR {
                    multiplier += rates.evening_surcharge;
                }
            }
        }
        None => {
            if datetime.hour() >= EVENING_START_HOUR {
                multiplier += rates.evening_surcharge;
            }
        }
    }

    // Peak commute windows use the date's hour regardless of any time string
    let is_weekday = !matches!(weekday, Weekday::Sat | Weekday::Sun);
    if is_weekday {
        let hour = datetime.hour();
        if (7..9).contains(&hour) || (16..19).contains(&hour) {
            multiplier += rates.peak_time_surcharge;
        }
    }

    multiplier
}

/// Parses an "H:MMam/pm"-style time string into a 24-hour clock hour.
///
/// Accepts forms like `"18:30"`, `"6:30pm"`, and `"6:30 PM"`. The minutes
/// must be two digits under 60 and the colon is required; anything else
/// returns `None` so the caller can skip the evening surcharge.
fn parse_time_hour(time: &str) -> Option<u32> {
    let lower = time.trim().to_ascii_lowercase();

    let (clock, meridiem) = if let Some(rest) = lower.strip_suffix("pm") {
        (rest.trim_end(), Some(true))
    } else if let Some(rest) = lower.strip_suffix("am") {
        (rest.trim_end(), Some(false))
    } else {
        (lower.as_str(), None)
    };

    let (hour_part, minute_part) = clock.split_once(':')?;
    let hour: u32 = hour_part.trim().parse().ok()?;

    if minute_part.len() != 2 || !minute_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minutes: u32 = minute_part.parse().ok()?;
    if minutes >= 60 {
        return None;
    }

    let hour = match meridiem {
        Some(true) if hour < 12 => hour + 12,
        Some(false) if hour == 12 => 0,
        _ => hour,
    };

    Some(hour)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::holiday_calendar::UkBankHolidayCalendar;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn datetime(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn multiplier_for(date: Option<NaiveDateTime>, time: Option<&str>) -> Decimal {
        schedule_multiplier(date, time, &RateTable::default(), &UkBankHolidayCalendar)
    }

    #[test]
    fn test_no_date_means_no_surcharge() {
        assert_eq!(multiplier_for(None, None), Decimal::ONE);
        assert_eq!(multiplier_for(None, Some("6:30pm")), Decimal::ONE);
    }

    #[test]
    fn test_quiet_weekday_midday_has_no_surcharge() {
        // 2026-01-13 is a Tuesday
        let dt = datetime("2026-01-13", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), None), Decimal::ONE);
    }

    #[test]
    fn test_saturday_adds_weekend_surcharge() {
        // 2026-01-17 is a Saturday
        let dt = datetime("2026-01-17", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.12"));
    }

    #[test]
    fn test_sunday_adds_weekend_surcharge() {
        // 2026-01-18 is a Sunday
        let dt = datetime("2026-01-18", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.12"));
    }

    #[test]
    fn test_holiday_adds_holiday_surcharge() {
        // 2026-12-25 is a Friday; midday, so the only surcharge is holiday
        let dt = datetime("2026-12-25", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.20"));
    }

    #[test]
    fn test_weekend_holiday_stack_additively() {
        // 2026-12-26 (Boxing Day) is a Saturday: weekend 12% + holiday 20%
        let dt = datetime("2026-12-26", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.32"));
    }

    #[test]
    fn test_evening_from_date_hour() {
        // Tuesday 19:30: hour 19 is past the 16-19 commute window, evening only
        let dt = datetime("2026-01-13", "19:30:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.10"));
    }

    #[test]
    fn test_evening_from_time_string() {
        let dt = datetime("2026-01-13", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), Some("6:30pm")), dec("1.10"));
        assert_eq!(multiplier_for(Some(dt), Some("18:00")), dec("1.10"));
    }

    #[test]
    fn test_morning_time_string_no_evening_surcharge() {
        let dt = datetime("2026-01-13", "12:00:00");
        assert_eq!(multiplier_for(Some(dt), Some("9:30am")), Decimal::ONE);
    }

    #[test]
    fn test_malformed_time_string_is_skipped() {
        let dt = datetime("2026-01-13", "12:00:00");
        // With a present-but-unparseable string the evening check is skipped,
        // not delegated back to the date hour
        assert_eq!(multiplier_for(Some(dt), Some("evening")), Decimal::ONE);
        assert_eq!(multiplier_for(Some(dt), Some("6pm")), Decimal::ONE);
        assert_eq!(multiplier_for(Some(dt), Some("18:7")), Decimal::ONE);
    }

    #[test]
    fn test_malformed_time_string_does_not_mask_date_evening() {
        // The date says 19:00 but the unparseable string wins and skips it
        let dt = datetime("2026-01-14", "19:30:00");
        assert_eq!(multiplier_for(Some(dt), Some("later")), Decimal::ONE);
    }

    #[test]
    fn test_morning_commute_window() {
        // Wednesday 08:00 is inside 07:00-09:00
        let dt = datetime("2026-01-14", "08:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.15"));
        // 09:00 is outside
        let dt = datetime("2026-01-14", "09:00:00");
        assert_eq!(multiplier_for(Some(dt), None), Decimal::ONE);
    }

    #[test]
    fn test_afternoon_commute_window() {
        // Friday 17:00 is inside 16:00-19:00
        let dt = datetime("2026-01-16", "17:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.15"));
    }

    #[test]
    fn test_evening_and_commute_stack() {
        // Thursday 18:30: evening (>= 18) and inside the 16-19 window
        let dt = datetime("2026-01-15", "18:30:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.25"));
    }

    #[test]
    fn test_weekend_has_no_commute_surcharge() {
        // Saturday 08:00: weekend yes, commute window no
        let dt = datetime("2026-01-17", "08:00:00");
        assert_eq!(multiplier_for(Some(dt), None), dec("1.12"));
    }

    #[test]
    fn test_parse_time_hour_formats() {
        assert_eq!(parse_time_hour("18:30"), Some(18));
        assert_eq!(parse_time_hour("6:30pm"), Some(18));
        assert_eq!(parse_time_hour("6:30 PM"), Some(18));
        assert_eq!(parse_time_hour("12:00am"), Some(0));
        assert_eq!(parse_time_hour("12:15pm"), Some(12));
        assert_eq!(parse_time_hour("7:05am"), Some(7));
    }

    #[test]
    fn test_parse_time_hour_rejects_malformed() {
        assert_eq!(parse_time_hour("6pm"), None);
        assert_eq!(parse_time_hour("18:7"), None);
        assert_eq!(parse_time_hour("18:60"), None);
        assert_eq!(parse_time_hour("noon"), None);
        assert_eq!(parse_time_hour(""), None);
    }
}
