//! Public-holiday calendar capability.
//!
//! The schedule surcharge needs to know whether a move date is a public
//! holiday. The capability is a trait so deployments can plug in an
//! authoritative calendar (e.g. the GOV.UK bank-holidays feed); the default
//! implementation is the intentionally-approximate heuristic the service has
//! always used.

use chrono::{Datelike, NaiveDate, Weekday};

/// Answers "is this date a public holiday".
///
/// Implementations must be pure: the same date always produces the same
/// answer within a process lifetime.
pub trait HolidayCalendar {
    /// Returns true if the given date is a public holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

/// Approximate English bank-holiday rules.
///
/// Covers:
/// - New Year's Day, with the Monday-observed shift (Jan 2 or 3 when they
///   fall on a Monday)
/// - Early May Bank Holiday (first Monday in May)
/// - Spring Bank Holiday (last Monday in May)
/// - Summer Bank Holiday (last Monday in August)
/// - Christmas Day, observed on the 27th when that is a Monday or Tuesday
/// - Boxing Day, observed on the 28th when that is a Monday
///
/// Easter-based holidays (Good Friday, Easter Monday) are NOT computed. That
/// is a known gap in the heuristic, not a defect; swap in a real calendar via
/// the [`HolidayCalendar`] trait if those days matter.
///
/// # Example
///
/// ```
/// use quote_engine::calculation::{HolidayCalendar, UkBankHolidayCalendar};
/// use chrono::NaiveDate;
///
/// let calendar = UkBankHolidayCalendar;
/// let christmas = NaiveDate::from_ymd_opt(2026, 12, 25).unwrap();
/// assert!(calendar.is_holiday(christmas));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UkBankHolidayCalendar;

impl HolidayCalendar for UkBankHolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        let month = date.month();
        let day = date.day();
        let weekday = date.weekday();
        let is_monday = weekday == Weekday::Mon;

        // New Year's Day, or its Monday-observed substitute
        if month == 1 && (day == 1 || ((day == 2 || day == 3) && is_monday)) {
            return true;
        }

        // Early May Bank Holiday: first Monday in May
        if month == 5 && is_monday && day <= 7 {
            return true;
        }

        // Spring Bank Holiday: last Monday in May
        if month == 5 && is_monday && day > 24 {
            return true;
        }

        // Summer Bank Holiday: last Monday in August
        if month == 8 && is_monday && day > 24 {
            return true;
        }

        // Christmas Day, observed on the 27th when that lands Monday/Tuesday
        if month == 12
            && (day == 25 || (day == 27 && (is_monday || weekday == Weekday::Tue)))
        {
            return true;
        }

        // Boxing Day, observed on the 28th when that lands on a Monday
        if month == 12 && (day == 26 || (day == 28 && is_monday)) {
            return true;
        }

        false
    }
}
