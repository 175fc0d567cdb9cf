//! Quote request model and the enumerations it is built from.
//!
//! A [`QuoteRequest`] is constructed by the request-handling layer from
//! already-validated user input. The engine consumes it read-only and never
//! mutates it. Unrecognized van sizes, floor-access tiers, and urgency levels
//! fall back to documented defaults instead of failing, mirroring how the
//! booking form treats free-text input.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The size class of the van booked for a move.
///
/// Unknown keys fall back to [`VanSize::Medium`] in every table lookup.
///
/// # Example
///
/// ```
/// use quote_engine::models::VanSize;
///
/// assert_eq!(VanSize::from_key("luton"), VanSize::Luton);
/// assert_eq!(VanSize::from_key("suv"), VanSize::Medium);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VanSize {
    /// Small wheelbase van.
    Small,
    /// Medium wheelbase van. The fallback tier for unrecognized keys.
    Medium,
    /// Long wheelbase van.
    Large,
    /// Luton box van.
    Luton,
}

impl VanSize {
    /// Parses a van size key, falling back to `Medium` for unrecognized values.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "small" => VanSize::Small,
            "medium" => VanSize::Medium,
            "large" => VanSize::Large,
            "luton" => VanSize::Luton,
            _ => VanSize::Medium,
        }
    }

    /// Returns the lowercase key for this van size, as used in labels.
    pub fn key(&self) -> &'static str {
        match self {
            VanSize::Small => "small",
            VanSize::Medium => "medium",
            VanSize::Large => "large",
            VanSize::Luton => "luton",
        }
    }
}

impl Default for VanSize {
    fn default() -> Self {
        VanSize::Medium
    }
}

impl std::fmt::Display for VanSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The floor the goods must be carried to or from.
///
/// Ground floor is free; higher tiers carry a fixed fee that is halved when a
/// lift is available. Unknown keys fall back to [`FloorAccess::Ground`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FloorAccess {
    /// Ground floor access, no extra charge.
    Ground,
    /// First floor.
    FirstFloor,
    /// Second floor.
    SecondFloor,
    /// Third floor or higher.
    ThirdFloorPlus,
}

impl FloorAccess {
    /// Parses a floor access key, falling back to `Ground` for unrecognized values.
    ///
    /// Case-insensitive with trimming, matching the other key parsers.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "ground" => FloorAccess::Ground,
            "firstfloor" => FloorAccess::FirstFloor,
            "secondfloor" => FloorAccess::SecondFloor,
            "thirdfloorplus" => FloorAccess::ThirdFloorPlus,
            _ => FloorAccess::Ground,
        }
    }

    /// Returns the camelCase key for this tier, as used in labels.
    pub fn key(&self) -> &'static str {
        match self {
            FloorAccess::Ground => "ground",
            FloorAccess::FirstFloor => "firstFloor",
            FloorAccess::SecondFloor => "secondFloor",
            FloorAccess::ThirdFloorPlus => "thirdFloorPlus",
        }
    }
}

impl Default for FloorAccess {
    fn default() -> Self {
        FloorAccess::Ground
    }
}

impl std::fmt::Display for FloorAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// How soon the customer needs the move done.
///
/// Unknown keys fall back to [`UrgencyLevel::Standard`] (no premium).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    /// Standard booking, no premium.
    Standard,
    /// Priority booking (24-48 hours), 15% premium.
    Priority,
    /// Express booking (same day / next day), 30% premium.
    Express,
}

impl UrgencyLevel {
    /// Parses an urgency key, falling back to `Standard` for unrecognized values.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "standard" => UrgencyLevel::Standard,
            "priority" => UrgencyLevel::Priority,
            "express" => UrgencyLevel::Express,
            _ => UrgencyLevel::Standard,
        }
    }

    /// Returns the lowercase key for this urgency level.
    pub fn key(&self) -> &'static str {
        match self {
            UrgencyLevel::Standard => "standard",
            UrgencyLevel::Priority => "priority",
            UrgencyLevel::Express => "express",
        }
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        UrgencyLevel::Standard
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A validated quote request, as supplied by the request-handling layer.
///
/// All schedule fields are optional: a request with no move date simply
/// attracts no schedule surcharge. The numeric fields are assumed to be in
/// sanitized ranges by the caller; the aggregator still rejects negative
/// distance and hours as a fail-fast guard.
///
/// # Example
///
/// ```
/// use quote_engine::models::{QuoteRequest, VanSize};
/// use rust_decimal::Decimal;
///
/// let request = QuoteRequest {
///     distance_miles: Decimal::from(12),
///     van_size: VanSize::Large,
///     ..QuoteRequest::default()
/// };
/// assert_eq!(request.helpers, 0);
/// assert!(request.move_date.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// One-way journey distance in miles. Must be non-negative.
    pub distance_miles: Decimal,
    /// The booked van size.
    #[serde(default)]
    pub van_size: VanSize,
    /// Number of extra helpers booked (0-3).
    #[serde(default)]
    pub helpers: u32,
    /// Booked labour hours. Zero or unset means no time charge.
    #[serde(default)]
    pub hours: Decimal,
    /// The floor the goods must be carried to.
    #[serde(default)]
    pub floor_access: FloorAccess,
    /// Whether a lift is available at the property.
    #[serde(default)]
    pub lift_available: bool,
    /// The scheduled move date and time, if known.
    #[serde(default)]
    pub move_date: Option<NaiveDateTime>,
    /// An optional time-of-day string such as "6:30pm". Parsed best-effort;
    /// malformed values are ignored.
    #[serde(default)]
    pub move_time: Option<String>,
    /// The urgency tier for the booking.
    #[serde(default)]
    pub urgency: UrgencyLevel,
    /// Whether the journey is within an urban area.
    #[serde(default)]
    pub is_urban: bool,
}

impl Default for QuoteRequest {
    fn default() -> Self {
        Self {
            distance_miles: Decimal::ZERO,
            van_size: VanSize::default(),
            helpers: 0,
            hours: Decimal::ZERO,
            floor_access: FloorAccess::default(),
            lift_available: false,
            move_date: None,
            move_time: None,
            urgency: UrgencyLevel::default(),
            is_urban: false,
        }
    }
}
