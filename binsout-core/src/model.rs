//! Domain data structures for councils, service areas, addresses, and
//! bin-collection schedules.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Identifier for a council known to binsout.
pub struct CouncilId(pub String);

impl fmt::Display for CouncilId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Contact details published by a council.
pub struct ContactInfo {
    /// Phone number in local display format.
    pub phone: String,
    /// Public enquiries email address.
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Metadata describing a council and its human-friendly name.
pub struct CouncilMeta {
    /// Unique identifier.
    pub id: CouncilId,
    /// Official display name, e.g. "Manningham City Council".
    pub name: String,
    /// How residents can reach the council.
    pub contact: ContactInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Geographic point in floating-point degrees.
pub struct Coordinate {
    /// Latitude, negative in the southern hemisphere.
    pub lat: f64,
    /// Longitude, positive east of Greenwich.
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Axis-aligned latitude/longitude extents approximating a council boundary.
///
/// Real council borders are irregular polygons; a box is only good enough for
/// the bundled sample data and would be replaced by true polygon containment
/// against published boundary data in a production deployment.
pub struct BoundingBox {
    /// Northern latitude limit (inclusive).
    pub north: f64,
    /// Southern latitude limit (inclusive).
    pub south: f64,
    /// Eastern longitude limit (inclusive).
    pub east: f64,
    /// Western longitude limit (inclusive).
    pub west: f64,
}

impl BoundingBox {
    /// Whether the point lies within the box. All four edges are inclusive,
    /// so a coordinate exactly on a boundary counts as inside.
    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.lat >= self.south
            && point.lat <= self.north
            && point.lng >= self.west
            && point.lng <= self.east
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A council's jurisdiction as served by one provider plugin.
pub struct ServiceArea {
    /// Council metadata.
    pub meta: CouncilMeta,
    /// Approximate boundary used for geofence resolution.
    pub bounds: BoundingBox,
    /// `#rrggbb` hex color used when drawing the area map.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A known street address with its geocoded position.
pub struct Address {
    /// Full display string, e.g. "123 Main Street, Doncaster VIC 3108".
    pub label: String,
    /// Lowercase suburb keyword used for loose matching, e.g. "doncaster".
    pub suburb: String,
    /// Geocoded position of the address.
    pub coordinate: Coordinate,
}

impl Address {
    /// Whether a free-text query matches this address.
    ///
    /// The policy mirrors the lookup portal: case-insensitive substring
    /// containment of the query within the display label, or the query
    /// containing the suburb keyword ("doncaster" anywhere in the query
    /// matches the Doncaster sample address).
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        self.label.to_lowercase().contains(&needle) || needle.contains(&self.suburb)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Waste streams collected at the kerb.
pub enum BinType {
    /// General household waste (red lid).
    General,
    /// Mixed recycling (yellow lid).
    Recycling,
    /// Garden organics (green lid).
    Green,
}

impl BinType {
    /// Every bin type, in display order.
    pub const ALL: [Self; 3] = [Self::General, Self::Recycling, Self::Green];

    /// Human-friendly name shown in schedule listings.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::General => "General Waste",
            Self::Recycling => "Recycling",
            Self::Green => "Green Waste",
        }
    }

    /// Icon glyph shown next to the bin name.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::General => "🗑️",
            Self::Recycling => "♻️",
            Self::Green => "🌿",
        }
    }

    /// Lid color tag used by the presentation layer.
    #[must_use]
    pub fn color_tag(self) -> &'static str {
        match self {
            Self::General => "red",
            Self::Recycling => "yellow",
            Self::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Which alternating week a fortnightly pickup falls on.
pub enum WeekParity {
    /// Week A of the fortnight.
    A,
    /// Week B of the fortnight.
    B,
}

impl fmt::Display for WeekParity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::A => "A",
            Self::B => "B",
        };
        write!(formatter, "{tag}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Recurrence pattern for a collection rule.
pub enum Cadence {
    /// Collected every week.
    Weekly,
    /// Collected every second week, on the tagged week of the fortnight.
    Fortnightly(WeekParity),
}

impl fmt::Display for Cadence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(formatter, "Weekly"),
            Self::Fortnightly(parity) => write!(formatter, "Fortnightly (Week {parity})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Day-of-week and cadence for one bin type in one service area.
pub struct CollectionRule {
    /// Weekday the bin is collected.
    pub day: Weekday,
    /// How often the collection recurs.
    pub cadence: Cadence,
}

impl CollectionRule {
    /// Full English weekday name ("Tuesday" rather than chrono's "Tue").
    #[must_use]
    pub fn day_name(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A council's full kerbside schedule.
///
/// One field per bin type, so a well-formed schedule structurally carries
/// exactly one rule for each waste stream.
pub struct Schedule {
    /// Rule for general household waste.
    pub general: CollectionRule,
    /// Rule for mixed recycling.
    pub recycling: CollectionRule,
    /// Rule for garden organics.
    pub green: CollectionRule,
}

impl Schedule {
    /// Look up the rule for a bin type.
    #[must_use]
    pub fn rule(&self, bin: BinType) -> &CollectionRule {
        match bin {
            BinType::General => &self.general,
            BinType::Recycling => &self.recycling,
            BinType::Green => &self.green,
        }
    }
}
