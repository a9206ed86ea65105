//! Collaborator traits: ephemeris, geocoder, timezone resolver.
//!
//! The chart layer consumes these as already-resolved values and performs
//! no network or disk I/O itself. Implementations live with the caller;
//! their failures pass through as [`ChartError`] variants unchanged.

use kundali_base::Graha;

use crate::error::ChartError;
use crate::time::UtcTime;

/// Source of tropical longitudes, ayanamsha, and the tropical ascendant.
pub trait EphemerisSource {
    /// Tropical ecliptic longitude of a body in degrees [0, 360).
    ///
    /// Never queried for Ketu; the chart layer derives Ketu from Rahu.
    fn tropical_longitude(&self, jd_utc: f64, graha: Graha) -> Result<f64, ChartError>;

    /// Ayanamsha (precession correction) in degrees for the given day.
    fn ayanamsha(&self, jd_utc: f64) -> Result<f64, ChartError>;

    /// Tropical ascendant longitude in degrees from the fixed house-cusp
    /// system, for the given instant and geographic location.
    fn tropical_ascendant(
        &self,
        jd_utc: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<f64, ChartError>;
}

/// A geocoded place.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Human-readable resolved name, echoed back to the caller.
    pub display_name: String,
}

/// Resolves a free-form place name to coordinates.
pub trait Geocoder {
    fn geocode(&self, place: &str) -> Result<GeocodedPlace, ChartError>;
}

/// A local wall-clock instant resolved to a zone and UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTimezone {
    /// IANA zone name, e.g. "Asia/Kolkata".
    pub zone_name: String,
    /// Offset from UTC in hours at the resolved instant.
    pub utc_offset_hours: f64,
    /// The equivalent UTC instant.
    pub utc: UtcTime,
}

/// Resolves a location plus local wall-clock time to UTC.
pub trait TimezoneResolver {
    fn resolve(
        &self,
        latitude_deg: f64,
        longitude_deg: f64,
        local: UtcTime,
    ) -> Result<ResolvedTimezone, ChartError>;
}
