//! Birth-chart assembly.
//!
//! Queries the ephemeris collaborator once per body, converts tropical to
//! sidereal, and runs the pure chart math: sign positions, KP lords,
//! navamsa, lagna with house rotation, and the Vimshottari timeline.

use kundali_base::dasha::{
    DAYS_PER_YEAR, DashaPeriod, UpcomingPeriod, mahadasha_periods, upcoming_pratyantars,
};
use kundali_base::{
    ALL_GRAHAS, Graha, KpLords, Nakshatra, Rashi, SiderealLagna, SignPosition, house_signs,
    ketu_longitude, kp_lords, nakshatra_at, navamsa_rashi, normalize_360, sidereal_lagna,
    sign_position,
};

use crate::error::ChartError;
use crate::providers::{EphemerisSource, GeocodedPlace, Geocoder, ResolvedTimezone, TimezoneResolver};
use crate::time::UtcTime;

/// One body's place in the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyPosition {
    pub graha: Graha,
    /// Sidereal ecliptic longitude, degrees [0, 360).
    pub sidereal_longitude: f64,
    /// Sign and formatted degree within it.
    pub position: SignPosition,
    pub nakshatra: Nakshatra,
    /// Nakshatra lord and KP sub-lord.
    pub lords: KpLords,
    /// Ninth-harmonic sign.
    pub navamsa: Rashi,
}

/// A computed sidereal birth chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthChart {
    pub birth_utc: UtcTime,
    pub birth_jd: f64,
    /// Ayanamsha applied to every tropical value, degrees.
    pub ayanamsha: f64,
    /// All nine grahas in [`ALL_GRAHAS`] order.
    pub positions: Vec<BodyPosition>,
    pub lagna: SiderealLagna,
    /// Navamsa sign of the ascendant.
    pub navamsa_lagna: Rashi,
    /// Sign carried by each house, house 1 first.
    pub houses: [Rashi; 12],
    /// Mahadasha timeline from birth to the 100-year horizon.
    pub mahadashas: Vec<DashaPeriod>,
}

impl BirthChart {
    /// Position record for one graha.
    pub fn position(&self, graha: Graha) -> &BodyPosition {
        &self.positions[graha.index() as usize]
    }

    /// Whole years elapsed from birth to `now_jd`.
    pub fn elapsed_years(&self, now_jd: f64) -> u32 {
        let days = now_jd - self.birth_jd;
        if days <= 0.0 {
            return 0;
        }
        (days / DAYS_PER_YEAR).floor() as u32
    }
}

fn body_position(graha: Graha, sidereal_longitude: f64) -> BodyPosition {
    let (nakshatra, _, _) = nakshatra_at(sidereal_longitude);
    BodyPosition {
        graha,
        sidereal_longitude,
        position: sign_position(sidereal_longitude),
        nakshatra,
        lords: kp_lords(sidereal_longitude),
        navamsa: navamsa_rashi(sidereal_longitude),
    }
}

/// Compute a birth chart from a UTC instant and geographic coordinates.
///
/// Rahu is queried from the ephemeris; Ketu is always derived as the
/// opposite node. Tropical values become sidereal by subtracting the
/// day's ayanamsha.
pub fn birth_chart<E: EphemerisSource>(
    eph: &E,
    birth_utc: UtcTime,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<BirthChart, ChartError> {
    let birth_jd = birth_utc.to_jd_utc();
    let ayanamsha = eph.ayanamsha(birth_jd)?;

    let mut positions = Vec::with_capacity(ALL_GRAHAS.len());
    let mut rahu_sidereal = 0.0;
    for &graha in &ALL_GRAHAS {
        let sidereal = if graha == Graha::Ketu {
            ketu_longitude(rahu_sidereal)
        } else {
            let tropical = eph.tropical_longitude(birth_jd, graha)?;
            normalize_360(tropical - ayanamsha)
        };
        if graha == Graha::Rahu {
            rahu_sidereal = sidereal;
        }
        positions.push(body_position(graha, sidereal));
    }

    let tropical_asc = eph.tropical_ascendant(birth_jd, latitude_deg, longitude_deg)?;
    let lagna = sidereal_lagna(tropical_asc, ayanamsha);
    let navamsa_lagna = navamsa_rashi(lagna.longitude);
    let houses = house_signs(lagna.rashi);

    let moon_lon = positions[Graha::Chandra.index() as usize].sidereal_longitude;
    let mahadashas = mahadasha_periods(birth_jd, moon_lon);

    Ok(BirthChart {
        birth_utc,
        birth_jd,
        ayanamsha,
        positions,
        lagna,
        navamsa_lagna,
        houses,
        mahadashas,
    })
}

/// Compute a birth chart from a place name and local wall-clock time.
///
/// Geocoding and timezone resolution run first; their outputs are returned
/// alongside the chart so callers can echo the resolved place and zone.
pub fn birth_chart_for_place<E, G, T>(
    eph: &E,
    geocoder: &G,
    tz: &T,
    place: &str,
    local_birth: UtcTime,
) -> Result<(BirthChart, GeocodedPlace, ResolvedTimezone), ChartError>
where
    E: EphemerisSource,
    G: Geocoder,
    T: TimezoneResolver,
{
    let geo = geocoder.geocode(place)?;
    let zone = tz.resolve(geo.latitude_deg, geo.longitude_deg, local_birth)?;
    let chart = birth_chart(eph, zone.utc, geo.latitude_deg, geo.longitude_deg)?;
    Ok((chart, geo, zone))
}

/// Pratyantardasha intervals intersecting `[now, now + window_days]`,
/// sorted by end instant.
pub fn upcoming_periods(
    chart: &BirthChart,
    now_utc: UtcTime,
    window_days: f64,
) -> Vec<UpcomingPeriod> {
    upcoming_pratyantars(now_utc.to_jd_utc(), &chart.mahadashas, window_days)
}
