//! Sidereal lagna (ascendant) derivation and house rotation.
//!
//! The tropical ascendant comes from the house-cusp collaborator; this
//! module only subtracts the ayanamsha and identifies the rising sign.

use crate::rashi::{ALL_RASHIS, Rashi};
use crate::util::normalize_360;

/// Sidereal ascendant with its rising sign.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiderealLagna {
    /// Sidereal ecliptic longitude of the ascendant, degrees [0, 360).
    pub longitude: f64,
    /// The rising rashi.
    pub rashi: Rashi,
}

/// Sidereal lagna from a tropical ascendant and the day's ayanamsha.
pub fn sidereal_lagna(tropical_asc_deg: f64, ayanamsha_deg: f64) -> SiderealLagna {
    let longitude = normalize_360(tropical_asc_deg - ayanamsha_deg);
    let idx = ((longitude / 30.0).floor() as u8).min(11);
    SiderealLagna {
        longitude,
        rashi: ALL_RASHIS[idx as usize],
    }
}

/// House sign rotation for a chart diagram: house 1 carries the lagna sign,
/// houses 2-12 follow in zodiacal order with wrap.
pub fn house_signs(lagna: Rashi) -> [Rashi; 12] {
    let base = lagna.index();
    let mut houses = [Rashi::Mesha; 12];
    for (i, h) in houses.iter_mut().enumerate() {
        *h = Rashi::from_index(base + i as u8);
    }
    houses
}
