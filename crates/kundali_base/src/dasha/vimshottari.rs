//! Vimshottari constant data and mahadasha (level-0) generation.
//!
//! The Vimshottari system assigns the 9 grahas a fixed cyclic order and a
//! fixed period weight in years, summing to a 120-year cycle. The same
//! order and weights drive nakshatra lordship, KP sub-lords, and every
//! nesting level of the dasha timeline.

use crate::graha::Graha;

use super::balance::vimshottari_birth_balance;
use super::types::{DASHA_HORIZON_YEARS, DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu,
/// Guru, Shani, Buddh. Fixed; never reordered at runtime.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari period weights in years, parallel to [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Total Vimshottari cycle length in years (sum of the weights).
pub const TOTAL_CYCLE_YEARS: f64 = 120.0;

/// Period weight in years for a graha.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    match graha {
        Graha::Ketu => 7.0,
        Graha::Shukra => 20.0,
        Graha::Surya => 6.0,
        Graha::Chandra => 10.0,
        Graha::Mangal => 7.0,
        Graha::Rahu => 18.0,
        Graha::Guru => 16.0,
        Graha::Shani => 19.0,
        Graha::Buddh => 17.0,
    }
}

/// Position of a graha in the Vimshottari sequence (0-8).
pub const fn sequence_index(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Generate the mahadasha sequence from birth to the 100-year horizon.
///
/// The first period belongs to the lord of the Moon's nakshatra and runs
/// for the birth balance (the unelapsed share of that lord's full period).
/// Subsequent periods follow the cyclic sequence at full length; the final
/// period is truncated so no segment end exceeds the horizon. Each period
/// keeps its nominal (uncapped) duration for subdivision.
pub fn mahadasha_periods(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let (lord, balance_days, _frac) = vimshottari_birth_balance(moon_sidereal_lon);
    let horizon_jd = birth_jd + DASHA_HORIZON_YEARS * DAYS_PER_YEAR;

    let mut periods = Vec::new();
    let first_end = (birth_jd + balance_days).min(horizon_jd);
    periods.push(DashaPeriod {
        lord,
        start_jd: birth_jd,
        end_jd: first_end,
        nominal_days: balance_days,
        level: DashaLevel::Mahadasha,
        order: 1,
    });

    let mut idx = (sequence_index(lord) + 1) % 9;
    let mut cursor = first_end;
    let mut order = 2u16;
    while cursor < horizon_jd {
        let l = VIMSHOTTARI_SEQUENCE[idx];
        let dur = vimshottari_years(l) * DAYS_PER_YEAR;
        let end = (cursor + dur).min(horizon_jd);
        periods.push(DashaPeriod {
            lord: l,
            start_jd: cursor,
            end_jd: end,
            nominal_days: dur,
            level: DashaLevel::Mahadasha,
            order,
        });
        cursor = end;
        idx = (idx + 1) % 9;
        order += 1;
    }

    periods
}
