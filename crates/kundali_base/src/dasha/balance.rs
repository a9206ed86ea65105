//! Birth balance: the unelapsed share of the first mahadasha.
//!
//! The Moon's position within its nakshatra determines how much of the
//! starting lord's period remains at birth.

use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_at, nakshatra_lord};

use super::types::DAYS_PER_YEAR;
use super::vimshottari::vimshottari_years;

/// Compute the Vimshottari birth balance from the Moon's sidereal longitude.
///
/// Returns `(lord, balance_days, elapsed_fraction)`:
/// - `lord`: ruling graha of the Moon's nakshatra (the first mahadasha lord)
/// - `balance_days`: remaining days of that lord's period at birth
/// - `elapsed_fraction`: fraction of the nakshatra already traversed [0, 1)
///
/// A Moon exactly on a nakshatra boundary yields fraction 0 and a
/// full-length first period.
pub fn vimshottari_birth_balance(moon_sidereal_lon: f64) -> (crate::graha::Graha, f64, f64) {
    let (_nak, nak_idx, pos_in_arc) = nakshatra_at(moon_sidereal_lon);
    let lord = nakshatra_lord(nak_idx);
    let elapsed_fraction = pos_in_arc / NAKSHATRA_SPAN;
    let balance_days = vimshottari_years(lord) * (1.0 - elapsed_fraction) * DAYS_PER_YEAR;
    (lord, balance_days, elapsed_fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    #[test]
    fn balance_at_start_of_ashwini() {
        let (lord, balance, frac) = vimshottari_birth_balance(0.0);
        assert_eq!(lord, Graha::Ketu);
        assert!(frac.abs() < 1e-12);
        assert!((balance - 7.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn balance_at_midpoint() {
        let mid = NAKSHATRA_SPAN / 2.0;
        let (lord, balance, frac) = vimshottari_birth_balance(mid);
        assert_eq!(lord, Graha::Ketu);
        assert!((frac - 0.5).abs() < 1e-12);
        assert!((balance - 3.5 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn balance_rohini_start() {
        // Rohini begins at 3 * 360/27 = 40 deg → Chandra, full 10y balance.
        let (lord, balance, frac) = vimshottari_birth_balance(40.0);
        assert_eq!(lord, Graha::Chandra);
        assert!(frac.abs() < 1e-12);
        assert!((balance - 10.0 * DAYS_PER_YEAR).abs() < 1e-9);
    }

    #[test]
    fn balance_near_arc_end_is_small() {
        let near_end = NAKSHATRA_SPAN - 0.001;
        let (_, balance, frac) = vimshottari_birth_balance(near_end);
        assert!(frac > 0.999);
        assert!(balance > 0.0 && balance < 1.0);
    }

    #[test]
    fn balance_always_positive() {
        for i in 0..3600 {
            let (_, balance, frac) = vimshottari_birth_balance(i as f64 * 0.1);
            assert!(balance > 0.0);
            assert!((0.0..1.0).contains(&frac));
        }
    }

    #[test]
    fn balance_wraps_negative_longitude() {
        // -1 deg → 359 deg → Revati (index 26) → Buddh.
        let (lord, _, _) = vimshottari_birth_balance(-1.0);
        assert_eq!(lord, Graha::Buddh);
    }
}
