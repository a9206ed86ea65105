//! Rashi (zodiac sign) identification and rounded DMS formatting.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each.
//! Given a sidereal longitude, we identify the rashi and express the
//! position within it as rounded degrees-minutes-seconds, the form used
//! in printed chart tables.

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order, for indexing (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12), as shown in chart tables.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 0-based index. Indices >= 12 wrap.
    pub fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }
}

/// Rounded degrees-minutes-seconds within a rashi.
///
/// Seconds are rounded to the nearest whole arc-second; overflow cascades
/// upward so no component ever equals 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedDms {
    /// Whole degrees within the rashi (0..29).
    pub degrees: u8,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds, rounded (0..59).
    pub seconds: u8,
}

impl RoundedDms {
    /// Render as `DD°MM'SS"`.
    pub fn text(&self) -> String {
        format!("{:02}\u{b0}{:02}'{:02}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Rashi position with rounded DMS, as printed in a positions table.
#[derive(Debug, Clone, PartialEq)]
pub struct SignPosition {
    /// The rashi the longitude falls in.
    pub rashi: Rashi,
    /// Rounded position within the rashi.
    pub dms: RoundedDms,
    /// Decimal degrees within the rashi [0.0, 30.0), unrounded.
    pub degrees_in_rashi: f64,
}

impl SignPosition {
    /// The formatted degree string, e.g. `15°30'00"`.
    pub fn degree_text(&self) -> String {
        self.dms.text()
    }
}

/// Determine rashi and rounded DMS from a sidereal longitude.
///
/// The rashi is `floor(lon / 30)` after normalization. Seconds are rounded
/// to the nearest integer; a result of 60 cascades into minutes, and 60
/// minutes cascade into degrees. When the cascade carries degrees to a full
/// 30, the degree component wraps to 0 but the rashi is left unchanged.
/// Callers that need exact sign identity at a whole-degree rollover must
/// recompute the sign from the raw longitude.
pub fn sign_position(sidereal_lon_deg: f64) -> SignPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let rashi_idx = ((lon / 30.0).floor() as u8).min(11);
    let degrees_in_rashi = lon - (rashi_idx as f64) * 30.0;

    let d = degrees_in_rashi.floor();
    let m_float = (degrees_in_rashi - d) * 60.0;
    let m = m_float.floor();
    let s = (m_float - m) * 60.0;

    let mut seconds = s.round() as u32;
    let mut minutes = m as u32;
    let mut degrees = d as u32;
    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        degrees += 1;
    }
    if degrees == 30 {
        // Degree wrap without sign advance, kept for output parity.
        degrees = 0;
    }

    SignPosition {
        rashi: ALL_RASHIS[rashi_idx as usize],
        dms: RoundedDms {
            degrees: degrees as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        },
        degrees_in_rashi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
    }

    #[test]
    fn rashi_indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(r.number() as usize, i + 1);
        }
    }

    #[test]
    fn rashi_from_index_wraps() {
        assert_eq!(Rashi::from_index(0), Rashi::Mesha);
        assert_eq!(Rashi::from_index(11), Rashi::Meena);
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
    }

    #[test]
    fn sign_position_zero() {
        let p = sign_position(0.0);
        assert_eq!(p.rashi, Rashi::Mesha);
        assert_eq!(p.dms, RoundedDms { degrees: 0, minutes: 0, seconds: 0 });
        assert_eq!(p.degree_text(), "00\u{b0}00'00\"");
    }

    #[test]
    fn sign_position_mid_sign() {
        // 45.5 deg → Vrishabha, 15°30'00"
        let p = sign_position(45.5);
        assert_eq!(p.rashi, Rashi::Vrishabha);
        assert_eq!(p.dms, RoundedDms { degrees: 15, minutes: 30, seconds: 0 });
        assert!((p.degrees_in_rashi - 15.5).abs() < 1e-10);
    }

    #[test]
    fn sign_position_known_dms() {
        // 23.853 deg = 23°51'11" after rounding 10.8" → 11"
        let p = sign_position(23.853);
        assert_eq!(p.dms.degrees, 23);
        assert_eq!(p.dms.minutes, 51);
        assert_eq!(p.dms.seconds, 11);
    }

    #[test]
    fn sign_position_negative_wraps() {
        let p = sign_position(-10.0);
        assert_eq!(p.rashi, Rashi::Meena); // 350 deg
        assert!((p.degrees_in_rashi - 20.0).abs() < 1e-10);
    }

    #[test]
    fn sign_position_all_boundaries() {
        for i in 0..12u8 {
            let p = sign_position(i as f64 * 30.0);
            assert_eq!(p.rashi.index(), i);
            assert_eq!(p.dms, RoundedDms { degrees: 0, minutes: 0, seconds: 0 });
        }
    }

    #[test]
    fn seconds_rollover_cascades() {
        // 10 deg 59' 59.7" rounds to 11°00'00"
        let lon = 10.0 + 59.0 / 60.0 + 59.7 / 3600.0;
        let p = sign_position(lon);
        assert_eq!(p.dms, RoundedDms { degrees: 11, minutes: 0, seconds: 0 });
    }

    #[test]
    fn full_degree_rollover_keeps_sign() {
        // 29.999999 deg in Mesha cascades 60" → 60' → 30 deg → wraps the
        // degree to 0 while the rashi stays Mesha. Known boundary quirk.
        let p = sign_position(29.999999);
        assert_eq!(p.rashi, Rashi::Mesha);
        assert_eq!(p.dms, RoundedDms { degrees: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn no_component_reaches_60() {
        // Sweep near-boundary values: components must stay in range.
        for i in 0..3600 {
            let lon = i as f64 * 0.1 + 0.0999;
            let p = sign_position(lon);
            assert!(p.dms.degrees < 30);
            assert!(p.dms.minutes < 60);
            assert!(p.dms.seconds < 60);
        }
    }

    #[test]
    fn degrees_in_rashi_range() {
        for i in 0..720 {
            let p = sign_position(i as f64 * 0.5173);
            assert!(p.degrees_in_rashi >= 0.0 && p.degrees_in_rashi < 30.0);
            assert!(p.rashi.number() >= 1 && p.rashi.number() <= 12);
        }
    }
}
