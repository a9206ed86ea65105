//! Navamsa (D9, ninth-harmonic) sign mapping.
//!
//! Each rashi is divided into 9 padas of 3 deg 20' each. The pada index
//! counts forward from a starting rashi chosen by the sign's modality:
//! movable signs count from themselves, fixed signs from the 9th sign,
//! dual signs from the 5th.

use crate::rashi::Rashi;
use crate::util::normalize_360;

/// Classification of rashis by quality (cardinal/fixed/mutable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignType {
    /// Chara (movable): Mesha, Karka, Tula, Makara.
    Chara,
    /// Sthira (fixed): Vrishabha, Simha, Vrischika, Kumbha.
    Sthira,
    /// Dvisvabhava (dual): Mithuna, Kanya, Dhanu, Meena.
    Dvisvabhava,
}

/// Get the sign type of a rashi by 0-based index.
pub fn sign_type(rashi_index: u8) -> SignType {
    match rashi_index % 3 {
        0 => SignType::Chara,
        1 => SignType::Sthira,
        _ => SignType::Dvisvabhava,
    }
}

/// Navamsa rashi of a sidereal longitude.
///
/// `pada = floor(deg_in_sign / (30/9))`, then the navamsa count starts at
/// the sign itself for movable signs, 8 signs ahead for fixed signs, and
/// 4 signs ahead for dual signs (1-indexed wrap in the traditional
/// statement; offsets applied on 0-based indices here).
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let sign_idx = ((lon / 30.0).floor() as u8).min(11);
    let deg_in_sign = lon - (sign_idx as f64) * 30.0;
    let pada = ((deg_in_sign / (30.0 / 9.0)).floor() as u8).min(8);

    let start_idx = match sign_type(sign_idx) {
        SignType::Chara => sign_idx,
        SignType::Sthira => (sign_idx + 8) % 12,
        SignType::Dvisvabhava => (sign_idx + 4) % 12,
    };
    Rashi::from_index((start_idx + pada) % 12)
}
