//! Pure sidereal (Vedic) birth-chart mathematics.
//!
//! This crate provides:
//! - Rashi (sign) identification and rounded DMS formatting
//! - Nakshatra and KP sub-lord resolution
//! - Sidereal lagna and navamsa (D9) mapping
//! - The Vimshottari dasha engine (mahadasha generation, proportional
//!   subdivision, upcoming-period selection)
//!
//! All functions are pure and total: longitudes outside [0, 360) are
//! normalized, never rejected, and no function performs I/O or retains
//! state across calls. Instants are Julian Days (UTC); durations are days.

pub mod dasha;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod navamsa;
pub mod rashi;
pub mod util;

pub use graha::{ALL_GRAHAS, Graha, ketu_longitude};
pub use lagna::{SiderealLagna, house_signs, sidereal_lagna};
pub use nakshatra::{
    ALL_NAKSHATRAS, KpLords, NAKSHATRA_SPAN, Nakshatra, kp_lords, nakshatra_at, nakshatra_lord,
    sub_lord_in_arc,
};
pub use navamsa::{SignType, navamsa_rashi, sign_type};
pub use rashi::{ALL_RASHIS, Rashi, RoundedDms, SignPosition, sign_position};
pub use util::normalize_360;
