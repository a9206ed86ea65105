//! Vimshottari dasha (planetary period) calculations.
//!
//! Three hierarchical levels (Mahadasha, Antardasha, Pratyantardasha) are
//! generated from the Moon's sidereal longitude and the birth instant. One
//! proportional subdivision routine serves both lower levels; the nested
//! tree is never stored, only regenerated on demand.

pub mod balance;
pub mod subperiod;
pub mod types;
pub mod upcoming;
pub mod vimshottari;

pub use balance::vimshottari_birth_balance;
pub use subperiod::{proportional_subperiods, subperiods};
pub use types::{DASHA_HORIZON_YEARS, DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use upcoming::{UpcomingPeriod, upcoming_pratyantars};
pub use vimshottari::{
    TOTAL_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS, mahadasha_periods, sequence_index,
    vimshottari_years,
};
