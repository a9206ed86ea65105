//! Core types for Vimshottari dasha (planetary period) calculations.

use crate::graha::Graha;

/// Year length in days used for all dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.2422;

/// The mahadasha timeline is generated out to this many years past birth.
pub const DASHA_HORIZON_YEARS: f64 = 100.0;

/// The 3 hierarchical dasha levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

impl DashaLevel {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive. May be truncated to the horizon at level 0.
    pub end_jd: f64,
    /// Nominal (uncapped) duration in days. Differs from `end_jd - start_jd`
    /// only for horizon-truncated mahadashas; subdivision always works from
    /// this value.
    pub nominal_days: f64,
    /// Hierarchical level.
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
}

impl DashaPeriod {
    /// Duration of the period in days as materialized.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    /// Does this period intersect the window [lo_jd, hi_jd]?
    pub fn overlaps(&self, lo_jd: f64, hi_jd: f64) -> bool {
        !(self.end_jd < lo_jd || self.start_jd > hi_jd)
    }
}
