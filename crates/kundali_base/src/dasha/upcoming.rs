//! Upcoming-period selection: pratyantardashas inside a forward window.
//!
//! Nested periods are cheap to regenerate (bounded at 9x9 per mahadasha),
//! so the walk materializes children on demand and keeps nothing between
//! calls.

use crate::graha::Graha;

use super::subperiod::subperiods;
use super::types::DashaPeriod;

/// One pratyantardasha interval intersecting the query window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpcomingPeriod {
    /// Ruling lord of the enclosing mahadasha.
    pub maha_lord: Graha,
    /// Ruling lord of the enclosing antardasha.
    pub antar_lord: Graha,
    /// Ruling lord of the pratyantardasha itself.
    pub pratyantar_lord: Graha,
    /// End of the pratyantardasha, JD UTC.
    pub end_jd: f64,
}

/// Collect every pratyantardasha overlapping `[now_jd, now_jd + window_days]`,
/// sorted ascending by end instant.
///
/// Each nesting level is filtered by window overlap before its children are
/// materialized, so the walk touches at most a handful of mahadashas.
pub fn upcoming_pratyantars(
    now_jd: f64,
    mahadashas: &[DashaPeriod],
    window_days: f64,
) -> Vec<UpcomingPeriod> {
    let horizon_jd = now_jd + window_days;
    let mut rows = Vec::new();

    for maha in mahadashas {
        if !maha.overlaps(now_jd, horizon_jd) {
            continue;
        }
        for antar in subperiods(maha) {
            if !antar.overlaps(now_jd, horizon_jd) {
                continue;
            }
            for praty in subperiods(&antar) {
                if !praty.overlaps(now_jd, horizon_jd) {
                    continue;
                }
                rows.push(UpcomingPeriod {
                    maha_lord: maha.lord,
                    antar_lord: antar.lord,
                    pratyantar_lord: praty.lord,
                    end_jd: praty.end_jd,
                });
            }
        }
    }

    rows.sort_by(|a, b| a.end_jd.total_cmp(&b.end_jd));
    rows
}
