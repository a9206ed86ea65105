//! Shared proportional sub-period generation.
//!
//! Antardashas and pratyantardashas are produced by the same routine:
//! nine children in the cyclic sequence starting at the parent's lord,
//! each sized as `weight / 120` of the parent's nominal duration, laid
//! back-to-back with no gap and no horizon truncation.

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{TOTAL_CYCLE_YEARS, VIMSHOTTARI_SEQUENCE, sequence_index, vimshottari_years};

/// Generate the 9 proportional children of a period.
///
/// `start_lord` is both the first child's lord and the rotation origin.
/// The last child's end is snapped to `start_jd + total_nominal_days` to
/// absorb floating-point drift in the cursor walk.
pub fn proportional_subperiods(
    start_lord: crate::graha::Graha,
    start_jd: f64,
    total_nominal_days: f64,
    child_level: DashaLevel,
) -> Vec<DashaPeriod> {
    let start = sequence_index(start_lord);
    let mut children = Vec::with_capacity(9);
    let mut cursor = start_jd;

    for i in 0..9 {
        let lord = VIMSHOTTARI_SEQUENCE[(start + i) % 9];
        let dur = total_nominal_days * vimshottari_years(lord) / TOTAL_CYCLE_YEARS;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: cursor + dur,
            nominal_days: dur,
            level: child_level,
            order: (i as u16) + 1,
        });
        cursor += dur;
    }

    if let Some(last) = children.last_mut() {
        last.end_jd = start_jd + total_nominal_days;
    }
    children
}

/// Children of a period at the next level down.
///
/// Subdivision works from the parent's nominal duration, so a
/// horizon-truncated mahadasha still yields its full uncapped children.
/// Returns an empty vector for a pratyantardasha (no deeper level).
pub fn subperiods(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    match parent.level.child_level() {
        Some(child_level) => {
            proportional_subperiods(parent.lord, parent.start_jd, parent.nominal_days, child_level)
        }
        None => Vec::new(),
    }
}
