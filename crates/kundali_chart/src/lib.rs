//! Birth-chart orchestration over the kundali math core.
//!
//! Wires the external collaborators (ephemeris provider, geocoder,
//! timezone resolver) to the pure computations in `kundali_base` and
//! assembles the full chart: per-body positions with KP lords and navamsa,
//! lagna with house rotation, and the Vimshottari dasha timeline.
//!
//! The collaborators are caller-supplied trait objects; this crate never
//! performs network or disk I/O and surfaces collaborator failures
//! unchanged.

pub mod chart;
pub mod error;
pub mod providers;
pub mod time;

pub use chart::{BirthChart, BodyPosition, birth_chart, birth_chart_for_place, upcoming_periods};
pub use error::ChartError;
pub use providers::{EphemerisSource, GeocodedPlace, Geocoder, ResolvedTimezone, TimezoneResolver};
pub use time::UtcTime;
