//! Error types for chart assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart assembly and its external collaborators.
///
/// Collaborator failures are surfaced unchanged; the chart layer never
/// retries or masks them.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Error from the ephemeris provider.
    Ephemeris(String),
    /// Error from the geocoder (place not found, service failure).
    Geocode(String),
    /// Error from timezone resolution.
    Timezone(String),
    /// Calendar input outside the supported range.
    InvalidDate(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(msg) => write!(f, "ephemeris error: {msg}"),
            Self::Geocode(msg) => write!(f, "geocode error: {msg}"),
            Self::Timezone(msg) => write!(f, "timezone error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for ChartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = ChartError::Geocode("no match for 'Xyzzy'".into());
        assert_eq!(e.to_string(), "geocode error: no match for 'Xyzzy'");
        let e = ChartError::InvalidDate("month out of range");
        assert_eq!(e.to_string(), "invalid date: month out of range");
    }
}
