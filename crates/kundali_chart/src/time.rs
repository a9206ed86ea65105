//! UTC calendar date/time and Julian day conversion.
//!
//! Provides `UtcTime`, the calendar representation at the chart boundary.
//! Internally every instant is a Julian day (UTC scale) as f64; leap
//! seconds are out of scope for chart work.

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to Julian day on the UTC scale (calendar only, no TDB).
    pub fn to_jd_utc(&self) -> f64 {
        let y = self.year as f64;
        let m = self.month as f64;
        let d = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;

        let (y2, m2) = if m <= 2.0 {
            (y - 1.0, m + 12.0)
        } else {
            (y, m)
        };
        let a = (y2 / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        (365.25 * (y2 + 4716.0)).floor() + (30.6001 * (m2 + 1.0)).floor() + d + b - 1524.5
    }

    /// Convert a Julian day (UTC scale) back to a calendar instant.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let z = (jd_utc + 0.5).floor();
        let f = jd_utc + 0.5 - z;
        let a = if z < 2_299_161.0 {
            z
        } else {
            let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day_frac = b - d - (30.6001 * e).floor() + f;
        let day = day_frac.floor() as u32;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
        let year = if month > 2 {
            (c - 4716.0) as i32
        } else {
            (c - 4715.0) as i32
        };

        let total_seconds = day_frac.fract() * 86_400.0;
        let hour = (total_seconds / 3600.0).floor() as u32;
        let minute = ((total_seconds % 3600.0) / 60.0).floor() as u32;
        let second = total_seconds % 60.0;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_epoch() {
        // 2000-01-01 12:00 UTC is JD 2451545.0.
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd_utc() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn known_julian_days() {
        let t = UtcTime::new(1987, 4, 10, 0, 0, 0.0);
        assert!((t.to_jd_utc() - 2_446_895.5).abs() < 1e-9);
        let t = UtcTime::new(2024, 3, 20, 3, 6, 0.0);
        let jd = t.to_jd_utc();
        assert!(jd > 2_460_389.0 && jd < 2_460_390.0);
    }

    #[test]
    fn round_trip() {
        let t = UtcTime::new(1994, 8, 15, 6, 45, 30.0);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!(back.year, 1994);
        assert_eq!(back.month, 8);
        assert_eq!(back.day, 15);
        assert_eq!(back.hour, 6);
        assert_eq!(back.minute, 45);
        assert!((back.second - 30.0).abs() < 1e-3);
    }

    #[test]
    fn january_february_branch() {
        let t = UtcTime::new(2023, 1, 31, 0, 0, 0.0);
        let back = UtcTime::from_jd_utc(t.to_jd_utc());
        assert_eq!((back.year, back.month, back.day), (2023, 1, 31));
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }
}
