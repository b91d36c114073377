//! Julian dates and Greenwich sidereal time.

use chrono::{DateTime, Utc};

pub const J2000_JD: f64 = 2_451_545.0;
const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Convert a UTC instant to a Julian Day. UT is used for TT; the difference is
/// below the precision of the local ephemeris.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / 36525.0
}

/// Greenwich mean sidereal time in hours, [0, 24).
///
/// θ0 = 280.46061837° + 360.98564736629°·(JD − 2451545) + 0.000387933°·T² − T³/38710000
pub fn greenwich_sidereal_hours(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let theta = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    concordia_types::normalize_degrees(theta) / 15.0
}
