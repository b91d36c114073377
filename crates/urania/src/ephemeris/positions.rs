use super::kepler::{elements_for, heliocentric_position, EARTH_MOON_BARYCENTER};
use super::lunar;
use super::time::{centuries_since_j2000, julian_day};
use super::types::{BodyPosition, EphemerisError, Vector3};
use crate::OBLIQUITY_DEG;
use chrono::{DateTime, Utc};
use concordia_types::{normalize_degrees, Body};

/// Geocentric positions for the Sun, Moon and the eight planets.
#[derive(Debug, Clone, Copy, Default)]
pub struct EphemerisPositions;

impl EphemerisPositions {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric equatorial (J2000 frame) vector of `body` in AU.
    pub fn geocentric_equatorial(&self, body: Body, jd: f64) -> Result<Vector3, EphemerisError> {
        let t = centuries_since_j2000(jd);
        let failed = |message: &str| EphemerisError::CalculationFailed {
            body,
            julian_day: jd,
            message: message.to_string(),
        };

        let ecliptic = match body {
            Body::Moon => lunar::geocentric_ecliptic(t),
            Body::Ascendant | Body::Midheaven => {
                return Err(failed("chart angles are not ephemeris bodies"))
            }
            _ => {
                let earth = heliocentric_position(&EARTH_MOON_BARYCENTER, t)
                    .ok_or_else(|| failed("Kepler solver did not converge for Earth"))?;
                if body == Body::Sun {
                    earth.neg()
                } else {
                    let elements =
                        elements_for(body).ok_or_else(|| failed("no orbital elements"))?;
                    let planet = heliocentric_position(elements, t)
                        .ok_or_else(|| failed("Kepler solver did not converge"))?;
                    planet.sub(earth)
                }
            }
        };

        let equatorial = ecliptic_to_equatorial(ecliptic);
        if !equatorial.is_finite() {
            return Err(failed("non-finite position vector"));
        }
        Ok(equatorial)
    }

    /// Ecliptic longitude of `body` in degrees, [0, 360).
    pub fn ecliptic_longitude(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        let equatorial = self.geocentric_equatorial(body, jd)?;
        Ok(equatorial_to_longitude(equatorial))
    }

    /// Longitude plus daily motion sampled over `step_days`.
    pub fn position(
        &self,
        body: Body,
        jd: f64,
        step_days: f64,
    ) -> Result<BodyPosition, EphemerisError> {
        let lon = self.ecliptic_longitude(body, jd)?;
        let later = self.ecliptic_longitude(body, jd + step_days)?;
        let mut delta = later - lon;
        if delta > 180.0 {
            delta -= 360.0;
        } else if delta <= -180.0 {
            delta += 360.0;
        }
        let speed_lon = delta / step_days;
        Ok(BodyPosition {
            body,
            lon,
            speed_lon,
            retrograde: !body.is_luminary() && speed_lon < 0.0,
        })
    }

    /// Positions for all ten celestial bodies at `instant`.
    pub fn all_positions(
        &self,
        instant: DateTime<Utc>,
        step_days: f64,
    ) -> Result<Vec<BodyPosition>, EphemerisError> {
        let jd = julian_day(instant);
        Body::CELESTIAL
            .iter()
            .map(|&body| self.position(body, jd, step_days))
            .collect()
    }
}

fn ecliptic_to_equatorial(v: Vector3) -> Vector3 {
    let (s, c) = OBLIQUITY_DEG.to_radians().sin_cos();
    Vector3::new(v.x, v.y * c - v.z * s, v.y * s + v.z * c)
}

fn equatorial_to_longitude(v: Vector3) -> f64 {
    let (s, c) = OBLIQUITY_DEG.to_radians().sin_cos();
    let y_ecl = v.y * c + v.z * s;
    normalize_degrees(y_ecl.atan2(v.x).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::J2000_JD;

    #[test]
    fn test_sun_at_j2000() {
        let lon = EphemerisPositions::new()
            .ecliptic_longitude(Body::Sun, J2000_JD)
            .unwrap();
        assert!((lon - 280.38).abs() < 0.05, "lon = {lon}");
    }

    #[test]
    fn test_angles_are_rejected() {
        let err = EphemerisPositions::new()
            .ecliptic_longitude(Body::Ascendant, J2000_JD)
            .unwrap_err();
        assert!(matches!(err, EphemerisError::CalculationFailed { body: Body::Ascendant, .. }));
    }

    #[test]
    fn test_luminaries_never_retrograde() {
        let eph = EphemerisPositions::new();
        for jd in [J2000_JD, 2_448_102.125, 2_455_000.5] {
            assert!(!eph.position(Body::Sun, jd, 1.0).unwrap().retrograde);
            assert!(!eph.position(Body::Moon, jd, 1.0).unwrap().retrograde);
        }
    }

    #[test]
    fn test_saturn_retrograde_summer_1990() {
        let pos = EphemerisPositions::new()
            .position(Body::Saturn, 2_448_102.125, 1.0)
            .unwrap();
        assert!(pos.retrograde);
        assert!(pos.speed_lon < 0.0);
    }

    #[test]
    fn test_round_trip_rotation() {
        let v = Vector3::new(0.3, -0.8, 0.05);
        let eq = ecliptic_to_equatorial(v);
        let lon = equatorial_to_longitude(eq);
        let expected = normalize_degrees((-0.8f64).atan2(0.3).to_degrees());
        assert!((lon - expected).abs() < 1e-9);
    }
}
