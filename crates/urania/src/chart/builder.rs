use super::balance::{element_balance, modality_balance};
use crate::angles::AngleCalculator;
use crate::ephemeris::{julian_day, EphemerisError, EphemerisPositions};
use chrono::{DateTime, Utc};
use concordia_types::{AstrologyProfile, BirthData, Body, CelestialBody, GeoPoint, ZodiacSign};

pub const WHOLE_SIGN: &str = "whole-sign";

/// House of `longitude` when the Ascendant's sign is house 1.
pub fn whole_sign_house(longitude: f64, ascendant: f64) -> u8 {
    let body = ZodiacSign::from_longitude(longitude).index();
    let asc = ZodiacSign::from_longitude(ascendant).index();
    ((body + 12 - asc) % 12 + 1) as u8
}

/// Cusp longitudes for whole-sign houses: each house starts at 0° of a sign.
pub fn whole_sign_cusps(ascendant: f64) -> [f64; 12] {
    let first = ZodiacSign::from_longitude(ascendant).start_degree();
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = (first + 30.0 * i as f64) % 360.0;
    }
    cusps
}

/// Assemble a profile from placed bodies. `bodies` must contain Sun, Moon,
/// Ascendant and Midheaven; anything else is treated as a planet.
pub fn assemble_profile(
    bodies: Vec<CelestialBody>,
    houses: [f64; 12],
    house_system: &str,
) -> Result<AstrologyProfile, EphemerisError> {
    let take = |which: Body| {
        bodies
            .iter()
            .find(|b| b.name == which)
            .cloned()
            .ok_or_else(|| EphemerisError::MissingField {
                field: which.name().to_lowercase(),
            })
    };
    let sun = take(Body::Sun)?;
    let moon = take(Body::Moon)?;
    let rising = take(Body::Ascendant)?;
    let midheaven = take(Body::Midheaven)?;

    let mut planets: Vec<CelestialBody> = bodies
        .iter()
        .filter(|b| !b.name.is_luminary() && !b.name.is_angle())
        .cloned()
        .collect();
    planets.sort_by_key(|b| b.name);

    let placements: Vec<(Body, ZodiacSign)> = bodies.iter().map(|b| (b.name, b.sign)).collect();

    Ok(AstrologyProfile {
        sun_sign: sun.sign,
        moon_sign: moon.sign,
        rising_sign: rising.sign,
        elements: element_balance(&placements),
        modalities: modality_balance(&placements),
        sun,
        moon,
        rising,
        midheaven,
        planets,
        houses,
        house_system: house_system.to_string(),
    })
}

/// Builds natal charts from the local ephemeris.
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    ephemeris: EphemerisPositions,
    angles: AngleCalculator,
    retrograde_step_days: f64,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl ChartBuilder {
    pub fn new(retrograde_step_days: f64) -> Self {
        let step = if retrograde_step_days.is_finite() && retrograde_step_days > 0.0 {
            retrograde_step_days
        } else {
            1.0
        };
        Self {
            ephemeris: EphemerisPositions::new(),
            angles: AngleCalculator::new(),
            retrograde_step_days: step,
        }
    }

    pub fn retrograde_step_days(&self) -> f64 {
        self.retrograde_step_days
    }

    pub fn build_for_birth(&self, birth: &BirthData) -> Result<AstrologyProfile, EphemerisError> {
        self.build_local(birth.utc_instant()?, birth.location)
    }

    /// Whole-sign chart for `instant` at `location`.
    pub fn build_local(
        &self,
        instant: DateTime<Utc>,
        location: GeoPoint,
    ) -> Result<AstrologyProfile, EphemerisError> {
        let jd = julian_day(instant);
        let angles = self.angles.compute(jd, location)?;
        let positions = self
            .ephemeris
            .all_positions(instant, self.retrograde_step_days)?;

        let asc = angles.ascendant;
        let mut bodies: Vec<CelestialBody> = positions
            .iter()
            .map(|p| CelestialBody::new(p.body, p.lon, whole_sign_house(p.lon, asc), p.retrograde))
            .collect();
        bodies.push(CelestialBody::new(Body::Ascendant, asc, 1, false));
        bodies.push(CelestialBody::new(
            Body::Midheaven,
            angles.midheaven,
            whole_sign_house(angles.midheaven, asc),
            false,
        ));

        log::debug!(
            "local chart at JD {:.5}: asc {:.3} ({}), {} bodies",
            jd,
            asc,
            ZodiacSign::from_longitude(asc),
            bodies.len()
        );

        assemble_profile(bodies, whole_sign_cusps(asc), WHOLE_SIGN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_sign_house() {
        // Ascendant in Virgo
        assert_eq!(whole_sign_house(171.0, 171.7), 1);
        assert_eq!(whole_sign_house(150.0, 171.7), 1);
        assert_eq!(whole_sign_house(126.4, 171.7), 12);
        assert_eq!(whole_sign_house(216.6, 171.7), 3);
        assert_eq!(whole_sign_house(0.0, 359.0), 2);
    }

    #[test]
    fn test_whole_sign_cusps() {
        let cusps = whole_sign_cusps(171.7);
        assert_eq!(cusps[0], 150.0);
        assert_eq!(cusps[6], 330.0);
        assert_eq!(cusps[7], 0.0);
    }

    #[test]
    fn test_non_positive_step_defaults() {
        assert_eq!(ChartBuilder::new(0.0).retrograde_step_days(), 1.0);
        assert_eq!(ChartBuilder::new(f64::NAN).retrograde_step_days(), 1.0);
        assert_eq!(ChartBuilder::new(0.5).retrograde_step_days(), 0.5);
    }

    #[test]
    fn test_assemble_requires_luminaries() {
        let bodies = vec![CelestialBody::new(Body::Sun, 10.0, 1, false)];
        let err = assemble_profile(bodies, [0.0; 12], WHOLE_SIGN).unwrap_err();
        assert_eq!(
            err,
            EphemerisError::MissingField {
                field: "moon".to_string()
            }
        );
    }
}
