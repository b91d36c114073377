//! Ascendant and Midheaven from local sidereal time.

use crate::ephemeris::{greenwich_sidereal_hours, EphemerisError};
use crate::OBLIQUITY_DEG;
use concordia_types::{normalize_degrees, GeoPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAngles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub local_sidereal_hours: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct AngleCalculator {
    obliquity_deg: f64,
}

impl Default for AngleCalculator {
    fn default() -> Self {
        Self {
            obliquity_deg: OBLIQUITY_DEG,
        }
    }
}

impl AngleCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// LST = GST + longitude / 15, in hours [0, 24).
    pub fn local_sidereal_hours(&self, jd: f64, longitude: f64) -> f64 {
        (greenwich_sidereal_hours(jd) + longitude / 15.0).rem_euclid(24.0)
    }

    pub fn compute(&self, jd: f64, location: GeoPoint) -> Result<ChartAngles, EphemerisError> {
        let lst = self.local_sidereal_hours(jd, location.lng);
        let ramc = (lst * 15.0).to_radians();
        let (sin_e, cos_e) = self.obliquity_deg.to_radians().sin_cos();
        let (sin_r, cos_r) = ramc.sin_cos();

        let midheaven = sin_r.atan2(cos_r * cos_e).to_degrees();
        let ascendant = cos_r
            .atan2(-(sin_r * cos_e + location.lat.to_radians().tan() * sin_e))
            .to_degrees();

        if !ascendant.is_finite() || !midheaven.is_finite() {
            return Err(EphemerisError::AngleCalculationFailed {
                message: format!(
                    "non-finite angles at JD {jd} for ({}, {})",
                    location.lat, location.lng
                ),
            });
        }

        log::debug!(
            "angles: lst={:.5}h asc={:.4} mc={:.4}",
            lst,
            normalize_degrees(ascendant),
            normalize_degrees(midheaven)
        );

        Ok(ChartAngles {
            ascendant: normalize_degrees(ascendant),
            midheaven: normalize_degrees(midheaven),
            local_sidereal_hours: lst,
        })
    }
}
