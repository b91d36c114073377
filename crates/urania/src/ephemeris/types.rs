use concordia_types::{Body, InputError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during ephemeris and chart calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    CalculationFailed {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("Angle calculation failed: {message}")]
    AngleCalculationFailed { message: String },
    #[error("Ephemeris response is missing required field '{field}'")]
    MissingField { field: String },
    #[error("Malformed ephemeris response: {message}")]
    MalformedResponse { message: String },
    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

/// Cartesian vector in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Geocentric ecliptic position of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Longitude in degrees (0-360)
    pub lon: f64,
    /// Speed in longitude (degrees per day)
    pub speed_lon: f64,
    pub retrograde: bool,
}
