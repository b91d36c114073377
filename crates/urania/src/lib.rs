//! Natal chart engine.
//!
//! Positions come from a local analytic ephemeris (Keplerian orbits for the
//! planets, a truncated lunar series for the Moon); angles come from local
//! sidereal time. Charts use whole-sign houses unless mapped from a
//! professional ephemeris response.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod ephemeris;

pub use angles::{AngleCalculator, ChartAngles};
pub use aspects::{aspect_score, angular_separation, AspectCalculator, AspectKind, CrossAspect};
pub use chart::{emergency_profile, ChartBuilder, ProfessionalChart};
pub use ephemeris::{BodyPosition, EphemerisError, EphemerisPositions};

/// Fixed ecliptic obliquity in degrees. No precession correction is applied.
pub const OBLIQUITY_DEG: f64 = 23.4392911;
