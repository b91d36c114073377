pub mod kepler;
pub mod lunar;
pub mod positions;
pub mod time;
pub mod types;

pub use positions::EphemerisPositions;
pub use time::{centuries_since_j2000, greenwich_sidereal_hours, julian_day, J2000_JD};
pub use types::{BodyPosition, EphemerisError, Vector3};
