//! Relationship compatibility across four pillars.
//!
//! [`SynastryWeightEngine`] selects what matters for a relationship type,
//! [`SynastryScoringEngine`] turns two people's pillars into a report and
//! [`TemporalProjectionEngine`] projects daily volatility windows.

pub mod indices;
pub mod overlays;
pub mod pillars;
pub mod projection;
pub mod scoring;
pub mod tags;
pub mod weights;

pub use pillars::{
    chinese_score, element_compatibility, mayan_score, numerology_score, western_score,
};
pub use projection::{element_of_day, TemporalProjectionEngine, DEFAULT_PROJECTION_DAYS};
pub use scoring::{global_score, SynastryScoringEngine};
pub use weights::{default_weights, validate_weights, SynastryWeightEngine, WeightError};
