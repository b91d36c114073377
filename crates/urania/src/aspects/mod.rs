pub mod calculator;
pub mod types;

pub use calculator::{angular_separation, aspect_score, classify, AspectCalculator};
pub use types::{AspectKind, CrossAspect, ASPECT_PRECEDENCE, UNASPECTED_SCORE};
