use concordia_types::Body;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical aspects used for compatibility scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Trine,
    Sextile,
    Square,
    Opposition,
}

/// Classification order. A separation matching several orbs takes the first.
pub const ASPECT_PRECEDENCE: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Trine,
    AspectKind::Sextile,
    AspectKind::Square,
    AspectKind::Opposition,
];

/// Score for a separation that matches no aspect.
pub const UNASPECTED_SCORE: f64 = 0.15;

impl AspectKind {
    pub fn exact_angle(self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Trine => 120.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Opposition => 180.0,
        }
    }

    pub fn orb(self) -> f64 {
        match self {
            AspectKind::Sextile => 6.0,
            _ => 8.0,
        }
    }

    pub fn score(self) -> f64 {
        match self {
            AspectKind::Conjunction | AspectKind::Trine => 1.0,
            AspectKind::Sextile => 0.85,
            AspectKind::Square => 0.3,
            AspectKind::Opposition => 0.4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Trine => "trine",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Opposition => "opposition",
        }
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Aspect between a body in chart A and a body in chart B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossAspect {
    pub from: Body,
    pub to: Body,
    pub kind: Option<AspectKind>,
    pub separation: f64,
    /// Deviation from the exact angle; zero when unaspected
    pub orb: f64,
    pub score: f64,
}
