//! Relationship-specific weight configurations.

use concordia_types::{
    Body, NumerologySlot, PillarWeights, RelationshipType, SynastryWeights,
};
use std::collections::BTreeMap;
use thiserror::Error;

/// Tolerance for the pillar weights summing to 1.
pub const PILLAR_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WeightError {
    #[error("pillar weights for {relationship} sum to {sum}, expected 1.0")]
    PillarSum { relationship: RelationshipType, sum: f64 },
    #[error("negative or non-finite weight {value} for {key} in {relationship}")]
    InvalidWeight {
        relationship: RelationshipType,
        key: String,
        value: f64,
    },
    #[error("house {house} is outside 1..=12 in {relationship}")]
    InvalidHouse { relationship: RelationshipType, house: u8 },
}

fn build(
    bodies: &[(Body, f64)],
    houses: &[(u8, f64)],
    slots: &[(NumerologySlot, f64)],
    pillars: [f64; 4],
) -> SynastryWeights {
    SynastryWeights {
        celestial_bodies: bodies.iter().copied().collect(),
        houses: houses.iter().copied().collect(),
        numerology_slots: slots.iter().copied().collect(),
        pillars: PillarWeights {
            western: pillars[0],
            numerology: pillars[1],
            mayan: pillars[2],
            chinese: pillars[3],
        },
    }
}

/// Built-in configuration for `relationship`.
pub fn default_weights(relationship: RelationshipType) -> SynastryWeights {
    use Body::*;
    use NumerologySlot::*;
    match relationship {
        RelationshipType::Romantic => build(
            &[
                (Sun, 1.0),
                (Moon, 2.0),
                (Mercury, 0.8),
                (Venus, 2.0),
                (Mars, 2.0),
                (Jupiter, 0.5),
                (Saturn, 0.7),
                (Ascendant, 1.0),
            ],
            &[(1, 1.0), (5, 2.0), (7, 2.0), (8, 1.5)],
            &[(LifePath, 1.5), (SoulUrge, 1.5), (Destiny, 1.0)],
            [0.45, 0.20, 0.20, 0.15],
        ),
        RelationshipType::Business => build(
            &[
                (Sun, 1.0),
                (Moon, 0.5),
                (Mercury, 2.0),
                (Venus, 0.5),
                (Mars, 1.0),
                (Jupiter, 2.0),
                (Saturn, 2.0),
            ],
            &[(2, 1.5), (6, 1.5), (10, 2.0), (11, 1.0)],
            &[
                (LifePath, 1.5),
                (Destiny, 2.0),
                (FirstPinnacle, 0.5),
                (SecondPinnacle, 0.5),
                (PyramidApex, 0.5),
            ],
            [0.40, 0.30, 0.15, 0.15],
        ),
        RelationshipType::Parental => build(
            &[
                (Sun, 1.5),
                (Moon, 2.0),
                (Mercury, 0.5),
                (Venus, 0.8),
                (Jupiter, 1.0),
                (Saturn, 2.0),
            ],
            &[(4, 2.0), (5, 1.0), (10, 2.0)],
            &[(LifePath, 2.0), (SoulUrge, 1.0), (PyramidCrown, 1.0)],
            [0.40, 0.20, 0.25, 0.15],
        ),
        RelationshipType::Fraternal => build(
            &[
                (Sun, 1.0),
                (Moon, 1.0),
                (Mercury, 2.0),
                (Venus, 0.8),
                (Mars, 0.8),
                (Jupiter, 2.0),
            ],
            &[(1, 1.0), (3, 2.0), (11, 2.0)],
            &[(LifePath, 1.5), (Destiny, 1.0), (ThirdPinnacle, 0.5)],
            [0.40, 0.20, 0.20, 0.20],
        ),
    }
}

/// Check pillar sum and that every weight is finite and non-negative.
pub fn validate_weights(
    relationship: RelationshipType,
    weights: &SynastryWeights,
) -> Result<(), WeightError> {
    let check = |key: String, value: f64| {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(WeightError::InvalidWeight {
                relationship,
                key,
                value,
            })
        }
    };

    for (body, w) in &weights.celestial_bodies {
        check(body.name().to_lowercase(), *w)?;
    }
    for (house, w) in &weights.houses {
        if !(1..=12).contains(house) {
            return Err(WeightError::InvalidHouse {
                relationship,
                house: *house,
            });
        }
        check(format!("house {house}"), *w)?;
    }
    for (slot, w) in &weights.numerology_slots {
        check(slot.key().to_string(), *w)?;
    }
    let p = &weights.pillars;
    for (name, w) in [
        ("western", p.western),
        ("numerology", p.numerology),
        ("mayan", p.mayan),
        ("chinese", p.chinese),
    ] {
        check(name.to_string(), w)?;
    }

    let sum = p.total();
    if (sum - 1.0).abs() > PILLAR_SUM_TOLERANCE {
        return Err(WeightError::PillarSum { relationship, sum });
    }
    Ok(())
}

/// Weight lookup with validated per-relationship overrides.
#[derive(Debug, Clone, Default)]
pub struct SynastryWeightEngine {
    overrides: BTreeMap<RelationshipType, SynastryWeights>,
}

impl SynastryWeightEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(
        mut self,
        relationship: RelationshipType,
        weights: SynastryWeights,
    ) -> Result<Self, WeightError> {
        validate_weights(relationship, &weights)?;
        log::debug!("weight override installed for {relationship}");
        self.overrides.insert(relationship, weights);
        Ok(self)
    }

    pub fn weights(&self, relationship: RelationshipType) -> SynastryWeights {
        self.overrides
            .get(&relationship)
            .cloned()
            .unwrap_or_else(|| default_weights(relationship))
    }
}
