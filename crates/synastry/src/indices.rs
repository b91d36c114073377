//! The six relational indices as fixed linear combinations.

use concordia_types::{AstrologyProfile, Body, PillarBreakdown, RelationalIndices};
use urania::AspectCalculator;

/// One input to an index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Term {
    /// Aspect from A's first body to B's second body, scaled to 0..=100
    Aspect(Body, Body),
    NumerologyPillar,
    MayanPillar,
    /// Element compatibility scaled to 0..=100
    ElementCompatibility,
}

pub type IndexFormula = &'static [(f64, Term)];

pub const EROTIC: IndexFormula = &[
    (0.6, Term::Aspect(Body::Mars, Body::Venus)),
    (0.4, Term::Aspect(Body::Venus, Body::Mars)),
];
pub const INTELLECTUAL: IndexFormula = &[
    (0.7, Term::Aspect(Body::Mercury, Body::Mercury)),
    (0.3, Term::NumerologyPillar),
];
pub const EMOTIONAL: IndexFormula = &[
    (0.6, Term::Aspect(Body::Moon, Body::Moon)),
    (0.4, Term::ElementCompatibility),
];
pub const KARMIC: IndexFormula = &[
    (0.4, Term::Aspect(Body::Saturn, Body::Saturn)),
    (0.3, Term::Aspect(Body::Saturn, Body::Moon)),
    (0.3, Term::Aspect(Body::Moon, Body::Saturn)),
];
pub const SPIRITUAL: IndexFormula = &[
    (0.5, Term::Aspect(Body::Neptune, Body::Neptune)),
    (0.5, Term::MayanPillar),
];
pub const VOLITIONAL: IndexFormula = &[
    (0.5, Term::Aspect(Body::Mars, Body::Mars)),
    (0.5, Term::Aspect(Body::Sun, Body::Sun)),
];

/// Everything a formula can read.
pub struct IndexInputs<'a> {
    pub a: &'a AstrologyProfile,
    pub b: &'a AstrologyProfile,
    pub pillars: &'a PillarBreakdown,
    pub element_compatibility: f64,
}

impl IndexInputs<'_> {
    fn term(&self, term: Term) -> Option<f64> {
        match term {
            Term::Aspect(from, to) => AspectCalculator::new()
                .between(self.a, from, self.b, to)
                .map(|aspect| aspect.score * 100.0),
            Term::NumerologyPillar => Some(self.pillars.numerology),
            Term::MayanPillar => Some(self.pillars.mayan),
            Term::ElementCompatibility => Some(self.element_compatibility * 100.0),
        }
    }

    /// Weighted mean of the usable terms, renormalised; 50 if none are usable.
    pub fn evaluate(&self, formula: IndexFormula) -> u8 {
        let mut sum = 0.0;
        let mut total = 0.0;
        for &(weight, term) in formula {
            if let Some(value) = self.term(term) {
                sum += weight * value;
                total += weight;
            }
        }
        let value = if total > 0.0 { sum / total } else { 50.0 };
        value.round().clamp(0.0, 100.0) as u8
    }

    pub fn indices(&self) -> RelationalIndices {
        RelationalIndices {
            erotic: self.evaluate(EROTIC),
            intellectual: self.evaluate(INTELLECTUAL),
            emotional: self.evaluate(EMOTIONAL),
            karmic: self.evaluate(KARMIC),
            spiritual: self.evaluate(SPIRITUAL),
            volitional: self.evaluate(VOLITIONAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urania::emergency_profile;

    fn breakdown() -> PillarBreakdown {
        PillarBreakdown {
            western: 70.0,
            numerology: 40.0,
            mayan: 90.0,
            chinese: 65.0,
        }
    }

    #[test]
    fn test_conjunct_charts() {
        let a = emergency_profile();
        let b = emergency_profile();
        let pillars = breakdown();
        let inputs = IndexInputs {
            a: &a,
            b: &b,
            pillars: &pillars,
            element_compatibility: 1.0,
        };
        let indices = inputs.indices();
        assert_eq!(indices.erotic, 100);
        assert_eq!(indices.volitional, 100);
        // 0.7 * 100 + 0.3 * 40
        assert_eq!(indices.intellectual, 82);
        // 0.5 * 100 + 0.5 * 90
        assert_eq!(indices.spiritual, 95);
    }

    #[test]
    fn test_missing_bodies_renormalise() {
        let a = emergency_profile();
        let mut b = emergency_profile();
        b.planets.clear();
        let pillars = breakdown();
        let inputs = IndexInputs {
            a: &a,
            b: &b,
            pillars: &pillars,
            element_compatibility: 1.0,
        };
        let indices = inputs.indices();
        // only the numerology term remains
        assert_eq!(indices.intellectual, 40);
        // only A's Saturn to B's Moon remains
        assert_eq!(indices.karmic, 100);
        // no usable terms
        assert_eq!(indices.erotic, 50);
        // Sun-Sun survives alone
        assert_eq!(indices.volitional, 100);
    }
}
