use crate::indices::IndexInputs;
use crate::overlays::{house_overlays, overlay_strengths};
use crate::pillars::{
    chinese_score, element_compatibility, mayan_score, numerology_score, western_score,
};
use crate::tags::{select, TagCategory};
use concordia_types::{
    PersonPillars, Pillar, PillarBreakdown, RelationshipType, SynastryReport, SynastryWeights,
};

/// Weighted blend of the four pillars, rounded and clamped to 0..=100.
pub fn global_score(pillars: &PillarBreakdown, weights: &SynastryWeights) -> u8 {
    let blended: f64 = [Pillar::Western, Pillar::Numerology, Pillar::Mayan, Pillar::Chinese]
        .iter()
        .map(|&p| pillars.get(p) * weights.pillars.get(p))
        .sum();
    blended.round().clamp(0.0, 100.0) as u8
}

/// Four-pillar synastry scoring. Stateless; never fails for well-formed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynastryScoringEngine;

impl SynastryScoringEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn pillar_breakdown(
        &self,
        a: &PersonPillars,
        b: &PersonPillars,
        weights: &SynastryWeights,
    ) -> PillarBreakdown {
        PillarBreakdown {
            western: western_score(&a.astrology, &b.astrology, weights),
            numerology: numerology_score(&a.numerology, &b.numerology, weights),
            mayan: mayan_score(&a.mayan, &b.mayan),
            chinese: chinese_score(&a.chinese, &b.chinese),
        }
    }

    pub fn score(
        &self,
        a: &PersonPillars,
        b: &PersonPillars,
        relationship_type: RelationshipType,
        weights: &SynastryWeights,
    ) -> SynastryReport {
        let pillar_breakdown = self.pillar_breakdown(a, b, weights);
        let compat = element_compatibility(
            a.astrology.dominant_element(),
            b.astrology.dominant_element(),
        );
        let indices = IndexInputs {
            a: &a.astrology,
            b: &b.astrology,
            pillars: &pillar_breakdown,
            element_compatibility: compat,
        }
        .indices();

        let overlays = house_overlays(&a.astrology, &b.astrology, weights);
        let score = global_score(&pillar_breakdown, weights);

        log::debug!(
            "{} synastry: score {} (western {:.1}, numerology {:.1}, mayan {:.1}, chinese {:.1})",
            relationship_type,
            score,
            pillar_breakdown.western,
            pillar_breakdown.numerology,
            pillar_breakdown.mayan,
            pillar_breakdown.chinese
        );

        SynastryReport {
            relationship_type,
            score,
            strengths: select(
                TagCategory::Strength,
                &indices,
                &pillar_breakdown,
                overlay_strengths(&overlays),
            ),
            tensions: select(TagCategory::Tension, &indices, &pillar_breakdown, Vec::new()),
            growth_areas: select(TagCategory::Growth, &indices, &pillar_breakdown, Vec::new()),
            indices,
            pillar_breakdown,
            overlays,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::default_weights;

    #[test]
    fn test_global_score_blend() {
        let pillars = PillarBreakdown {
            western: 80.0,
            numerology: 50.0,
            mayan: 40.0,
            chinese: 100.0,
        };
        let weights = default_weights(RelationshipType::Romantic);
        // 0.45*80 + 0.2*50 + 0.2*40 + 0.15*100 = 36 + 10 + 8 + 15
        assert_eq!(global_score(&pillars, &weights), 69);
    }

    #[test]
    fn test_global_score_extremes() {
        let weights = default_weights(RelationshipType::Business);
        let full = PillarBreakdown {
            western: 100.0,
            numerology: 100.0,
            mayan: 100.0,
            chinese: 100.0,
        };
        assert_eq!(global_score(&full, &weights), 100);
        let empty = PillarBreakdown {
            western: 0.0,
            numerology: 0.0,
            mayan: 0.0,
            chinese: 0.0,
        };
        assert_eq!(global_score(&empty, &weights), 0);
    }
}
