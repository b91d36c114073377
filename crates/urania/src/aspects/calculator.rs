use crate::aspects::types::{AspectKind, CrossAspect, ASPECT_PRECEDENCE, UNASPECTED_SCORE};
use concordia_types::{AstrologyProfile, Body};

/// Shortest arc between two longitudes, [0, 180].
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    d.min(360.0 - d)
}

/// First aspect in precedence order whose orb contains the separation.
pub fn classify(separation: f64) -> Option<AspectKind> {
    ASPECT_PRECEDENCE
        .iter()
        .copied()
        .find(|kind| (separation - kind.exact_angle()).abs() <= kind.orb())
}

/// Compatibility score for two longitudes. Symmetric in its arguments.
pub fn aspect_score(a: f64, b: f64) -> f64 {
    classify(angular_separation(a, b)).map_or(UNASPECTED_SCORE, AspectKind::score)
}

/// Aspect calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aspect from A's `from` body to B's `to` body. `None` when either chart
    /// lacks the body.
    pub fn between(
        &self,
        a: &AstrologyProfile,
        from: Body,
        b: &AstrologyProfile,
        to: Body,
    ) -> Option<CrossAspect> {
        let lon_a = a.body(from)?.abs_degree;
        let lon_b = b.body(to)?.abs_degree;
        let separation = angular_separation(lon_a, lon_b);
        let kind = classify(separation);
        Some(CrossAspect {
            from,
            to,
            kind,
            separation,
            orb: kind.map_or(0.0, |k| (separation - k.exact_angle()).abs()),
            score: kind.map_or(UNASPECTED_SCORE, AspectKind::score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::emergency_profile;
    use concordia_types::CelestialBody;

    #[test]
    fn test_separation_wraps() {
        assert_eq!(angular_separation(350.0, 10.0), 20.0);
        assert_eq!(angular_separation(10.0, 190.0), 180.0);
        assert_eq!(angular_separation(-30.0, 30.0), 60.0);
    }

    #[test]
    fn test_reference_scores() {
        assert_eq!(aspect_score(10.0, 10.0), 1.0);
        assert_eq!(aspect_score(10.0, 130.0), 1.0);
        assert_eq!(aspect_score(10.0, 100.0), 0.3);
        assert_eq!(aspect_score(0.0, 60.0), 0.85);
        assert_eq!(aspect_score(0.0, 180.0), 0.4);
        assert_eq!(aspect_score(0.0, 40.0), UNASPECTED_SCORE);
    }

    #[test]
    fn test_orb_edges_inclusive() {
        assert_eq!(classify(8.0), Some(AspectKind::Conjunction));
        assert_eq!(classify(8.5), None);
        assert_eq!(classify(66.0), Some(AspectKind::Sextile));
        assert_eq!(classify(67.0), None);
        assert_eq!(classify(172.0), Some(AspectKind::Opposition));
    }

    #[test]
    fn test_between_is_directional() {
        let mut a = emergency_profile();
        let mut b = emergency_profile();
        a.planets.retain(|p| p.name != Body::Mars);
        if let Some(venus) = b.planets.iter_mut().find(|p| p.name == Body::Venus) {
            *venus = CelestialBody::new(Body::Venus, 93.0, 4, false);
        }
        let calculator = AspectCalculator::new();

        let square = calculator.between(&a, Body::Sun, &b, Body::Venus).unwrap();
        assert_eq!(square.from, Body::Sun);
        assert_eq!(square.to, Body::Venus);
        assert_eq!(square.kind, Some(AspectKind::Square));
        assert!((square.separation - 93.0).abs() < 1e-9);
        assert!((square.orb - 3.0).abs() < 1e-9);
        assert_eq!(square.score, 0.3);

        assert!(calculator.between(&a, Body::Mars, &b, Body::Sun).is_none());
        let reverse = calculator.between(&b, Body::Mars, &a, Body::Sun).unwrap();
        assert_eq!(reverse.kind, Some(AspectKind::Conjunction));
    }

    #[test]
    fn test_between_unaspected_has_zero_orb() {
        let a = emergency_profile();
        let mut b = emergency_profile();
        b.moon = CelestialBody::new(Body::Moon, 40.0, 2, false);
        let aspect = AspectCalculator::new()
            .between(&a, Body::Moon, &b, Body::Moon)
            .unwrap();
        assert_eq!(aspect.kind, None);
        assert_eq!(aspect.orb, 0.0);
        assert_eq!(aspect.score, UNASPECTED_SCORE);
    }
}
