//! Per-pillar compatibility scores, each on a 0..=100 scale.

use concordia_types::{
    AstrologyProfile, ChineseSign, Element, MayanDaySign, NumerologyProfile, SynastryWeights,
};
use urania::aspect_score;

/// Used when no configured body or slot can be compared.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Compatibility of two dominant elements, 0..=1.
pub fn element_compatibility(a: Element, b: Element) -> f64 {
    if a == b {
        1.0
    } else if a.complements(b) {
        0.85
    } else {
        0.4
    }
}

/// Weighted mean aspect score (0..=1) across the configured bodies.
/// Bodies missing from either chart are skipped; `None` if nothing compared.
pub fn weighted_aspect_mean(
    a: &AstrologyProfile,
    b: &AstrologyProfile,
    weights: &SynastryWeights,
) -> Option<f64> {
    let mut sum = 0.0;
    let mut total = 0.0;
    for (&body, &weight) in &weights.celestial_bodies {
        if let (Some(pa), Some(pb)) = (a.body(body), b.body(body)) {
            sum += aspect_score(pa.abs_degree, pb.abs_degree) * weight;
            total += weight;
        }
    }
    (total > 0.0).then(|| sum / total)
}

/// 30 points of element compatibility plus 70 points of weighted aspects.
pub fn western_score(a: &AstrologyProfile, b: &AstrologyProfile, weights: &SynastryWeights) -> f64 {
    let compat = element_compatibility(a.dominant_element(), b.dominant_element());
    let aspects = weighted_aspect_mean(a, b, weights).unwrap_or(0.5);
    compat * 30.0 + aspects * 70.0
}

pub fn numerology_score(
    a: &NumerologyProfile,
    b: &NumerologyProfile,
    weights: &SynastryWeights,
) -> f64 {
    let mut matched = 0.0;
    let mut possible = 0.0;
    for (&slot, &weight) in &weights.numerology_slots {
        let (Some(va), Some(vb)) = (a.slot(slot), b.slot(slot)) else {
            continue;
        };
        possible += weight;
        if va == vb {
            matched += weight;
        } else if (va + vb) % 9 == 0 {
            matched += 0.6 * weight;
        }
    }
    if possible > 0.0 {
        matched / possible * 100.0
    } else {
        NEUTRAL_SCORE
    }
}

pub fn mayan_score(a: &MayanDaySign, b: &MayanDaySign) -> f64 {
    match a.nawal.cyclic_distance(b.nawal) {
        0 => 100.0,
        1 | 19 => 90.0,
        5 | 15 => 85.0,
        10 => 40.0,
        _ => 60.0,
    }
}

pub fn chinese_score(a: &ChineseSign, b: &ChineseSign) -> f64 {
    if a.animal.trine_group() == b.animal.trine_group() {
        100.0
    } else if a.animal.opposite() == b.animal {
        30.0
    } else {
        65.0
    }
}
