//! Qualitative strength, tension and growth phrases.

use concordia_types::{PillarBreakdown, RelationalIndices};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    Strength,
    Tension,
    Growth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Erotic,
    Intellectual,
    Emotional,
    Karmic,
    Spiritual,
    Volitional,
    Western,
    Numerology,
    Mayan,
    Chinese,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Above(f64),
    Below(f64),
}

impl Bound {
    fn holds(self, value: f64) -> bool {
        match self {
            Bound::Above(t) => value > t,
            Bound::Below(t) => value < t,
        }
    }
}

pub struct TagRule {
    pub category: TagCategory,
    pub metric: Metric,
    pub bound: Bound,
    pub phrase: &'static str,
}

const fn rule(category: TagCategory, metric: Metric, bound: Bound, phrase: &'static str) -> TagRule {
    TagRule {
        category,
        metric,
        bound,
        phrase,
    }
}

use Bound::{Above, Below};
use Metric::*;
use TagCategory::{Growth, Strength, Tension};

pub const CATALOGUE: &[TagRule] = &[
    rule(Strength, Emotional, Above(75.0), "high emotional resonance"),
    rule(Strength, Intellectual, Above(75.0), "shared mental wavelength"),
    rule(Strength, Erotic, Above(75.0), "strong magnetic attraction"),
    rule(Strength, Spiritual, Above(75.0), "aligned spiritual paths"),
    rule(Strength, Volitional, Above(75.0), "compatible drives and ambitions"),
    rule(Strength, Numerology, Above(75.0), "resonant life numbers"),
    rule(Strength, Mayan, Above(85.0), "kindred day-signs"),
    rule(Strength, Chinese, Above(99.0), "harmonious zodiac trine"),
    rule(Tension, Karmic, Below(40.0), "karmic friction around commitment"),
    rule(Tension, Erotic, Below(40.0), "mismatched desire rhythms"),
    rule(Tension, Emotional, Below(40.0), "emotional wavelengths diverge"),
    rule(Tension, Volitional, Below(40.0), "competing wills"),
    rule(Tension, Chinese, Below(31.0), "opposing zodiac animals"),
    rule(Tension, Mayan, Below(41.0), "antipodal day-signs"),
    rule(Growth, Intellectual, Below(60.0), "learning each other's language"),
    rule(Growth, Karmic, Below(60.0), "patience with long-term lessons"),
    rule(Growth, Spiritual, Below(60.0), "building shared meaning"),
    rule(Growth, Western, Below(60.0), "bridging different temperaments"),
    rule(Growth, Numerology, Below(50.0), "honouring different life purposes"),
];

pub fn fallback(category: TagCategory) -> &'static str {
    match category {
        Strength => "steady baseline compatibility",
        Tension => "no major friction points",
        Growth => "deepening mutual understanding",
    }
}

fn metric_value(metric: Metric, indices: &RelationalIndices, pillars: &PillarBreakdown) -> f64 {
    match metric {
        Erotic => indices.erotic as f64,
        Intellectual => indices.intellectual as f64,
        Emotional => indices.emotional as f64,
        Karmic => indices.karmic as f64,
        Spiritual => indices.spiritual as f64,
        Volitional => indices.volitional as f64,
        Western => pillars.western,
        Numerology => pillars.numerology,
        Mayan => pillars.mayan,
        Chinese => pillars.chinese,
    }
}

/// Phrases whose rule fires, in catalogue order. Never empty: a category with
/// no firing rule gets its fallback phrase, unless `extra` already has entries.
pub fn select(
    category: TagCategory,
    indices: &RelationalIndices,
    pillars: &PillarBreakdown,
    extra: Vec<String>,
) -> Vec<String> {
    let mut tags: Vec<String> = CATALOGUE
        .iter()
        .filter(|r| r.category == category)
        .filter(|r| r.bound.holds(metric_value(r.metric, indices, pillars)))
        .map(|r| r.phrase.to_string())
        .collect();
    tags.extend(extra);
    if tags.is_empty() {
        tags.push(fallback(category).to_string());
    }
    tags
}
