use concordia_types::{AstrologyProfile, HouseOverlay, SynastryWeights};
use urania::chart::house_from_cusps;

/// Overlays at or above this weight count as a strength.
pub const STRENGTH_OVERLAY_WEIGHT: f64 = 1.5;

/// B's bodies that land in A's configured houses, by A's cusps.
pub fn house_overlays(
    a: &AstrologyProfile,
    b: &AstrologyProfile,
    weights: &SynastryWeights,
) -> Vec<HouseOverlay> {
    weights
        .houses
        .iter()
        .filter_map(|(&house, &weight)| {
            let bodies: Vec<_> = b
                .celestial_bodies()
                .filter(|body| house_from_cusps(body.abs_degree, &a.houses) == house)
                .map(|body| body.name)
                .collect();
            (!bodies.is_empty()).then_some(HouseOverlay {
                house,
                weight,
                bodies,
            })
        })
        .collect()
}

pub fn overlay_strengths(overlays: &[HouseOverlay]) -> Vec<String> {
    overlays
        .iter()
        .filter(|o| o.weight >= STRENGTH_OVERLAY_WEIGHT)
        .map(|o| {
            let names: Vec<&str> = o.bodies.iter().map(|b| b.name()).collect();
            format!("{} activating house {}", names.join(", "), o.house)
        })
        .collect()
}
