//! Stable keys for externally cached profiles and reports.

use concordia_types::{BirthData, RelationshipType};
use sha2::{Digest, Sha256};

fn birth_fingerprint(birth: &BirthData) -> String {
    format!(
        "{}T{}",
        birth.date.format("%Y-%m-%d"),
        birth.time.format("%H:%M:%S")
    )
}

fn digest(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0x1f]);
    }
    hex::encode(hasher.finalize())
}

/// Key over date, time, coordinates and offset.
pub fn profile_cache_key(birth: &BirthData) -> String {
    digest(&[
        &birth_fingerprint(birth),
        &format!("{:.6}", birth.location.lat),
        &format!("{:.6}", birth.location.lng),
        &format!("{:.2}", birth.utc_offset_hours),
    ])
}

/// Key over both birth moments and the relationship type. Directional: the
/// report for (A, B) differs from (B, A) because overlays and aspect terms
/// read A's houses and B's bodies.
pub fn synastry_cache_key(a: &BirthData, b: &BirthData, relationship: RelationshipType) -> String {
    digest(&[
        &birth_fingerprint(a),
        &birth_fingerprint(b),
        relationship.key(),
    ])
}
