//! Natal chart records.

use crate::body::Body;
use crate::zodiac::{normalize_degrees, Element, Modality, ZodiacSign};
use serde::{Deserialize, Serialize};

/// A body placed in a chart. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub name: Body,
    pub sign: ZodiacSign,
    /// Degree within the sign, 0 <= x < 30
    pub degree: f64,
    /// Ecliptic longitude, 0 <= x < 360
    pub abs_degree: f64,
    /// House number 1..=12
    pub house: u8,
    pub is_retrograde: bool,
}

impl CelestialBody {
    pub fn new(name: Body, longitude: f64, house: u8, is_retrograde: bool) -> Self {
        let abs_degree = normalize_degrees(longitude);
        let sign = ZodiacSign::from_longitude(abs_degree);
        Self {
            name,
            sign,
            degree: abs_degree - sign.start_degree(),
            abs_degree,
            house,
            is_retrograde,
        }
    }
}

/// Elemental percentages. The four buckets always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementBalance {
    pub fire: i32,
    pub earth: i32,
    pub air: i32,
    pub water: i32,
}

impl ElementBalance {
    pub fn uniform() -> Self {
        Self {
            fire: 25,
            earth: 25,
            air: 25,
            water: 25,
        }
    }

    pub fn get(&self, element: Element) -> i32 {
        match element {
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Air => self.air,
            Element::Water => self.water,
        }
    }

    pub fn get_mut(&mut self, element: Element) -> &mut i32 {
        match element {
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Air => &mut self.air,
            Element::Water => &mut self.water,
        }
    }

    pub fn total(&self) -> i32 {
        self.fire + self.earth + self.air + self.water
    }

    /// Largest bucket; ties resolve in fire, earth, air, water order.
    pub fn dominant(&self) -> Element {
        let mut best = Element::Fire;
        for element in Element::CYCLE {
            if self.get(element) > self.get(best) {
                best = element;
            }
        }
        best
    }
}

/// Modality percentages. The three buckets always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModalityBalance {
    pub cardinal: i32,
    pub fixed: i32,
    pub mutable: i32,
}

impl ModalityBalance {
    pub fn get(&self, modality: Modality) -> i32 {
        match modality {
            Modality::Cardinal => self.cardinal,
            Modality::Fixed => self.fixed,
            Modality::Mutable => self.mutable,
        }
    }

    pub fn get_mut(&mut self, modality: Modality) -> &mut i32 {
        match modality {
            Modality::Cardinal => &mut self.cardinal,
            Modality::Fixed => &mut self.fixed,
            Modality::Mutable => &mut self.mutable,
        }
    }

    pub fn total(&self) -> i32 {
        self.cardinal + self.fixed + self.mutable
    }
}

/// A complete natal chart. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AstrologyProfile {
    pub sun: CelestialBody,
    pub moon: CelestialBody,
    pub rising: CelestialBody,
    pub midheaven: CelestialBody,
    /// Mercury through Pluto
    pub planets: Vec<CelestialBody>,
    /// Cusp longitudes for houses 1..=12
    pub houses: [f64; 12],
    pub house_system: String,
    pub elements: ElementBalance,
    pub modalities: ModalityBalance,
    pub sun_sign: ZodiacSign,
    pub moon_sign: ZodiacSign,
    pub rising_sign: ZodiacSign,
}

impl AstrologyProfile {
    pub fn body(&self, body: Body) -> Option<&CelestialBody> {
        match body {
            Body::Sun => Some(&self.sun),
            Body::Moon => Some(&self.moon),
            Body::Ascendant => Some(&self.rising),
            Body::Midheaven => Some(&self.midheaven),
            other => self.planets.iter().find(|p| p.name == other),
        }
    }

    /// Sun, Moon, then the planets.
    pub fn celestial_bodies(&self) -> impl Iterator<Item = &CelestialBody> {
        [&self.sun, &self.moon].into_iter().chain(self.planets.iter())
    }

    pub fn dominant_element(&self) -> Element {
        self.elements.dominant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_celestial_body_splits_longitude() {
        let body = CelestialBody::new(Body::Sun, 126.5, 11, false);
        assert_eq!(body.sign, ZodiacSign::Leo);
        assert!((body.degree - 6.5).abs() < 1e-9);
        assert!((body.abs_degree - 126.5).abs() < 1e-9);
    }

    #[test]
    fn test_celestial_body_normalizes() {
        let body = CelestialBody::new(Body::Moon, -10.0, 12, false);
        assert_eq!(body.sign, ZodiacSign::Pisces);
        assert!((body.degree - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_dominant_tie_break() {
        let balance = ElementBalance {
            fire: 20,
            earth: 30,
            air: 30,
            water: 20,
        };
        assert_eq!(balance.dominant(), Element::Earth);
        assert_eq!(ElementBalance::uniform().dominant(), Element::Fire);
    }

    #[test]
    fn test_serializes_camel_case() {
        let body = CelestialBody::new(Body::Mars, 41.0, 9, true);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["absDegree"], 41.0);
        assert_eq!(json["isRetrograde"], true);
        assert_eq!(json["name"], "Mars");
        assert_eq!(json["sign"], "Taurus");
    }
}
