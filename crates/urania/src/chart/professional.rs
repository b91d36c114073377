//! Mapping of a professional ephemeris service response into a profile.
//!
//! The service reports its own house system (usually Placidus), so houses are
//! taken from the response rather than recomputed as whole-sign.

use super::builder::assemble_profile;
use crate::ephemeris::EphemerisError;
use concordia_types::{normalize_degrees, AstrologyProfile, Body, CelestialBody};
use serde::{Deserialize, Serialize};

/// Some providers send the retrograde flag as a string ("true", "R").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RetroFlag {
    Bool(bool),
    Text(String),
}

impl Default for RetroFlag {
    fn default() -> Self {
        RetroFlag::Bool(false)
    }
}

impl RetroFlag {
    pub fn is_retrograde(&self) -> bool {
        match self {
            RetroFlag::Bool(b) => *b,
            RetroFlag::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "r" | "yes" | "1"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalPlanet {
    pub name: String,
    pub full_degree: f64,
    #[serde(default)]
    pub is_retro: RetroFlag,
    #[serde(default)]
    pub house: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfessionalHouse {
    pub house: u8,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalChart {
    #[serde(default)]
    pub planets: Vec<ProfessionalPlanet>,
    #[serde(default)]
    pub houses: Vec<ProfessionalHouse>,
    #[serde(default)]
    pub ascendant: Option<f64>,
    #[serde(default)]
    pub midheaven: Option<f64>,
    #[serde(default)]
    pub house_system: Option<String>,
}

/// House (1..=12) whose cusp span contains `longitude`.
pub fn house_from_cusps(longitude: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_degrees(longitude);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let span = normalize_degrees(end - start);
        if normalize_degrees(lon - start) < span {
            return (i + 1) as u8;
        }
    }
    1
}

impl ProfessionalChart {
    pub fn from_json(raw: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(raw).map_err(|e| EphemerisError::MalformedResponse {
            message: e.to_string(),
        })
    }

    fn cusps(&self) -> Result<[f64; 12], EphemerisError> {
        let mut cusps = [None; 12];
        for house in &self.houses {
            if !(1..=12).contains(&house.house) || !house.degree.is_finite() {
                return Err(EphemerisError::MalformedResponse {
                    message: format!("invalid house cusp {} at {}", house.house, house.degree),
                });
            }
            cusps[(house.house - 1) as usize] = Some(normalize_degrees(house.degree));
        }
        let mut out = [0.0; 12];
        for (i, cusp) in cusps.iter().enumerate() {
            out[i] = cusp.ok_or_else(|| EphemerisError::MissingField {
                field: format!("houses[{}]", i + 1),
            })?;
        }
        Ok(out)
    }

    pub fn into_profile(self) -> Result<AstrologyProfile, EphemerisError> {
        let cusps = self.cusps()?;
        let ascendant = self.ascendant.ok_or_else(|| EphemerisError::MissingField {
            field: "ascendant".to_string(),
        })?;
        let midheaven = self.midheaven.unwrap_or(cusps[9]);
        if !ascendant.is_finite() || !midheaven.is_finite() {
            return Err(EphemerisError::MalformedResponse {
                message: "non-finite chart angle".to_string(),
            });
        }

        let mut bodies = Vec::with_capacity(12);
        for planet in &self.planets {
            let body = match planet.name.parse::<Body>() {
                Ok(body) if !body.is_angle() => body,
                _ => {
                    log::debug!("skipping unsupported body '{}'", planet.name);
                    continue;
                }
            };
            if bodies.iter().any(|b: &CelestialBody| b.name == body) {
                continue;
            }
            if !planet.full_degree.is_finite() {
                return Err(EphemerisError::MalformedResponse {
                    message: format!("non-finite longitude for {}", planet.name),
                });
            }
            let house = planet
                .house
                .filter(|h| (1..=12).contains(h))
                .unwrap_or_else(|| house_from_cusps(planet.full_degree, &cusps));
            let retro = !body.is_luminary() && planet.is_retro.is_retrograde();
            bodies.push(CelestialBody::new(body, planet.full_degree, house, retro));
        }
        bodies.push(CelestialBody::new(Body::Ascendant, ascendant, 1, false));
        bodies.push(CelestialBody::new(
            Body::Midheaven,
            midheaven,
            house_from_cusps(midheaven, &cusps),
            false,
        ));

        let system = self
            .house_system
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "placidus".to_string());
        assemble_profile(bodies, cusps, &system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn equal_cusps(start: f64) -> Vec<ProfessionalHouse> {
        (0..12)
            .map(|i| ProfessionalHouse {
                house: i + 1,
                degree: (start + 30.0 * i as f64) % 360.0,
            })
            .collect()
    }

    #[test]
    fn test_retro_flag_variants() {
        assert!(RetroFlag::Bool(true).is_retrograde());
        assert!(RetroFlag::Text("true".into()).is_retrograde());
        assert!(RetroFlag::Text("R".into()).is_retrograde());
        assert!(!RetroFlag::Text("false".into()).is_retrograde());
    }

    #[test]
    fn test_house_from_cusps_wraps() {
        let cusps: Vec<f64> = equal_cusps(345.0).iter().map(|h| h.degree).collect();
        let cusps: [f64; 12] = cusps.try_into().unwrap();
        assert_eq!(house_from_cusps(350.0, &cusps), 1);
        assert_eq!(house_from_cusps(10.0, &cusps), 1);
        assert_eq!(house_from_cusps(16.0, &cusps), 2);
        assert_eq!(house_from_cusps(344.0, &cusps), 12);
    }

    #[test]
    fn test_parse_response_json() {
        let raw = r#"{
            "planets": [
                {"name": "Sun", "fullDegree": 126.4, "isRetro": "false", "house": 10},
                {"name": "Moon", "fullDegree": 216.6, "isRetro": false},
                {"name": "Saturn", "fullDegree": 291.0, "isRetro": "true", "house": 4},
                {"name": "Chiron", "fullDegree": 100.0}
            ],
            "houses": [
                {"house": 1, "degree": 171.7}, {"house": 2, "degree": 200.0},
                {"house": 3, "degree": 230.0}, {"house": 4, "degree": 262.2},
                {"house": 5, "degree": 295.0}, {"house": 6, "degree": 325.0},
                {"house": 7, "degree": 351.7}, {"house": 8, "degree": 20.0},
                {"house": 9, "degree": 50.0}, {"house": 10, "degree": 82.2},
                {"house": 11, "degree": 115.0}, {"house": 12, "degree": 145.0}
            ],
            "ascendant": 171.7,
            "houseSystem": "Placidus"
        }"#;
        let profile = ProfessionalChart::from_json(raw).unwrap().into_profile().unwrap();
        assert_eq!(profile.house_system, "placidus");
        assert_eq!(profile.sun.house, 10);
        assert_eq!(profile.moon.house, 2);
        assert!((profile.midheaven.abs_degree - 82.2).abs() < 1e-9);
        assert_eq!(profile.planets.len(), 1);
        assert!(profile.planets[0].is_retrograde);
        assert_eq!(profile.elements.total(), 100);
    }

    #[test]
    fn test_missing_ascendant_rejected() {
        let chart = ProfessionalChart {
            planets: vec![],
            houses: equal_cusps(0.0),
            ascendant: None,
            midheaven: None,
            house_system: None,
        };
        assert_eq!(
            chart.into_profile().unwrap_err(),
            EphemerisError::MissingField {
                field: "ascendant".to_string()
            }
        );
    }

    #[test]
    fn test_missing_cusp_rejected() {
        let mut houses = equal_cusps(0.0);
        houses.pop();
        let chart = ProfessionalChart {
            planets: vec![],
            houses,
            ascendant: Some(0.0),
            midheaven: None,
            house_system: None,
        };
        assert!(matches!(
            chart.into_profile(),
            Err(EphemerisError::MissingField { .. })
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert!(matches!(
            ProfessionalChart::from_json("{\"planets\": 3}"),
            Err(EphemerisError::MalformedResponse { .. })
        ));
    }
}
