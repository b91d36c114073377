//! Synastry weights, reports and projection windows.

use crate::body::Body;
use crate::error::InputError;
use crate::numerology::NumerologySlot;
use crate::zodiac::Element;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelationshipType {
    Romantic,
    Business,
    Parental,
    Fraternal,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 4] = [
        RelationshipType::Romantic,
        RelationshipType::Business,
        RelationshipType::Parental,
        RelationshipType::Fraternal,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RelationshipType::Romantic => "romantic",
            RelationshipType::Business => "business",
            RelationshipType::Parental => "parental",
            RelationshipType::Fraternal => "fraternal",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RelationshipType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        RelationshipType::ALL
            .iter()
            .copied()
            .find(|r| r.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InputError::UnknownRelationship(s.to_string()))
    }
}

/// The four symbolic systems blended into a synastry score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Western,
    Numerology,
    Mayan,
    Chinese,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarWeights {
    pub western: f64,
    pub numerology: f64,
    pub mayan: f64,
    pub chinese: f64,
}

impl PillarWeights {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Western => self.western,
            Pillar::Numerology => self.numerology,
            Pillar::Mayan => self.mayan,
            Pillar::Chinese => self.chinese,
        }
    }

    pub fn total(&self) -> f64 {
        self.western + self.numerology + self.mayan + self.chinese
    }
}

/// Relationship-specific emphasis: which bodies, houses and numerology slots matter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryWeights {
    pub celestial_bodies: BTreeMap<Body, f64>,
    pub houses: BTreeMap<u8, f64>,
    pub numerology_slots: BTreeMap<NumerologySlot, f64>,
    pub pillars: PillarWeights,
}

/// Pillar scores, each 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PillarBreakdown {
    pub western: f64,
    pub numerology: f64,
    pub mayan: f64,
    pub chinese: f64,
}

impl PillarBreakdown {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Western => self.western,
            Pillar::Numerology => self.numerology,
            Pillar::Mayan => self.mayan,
            Pillar::Chinese => self.chinese,
        }
    }
}

/// The six named relational indices, each 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationalIndices {
    pub erotic: u8,
    pub intellectual: u8,
    pub emotional: u8,
    pub karmic: u8,
    pub spiritual: u8,
    pub volitional: u8,
}

/// B's bodies that fall inside one of A's emphasised houses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseOverlay {
    pub house: u8,
    pub weight: f64,
    pub bodies: Vec<Body>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryReport {
    pub relationship_type: RelationshipType,
    /// Global compatibility 0..=100
    pub score: u8,
    pub indices: RelationalIndices,
    pub strengths: Vec<String>,
    pub tensions: Vec<String>,
    pub growth_areas: Vec<String>,
    pub pillar_breakdown: PillarBreakdown,
    pub overlays: Vec<HouseOverlay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WindowType {
    Flow,
    Tension,
    Neutral,
}

/// One day of the relational volatility projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub window_type: WindowType,
    pub score: u8,
    pub description: String,
    pub affected_pillar: Pillar,
    pub element_of_day: Element,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_from_str() {
        assert_eq!(
            "ROMANTIC".parse::<RelationshipType>().unwrap(),
            RelationshipType::Romantic
        );
        assert_eq!(
            "fraternal".parse::<RelationshipType>().unwrap(),
            RelationshipType::Fraternal
        );
        assert!(matches!(
            "rivals".parse::<RelationshipType>(),
            Err(InputError::UnknownRelationship(_))
        ));
    }

    #[test]
    fn test_window_serializes_type_field() {
        let window = TimeWindow {
            date: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
            window_type: WindowType::Tension,
            score: 30,
            description: "x".into(),
            affected_pillar: Pillar::Western,
            element_of_day: Element::Water,
        };
        let json = serde_json::to_value(&window).unwrap();
        assert_eq!(json["type"], "TENSION");
        assert_eq!(json["affectedPillar"], "western");
        assert_eq!(json["date"], "2026-10-18");
    }
}
