use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Numerology record for one person.
///
/// Every reduced value lies in `1..=9` or is a master number (11, 22, 33).
/// Name-derived numbers are `None` when the supplied name has no letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path_number: u32,
    pub destiny_number: Option<u32>,
    pub soul_urge_number: Option<u32>,
    pub pinnacles: [u32; 4],
    pub pinnacle_pyramid: PinnaclePyramid,
}

impl NumerologyProfile {
    pub fn slot(&self, slot: NumerologySlot) -> Option<u32> {
        match slot {
            NumerologySlot::LifePath => Some(self.life_path_number),
            NumerologySlot::Destiny => self.destiny_number,
            NumerologySlot::SoulUrge => self.soul_urge_number,
            NumerologySlot::FirstPinnacle => Some(self.pinnacles[0]),
            NumerologySlot::SecondPinnacle => Some(self.pinnacles[1]),
            NumerologySlot::ThirdPinnacle => Some(self.pinnacles[2]),
            NumerologySlot::FourthPinnacle => Some(self.pinnacles[3]),
            NumerologySlot::PyramidApex => Some(self.pinnacle_pyramid.f),
            NumerologySlot::PyramidCrown => Some(self.pinnacle_pyramid.j),
        }
    }
}

/// The 19-node pinnacle pyramid.
///
/// A..C are the base (month, day, year); D..J the reduced bridges; K..N the
/// shadow (challenge) differences, which are never reduced; O..S the tantric
/// descent built from bridges and shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct PinnaclePyramid {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
    pub f: u32,
    pub g: u32,
    pub h: u32,
    pub i: u32,
    pub j: u32,
    pub k: u32,
    pub l: u32,
    pub m: u32,
    pub n: u32,
    pub o: u32,
    pub p: u32,
    pub q: u32,
    pub r: u32,
    pub s: u32,
}

impl PinnaclePyramid {
    /// Challenge nodes: raw absolute differences.
    pub const SHADOW_NODES: [char; 4] = ['K', 'L', 'M', 'N'];

    pub fn nodes(&self) -> [(char, u32); 19] {
        [
            ('A', self.a),
            ('B', self.b),
            ('C', self.c),
            ('D', self.d),
            ('E', self.e),
            ('F', self.f),
            ('G', self.g),
            ('H', self.h),
            ('I', self.i),
            ('J', self.j),
            ('K', self.k),
            ('L', self.l),
            ('M', self.m),
            ('N', self.n),
            ('O', self.o),
            ('P', self.p),
            ('Q', self.q),
            ('R', self.r),
            ('S', self.s),
        ]
    }
}

/// Numerology values that a synastry weight table can compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumerologySlot {
    LifePath,
    Destiny,
    SoulUrge,
    FirstPinnacle,
    SecondPinnacle,
    ThirdPinnacle,
    FourthPinnacle,
    PyramidApex,
    PyramidCrown,
}

impl NumerologySlot {
    pub const ALL: [NumerologySlot; 9] = [
        NumerologySlot::LifePath,
        NumerologySlot::Destiny,
        NumerologySlot::SoulUrge,
        NumerologySlot::FirstPinnacle,
        NumerologySlot::SecondPinnacle,
        NumerologySlot::ThirdPinnacle,
        NumerologySlot::FourthPinnacle,
        NumerologySlot::PyramidApex,
        NumerologySlot::PyramidCrown,
    ];

    pub fn key(self) -> &'static str {
        match self {
            NumerologySlot::LifePath => "lifePath",
            NumerologySlot::Destiny => "destiny",
            NumerologySlot::SoulUrge => "soulUrge",
            NumerologySlot::FirstPinnacle => "firstPinnacle",
            NumerologySlot::SecondPinnacle => "secondPinnacle",
            NumerologySlot::ThirdPinnacle => "thirdPinnacle",
            NumerologySlot::FourthPinnacle => "fourthPinnacle",
            NumerologySlot::PyramidApex => "pyramidApex",
            NumerologySlot::PyramidCrown => "pyramidCrown",
        }
    }
}

impl fmt::Display for NumerologySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NumerologySlot {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        NumerologySlot::ALL
            .iter()
            .copied()
            .find(|slot| slot.key().to_lowercase() == wanted)
            .ok_or_else(|| InputError::UnknownSlot(s.to_string()))
    }
}
