//! Mayan Tzolk'in and Chinese zodiac records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The 20 Tzolk'in day-signs, K'iche' names, in count order starting at Imox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nawal {
    Imox,
    #[serde(rename = "Iq'")]
    Iq,
    #[serde(rename = "Aq'ab'al")]
    Aqabal,
    #[serde(rename = "K'at")]
    Kat,
    Kan,
    Kame,
    Kej,
    #[serde(rename = "Q'anil")]
    Qanil,
    Toj,
    #[serde(rename = "Tz'i'")]
    Tzi,
    #[serde(rename = "B'atz'")]
    Batz,
    E,
    Aj,
    #[serde(rename = "I'x")]
    Ix,
    #[serde(rename = "Tz'ikin")]
    Tzikin,
    Ajmaq,
    #[serde(rename = "No'j")]
    Noj,
    Tijax,
    Kawoq,
    Ajpu,
}

pub const NAWAL_ORDER: [Nawal; 20] = [
    Nawal::Imox,
    Nawal::Iq,
    Nawal::Aqabal,
    Nawal::Kat,
    Nawal::Kan,
    Nawal::Kame,
    Nawal::Kej,
    Nawal::Qanil,
    Nawal::Toj,
    Nawal::Tzi,
    Nawal::Batz,
    Nawal::E,
    Nawal::Aj,
    Nawal::Ix,
    Nawal::Tzikin,
    Nawal::Ajmaq,
    Nawal::Noj,
    Nawal::Tijax,
    Nawal::Kawoq,
    Nawal::Ajpu,
];

impl Nawal {
    pub fn from_index(index: usize) -> Self {
        NAWAL_ORDER[index % 20]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Forward steps from `self` to `other` around the 20-sign ring (0..20).
    pub fn cyclic_distance(self, other: Nawal) -> usize {
        (other.index() + 20 - self.index()) % 20
    }

    pub fn name(self) -> &'static str {
        match self {
            Nawal::Imox => "Imox",
            Nawal::Iq => "Iq'",
            Nawal::Aqabal => "Aq'ab'al",
            Nawal::Kat => "K'at",
            Nawal::Kan => "Kan",
            Nawal::Kame => "Kame",
            Nawal::Kej => "Kej",
            Nawal::Qanil => "Q'anil",
            Nawal::Toj => "Toj",
            Nawal::Tzi => "Tz'i'",
            Nawal::Batz => "B'atz'",
            Nawal::E => "E",
            Nawal::Aj => "Aj",
            Nawal::Ix => "I'x",
            Nawal::Tzikin => "Tz'ikin",
            Nawal::Ajmaq => "Ajmaq",
            Nawal::Noj => "No'j",
            Nawal::Tijax => "Tijax",
            Nawal::Kawoq => "Kawoq",
            Nawal::Ajpu => "Ajpu",
        }
    }
}

impl fmt::Display for Nawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MayanDaySign {
    pub nawal: Nawal,
    /// 1..=13
    pub tone: u8,
    /// Position in the 260-day count, 1..=260 (1 Imox = 1)
    pub day_number: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// Cycle order; 1900 was a Rat year.
pub const ANIMAL_ORDER: [ChineseAnimal; 12] = [
    ChineseAnimal::Rat,
    ChineseAnimal::Ox,
    ChineseAnimal::Tiger,
    ChineseAnimal::Rabbit,
    ChineseAnimal::Dragon,
    ChineseAnimal::Snake,
    ChineseAnimal::Horse,
    ChineseAnimal::Goat,
    ChineseAnimal::Monkey,
    ChineseAnimal::Rooster,
    ChineseAnimal::Dog,
    ChineseAnimal::Pig,
];

impl ChineseAnimal {
    pub fn from_index(index: usize) -> Self {
        ANIMAL_ORDER[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Trine group 0..4: animals four places apart share a group.
    pub fn trine_group(self) -> usize {
        self.index() % 4
    }

    /// The animal six places away.
    pub fn opposite(self) -> ChineseAnimal {
        Self::from_index(self.index() + 6)
    }
}

impl fmt::Display for ChineseAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    Metal,
    Water,
    Wood,
    Fire,
    Earth,
}

impl ChineseElement {
    /// Heavenly-stem element from the last digit of the year.
    pub fn from_year(year: i32) -> Self {
        match year.rem_euclid(10) {
            0 | 1 => ChineseElement::Metal,
            2 | 3 => ChineseElement::Water,
            4 | 5 => ChineseElement::Wood,
            6 | 7 => ChineseElement::Fire,
            _ => ChineseElement::Earth,
        }
    }
}

impl fmt::Display for ChineseElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub fn from_year(year: i32) -> Self {
        if year.rem_euclid(2) == 0 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChineseSign {
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub polarity: Polarity,
    pub effective_year: i32,
}
