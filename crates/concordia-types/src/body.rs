use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bodies and chart angles tracked by a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
}

impl Body {
    /// Sun, Moon and the eight planets, in traditional order.
    pub const CELESTIAL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// The eight bodies stored in `AstrologyProfile::planets`.
    pub const PLANETS: [Body; 8] = [
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
            Body::Ascendant => "Ascendant",
            Body::Midheaven => "Midheaven",
        }
    }

    pub fn is_luminary(self) -> bool {
        matches!(self, Body::Sun | Body::Moon)
    }

    pub fn is_angle(self) -> bool {
        matches!(self, Body::Ascendant | Body::Midheaven)
    }

    /// Weight of this body's sign in the elemental and modality tallies.
    pub fn balance_weight(self) -> u32 {
        match self {
            Body::Sun | Body::Moon => 4,
            Body::Ascendant => 3,
            Body::Mercury | Body::Venus | Body::Mars => 2,
            Body::Jupiter | Body::Saturn | Body::Uranus | Body::Neptune | Body::Pluto => 1,
            Body::Midheaven => 0,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let body = match lower.as_str() {
            "sun" => Body::Sun,
            "moon" => Body::Moon,
            "mercury" => Body::Mercury,
            "venus" => Body::Venus,
            "mars" => Body::Mars,
            "jupiter" => Body::Jupiter,
            "saturn" => Body::Saturn,
            "uranus" => Body::Uranus,
            "neptune" => Body::Neptune,
            "pluto" => Body::Pluto,
            "ascendant" | "asc" | "rising" => Body::Ascendant,
            "midheaven" | "mc" => Body::Midheaven,
            _ => return Err(InputError::UnknownBody(s.to_string())),
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_weights_total() {
        let planets: u32 = Body::CELESTIAL.iter().map(|b| b.balance_weight()).sum();
        assert_eq!(planets + Body::Ascendant.balance_weight(), 22);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("ASC".parse::<Body>().unwrap(), Body::Ascendant);
        assert_eq!("mc".parse::<Body>().unwrap(), Body::Midheaven);
        assert_eq!("Venus".parse::<Body>().unwrap(), Body::Venus);
        assert!("chiron".parse::<Body>().is_err());
    }
}
