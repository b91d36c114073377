//! Shared record types for the Concordia calculation layer.
//!
//! Every calculator crate consumes and produces these records, so engine entry
//! points only ever see typed data rather than loosely shaped maps.

pub mod birth;
pub mod body;
pub mod calendar;
pub mod error;
pub mod numerology;
pub mod pillars;
pub mod profile;
pub mod synastry;
pub mod zodiac;

pub use birth::{parse_hhmm, parse_iso_date, BirthData, GeoPoint};
pub use body::Body;
pub use calendar::{
    ChineseAnimal, ChineseElement, ChineseSign, MayanDaySign, Nawal, Polarity, ANIMAL_ORDER,
    NAWAL_ORDER,
};
pub use error::InputError;
pub use numerology::{NumerologyProfile, NumerologySlot, PinnaclePyramid};
pub use pillars::PersonPillars;
pub use profile::{AstrologyProfile, CelestialBody, ElementBalance, ModalityBalance};
pub use synastry::{
    HouseOverlay, Pillar, PillarBreakdown, PillarWeights, RelationalIndices, RelationshipType,
    SynastryReport, SynastryWeights, TimeWindow, WindowType,
};
pub use zodiac::{normalize_degrees, Element, Modality, ZodiacSign, SIGN_ORDER};
