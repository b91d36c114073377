use thiserror::Error;

/// Rejections raised while turning raw caller input into typed records.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("invalid date '{input}': expected ISO YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("invalid time '{input}': expected HH:mm (24h)")]
    InvalidTime { input: String },
    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("UTC offset {0}h outside [-14, 14]")]
    OffsetOutOfRange(f64),
    #[error("local time {local} with offset {offset}h is not representable")]
    UnrepresentableInstant { local: String, offset: f64 },
    #[error("unknown relationship type '{0}'. Valid types: romantic, business, parental, fraternal")]
    UnknownRelationship(String),
    #[error("unknown zodiac sign '{0}'")]
    UnknownSign(String),
    #[error("unknown celestial body '{0}'")]
    UnknownBody(String),
    #[error("unknown numerology slot '{0}'")]
    UnknownSlot(String),
}
