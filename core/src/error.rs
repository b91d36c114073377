use std::time::Duration;
use thiserror::Error;
use urania::EphemerisError;

/// Failures of external collaborators and chart providers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("{provider} timed out after {}ms", after.as_millis())]
    Timeout {
        provider: String,
        after: Duration,
    },
    #[error("{provider} unavailable: {message}")]
    Unavailable { provider: String, message: String },
    #[error("{provider} precondition not met: {reason}")]
    PreconditionFailed { provider: String, reason: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("geocoding failed: {0}")]
    Geocoding(String),
    #[error("timezone lookup failed: {0}")]
    Timezone(String),
}
