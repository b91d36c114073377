//! Concordia engine.
//!
//! Wires the pillar calculators behind the [`Concordia`] facade, resolves
//! charts through an ordered provider chain that always yields a profile and
//! wraps the geocoding and timezone collaborators with timeouts and fallbacks.

pub mod cache_keys;
pub mod engine;
pub mod error;
pub mod location;
pub mod providers;

pub use cache_keys::{profile_cache_key, synastry_cache_key};
pub use engine::{Concordia, LocatedBirth};
pub use error::ProviderError;
pub use location::{
    longitude_offset_hours, GeoCache, GeoResolver, InMemoryGeoCache, LocationService,
    ResolvedLocation, TimezoneResolver,
};
pub use providers::{
    ChartProvider, ChartProviderChain, ChartRequest, ChartResolution, ChartSource,
    LocalChartProvider, ProfessionalChartProvider, ProfessionalEphemerisClient, ProviderFailure,
};
