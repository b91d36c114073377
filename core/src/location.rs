//! Geocoding and timezone collaborators with timeouts, caching and fallbacks.

use crate::error::ProviderError;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use concordia_types::GeoPoint;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, place: &str) -> Result<GeoPoint, ProviderError>;
}

#[async_trait]
pub trait TimezoneResolver: Send + Sync {
    /// UTC offset in hours in effect at `local` for `point`.
    async fn utc_offset_hours(
        &self,
        point: GeoPoint,
        local: NaiveDateTime,
    ) -> Result<f64, ProviderError>;
}

/// Place-name cache. Entries live for the lifetime of the cache; there is no eviction.
pub trait GeoCache: Send + Sync {
    fn get(&self, place: &str) -> Option<GeoPoint>;
    fn insert(&self, place: &str, point: GeoPoint);
}

#[derive(Debug, Default)]
pub struct InMemoryGeoCache {
    entries: RwLock<HashMap<String, GeoPoint>>,
}

impl InMemoryGeoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cache_key(place: &str) -> String {
    place.trim().to_lowercase()
}

impl GeoCache for InMemoryGeoCache {
    fn get(&self, place: &str) -> Option<GeoPoint> {
        self.entries.read().ok()?.get(&cache_key(place)).copied()
    }

    fn insert(&self, place: &str, point: GeoPoint) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(cache_key(place), point);
            }
            Err(e) => log::warn!("geo cache lock poisoned, not caching '{place}': {e}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLocation {
    pub point: GeoPoint,
    pub utc_offset_hours: f64,
    /// True when coordinates or offset came from a fallback
    pub degraded: bool,
}

/// Offset implied by longitude alone: one hour per 15°.
pub fn longitude_offset_hours(lng: f64) -> f64 {
    (lng / 15.0).round()
}

pub struct LocationService {
    geo: Arc<dyn GeoResolver>,
    timezone: Arc<dyn TimezoneResolver>,
    cache: Arc<dyn GeoCache>,
    timeout: Duration,
    fallback: GeoPoint,
}

impl LocationService {
    pub fn new(
        geo: Arc<dyn GeoResolver>,
        timezone: Arc<dyn TimezoneResolver>,
        timeout: Duration,
        fallback: GeoPoint,
    ) -> Self {
        Self {
            geo,
            timezone,
            cache: Arc::new(InMemoryGeoCache::new()),
            timeout,
            fallback,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn GeoCache>) -> Self {
        self.cache = cache;
        self
    }

    async fn coordinates(&self, place: &str) -> Result<GeoPoint, ProviderError> {
        if let Some(hit) = self.cache.get(place) {
            return Ok(hit);
        }
        let point = tokio::time::timeout(self.timeout, self.geo.resolve(place))
            .await
            .map_err(|_| ProviderError::Timeout {
                provider: "geocoder".to_string(),
                after: self.timeout,
            })??;
        self.cache.insert(place, point);
        Ok(point)
    }

    async fn offset(&self, point: GeoPoint, local: NaiveDateTime) -> Result<f64, ProviderError> {
        let offset = tokio::time::timeout(self.timeout, self.timezone.utc_offset_hours(point, local))
            .await
            .map_err(|_| ProviderError::Timeout {
                provider: "timezone".to_string(),
                after: self.timeout,
            })??;
        if offset.is_finite() && offset.abs() <= 14.0 {
            Ok(offset)
        } else {
            Err(ProviderError::Timezone(format!("offset {offset} out of range")))
        }
    }

    /// Never fails: falls back to the configured point and a longitude offset.
    pub async fn resolve(&self, place: &str, local: NaiveDateTime) -> ResolvedLocation {
        let mut degraded = false;
        let point = match self.coordinates(place).await {
            Ok(point) => point,
            Err(e) => {
                log::warn!("geocoding '{place}' failed ({e}); using fallback location");
                degraded = true;
                self.fallback
            }
        };
        let utc_offset_hours = match self.offset(point, local).await {
            Ok(offset) => offset,
            Err(e) => {
                log::warn!("timezone lookup failed ({e}); deriving offset from longitude");
                degraded = true;
                longitude_offset_hours(point.lng)
            }
        };
        ResolvedLocation {
            point,
            utc_offset_hours,
            degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longitude_offset() {
        assert_eq!(longitude_offset_hours(-90.5069), -6.0);
        assert_eq!(longitude_offset_hours(0.0), 0.0);
        assert_eq!(longitude_offset_hours(139.7), 9.0);
    }

    #[test]
    fn test_cache_normalises_keys() {
        let cache = InMemoryGeoCache::new();
        let point = GeoPoint::new(14.6349, -90.5069).unwrap();
        cache.insert("  Guatemala City ", point);
        assert_eq!(cache.get("guatemala city"), Some(point));
        assert_eq!(cache.len(), 1);
        assert!(cache.get("Antigua").is_none());
    }
}
