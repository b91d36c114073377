use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use concordia_config::EngineSettings;
use concordia_core::{
    ChartSource, Concordia, GeoResolver, LocationService, ProviderError, TimezoneResolver,
};
use concordia_types::{
    BirthData, ChineseAnimal, GeoPoint, InputError, Nawal, PillarWeights, RelationshipType,
    WindowType, ZodiacSign,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn engine() -> Concordia {
    Concordia::new(EngineSettings::default()).unwrap()
}

struct CountingGeocoder {
    calls: AtomicUsize,
    point: Option<GeoPoint>,
}

#[async_trait]
impl GeoResolver for CountingGeocoder {
    async fn resolve(&self, place: &str) -> Result<GeoPoint, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.point
            .ok_or_else(|| ProviderError::Geocoding(format!("no match for '{place}'")))
    }
}

struct FixedTimezone(Option<f64>);

#[async_trait]
impl TimezoneResolver for FixedTimezone {
    async fn utc_offset_hours(
        &self,
        _point: GeoPoint,
        _local: NaiveDateTime,
    ) -> Result<f64, ProviderError> {
        match self.0 {
            Some(offset) => Ok(offset),
            None => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Ok(0.0)
            }
        }
    }
}

fn local_noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1990, 7, 29)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn test_calculate_profile_local_regression() {
    let resolution = engine()
        .calculate_profile("1990-07-29", "10:00", 14.6349, -90.5069, -5.0)
        .await
        .unwrap();

    assert_eq!(resolution.source, ChartSource::Local);
    assert_eq!(resolution.profile.rising_sign, ZodiacSign::Virgo);
    assert!((resolution.profile.rising.abs_degree - 171.677666).abs() < 0.01);
    let e = resolution.profile.elements;
    assert_eq!(e.fire + e.earth + e.air + e.water, 100);
}

#[tokio::test]
async fn test_calculate_profile_rejects_bad_input() {
    let err = engine()
        .calculate_profile("29/07/1990", "10:00", 14.6, -90.5, -5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, InputError::InvalidDate { .. }));

    let err = engine()
        .calculate_profile("1990-07-29", "10:00", 95.0, -90.5, -5.0)
        .await
        .unwrap_err();
    assert!(matches!(err, InputError::LatitudeOutOfRange(_)));
}

#[test]
fn test_calendar_entry_points() {
    let engine = engine();
    let mayan = engine.calculate_mayan_sign("1990-07-29").unwrap();
    assert_eq!((mayan.nawal, mayan.tone), (Nawal::Kawoq, 13));

    let chinese = engine.calculate_chinese_sign("1990-07-29").unwrap();
    assert_eq!(chinese.animal, ChineseAnimal::Horse);

    let numerology = engine.calculate_numerology("1990-07-29", "").unwrap();
    assert_eq!(numerology.life_path_number, 1);
    assert_eq!(numerology.destiny_number, None);

    assert!(engine.calculate_mayan_sign("1990-13-01").is_err());
}

#[tokio::test]
async fn test_synastry_and_projection_end_to_end() {
    let engine = engine();
    let alice = BirthData::parse("1990-07-29", "10:00", 14.6349, -90.5069, -5.0).unwrap();
    let bruno = BirthData::parse("1987-12-04", "06:30", 40.4168, -3.7038, 1.0).unwrap();
    let a = engine.calculate_pillars(&alice, "Alice Moreno").await;
    let b = engine.calculate_pillars(&bruno, "Bruno Díaz").await;

    for relationship in RelationshipType::ALL {
        let report = engine.score_synastry(&a, &b, relationship);
        assert!(report.score <= 100);
        assert_eq!(report.relationship_type, relationship);
        assert!(!report.strengths.is_empty());
        assert!(!report.tensions.is_empty());
        assert!(!report.growth_areas.is_empty());
    }

    let forward = engine.score_synastry(&a, &b, RelationshipType::Romantic);
    let again = engine.score_synastry(&a, &b, RelationshipType::Romantic);
    assert_eq!(forward, again);

    let start = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let windows = engine.project_temporal_window(&a.astrology, &b.astrology, start);
    assert_eq!(windows.len(), 30);
    assert_eq!(windows[0].date, start);
    assert!(windows.iter().all(|w| w.score <= 100));
    assert_eq!(windows[29].date, NaiveDate::from_ymd_opt(2026, 11, 16).unwrap());
    assert!(windows
        .iter()
        .filter(|w| w.window_type == WindowType::Flow)
        .all(|w| w.score >= 75));
}

#[test]
fn test_invalid_weight_override_rejected() {
    let mut settings = EngineSettings::default();
    let mut weights = synastry::default_weights(RelationshipType::Business);
    weights.pillars = PillarWeights {
        western: 0.5,
        numerology: 0.5,
        mayan: 0.5,
        chinese: 0.5,
    };
    settings
        .weight_overrides
        .insert(RelationshipType::Business, weights);
    assert!(Concordia::new(settings).is_err());
}

#[tokio::test]
async fn test_override_changes_global_score_blend() {
    let mut settings = EngineSettings::default();
    let mut weights = synastry::default_weights(RelationshipType::Fraternal);
    weights.pillars = PillarWeights {
        western: 0.0,
        numerology: 0.0,
        mayan: 1.0,
        chinese: 0.0,
    };
    settings
        .weight_overrides
        .insert(RelationshipType::Fraternal, weights);
    let engine = Concordia::new(settings).unwrap();

    let alice = BirthData::parse("1990-07-29", "10:00", 14.6349, -90.5069, -5.0).unwrap();
    let a = engine.calculate_pillars(&alice, "Alice").await;
    let report = engine.score_synastry(&a, &a, RelationshipType::Fraternal);
    assert_eq!(report.pillar_breakdown.mayan, 100.0);
    assert_eq!(report.score, 100);
}

#[test]
fn test_professional_client_needs_enable_flag() {
    struct Unused;
    #[async_trait]
    impl concordia_core::ProfessionalEphemerisClient for Unused {
        async fn fetch_chart(&self, _birth: &BirthData) -> Result<String, ProviderError> {
            Err(ProviderError::Unavailable {
                provider: "unused".to_string(),
                message: "never called".to_string(),
            })
        }
    }

    let disabled = engine().with_professional_client(Arc::new(Unused));
    assert!(disabled.has_professional_client());
    assert_eq!(disabled.provider_names(), vec!["local"]);

    let mut settings = EngineSettings::default();
    settings.providers.professional_enabled = true;
    let enabled = Concordia::new(settings)
        .unwrap()
        .with_professional_client(Arc::new(Unused));
    assert_eq!(enabled.provider_names(), vec!["professional", "local"]);
}

#[tokio::test]
async fn test_location_service_caches_lookups() {
    let geocoder = Arc::new(CountingGeocoder {
        calls: AtomicUsize::new(0),
        point: Some(GeoPoint::new(40.4168, -3.7038).unwrap()),
    });
    let service = LocationService::new(
        geocoder.clone(),
        Arc::new(FixedTimezone(Some(2.0))),
        Duration::from_millis(100),
        GeoPoint::new(14.6349, -90.5069).unwrap(),
    );

    let first = service.resolve("Madrid", local_noon()).await;
    let second = service.resolve("  madrid", local_noon()).await;
    assert_eq!(first, second);
    assert!(!first.degraded);
    assert_eq!(first.utc_offset_hours, 2.0);
    assert_eq!(geocoder.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_location_service_falls_back() {
    let fallback = GeoPoint::new(14.6349, -90.5069).unwrap();
    let service = LocationService::new(
        Arc::new(CountingGeocoder {
            calls: AtomicUsize::new(0),
            point: None,
        }),
        Arc::new(FixedTimezone(None)),
        Duration::from_millis(50),
        fallback,
    );

    let resolved = service.resolve("Atlantis", local_noon()).await;
    assert!(resolved.degraded);
    assert_eq!(resolved.point, fallback);
    assert_eq!(resolved.utc_offset_hours, -6.0);
}

#[tokio::test]
async fn test_locate_birth_without_service_uses_fallback() {
    let located = engine()
        .locate_birth("1990-07-29", "10:00", "Guatemala City")
        .await
        .unwrap();
    assert!(located.location.degraded);
    assert_eq!(located.birth.location.lat, 14.6349);
    assert_eq!(located.birth.utc_offset_hours, -6.0);
}
