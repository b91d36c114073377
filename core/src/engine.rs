//! The `Concordia` facade: the collaborator-facing entry points.

use crate::location::{longitude_offset_hours, LocationService, ResolvedLocation};
use crate::providers::{
    ChartProviderChain, ChartRequest, ChartResolution, LocalChartProvider,
    ProfessionalChartProvider, ProfessionalEphemerisClient,
};
use almanac::{ChineseZodiacCalculator, MayanDaySignCalculator};
use anyhow::Context;
use arithmos::NumerologyCalculator;
use chrono::{NaiveDate, Utc};
use concordia_config::EngineSettings;
use concordia_types::{
    parse_hhmm, parse_iso_date, AstrologyProfile, BirthData, ChineseSign, InputError,
    MayanDaySign, NumerologyProfile, PersonPillars, RelationshipType, SynastryReport, TimeWindow,
};
use std::sync::Arc;
use synastry::{
    SynastryScoringEngine, SynastryWeightEngine, TemporalProjectionEngine, WeightError,
};
use urania::ChartBuilder;

/// A birth moment plus how its location was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedBirth {
    pub birth: BirthData,
    pub location: ResolvedLocation,
}

pub struct Concordia {
    settings: EngineSettings,
    chain: ChartProviderChain,
    professional: Option<Arc<dyn ProfessionalEphemerisClient>>,
    location: Option<LocationService>,
    weights: SynastryWeightEngine,
    scoring: SynastryScoringEngine,
    projection: TemporalProjectionEngine,
    numerology: NumerologyCalculator,
    mayan: MayanDaySignCalculator,
    chinese: ChineseZodiacCalculator,
}

impl Concordia {
    pub fn new(settings: EngineSettings) -> Result<Self, WeightError> {
        let mut weights = SynastryWeightEngine::new();
        for (relationship, override_weights) in &settings.weight_overrides {
            weights = weights.with_override(*relationship, override_weights.clone())?;
        }
        let chain = build_chain(&settings, None);
        let projection = TemporalProjectionEngine::new(settings.projection_days);
        Ok(Self {
            settings,
            chain,
            professional: None,
            location: None,
            weights,
            scoring: SynastryScoringEngine::new(),
            projection,
            numerology: NumerologyCalculator::new(),
            mayan: MayanDaySignCalculator::new(),
            chinese: ChineseZodiacCalculator::new(),
        })
    }

    /// Engine configured from the discovered `concordia.toml`, or defaults.
    pub fn from_config() -> anyhow::Result<Self> {
        let settings = concordia_config::load_settings()?;
        Self::new(settings).context("Invalid synastry weight override")
    }

    /// Installs the professional tier. It only joins the chain when
    /// `providers.professional_enabled` is set.
    pub fn with_professional_client(mut self, client: Arc<dyn ProfessionalEphemerisClient>) -> Self {
        self.chain = build_chain(&self.settings, Some(client.clone()));
        self.professional = Some(client);
        self
    }

    pub fn with_location_service(mut self, service: LocationService) -> Self {
        self.location = Some(service);
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn has_professional_client(&self) -> bool {
        self.professional.is_some()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.provider_names()
    }

    /// Chart entry point. Only malformed input is an error; provider failures
    /// degrade through the chain down to the emergency chart.
    pub async fn calculate_profile(
        &self,
        birth_date_iso: &str,
        birth_time_hhmm: &str,
        latitude: f64,
        longitude: f64,
        utc_offset_hours: f64,
    ) -> Result<ChartResolution, InputError> {
        let birth = BirthData::parse(
            birth_date_iso,
            birth_time_hhmm,
            latitude,
            longitude,
            utc_offset_hours,
        )?;
        Ok(self.resolve_chart(&birth).await)
    }

    pub async fn resolve_chart(&self, birth: &BirthData) -> ChartResolution {
        self.chain.resolve(&ChartRequest::new(birth.clone())).await
    }

    /// Builds birth data from a place name. Without a location service the
    /// configured fallback point and a longitude-derived offset are used.
    pub async fn locate_birth(
        &self,
        birth_date_iso: &str,
        birth_time_hhmm: &str,
        place: &str,
    ) -> Result<LocatedBirth, InputError> {
        let date = parse_iso_date(birth_date_iso)?;
        let time = parse_hhmm(birth_time_hhmm)?;
        let location = match &self.location {
            Some(service) => service.resolve(place, date.and_time(time)).await,
            None => {
                log::warn!("no location service configured; using fallback for '{place}'");
                let point = self.settings.geocoding.fallback;
                ResolvedLocation {
                    point,
                    utc_offset_hours: longitude_offset_hours(point.lng),
                    degraded: true,
                }
            }
        };
        let birth = BirthData::new(date, time, location.point, location.utc_offset_hours)?;
        Ok(LocatedBirth { birth, location })
    }

    pub fn calculate_numerology(
        &self,
        birth_date_iso: &str,
        name: &str,
    ) -> Result<NumerologyProfile, InputError> {
        let date = parse_iso_date(birth_date_iso)?;
        Ok(self.numerology.profile(date, name))
    }

    pub fn calculate_mayan_sign(&self, birth_date_iso: &str) -> Result<MayanDaySign, InputError> {
        Ok(self.mayan.day_sign(parse_iso_date(birth_date_iso)?))
    }

    pub fn calculate_chinese_sign(&self, birth_date_iso: &str) -> Result<ChineseSign, InputError> {
        Ok(self.chinese.sign(parse_iso_date(birth_date_iso)?))
    }

    /// All four pillars for one person.
    pub async fn calculate_pillars(&self, birth: &BirthData, name: &str) -> PersonPillars {
        let resolution = self.resolve_chart(birth).await;
        if resolution.is_degraded() {
            log::info!(
                "pillars for {} use a {:?} chart",
                birth.date,
                resolution.source
            );
        }
        PersonPillars {
            astrology: resolution.profile,
            numerology: self.numerology.profile(birth.date, name),
            mayan: self.mayan.day_sign(birth.date),
            chinese: self.chinese.sign(birth.date),
        }
    }

    pub fn score_synastry(
        &self,
        a: &PersonPillars,
        b: &PersonPillars,
        relationship_type: RelationshipType,
    ) -> SynastryReport {
        let weights = self.weights.weights(relationship_type);
        self.scoring.score(a, b, relationship_type, &weights)
    }

    pub fn project_temporal_window(
        &self,
        a: &AstrologyProfile,
        b: &AstrologyProfile,
        start: NaiveDate,
    ) -> Vec<TimeWindow> {
        self.projection.project(a, b, start)
    }

    /// Projection starting at today's UTC date.
    pub fn project_from_today(&self, a: &AstrologyProfile, b: &AstrologyProfile) -> Vec<TimeWindow> {
        self.project_temporal_window(a, b, Utc::now().date_naive())
    }
}

fn build_chain(
    settings: &EngineSettings,
    professional: Option<Arc<dyn ProfessionalEphemerisClient>>,
) -> ChartProviderChain {
    let mut chain = ChartProviderChain::new();
    if let Some(client) = professional {
        if settings.providers.professional_enabled {
            chain = chain.with_provider(ProfessionalChartProvider::new(
                client,
                settings.providers.professional_timeout,
            ));
        } else {
            log::debug!("professional ephemeris client supplied but disabled in settings");
        }
    }
    chain.with_provider(LocalChartProvider::new(ChartBuilder::new(
        settings.ephemeris.retrograde_step_days,
    )))
}
