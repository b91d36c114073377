use super::{ChartProvider, ChartRequest, ChartSource};
use crate::error::ProviderError;
use async_trait::async_trait;
use chrono::Datelike;
use concordia_types::AstrologyProfile;
use std::ops::RangeInclusive;
use urania::ChartBuilder;

/// Years the analytic ephemeris is trusted for.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = -1000..=3000;

/// Local analytic ephemeris with whole-sign houses.
#[derive(Debug, Clone, Default)]
pub struct LocalChartProvider {
    builder: ChartBuilder,
}

impl LocalChartProvider {
    pub fn new(builder: ChartBuilder) -> Self {
        Self { builder }
    }
}

#[async_trait]
impl ChartProvider for LocalChartProvider {
    fn name(&self) -> &str {
        "local"
    }

    fn source(&self) -> ChartSource {
        ChartSource::Local
    }

    fn precondition(&self, request: &ChartRequest) -> Result<(), ProviderError> {
        let year = request.birth.date.year();
        if SUPPORTED_YEARS.contains(&year) {
            Ok(())
        } else {
            Err(ProviderError::PreconditionFailed {
                provider: self.name().to_string(),
                reason: format!("year {year} outside {SUPPORTED_YEARS:?}"),
            })
        }
    }

    async fn chart(&self, request: &ChartRequest) -> Result<AstrologyProfile, ProviderError> {
        Ok(self.builder.build_for_birth(&request.birth)?)
    }
}
