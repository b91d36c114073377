use super::{ChartProvider, ChartRequest, ChartSource};
use crate::error::ProviderError;
use async_trait::async_trait;
use concordia_types::{AstrologyProfile, BirthData};
use std::sync::Arc;
use std::time::Duration;
use urania::ProfessionalChart;

/// Transport for a professional ephemeris service. Implementations return the
/// raw JSON body; mapping and validation happen in the provider.
#[async_trait]
pub trait ProfessionalEphemerisClient: Send + Sync {
    async fn fetch_chart(&self, birth: &BirthData) -> Result<String, ProviderError>;
}

pub struct ProfessionalChartProvider {
    client: Arc<dyn ProfessionalEphemerisClient>,
    timeout: Duration,
}

impl ProfessionalChartProvider {
    pub fn new(client: Arc<dyn ProfessionalEphemerisClient>, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl ChartProvider for ProfessionalChartProvider {
    fn name(&self) -> &str {
        "professional"
    }

    fn source(&self) -> ChartSource {
        ChartSource::Professional
    }

    async fn chart(&self, request: &ChartRequest) -> Result<AstrologyProfile, ProviderError> {
        let body = tokio::time::timeout(self.timeout, self.client.fetch_chart(&request.birth))
            .await
            .map_err(|_| ProviderError::Timeout {
                provider: self.name().to_string(),
                after: self.timeout,
            })??;
        let chart = ProfessionalChart::from_json(&body)?;
        Ok(chart.into_profile()?)
    }
}
