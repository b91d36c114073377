//! Ordered chart providers: professional service, local engine, emergency chart.

pub mod chain;
pub mod local;
pub mod professional;

pub use chain::{ChartProviderChain, ChartResolution, ProviderFailure};
pub use local::LocalChartProvider;
pub use professional::{ProfessionalChartProvider, ProfessionalEphemerisClient};

use crate::error::ProviderError;
use async_trait::async_trait;
use concordia_types::{AstrologyProfile, BirthData};
use serde::{Deserialize, Serialize};

/// Where a resolved chart came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    Professional,
    Local,
    Emergency,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRequest {
    pub birth: BirthData,
}

impl ChartRequest {
    pub fn new(birth: BirthData) -> Self {
        Self { birth }
    }
}

/// One strategy in the chart fallback chain.
#[async_trait]
pub trait ChartProvider: Send + Sync {
    fn name(&self) -> &str;

    fn source(&self) -> ChartSource;

    /// Checked before `chart`; a failing precondition skips the provider.
    fn precondition(&self, _request: &ChartRequest) -> Result<(), ProviderError> {
        Ok(())
    }

    async fn chart(&self, request: &ChartRequest) -> Result<AstrologyProfile, ProviderError>;
}
