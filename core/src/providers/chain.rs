use super::{ChartProvider, ChartRequest, ChartSource};
use crate::error::ProviderError;
use concordia_types::AstrologyProfile;
use serde::Serialize;
use urania::emergency_profile;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFailure {
    pub provider: String,
    pub error: String,
}

/// A chart plus the trail of providers that failed before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResolution {
    pub profile: AstrologyProfile,
    pub source: ChartSource,
    pub failures: Vec<ProviderFailure>,
}

impl ChartResolution {
    pub fn is_degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Tries providers in order; the emergency chart terminates the chain, so
/// resolution always yields a well-formed profile.
#[derive(Default)]
pub struct ChartProviderChain {
    providers: Vec<Box<dyn ChartProvider>>,
}

impl ChartProviderChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_provider(mut self, provider: impl ChartProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn resolve(&self, request: &ChartRequest) -> ChartResolution {
        let mut failures = Vec::new();
        for provider in &self.providers {
            let attempt = match provider.precondition(request) {
                Ok(()) => provider.chart(request).await,
                Err(e) => Err(e),
            };
            match attempt {
                Ok(profile) => {
                    log::debug!("chart resolved by {}", provider.name());
                    return ChartResolution {
                        profile,
                        source: provider.source(),
                        failures,
                    };
                }
                Err(e) => {
                    log::warn!("chart provider {} failed: {}", provider.name(), e);
                    failures.push(failure(provider.name(), &e));
                }
            }
        }

        log::error!(
            "all {} chart providers failed; returning emergency chart",
            self.providers.len()
        );
        ChartResolution {
            profile: emergency_profile(),
            source: ChartSource::Emergency,
            failures,
        }
    }
}

fn failure(provider: &str, error: &ProviderError) -> ProviderFailure {
    ProviderFailure {
        provider: provider.to_string(),
        error: error.to_string(),
    }
}
