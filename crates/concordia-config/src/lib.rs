use concordia_types::{
    Body, GeoPoint, NumerologySlot, PillarWeights, RelationshipType, SynastryWeights,
};
use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use synastry::{default_weights, validate_weights, DEFAULT_PROJECTION_DAYS};

pub const CONFIG_ENV_VAR: &str = "CONCORDIA_CONFIG";
const CONFIG_PATHS: [&str; 2] = ["configs/concordia.toml", "../../configs/concordia.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSettings {
    pub retrograde_step_days: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    pub professional_enabled: bool,
    pub professional_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodingSettings {
    pub timeout: Duration,
    pub fallback: GeoPoint,
}

/// Typed engine settings. `Default` matches an absent config file.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub ephemeris: EphemerisSettings,
    pub providers: ProviderSettings,
    pub geocoding: GeocodingSettings,
    pub projection_days: usize,
    pub weight_overrides: BTreeMap<RelationshipType, SynastryWeights>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            ephemeris: EphemerisSettings {
                retrograde_step_days: default_retrograde_step(),
            },
            providers: ProviderSettings {
                professional_enabled: false,
                professional_timeout: Duration::from_millis(default_professional_timeout_ms()),
            },
            geocoding: GeocodingSettings {
                timeout: Duration::from_millis(default_geocoding_timeout_ms()),
                fallback: GeoPoint {
                    lat: default_fallback_latitude(),
                    lng: default_fallback_longitude(),
                },
            },
            projection_days: DEFAULT_PROJECTION_DAYS,
            weight_overrides: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default = "default_retrograde_step")]
    retrograde_step_days: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ProvidersToml {
    #[serde(default)]
    professional_enabled: bool,
    #[serde(default = "default_professional_timeout_ms")]
    professional_timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct GeocodingToml {
    #[serde(default = "default_geocoding_timeout_ms")]
    timeout_ms: u64,
    #[serde(default = "default_fallback_latitude")]
    fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    fallback_longitude: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectionToml {
    #[serde(default = "default_projection_days")]
    days: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct PillarsToml {
    western: f64,
    numerology: f64,
    mayan: f64,
    chinese: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct WeightsToml {
    pillars: PillarsToml,
    #[serde(default)]
    bodies: Option<HashMap<String, f64>>,
    #[serde(default)]
    houses: Option<HashMap<String, f64>>,
    #[serde(default)]
    numerology: Option<HashMap<String, f64>>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
    #[serde(default)]
    providers: Option<ProvidersToml>,
    #[serde(default)]
    geocoding: Option<GeocodingToml>,
    #[serde(default)]
    projection: Option<ProjectionToml>,
    #[serde(default)]
    weights: HashMap<String, WeightsToml>,
}

fn default_retrograde_step() -> f64 {
    1.0
}

fn default_professional_timeout_ms() -> u64 {
    4000
}

fn default_geocoding_timeout_ms() -> u64 {
    3000
}

fn default_fallback_latitude() -> f64 {
    14.6349
}

fn default_fallback_longitude() -> f64 {
    -90.5069
}

fn default_projection_days() -> usize {
    DEFAULT_PROJECTION_DAYS
}

/// Locate the config file: `$CONCORDIA_CONFIG`, then the usual relative paths.
/// An explicitly named file that is missing is an error; otherwise `None`.
pub fn find_config_path() -> anyhow::Result<Option<PathBuf>> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(explicit);
        if !path.exists() {
            anyhow::bail!(
                "{} points at {}, which does not exist",
                CONFIG_ENV_VAR,
                path.display()
            );
        }
        return Ok(Some(path));
    }
    Ok(CONFIG_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists()))
}

pub fn load_settings() -> anyhow::Result<EngineSettings> {
    match find_config_path()? {
        Some(path) => load_settings_from(&path),
        None => {
            log::debug!("no concordia.toml found in {:?}; using defaults", CONFIG_PATHS);
            Ok(EngineSettings::default())
        }
    }
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<EngineSettings> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_settings(&text).with_context(|| format!("Invalid config {}", path.display()))
}

pub fn parse_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text).context("Failed to parse concordia.toml")?;
    let defaults = EngineSettings::default();

    let ephemeris = match root.ephemeris {
        Some(cfg) => {
            if !(cfg.retrograde_step_days.is_finite() && cfg.retrograde_step_days > 0.0) {
                anyhow::bail!(
                    "ephemeris.retrograde_step_days must be positive, got {}",
                    cfg.retrograde_step_days
                );
            }
            EphemerisSettings {
                retrograde_step_days: cfg.retrograde_step_days,
            }
        }
        None => defaults.ephemeris,
    };

    let providers = match root.providers {
        Some(cfg) => {
            if cfg.professional_timeout_ms == 0 {
                anyhow::bail!("providers.professional_timeout_ms must be greater than zero");
            }
            ProviderSettings {
                professional_enabled: cfg.professional_enabled,
                professional_timeout: Duration::from_millis(cfg.professional_timeout_ms),
            }
        }
        None => defaults.providers,
    };

    let geocoding = match root.geocoding {
        Some(cfg) => {
            if cfg.timeout_ms == 0 {
                anyhow::bail!("geocoding.timeout_ms must be greater than zero");
            }
            let fallback = GeoPoint::new(cfg.fallback_latitude, cfg.fallback_longitude)
                .context("geocoding fallback")?;
            GeocodingSettings {
                timeout: Duration::from_millis(cfg.timeout_ms),
                fallback,
            }
        }
        None => defaults.geocoding,
    };

    let projection_days = match root.projection {
        Some(cfg) if cfg.days == 0 || cfg.days > 366 => {
            anyhow::bail!("projection.days must be within 1..=366, got {}", cfg.days)
        }
        Some(cfg) => cfg.days,
        None => defaults.projection_days,
    };

    let mut weight_overrides = BTreeMap::new();
    for (key, cfg) in root.weights {
        let relationship: RelationshipType = key
            .parse()
            .with_context(|| format!("[weights.{key}]"))?;
        let weights = build_override(relationship, cfg)?;
        validate_weights(relationship, &weights).with_context(|| format!("[weights.{key}]"))?;
        weight_overrides.insert(relationship, weights);
    }

    Ok(EngineSettings {
        ephemeris,
        providers,
        geocoding,
        projection_days,
        weight_overrides,
    })
}

/// Start from the built-in table; any map given in the file replaces the
/// corresponding default map wholesale.
fn build_override(
    relationship: RelationshipType,
    cfg: WeightsToml,
) -> anyhow::Result<SynastryWeights> {
    let mut weights = default_weights(relationship);
    weights.pillars = PillarWeights {
        western: cfg.pillars.western,
        numerology: cfg.pillars.numerology,
        mayan: cfg.pillars.mayan,
        chinese: cfg.pillars.chinese,
    };
    if let Some(bodies) = cfg.bodies {
        weights.celestial_bodies = bodies
            .into_iter()
            .map(|(k, v)| {
                k.parse::<Body>()
                    .map(|b| (b, v))
                    .with_context(|| format!("[weights.{relationship}] bodies"))
            })
            .collect::<anyhow::Result<_>>()?;
    }
    if let Some(houses) = cfg.houses {
        weights.houses = houses
            .into_iter()
            .map(|(k, v)| {
                k.trim()
                    .parse::<u8>()
                    .map(|h| (h, v))
                    .with_context(|| format!("[weights.{relationship}] bad house key '{k}'"))
            })
            .collect::<anyhow::Result<_>>()?;
    }
    if let Some(slots) = cfg.numerology {
        weights.numerology_slots = slots
            .into_iter()
            .map(|(k, v)| {
                k.parse::<NumerologySlot>()
                    .map(|s| (s, v))
                    .with_context(|| format!("[weights.{relationship}] numerology"))
            })
            .collect::<anyhow::Result<_>>()?;
    }
    Ok(weights)
}
