// config.rs
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Keyword phrase -> weight. Sorted so summing weights is deterministic.
pub type ScoringTable = BTreeMap<String, f64>;

/// Everything the pipeline is allowed to know about the outside world.
/// Built once, then only ever borrowed.
///
/// Each top-level section that is missing from a config file falls back to
/// the built-in default for that section. Inside a section, a missing bound
/// means "no constraint".
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub geo_targets: GeoTargets,
    pub filters: FilterThresholds,
    pub lead_scoring: ScoringTable,
    pub scraper_settings: ScraperSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoTargets {
    pub states: Vec<String>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FilterThresholds {
    pub price: Bounds,
    pub revenue: Bounds,
    pub cash_flow: Bounds,
}

/// Inclusive dollar bounds. `max` is only consulted for price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Bounds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScraperSettings {
    pub max_leads_per_run: usize,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            max_leads_per_run: 50,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

        let lead_scoring = [
            ("retiring", 2.0),
            ("must sell", 2.0),
            ("no broker", 2.0),
            ("turnkey", 1.5),
            ("low overhead", 1.0),
            ("absentee owner", 1.0),
            ("owner operated", 1.0),
            ("missing_contact", -1.0),
            ("price_above_max", -2.0),
        ]
        .into_iter()
        .map(|(k, w)| (k.to_string(), w))
        .collect();

        Self {
            geo_targets: GeoTargets {
                states: strings(&["Florida", "Michigan"]),
                cities: strings(&[
                    "Miami",
                    "Orlando",
                    "Tampa",
                    "Jacksonville",
                    "Detroit",
                    "Grand Rapids",
                    "Ann Arbor",
                    "Lansing",
                ]),
            },
            filters: FilterThresholds {
                price: Bounds {
                    min: Some(10_000),
                    max: Some(1_000_000),
                },
                revenue: Bounds {
                    min: Some(50_000),
                    max: None,
                },
                cash_flow: Bounds {
                    min: Some(25_000),
                    max: None,
                },
            },
            lead_scoring,
            scraper_settings: ScraperSettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scraper_settings.max_leads_per_run == 0 {
            return Err(ConfigError::Invalid(
                "scraper_settings.max_leads_per_run must be positive".into(),
            ));
        }

        if let (Some(min), Some(max)) = (self.filters.price.min, self.filters.price.max) {
            if min > max {
                return Err(ConfigError::Invalid(format!(
                    "filters.price.min ({min}) is above filters.price.max ({max})"
                )));
            }
        }

        if let Some((keyword, weight)) = self.lead_scoring.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "lead_scoring weight for {keyword:?} is not a finite number ({weight})"
            )));
        }

        Ok(())
    }
}

/// Read and validate a single config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    config.validate()?;
    Ok(config)
}

/// Where to look for a config file, most specific first.
pub fn candidate_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
    }
    paths.push(PathBuf::from("config.json"));
    paths.push(PathBuf::from("/app/config.json"));
    paths
}

/// Config for a run: the explicit path if it is usable, then the usual
/// candidates, then defaults. Only a missing explicit path is warned about.
pub fn resolve_config(explicit: Option<&Path>) -> Config {
    if let Some(path) = explicit.filter(|p| !p.exists()) {
        warn!(path = %path.display(), "config file does not exist, trying fallbacks");
    }
    load_config(&candidate_paths(explicit))
}

/// First candidate that exists and parses wins. Anything broken is logged
/// and skipped; with nothing usable the built-in defaults are returned.
pub fn load_config(candidates: &[PathBuf]) -> Config {
    for path in candidates {
        if !path.exists() {
            continue;
        }

        match read_config(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded config");
                return config;
            }
            Err(e) => {
                warn!(error = %e, "skipping config file");
            }
        }
    }

    warn!("no usable config file found, using default configuration");
    Config::default()
}
