//! Application configuration.
//!
//! Loaded from a TOML file in the platform config directory, then
//! overridden from `INTERVALS_ICU_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default Intervals.icu athlete API root.
pub const DEFAULT_BASE_URL: &str = "https://intervals.icu/api/v1/athlete";

/// Default plan file, relative to the working directory.
pub const DEFAULT_PLAN_FILE: &str = "trainings.json";

pub const ENV_ATHLETE_ID: &str = "INTERVALS_ICU_ATHLETE_ID";
pub const ENV_API_KEY: &str = "INTERVALS_ICU_API_KEY";
pub const ENV_BASE_URL: &str = "INTERVALS_ICU_BASE_URL";
pub const ENV_ZONE_TYPE: &str = "INTERVALS_ICU_ZONE_TYPE";

/// Which metric the plan's zone labels refer to.
///
/// Read through [`FromStr`](std::str::FromStr) from both TOML and the
/// environment, so the same spellings work in either place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ZoneType {
    /// Heart rate zones (default)
    #[default]
    #[serde(rename = "HR")]
    HeartRate,
    /// Pace zones
    Pace,
    /// Power zones
    Power,
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneType::HeartRate => write!(f, "HR"),
            ZoneType::Pace => write!(f, "Pace"),
            ZoneType::Power => write!(f, "Power"),
        }
    }
}

impl std::str::FromStr for ZoneType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hr" | "heart_rate" => Ok(ZoneType::HeartRate),
            "pace" => Ok(ZoneType::Pace),
            "power" => Ok(ZoneType::Power),
            other => Err(ConfigError::InvalidValue {
                field: "zone_type".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for ZoneType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Intervals.icu account settings
    pub intervals: IntervalsSettings,
    /// Input file settings
    pub input: InputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            intervals: IntervalsSettings::default(),
            input: InputSettings::default(),
        }
    }
}

/// Intervals.icu account settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalsSettings {
    /// Athlete identifier, e.g. `i12345`
    pub athlete_id: String,
    /// Personal API key from the Intervals.icu settings page
    pub api_key: String,
    /// API root up to and including `/athlete`
    pub base_url: String,
    /// Metric the zone labels in plan files refer to
    pub zone_type: ZoneType,
    /// Request timeout; none means the HTTP client default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for IntervalsSettings {
    fn default() -> Self {
        Self {
            athlete_id: String::new(),
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            zone_type: ZoneType::default(),
            timeout_secs: None,
        }
    }
}

impl IntervalsSettings {
    /// Check that credentials needed for an upload are present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.athlete_id.trim().is_empty() {
            return Err(ConfigError::MissingValue("intervals.athlete_id".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingValue("intervals.api_key".to_string()));
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("intervals.base_url".to_string()));
        }
        Ok(())
    }

    /// Copy with the API key masked, for display.
    pub fn redacted(&self) -> Self {
        let api_key = if self.api_key.is_empty() {
            String::new()
        } else {
            "********".to_string()
        };
        Self {
            api_key,
            ..self.clone()
        }
    }
}

/// Input file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Plan file used when none is given on the command line
    pub default_plan: PathBuf,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            default_plan: PathBuf::from(DEFAULT_PLAN_FILE),
        }
    }
}

impl AppConfig {
    /// Apply environment overrides through `lookup`.
    ///
    /// Taking the lookup as a parameter keeps tests independent of the
    /// process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_ATHLETE_ID) {
            self.intervals.athlete_id = id;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.intervals.api_key = key;
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.intervals.base_url = url;
        }
        if let Some(zone) = lookup(ENV_ZONE_TYPE) {
            self.intervals.zone_type = zone.parse()?;
        }
        Ok(())
    }
}

/// Get the application configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "rustride", "RustRidePlanSync")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load application configuration from a file.
///
/// A missing file yields the defaults. Environment overrides are not
/// applied here; see [`load_config`].
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config file at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load configuration from `path` (or the default location) and apply
/// environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);
    let mut config = load_config_file(&path)?;
    config.apply_overrides(|key| std::env::var(key).ok())?;
    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),

    #[error("Missing configuration value: {0}")]
    MissingValue(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}
