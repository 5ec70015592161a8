use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

use crate::{
    store::{CityKey, WeatherStore},
    tab::Tab,
};

/// Unit used when showing temperatures. Records are always stored in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a Celsius reading, rounding to the nearest degree.
    pub fn convert(&self, celsius: i32) -> i32 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => (f64::from(celsius) * 9.0 / 5.0 + 32.0).round() as i32,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }
}

impl TryFrom<&str> for TemperatureUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "celsius" | "c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(anyhow!("Unknown unit '{value}'. Supported units: celsius, fahrenheit.")),
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureUnit::Celsius => f.write_str("celsius"),
            TemperatureUnit::Fahrenheit => f.write_str("fahrenheit"),
        }
    }
}

fn default_animations() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    100
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// default_city = "Tokyo"
/// default_tab = "hourly"
/// units = "fahrenheit"
/// animations = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// City shown at startup; falls back to the store's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,

    #[serde(default)]
    pub default_tab: Tab,

    #[serde(default)]
    pub units: TemperatureUnit,

    #[serde(default = "default_animations")]
    pub animations: bool,

    /// Animation frame interval.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Alternative dataset to load instead of the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_city: None,
            default_tab: Tab::default(),
            units: TemperatureUnit::default(),
            animations: default_animations(),
            tick_rate_ms: default_tick_rate_ms(),
            data_file: None,
        }
    }
}

impl Config {
    /// Resolve the configured default city against a store.
    pub fn default_city_key(&self, store: &WeatherStore) -> Result<CityKey> {
        match &self.default_city {
            None => Ok(store.default_key()),
            Some(name) => store.key(name).ok_or_else(|| {
                anyhow!(
                    "Configured default city '{name}' is not in the weather data.\n\
                     Hint: run `weather-dash configure` to pick one of the available cities."
                )
            }),
        }
    }

    pub fn set_default_city(&mut self, key: &CityKey) {
        self.default_city = Some(key.to_string());
    }

    /// Load the store named by `data_file`, or the built-in one.
    pub fn load_store(&self) -> Result<WeatherStore> {
        match &self.data_file {
            Some(path) => WeatherStore::from_path(path)
                .with_context(|| format!("Failed to load weather data: {}", path.display())),
            None => WeatherStore::builtin().context("Built-in weather data is invalid"),
        }
    }

    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::info!(path = %path.display(), "config saved");
        Ok(())
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("dev", "weather-dash", "weather-dash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Default location of the interactive session's log file.
    pub fn log_file_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.data_local_dir().join("weather-dash.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WeatherStore {
        WeatherStore::builtin().expect("builtin data must parse")
    }

    #[test]
    fn default_city_falls_back_to_store_default() {
        let cfg = Config::default();
        let key = cfg.default_city_key(&store()).expect("default must resolve");

        assert_eq!(key, "San Francisco");
    }

    #[test]
    fn configured_default_city_is_used() {
        let store = store();
        let mut cfg = Config::default();
        cfg.set_default_city(&store.key("Tokyo").expect("Tokyo exists"));

        let key = cfg.default_city_key(&store).expect("Tokyo must resolve");
        assert_eq!(key, "Tokyo");
    }

    #[test]
    fn unknown_default_city_errors_with_hint() {
        let cfg = Config { default_city: Some("Atlantis".into()), ..Config::default() };
        let err = cfg.default_city_key(&store()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("'Atlantis' is not in the weather data"));
        assert!(msg.contains("Hint: run `weather-dash configure`"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg, Config::default());
        assert!(cfg.animations);
        assert_eq!(cfg.tick_rate_ms, 100);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config {
            default_city: Some("New York".into()),
            default_tab: Tab::Chart,
            units: TemperatureUnit::Fahrenheit,
            animations: false,
            tick_rate_ms: 250,
            data_file: None,
        };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "units = \"fahrenheit\"\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.units, TemperatureUnit::Fahrenheit);
        assert_eq!(cfg.default_tab, Tab::Forecast);
        assert!(cfg.animations);
    }

    #[test]
    fn garbage_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "units = [").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn fahrenheit_conversion_rounds() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert(0), 32);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(18), 64);
        assert_eq!(TemperatureUnit::Fahrenheit.convert(-40), -40);
        assert_eq!(TemperatureUnit::Celsius.convert(18), 18);
    }

    #[test]
    fn units_parse_from_short_and_long_names() {
        assert_eq!(TemperatureUnit::try_from("F").unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::try_from("celsius").unwrap(), TemperatureUnit::Celsius);
        let err = TemperatureUnit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }

    #[test]
    fn data_file_overrides_builtin_store() {
        let cfg = Config {
            data_file: Some(PathBuf::from("/no/such/cities.toml")),
            ..Config::default()
        };
        let err = cfg.load_store().unwrap_err();

        assert!(err.to_string().contains("Failed to load weather data"));
    }
}
