use serde::Deserialize;
use std::{fmt, fs, path::Path};
use thiserror::Error;

use crate::model::{
    ChartPoint, CurrentConditions, DailyEntry, HourlyEntry, RecordError, WeatherRecord,
};

/// City shown when nothing else has been asked for.
pub const DEFAULT_CITY: &str = "San Francisco";

const BUILTIN_DATA: &str = include_str!("../data/cities.toml");

/// Handle to a city in a [`WeatherStore`].
///
/// Keys are only minted by the store, so holding one means the city exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CityKey {
    name: String,
    index: usize,
}

impl CityKey {
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for CityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq<str> for CityKey {
    fn eq(&self, other: &str) -> bool {
        self.name == other
    }
}

impl PartialEq<&str> for CityKey {
    fn eq(&self, other: &&str) -> bool {
        self.name == *other
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read weather data from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse weather data: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("weather data contains no cities")]
    Empty,

    #[error("city '{0}' is defined more than once")]
    DuplicateCity(String),

    #[error("city name '{0}' must be non-empty without surrounding whitespace")]
    InvalidCityName(String),

    #[error("invalid record for '{city}': {source}")]
    InvalidRecord {
        city: String,
        #[source]
        source: RecordError,
    },
}

#[derive(Debug, Deserialize)]
struct DataFile {
    city: Vec<CityEntryFile>,
}

#[derive(Debug, Deserialize)]
struct CityEntryFile {
    key: String,
    location: String,
    current: CurrentConditions,
    hourly: Vec<HourlyEntry>,
    daily: Vec<DailyEntry>,
    chart: Vec<ChartPoint>,
}

impl CityEntryFile {
    fn into_entry(self) -> (String, WeatherRecord) {
        let record = WeatherRecord {
            location: self.location,
            current: self.current,
            hourly: self.hourly,
            daily: self.daily,
            chart: self.chart,
        };
        (self.key, record)
    }
}

/// Read-only mapping from city name to its weather record.
///
/// Cities keep the order they were declared in; that order drives the
/// quick-select row.
#[derive(Debug, Clone)]
pub struct WeatherStore {
    entries: Vec<(CityKey, WeatherRecord)>,
}

impl WeatherStore {
    /// The dataset compiled into the binary.
    pub fn builtin() -> Result<Self, StoreError> {
        Self::from_toml_str(BUILTIN_DATA)
    }

    /// Load a dataset with the same layout as the built-in one.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        let contents = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, StoreError> {
        let file: DataFile = toml::from_str(contents)?;
        Self::from_records(file.city.into_iter().map(CityEntryFile::into_entry))
    }

    /// Build a store, validating every record on the way in.
    pub fn from_records<I>(records: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (String, WeatherRecord)>,
    {
        let mut entries: Vec<(CityKey, WeatherRecord)> = Vec::new();

        for (name, record) in records {
            if name.trim().is_empty() || name.trim() != name {
                return Err(StoreError::InvalidCityName(name));
            }
            if entries.iter().any(|(key, _)| key.name == name) {
                return Err(StoreError::DuplicateCity(name));
            }

            record
                .validate()
                .map_err(|source| StoreError::InvalidRecord { city: name.clone(), source })?;

            let key = CityKey { name, index: entries.len() };
            entries.push((key, record));
        }

        if entries.is_empty() {
            return Err(StoreError::Empty);
        }

        tracing::debug!(cities = entries.len(), "weather store loaded");

        Ok(Self { entries })
    }

    /// Find a record by its exact, case-sensitive city name.
    pub fn lookup(&self, name: &str) -> Option<&WeatherRecord> {
        self.entries
            .iter()
            .find(|(key, _)| key.name == name)
            .map(|(_, record)| record)
    }

    /// Exact, case-sensitive key lookup.
    pub fn key(&self, name: &str) -> Option<CityKey> {
        self.entries.iter().map(|(key, _)| key).find(|key| key.name == name).cloned()
    }

    /// Case-insensitive lookup, used only to suggest a spelling.
    pub fn key_ignore_case(&self, name: &str) -> Option<CityKey> {
        let lower = name.to_lowercase();
        self.entries
            .iter()
            .map(|(key, _)| key)
            .find(|key| key.name.to_lowercase() == lower)
            .cloned()
    }

    /// Record for `key`, or `None` if the key was minted by another store.
    pub fn get(&self, key: &CityKey) -> Option<&WeatherRecord> {
        self.entries
            .get(key.index)
            .filter(|(own, _)| own.name == key.name)
            .map(|(_, record)| record)
    }

    /// Record for a key this store handed out. Callers keep that invariant.
    pub(crate) fn get_owned(&self, key: &CityKey) -> &WeatherRecord {
        &self.entries[key.index].1
    }

    /// Keys and records in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&CityKey, &WeatherRecord)> {
        self.entries.iter().map(|(key, record)| (key, record))
    }

    /// All keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &CityKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// [`DEFAULT_CITY`] if present, otherwise the first declared city.
    pub fn default_key(&self) -> CityKey {
        self.key(DEFAULT_CITY).unwrap_or_else(|| self.entries[0].0.clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
