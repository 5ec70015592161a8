//! Core library for the `weather-dash` terminal dashboard.
//!
//! This crate defines:
//! - The weather record model and the read-only store of city records
//! - The selection controller that owns the active city
//! - Classification of condition labels into visual families
//! - Configuration handling
//!
//! It is used by `weather-dash`, but has no terminal dependencies of its own.

pub mod config;
pub mod model;
pub mod selection;
pub mod store;
pub mod tab;
pub mod visual;

pub use config::{Config, TemperatureUnit};
pub use model::{ChartPoint, CurrentConditions, DailyEntry, HourlyEntry, RecordError, WeatherRecord};
pub use selection::{SearchOutcome, SelectionController, SelectionError};
pub use store::{CityKey, DEFAULT_CITY, StoreError, WeatherStore};
pub use tab::Tab;
pub use visual::{ConditionIcon, VisualFamily, classify};
