use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Conditions at the moment of observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Degrees Celsius.
    pub temperature: i32,
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// km/h.
    pub wind_speed: u32,
    /// km.
    pub visibility: u32,
    /// mb.
    pub pressure: u32,
    pub feels_like: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyEntry {
    /// Display label, the first entry is conventionally "Now".
    pub time: String,
    pub temperature: i32,
    pub condition: String,
    /// Chance of precipitation, percent.
    pub precipitation: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// Display label, the first entry is conventionally "Today".
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    pub precipitation: u8,
}

/// One sample of the temperature trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub temperature: i32,
    pub feels_like: i32,
}

/// Everything the dashboard knows about one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: String,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
    pub chart: Vec<ChartPoint>,
}

/// A record that breaks one of the data invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("location must not be empty")]
    EmptyLocation,

    #[error("{0} series must not be empty")]
    EmptySeries(&'static str),

    #[error("{field} condition must not be empty")]
    EmptyCondition { field: String },

    #[error("{field} percentage {value} is outside 0..=100")]
    PercentOutOfRange { field: String, value: u8 },

    #[error("daily entry '{day}' has high {high} below low {low}")]
    HighBelowLow { day: String, high: i32, low: i32 },
}

impl WeatherRecord {
    /// Check the invariants every record must satisfy before the views see it.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.location.trim().is_empty() {
            return Err(RecordError::EmptyLocation);
        }

        check_condition("current", &self.current.condition)?;
        check_percent("current humidity", self.current.humidity)?;

        if self.hourly.is_empty() {
            return Err(RecordError::EmptySeries("hourly"));
        }
        if self.daily.is_empty() {
            return Err(RecordError::EmptySeries("daily"));
        }
        if self.chart.is_empty() {
            return Err(RecordError::EmptySeries("chart"));
        }

        for hour in &self.hourly {
            check_condition(&format!("hourly '{}'", hour.time), &hour.condition)?;
            check_percent(&format!("hourly '{}' precipitation", hour.time), hour.precipitation)?;
        }

        for day in &self.daily {
            check_condition(&format!("daily '{}'", day.day), &day.condition)?;
            check_percent(&format!("daily '{}' precipitation", day.day), day.precipitation)?;

            if day.high < day.low {
                return Err(RecordError::HighBelowLow {
                    day: day.day.clone(),
                    high: day.high,
                    low: day.low,
                });
            }
        }

        Ok(())
    }

    /// Lowest low and highest high across the daily series.
    pub fn weekly_range(&self) -> Option<(i32, i32)> {
        let low = self.daily.iter().map(|d| d.low).min()?;
        let high = self.daily.iter().map(|d| d.high).max()?;
        Some((low, high))
    }
}

fn check_condition(field: &str, condition: &str) -> Result<(), RecordError> {
    if condition.trim().is_empty() {
        return Err(RecordError::EmptyCondition { field: field.to_string() });
    }
    Ok(())
}

fn check_percent(field: &str, value: u8) -> Result<(), RecordError> {
    if value > 100 {
        return Err(RecordError::PercentOutOfRange { field: field.to_string(), value });
    }
    Ok(())
}
