use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// Which detail view sits under the current-conditions card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Forecast,
    Hourly,
    Chart,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Forecast => "forecast",
            Tab::Hourly => "hourly",
            Tab::Chart => "chart",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Forecast => "Forecast",
            Tab::Hourly => "Hourly",
            Tab::Chart => "Chart",
        }
    }

    pub const fn all() -> &'static [Tab] {
        &[Tab::Forecast, Tab::Hourly, Tab::Chart]
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Forecast => 0,
            Tab::Hourly => 1,
            Tab::Chart => 2,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Forecast => Tab::Hourly,
            Tab::Hourly => Tab::Chart,
            Tab::Chart => Tab::Forecast,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Forecast => Tab::Chart,
            Tab::Hourly => Tab::Forecast,
            Tab::Chart => Tab::Hourly,
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Tab {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "forecast" => Ok(Tab::Forecast),
            "hourly" => Ok(Tab::Hourly),
            "chart" => Ok(Tab::Chart),
            _ => Err(anyhow::anyhow!(
                "Unknown tab '{value}'. Supported tabs: forecast, hourly, chart."
            )),
        }
    }
}
