//! Mapping free-form condition labels onto the closed sets the views switch on.
//!
//! Labels such as "Partly Cloudy" or "Light Rain and Clouds" are matched
//! case-insensitively by substring; the first matching rule wins.

use serde::{Deserialize, Serialize};

/// Decorative treatment for a condition: background palette and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFamily {
    Rain,
    Cloud,
    Sunny,
    Default,
}

impl VisualFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisualFamily::Rain => "rain",
            VisualFamily::Cloud => "cloud",
            VisualFamily::Sunny => "sunny",
            VisualFamily::Default => "default",
        }
    }
}

impl std::fmt::Display for VisualFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rain beats cloud beats sunny/clear; anything else is `Default`.
pub fn classify(condition: &str) -> VisualFamily {
    let lower = condition.to_lowercase();

    if lower.contains("rain") {
        VisualFamily::Rain
    } else if lower.contains("cloud") {
        VisualFamily::Cloud
    } else if lower.contains("sunny") || lower.contains("clear") {
        VisualFamily::Sunny
    } else {
        VisualFamily::Default
    }
}

/// Icon shown next to a condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionIcon {
    Rain,
    Cloud,
    Snow,
    Wind,
    Sun,
    Plain,
}

impl ConditionIcon {
    pub fn from_condition(condition: &str) -> Self {
        let lower = condition.to_lowercase();

        if lower.contains("rain") {
            ConditionIcon::Rain
        } else if lower.contains("cloud") {
            ConditionIcon::Cloud
        } else if lower.contains("snow") {
            ConditionIcon::Snow
        } else if lower.contains("wind") {
            ConditionIcon::Wind
        } else if lower.contains("sunny") || lower.contains("clear") {
            ConditionIcon::Sun
        } else {
            ConditionIcon::Plain
        }
    }

    /// Single-column glyph for terminal output.
    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Rain => "☂",
            ConditionIcon::Cloud => "☁",
            ConditionIcon::Snow => "❄",
            ConditionIcon::Wind => "≋",
            ConditionIcon::Sun => "☀",
            ConditionIcon::Plain => "·",
        }
    }
}
