//! Dashboard view components
//!
//! Each view is a ratatui `Widget` over a borrowed slice of the active
//! record. Views hold no state of their own and never see the controller.

pub mod current;
pub mod daily;
pub mod footer;
pub mod header;
pub mod hourly;
pub mod notice;
pub mod trend;

pub use current::CurrentConditionsView;
pub use daily::DailyView;
pub use footer::FooterView;
pub use header::{HeaderView, QuickSelectView};
pub use hourly::HourlyView;
pub use notice::NoticeView;
pub use trend::TrendView;

use ratatui::style::Color;
use weather_core::{TemperatureUnit, VisualFamily};

/// Colours derived from the active city's visual family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Borders, highlights and the active tab.
    pub accent: Color,
    pub card_bg: Color,
    pub card_fg: Color,
    pub particle: Color,
}

impl Palette {
    pub fn for_family(family: VisualFamily) -> Self {
        match family {
            VisualFamily::Rain => Palette {
                accent: Color::LightBlue,
                card_bg: Color::Rgb(55, 65, 81),
                card_fg: Color::White,
                particle: Color::Rgb(96, 165, 250),
            },
            VisualFamily::Cloud => Palette {
                accent: Color::Gray,
                card_bg: Color::Rgb(71, 85, 105),
                card_fg: Color::White,
                particle: Color::Rgb(203, 213, 225),
            },
            VisualFamily::Sunny => Palette {
                accent: Color::Yellow,
                card_bg: Color::Rgb(245, 158, 11),
                card_fg: Color::Black,
                particle: Color::Rgb(254, 240, 138),
            },
            VisualFamily::Default => Palette {
                accent: Color::Cyan,
                card_bg: Color::Reset,
                card_fg: Color::Reset,
                particle: Color::DarkGray,
            },
        }
    }
}

/// "18°" style label in the chosen unit.
pub(crate) fn degrees(unit: TemperatureUnit, celsius: i32) -> String {
    format!("{}°", unit.convert(celsius))
}

/// Small precipitation meter, one block per 20%.
pub(crate) fn precipitation_meter(percent: u8) -> String {
    let filled = usize::from(percent.min(100)).div_ceil(20);
    format!("{}{}", "▮".repeat(filled), "▯".repeat(5 - filled))
}
