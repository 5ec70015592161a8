//! Hourly Forecast strip
//!
//! One column per entry, scrolled horizontally when the strip is wider
//! than the area.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use weather_core::{ConditionIcon, HourlyEntry, TemperatureUnit};

use super::degrees;

const COLUMN_WIDTH: u16 = 9;

pub struct HourlyView<'a> {
    hours: &'a [HourlyEntry],
    unit: TemperatureUnit,
    accent: Color,
    scroll: usize,
}

impl<'a> HourlyView<'a> {
    pub fn new(hours: &'a [HourlyEntry], unit: TemperatureUnit, accent: Color) -> Self {
        Self { hours, unit, accent, scroll: 0 }
    }

    /// Index of the first visible entry; clamped when rendering.
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

/// How many columns fit in `width`.
pub(crate) fn visible_columns(width: u16) -> usize {
    usize::from((width / COLUMN_WIDTH).max(1))
}

impl Widget for HourlyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let visible = visible_columns(area.width.saturating_sub(2));
        let max_scroll = self.hours.len().saturating_sub(visible);
        let scroll = self.scroll.min(max_scroll);

        let mut title = String::from("Hourly Forecast");
        if max_scroll > 0 {
            let last = (scroll + visible).min(self.hours.len());
            title.push_str(&format!(" ({}-{} of {}) ◀ ▶", scroll + 1, last, self.hours.len()));
        }

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        for (i, hour) in self.hours.iter().skip(scroll).take(visible).enumerate() {
            let x = inner.x + i as u16 * COLUMN_WIDTH;
            let width = COLUMN_WIDTH.min(inner.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let column = Rect::new(x, inner.y, width, inner.height);

            let now = hour.time == "Now";
            let time_style = if now {
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };

            let icon = ConditionIcon::from_condition(&hour.condition);
            let lines = vec![
                Line::from(Span::styled(hour.time.clone(), time_style)),
                Line::from(Span::styled(icon.glyph(), Style::default().fg(Color::Blue))),
                Line::from(Span::styled(
                    degrees(self.unit, hour.temperature),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{}%", hour.precipitation),
                    Style::default().fg(Color::Blue),
                )),
            ];

            Paragraph::new(lines).alignment(Alignment::Center).render(column, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{joined, record, render_lines};

    #[test]
    fn shows_every_hour_when_wide_enough() {
        let record = record("New York");
        let view = HourlyView::new(&record.hourly, TemperatureUnit::Celsius, Color::Cyan);
        let text = joined(&render_lines(view, 100, 6));

        assert!(text.contains("Hourly Forecast"));
        assert!(!text.contains("of 9"));
        for label in ["Now", "1 PM", "8 PM"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(text.contains("80%"));
        assert!(text.contains("☂"));
    }

    #[test]
    fn narrow_area_scrolls() {
        let record = record("Tokyo");
        let view =
            HourlyView::new(&record.hourly, TemperatureUnit::Celsius, Color::Cyan).scroll(2);
        let text = joined(&render_lines(view, 40, 6));

        // 38 inner columns fit four entries.
        assert!(text.contains("(3-6 of 9)"));
        assert!(text.contains("2 PM"));
        assert!(!text.contains("Now"));
    }

    #[test]
    fn scroll_is_clamped() {
        let record = record("Tokyo");
        let view =
            HourlyView::new(&record.hourly, TemperatureUnit::Celsius, Color::Cyan).scroll(99);
        let text = joined(&render_lines(view, 40, 6));

        assert!(text.contains("(6-9 of 9)"));
        assert!(text.contains("8 PM"));
    }

    #[test]
    fn single_hour_renders() {
        let hours = vec![HourlyEntry {
            time: "Now".into(),
            temperature: -3,
            condition: "Snow".into(),
            precipitation: 90,
        }];
        let view = HourlyView::new(&hours, TemperatureUnit::Celsius, Color::Cyan);
        let text = joined(&render_lines(view, 30, 6));

        assert!(text.contains("-3°"));
        assert!(text.contains("❄"));
    }
}
