//! 7-Day Forecast list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};
use weather_core::{ConditionIcon, DailyEntry, TemperatureUnit};

use super::{degrees, precipitation_meter};

const RANGE_BAR_WIDTH: usize = 16;

pub struct DailyView<'a> {
    days: &'a [DailyEntry],
    unit: TemperatureUnit,
    accent: Color,
}

impl<'a> DailyView<'a> {
    pub fn new(days: &'a [DailyEntry], unit: TemperatureUnit, accent: Color) -> Self {
        Self { days, unit, accent }
    }
}

/// Bar showing where `low..=high` sits inside the week's range.
pub(crate) fn range_bar(
    low: i32,
    high: i32,
    week_low: i32,
    week_high: i32,
    width: usize,
) -> String {
    if width == 0 {
        return String::new();
    }

    let span = (week_high - week_low).max(1) as f64;
    let cells = width as f64;

    let start = (((low - week_low) as f64 / span) * cells).floor() as usize;
    let end = (((high - week_low) as f64 / span) * cells).ceil() as usize;
    let start = start.min(width.saturating_sub(1));
    let end = end.clamp(start + 1, width);

    format!("{}{}{}", "─".repeat(start), "━".repeat(end - start), "─".repeat(width - end))
}

impl Widget for DailyView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("7-Day Forecast")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));

        let week_low = self.days.iter().map(|d| d.low).min().unwrap_or(0);
        let week_high = self.days.iter().map(|d| d.high).max().unwrap_or(0);

        let items: Vec<ListItem> = self
            .days
            .iter()
            .map(|day| {
                let today = day.day == "Today";
                let day_style = if today {
                    Style::default().add_modifier(Modifier::BOLD).fg(self.accent)
                } else {
                    Style::default()
                };
                let icon = ConditionIcon::from_condition(&day.condition);

                let line = Line::from(vec![
                    Span::styled(format!("{:<7}", day.day), day_style),
                    Span::raw(format!("{} ", icon.glyph())),
                    Span::styled(
                        format!("{:<15}", day.condition),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(
                        format!(
                            "{} {:>3}%  ",
                            precipitation_meter(day.precipitation),
                            day.precipitation
                        ),
                        Style::default().fg(Color::Blue),
                    ),
                    Span::styled(
                        format!("{:>4} ", degrees(self.unit, day.low)),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                    Span::styled(
                        range_bar(day.low, day.high, week_low, week_high, RANGE_BAR_WIDTH),
                        Style::default().fg(Color::LightRed),
                    ),
                    Span::styled(
                        format!(" {:>4}", degrees(self.unit, day.high)),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ]);

                ListItem::new(line)
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{joined, record, render_lines};

    #[test]
    fn lists_every_day_with_range() {
        let record = record("San Francisco");
        let view = DailyView::new(&record.daily, TemperatureUnit::Celsius, Color::Cyan);
        let lines = render_lines(view, 90, 10);
        let text = joined(&lines);

        assert!(text.contains("7-Day Forecast"));
        for day in ["Today", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
            assert!(text.contains(day), "missing {day}");
        }
        assert!(text.contains("☂ Rainy"));
        assert!(text.contains(" 70%"));

        let today = lines.iter().find(|l| l.contains("Today")).unwrap();
        assert!(today.contains("14°") && today.contains("21°"));
    }

    #[test]
    fn single_day_renders() {
        let days = vec![DailyEntry {
            day: "Today".into(),
            high: 5,
            low: 5,
            condition: "Foggy".into(),
            precipitation: 0,
        }];
        let view = DailyView::new(&days, TemperatureUnit::Celsius, Color::Cyan);
        let text = joined(&render_lines(view, 90, 4));

        assert!(text.contains("· Foggy"));
        assert!(text.contains("5°"));
    }

    #[test]
    fn range_bar_marks_the_days_span() {
        assert_eq!(range_bar(0, 10, 0, 10, 10), "━━━━━━━━━━");
        assert_eq!(range_bar(0, 5, 0, 10, 10), "━━━━━─────");
        assert_eq!(range_bar(5, 10, 0, 10, 10), "─────━━━━━");
    }

    #[test]
    fn range_bar_always_shows_something() {
        let bar = range_bar(7, 7, 7, 7, 8);
        assert_eq!(bar.chars().count(), 8);
        assert!(bar.contains('━'));

        let top = range_bar(10, 10, 0, 10, 8);
        assert_eq!(top.chars().count(), 8);
        assert!(top.ends_with('━'));
    }
}
