//! Current conditions card
//!
//! Big temperature, condition and the four detail stats, over the
//! family's background and particle layer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use weather_core::{ConditionIcon, CurrentConditions, TemperatureUnit};

use super::{Palette, degrees};
use crate::tui::animation::{ParticleField, ParticleLayer};

pub struct CurrentConditionsView<'a> {
    location: &'a str,
    current: &'a CurrentConditions,
    unit: TemperatureUnit,
    palette: Palette,
    particles: Option<&'a ParticleField>,
}

impl<'a> CurrentConditionsView<'a> {
    pub fn new(
        location: &'a str,
        current: &'a CurrentConditions,
        unit: TemperatureUnit,
        palette: Palette,
    ) -> Self {
        Self { location, current, unit, palette, particles: None }
    }

    pub fn particles(mut self, field: Option<&'a ParticleField>) -> Self {
        self.particles = field;
        self
    }

    fn stats_line(&self) -> Line<'static> {
        let label = Style::default().add_modifier(Modifier::DIM);
        let value = Style::default().add_modifier(Modifier::BOLD);
        let c = self.current;

        let stats = [
            ("Humidity", format!("{}%", c.humidity)),
            ("Wind", format!("{} km/h", c.wind_speed)),
            ("Visibility", format!("{} km", c.visibility)),
            ("Pressure", format!("{} mb", c.pressure)),
        ];

        let mut spans = Vec::new();
        for (i, (name, val)) in stats.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(format!("{name} "), label));
            spans.push(Span::styled(val, value));
        }
        Line::from(spans)
    }
}

impl Widget for CurrentConditionsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(self.palette.card_bg).fg(self.palette.card_fg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.accent))
            .title(Span::styled(
                format!(" {} ", self.location),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .style(style);

        let inner = block.inner(area);
        block.render(area, buf);

        // Particles go in first; text drawn afterwards wins.
        if let Some(field) = self.particles {
            ParticleLayer::new(field, self.palette.particle).render(inner, buf);
        }

        let chunks = Layout::vertical([
            Constraint::Length(1), // Temperature and condition
            Constraint::Length(1), // Feels like
            Constraint::Min(0),
            Constraint::Length(1), // Stats
        ])
        .split(inner);

        let icon = ConditionIcon::from_condition(&self.current.condition);
        let headline = Line::from(vec![
            Span::styled(
                format!(
                    "{}{}",
                    self.unit.convert(self.current.temperature),
                    self.unit.symbol()
                ),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(icon.glyph()),
            Span::raw(" "),
            Span::raw(self.current.condition.as_str()),
        ]);
        Paragraph::new(headline).render(chunks[0], buf);

        let feels = Line::from(Span::styled(
            format!("Feels like {}", degrees(self.unit, self.current.feels_like)),
            Style::default().add_modifier(Modifier::DIM),
        ));
        Paragraph::new(feels).render(chunks[1], buf);

        Paragraph::new(self.stats_line()).render(chunks[3], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{joined, record, render_lines};
    use weather_core::{VisualFamily, classify};

    fn render(city: &str, unit: TemperatureUnit) -> String {
        let record = record(city);
        let palette = Palette::for_family(classify(&record.current.condition));
        let view = CurrentConditionsView::new(&record.location, &record.current, unit, palette);
        joined(&render_lines(view, 80, 8))
    }

    #[test]
    fn shows_location_temperature_and_condition() {
        let text = render("San Francisco", TemperatureUnit::Celsius);

        assert!(text.contains("San Francisco, CA"));
        assert!(text.contains("18°C"));
        assert!(text.contains("☁ Partly Cloudy"));
        assert!(text.contains("Feels like 16°"));
    }

    #[test]
    fn shows_all_four_stats() {
        let text = render("New York", TemperatureUnit::Celsius);

        assert!(text.contains("Humidity 85%"));
        assert!(text.contains("Wind 18 km/h"));
        assert!(text.contains("Visibility 6 km"));
        assert!(text.contains("Pressure 1010 mb"));
    }

    #[test]
    fn converts_to_fahrenheit() {
        let text = render("Tokyo", TemperatureUnit::Fahrenheit);

        assert!(text.contains("75°F"));
        assert!(text.contains("Feels like 77°"));
    }

    #[test]
    fn particles_leave_text_readable() {
        let record = record("New York");
        let field = ParticleField::seeded(VisualFamily::Rain, 9);
        let view = CurrentConditionsView::new(
            &record.location,
            &record.current,
            TemperatureUnit::Celsius,
            Palette::for_family(VisualFamily::Rain),
        )
        .particles(Some(&field));

        let text = joined(&render_lines(view, 80, 8));
        assert!(text.contains("12°C"));
        assert!(text.contains("Rainy"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let record = record("Tokyo");
        let view = CurrentConditionsView::new(
            &record.location,
            &record.current,
            TemperatureUnit::Celsius,
            Palette::for_family(VisualFamily::Sunny),
        );
        render_lines(view, 4, 2);
    }
}
