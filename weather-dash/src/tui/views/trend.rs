//! Temperature Trend chart
//!
//! Temperature and feels-like series over the chart samples, with a legend.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget},
};
use weather_core::{ChartPoint, TemperatureUnit};

const TEMPERATURE_COLOR: Color = Color::Rgb(59, 130, 246);
const FEELS_LIKE_COLOR: Color = Color::Rgb(148, 163, 184);

pub struct TrendView<'a> {
    points: &'a [ChartPoint],
    unit: TemperatureUnit,
    accent: Color,
}

impl<'a> TrendView<'a> {
    pub fn new(points: &'a [ChartPoint], unit: TemperatureUnit, accent: Color) -> Self {
        Self { points, unit, accent }
    }

    fn series(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let x = i as f64;
                (
                    (x, f64::from(self.unit.convert(p.temperature))),
                    (x, f64::from(self.unit.convert(p.feels_like))),
                )
            })
            .unzip()
    }
}

/// Y bounds covering both series with a degree of headroom either side.
pub(crate) fn y_bounds(temperature: &[(f64, f64)], feels_like: &[(f64, f64)]) -> [f64; 2] {
    let values = temperature.iter().chain(feels_like).map(|(_, y)| *y);
    let min = values.clone().fold(f64::INFINITY, f64::min);
    let max = values.fold(f64::NEG_INFINITY, f64::max);

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    [(min - 2.0).floor(), (max + 2.0).ceil()]
}

impl Widget for TrendView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Temperature Trend")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.accent));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(inner);

        let (temperature, feels_like) = self.series();
        let [y_min, y_max] = y_bounds(&temperature, &feels_like);
        let x_max = (self.points.len().saturating_sub(1) as f64).max(1.0);

        let symbol = self.unit.symbol();
        let datasets = vec![
            Dataset::default()
                .name(format!("Temperature ({symbol})"))
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(TEMPERATURE_COLOR))
                .data(&temperature),
            Dataset::default()
                .name(format!("Feels Like ({symbol})"))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(FEELS_LIKE_COLOR))
                .data(&feels_like),
        ];

        let mut x_labels: Vec<Span> = self
            .points
            .iter()
            .map(|p| Span::styled(p.time.clone(), Style::default().add_modifier(Modifier::DIM)))
            .collect();
        // The chart only draws x labels when there are at least two.
        if x_labels.len() == 1 {
            x_labels.push(Span::raw(""));
        }
        let y_labels: Vec<Span> = [y_min, (y_min + y_max) / 2.0, y_max]
            .iter()
            .map(|v| Span::raw(format!("{v:.0}°")))
            .collect();

        let chart = Chart::new(datasets)
            .x_axis(Axis::default().bounds([0.0, x_max]).labels(x_labels))
            .y_axis(Axis::default().bounds([y_min, y_max]).labels(y_labels))
            .legend_position(None);
        chart.render(chunks[0], buf);

        let legend = Line::from(vec![
            Span::styled("━━ ", Style::default().fg(TEMPERATURE_COLOR)),
            Span::styled("Temperature", Style::default().add_modifier(Modifier::DIM)),
            Span::raw("      "),
            Span::styled("•• ", Style::default().fg(FEELS_LIKE_COLOR)),
            Span::styled("Feels Like", Style::default().add_modifier(Modifier::DIM)),
        ]);
        Paragraph::new(legend).alignment(Alignment::Center).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::views::test_support::{joined, record, render_lines};

    #[test]
    fn renders_title_axis_labels_and_legend() {
        let record = record("San Francisco");
        let view = TrendView::new(&record.chart, TemperatureUnit::Celsius, Color::Cyan);
        let text = joined(&render_lines(view, 100, 16));

        assert!(text.contains("Temperature Trend"));
        assert!(text.contains("6 AM"));
        assert!(text.contains("9 PM"));
        assert!(text.contains("Feels Like"));
    }

    #[test]
    fn bounds_pad_both_series() {
        let temperature = [(0.0, 14.0), (1.0, 21.0)];
        let feels_like = [(0.0, 12.0), (1.0, 19.0)];

        assert_eq!(y_bounds(&temperature, &feels_like), [10.0, 23.0]);
    }

    #[test]
    fn empty_series_get_unit_bounds() {
        assert_eq!(y_bounds(&[], &[]), [0.0, 1.0]);
    }

    #[test]
    fn single_point_renders() {
        let points = vec![ChartPoint { time: "Noon".into(), temperature: 3, feels_like: 1 }];
        let view = TrendView::new(&points, TemperatureUnit::Fahrenheit, Color::Cyan);
        let text = joined(&render_lines(view, 60, 12));

        assert!(text.contains("Noon"));
    }
}
