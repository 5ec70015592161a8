//! Title, search box and quick-select row.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

const PLACEHOLDER: &str = "Search for a city...";

pub struct HeaderView<'a> {
    location: &'a str,
    query: &'a str,
    searching: bool,
    accent: Color,
}

impl<'a> HeaderView<'a> {
    pub fn new(location: &'a str, query: &'a str, searching: bool, accent: Color) -> Self {
        Self { location, query, searching, accent }
    }
}

impl Widget for HeaderView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks =
            Layout::horizontal([Constraint::Min(30), Constraint::Length(40)]).split(area);

        let title = vec![
            Line::from(Span::styled(
                "Weather Forecast",
                Style::default().fg(self.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Stay updated with real-time weather information",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        Paragraph::new(title).render(chunks[0], buf);

        let border = if self.searching {
            Style::default().fg(self.accent)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(Span::raw(format!(" {} ", self.location)));

        let text = if self.searching {
            Line::from(vec![
                Span::raw("⌕ "),
                Span::raw(self.query),
                Span::styled("▏", Style::default().fg(self.accent)),
            ])
        } else {
            Line::from(vec![
                Span::raw("⌕ "),
                Span::styled(PLACEHOLDER, Style::default().add_modifier(Modifier::DIM)),
                Span::styled("  [/]", Style::default().fg(Color::Yellow)),
            ])
        };
        Paragraph::new(text).block(block).render(chunks[1], buf);
    }
}

/// One button per city; the active one is highlighted.
pub struct QuickSelectView<'a> {
    cities: Vec<&'a str>,
    active: usize,
    accent: Color,
}

impl<'a> QuickSelectView<'a> {
    pub fn new(cities: Vec<&'a str>, active: usize, accent: Color) -> Self {
        Self { cities, active, accent }
    }
}

impl Widget for QuickSelectView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, city) in self.cities.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let label = format!(" {} {} ", i + 1, city);
            let style = if i == self.active {
                Style::default().fg(Color::White).bg(self.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            spans.push(Span::styled(label, style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
