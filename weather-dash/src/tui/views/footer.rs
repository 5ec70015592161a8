//! Footer with the last-updated time and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterView<'a> {
    last_updated: &'a str,
    searching: bool,
}

impl<'a> FooterView<'a> {
    pub fn new(last_updated: &'a str, searching: bool) -> Self {
        Self { last_updated, searching }
    }
}

fn key(k: &'static str) -> Span<'static> {
    Span::styled(k, Style::default().fg(Color::Yellow))
}

impl Widget for FooterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let info = Line::from(Span::styled(
            format!("Weather data updates every hour • Last updated: {}", self.last_updated),
            Style::default().add_modifier(Modifier::DIM),
        ));

        let help = if self.searching {
            Line::from(vec![
                key("[Enter]"),
                Span::raw(" search  "),
                key("[Esc]"),
                Span::raw(" cancel"),
            ])
        } else {
            Line::from(vec![
                key("[/]"),
                Span::raw(" search  "),
                key("[1-9]"),
                Span::raw(" city  "),
                key("[Tab]"),
                Span::raw(" view  "),
                key("[←/→]"),
                Span::raw(" scroll  "),
                key("[q]"),
                Span::raw("uit"),
            ])
        };

        Paragraph::new(vec![info, help]).alignment(Alignment::Center).render(area, buf);
    }
}
