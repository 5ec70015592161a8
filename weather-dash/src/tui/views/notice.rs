//! Blocking notice shown over the dashboard until a key is pressed.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct NoticeView<'a> {
    message: &'a str,
}

impl<'a> NoticeView<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

/// Centered rect of at most `width` x `height` inside `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center).areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)]).flex(Flex::Center).areas(row);
    rect
}

impl Widget for NoticeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered(area, 60, 7);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled(" Notice ", Style::default().add_modifier(Modifier::BOLD)))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Yellow));

        let text = vec![
            Line::from(self.message),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to continue",
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];

        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}
