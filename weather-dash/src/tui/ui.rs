//! Dashboard layout
//!
//! Composes the views top to bottom: header, quick-select, current card,
//! tab bar, the active tab's content and the footer. A notice, when
//! present, is drawn over everything.

use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::TestBackend,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Tabs,
};
use weather_core::{Tab, classify};

use super::app::{App, InputMode};
use super::views::{
    CurrentConditionsView, DailyView, FooterView, HeaderView, HourlyView, NoticeView, Palette,
    QuickSelectView, TrendView, hourly,
};

pub fn draw(frame: &mut Frame, app: &App) {
    let record = app.record();
    let palette = Palette::for_family(classify(&record.current.condition));
    let searching = app.mode() == InputMode::Search;

    let [header, quick, card, tabs, content, footer] = Layout::vertical([
        Constraint::Length(3), // Title and search box
        Constraint::Length(1), // Quick-select
        Constraint::Length(7), // Current conditions
        Constraint::Length(1), // Tab bar
        Constraint::Min(6),    // Active tab
        Constraint::Length(2), // Footer
    ])
    .areas(frame.area());

    frame.render_widget(
        HeaderView::new(&record.location, app.query(), searching, palette.accent),
        header,
    );
    frame.render_widget(
        QuickSelectView::new(app.city_names(), app.active_index(), palette.accent),
        quick,
    );
    frame.render_widget(
        CurrentConditionsView::new(&record.location, &record.current, app.units(), palette)
            .particles(app.particles()),
        card,
    );

    draw_tabs(frame, app, palette, tabs);

    match app.tab() {
        Tab::Forecast => frame.render_widget(
            DailyView::new(&record.daily, app.units(), palette.accent),
            content,
        ),
        Tab::Hourly => frame.render_widget(
            HourlyView::new(&record.hourly, app.units(), palette.accent)
                .scroll(app.hourly_scroll()),
            content,
        ),
        Tab::Chart => frame.render_widget(
            TrendView::new(&record.chart, app.units(), palette.accent),
            content,
        ),
    }

    let last_updated = app.last_updated();
    frame.render_widget(FooterView::new(&last_updated, searching), footer);

    if let Some(message) = app.notice() {
        frame.render_widget(NoticeView::new(message), frame.area());
    }
}

/// Hourly columns visible on a terminal `width` cells wide. The hourly
/// strip spans the full width inside its border.
pub fn hourly_columns(width: u16) -> usize {
    hourly::visible_columns(width.saturating_sub(2))
}

fn draw_tabs(frame: &mut Frame, app: &App, palette: Palette, area: Rect) {
    let titles: Vec<Line> = Tab::all().iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab().index())
        .style(Style::default().add_modifier(Modifier::DIM))
        .highlight_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ");
    frame.render_widget(tabs, area);
}

/// Render one frame off-screen and return its rows with trailing blanks trimmed.
pub fn snapshot(app: &App, width: u16, height: u16) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|f| draw(f, app))?;

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let lines = (0..area.height)
        .map(|y| {
            let row: String = (0..area.width).map(|x| buffer[(x, y)].symbol()).collect();
            row.trim_end().to_string()
        })
        .collect();
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::app;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen(app: &App) -> String {
        snapshot(app, 110, 32).unwrap().join("\n")
    }

    #[test]
    fn initial_screen_shows_default_city_and_forecast() {
        let app = app(false);
        let text = screen(&app);

        assert!(text.contains("Weather Forecast"));
        assert!(text.contains("San Francisco, CA"));
        assert!(text.contains("18°C"));
        assert!(text.contains("7-Day Forecast"));
        assert!(text.contains("Last updated:"));
    }

    #[test]
    fn every_region_follows_the_selected_city() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('2'));
        let text = screen(&app);

        assert!(text.contains("New York, NY"));
        assert!(text.contains("12°C"));
        assert!(text.contains("Humidity 85%"));
        assert!(!text.contains("San Francisco, CA"));
    }

    #[test]
    fn tab_switch_changes_content_only() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('h'));
        let hourly = screen(&app);
        assert!(hourly.contains("Hourly Forecast"));
        assert!(!hourly.contains("7-Day Forecast"));

        press(&mut app, KeyCode::Char('c'));
        let chart = screen(&app);
        assert!(chart.contains("Temperature Trend"));
        assert!(chart.contains("San Francisco, CA"));
    }

    #[test]
    fn failed_search_draws_notice_over_dashboard() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('/'));
        for c in "Atlantis".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        let text = screen(&app);

        assert!(text.contains("Notice"));
        assert!(text.contains("Press any key to continue"));
        assert!(text.contains("San Francisco, CA"));
    }

    #[test]
    fn snapshot_trims_trailing_blanks() {
        let app = app(true);
        let lines = snapshot(&app, 100, 30).unwrap();

        assert_eq!(lines.len(), 30);
        assert!(lines.iter().all(|l| !l.ends_with(' ')));
    }

    #[test]
    fn scroll_limit_matches_the_drawn_strip() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('h'));
        app.set_hourly_columns(hourly_columns(60));
        for _ in 0..20 {
            press(&mut app, KeyCode::Right);
        }

        let text = snapshot(&app, 60, 32).unwrap().join("\n");
        let len = app.record().hourly.len();
        let visible = hourly_columns(60);
        let range = format!("({}-{len} of {len})", len - visible + 1);
        assert!(text.contains(&range), "missing {range}");
    }

    #[test]
    fn small_terminal_does_not_panic() {
        let app = app(true);
        snapshot(&app, 20, 8).unwrap();
    }
}
