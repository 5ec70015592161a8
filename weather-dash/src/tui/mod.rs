//! Interactive terminal dashboard.

pub mod animation;
pub mod app;
pub mod ui;
pub mod views;

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back when dropped, on every exit path.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Best effort: each step runs even if the one before it failed.
fn restore() {
    let _ = disable_raw_mode();
    let _ = leave_screen(&mut io::stdout());
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        hook(info);
    }));
}

/// Run the dashboard until the user quits.
pub fn run(app: &mut App, tick_rate: Duration) -> Result<()> {
    enable_raw_mode()?;
    let _guard = TerminalGuard;
    install_panic_hook();

    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    tracing::info!(city = %app.selection().current(), "dashboard started");
    let result = event_loop(&mut terminal, app, tick_rate);

    if let Err(err) = &result {
        tracing::error!(error = %err, "dashboard stopped with an error");
    }
    result
}

fn event_loop(terminal: &mut Term, app: &mut App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit() {
        app.set_hourly_columns(ui::hourly_columns(terminal.size()?.width));
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaving_the_screen_also_shows_the_cursor() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
