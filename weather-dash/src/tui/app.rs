//! Dashboard application state
//!
//! `App` is the root of the view tree. It owns the [`SelectionController`]
//! (the only durable state) and the transient UI state around it: active
//! tab, search buffer, notice, hourly scroll and animation.

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use weather_core::{
    CityKey, SearchOutcome, SelectionController, Tab, TemperatureUnit, WeatherRecord, classify,
};

use super::animation::ParticleField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Startup options for a dashboard session.
#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    pub tab: Tab,
    pub units: TemperatureUnit,
    pub animations: bool,
}

#[derive(Debug)]
pub struct App {
    selection: SelectionController,
    tab: Tab,
    mode: InputMode,
    query: String,
    notice: Option<String>,
    hourly_scroll: usize,
    /// Hourly columns that fit on screen, as of the last resize.
    hourly_columns: usize,
    units: TemperatureUnit,
    particles: Option<ParticleField>,
    last_updated: DateTime<Local>,
    should_quit: bool,
}

impl App {
    pub fn new(selection: SelectionController, options: AppOptions) -> Self {
        let particles = options
            .animations
            .then(|| ParticleField::new(classify(&selection.record().current.condition)));

        Self {
            selection,
            tab: options.tab,
            mode: InputMode::Normal,
            query: String::new(),
            notice: None,
            hourly_scroll: 0,
            hourly_columns: 1,
            units: options.units,
            particles,
            last_updated: Local::now(),
            should_quit: false,
        }
    }

    /// Replace the animation field, e.g. with a seeded one.
    pub fn with_particles(mut self, particles: Option<ParticleField>) -> Self {
        self.particles = particles;
        self
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn record(&self) -> &WeatherRecord {
        self.selection.record()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn hourly_scroll(&self) -> usize {
        self.hourly_scroll
    }

    pub fn units(&self) -> TemperatureUnit {
        self.units
    }

    pub fn particles(&self) -> Option<&ParticleField> {
        self.particles.as_ref()
    }

    pub fn last_updated(&self) -> String {
        self.last_updated.format("%H:%M:%S").to_string()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Position of the active city in the quick-select row.
    pub fn active_index(&self) -> usize {
        let current = self.selection.current();
        self.selection.store().keys().position(|k| k == current).unwrap_or(0)
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.selection.store().keys().map(CityKey::as_str).collect()
    }

    /// Advance the decorative animation by one frame.
    pub fn on_tick(&mut self) {
        if let Some(field) = &mut self.particles {
            field.tick();
        }
    }

    /// Quick-select by position (0-based). Out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) {
        let Some(key) = self.selection.store().keys().nth(index).cloned() else {
            return;
        };
        if self.selection.select_city(key).is_ok() {
            self.after_selection();
        }
    }

    /// Tell the app how many hourly columns the screen shows.
    pub fn set_hourly_columns(&mut self, columns: usize) {
        self.hourly_columns = columns.max(1);
        self.hourly_scroll = self.hourly_scroll.min(self.max_hourly_scroll());
    }

    /// Last scroll position that still moves the strip.
    fn max_hourly_scroll(&self) -> usize {
        self.record().hourly.len().saturating_sub(self.hourly_columns)
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Submit the search buffer.
    ///
    /// A blank buffer does nothing and is kept; anything else is cleared
    /// whether or not it matched.
    pub fn submit_search(&mut self) {
        match self.selection.resolve_search(&self.query) {
            Ok(SearchOutcome::Ignored) => return,
            Ok(SearchOutcome::Selected(_)) => self.after_selection(),
            Err(err) => {
                self.notice = Some(err.user_message(self.selection.current()));
            }
        }
        self.query.clear();
        self.mode = InputMode::Normal;
    }

    fn after_selection(&mut self) {
        self.hourly_scroll = 0;
        self.last_updated = Local::now();

        let family = classify(&self.selection.record().current.condition);
        if let Some(field) = &mut self.particles {
            field.set_family(family);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // The notice swallows the key that dismisses it.
        if self.notice.take().is_some() {
            return;
        }

        match self.mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc => {
                self.query.clear();
                self.mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.query.pop();
            }
            KeyCode::Char(c) => self.query.push(c),
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => self.mode = InputMode::Search,
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_index(index);
            }
            KeyCode::Tab => self.tab = self.tab.next(),
            KeyCode::BackTab => self.tab = self.tab.prev(),
            KeyCode::Char('f') => self.tab = Tab::Forecast,
            KeyCode::Char('h') => self.tab = Tab::Hourly,
            KeyCode::Char('c') => self.tab = Tab::Chart,
            KeyCode::Right => {
                self.hourly_scroll = (self.hourly_scroll + 1).min(self.max_hourly_scroll());
            }
            KeyCode::Left => self.hourly_scroll = self.hourly_scroll.saturating_sub(1),
            _ => {}
        }
    }
}
