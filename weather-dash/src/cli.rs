use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{Confirm, Select};
use weather_core::{
    CityKey, Config, SearchOutcome, SelectionController, Tab, TemperatureUnit, WeatherStore,
    classify,
};

use crate::logging;
use crate::tui::{
    self,
    app::{App, AppOptions},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dash", version, about = "Terminal weather dashboard")]
pub struct Cli {
    /// Load weather data from this TOML file instead of the built-in set.
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Log file for the dashboard. One-shot commands log to stderr unless set.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Defaults to `dash`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive dashboard.
    Dash {
        /// City to start on instead of the configured default.
        #[arg(long)]
        city: Option<String>,

        /// Initial tab: forecast, hourly or chart.
        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,

        /// Disable the condition animation.
        #[arg(long)]
        no_animations: bool,
    },

    /// Print one frame of the dashboard for a city.
    Show {
        /// City name, e.g. "Tokyo".
        city: String,

        #[arg(long, value_parser = parse_tab)]
        tab: Option<Tab>,

        #[arg(long, default_value_t = 100)]
        width: u16,

        #[arg(long, default_value_t = 32)]
        height: u16,

        /// Print the city's record as JSON instead.
        #[arg(long)]
        json: bool,
    },

    /// List the available cities.
    Cities,

    /// Interactively choose the default city, tab, units and animation.
    Configure,
}

fn parse_tab(value: &str) -> Result<Tab, String> {
    Tab::try_from(value).map_err(|e| e.to_string())
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let command = self.command.unwrap_or(Command::Dash {
            city: None,
            tab: None,
            no_animations: false,
        });

        match (&command, &self.log_file) {
            (Command::Dash { .. }, Some(path)) => logging::init_file(path)?,
            (Command::Dash { .. }, None) => logging::init_file(&Config::log_file_path()?)?,
            (_, Some(path)) => logging::init_file(path)?,
            (_, None) => logging::init_stderr()?,
        }

        let mut config = Config::load()?;
        let store = Arc::new(load_store(&config, self.data)?);
        tracing::debug!(cities = store.len(), "weather data loaded");

        match command {
            Command::Dash { city, tab, no_animations } => {
                let selection = initial_selection(store, city.as_deref(), &config)?;
                let options = AppOptions {
                    tab: tab.unwrap_or(config.default_tab),
                    units: config.units,
                    animations: config.animations && !no_animations,
                };
                let mut app = App::new(selection, options);
                tui::run(&mut app, Duration::from_millis(config.tick_rate_ms.max(16)))?;
            }
            Command::Show { city, tab, width, height, json } => {
                let selection = initial_selection(store, Some(&city), &config)?;
                if json {
                    println!("{}", record_json(&selection)?);
                } else {
                    let options = AppOptions {
                        tab: tab.unwrap_or(config.default_tab),
                        units: config.units,
                        animations: false,
                    };
                    let app = App::new(selection, options);
                    for line in tui::ui::snapshot(&app, width, height)? {
                        println!("{line}");
                    }
                }
            }
            Command::Cities => {
                for line in city_lines(&store, &config) {
                    println!("{line}");
                }
            }
            Command::Configure => {
                configure(&mut config, &store)?;
                let path = config.save()?;
                println!("Saved configuration to {}", path.display());
            }
        }

        Ok(())
    }
}

/// `--data` wins over the configured data file; the config itself is left
/// untouched so `configure` never persists the override.
fn load_store(config: &Config, data: Option<PathBuf>) -> Result<WeatherStore> {
    match data {
        Some(path) => {
            let session = Config { data_file: Some(path), ..config.clone() };
            session.load_store()
        }
        None => config.load_store(),
    }
}

/// Start on `city` when given, otherwise on the configured default.
fn initial_selection(
    store: Arc<WeatherStore>,
    city: Option<&str>,
    config: &Config,
) -> Result<SelectionController> {
    let Some(city) = city else {
        let initial = config.default_city_key(&store)?;
        return SelectionController::with_initial(store, &initial)
            .ok_or_else(|| anyhow!("City '{initial}' is not in the weather data"));
    };

    let mut selection = SelectionController::new(store);
    let available = available_cities(selection.store());
    match selection.resolve_search(city) {
        Ok(SearchOutcome::Selected(_)) => Ok(selection),
        Ok(SearchOutcome::Ignored) => {
            bail!("City name must not be empty.\nAvailable cities: {available}")
        }
        Err(err) => bail!("{err}.\nAvailable cities: {available}"),
    }
}

fn available_cities(store: &WeatherStore) -> String {
    store.keys().map(CityKey::as_str).collect::<Vec<_>>().join(", ")
}

fn record_json(selection: &SelectionController) -> Result<String> {
    let record = selection.record();
    let value = serde_json::json!({
        "city": selection.current().as_str(),
        "visual_family": classify(&record.current.condition),
        "record": record,
    });
    serde_json::to_string_pretty(&value).context("Failed to serialize weather record")
}

/// One line per city. The default is marked; a configured default that is
/// not in the data falls back to the store's default so listing still works.
fn city_lines(store: &WeatherStore, config: &Config) -> Vec<String> {
    let default = config.default_city_key(store).unwrap_or_else(|_| store.default_key());
    let unit = config.units;

    store
        .iter()
        .enumerate()
        .map(|(i, (key, record))| {
            let current = &record.current;
            let marker = if *key == default { "*" } else { " " };
            let temperature = format!("{}{}", unit.convert(current.temperature), unit.symbol());
            format!(
                "{marker} {} {:<15} {temperature:>5}  {}",
                i + 1,
                key.as_str(),
                current.condition
            )
        })
        .collect()
}

fn configure(config: &mut Config, store: &WeatherStore) -> Result<()> {
    let cities: Vec<String> = store.keys().map(ToString::to_string).collect();
    // An invalid configured city just starts the cursor at the top.
    let current = config.default_city_key(store).unwrap_or_else(|_| store.default_key());
    let cursor = cities.iter().position(|c| current == c.as_str()).unwrap_or(0);
    let city = Select::new("Default city:", cities).with_starting_cursor(cursor).prompt()?;
    let key = store.key(&city).ok_or_else(|| anyhow!("Unknown city '{city}'"))?;
    config.set_default_city(&key);

    let tabs = Tab::all().to_vec();
    config.default_tab = Select::new("Default view:", tabs)
        .with_starting_cursor(config.default_tab.index())
        .prompt()?;

    let units = TemperatureUnit::all().to_vec();
    let cursor = units.iter().position(|u| *u == config.units).unwrap_or(0);
    config.units = Select::new("Temperature units:", units).with_starting_cursor(cursor).prompt()?;

    config.animations = Confirm::new("Animate the current conditions card?")
        .with_default(config.animations)
        .prompt()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<WeatherStore> {
        Arc::new(WeatherStore::builtin().expect("builtin data must parse"))
    }

    #[test]
    fn no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["weather-dash"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_dash_flags() {
        let cli = Cli::try_parse_from([
            "weather-dash",
            "dash",
            "--city",
            "Tokyo",
            "--tab",
            "chart",
            "--no-animations",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Dash { city, tab, no_animations }) => {
                assert_eq!(city.as_deref(), Some("Tokyo"));
                assert_eq!(tab, Some(Tab::Chart));
                assert!(no_animations);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_tab() {
        assert!(Cli::try_parse_from(["weather-dash", "dash", "--tab", "radar"]).is_err());
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli =
            Cli::try_parse_from(["weather-dash", "cities", "--data", "alt.toml"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn city_flag_selects_city() {
        let selection = initial_selection(store(), Some("New York"), &Config::default()).unwrap();
        assert_eq!(selection.current(), &"New York");
    }

    #[test]
    fn missing_city_flag_uses_config_default() {
        let config = Config { default_city: Some("Tokyo".into()), ..Config::default() };
        let selection = initial_selection(store(), None, &config).unwrap();
        assert_eq!(selection.current(), &"Tokyo");
    }

    #[test]
    fn unknown_city_lists_alternatives() {
        let err = initial_selection(store(), Some("Atlantis"), &Config::default()).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("Atlantis"));
        assert!(msg.contains("San Francisco, New York, Tokyo"));
    }

    #[test]
    fn blank_city_argument_is_an_error() {
        let config = Config { default_city: Some("Tokyo".into()), ..Config::default() };

        for city in ["", "   "] {
            let err = initial_selection(store(), Some(city), &config).unwrap_err();
            let msg = err.to_string();
            assert!(msg.contains("must not be empty"), "{city:?}: {msg}");
            assert!(msg.contains("San Francisco, New York, Tokyo"));
        }
    }

    #[test]
    fn city_lines_survive_unknown_configured_default() {
        let config = Config { default_city: Some("Atlantis".into()), ..Config::default() };
        let lines = city_lines(&store(), &config);

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("* 1 San Francisco"));
    }

    #[test]
    fn json_names_city_and_family() {
        let selection = initial_selection(store(), Some("Tokyo"), &Config::default()).unwrap();
        let text = record_json(&selection).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(json["city"], "Tokyo");
        assert_eq!(json["visual_family"], "sunny");
        assert_eq!(json["record"]["location"], "Tokyo, Japan");
        assert_eq!(json["record"]["current"]["temperature"], 24);
    }

    #[test]
    fn city_lines_mark_default() {
        let config = Config { default_city: Some("New York".into()), ..Config::default() };
        let lines = city_lines(&store(), &config);

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("* 2 New York"));
        assert!(lines[0].starts_with("  1 San Francisco"));
        assert!(lines[2].contains("24°C"));
    }
}
