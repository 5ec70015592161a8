use std::sync::Arc;

use thiserror::Error;

use crate::{
    model::WeatherRecord,
    store::{CityKey, WeatherStore},
};

/// Result of a search submission that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was blank; nothing happened.
    Ignored,
    /// The query named a known city, which is now active.
    Selected(CityKey),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("weather data for \"{query}\" is not available")]
    CityNotFound {
        query: String,
        /// Same city spelled with different case, if there is one.
        suggestion: Option<String>,
    },
}

impl SelectionError {
    /// Text for the notice shown to the user, naming the city still on screen.
    pub fn user_message(&self, showing: &CityKey) -> String {
        match self {
            SelectionError::CityNotFound { query, suggestion } => {
                let mut msg = format!(
                    "Weather data for \"{query}\" not available. Still showing {showing}."
                );
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!(" Did you mean \"{suggestion}\"?"));
                }
                msg
            }
        }
    }
}

/// Owner of the active city.
///
/// There is always exactly one active city and it is always a key of the
/// store; only [`select_city`](Self::select_city) and a successful
/// [`resolve_search`](Self::resolve_search) change it.
#[derive(Debug, Clone)]
pub struct SelectionController {
    store: Arc<WeatherStore>,
    current: CityKey,
}

impl SelectionController {
    /// Start on the store's default city.
    pub fn new(store: Arc<WeatherStore>) -> Self {
        let current = store.default_key();
        Self { store, current }
    }

    /// Start on a specific city. `None` if `initial` is not in `store`.
    pub fn with_initial(store: Arc<WeatherStore>, initial: &CityKey) -> Option<Self> {
        let current = store.key(initial.as_str())?;
        Some(Self { store, current })
    }

    pub fn store(&self) -> &WeatherStore {
        &self.store
    }

    pub fn current(&self) -> &CityKey {
        &self.current
    }

    /// Record of the active city.
    pub fn record(&self) -> &WeatherRecord {
        // `current` is always re-minted by `self.store`.
        self.store.get_owned(&self.current)
    }

    /// Make `key` the active city. A key from another store is accepted
    /// only if this store has a city of the same name.
    pub fn select_city(&mut self, key: CityKey) -> Result<(), SelectionError> {
        let Some(key) = self.store.key(key.as_str()) else {
            return Err(SelectionError::CityNotFound {
                query: key.to_string(),
                suggestion: None,
            });
        };

        if key != self.current {
            tracing::info!(from = %self.current, to = %key, "city selected");
        }
        self.current = key;
        Ok(())
    }

    /// Resolve free text typed into the search box.
    ///
    /// The trimmed text must match a city name exactly (case-sensitive).
    /// On failure the active city is left alone.
    pub fn resolve_search(&mut self, text: &str) -> Result<SearchOutcome, SelectionError> {
        let query = text.trim();
        if query.is_empty() {
            return Ok(SearchOutcome::Ignored);
        }

        match self.store.key(query) {
            Some(key) => {
                self.select_city(key.clone())?;
                Ok(SearchOutcome::Selected(key))
            }
            None => {
                let suggestion = self.store.key_ignore_case(query).map(|k| k.to_string());
                tracing::warn!(query, showing = %self.current, "search did not match a city");

                Err(SelectionError::CityNotFound { query: query.to_string(), suggestion })
            }
        }
    }
}
