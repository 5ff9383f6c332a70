use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::{
    app::{
        events::{AppEvent, SearchTicket, spawn_search},
        store::Preferences,
    },
    cli::{Cli, UnitsArg},
    data::{SearchOptions, WeatherClient},
    domain::weather::{Units, WeatherRecord},
};

pub const DEFAULT_CITY: &str = "London";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Idle,
    Loading,
    Ready,
    Error,
    Quit,
}

/// What applying a search result did to the displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Displayed,
    Failed,
    /// A newer search was issued after this one; its result is dropped.
    Discarded,
}

/// Single owner of the displayed record. Results are applied only when they
/// belong to the most recently issued search.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub units: Units,
    pub options: SearchOptions,
    pub weather: Option<WeatherRecord>,
    pub current_city: Option<String>,
    pub last_error: Option<String>,
    /// The query of the latest search when it failed with no geocoding match.
    pub unresolved_city: Option<String>,
    pub preferences: Preferences,
    client: WeatherClient,
    latest_ticket: SearchTicket,
}

impl AppState {
    pub fn new(cli: &Cli, preferences: Preferences) -> Self {
        let units = match cli.units {
            UnitsArg::Celsius => Units::Celsius,
            UnitsArg::Fahrenheit => Units::Fahrenheit,
        };
        let client =
            WeatherClient::with_base_urls(cli.geocode_url.as_deref(), cli.forecast_url.as_deref());
        Self::with_client(client, cli.search_options(), units, preferences)
    }

    pub fn with_client(
        client: WeatherClient,
        options: SearchOptions,
        units: Units,
        preferences: Preferences,
    ) -> Self {
        Self {
            mode: AppMode::Idle,
            running: true,
            units,
            options,
            weather: None,
            current_city: None,
            last_error: None,
            unresolved_city: None,
            preferences,
            client,
            latest_ticket: SearchTicket::default(),
        }
    }

    /// City to show first: explicit argument, else the last searched city,
    /// else [`DEFAULT_CITY`].
    pub fn initial_city(&self, cli: &Cli) -> String {
        cli.city
            .clone()
            .or_else(|| self.preferences.last_searched_city())
            .unwrap_or_else(|| DEFAULT_CITY.to_string())
    }

    pub fn latest_ticket(&self) -> SearchTicket {
        self.latest_ticket
    }

    pub fn issue_ticket(&mut self) -> SearchTicket {
        self.latest_ticket = self.latest_ticket.next();
        self.latest_ticket
    }

    pub fn start_search(&mut self, tx: &mpsc::Sender<AppEvent>, city: String) -> SearchTicket {
        let ticket = self.issue_ticket();
        debug!(ticket = ticket.0, %city, "search issued");
        self.mode = AppMode::Loading;
        spawn_search(tx.clone(), self.client.clone(), ticket, city, self.options);
        ticket
    }

    pub fn handle_event(&mut self, event: AppEvent) -> EventOutcome {
        if event.ticket() != self.latest_ticket {
            debug!(
                ticket = event.ticket().0,
                latest = self.latest_ticket.0,
                "discarding superseded search result"
            );
            return EventOutcome::Discarded;
        }

        match event {
            AppEvent::SearchSucceeded { city, record, .. } => {
                self.handle_search_succeeded(city, *record);
                EventOutcome::Displayed
            }
            AppEvent::SearchFailed { city, error, .. } => {
                warn!(%city, %error, "search failed");
                self.mode = AppMode::Error;
                self.last_error = Some(error.to_string());
                self.unresolved_city = error.is_not_found().then_some(city);
                EventOutcome::Failed
            }
        }
    }

    fn handle_search_succeeded(&mut self, city: String, record: WeatherRecord) {
        self.weather = Some(record);
        self.mode = AppMode::Ready;
        self.last_error = None;
        self.unresolved_city = None;
        if let Err(err) = self.preferences.record_search(&city) {
            warn!(%err, "could not persist search history");
        }
        self.current_city = Some(city);
    }

    /// Saves or unsaves the city behind the displayed record.
    pub fn toggle_save_current(&mut self) -> Option<bool> {
        let city = self.current_city.clone()?;
        match self.preferences.toggle_saved(&city) {
            Ok(saved) => Some(saved),
            Err(err) => {
                warn!(%err, "could not persist saved locations");
                None
            }
        }
    }
}
