use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{
    data::{SearchOptions, WeatherClient},
    domain::weather::WeatherRecord,
    error::WeatherError,
};

/// Monotonically increasing tag attached to each search when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct SearchTicket(pub u64);

impl SearchTicket {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

#[derive(Debug)]
pub enum AppEvent {
    SearchSucceeded {
        ticket: SearchTicket,
        city: String,
        record: Box<WeatherRecord>,
    },
    SearchFailed {
        ticket: SearchTicket,
        city: String,
        error: WeatherError,
    },
}

impl AppEvent {
    pub fn ticket(&self) -> SearchTicket {
        match self {
            AppEvent::SearchSucceeded { ticket, .. } | AppEvent::SearchFailed { ticket, .. } => {
                *ticket
            }
        }
    }
}

/// Runs one search on its own task and reports back on `tx`.
pub fn spawn_search(
    tx: mpsc::Sender<AppEvent>,
    client: WeatherClient,
    ticket: SearchTicket,
    city: String,
    options: SearchOptions,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let event = match client.search(&city, options).await {
            Ok(record) => AppEvent::SearchSucceeded {
                ticket,
                city,
                record: Box::new(record),
            },
            Err(error) => AppEvent::SearchFailed {
                ticket,
                city,
                error,
            },
        };
        if tx.send(event).await.is_err() {
            debug!(ticket = ticket.0, "search finished after the receiver closed");
        }
    })
}
