use std::fmt;

use thiserror::Error;

/// Which leg of the search pipeline a transport failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Geocoding,
    Forecast,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Geocoding => f.write_str("geocoding"),
            Stage::Forecast => f.write_str("forecast"),
        }
    }
}

/// Failures surfaced by a search. The `Display` text is what the user sees.
#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Location not found for: {0}")]
    LocationNotFound(String),

    #[error("{stage} request failed{}: {body}", status_suffix(.status))]
    Transport {
        stage: Stage,
        status: Option<u16>,
        body: String,
    },

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl WeatherError {
    pub(crate) fn transport(stage: Stage, err: &reqwest::Error) -> Self {
        Self::Transport {
            stage,
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::LocationNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" with status {code}"))
        .unwrap_or_default()
}

/// Upstream error bodies can be whole HTML pages; keep the head only.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
