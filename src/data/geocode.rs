use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    domain::weather::GeoMatch,
    error::{Result, Stage, WeatherError, truncate_body},
};

const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl Default for GeocodeClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GeocodeClient {
    pub fn new() -> Self {
        Self::with_base_url(GEOCODE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(8))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// Resolves `query` to its top match. Only the first candidate is used.
    pub async fn resolve(&self, query: &str) -> Result<GeoMatch> {
        let query = query.trim();
        if query.is_empty() {
            return Err(WeatherError::LocationNotFound(String::new()));
        }
        debug!(query, "geocoding");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("name", query),
                ("count", "1"),
                ("language", "en"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|err| WeatherError::transport(Stage::Geocoding, &err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Transport {
                stage: Stage::Geocoding,
                status: Some(status.as_u16()),
                body: truncate_body(&body),
            });
        }

        let payload: GeocodeResponse = response.json().await.map_err(|err| {
            WeatherError::Unknown(format!("failed to decode geocoding response: {err}"))
        })?;

        let Some(top) = payload.results.and_then(|results| results.into_iter().next()) else {
            return Err(WeatherError::LocationNotFound(query.to_string()));
        };

        let found = GeoMatch {
            name: top.name,
            country: top.country.unwrap_or_default(),
            latitude: top.latitude,
            longitude: top.longitude,
        };
        info!(query, resolved = %found.display_name(), "location resolved");
        Ok(found)
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Option<Vec<GeocodeResult>>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
}
