pub mod forecast;
pub mod geocode;

use chrono::Utc;
use tracing::info;

use crate::{
    domain::{
        assemble::{AssembleOptions, assemble},
        weather::WeatherRecord,
    },
    error::Result,
};

use self::{forecast::ForecastClient, geocode::GeocodeClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub days: u8,
    pub current_only: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            days: 5,
            current_only: false,
        }
    }
}

impl SearchOptions {
    fn assemble_options(self) -> AssembleOptions {
        if self.current_only {
            AssembleOptions::current_only()
        } else {
            AssembleOptions::with_forecast(self.days.max(1))
        }
    }
}

/// Geocode, then fetch, then assemble. Either network leg failing aborts the
/// whole search; nothing partial is returned.
#[derive(Debug, Clone, Default)]
pub struct WeatherClient {
    geocoder: GeocodeClient,
    forecaster: ForecastClient,
}

impl WeatherClient {
    pub fn new(geocoder: GeocodeClient, forecaster: ForecastClient) -> Self {
        Self {
            geocoder,
            forecaster,
        }
    }

    pub fn with_base_urls(
        geocode_url: Option<&str>,
        forecast_url: Option<&str>,
    ) -> Self {
        Self::new(
            geocode_url.map_or_else(GeocodeClient::new, GeocodeClient::with_base_url),
            forecast_url.map_or_else(ForecastClient::new, ForecastClient::with_base_url),
        )
    }

    pub async fn search(&self, city: &str, options: SearchOptions) -> Result<WeatherRecord> {
        let place = self.geocoder.resolve(city).await?;
        let assemble_options = options.assemble_options();
        let payload = self
            .forecaster
            .fetch(place.latitude, place.longitude, assemble_options.days)
            .await?;

        let record = assemble(&place, &payload, assemble_options, Utc::now());
        info!(
            city,
            days = record.days().len(),
            "weather record assembled"
        );
        Ok(record)
    }
}
