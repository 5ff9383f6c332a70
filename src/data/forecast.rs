use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, Stage, WeatherError, truncate_body};

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,precipitation,pressure_msl,weathercode,visibility,windspeed_10m,winddirection_10m";
const DAILY_FIELDS: &str =
    "weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_max";
const HOURLY_FIELDS: &str = "temperature_2m,weathercode";

#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    pub fn new() -> Self {
        Self::with_base_url(FORECAST_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }

    /// One combined request for current, daily and hourly data covering `days`
    /// calendar days (and therefore `days * 24` hourly points).
    pub async fn fetch(&self, latitude: f64, longitude: f64, days: u8) -> Result<ForecastPayload> {
        let days = days.max(1);
        debug!(latitude, longitude, days, "requesting forecast");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("forecast_days", days.to_string()),
            ])
            .send()
            .await
            .map_err(|err| WeatherError::transport(Stage::Forecast, &err))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Transport {
                stage: Stage::Forecast,
                status: Some(status.as_u16()),
                body: truncate_body(&body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| WeatherError::transport(Stage::Forecast, &err))?;
        serde_json::from_str::<ForecastPayload>(&body)
            .map_err(|err| WeatherError::Unknown(format!("failed to parse forecast payload: {err}")))
    }
}

/// The provider's response, kept close to the wire shape. Series are parallel
/// arrays indexed by day (daily) or by hour from day 0 hour 0 (hourly).
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPayload {
    pub current: CurrentBlock,
    pub daily: DailyBlock,
    pub hourly: HourlyBlock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub time: Option<String>,
    pub temperature_2m: f64,
    #[serde(default)]
    pub relative_humidity_2m: Option<f64>,
    pub apparent_temperature: f64,
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub pressure_msl: Option<f64>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Option<u16>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default, alias = "wind_speed_10m")]
    pub windspeed_10m: Option<f64>,
    #[serde(default, alias = "wind_direction_10m")]
    pub winddirection_10m: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyBlock {
    pub time: Vec<String>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Vec<Option<u16>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability_max: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HourlyBlock {
    pub time: Vec<String>,
    pub temperature_2m: Vec<Option<f64>>,
    #[serde(default, alias = "weather_code")]
    pub weathercode: Vec<Option<u16>>,
}
