#![allow(dead_code)]

use std::time::Duration;

use weather_lookup::{
    app::{state::AppState, store::Preferences},
    data::{SearchOptions, WeatherClient},
    domain::weather::Units,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

pub const GEOCODE_PATH: &str = "/v1/search";
pub const FORECAST_PATH: &str = "/v1/forecast";

pub fn client_for(server: &MockServer) -> WeatherClient {
    WeatherClient::with_base_urls(
        Some(&format!("{}{GEOCODE_PATH}", server.uri())),
        Some(&format!("{}{FORECAST_PATH}", server.uri())),
    )
}

pub fn state_for(server: &MockServer, days: u8) -> AppState {
    AppState::with_client(
        client_for(server),
        SearchOptions {
            days,
            current_only: false,
        },
        Units::Celsius,
        Preferences::default(),
    )
}

pub fn geocode_payload(name: &str, country: &str, lat: f64, lon: f64) -> serde_json::Value {
    serde_json::json!({
        "results": [
            {
                "id": 1,
                "name": name,
                "latitude": lat,
                "longitude": lon,
                "country": country,
                "country_code": "XX",
                "timezone": "UTC"
            },
            {
                "id": 2,
                "name": format!("{name} Heights"),
                "latitude": lat + 1.0,
                "longitude": lon + 1.0,
                "country": country
            }
        ],
        "generationtime_ms": 0.7
    })
}

pub async fn mount_geocode(server: &MockServer, name: &str, country: &str, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(GEOCODE_PATH))
        .and(query_param("name", name))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(geocode_payload(name, country, 59.33, 18.07))
                .set_delay(delay),
        )
        .mount(server)
        .await;
}

pub async fn mount_forecast(server: &MockServer, days: usize, hours: usize) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_payload(days, hours)))
        .mount(server)
        .await;
}

pub fn forecast_payload(days: usize, hours: usize) -> serde_json::Value {
    serde_json::json!({
        "latitude": 59.33,
        "longitude": 18.07,
        "current": {
            "time": "2026-02-12T10:00",
            "interval": 900,
            "temperature_2m": 7.2,
            "relative_humidity_2m": 73,
            "apparent_temperature": 5.8,
            "precipitation": 0.4,
            "pressure_msl": 1008.2,
            "weathercode": 61,
            "visibility": null,
            "windspeed_10m": 12.0,
            "winddirection_10m": 220
        },
        "daily": {
            "time": (0..days).map(|d| format!("2026-02-{:02}", 12 + d)).collect::<Vec<_>>(),
            "weathercode": vec![3; days],
            "temperature_2m_max": vec![10.0; days],
            "temperature_2m_min": vec![-5.0; days],
            "precipitation_probability_max": (0..days)
                .map(|d| if d == 0 { serde_json::Value::Null } else { serde_json::json!(30) })
                .collect::<Vec<_>>()
        },
        "hourly": {
            "time": (0..hours)
                .map(|h| format!("2026-02-{:02}T{:02}:00", 12 + h / 24, h % 24))
                .collect::<Vec<_>>(),
            "temperature_2m": vec![4.5; hours],
            "weathercode": vec![0; hours]
        }
    })
}
