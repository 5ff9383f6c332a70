use chrono::{DateTime, TimeZone, Utc};

use crate::{
    cli::{Cli, UnitsArg},
    data::forecast::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock},
    domain::{
        assemble::{AssembleOptions, assemble},
        weather::{GeoMatch, WeatherRecord},
    },
};

pub(crate) fn test_cli() -> Cli {
    Cli {
        city: None,
        days: 5,
        units: UnitsArg::Celsius,
        current_only: false,
        json: false,
        interactive: false,
        save: false,
        no_persist: true,
        geocode_url: None,
        forecast_url: None,
    }
}

pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 12, 9, 30, 0)
        .single()
        .expect("valid fixed time")
}

pub(crate) fn fixture_payload(days: usize) -> ForecastPayload {
    let hours = days * 24;
    ForecastPayload {
        current: CurrentBlock {
            time: Some("2026-02-12T09:15".to_string()),
            temperature_2m: 7.2,
            relative_humidity_2m: Some(73.0),
            apparent_temperature: 5.8,
            precipitation: Some(0.4),
            pressure_msl: Some(1008.2),
            weathercode: Some(61),
            visibility: Some(11_200.0),
            windspeed_10m: Some(12.0),
            winddirection_10m: Some(220.0),
        },
        daily: DailyBlock {
            time: (0..days).map(|d| format!("2026-02-{:02}", 12 + d)).collect(),
            weathercode: vec![Some(61); days],
            temperature_2m_max: (0..days).map(|d| Some(8.0 + d as f64)).collect(),
            temperature_2m_min: (0..days).map(|d| Some(1.0 + d as f64 * 0.5)).collect(),
            precipitation_probability_max: vec![Some(40.0); days],
        },
        hourly: HourlyBlock {
            time: (0..hours)
                .map(|h| format!("2026-02-{:02}T{:02}:00", 12 + h / 24, h % 24))
                .collect(),
            temperature_2m: (0..hours).map(|h| Some(2.0 + (h % 24) as f64 * 0.25)).collect(),
            weathercode: vec![Some(3); hours],
        },
    }
}

pub(crate) fn fixture_record(city: &str) -> WeatherRecord {
    let place = GeoMatch {
        name: city.to_string(),
        country: "Sweden".to_string(),
        latitude: 59.3293,
        longitude: 18.0686,
    };
    assemble(
        &place,
        &fixture_payload(3),
        AssembleOptions::with_forecast(3),
        fixed_now(),
    )
}
