//! Turns a geocoding match plus a raw forecast payload into a [`WeatherRecord`].

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    data::forecast::{CurrentBlock, DailyBlock, ForecastPayload, HourlyBlock},
    domain::weather::{
        CurrentConditions, DEFAULT_UV_INDEX, DaySummary, Forecast, ForecastDay, GeoMatch,
        HourlyPoint, Location, WeatherRecord, celsius_to_fahrenheit, condition_for, or_zero,
        parse_date, precipitation_or_default, pressure_or_default, visibility_km_or_default,
        wind_direction,
    },
};

pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    pub days: u8,
    pub include_forecast: bool,
}

impl AssembleOptions {
    pub fn with_forecast(days: u8) -> Self {
        Self {
            days,
            include_forecast: true,
        }
    }

    pub fn current_only() -> Self {
        Self {
            days: 1,
            include_forecast: false,
        }
    }
}

pub fn assemble(
    place: &GeoMatch,
    payload: &ForecastPayload,
    options: AssembleOptions,
    now: DateTime<Utc>,
) -> WeatherRecord {
    let now_iso = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    let forecast = options.include_forecast.then(|| Forecast {
        forecastday: forecast_days(&payload.daily, &payload.hourly, usize::from(options.days)),
    });

    WeatherRecord {
        location: Location {
            name: place.name.clone(),
            country: place.country.clone(),
            localtime: now_iso.clone(),
        },
        current: current_conditions(&payload.current, now_iso),
        forecast,
    }
}

fn current_conditions(current: &CurrentBlock, now_iso: String) -> CurrentConditions {
    CurrentConditions {
        temp_c: current.temperature_2m,
        temp_f: celsius_to_fahrenheit(current.temperature_2m),
        condition: condition_for(current.weathercode),
        humidity: or_zero(current.relative_humidity_2m),
        wind_kph: or_zero(current.windspeed_10m),
        wind_dir: wind_direction(or_zero(current.winddirection_10m)).to_string(),
        feelslike_c: current.apparent_temperature,
        feelslike_f: celsius_to_fahrenheit(current.apparent_temperature),
        // Open-Meteo's current block carries no UV index.
        uv: DEFAULT_UV_INDEX,
        last_updated: current.time.clone().unwrap_or(now_iso),
        precip_mm: precipitation_or_default(current.precipitation),
        pressure_mb: pressure_or_default(current.pressure_msl),
        vis_km: visibility_km_or_default(current.visibility),
    }
}

/// Days beyond the daily series, or from the first day with a null bound on,
/// are not produced.
pub fn forecast_days(daily: &DailyBlock, hourly: &HourlyBlock, days: usize) -> Vec<ForecastDay> {
    (0..days)
        .map_while(|idx| forecast_day(daily, hourly, idx))
        .collect()
}

fn forecast_day(daily: &DailyBlock, hourly: &HourlyBlock, idx: usize) -> Option<ForecastDay> {
    let date = daily.time.get(idx)?;
    let max_c = daily.temperature_2m_max.get(idx).copied().flatten()?;
    let min_c = daily.temperature_2m_min.get(idx).copied().flatten()?;
    let avg_c = (max_c + min_c) / 2.0;

    Some(ForecastDay {
        date: date.clone(),
        date_epoch: date_epoch(date),
        day: DaySummary {
            maxtemp_c: max_c,
            maxtemp_f: celsius_to_fahrenheit(max_c),
            mintemp_c: min_c,
            mintemp_f: celsius_to_fahrenheit(min_c),
            avgtemp_c: avg_c,
            avgtemp_f: celsius_to_fahrenheit(avg_c),
            condition: condition_for(daily.weathercode.get(idx).copied().flatten()),
            daily_chance_of_rain: or_zero(
                daily
                    .precipitation_probability_max
                    .get(idx)
                    .copied()
                    .flatten(),
            ),
        },
        hour: hourly_window(hourly, idx),
    })
}

/// Hours `[idx * 24, (idx + 1) * 24)` of the flat series, truncated at its end
/// or at the first null temperature.
pub fn hourly_window(hourly: &HourlyBlock, idx: usize) -> Vec<HourlyPoint> {
    let start = idx * HOURS_PER_DAY;
    (start..start + HOURS_PER_DAY)
        .map_while(|h| {
            let time = hourly.time.get(h)?;
            let temp_c = hourly.temperature_2m.get(h).copied().flatten()?;
            Some(HourlyPoint {
                time: time.clone(),
                temp_c,
                temp_f: celsius_to_fahrenheit(temp_c),
                condition: condition_for(hourly.weathercode.get(h).copied().flatten()),
            })
        })
        .collect()
}

/// Seconds since the epoch at UTC midnight of an ISO date; 0 when unparseable.
fn date_epoch(date: &str) -> i64 {
    parse_date(date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0, |midnight| midnight.and_utc().timestamp())
}
