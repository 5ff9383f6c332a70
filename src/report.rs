//! Plain-text and JSON rendering of a [`WeatherRecord`].

use std::fmt::Write as _;

use crate::domain::weather::{
    ForecastDay, Units, WeatherRecord, parse_date, parse_datetime, round_temp,
};

const HOURLY_STEP: usize = 3;

/// `2026-02-12T15:00` -> `3:00 PM`. Unparseable input is returned as-is.
pub fn format_time(value: &str) -> String {
    parse_datetime(value).map_or_else(
        || value.to_string(),
        |time| time.format("%-I:%M %p").to_string(),
    )
}

/// `2026-02-12` -> `Thu, Feb 12`.
pub fn format_date(value: &str) -> String {
    parse_date(value).map_or_else(
        || value.to_string(),
        |date| date.format("%a, %b %-d").to_string(),
    )
}

/// `2026-02-12` -> `Thu`.
pub fn format_day(value: &str) -> String {
    parse_date(value).map_or_else(|| value.to_string(), |date| date.format("%a").to_string())
}

fn unit_suffix(units: Units) -> &'static str {
    match units {
        Units::Celsius => "°C",
        Units::Fahrenheit => "°F",
    }
}

pub fn render_text(record: &WeatherRecord, units: Units) -> String {
    let mut out = String::new();
    let current = &record.current;
    let suffix = unit_suffix(units);

    let _ = writeln!(out, "{}", location_line(record));
    let _ = writeln!(
        out,
        "Now: {}{suffix}  {}  (feels like {}{suffix})",
        round_temp(current.temp(units)),
        current.condition.text,
        round_temp(current.feels_like(units)),
    );
    let _ = writeln!(
        out,
        "Humidity {}%  Wind {} km/h {}  Pressure {} mb  Visibility {} km  Precip {} mm  UV {}",
        current.humidity.round(),
        current.wind_kph.round(),
        current.wind_dir,
        current.pressure_mb.round(),
        current.vis_km,
        current.precip_mm,
        current.uv,
    );
    let _ = writeln!(out, "Updated {}", current.last_updated);

    if let Some(first) = record.days().first() {
        let hours = hourly_line(first, units);
        if !hours.is_empty() {
            let _ = writeln!(out, "Today: {hours}");
        }
    }

    if !record.days().is_empty() {
        let _ = writeln!(out, "\n{}-Day Forecast", record.days().len());
        for day in record.days() {
            let _ = writeln!(out, "{}", day_line(day, units));
        }
    }

    out
}

pub fn render_json(record: &WeatherRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(record)
}

fn location_line(record: &WeatherRecord) -> String {
    let location = &record.location;
    if location.country.is_empty() {
        location.name.clone()
    } else {
        format!("{}, {}", location.name, location.country)
    }
}

fn day_line(day: &ForecastDay, units: Units) -> String {
    let (high, low) = day.day.high_low(units);
    format!(
        "{:<12} {:>4}° / {:>4}°  {:<24} rain {}%",
        format_date(&day.date),
        round_temp(high),
        round_temp(low),
        day.day.condition.text,
        day.day.daily_chance_of_rain.round(),
    )
}

fn hourly_line(day: &ForecastDay, units: Units) -> String {
    day.hour
        .iter()
        .step_by(HOURLY_STEP)
        .map(|hour| format!("{} {}°", format_time(&hour.time), round_temp(hour.temp(units))))
        .collect::<Vec<_>>()
        .join("  ")
}
