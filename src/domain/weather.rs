use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

mod conditions;
mod conversions;

pub use conditions::*;
pub use conversions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

/// Top geocoding match for a free-text query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoMatch {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoMatch {
    pub fn display_name(&self) -> String {
        if self.country.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.country)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
    pub code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub humidity: f64,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub uv: f64,
    pub last_updated: String,
    pub precip_mm: f64,
    pub pressure_mb: f64,
    pub vis_km: f64,
}

impl CurrentConditions {
    pub fn temp(&self, units: Units) -> f64 {
        pick(units, self.temp_c, self.temp_f)
    }

    pub fn feels_like(&self, units: Units) -> f64 {
        pick(units, self.feelslike_c, self.feelslike_f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub maxtemp_f: f64,
    pub mintemp_c: f64,
    pub mintemp_f: f64,
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub condition: Condition,
    pub daily_chance_of_rain: f64,
}

impl DaySummary {
    pub fn high_low(&self, units: Units) -> (f64, f64) {
        (
            pick(units, self.maxtemp_c, self.maxtemp_f),
            pick(units, self.mintemp_c, self.mintemp_f),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time: String,
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
}

impl HourlyPoint {
    pub fn temp(&self, units: Units) -> f64 {
        pick(units, self.temp_c, self.temp_f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: String,
    pub date_epoch: i64,
    pub day: DaySummary,
    pub hour: Vec<HourlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// The canonical result of one successful search.
///
/// Records are never patched: a newer search produces a new record which
/// replaces the displayed one wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub location: Location,
    pub current: CurrentConditions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecast: Option<Forecast>,
}

impl WeatherRecord {
    pub fn days(&self) -> &[ForecastDay] {
        self.forecast
            .as_ref()
            .map_or(&[], |forecast| forecast.forecastday.as_slice())
    }
}

fn pick(units: Units, celsius: f64, fahrenheit: f64) -> f64 {
    match units {
        Units::Celsius => celsius,
        Units::Fahrenheit => fahrenheit,
    }
}

#[must_use]
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M").ok()
}

#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests;
