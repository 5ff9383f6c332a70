pub const DEFAULT_UV_INDEX: f64 = 0.0;
pub const DEFAULT_PRESSURE_MB: f64 = 1013.0;
pub const DEFAULT_VISIBILITY_KM: f64 = 10.0;
pub const DEFAULT_PRECIPITATION_MM: f64 = 0.0;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

#[must_use]
pub fn wind_direction(degrees: f64) -> &'static str {
    let sector = (degrees / 22.5).round() as i64;
    COMPASS_POINTS[sector.rem_euclid(16) as usize]
}

#[must_use]
pub fn pressure_or_default(pressure_mb: Option<f64>) -> f64 {
    present(pressure_mb).unwrap_or(DEFAULT_PRESSURE_MB)
}

#[must_use]
pub fn precipitation_or_default(precip_mm: Option<f64>) -> f64 {
    present(precip_mm).unwrap_or(DEFAULT_PRECIPITATION_MM)
}

/// Converts meters to kilometers; the fallback applies to the converted value.
#[must_use]
pub fn visibility_km_or_default(visibility_m: Option<f64>) -> f64 {
    present(visibility_m.map(|meters| meters / 1000.0)).unwrap_or(DEFAULT_VISIBILITY_KM)
}

#[must_use]
pub fn or_zero(value: Option<f64>) -> f64 {
    present(value).unwrap_or(0.0)
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}

#[must_use]
pub fn round_temp(value: f64) -> i32 {
    value.round() as i32
}
