use proptest::prelude::*;

use super::*;

const EXPECTED: &[(u16, &str, u16)] = &[
    (0, "Clear sky", 1000),
    (1, "Mainly clear", 1003),
    (2, "Partly cloudy", 1003),
    (3, "Overcast", 1006),
    (45, "Fog", 1135),
    (48, "Fog", 1135),
    (51, "Light drizzle", 1153),
    (53, "Moderate drizzle", 1153),
    (55, "Dense drizzle", 1153),
    (56, "Freezing drizzle", 1198),
    (57, "Freezing drizzle", 1198),
    (61, "Slight rain", 1183),
    (63, "Moderate rain", 1189),
    (65, "Heavy rain", 1195),
    (66, "Freezing rain", 1198),
    (67, "Freezing rain", 1198),
    (71, "Slight snow", 1213),
    (73, "Moderate snow", 1216),
    (75, "Heavy snow", 1225),
    (77, "Heavy snow", 1225),
    (80, "Rain showers", 1240),
    (81, "Rain showers", 1240),
    (82, "Rain showers", 1240),
    (85, "Snow showers", 1255),
    (86, "Snow showers", 1255),
    (95, "Thunderstorm", 1087),
    (96, "Thunderstorm with hail", 1276),
    (99, "Thunderstorm with hail", 1276),
];

#[test]
fn every_listed_code_maps_to_its_text_and_code() {
    for (provider, text, code) in EXPECTED {
        let condition = condition_for_code(*provider);
        assert_eq!(condition.text, *text, "text for provider code {provider}");
        assert_eq!(condition.code, *code, "code for provider code {provider}");
    }
    assert_eq!(known_codes().count(), EXPECTED.len());
}

#[test]
fn unlisted_codes_fall_back_to_unknown() {
    for provider in [4, 50, 100, 1000, u16::MAX] {
        let condition = condition_for_code(provider);
        assert_eq!(condition.text, "Unknown");
        assert_eq!(condition.code, UNKNOWN_CONDITION_CODE);
        assert_eq!(condition.icon, "//cdn.weatherapi.com/weather/64x64/day/143.png");
    }
}

#[test]
fn missing_code_is_unknown() {
    assert_eq!(condition_for(None), condition_for_code(1000));
    assert_eq!(condition_for(Some(61)), condition_for_code(61));
}

#[test]
fn icons_are_fixed_lookup_values() {
    assert_eq!(
        condition_for_code(0).icon,
        "//cdn.weatherapi.com/weather/64x64/day/113.png"
    );
    assert_eq!(condition_for_code(1).icon, condition_for_code(2).icon);
    assert_eq!(
        condition_for_code(99).icon,
        "//cdn.weatherapi.com/weather/64x64/day/389.png"
    );
}

#[test]
fn fahrenheit_known_pairs() {
    assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    assert_eq!(round_temp(celsius_to_fahrenheit(20.0)), 68);
}

#[test]
fn compass_cardinal_points_and_wrap() {
    assert_eq!(wind_direction(0.0), "N");
    assert_eq!(wind_direction(90.0), "E");
    assert_eq!(wind_direction(180.0), "S");
    assert_eq!(wind_direction(270.0), "W");
    assert_eq!(wind_direction(349.0), "N");
    assert_eq!(wind_direction(360.0), "N");
    assert_eq!(wind_direction(22.5), "NNE");
    assert_eq!(wind_direction(-90.0), "W");
}

#[test]
fn fallbacks_apply_only_when_absent() {
    assert_eq!(visibility_km_or_default(None), 10.0);
    assert_eq!(visibility_km_or_default(Some(5000.0)), 5.0);
    assert_eq!(visibility_km_or_default(Some(f64::NAN)), 10.0);
    assert_eq!(pressure_or_default(None), 1013.0);
    assert_eq!(pressure_or_default(Some(998.4)), 998.4);
    assert_eq!(precipitation_or_default(None), 0.0);
    assert_eq!(precipitation_or_default(Some(1.2)), 1.2);
    assert_eq!(or_zero(None), 0.0);
}

#[test]
fn date_and_time_parsers_accept_provider_formats() {
    assert!(parse_date("2026-02-12").is_some());
    assert!(parse_datetime("2026-02-12T10:00").is_some());
    assert!(parse_datetime("2026-02-12 10:00").is_none());
}

proptest! {
    #[test]
    fn compass_label_is_always_a_known_point(deg in -720.0f64..720.0) {
        prop_assert!(COMPASS_LABELS.contains(&wind_direction(deg)));
    }

    #[test]
    fn compass_is_periodic(tenths in 0u32..3600) {
        let deg = f64::from(tenths) / 10.0;
        prop_assert_eq!(wind_direction(deg), wind_direction(deg + 360.0));
    }

    #[test]
    fn fahrenheit_is_affine(c in -100.0f64..100.0) {
        let delta = celsius_to_fahrenheit(c + 1.0) - celsius_to_fahrenheit(c);
        prop_assert!((delta - 1.8).abs() < 1e-9);
    }
}

const COMPASS_LABELS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];
