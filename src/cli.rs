use clap::{Parser, ValueEnum};

use crate::data::SearchOptions;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    Celsius,
    Fahrenheit,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "weather-lookup",
    version,
    about = "Look up current conditions and a multi-day forecast for a city"
)]
pub struct Cli {
    /// City name (default: last searched city, else London)
    pub city: Option<String>,

    /// Forecast days (1..16)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(1..=16))]
    pub days: u8,

    /// Display units
    #[arg(long, value_enum, default_value_t = UnitsArg::Celsius)]
    pub units: UnitsArg,

    /// Fetch current conditions only
    #[arg(long)]
    pub current_only: bool,

    /// Print the weather record as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep reading city names from stdin
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Toggle the searched city in saved locations after a successful lookup
    #[arg(long)]
    pub save: bool,

    /// Do not read or write the preferences store
    #[arg(long)]
    pub no_persist: bool,

    /// Override the geocoding endpoint
    #[arg(long)]
    pub geocode_url: Option<String>,

    /// Override the forecast endpoint
    #[arg(long)]
    pub forecast_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            days: self.days,
            current_only: self.current_only,
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.json && self.interactive {
            anyhow::bail!("--json cannot be combined with --interactive");
        }
        if self.city.as_deref().is_some_and(|city| city.trim().is_empty()) {
            anyhow::bail!("city must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, UnitsArg};

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["weather-lookup"]);
        assert!(cli.city.is_none());
        assert_eq!(cli.days, 5);
        assert_eq!(cli.units, UnitsArg::Celsius);
        assert!(!cli.current_only);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn parses_city_and_flags() {
        let cli = Cli::parse_from([
            "weather-lookup",
            "New York",
            "--days",
            "3",
            "--units",
            "fahrenheit",
            "--json",
        ]);
        assert_eq!(cli.city.as_deref(), Some("New York"));
        assert_eq!(cli.search_options().days, 3);
        assert_eq!(cli.units, UnitsArg::Fahrenheit);
        assert!(cli.json);
    }

    #[test]
    fn rejects_out_of_range_days() {
        assert!(Cli::try_parse_from(["weather-lookup", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["weather-lookup", "--days", "17"]).is_err());
    }

    #[test]
    fn json_and_interactive_conflict() {
        let cli = Cli::parse_from(["weather-lookup", "--json", "-i"]);
        let err = cli.validate().expect_err("expected conflict");
        assert!(err.to_string().contains("--interactive"));
    }

    #[test]
    fn blank_city_is_rejected() {
        let cli = Cli::parse_from(["weather-lookup", "  "]);
        assert!(cli.validate().is_err());
    }
}
