use crate::domain::weather::Units;

/// A line typed in interactive mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    ToggleSave,
    ShowSaved,
    ShowHistory,
    SetUnits(Units),
    Suggest(String),
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Search(line.to_string());
    };
    let (name, arg) = rest
        .trim()
        .split_once(char::is_whitespace)
        .map_or((rest.trim(), ""), |(name, arg)| (name, arg.trim()));
    match name.to_ascii_lowercase().as_str() {
        "suggest" => Command::Suggest(arg.to_string()),
        "q" | "quit" | "exit" => Command::Quit,
        "save" | "s" => Command::ToggleSave,
        "saved" => Command::ShowSaved,
        "history" | "h" => Command::ShowHistory,
        "c" | "celsius" => Command::SetUnits(Units::Celsius),
        "f" | "fahrenheit" => Command::SetUnits(Units::Fahrenheit),
        "help" | "?" => Command::Help,
        other => Command::Unknown(other.to_string()),
    }
}

pub const HELP_TEXT: &str =
    "Type a city name to search. Commands: :save  :saved  :history  :suggest <prefix>  :c  :f  :help  :q";

pub const POPULAR_CITIES: [&str; 10] = [
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Berlin",
    "Rome",
    "Madrid",
    "Toronto",
    "Singapore",
];

pub const SUGGESTION_LIMIT: usize = 5;

/// Popular cities starting with `prefix`, ignoring case. A blank prefix
/// suggests nothing.
pub fn suggestions(prefix: &str) -> Vec<&'static str> {
    matching(&POPULAR_CITIES, prefix)
}

fn matching<'a>(cities: &[&'a str], prefix: &str) -> Vec<&'a str> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return Vec::new();
    }
    cities
        .iter()
        .copied()
        .filter(|city| city.to_lowercase().starts_with(&prefix))
        .take(SUGGESTION_LIMIT)
        .collect()
}
