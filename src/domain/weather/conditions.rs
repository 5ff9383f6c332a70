use super::Condition;

const ICON_BASE: &str = "//cdn.weatherapi.com/weather/64x64/day";

/// Code used for anything the table does not list.
pub const UNKNOWN_CONDITION_CODE: u16 = 1006;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConditionEntry {
    text: &'static str,
    icon: u16,
    code: u16,
}

const fn entry(text: &'static str, icon: u16, code: u16) -> ConditionEntry {
    ConditionEntry { text, icon, code }
}

const UNKNOWN: ConditionEntry = entry("Unknown", 143, UNKNOWN_CONDITION_CODE);

// WMO code -> (text, weatherapi icon id, normalized code)
const CONDITIONS: &[(&[u16], ConditionEntry)] = &[
    (&[0], entry("Clear sky", 113, 1000)),
    (&[1], entry("Mainly clear", 116, 1003)),
    (&[2], entry("Partly cloudy", 116, 1003)),
    (&[3], entry("Overcast", 119, 1006)),
    (&[45, 48], entry("Fog", 248, 1135)),
    (&[51], entry("Light drizzle", 266, 1153)),
    (&[53], entry("Moderate drizzle", 266, 1153)),
    (&[55], entry("Dense drizzle", 266, 1153)),
    (&[56, 57], entry("Freezing drizzle", 281, 1198)),
    (&[61], entry("Slight rain", 296, 1183)),
    (&[63], entry("Moderate rain", 302, 1189)),
    (&[65], entry("Heavy rain", 308, 1195)),
    (&[66, 67], entry("Freezing rain", 311, 1198)),
    (&[71], entry("Slight snow", 326, 1213)),
    (&[73], entry("Moderate snow", 329, 1216)),
    (&[75, 77], entry("Heavy snow", 338, 1225)),
    (&[80, 81, 82], entry("Rain showers", 353, 1240)),
    (&[85, 86], entry("Snow showers", 368, 1255)),
    (&[95], entry("Thunderstorm", 200, 1087)),
    (&[96, 99], entry("Thunderstorm with hail", 389, 1276)),
];

fn lookup(code: u16) -> ConditionEntry {
    CONDITIONS
        .iter()
        .find_map(|(codes, entry)| codes.contains(&code).then_some(*entry))
        .unwrap_or(UNKNOWN)
}

impl ConditionEntry {
    fn to_condition(self) -> Condition {
        Condition {
            text: self.text.to_string(),
            icon: format!("{ICON_BASE}/{}.png", self.icon),
            code: self.code,
        }
    }
}

/// Maps a provider (WMO) weather code to the normalized condition. Never fails.
#[must_use]
pub fn condition_for_code(code: u16) -> Condition {
    lookup(code).to_condition()
}

/// Same as [`condition_for_code`], with a missing code treated as unknown.
#[must_use]
pub fn condition_for(code: Option<u16>) -> Condition {
    code.map_or_else(|| UNKNOWN.to_condition(), condition_for_code)
}

/// Provider codes that have an explicit table entry.
pub fn known_codes() -> impl Iterator<Item = u16> {
    CONDITIONS.iter().flat_map(|(codes, _)| codes.iter().copied())
}
