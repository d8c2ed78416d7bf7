//! Condition label to display icon mapping.

/// Icon used for every condition label outside the table below.
pub const DEFAULT_ICON: &str = "wi-day-cloudy";

/// Map a provider condition label to a weather-icons token.
///
/// Lookup is a case-sensitive exact match; any unmapped label falls
/// back to [`DEFAULT_ICON`], so the result is never empty.
pub fn icon_for_condition(condition: &str) -> &'static str {
    match condition {
        "Sunny" => "wi-day-sunny",
        "Clear" => "wi-night-clear",
        "Partly cloudy" => "wi-day-cloudy",
        "Cloudy" | "Overcast" => "wi-cloudy",
        "Mist" | "Fog" => "wi-fog",
        "Rain" => "wi-rain",
        "Light rain" => "wi-sprinkle",
        "Heavy rain" => "wi-rain-wind",
        "Snow" => "wi-snow",
        "Thunderstorm" => "wi-thunderstorm",
        _ => DEFAULT_ICON,
    }
}
