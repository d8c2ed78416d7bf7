//! Human-friendly rendering of a weather snapshot.

use weatherapp_core::{Flags, WeatherSnapshot, flags, icon};

/// Render the view for one snapshot as printable lines.
///
/// `session` is the per-invocation correlation token shown in the flag
/// status footer.
pub fn render(snapshot: &WeatherSnapshot, flag_values: &Flags, session: &str) -> Vec<String> {
    let scale = flag_values.temperature_scale();
    let icon_token = icon::icon_for_condition(&snapshot.condition);

    // when dynamic theming is on, the theme follows the icon
    let theme = if flag_values.dynamic_weather_theme() {
        icon_token.trim_start_matches("wi-")
    } else {
        "default"
    };

    vec![
        "The Weather App".to_string(),
        format!("  City:        {}", snapshot.city),
        format!("  Temperature: {}", scale.format(snapshot.temperature_c)),
        format!("  Condition:   {}  [{}]", snapshot.condition, icon_token),
        format!("  Theme:       {theme}"),
        format!("  Updated:     {}", snapshot.observation_time.format("%Y-%m-%d %H:%M UTC")),
        format!("Flag status (session {session}):"),
        format!("  {} = {}", flags::TEMPERATURE_SCALE, scale),
        format!("  {} = {}", flags::DYNAMIC_WEATHER_THEME, flag_values.dynamic_weather_theme()),
    ]
}
