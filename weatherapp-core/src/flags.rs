//! Feature-flag values consumed by the demo.
//!
//! The flag service itself is an external collaborator; this module
//! only holds the evaluated values by key and substitutes a default
//! when a key is unset.

use std::collections::HashMap;

use crate::units::TemperatureScale;

/// String flag selecting the display unit ("celsius" or "fahrenheit").
pub const TEMPERATURE_SCALE: &str = "temperature-scale";

/// Boolean flag enabling condition-driven theming of the view.
pub const DYNAMIC_WEATHER_THEME: &str = "dynamic-weather-theme";

/// String-keyed flag values with default substitution on lookup.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    values: HashMap<String, String>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a config table of `key = "value"` pairs.
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        Self { values: pairs.clone() }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// String variation: the stored value, or `default` when unset.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values.get(key).map_or(default, String::as_str)
    }

    /// Bool variation: `default` when the key is unset or its value is
    /// not "true"/"false".
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
    }

    pub fn temperature_scale(&self) -> TemperatureScale {
        TemperatureScale::from_flag(self.str_or(TEMPERATURE_SCALE, "celsius"))
    }

    pub fn dynamic_weather_theme(&self) -> bool {
        self.bool_or(DYNAMIC_WEATHER_THEME, false)
    }
}
