//! Temperature scales and conversion.

/// Convert Celsius to Fahrenheit, rounded to the nearest integer
/// (half away from zero, per `f64::round`).
///
/// Total over all finite inputs. Non-finite input saturates through the
/// `as` cast: NaN becomes 0, infinities clamp to the `i32` bounds.
pub fn celsius_to_fahrenheit(celsius: f64) -> i32 {
    (celsius * 9.0 / 5.0 + 32.0).round() as i32
}

/// Display unit selected by the `temperature-scale` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureScale {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureScale {
    /// Parse a flag value. Anything other than "fahrenheit" means
    /// Celsius, the provider's native unit.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "fahrenheit" => TemperatureScale::Fahrenheit,
            _ => TemperatureScale::Celsius,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureScale::Celsius => "celsius",
            TemperatureScale::Fahrenheit => "fahrenheit",
        }
    }

    /// Render a Celsius measurement in this scale, e.g. "18°C" or "64°F".
    pub fn format(&self, temperature_c: f64) -> String {
        match self {
            TemperatureScale::Celsius => format!("{}°C", temperature_c.round() as i32),
            TemperatureScale::Fahrenheit => format!("{}°F", celsius_to_fahrenheit(temperature_c)),
        }
    }
}

impl std::fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
