use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city: String,
}

/// Current conditions for one city, as returned by a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub observation_time: DateTime<Utc>,
}
