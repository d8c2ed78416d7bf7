use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::model::{WeatherRequest, WeatherSnapshot};

use super::WeatherProvider;

#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot> {
        let url = "http://api.weatherapi.com/v1/current.json";

        let res = self
            .http
            .get(url)
            .query(&[("key", self.api_key.as_str()), ("q", request.city.as_str())])
            .send()
            .await
            .context("Failed to send request to WeatherAPI.com (current)")?;

        let status = res.status();
        let body = res.text().await.context("Failed to read WeatherAPI current response body")?;

        if !status.is_success() {
            return Err(anyhow::anyhow!(
                "WeatherAPI current request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        snapshot_from_json(&body)
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    localtime_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    condition: WaCondition,
    last_updated_epoch: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

fn snapshot_from_json(body: &str) -> Result<WeatherSnapshot> {
    let parsed: WaResponse =
        serde_json::from_str(body).context("Failed to parse WeatherAPI current JSON")?;

    let ts = parsed.current.last_updated_epoch.or(parsed.location.localtime_epoch);
    let observation_time = ts.and_then(unix_to_utc).unwrap_or_else(Utc::now);

    Ok(WeatherSnapshot {
        city: parsed.location.name,
        temperature_c: parsed.current.temp_c,
        condition: parsed.current.condition.text,
        observation_time,
    })
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
