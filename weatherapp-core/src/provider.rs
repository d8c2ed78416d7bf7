use crate::{
    Config,
    model::{WeatherRequest, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current_weather(&self, request: &WeatherRequest) -> anyhow::Result<WeatherSnapshot>;
}

/// Construct the HTTP weather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;
    Ok(Box::new(weatherapi::WeatherApiProvider::new(api_key.to_owned())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_configured() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }

    #[derive(Debug)]
    struct FixedProvider;

    #[async_trait]
    impl WeatherProvider for FixedProvider {
        async fn current_weather(
            &self,
            request: &WeatherRequest,
        ) -> anyhow::Result<WeatherSnapshot> {
            Ok(WeatherSnapshot {
                city: request.city.clone(),
                temperature_c: 18.0,
                condition: "Sunny".to_string(),
                observation_time: Utc::now(),
            })
        }
    }

    #[tokio::test]
    async fn trait_object_dispatch() {
        let provider: Box<dyn WeatherProvider> = Box::new(FixedProvider);
        let request = WeatherRequest { city: "London".to_string() };

        let snapshot = provider.current_weather(&request).await.expect("fixed provider succeeds");
        assert_eq!(snapshot.city, "London");
        assert_eq!(snapshot.condition, "Sunny");
    }
}
