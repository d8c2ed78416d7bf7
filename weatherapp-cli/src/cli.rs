use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use weatherapp_core::{Config, Flags, WeatherRequest, flags, ident, provider};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherapp", version, about = "The Weather App, demo CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key and a default city.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name; falls back to the configured default city.
        city: Option<String>,

        /// Override the `temperature-scale` flag ("celsius" or "fahrenheit").
        #[arg(long)]
        scale: Option<String>,

        /// Override the `dynamic-weather-theme` flag.
        #[arg(long)]
        theme: Option<bool>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, scale, theme } => show(city, scale, theme).await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("WeatherAPI.com key:").prompt()?;
    let default_city = inquire::Text::new("Default city:")
        .with_initial_value(config.default_city.as_deref().unwrap_or(""))
        .prompt()?;

    config.set_api_key(api_key);
    if !default_city.trim().is_empty() {
        config.default_city = Some(default_city.trim().to_string());
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

async fn show(city: Option<String>, scale: Option<String>, theme: Option<bool>) -> Result<()> {
    let config = Config::load()?;

    let city = city.or_else(|| config.default_city.clone()).ok_or_else(|| {
        anyhow!(
            "No city given and no default city configured.\n\
             Hint: pass a city (`weatherapp show London`) or run `weatherapp configure`."
        )
    })?;

    // config-pinned flag values, then command-line overrides on top
    let mut flag_values = Flags::from_pairs(&config.flags);
    if let Some(scale) = scale {
        flag_values.set(flags::TEMPERATURE_SCALE, scale);
    }
    if let Some(theme) = theme {
        flag_values.set(flags::DYNAMIC_WEATHER_THEME, theme.to_string());
    }

    let provider = provider::provider_from_config(&config)?;
    let snapshot = provider.current_weather(&WeatherRequest { city }).await?;

    let session = ident::generate_guid();
    for line in view::render(&snapshot, &flag_values, &session) {
        println!("{line}");
    }

    Ok(())
}
