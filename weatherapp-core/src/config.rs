use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// WeatherAPI.com key.
    pub api_key: Option<String>,

    /// City shown when no city is passed on the command line.
    pub default_city: Option<String>,

    /// Flag values pinned in config. Example TOML:
    /// [flags]
    /// temperature-scale = "fahrenheit"
    #[serde(default)]
    pub flags: HashMap<String, String>,
}

impl Config {
    /// API key, or a hint-carrying error when not configured yet.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weatherapp configure` and enter your WeatherAPI.com key."
            )
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherapp", "weatherapp-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{Flags, TEMPERATURE_SCALE};
    use crate::units::TemperatureScale;

    #[test]
    fn api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(!cfg.is_configured());
    }

    #[test]
    fn set_api_key_configures() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());

        assert!(cfg.is_configured());
        assert_eq!(cfg.api_key().expect("key must exist"), "KEY");
    }

    #[test]
    fn flags_table_parses_from_toml() {
        let cfg: Config = toml::from_str(
            r#"
            api_key = "KEY"
            default_city = "London"

            [flags]
            temperature-scale = "fahrenheit"
            "#,
        )
        .expect("config must parse");

        assert_eq!(cfg.default_city.as_deref(), Some("London"));
        assert_eq!(cfg.flags.get(TEMPERATURE_SCALE).map(String::as_str), Some("fahrenheit"));

        let flags = Flags::from_pairs(&cfg.flags);
        assert_eq!(flags.temperature_scale(), TemperatureScale::Fahrenheit);
    }

    #[test]
    fn empty_file_is_a_valid_config() {
        let cfg: Config = toml::from_str("").expect("empty config must parse");

        assert!(!cfg.is_configured());
        assert!(cfg.default_city.is_none());
        assert!(cfg.flags.is_empty());
    }
}
