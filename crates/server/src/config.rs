use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "/opt/workforce/config.json";

const DEFAULT_DB_PATH: &str = "/opt/workforce/data/workforce.db";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct WorkforceConfig {
    pub database_path: Option<String>,
    pub bind_address: Option<String>,
}

impl WorkforceConfig {
    /// Loads the configuration from `WORKFORCE_CONFIG_PATH` (or the default
    /// location). A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("WORKFORCE_CONFIG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

        let path = Path::new(&config_path);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {config_path}"))?;

        let config = serde_json::from_str::<Self>(&raw)
            .with_context(|| format!("Failed to parse config JSON: {config_path}"))?;

        Ok(config)
    }

    #[must_use]
    pub fn database_path(&self) -> String {
        self.database_path
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                std::env::var("WORKFORCE_DB_PATH")
                    .ok()
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        self.bind_address
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
            .or_else(|| {
                std::env::var("WORKFORCE_BIND")
                    .ok()
                    .map(|value| value.trim().to_string())
                    .filter(|value| !value.is_empty())
            })
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
    }
}
