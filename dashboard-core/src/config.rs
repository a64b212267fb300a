use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Environment variable that overrides the configured backend URL.
pub const BACKEND_URL_ENV: &str = "WEATHER_DASHBOARD_URL";

/// Location queried at startup when none is configured.
pub const DEFAULT_LOCATION: &str = "Bengaluru";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Base URL of the weather backend, e.g. "http://localhost:5000".
    pub backend_url: Option<String>,

    /// Location fetched at startup. Falls back to [`DEFAULT_LOCATION`].
    pub default_location: Option<String>,
}

impl Config {
    /// Resolve the backend base URL: environment variable first, then the
    /// config file. Missing both is an actionable error.
    pub fn backend_url(&self) -> Result<String> {
        let env = std::env::var(BACKEND_URL_ENV).ok();
        self.resolve_backend_url(env)
    }

    fn resolve_backend_url(&self, env_override: Option<String>) -> Result<String> {
        env_override
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.backend_url.clone())
            .ok_or_else(|| {
                anyhow!(
                    "No weather backend configured.\n\
                     Hint: run `dashboard configure` or set the {BACKEND_URL_ENV} environment variable."
                )
            })
    }

    pub fn set_backend_url(&mut self, url: String) {
        self.backend_url = Some(url);
    }

    pub fn default_location(&self) -> &str {
        self.default_location.as_deref().unwrap_or(DEFAULT_LOCATION)
    }

    pub fn set_default_location(&mut self, location: String) {
        self.default_location = Some(location);
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
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
