// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::render::TipMarkers;
use crate::utils::normalize_origin;

pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_CONFIG_FILE: &str = "ats-match.yaml";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the analysis endpoints are resolved against, without trailing slash
    pub origin: String,
    pub timeout_seconds: u64,
    pub tip_markers: TipMarkers,
}

/// Shape of the optional YAML file; every key may be omitted
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    origin: Option<String>,
    timeout_seconds: Option<u64>,
    tip_markers: Option<Vec<String>>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            tip_markers: TipMarkers::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults, then YAML file, then environment, then the `--origin` override
    pub fn load(config_path: Option<&Path>, origin_override: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file) = Self::read_file(config_path)? {
            config.apply_file(file);
        }

        config.apply_env(|key| std::env::var(key).ok())?;

        if let Some(origin) = origin_override {
            config.origin = origin.to_string();
        }

        config.origin = normalize_origin(&config.origin)?;
        if config.timeout_seconds == 0 {
            anyhow::bail!("timeout_seconds must be greater than zero");
        }

        info!(
            "Client configured for {} (timeout {}s, {} tip markers)",
            config.origin,
            config.timeout_seconds,
            config.tip_markers.len()
        );
        Ok(config)
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_timeout_seconds(mut self, secs: u64) -> Self {
        self.timeout_seconds = secs;
        self
    }

    /// An explicit path must exist; the default file is only used when present
    fn read_file(config_path: Option<&Path>) -> Result<Option<ConfigFile>> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("No {} in current directory, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(None);
                }
                default
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let file = Self::parse_file(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        info!("Loaded configuration from {}", path.display());
        Ok(Some(file))
    }

    fn parse_file(content: &str) -> Result<ConfigFile> {
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    fn apply_file(&mut self, file: ConfigFile) {
        if let Some(origin) = file.origin {
            self.origin = origin;
        }
        if let Some(timeout) = file.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(markers) = file.tip_markers {
            self.tip_markers = TipMarkers::new(markers);
        }
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup("ATS_ORIGIN") {
            self.origin = origin;
        }
        if let Some(timeout) = lookup("ATS_TIMEOUT_SECONDS") {
            self.timeout_seconds = timeout
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("ATS_TIMEOUT_SECONDS must be a number of seconds"))?;
        }
        Ok(())
    }
}
