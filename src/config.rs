use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Environment variables read without a prefix, as container platforms set them.
const ENV_KEYS: &[&str] = &["HOST", "PORT", "REFRESH_INTERVAL", "LOG_LEVEL", "LOG_FORMAT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    /// Seconds between page refreshes.
    pub refresh_interval: u64,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            refresh_interval: 30,
            log_level: "info".into(),
            log_format: LogFormat::Json,
        }
    }
}

impl DashboardConfig {
    /// `~/.config/canary-piet/config.yaml`, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("canary-piet").join("config.yaml"))
    }

    /// Defaults, then the YAML file, then the environment.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::raw().only(ENV_KEYS))
    }

    /// Load from an explicit file (which must exist) or the default location.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => {
                if !path.exists() {
                    bail!("config file {} does not exist", path.display());
                }
                Some(path.to_path_buf())
            }
            None => Self::default_path().filter(|p| p.exists()),
        };

        Self::from_figment(Self::figment(file.as_deref()))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract().context("parsing configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            bail!("port must be between 1 and 65535");
        }
        if self.refresh_interval == 0 {
            bail!("refresh_interval must be at least 1 second");
        }
        Ok(())
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
