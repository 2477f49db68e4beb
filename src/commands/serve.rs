use std::path::PathBuf;

use anyhow::Result;

use crate::config::DashboardConfig;

pub fn run(
    host: Option<String>,
    port: Option<u16>,
    refresh_interval: Option<u64>,
    log_level: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = DashboardConfig::load(config_path.as_deref())?;

    // CLI flags override config values
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(secs) = refresh_interval {
        config.refresh_interval = secs;
    }
    if let Some(level) = log_level {
        config.log_level = level;
    }

    // Build tokio runtime explicitly (no #[tokio::main] on fn main)
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(crate::server::run(config))
}
