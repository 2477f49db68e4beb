mod api;
mod commands;
mod config;
mod domain;
mod server;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "canary-piet",
    version,
    about = "Diagnostic dashboard for the environment a container is really running in"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard and JSON API
    Serve {
        /// Listen host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Seconds between page refreshes (overrides config)
        #[arg(long)]
        refresh_interval: Option<u64>,

        /// Log level (overrides config)
        #[arg(long)]
        log_level: Option<String>,

        /// Path to config file (default: ~/.config/canary-piet/config.yaml)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Collect one snapshot of this host and print it
    Snapshot {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            refresh_interval,
            log_level,
            config,
        } => commands::serve::run(host, port, refresh_interval, log_level, config),
        Commands::Snapshot { format } => commands::snapshot::run(&format),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_flags_parse() {
        let cli = Cli::try_parse_from([
            "canary-piet",
            "serve",
            "--port",
            "9000",
            "--refresh-interval",
            "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Serve {
                port,
                refresh_interval,
                host,
                ..
            } => {
                assert_eq!(port, Some(9000));
                assert_eq!(refresh_interval, Some(5));
                assert_eq!(host, None);
            }
            Commands::Snapshot { .. } => panic!("expected serve"),
        }
    }
}
