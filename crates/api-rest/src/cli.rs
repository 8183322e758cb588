//! Command-line interface of the API binary.
//!
//! Flags are the last configuration layer: anything given here overrides
//! files and environment variables.

use clap::Parser;
use sportscar_sales_common::AppConfig;
use std::path::PathBuf;

/// Sports-car sales REST API
#[derive(Parser, Debug, Default)]
#[command(name = "sportscar-sales-api", version, about)]
pub struct Cli {
    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path of the SQLite database file
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Apply the given flags on top of a loaded configuration
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = self.database {
            config.database.path = database;
        }
        if let Some(level) = self.log_level {
            config.telemetry.log_level = level;
        }
        if self.json_logs {
            config.telemetry.json_logging = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "sportscar-sales-api",
            "--port",
            "8080",
            "--database",
            "/tmp/vendas.db",
            "--json-logs",
        ]);

        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.path, PathBuf::from("/tmp/vendas.db"));
        assert!(config.telemetry.json_logging);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let mut config = AppConfig::default();
        Cli::parse_from(["sportscar-sales-api"]).apply(&mut config);

        assert_eq!(config.server.port, 3000);
        assert!(!config.telemetry.json_logging);
    }

    #[test]
    fn test_invalid_log_level_fails_validation() {
        let mut config = AppConfig::default();
        Cli::parse_from(["sportscar-sales-api", "--log-level", "loud"]).apply(&mut config);

        assert!(config.validate().is_err());
    }
}
