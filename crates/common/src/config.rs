//! Configuration management for the application.
//!
//! Settings are layered, later sources overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `config/default.toml` (if it exists)
//! 3. `config/{APP_ENV}.toml` (if it exists, `APP_ENV` defaults to `development`)
//! 4. Environment variables prefixed with `APP`, e.g. `APP__SERVER__PORT=8080`
//! 5. `PORT`, kept as a shortcut for the listen port
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! port = 3000
//! request_timeout_seconds = 30
//!
//! [database]
//! path = "vendas_carros_esportivos.db"
//! max_connections = 5
//!
//! [telemetry]
//! log_level = "debug"
//! json_logging = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the time spent handling one request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Maximum accepted request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// CORS allowed origins, `*` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,

    /// Serve the OpenAPI document at `/api-docs/openapi.json`
    #[serde(default = "default_true")]
    pub enable_openapi: bool,
}

/// SQLite datastore configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the database file, created if missing
    #[serde(default = "default_database_path")]
    pub path: PathBuf,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Time to wait for a free pooled connection
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,

    /// Time SQLite waits on a locked database before failing a statement
    #[serde(default = "default_busy_timeout")]
    pub busy_timeout_seconds: u64,

    /// Create missing tables and views at start-up
    #[serde(default = "default_true")]
    pub bootstrap_schema: bool,
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default)]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_size() -> usize {
    1024 * 1024 // 1 MiB
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

fn default_database_path() -> PathBuf {
    PathBuf::from("vendas_carros_esportivos.db")
}

fn default_max_connections() -> u32 {
    5
}

fn default_acquire_timeout() -> u64 {
    5
}

fn default_busy_timeout() -> u64 {
    5
}

fn default_service_name() -> String {
    "sportscar-sales-api".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            max_body_size: default_max_body_size(),
            cors_allowed_origins: default_cors_origins(),
            enable_openapi: true,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            max_connections: default_max_connections(),
            acquire_timeout_seconds: default_acquire_timeout(),
            busy_timeout_seconds: default_busy_timeout(),
            bootstrap_schema: true,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: false,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment variables.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sportscar_sales_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Listening on {}", config.server_address());
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Example: APP__DATABASE__PATH=/var/lib/vendas.db
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(port) = std::env::var("PORT") {
            let port: u16 = port
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?;
            builder = builder
                .set_override("server.port", i64::from(port))
                .context("Failed to apply PORT override")?;
        }

        let app_config: AppConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.server.max_body_size == 0 {
            anyhow::bail!("Maximum body size must be greater than 0");
        }

        if self.database.path.as_os_str().is_empty() {
            anyhow::bail!("Database path is required");
        }

        if self.database.max_connections == 0 {
            anyhow::bail!("Database pool size must be greater than 0");
        }

        if self.database.acquire_timeout_seconds == 0 {
            anyhow::bail!("Database acquire timeout must be greater than 0");
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }
}
