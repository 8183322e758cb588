//! Structured logging setup.
//!
//! Log output goes to stdout through `tracing-subscriber`, either as
//! multi-line human-readable records or as one JSON object per line.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

use crate::config::TelemetryConfig;

/// Directives appended to the configured level so that per-statement sqlx
/// logging stays out of `info` output.
const QUIET_DEPENDENCIES: &[&str] = &["sqlx=warn", "hyper=warn"];

/// Build the log filter.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies with
/// dependency noise turned down.
pub fn build_env_filter(log_level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directives = std::iter::once(log_level)
        .chain(QUIET_DEPENDENCIES.iter().copied())
        .collect::<Vec<_>>()
        .join(",");

    EnvFilter::try_new(&directives)
        .with_context(|| format!("Invalid log level '{}'", log_level))
}

/// Install the global tracing subscriber.
///
/// # Examples
///
/// ```no_run
/// use sportscar_sales_common::{config::TelemetryConfig, telemetry::init_tracing};
///
/// init_tracing(&TelemetryConfig::default()).expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(config: &TelemetryConfig) -> Result<()> {
    let output = if config.json_logging {
        json_output().boxed()
    } else {
        human_output().boxed()
    };

    Registry::default()
        .with(build_env_filter(&config.log_level)?)
        .with(output)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::info!(
        service = %config.service_name,
        json = config.json_logging,
        "Tracing initialized"
    );
    Ok(())
}

fn json_output<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(false)
        .with_target(true)
}

fn human_output<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .pretty()
        .with_target(true)
        .with_file(false)
        .with_span_events(FmtSpan::CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_accepts_known_levels() {
        std::env::remove_var("RUST_LOG");
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(build_env_filter(level).is_ok(), "level {}", level);
        }
    }

    #[test]
    fn test_filter_rejects_garbage() {
        std::env::remove_var("RUST_LOG");
        assert!(build_env_filter("info,sqlx=loud").is_err());
    }

    #[test]
    fn test_second_init_fails() {
        let config = TelemetryConfig::default();
        let _ = init_tracing(&config);
        assert!(init_tracing(&config).is_err());
    }
}
