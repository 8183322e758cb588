//! Sports-car sales API server.

use anyhow::Context;
use clap::Parser;
use sportscar_sales_api_rest::{create_app, AppState, Cli};
use sportscar_sales_common::{init_tracing, AppConfig};
use sportscar_sales_infrastructure::{DatabaseConfig, DatabasePool};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    cli.apply(&mut config);
    config.validate()?;

    init_tracing(&config.telemetry)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        database = %config.database.path.display(),
        "Starting sports-car sales API"
    );

    let database = DatabasePool::new(&DatabaseConfig::from(&config.database))
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database.path.display()
            )
        })?;

    if config.database.bootstrap_schema {
        database
            .bootstrap_schema()
            .await
            .context("Failed to bootstrap database schema")?;
    }

    let address = config.server_address();
    let app = create_app(AppState::new(config, database.clone()));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(address = %address, "API - Sistema de Vendas de Carros Esportivos listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    database.close().await;
    info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
