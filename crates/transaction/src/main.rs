use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    config::{Config, ConnectionManager},
    utils::{Logger, Telemetry, run_metrics_collector},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::sync::broadcast;
use tracing::{error, info, warn};
use transaction::{config::ServerConfig, metrics, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let config = Config::init().context("Failed to load configuration")?;

    let server_config = ServerConfig::from_config(&config)?;

    let logger = Logger::new(
        "transaction-service",
        is_dev,
        server_config.otel_endpoint.as_deref(),
    );

    let telemetry = Telemetry::init(
        "transaction-service",
        is_dev,
        server_config.otel_endpoint.as_deref(),
    )
    .context("Failed to initialize telemetry")?;

    let db_pool =
        ConnectionManager::new_pool(&server_config.database_url, server_config.run_migrations)
            .await
            .context("Failed to initialize database pool")?;

    let state = Arc::new(
        AppState::new(db_pool)
            .await
            .context("Failed to create AppState")?,
    );

    let (shutdown_tx, _) = broadcast::channel(1);

    let metric_addr = server_config.metric_addr;
    let metrics_registry = state.registry.clone();
    let metrics_shutdown_rx = shutdown_tx.subscribe();
    let metrics_handle = tokio::spawn(async move {
        loop {
            match start_metrics_server(
                metrics_registry.clone(),
                metric_addr,
                metrics_shutdown_rx.resubscribe(),
            )
            .await
            {
                Ok(()) => {
                    info!("Metrics server stopped gracefully");
                    break;
                }
                Err(e) => {
                    error!("❌ Metrics server failed: {e}. Restarting in 5s...");
                    tokio::time::sleep(tokio::time::Duration::from_secs(5)).await;
                }
            }
        }
    });

    let collector_handle = tokio::spawn(run_metrics_collector(
        state.system_metrics.clone(),
        tokio::time::Duration::from_secs(15),
        shutdown_tx.subscribe(),
    ));

    info!("🚀 Transaction Service ready");

    let signal_shutdown_tx = shutdown_tx.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("🛑 Shutdown signal received.");
                if let Err(e) = signal_shutdown_tx.send(()) {
                    warn!("Failed to send shutdown signal: {}", e);
                }
            }
            Err(e) => {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        }
    });

    let mut shutdown_rx = shutdown_tx.subscribe();
    let _ = shutdown_rx.recv().await;

    info!("🛑 Shutting down all servers...");

    let shutdown_timeout = tokio::time::Duration::from_secs(30);
    let shutdown_result = tokio::time::timeout(shutdown_timeout, async {
        let _ = tokio::join!(metrics_handle, collector_handle);
    })
    .await;

    match shutdown_result {
        Ok(_) => info!("✅ All servers shutdown gracefully"),
        Err(_) => {
            warn!("⚠️  Shutdown timeout reached, forcing exit");
        }
    }

    if let Err(e) = telemetry.shutdown() {
        warn!("{e:#}");
    }

    info!("✅ Transaction Service shutdown complete.");
    logger.shutdown();
    Ok(())
}

async fn start_metrics_server(
    registry: Arc<Registry>,
    addr: SocketAddr,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<()> {
    info!("Starting metrics server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind metrics listener")?;

    let shutdown_future = async move {
        let _ = shutdown_rx.recv().await;
        info!("Metrics server received shutdown signal");
    };

    axum::serve(listener, metrics::router(registry))
        .with_graceful_shutdown(shutdown_future)
        .await
        .context("Metrics server failed to start or serve")
}
