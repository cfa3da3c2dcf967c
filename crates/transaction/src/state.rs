use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{config::ConnectionPool, utils::SystemMetrics};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Registry>,
    pub system_metrics: SystemMetrics,
}

impl AppState {
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        let mut registry = Registry::default();

        let di_container = {
            DependenciesInject::new(pool, &mut registry)
                .await
                .context("Failed to initialize dependency injection container")?
        };

        let system_metrics = SystemMetrics::new();
        system_metrics.register(&mut registry);

        Ok(Self {
            di_container,
            registry: Arc::new(registry),
            system_metrics,
        })
    }
}
