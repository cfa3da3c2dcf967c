use anyhow::Result;
use shared::config::Config;
use std::net::SocketAddr;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub run_migrations: bool,
    pub metric_addr: SocketAddr,
    pub otel_endpoint: Option<String>,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        let metric_addr = SocketAddr::from(([0, 0, 0, 0], config.transaction.metric_port));

        Ok(Self {
            database_url: config.database_url.clone(),
            run_migrations: config.run_migrations,
            metric_addr,
            otel_endpoint: config.otel_endpoint.clone(),
        })
    }
}
