use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub otel_endpoint: Option<String>,
    pub transaction: ServiceConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("Missing env: DATABASE_URL")?;
        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").context("Missing env: RUN_MIGRATIONS")?;

        let run_migrations = parse_bool_flag("RUN_MIGRATIONS", &run_migrations_str)?;

        let otel_endpoint = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self {
            database_url,
            run_migrations,
            otel_endpoint,
            transaction: ServiceConfig::from_env("TRANSACTION")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub metric_port: u16,
}

impl ServiceConfig {
    pub fn from_env(prefix: &str) -> Result<Self> {
        let metric_port = std::env::var(format!("{prefix}_METRIC_PORT"))
            .context(format!("Missing env: {prefix}_METRIC_PORT"))?;

        Ok(Self {
            metric_port: parse_port(&format!("{prefix}_METRIC_PORT"), &metric_port)?,
        })
    }
}

fn parse_bool_flag(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("{name} must be 'true' or 'false', got '{other}'")),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16> {
    value
        .parse::<u16>()
        .context(format!("{name} must be a valid u16 integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_flag_accepts_only_literal_values() {
        assert!(parse_bool_flag("RUN_MIGRATIONS", "true").unwrap());
        assert!(!parse_bool_flag("RUN_MIGRATIONS", "false").unwrap());
        assert!(parse_bool_flag("RUN_MIGRATIONS", "yes").is_err());
    }

    #[test]
    fn port_must_fit_u16() {
        assert_eq!(parse_port("P", "50061").unwrap(), 50061);
        assert!(parse_port("P", "70000").is_err());
        assert!(parse_port("P", "abc").is_err());
    }
}
