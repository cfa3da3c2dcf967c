use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{LogExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, logs::SdkLoggerProvider};
use tracing_appender::{
    non_blocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const OTEL_LOG_FILTER: &str = "info,hyper=off,opentelemetry=off,tonic=off,h2=off,sqlx=warn";

pub struct Logger {
    provider: Option<SdkLoggerProvider>,
}

impl Logger {
    /// Installs the global subscriber. Outside dev mode log records are also
    /// bridged to OpenTelemetry and shipped to `otlp_endpoint` when one is set.
    pub fn new(component: &str, is_dev: bool, otlp_endpoint: Option<&str>) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/pos" };
        let file_name = format!("pos_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));

        let console_layer = fmt::layer()
            .pretty()
            .with_thread_names(true)
            .with_ansi(true)
            .with_filter(console_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        let provider = (!is_dev).then(|| build_provider(component, otlp_endpoint));

        match &provider {
            Some(provider) => registry
                .with(
                    OpenTelemetryTracingBridge::new(provider)
                        .with_filter(EnvFilter::new(OTEL_LOG_FILTER)),
                )
                .init(),
            None => registry.init(),
        }

        // the writer must outlive every span, including those emitted during shutdown
        std::mem::forget(guard);

        Self { provider }
    }

    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(e) = provider.shutdown() {
                eprintln!("failed to shut down log provider: {e}");
            }
        }
    }
}

fn build_provider(component: &str, otlp_endpoint: Option<&str>) -> SdkLoggerProvider {
    let resource = Resource::builder()
        .with_service_name(component.to_string())
        .build();
    let builder = SdkLoggerProvider::builder().with_resource(resource);

    let Some(endpoint) = otlp_endpoint else {
        return builder.build();
    };

    match LogExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
    {
        Ok(exporter) => builder.with_batch_exporter(exporter).build(),
        Err(e) => {
            // the subscriber is not installed yet
            eprintln!("failed to build OTLP log exporter, logs stay local: {e}");
            builder.build()
        }
    }
}
