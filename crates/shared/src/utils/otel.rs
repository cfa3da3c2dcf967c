use anyhow::{Context as _, Result};
use opentelemetry::{Context, global};
use opentelemetry_otlp::{SpanExporter, WithExportConfig};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tokio::time::Instant;

/// Span context of one in-flight operation plus its start time.
pub struct TracingContext {
    pub cx: Context,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn new(cx: Context) -> Self {
        Self {
            cx,
            start_time: Instant::now(),
        }
    }

    /// A context with no active span.
    pub fn detached() -> Self {
        Self::new(Context::new())
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}

pub struct Telemetry {
    provider: SdkTracerProvider,
}

impl Telemetry {
    /// Installs the global tracer provider and the W3C trace-context propagator.
    ///
    /// With an OTLP endpoint spans are batched to the collector over gRPC; in dev
    /// mode without one they are printed to stdout; otherwise they are dropped.
    pub fn init(service_name: &str, is_dev: bool, otlp_endpoint: Option<&str>) -> Result<Self> {
        let resource = Resource::builder()
            .with_service_name(service_name.to_string())
            .build();

        let builder = SdkTracerProvider::builder().with_resource(resource);

        let provider = match otlp_endpoint {
            Some(endpoint) => {
                let exporter = SpanExporter::builder()
                    .with_tonic()
                    .with_endpoint(endpoint)
                    .build()
                    .context("Failed to build OTLP span exporter")?;
                builder.with_batch_exporter(exporter).build()
            }
            None if is_dev => builder
                .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
                .build(),
            None => builder.build(),
        };

        global::set_text_map_propagator(TraceContextPropagator::new());
        global::set_tracer_provider(provider.clone());

        Ok(Self { provider })
    }

    pub fn shutdown(self) -> Result<()> {
        self.provider
            .shutdown()
            .context("Failed to shut down tracer provider")
    }
}
