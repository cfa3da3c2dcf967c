use crate::{
    abstract_trait::observer::Observer,
    utils::{Method, Metrics, Status, TracingContext},
};
use opentelemetry::{
    Context, KeyValue,
    global::{self, BoxedTracer},
    trace::{Span, SpanKind, TraceContextExt, Tracer},
};
use tracing::{error, info};

/// Observer backed by the global OpenTelemetry tracer, prometheus metrics and
/// `tracing` logs.
pub struct OtelObserver {
    tracer_name: String,
    metrics: Metrics,
}

impl OtelObserver {
    pub fn new(tracer_name: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            tracer_name: tracer_name.into(),
            metrics,
        }
    }

    fn get_tracer(&self) -> BoxedTracer {
        global::tracer(self.tracer_name.clone())
    }

    fn complete_internal(
        &self,
        ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let status_str = if is_success { "SUCCESS" } else { "ERROR" };
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };
        let elapsed = ctx.elapsed_secs();

        ctx.cx.span().add_event(
            "Operation completed",
            vec![
                KeyValue::new("status", status_str),
                KeyValue::new("duration_secs", elapsed.to_string()),
                KeyValue::new("message", message.to_string()),
            ],
        );

        if is_success {
            info!("✅ Operation completed successfully: {message}");
        } else {
            error!("❌ Operation failed: {message}");
        }

        self.metrics.record(method, status, elapsed);

        ctx.cx.span().end();
    }
}

impl Observer for OtelObserver {
    fn start(&self, operation: &str, attributes: Vec<KeyValue>) -> TracingContext {
        let tracer = self.get_tracer();
        let mut span = tracer
            .span_builder(operation.to_string())
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        info!("Starting operation: {operation}");

        span.add_event(
            "Operation started",
            vec![KeyValue::new("operation", operation.to_string())],
        );

        TracingContext::new(Context::current_with_span(span))
    }

    fn event(&self, ctx: &TracingContext, name: &str, attributes: Vec<KeyValue>) {
        let detail = attributes
            .iter()
            .map(|kv| format!("{}={}", kv.key, kv.value))
            .collect::<Vec<_>>()
            .join(" ");
        info!("{name} {detail}");
        ctx.cx.span().add_event(name.to_string(), attributes);
    }

    fn complete_success(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_internal(ctx, method, true, message);
    }

    fn complete_error(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_internal(ctx, method, false, message);
    }
}

/// Observer that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    fn start(&self, _operation: &str, _attributes: Vec<KeyValue>) -> TracingContext {
        TracingContext::detached()
    }

    fn event(&self, _ctx: &TracingContext, _name: &str, _attributes: Vec<KeyValue>) {}

    fn complete_success(&self, _ctx: &TracingContext, _method: Method, _message: &str) {}

    fn complete_error(&self, _ctx: &TracingContext, _method: Method, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn otel_observer_records_outcome_metrics() {
        let metrics = Metrics::new();
        let observer = OtelObserver::new("test-observer", metrics.clone());

        let ctx = observer.start("create_transaction", vec![]);
        observer.event(&ctx, "stage: validating", vec![]);
        observer.complete_success(&ctx, Method::Post, "done");

        let ctx = observer.start("update_transaction", vec![]);
        observer.complete_error(&ctx, Method::Put, "failed");

        assert_eq!(metrics.request_count(Method::Post, Status::Success), 1);
        assert_eq!(metrics.request_count(Method::Put, Status::Error), 1);
    }
}
