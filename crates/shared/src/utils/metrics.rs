use prometheus_client::{
    encoding::{EncodeLabelSet, EncodeLabelValue},
    metrics::{
        counter::Counter,
        family::Family,
        gauge::Gauge,
        histogram::{Histogram, exponential_buckets},
    },
    registry::Registry,
};
use std::{sync::atomic::AtomicU64, time::Duration};
use sysinfo::System;
use tokio::sync::broadcast;
use tracing::info;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
struct MethodLabels {
    method: Method,
    status: Status,
}

/// Request counter and latency histogram shared by every clone.
#[derive(Clone)]
pub struct Metrics {
    requests: Family<MethodLabels, Counter>,
    duration: Family<MethodLabels, Histogram>,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            requests: Family::default(),
            duration: Family::<MethodLabels, Histogram>::new_with_constructor(|| {
                Histogram::new(exponential_buckets(0.005, 2.0, 12))
            }),
        }
    }

    pub fn register(&self, prefix: &str, registry: &mut Registry) {
        let sub = registry.sub_registry_with_prefix(prefix);
        sub.register(
            "requests",
            "Number of handled operations",
            self.requests.clone(),
        );
        sub.register(
            "request_duration_seconds",
            "Operation latency in seconds",
            self.duration.clone(),
        );
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = MethodLabels { method, status };
        self.requests.get_or_create(&labels).inc();
        self.duration.get_or_create(&labels).observe(duration_secs);
    }

    pub fn request_count(&self, method: Method, status: Status) -> u64 {
        self.requests
            .get_or_create(&MethodLabels { method, status })
            .get()
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Default)]
pub struct SystemMetrics {
    cpu_usage: Gauge<f64, AtomicU64>,
    memory_used: Gauge,
    memory_total: Gauge,
}

impl SystemMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, registry: &mut Registry) {
        registry.register(
            "system_cpu_usage_percent",
            "Global CPU usage",
            self.cpu_usage.clone(),
        );
        registry.register(
            "system_memory_used_bytes",
            "Used memory",
            self.memory_used.clone(),
        );
        registry.register(
            "system_memory_total_bytes",
            "Total memory",
            self.memory_total.clone(),
        );
    }

    fn update(&self, sys: &System) {
        self.cpu_usage.set(f64::from(sys.global_cpu_usage()));
        self.memory_used
            .set(i64::try_from(sys.used_memory()).unwrap_or(i64::MAX));
        self.memory_total
            .set(i64::try_from(sys.total_memory()).unwrap_or(i64::MAX));
    }
}

pub async fn run_metrics_collector(
    system_metrics: SystemMetrics,
    every: Duration,
    mut shutdown_rx: broadcast::Receiver<()>,
) {
    let mut sys = System::new();
    let mut ticker = tokio::time::interval(every);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                sys.refresh_cpu_usage();
                sys.refresh_memory();
                system_metrics.update(&sys);
            }
            _ = shutdown_rx.recv() => {
                info!("System metrics collector stopped");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus_client::encoding::text::encode;

    #[test]
    fn record_updates_labelled_counter() {
        let metrics = Metrics::new();
        metrics.record(Method::Post, Status::Success, 0.01);
        metrics.record(Method::Post, Status::Success, 0.02);
        metrics.record(Method::Post, Status::Error, 0.03);

        assert_eq!(metrics.request_count(Method::Post, Status::Success), 2);
        assert_eq!(metrics.request_count(Method::Post, Status::Error), 1);
        assert_eq!(metrics.request_count(Method::Delete, Status::Success), 0);
    }

    #[test]
    fn registered_metrics_are_encoded_with_prefix() {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register("transaction_command", &mut registry);
        metrics.record(Method::Put, Status::Success, 0.5);

        let mut body = String::new();
        encode(&mut body, &registry).unwrap();

        assert!(body.contains("transaction_command_requests_total"));
        assert!(body.contains("method=\"Put\""));
    }
}
