mod logs;
mod metrics;
mod observer;
mod otel;

pub use self::logs::Logger;
pub use self::metrics::{Method, Metrics, Status, SystemMetrics, run_metrics_collector};
pub use self::observer::{NoopObserver, OtelObserver};
pub use self::otel::{Telemetry, TracingContext};
