use crate::utils::{Method, TracingContext};
use opentelemetry::KeyValue;
use std::sync::Arc;

pub type DynObserver = Arc<dyn Observer + Send + Sync>;

/// Span, metric and log side channel for service operations.
///
/// Services open one context per operation with [`Observer::start`], may attach
/// any number of events to it, and must close it with exactly one of
/// [`Observer::complete_success`] or [`Observer::complete_error`].
pub trait Observer {
    fn start(&self, operation: &str, attributes: Vec<KeyValue>) -> TracingContext;
    fn event(&self, ctx: &TracingContext, name: &str, attributes: Vec<KeyValue>);
    fn complete_success(&self, ctx: &TracingContext, method: Method, message: &str);
    fn complete_error(&self, ctx: &TracingContext, method: Method, message: &str);
}
