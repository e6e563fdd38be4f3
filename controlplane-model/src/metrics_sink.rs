use mockall::automock;

/// Metrics collaborator, injected at construction rather than reaching for a
/// process-global registry. The production implementation installs a
/// Prometheus recorder once at start-up and forwards every call to the
/// `metrics` crate macros; tests substitute `MockMetricsSink`.
#[cfg_attr(any(test, feature = "mock"), automock)]
pub trait MetricsSink: Send + Sync {
    fn increment_counter(&self, name: &'static str, labels: Vec<(&'static str, String)>);
    fn set_gauge(&self, name: &'static str, labels: Vec<(&'static str, String)>, value: f64);
    fn observe_histogram(&self, name: &'static str, labels: Vec<(&'static str, String)>, value: f64);
}

/// Forwards every call to the globally installed `metrics` recorder, the same
/// way the activator's counters and gauges are recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusMetricsSink;

impl MetricsSink for PrometheusMetricsSink {
    fn increment_counter(&self, name: &'static str, labels: Vec<(&'static str, String)>) {
        metrics::counter!(name, &labels).increment(1);
    }

    fn set_gauge(&self, name: &'static str, labels: Vec<(&'static str, String)>, value: f64) {
        metrics::gauge!(name, &labels).set(value);
    }

    fn observe_histogram(&self, name: &'static str, labels: Vec<(&'static str, String)>, value: f64) {
        metrics::histogram!(name, &labels).record(value);
    }
}
