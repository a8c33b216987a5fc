//! Prometheus metrics for the people API.

use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{debug, warn};

// === Metric Name Constants ===

/// Status probe counter metric name.
pub const METRIC_STATUS_REQUESTS: &str = "status_requests_total";
/// People list request counter metric name.
pub const METRIC_PEOPLE_LIST_REQUESTS: &str = "people_list_requests_total";
/// Records created counter metric name.
pub const METRIC_PEOPLE_CREATED: &str = "people_created_total";
/// Rejected create request counter metric name.
pub const METRIC_PEOPLE_CREATE_REJECTED: &str = "people_create_rejected_total";
/// Create request latency metric name.
pub const METRIC_PEOPLE_CREATE_LATENCY: &str = "people_create_latency_ms";

/// Install the Prometheus recorder and register metric descriptions.
///
/// Returns the render handle for the `/metrics` endpoint, or `None` when a
/// recorder is already installed in this process.
pub fn init_metrics() -> Option<PrometheusHandle> {
    let handle = match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            warn!("failed to install Prometheus recorder: {}", e);
            return None;
        }
    };

    describe_counter!(
        METRIC_STATUS_REQUESTS,
        "Total number of status probes served"
    );
    describe_counter!(
        METRIC_PEOPLE_LIST_REQUESTS,
        "Total number of people list requests"
    );
    describe_counter!(
        METRIC_PEOPLE_CREATED,
        "Total number of people records created"
    );
    describe_counter!(
        METRIC_PEOPLE_CREATE_REJECTED,
        "Total number of create requests rejected by validation"
    );
    describe_histogram!(
        METRIC_PEOPLE_CREATE_LATENCY,
        "Create request handling latency in milliseconds"
    );

    debug!("Metrics initialized");

    Some(handle)
}

/// Increment status probe counter.
pub fn inc_status_requests() {
    counter!(METRIC_STATUS_REQUESTS).increment(1);
}

/// Increment people list request counter.
pub fn inc_people_list_requests() {
    counter!(METRIC_PEOPLE_LIST_REQUESTS).increment(1);
}

/// Increment records created counter.
pub fn inc_people_created() {
    counter!(METRIC_PEOPLE_CREATED).increment(1);
}

/// Increment rejected create counter.
pub fn inc_create_rejected() {
    counter!(METRIC_PEOPLE_CREATE_REJECTED).increment(1);
}

/// Record create request latency.
pub fn record_create_latency(start: Instant) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_PEOPLE_CREATE_LATENCY).record(latency_ms);
}
