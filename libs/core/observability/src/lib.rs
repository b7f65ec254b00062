//! Observability utilities for the demo ingest service.
//!
//! This crate provides:
//! - The process-wide Prometheus recorder (installed once, never torn down)
//! - The `/metrics` handler
//! - Axum middleware for request metrics
//! - Ingestion counters ([`IngestMetrics`])
//!
//! # Example
//!
//! ```rust,ignore
//! use observability::{init_metrics, metrics_handler, middleware::metrics_middleware};
//!
//! init_metrics()?;
//!
//! let app = Router::new()
//!     .route("/metrics", get(metrics_handler))
//!     .layer(axum::middleware::from_fn(metrics_middleware));
//! ```

pub mod ingest;
pub mod middleware;

pub use ingest::IngestMetrics;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use tracing::info;

static METRICS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder on first call; later calls return the
/// same handle.
pub fn init_metrics() -> Result<&'static PrometheusHandle, BuildError> {
    METRICS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new().install_recorder()?;

        info!("Prometheus metrics recorder initialized");
        register_metric_descriptions();

        Ok(handle)
    })
}

pub fn get_metrics_handle() -> Option<&'static PrometheusHandle> {
    METRICS_HANDLE.get()
}

/// Axum handler for /metrics endpoint
pub async fn metrics_handler() -> String {
    match get_metrics_handle() {
        Some(handle) => handle.render(),
        None => "# Metrics not initialized\n".to_string(),
    }
}

fn register_metric_descriptions() {
    use metrics::{describe_counter, describe_histogram};

    describe_counter!("http_requests_total", "Total number of HTTP requests");
    describe_histogram!(
        "http_request_duration_seconds",
        "HTTP request duration in seconds"
    );
    describe_counter!(
        "http_requests_errors_total",
        "Total number of HTTP request errors"
    );

    describe_counter!(
        "demo_records_created_total",
        "Create requests reported successful, by ingestion path (direct or queue)"
    );
    describe_counter!(
        "demo_records_duplicate_total",
        "Direct inserts rejected by the (event_id, user_id) unique constraint"
    );
    describe_histogram!(
        "demo_records_list_duration_seconds",
        "Top-N read duration in seconds, by ordering key"
    );
    describe_counter!(
        "queue_send_failures_total",
        "Messages dropped by the queue producer, by destination and reason"
    );
}
