//! Ingestion metrics.

use metrics::{counter, histogram};
use std::time::Duration;

pub struct IngestMetrics;

impl IngestMetrics {
    /// A create request answered with success. `path` is `"direct"` or
    /// `"queue"`; a queue create counts even when the producer dropped the
    /// message (see `queue_send_failures_total`).
    pub fn record_created(path: &'static str) {
        counter!("demo_records_created_total", "path" => path).increment(1);
    }

    pub fn record_duplicate() {
        counter!("demo_records_duplicate_total").increment(1);
    }

    pub fn record_listed(order: &'static str, count: usize, elapsed: Duration) {
        histogram!("demo_records_list_duration_seconds", "order" => order)
            .record(elapsed.as_secs_f64());

        tracing::debug!(
            order,
            count,
            duration_ms = elapsed.as_millis() as u64,
            "Listed records"
        );
    }
}
