//! Metrics and observability utilities
//!
//! Provides resolution and validation counters with
//! standardized naming conventions.

use metrics::{counter, describe_counter, Unit};

/// Metrics prefix for all StatQuery metrics
pub const METRICS_PREFIX: &str = "statquery";

/// Register all metric descriptions
pub fn register_metrics() {
    // Resolution metrics
    describe_counter!(
        format!("{}_queries_resolved_total", METRICS_PREFIX),
        Unit::Count,
        "Total queries resolved to a final classification type"
    );

    describe_counter!(
        format!("{}_classifier_firings_total", METRICS_PREFIX),
        Unit::Count,
        "Total classifier records observed during resolution"
    );

    // Validation metrics
    describe_counter!(
        format!("{}_validation_failures_total", METRICS_PREFIX),
        Unit::Count,
        "Total construction-time validation failures"
    );

    tracing::info!("Metrics registered");
}

/// Helper to record a classification resolution
pub fn record_resolution(query_type: &str, classifier_count: usize) {
    counter!(
        format!("{}_queries_resolved_total", METRICS_PREFIX),
        "query_type" => query_type.to_string()
    )
    .increment(1);

    counter!(
        format!("{}_classifier_firings_total", METRICS_PREFIX)
    )
    .increment(classifier_count as u64);
}

/// Helper to record a construction-time validation failure
pub fn record_validation_failure(entity: &str) {
    counter!(
        format!("{}_validation_failures_total", METRICS_PREFIX),
        "entity" => entity.to_string()
    )
    .increment(1);
}
