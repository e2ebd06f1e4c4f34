// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Prometheus metrics for the GCP provider.
//!
//! All metrics carry the namespace prefix `provider_gcp_`.
//!
//! # Metrics Categories
//!
//! - **Reconciliation Metrics** - Reconcile outcomes and durations per kind
//! - **External Resource Metrics** - Creates, updates and deletes issued against GCP
//! - **Convergence Metrics** - Update actions per field group and late-initializations
//! - **Cloud API Metrics** - Raw REST calls per service, verb and outcome
//!
//! # Example
//!
//! ```rust,no_run
//! use provider_gcp::metrics::record_reconciliation_success;
//!
//! record_reconciliation_success("GKECluster", std::time::Duration::from_secs(1));
//! ```

use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};
use std::sync::LazyLock;
use std::time::Duration;

/// Namespace prefix for all provider metrics
const METRICS_NAMESPACE: &str = "provider_gcp";

/// Global Prometheus metrics registry, exposed via the `/metrics` endpoint.
pub static METRICS_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

// ============================================================================
// Reconciliation Metrics
// ============================================================================

/// Total number of reconciliations by resource type and status
///
/// Labels:
/// - `resource_type`: Kind of resource (e.g., `GKECluster`, `ManagedZone`)
/// - `status`: Outcome (`success`, `error`, `requeue`)
pub static RECONCILIATION_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_reconciliations_total"),
        "Total number of reconciliations by resource type and status",
    );
    let counter = CounterVec::new(opts, &["resource_type", "status"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Duration of reconciliations in seconds
pub static RECONCILIATION_DURATION_SECONDS: LazyLock<HistogramVec> = LazyLock::new(|| {
    let opts = HistogramOpts::new(
        format!("{METRICS_NAMESPACE}_reconciliation_duration_seconds"),
        "Duration of reconciliations in seconds by resource type",
    )
    .buckets(vec![0.01, 0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0]);
    let histogram = HistogramVec::new(opts, &["resource_type"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(histogram.clone()))
        .unwrap();
    histogram
});

// ============================================================================
// External Resource Metrics
// ============================================================================

/// External resource operations issued against GCP
///
/// Labels:
/// - `resource_type`: Kind of resource
/// - `operation`: `create`, `update` or `delete`
pub static EXTERNAL_OPERATIONS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_external_operations_total"),
        "Total number of external create, update and delete calls by resource type",
    );
    let counter = CounterVec::new(opts, &["resource_type", "operation"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Errors by resource type and category
///
/// Labels:
/// - `resource_type`: Kind of resource
/// - `error_type`: `gcp_error`, `kube_error`, `not_found`, `config_error`
pub static ERRORS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_errors_total"),
        "Total number of errors by resource type and error category",
    );
    let counter = CounterVec::new(opts, &["resource_type", "error_type"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

// ============================================================================
// Convergence Metrics
// ============================================================================

/// Single-field update actions chosen by the up-to-date check
///
/// Labels:
/// - `resource_type`: Kind of resource
/// - `field_group`: Field group that was out of date (e.g., `LoggingService`)
pub static UPDATE_ACTIONS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_update_actions_total"),
        "Total number of update actions by resource type and field group",
    );
    let counter = CounterVec::new(opts, &["resource_type", "field_group"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

/// Spec late-initializations persisted back to Kubernetes
pub static LATE_INITIALIZATIONS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_late_initializations_total"),
        "Total number of spec late-initializations by resource type",
    );
    let counter = CounterVec::new(opts, &["resource_type"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

// ============================================================================
// Cloud API Metrics
// ============================================================================

/// REST calls to Google Cloud APIs
///
/// Labels:
/// - `service`: `container`, `redis` or `dns`
/// - `verb`: HTTP verb in lower case
/// - `outcome`: `success`, `not_found`, `error`, `transport_error`
pub static GCP_API_CALLS_TOTAL: LazyLock<CounterVec> = LazyLock::new(|| {
    let opts = Opts::new(
        format!("{METRICS_NAMESPACE}_gcp_api_calls_total"),
        "Total number of GCP API calls by service, verb and outcome",
    );
    let counter = CounterVec::new(opts, &["service", "verb", "outcome"]).unwrap();
    METRICS_REGISTRY
        .register(Box::new(counter.clone()))
        .unwrap();
    counter
});

// ============================================================================
// Helper Functions
// ============================================================================

/// Record a successful reconciliation
pub fn record_reconciliation_success(resource_type: &str, duration: Duration) {
    RECONCILIATION_TOTAL
        .with_label_values(&[resource_type, "success"])
        .inc();
    RECONCILIATION_DURATION_SECONDS
        .with_label_values(&[resource_type])
        .observe(duration.as_secs_f64());
}

/// Record a failed reconciliation
pub fn record_reconciliation_error(resource_type: &str, duration: Duration) {
    RECONCILIATION_TOTAL
        .with_label_values(&[resource_type, "error"])
        .inc();
    RECONCILIATION_DURATION_SECONDS
        .with_label_values(&[resource_type])
        .observe(duration.as_secs_f64());
}

/// Record a requeue scheduled by the error policy
pub fn record_reconciliation_requeue(resource_type: &str) {
    RECONCILIATION_TOTAL
        .with_label_values(&[resource_type, "requeue"])
        .inc();
}

/// Record an external create, update or delete
///
/// # Arguments
/// * `resource_type` - The kind of resource
/// * `operation` - `create`, `update` or `delete`
pub fn record_external_operation(resource_type: &str, operation: &str) {
    EXTERNAL_OPERATIONS_TOTAL
        .with_label_values(&[resource_type, operation])
        .inc();
}

/// Record an error
pub fn record_error(resource_type: &str, error_type: &str) {
    ERRORS_TOTAL
        .with_label_values(&[resource_type, error_type])
        .inc();
}

/// Record the field group an update action was issued for
pub fn record_update_action(resource_type: &str, field_group: &str) {
    UPDATE_ACTIONS_TOTAL
        .with_label_values(&[resource_type, field_group])
        .inc();
}

/// Record a persisted late-initialization
pub fn record_late_initialization(resource_type: &str) {
    LATE_INITIALIZATIONS_TOTAL
        .with_label_values(&[resource_type])
        .inc();
}

/// Record a raw GCP REST call
pub fn record_gcp_api_call(service: &str, verb: &str, outcome: &str) {
    GCP_API_CALLS_TOTAL
        .with_label_values(&[service, verb, outcome])
        .inc();
}

/// Gather and encode all metrics in Prometheus text format
///
/// # Errors
/// Returns error if encoding fails
pub fn gather_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = METRICS_REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(format!("UTF-8 error: {e}")))
}
