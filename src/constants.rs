// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Global constants for the GCP provider.
//!
//! Constants are organized by category for easy maintenance.

// ============================================================================
// API Constants
// ============================================================================

/// API group of the GKE cluster CRD
pub const CONTAINER_API_GROUP: &str = "container.gcp.crossplane.io";

/// API version of the GKE cluster CRD
pub const CONTAINER_API_VERSION: &str = "v1beta2";

/// API group of the Memorystore instance CRD
pub const CACHE_API_GROUP: &str = "cache.gcp.crossplane.io";

/// API version of the Memorystore instance CRD
pub const CACHE_API_VERSION: &str = "v1beta1";

/// API group of the managed zone CRD
pub const DNS_API_GROUP: &str = "dns.gcp.crossplane.io";

/// API version of the managed zone CRD
pub const DNS_API_VERSION: &str = "v1alpha1";

/// Kind name for `GKECluster` resource
pub const KIND_GKE_CLUSTER: &str = "GKECluster";

/// Kind name for `CloudMemorystoreInstance` resource
pub const KIND_CLOUD_MEMORYSTORE_INSTANCE: &str = "CloudMemorystoreInstance";

/// Kind name for `ManagedZone` resource
pub const KIND_MANAGED_ZONE: &str = "ManagedZone";

/// Annotation naming the external resource when it differs from `metadata.name`
pub const ANNOTATION_EXTERNAL_NAME: &str = "crossplane.io/external-name";

/// Finalizer held while the external resource may still exist
pub const FINALIZER_MANAGED_RESOURCE: &str = "finalizer.managedresource.crossplane.io";

/// Field manager used for spec and status patches
pub const FIELD_MANAGER: &str = "provider-gcp";

// ============================================================================
// GCP Constants
// ============================================================================

/// Default GKE API endpoint
pub const DEFAULT_CONTAINER_ENDPOINT: &str = "https://container.googleapis.com/v1beta1";

/// Default Memorystore API endpoint
pub const DEFAULT_REDIS_ENDPOINT: &str = "https://redis.googleapis.com/v1";

/// Default Cloud DNS API endpoint
pub const DEFAULT_DNS_ENDPOINT: &str = "https://dns.googleapis.com/dns/v1";

/// Metadata server token endpoint for the default service account
pub const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Header required by the metadata server
pub const METADATA_FLAVOR_HEADER: &str = "Metadata-Flavor";

/// Refresh cached access tokens this long before they expire
pub const TOKEN_REFRESH_MARGIN_SECS: u64 = 60;

/// Metric/log label of the GKE service
pub const GCP_SERVICE_CONTAINER: &str = "container";

/// Metric/log label of the Memorystore service
pub const GCP_SERVICE_REDIS: &str = "redis";

/// Metric/log label of the Cloud DNS service
pub const GCP_SERVICE_DNS: &str = "dns";

/// Name of the placeholder node pool created with every GKE cluster
pub const BOOTSTRAP_NODE_POOL_NAME: &str = "crossplane-bootstrap";

/// `kind` of Cloud DNS managed zones
pub const DNS_MANAGED_ZONE_KIND: &str = "dns#managedZone";

/// `kind` of a managed zone private visibility config
pub const DNS_PRIVATE_VISIBILITY_CONFIG_KIND: &str = "dns#managedZonePrivateVisibilityConfig";

/// `kind` of a managed zone private visibility network
pub const DNS_PRIVATE_VISIBILITY_NETWORK_KIND: &str =
    "dns#managedZonePrivateVisibilityConfigNetwork";

// ============================================================================
// Connection Secret Keys
// ============================================================================

/// Endpoint of the external resource
pub const CONNECTION_KEY_ENDPOINT: &str = "endpoint";

/// Port of the external resource
pub const CONNECTION_KEY_PORT: &str = "port";

/// Basic-auth username
pub const CONNECTION_KEY_USERNAME: &str = "username";

/// Basic-auth password
pub const CONNECTION_KEY_PASSWORD: &str = "password";

/// PEM cluster CA certificate
pub const CONNECTION_KEY_CLUSTER_CA: &str = "clusterCA";

/// PEM client certificate
pub const CONNECTION_KEY_CLIENT_CERT: &str = "clientCert";

/// PEM client key
pub const CONNECTION_KEY_CLIENT_KEY: &str = "clientKey";

/// Generated kubeconfig
pub const CONNECTION_KEY_KUBECONFIG: &str = "kubeconfig";

// ============================================================================
// Controller Timing Constants
// ============================================================================

/// Requeue after an external create/update/delete was issued (30 seconds)
pub const DEFAULT_SHORT_WAIT_SECS: u64 = 30;

/// Requeue when the resource is in sync (1 minute)
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Requeue duration for controller errors (30 seconds)
pub const ERROR_REQUEUE_DURATION_SECS: u64 = 30;

// ============================================================================
// Runtime Constants
// ============================================================================

/// Number of worker threads for Tokio runtime
pub const TOKIO_WORKER_THREADS: usize = 4;

// ============================================================================
// Metrics Server Constants
// ============================================================================

/// Default bind address of the metrics HTTP server
pub const DEFAULT_METRICS_ADDR: &str = "0.0.0.0:8080";

/// Path for Prometheus metrics endpoint
pub const METRICS_SERVER_PATH: &str = "/metrics";

/// Path for the liveness endpoint
pub const HEALTH_SERVER_PATH: &str = "/healthz";
