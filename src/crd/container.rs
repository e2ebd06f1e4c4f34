// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `GKECluster` (`container.gcp.crossplane.io/v1beta2`).
//!
//! Parameters mirror the GKE `Cluster` create/update shape. A field left unset
//! is late-initialized from the live cluster on the first observe, so after one
//! reconcile the spec reflects every server-chosen default.
//!
//! Node pools are not part of this resource: the API requires one at create
//! time, so a placeholder pool is created with the cluster and removed as soon
//! as the cluster exists.
//!
//! # Example
//!
//! ```yaml
//! apiVersion: container.gcp.crossplane.io/v1beta2
//! kind: GKECluster
//! metadata:
//!   name: example
//! spec:
//!   forProvider:
//!     location: us-central1
//!     locations: [us-central1-a, us-central1-b]
//!     loggingService: logging.googleapis.com/kubernetes
//!   writeConnectionSecretToRef:
//!     name: example-gke
//!     namespace: crossplane-system
//! ```

use super::common::{Condition, DeletionPolicy, SecretReference};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of a GKE cluster.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[kube(
    group = "container.gcp.crossplane.io",
    version = "v1beta2",
    kind = "GKECluster",
    shortname = "gke",
    doc = "GKECluster is a managed resource that represents a Google Kubernetes Engine cluster."
)]
#[kube(status = "GKEClusterStatus")]
#[serde(rename_all = "camelCase")]
pub struct GKEClusterSpec {
    /// Cluster parameters.
    pub for_provider: ClusterParameters,

    /// Whether to delete or orphan the GKE cluster when this resource is deleted.
    #[serde(default)]
    pub deletion_policy: DeletionPolicy,

    /// Secret receiving the endpoint, credentials and a kubeconfig.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_connection_secret_to_ref: Option<SecretReference>,
}

/// Observed state of a GKE cluster.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GKEClusterStatus {
    #[serde(default)]
    pub at_provider: ClusterObservation,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

// ============================================================================
// Parameters
// ============================================================================

/// User-declared cluster configuration.
///
/// Fields documented as immutable are only sent on create.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterParameters {
    /// Region or zone of the cluster, e.g. `us-central1` or `us-central1-a`. Immutable.
    pub location: String,

    /// Addons enabled on the cluster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons_config: Option<AddonsConfig>,

    /// Google Groups for RBAC. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authenticator_groups_config: Option<AuthenticatorGroupsConfig>,

    /// Cluster autoscaling and node auto-provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<ClusterAutoscaling>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_authorization: Option<BinaryAuthorization>,

    /// Pod CIDR of the cluster. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ipv4_cidr: Option<String>,

    /// Application-layer secrets encryption.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_encryption: Option<DatabaseEncryption>,

    /// Default per-node pod limit. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_max_pods_constraint: Option<MaxPodsConstraint>,

    /// Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_kubernetes_alpha: Option<bool>,

    /// Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_tpu: Option<bool>,

    /// Initial master version. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_cluster_version: Option<String>,

    /// VPC-native (alias IP) allocation. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_allocation_policy: Option<IpAllocationPolicy>,

    /// Fingerprint of the resource labels, required to change them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_fingerprint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_abac: Option<LegacyAbac>,

    /// Zones in which the cluster's nodes are located.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// e.g. `logging.googleapis.com/kubernetes` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_service: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_policy: Option<MaintenancePolicySpec>,

    /// Master authentication. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_auth: Option<MasterAuth>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_authorized_networks_config: Option<MasterAuthorizedNetworksConfig>,

    /// e.g. `monitoring.googleapis.com/kubernetes` or `none`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_service: Option<String>,

    /// VPC network name. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfigSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pod_security_policy_config: Option<PodSecurityPolicyConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_cluster_config: Option<PrivateClusterConfigSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<ReleaseChannel>,

    /// Labels applied to the cluster's GCE resources.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub resource_labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_usage_export_config: Option<ResourceUsageExportConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shielded_nodes: Option<ShieldedNodes>,

    /// Subnetwork name. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnetwork: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_pod_autoscaling: Option<VerticalPodAutoscaling>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload_identity_config: Option<WorkloadIdentityConfig>,
}

/// Cluster addons. Each present block is sent in full.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddonsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloud_run_config: Option<DisabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_connector_config: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_cache_config: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gce_persistent_disk_csi_driver_config: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_pod_autoscaling: Option<DisabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_load_balancing: Option<DisabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istio_config: Option<IstioConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kalm_config: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_dashboard: Option<DisabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy_config: Option<DisabledFlag>,
}

/// An addon that is on unless disabled.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
pub struct DisabledFlag {
    #[serde(default)]
    pub disabled: bool,
}

/// A feature that is off unless enabled.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
pub struct EnabledFlag {
    #[serde(default)]
    pub enabled: bool,
}

/// Binary Authorization.
pub type BinaryAuthorization = EnabledFlag;
/// Legacy ABAC authorizer.
pub type LegacyAbac = EnabledFlag;
/// Pod security policy admission controller.
pub type PodSecurityPolicyConfig = EnabledFlag;
/// Shielded GKE nodes.
pub type ShieldedNodes = EnabledFlag;
/// Vertical pod autoscaling.
pub type VerticalPodAutoscaling = EnabledFlag;

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IstioConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// `AUTH_NONE` or `AUTH_MUTUAL_TLS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatorGroupsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterAutoscaling {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub autoprovisioning_locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoprovisioning_node_pool_defaults: Option<AutoprovisioningNodePoolDefaults>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_node_autoprovisioning: Option<bool>,
    /// Global CPU and memory limits for node auto-provisioning.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_limits: Vec<ResourceLimit>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoprovisioningNodePoolDefaults {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oauth_scopes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLimit {
    /// e.g. `cpu` or `memory`.
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseEncryption {
    /// `ENCRYPTED` or `DECRYPTED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Cloud KMS key, `projects/.../cryptoKeys/...`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaxPodsConstraint {
    pub max_pods_per_node: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IpAllocationPolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_ip_aliases: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_subnetwork: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnetwork_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_secondary_range_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_secondary_range_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_ipv4_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_ipv4_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services_ipv4_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tpu_ipv4_cidr_block: Option<String>,
}

/// Only the daily window start time is user-settable.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePolicySpec {
    pub window: MaintenanceWindowSpec,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceWindowSpec {
    pub daily_maintenance_window: DailyMaintenanceWindowSpec,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyMaintenanceWindowSpec {
    /// `HH:MM` in GMT.
    pub start_time: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasterAuth {
    /// Basic-auth username; empty disables basic auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_certificate_config: Option<ClientCertificateConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientCertificateConfig {
    pub issue_client_certificate: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MasterAuthorizedNetworksConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cidr_blocks: Vec<CidrBlock>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CidrBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub cidr_block: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfigSpec {
    pub enable_intra_node_visibility: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkPolicy {
    /// `CALICO` or `PROVIDER_UNSPECIFIED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivateClusterConfigSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_private_endpoint: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_private_nodes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_ipv4_cidr_block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub master_global_access_config: Option<EnabledFlag>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseChannel {
    /// `RAPID`, `REGULAR` or `STABLE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsageExportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bigquery_destination: Option<BigQueryDestination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption_metering_config: Option<EnabledFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_network_egress_metering: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BigQueryDestination {
    pub dataset_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadIdentityConfig {
    /// `{project}.svc.id.goog`.
    pub workload_pool: String,
}

// ============================================================================
// Observation
// ============================================================================

/// Server-computed cluster fields.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterObservation {
    pub conditions: Vec<StatusConditionObservation>,
    pub create_time: String,
    pub current_master_version: String,
    pub current_node_count: i32,
    pub current_node_version: String,
    pub endpoint: String,
    pub expire_time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_policy: Option<MaintenancePolicyObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfigObservation>,
    pub node_ipv4_cidr_size: i32,
    pub node_pools: Vec<NodePoolObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_cluster_config: Option<PrivateClusterConfigObservation>,
    pub self_link: String,
    pub services_ipv4_cidr: String,
    pub status: String,
    pub status_message: String,
    pub tpu_ipv4_cidr_block: String,
    pub zone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusConditionObservation {
    pub code: String,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenancePolicyObservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<MaintenanceWindowObservation>,
    pub resource_version: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceWindowObservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_maintenance_window: Option<DailyMaintenanceWindowObservation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyMaintenanceWindowObservation {
    pub duration: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfigObservation {
    pub network: String,
    pub subnetwork: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateClusterConfigObservation {
    pub private_endpoint: String,
    pub public_endpoint: String,
    pub peering_name: String,
}

/// A node pool as reported on the cluster.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePoolObservation {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<NodePoolAutoscalingObservation>,
    pub conditions: Vec<StatusConditionObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfigObservation>,
    pub initial_node_count: i32,
    pub instance_group_urls: Vec<String>,
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<NodeManagementObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pods_constraint: Option<MaxPodsConstraint>,
    pub pod_ipv4_cidr_size: i32,
    pub self_link: String,
    pub status: String,
    pub status_message: String,
    pub version: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePoolAutoscalingObservation {
    pub autoprovisioned: bool,
    pub enabled: bool,
    pub max_node_count: i32,
    pub min_node_count: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeConfigObservation {
    pub accelerators: Vec<AcceleratorConfigObservation>,
    pub disk_size_gb: i32,
    pub disk_type: String,
    pub image_type: String,
    pub labels: BTreeMap<String, String>,
    pub local_ssd_count: i32,
    pub machine_type: String,
    pub metadata: BTreeMap<String, String>,
    pub min_cpu_platform: String,
    pub oauth_scopes: Vec<String>,
    pub preemptible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_config: Option<SandboxConfigObservation>,
    pub service_account: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shielded_instance_config: Option<ShieldedInstanceConfigObservation>,
    pub tags: Vec<String>,
    pub taints: Vec<NodeTaintObservation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_metadata_config: Option<WorkloadMetadataConfigObservation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AcceleratorConfigObservation {
    pub accelerator_count: i64,
    pub accelerator_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxConfigObservation {
    pub sandbox_type: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldedInstanceConfigObservation {
    pub enable_integrity_monitoring: bool,
    pub enable_secure_boot: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeTaintObservation {
    pub effect: String,
    pub key: String,
    pub value: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadMetadataConfigObservation {
    pub node_metadata: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeManagementObservation {
    pub auto_repair: bool,
    pub auto_upgrade: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_options: Option<AutoUpgradeOptionsObservation>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoUpgradeOptionsObservation {
    pub auto_upgrade_start_time: String,
    pub description: String,
}
