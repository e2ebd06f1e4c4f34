// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! GKE API objects (`container.googleapis.com/v1beta1`).
//!
//! Field names follow the REST representation. Only the subset of the API the
//! provider manages or reports is modelled; unknown response fields are ignored.

use crate::gcp::{int64, is_default};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    /// Lifecycle state of a cluster.
    ClusterStatus {
        Unspecified => "STATUS_UNSPECIFIED",
        Provisioning => "PROVISIONING",
        Running => "RUNNING",
        Reconciling => "RECONCILING",
        Stopping => "STOPPING",
        Error => "ERROR",
        Degraded => "DEGRADED",
    }
}

/// A Google Kubernetes Engine cluster.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_auth: Option<MasterAuth>,
    #[serde(skip_serializing_if = "is_default")]
    pub logging_service: String,
    #[serde(skip_serializing_if = "is_default")]
    pub monitoring_service: String,
    #[serde(skip_serializing_if = "is_default")]
    pub network: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_ipv4_cidr: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addons_config: Option<AddonsConfig>,
    #[serde(skip_serializing_if = "is_default")]
    pub subnetwork: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node_pools: Vec<NodePool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_kubernetes_alpha: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub resource_labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub label_fingerprint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_abac: Option<LegacyAbac>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_allocation_policy: Option<IpAllocationPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_authorized_networks_config: Option<MasterAuthorizedNetworksConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_policy: Option<MaintenancePolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_authorization: Option<BinaryAuthorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_security_policy_config: Option<PodSecurityPolicyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<ClusterAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_config: Option<NetworkConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_max_pods_constraint: Option<MaxPodsConstraint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_usage_export_config: Option<ResourceUsageExportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authenticator_groups_config: Option<AuthenticatorGroupsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_cluster_config: Option<PrivateClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_pod_autoscaling: Option<VerticalPodAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shielded_nodes: Option<ShieldedNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<ReleaseChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_identity_config: Option<WorkloadIdentityConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_encryption: Option<DatabaseEncryption>,
    #[serde(skip_serializing_if = "is_default")]
    pub initial_cluster_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_tpu: bool,

    // Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "is_default")]
    pub zone: String,
    #[serde(skip_serializing_if = "is_default")]
    pub endpoint: String,
    #[serde(skip_serializing_if = "is_default")]
    pub current_master_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub current_node_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: ClusterStatus,
    #[serde(skip_serializing_if = "is_default")]
    pub status_message: String,
    #[serde(skip_serializing_if = "is_default")]
    pub node_ipv4_cidr_size: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub services_ipv4_cidr: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_group_urls: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub current_node_count: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub expire_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub location: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tpu_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<StatusCondition>,
}

/// A condition reported by the API on a cluster or node pool.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusCondition {
    #[serde(skip_serializing_if = "is_default")]
    pub code: String,
    #[serde(skip_serializing_if = "is_default")]
    pub message: String,
}

// ============================================================================
// Authentication
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterAuth {
    #[serde(skip_serializing_if = "is_default")]
    pub username: String,
    #[serde(skip_serializing_if = "is_default")]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_certificate_config: Option<ClientCertificateConfig>,
    /// Base64-encoded public certificate of the cluster root of trust.
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_ca_certificate: String,
    /// Base64-encoded client certificate.
    #[serde(skip_serializing_if = "is_default")]
    pub client_certificate: String,
    /// Base64-encoded client private key.
    #[serde(skip_serializing_if = "is_default")]
    pub client_key: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientCertificateConfig {
    pub issue_client_certificate: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthenticatorGroupsConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub security_group: String,
}

// ============================================================================
// Addons
// ============================================================================

/// Configuration for the cluster addons.
///
/// Each sub-block is replaced wholesale by the API, so their `disabled`/`enabled`
/// flags are always serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddonsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_load_balancing: Option<HttpLoadBalancing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_pod_autoscaling: Option<HorizontalPodAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes_dashboard: Option<KubernetesDashboard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_policy_config: Option<NetworkPolicyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub istio_config: Option<IstioConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_run_config: Option<CloudRunConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_cache_config: Option<DnsCacheConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_connector_config: Option<ConfigConnectorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gce_persistent_disk_csi_driver_config: Option<GcePersistentDiskCsiDriverConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kalm_config: Option<KalmConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpLoadBalancing {
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HorizontalPodAutoscaling {
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KubernetesDashboard {
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkPolicyConfig {
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IstioConfig {
    pub disabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub auth: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudRunConfig {
    pub disabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DnsCacheConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigConnectorConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GcePersistentDiskCsiDriverConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KalmConfig {
    pub enabled: bool,
}

// ============================================================================
// Cluster-level feature blocks
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyAbac {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkPolicy {
    #[serde(skip_serializing_if = "is_default")]
    pub provider: String,
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinaryAuthorization {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PodSecurityPolicyConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerticalPodAutoscaling {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldedNodes {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseChannel {
    #[serde(skip_serializing_if = "is_default")]
    pub channel: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadIdentityConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub workload_pool: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DatabaseEncryption {
    #[serde(skip_serializing_if = "is_default")]
    pub state: String,
    #[serde(skip_serializing_if = "is_default")]
    pub key_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaxPodsConstraint {
    #[serde(with = "int64", skip_serializing_if = "is_default")]
    pub max_pods_per_node: i64,
}

// ============================================================================
// Autoscaling
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterAutoscaling {
    pub enable_node_autoprovisioning: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_limits: Vec<ResourceLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoprovisioning_node_pool_defaults: Option<AutoprovisioningNodePoolDefaults>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub autoprovisioning_locations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceLimit {
    #[serde(skip_serializing_if = "is_default")]
    pub resource_type: String,
    #[serde(with = "int64", skip_serializing_if = "is_default")]
    pub minimum: i64,
    #[serde(with = "int64", skip_serializing_if = "is_default")]
    pub maximum: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoprovisioningNodePoolDefaults {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oauth_scopes: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub service_account: String,
}

// ============================================================================
// Networking
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpAllocationPolicy {
    #[serde(skip_serializing_if = "is_default")]
    pub use_ip_aliases: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub create_subnetwork: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub subnetwork_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_secondary_range_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub services_secondary_range_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cluster_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "is_default")]
    pub node_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "is_default")]
    pub services_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "is_default")]
    pub tpu_ipv4_cidr_block: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterAuthorizedNetworksConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cidr_blocks: Vec<CidrBlock>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CidrBlock {
    #[serde(skip_serializing_if = "is_default")]
    pub display_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub cidr_block: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkConfig {
    /// Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub network: String,
    /// Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub subnetwork: String,
    pub enable_intra_node_visibility: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntraNodeVisibilityConfig {
    pub enabled: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrivateClusterConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub enable_private_nodes: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_private_endpoint: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub master_ipv4_cidr_block: String,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_peering_route_sharing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_global_access_config: Option<MasterGlobalAccessConfig>,
    /// Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub private_endpoint: String,
    /// Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub public_endpoint: String,
    /// Output only.
    #[serde(skip_serializing_if = "is_default")]
    pub peering_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasterGlobalAccessConfig {
    pub enabled: bool,
}

// ============================================================================
// Maintenance and usage export
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenancePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<MaintenanceWindow>,
    /// Server-generated fingerprint for optimistic concurrency.
    #[serde(skip_serializing_if = "is_default")]
    pub resource_version: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaintenanceWindow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_maintenance_window: Option<DailyMaintenanceWindow>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyMaintenanceWindow {
    #[serde(skip_serializing_if = "is_default")]
    pub start_time: String,
    /// Output only, RFC3339 duration chosen by the server.
    #[serde(skip_serializing_if = "is_default")]
    pub duration: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceUsageExportConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bigquery_destination: Option<BigQueryDestination>,
    pub enable_network_egress_metering: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumption_metering_config: Option<ConsumptionMeteringConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BigQueryDestination {
    #[serde(skip_serializing_if = "is_default")]
    pub dataset_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsumptionMeteringConfig {
    pub enabled: bool,
}

// ============================================================================
// Node pools (reported only; managed by a separate resource kind)
// ============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePool {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfig>,
    #[serde(skip_serializing_if = "is_default")]
    pub initial_node_count: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "is_default")]
    pub version: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_group_urls: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<NodePoolAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub management: Option<NodeManagement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_pods_constraint: Option<MaxPodsConstraint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<StatusCondition>,
    #[serde(skip_serializing_if = "is_default")]
    pub pod_ipv4_cidr_size: i32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub machine_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub disk_size_gb: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oauth_scopes: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub service_account: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub image_type: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub local_ssd_count: i32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub preemptible: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accelerators: Vec<AcceleratorConfig>,
    #[serde(skip_serializing_if = "is_default")]
    pub disk_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub min_cpu_platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload_metadata_config: Option<WorkloadMetadataConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub taints: Vec<NodeTaint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandbox_config: Option<SandboxConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shielded_instance_config: Option<ShieldedInstanceConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcceleratorConfig {
    #[serde(with = "int64", skip_serializing_if = "is_default")]
    pub accelerator_count: i64,
    #[serde(skip_serializing_if = "is_default")]
    pub accelerator_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkloadMetadataConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub node_metadata: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeTaint {
    #[serde(skip_serializing_if = "is_default")]
    pub key: String,
    #[serde(skip_serializing_if = "is_default")]
    pub value: String,
    #[serde(skip_serializing_if = "is_default")]
    pub effect: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SandboxConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub sandbox_type: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShieldedInstanceConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub enable_secure_boot: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub enable_integrity_monitoring: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodePoolAutoscaling {
    #[serde(skip_serializing_if = "is_default")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub min_node_count: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub max_node_count: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub autoprovisioned: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeManagement {
    #[serde(skip_serializing_if = "is_default")]
    pub auto_upgrade: bool,
    #[serde(skip_serializing_if = "is_default")]
    pub auto_repair: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrade_options: Option<AutoUpgradeOptions>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutoUpgradeOptions {
    #[serde(skip_serializing_if = "is_default")]
    pub auto_upgrade_start_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
}

// ============================================================================
// Requests and operations
// ============================================================================

/// Body of `projects.locations.clusters.create`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterRequest {
    pub cluster: Cluster,
}

/// Body of `projects.locations.clusters.update`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClusterRequest {
    pub update: ClusterUpdate,
}

/// A single in-place cluster mutation.
///
/// The API rejects updates that set more than one `desired*` field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_addons_config: Option<AddonsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_cluster_autoscaling: Option<ClusterAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_binary_authorization: Option<BinaryAuthorization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_database_encryption: Option<DatabaseEncryption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub desired_locations: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub desired_logging_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_master_authorized_networks_config: Option<MasterAuthorizedNetworksConfig>,
    #[serde(skip_serializing_if = "is_default")]
    pub desired_monitoring_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_intra_node_visibility_config: Option<IntraNodeVisibilityConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_pod_security_policy_config: Option<PodSecurityPolicyConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_private_cluster_config: Option<PrivateClusterConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_release_channel: Option<ReleaseChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_resource_usage_export_config: Option<ResourceUsageExportConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_shielded_nodes: Option<ShieldedNodes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_vertical_pod_autoscaling: Option<VerticalPodAutoscaling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_workload_identity_config: Option<WorkloadIdentityConfig>,
}

/// Body of `clusters.setLegacyAbac`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLegacyAbacRequest {
    pub enabled: bool,
}

/// Body of `clusters.setMaintenancePolicy`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMaintenancePolicyRequest {
    pub maintenance_policy: MaintenancePolicy,
}

/// Body of `clusters.setNetworkPolicy`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetNetworkPolicyRequest {
    pub network_policy: NetworkPolicy,
}

/// Body of `clusters.setResourceLabels`.
///
/// Labels are always sent so that clearing them is expressible.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLabelsRequest {
    pub resource_labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub label_fingerprint: String,
}

/// A long-running GKE operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub operation_type: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status_message: String,
    #[serde(skip_serializing_if = "is_default")]
    pub self_link: String,
    #[serde(skip_serializing_if = "is_default")]
    pub target_link: String,
    #[serde(skip_serializing_if = "is_default")]
    pub location: String,
    #[serde(skip_serializing_if = "is_default")]
    pub start_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub end_time: String,
}
