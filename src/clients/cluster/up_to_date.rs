// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Up-to-date check and single-update dispatch for GKE clusters.
//!
//! The GKE `update` RPC accepts exactly one `desired*` field per call, and a few
//! fields have dedicated `set*` RPCs. The check therefore never produces a batch:
//! it walks [`FIELD_CHECKS`] in a fixed order and returns the action for the first
//! field group that differs. The next reconcile re-observes and picks up the next
//! mismatch, so N differing groups converge in N passes.
//!
//! The desired object is a [`DesiredCluster`]: a clone of the observed cluster with
//! the parameters generated on top. Fields the generator does not touch are
//! therefore equal on both sides and never trigger an update.
//!
//! Comparisons treat an absent block like a block of zero values and ignore
//! server bookkeeping (maintenance `resourceVersion` and window `duration`, private
//! cluster endpoints and peering name).

use super::bootstrap_node_pool_name;
use super::generate::generate_cluster;
use crate::constants::BOOTSTRAP_NODE_POOL_NAME;
use crate::crd::container::ClusterParameters;
use crate::errors::GcpError;
use crate::gcp::container::{self as gke, ClusterService};
use tracing::{debug, error};

/// Field groups in the order they are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    AddonsConfig,
    Autoscaling,
    BinaryAuthorization,
    DatabaseEncryption,
    LegacyAbac,
    Locations,
    LoggingService,
    MaintenancePolicy,
    MasterAuthorizedNetworksConfig,
    MonitoringService,
    NetworkConfig,
    NetworkPolicy,
    PrivateClusterConfig,
    ReleaseChannel,
    ResourceLabels,
    ResourceUsageExportConfig,
    VerticalPodAutoscaling,
    WorkloadIdentityConfig,
    PodSecurityPolicyConfig,
    ShieldedNodes,
}

impl FieldGroup {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AddonsConfig => "AddonsConfig",
            Self::Autoscaling => "Autoscaling",
            Self::BinaryAuthorization => "BinaryAuthorization",
            Self::DatabaseEncryption => "DatabaseEncryption",
            Self::LegacyAbac => "LegacyAbac",
            Self::Locations => "Locations",
            Self::LoggingService => "LoggingService",
            Self::MaintenancePolicy => "MaintenancePolicy",
            Self::MasterAuthorizedNetworksConfig => "MasterAuthorizedNetworksConfig",
            Self::MonitoringService => "MonitoringService",
            Self::NetworkConfig => "NetworkConfig",
            Self::NetworkPolicy => "NetworkPolicy",
            Self::PrivateClusterConfig => "PrivateClusterConfig",
            Self::ReleaseChannel => "ReleaseChannel",
            Self::ResourceLabels => "ResourceLabels",
            Self::ResourceUsageExportConfig => "ResourceUsageExportConfig",
            Self::VerticalPodAutoscaling => "VerticalPodAutoscaling",
            Self::WorkloadIdentityConfig => "WorkloadIdentityConfig",
            Self::PodSecurityPolicyConfig => "PodSecurityPolicyConfig",
            Self::ShieldedNodes => "ShieldedNodes",
        }
    }
}

impl std::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single mutating RPC to issue next.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateAction {
    /// Nothing to do.
    NoOp,
    /// Remove the placeholder node pool created with the cluster.
    DeleteBootstrapNodePool,
    /// `clusters.update` with one `desired*` field set.
    UpdateCluster {
        group: FieldGroup,
        request: gke::UpdateClusterRequest,
    },
    SetLegacyAbac(gke::SetLegacyAbacRequest),
    SetMaintenancePolicy(gke::SetMaintenancePolicyRequest),
    SetNetworkPolicy(gke::SetNetworkPolicyRequest),
    SetResourceLabels(gke::SetLabelsRequest),
}

impl UpdateAction {
    /// Label used in logs and metrics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoOp => "NoOp",
            Self::DeleteBootstrapNodePool => "BootstrapNodePool",
            Self::UpdateCluster { group, .. } => group.as_str(),
            Self::SetLegacyAbac(_) => FieldGroup::LegacyAbac.as_str(),
            Self::SetMaintenancePolicy(_) => FieldGroup::MaintenancePolicy.as_str(),
            Self::SetNetworkPolicy(_) => FieldGroup::NetworkPolicy.as_str(),
            Self::SetResourceLabels(_) => FieldGroup::ResourceLabels.as_str(),
        }
    }

    /// Issue the action against the cluster `cluster_name`
    /// (`projects/{p}/locations/{l}/clusters/{c}`).
    ///
    /// Exactly one RPC is made, none for [`UpdateAction::NoOp`].
    ///
    /// # Errors
    ///
    /// Returns the RPC's [`GcpError`].
    pub async fn apply(
        &self,
        service: &dyn ClusterService,
        cluster_name: &str,
    ) -> Result<Option<gke::Operation>, GcpError> {
        let operation = match self {
            Self::NoOp => return Ok(None),
            Self::DeleteBootstrapNodePool => {
                service
                    .delete_node_pool(&bootstrap_node_pool_name(cluster_name))
                    .await?
            }
            Self::UpdateCluster { request, .. } => service.update(cluster_name, request).await?,
            Self::SetLegacyAbac(request) => service.set_legacy_abac(cluster_name, request).await?,
            Self::SetMaintenancePolicy(request) => {
                service.set_maintenance_policy(cluster_name, request).await?
            }
            Self::SetNetworkPolicy(request) => {
                service.set_network_policy(cluster_name, request).await?
            }
            Self::SetResourceLabels(request) => {
                service.set_resource_labels(cluster_name, request).await?
            }
        };
        Ok(Some(operation))
    }
}

/// The observed cluster with the parameters generated on top.
///
/// Always built from a deep copy, so mutating it never aliases the observed object.
#[derive(Clone, Debug, PartialEq)]
pub struct DesiredCluster(gke::Cluster);

impl DesiredCluster {
    #[must_use]
    pub fn from_observed(name: &str, params: &ClusterParameters, observed: &gke::Cluster) -> Self {
        let mut cluster = observed.clone();
        generate_cluster(name, params, &mut cluster);
        Self(cluster)
    }

    #[must_use]
    pub fn cluster(&self) -> &gke::Cluster {
        &self.0
    }
}

/// One entry of the ordered check table.
pub struct FieldCheck {
    pub group: FieldGroup,
    /// `true` when desired and observed differ for this group.
    pub differs: fn(&gke::Cluster, &gke::Cluster) -> bool,
    /// Build the action from (desired, observed).
    pub action: fn(&gke::Cluster, &gke::Cluster) -> UpdateAction,
}

/// Ordered `(group, differs, action)` table; the first differing entry wins.
pub static FIELD_CHECKS: &[FieldCheck] = &[
    FieldCheck {
        group: FieldGroup::AddonsConfig,
        differs: |d, o| addons(d) != addons(o),
        action: |d, _| {
            cluster_update(FieldGroup::AddonsConfig, gke::ClusterUpdate {
                desired_addons_config: Some(d.addons_config.clone().unwrap_or_default()),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::Autoscaling,
        differs: |d, o| autoscaling(d) != autoscaling(o),
        action: |d, _| {
            cluster_update(FieldGroup::Autoscaling, gke::ClusterUpdate {
                desired_cluster_autoscaling: Some(d.autoscaling.clone().unwrap_or_default()),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::BinaryAuthorization,
        differs: |d, o| !block_eq(&d.binary_authorization, &o.binary_authorization),
        action: |d, _| {
            cluster_update(FieldGroup::BinaryAuthorization, gke::ClusterUpdate {
                desired_binary_authorization: Some(
                    d.binary_authorization.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::DatabaseEncryption,
        differs: |d, o| !block_eq(&d.database_encryption, &o.database_encryption),
        action: |d, _| {
            cluster_update(FieldGroup::DatabaseEncryption, gke::ClusterUpdate {
                desired_database_encryption: Some(d.database_encryption.clone().unwrap_or_default()),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::LegacyAbac,
        differs: |d, o| !block_eq(&d.legacy_abac, &o.legacy_abac),
        action: |d, _| {
            UpdateAction::SetLegacyAbac(gke::SetLegacyAbacRequest {
                enabled: d.legacy_abac.as_ref().is_some_and(|l| l.enabled),
            })
        },
    },
    FieldCheck {
        group: FieldGroup::Locations,
        differs: |d, o| d.locations != o.locations,
        action: |d, _| {
            cluster_update(FieldGroup::Locations, gke::ClusterUpdate {
                desired_locations: d.locations.clone(),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::LoggingService,
        differs: |d, o| d.logging_service != o.logging_service,
        action: |d, _| {
            cluster_update(FieldGroup::LoggingService, gke::ClusterUpdate {
                desired_logging_service: d.logging_service.clone(),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::MaintenancePolicy,
        differs: |d, o| maintenance_start_time(d) != maintenance_start_time(o),
        action: |d, _| {
            let mut policy = d.maintenance_policy.clone().unwrap_or_default();
            if let Some(daily) = policy
                .window
                .as_mut()
                .and_then(|w| w.daily_maintenance_window.as_mut())
            {
                daily.duration.clear();
            }
            UpdateAction::SetMaintenancePolicy(gke::SetMaintenancePolicyRequest {
                maintenance_policy: policy,
            })
        },
    },
    FieldCheck {
        group: FieldGroup::MasterAuthorizedNetworksConfig,
        differs: |d, o| {
            !block_eq(
                &d.master_authorized_networks_config,
                &o.master_authorized_networks_config,
            )
        },
        action: |d, _| {
            cluster_update(FieldGroup::MasterAuthorizedNetworksConfig, gke::ClusterUpdate {
                desired_master_authorized_networks_config: Some(
                    d.master_authorized_networks_config.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::MonitoringService,
        differs: |d, o| d.monitoring_service != o.monitoring_service,
        action: |d, _| {
            cluster_update(FieldGroup::MonitoringService, gke::ClusterUpdate {
                desired_monitoring_service: d.monitoring_service.clone(),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::NetworkConfig,
        differs: |d, o| intra_node_visibility(d) != intra_node_visibility(o),
        action: |d, _| {
            cluster_update(FieldGroup::NetworkConfig, gke::ClusterUpdate {
                desired_intra_node_visibility_config: Some(gke::IntraNodeVisibilityConfig {
                    enabled: intra_node_visibility(d),
                }),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::NetworkPolicy,
        differs: |d, o| !block_eq(&d.network_policy, &o.network_policy),
        action: |d, _| {
            UpdateAction::SetNetworkPolicy(gke::SetNetworkPolicyRequest {
                network_policy: d.network_policy.clone().unwrap_or_default(),
            })
        },
    },
    FieldCheck {
        group: FieldGroup::PrivateClusterConfig,
        differs: |d, o| private_cluster_config(d) != private_cluster_config(o),
        action: |d, _| {
            cluster_update(FieldGroup::PrivateClusterConfig, gke::ClusterUpdate {
                desired_private_cluster_config: Some(private_cluster_config(d)),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::ReleaseChannel,
        differs: |d, o| !block_eq(&d.release_channel, &o.release_channel),
        action: |d, _| {
            cluster_update(FieldGroup::ReleaseChannel, gke::ClusterUpdate {
                desired_release_channel: Some(d.release_channel.clone().unwrap_or_default()),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::ResourceLabels,
        differs: |d, o| d.resource_labels != o.resource_labels,
        action: |d, o| {
            UpdateAction::SetResourceLabels(gke::SetLabelsRequest {
                resource_labels: d.resource_labels.clone(),
                label_fingerprint: o.label_fingerprint.clone(),
            })
        },
    },
    FieldCheck {
        group: FieldGroup::ResourceUsageExportConfig,
        differs: |d, o| resource_usage_export_config(d) != resource_usage_export_config(o),
        action: |d, _| {
            cluster_update(FieldGroup::ResourceUsageExportConfig, gke::ClusterUpdate {
                desired_resource_usage_export_config: Some(
                    d.resource_usage_export_config.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::VerticalPodAutoscaling,
        differs: |d, o| !block_eq(&d.vertical_pod_autoscaling, &o.vertical_pod_autoscaling),
        action: |d, _| {
            cluster_update(FieldGroup::VerticalPodAutoscaling, gke::ClusterUpdate {
                desired_vertical_pod_autoscaling: Some(
                    d.vertical_pod_autoscaling.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::WorkloadIdentityConfig,
        differs: |d, o| !block_eq(&d.workload_identity_config, &o.workload_identity_config),
        action: |d, _| {
            cluster_update(FieldGroup::WorkloadIdentityConfig, gke::ClusterUpdate {
                desired_workload_identity_config: Some(
                    d.workload_identity_config.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::PodSecurityPolicyConfig,
        differs: |d, o| !block_eq(&d.pod_security_policy_config, &o.pod_security_policy_config),
        action: |d, _| {
            cluster_update(FieldGroup::PodSecurityPolicyConfig, gke::ClusterUpdate {
                desired_pod_security_policy_config: Some(
                    d.pod_security_policy_config.clone().unwrap_or_default(),
                ),
                ..gke::ClusterUpdate::default()
            })
        },
    },
    FieldCheck {
        group: FieldGroup::ShieldedNodes,
        differs: |d, o| !block_eq(&d.shielded_nodes, &o.shielded_nodes),
        action: |d, _| {
            cluster_update(FieldGroup::ShieldedNodes, gke::ClusterUpdate {
                desired_shielded_nodes: Some(d.shielded_nodes.clone().unwrap_or_default()),
                ..gke::ClusterUpdate::default()
            })
        },
    },
];

/// Whether the observed cluster still carries the placeholder node pool.
#[must_use]
pub fn has_bootstrap_node_pool(observed: &gke::Cluster) -> bool {
    observed
        .node_pools
        .iter()
        .any(|pool| pool.name == BOOTSTRAP_NODE_POOL_NAME)
}

/// Compare the parameters against the observed cluster.
///
/// Returns `(true, NoOp)` when nothing differs, otherwise `(false, action)` with
/// the action for the highest-priority difference. The bootstrap node pool is
/// removed before any other field is touched.
#[must_use]
pub fn is_up_to_date(
    name: &str,
    params: &ClusterParameters,
    observed: &gke::Cluster,
) -> (bool, UpdateAction) {
    if params.location.is_empty() {
        error!(cluster = %name, "cannot compute desired cluster state: location is empty");
        return (false, UpdateAction::NoOp);
    }

    if has_bootstrap_node_pool(observed) {
        debug!(cluster = %name, "bootstrap node pool present");
        return (false, UpdateAction::DeleteBootstrapNodePool);
    }

    let desired = DesiredCluster::from_observed(name, params, observed);
    match FIELD_CHECKS
        .iter()
        .find(|check| (check.differs)(desired.cluster(), observed))
    {
        Some(check) => {
            debug!(cluster = %name, field_group = %check.group, "cluster is not up to date");
            (false, (check.action)(desired.cluster(), observed))
        }
        None => (true, UpdateAction::NoOp),
    }
}

fn cluster_update(group: FieldGroup, update: gke::ClusterUpdate) -> UpdateAction {
    UpdateAction::UpdateCluster {
        group,
        request: gke::UpdateClusterRequest { update },
    }
}

/// Absent blocks compare equal to zero-valued blocks.
fn block_eq<T: Default + PartialEq>(a: &Option<T>, b: &Option<T>) -> bool {
    let zero = T::default();
    a.as_ref().unwrap_or(&zero) == b.as_ref().unwrap_or(&zero)
}

fn filled<T: Clone + Default>(value: &Option<T>) -> Option<T> {
    Some(value.clone().unwrap_or_default())
}

fn addons(cluster: &gke::Cluster) -> gke::AddonsConfig {
    let a = cluster.addons_config.clone().unwrap_or_default();
    gke::AddonsConfig {
        http_load_balancing: filled(&a.http_load_balancing),
        horizontal_pod_autoscaling: filled(&a.horizontal_pod_autoscaling),
        kubernetes_dashboard: filled(&a.kubernetes_dashboard),
        network_policy_config: filled(&a.network_policy_config),
        istio_config: filled(&a.istio_config),
        cloud_run_config: filled(&a.cloud_run_config),
        dns_cache_config: filled(&a.dns_cache_config),
        config_connector_config: filled(&a.config_connector_config),
        gce_persistent_disk_csi_driver_config: filled(&a.gce_persistent_disk_csi_driver_config),
        kalm_config: filled(&a.kalm_config),
    }
}

fn autoscaling(cluster: &gke::Cluster) -> gke::ClusterAutoscaling {
    let mut a = cluster.autoscaling.clone().unwrap_or_default();
    a.autoprovisioning_node_pool_defaults = filled(&a.autoprovisioning_node_pool_defaults);
    a
}

fn maintenance_start_time(cluster: &gke::Cluster) -> &str {
    cluster
        .maintenance_policy
        .as_ref()
        .and_then(|p| p.window.as_ref())
        .and_then(|w| w.daily_maintenance_window.as_ref())
        .map_or("", |daily| daily.start_time.as_str())
}

fn intra_node_visibility(cluster: &gke::Cluster) -> bool {
    cluster
        .network_config
        .as_ref()
        .is_some_and(|n| n.enable_intra_node_visibility)
}

fn private_cluster_config(cluster: &gke::Cluster) -> gke::PrivateClusterConfig {
    let mut p = cluster.private_cluster_config.clone().unwrap_or_default();
    p.private_endpoint.clear();
    p.public_endpoint.clear();
    p.peering_name.clear();
    p.master_global_access_config = filled(&p.master_global_access_config);
    p
}

fn resource_usage_export_config(cluster: &gke::Cluster) -> gke::ResourceUsageExportConfig {
    let mut r = cluster.resource_usage_export_config.clone().unwrap_or_default();
    r.bigquery_destination = filled(&r.bigquery_destination);
    r.consumption_metering_config = filled(&r.consumption_metering_config);
    r
}

#[cfg(test)]
#[path = "up_to_date_tests.rs"]
mod up_to_date_tests;
