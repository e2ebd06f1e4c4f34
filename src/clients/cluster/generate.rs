// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Parameters -> GKE `Cluster`.
//!
//! Every sub-generator follows the same rule: an unset parameter block leaves the
//! target untouched; a set block is written leaf by leaf into the target, allocating
//! it if absent. Writing leaves instead of replacing whole blocks keeps server-only
//! fields (endpoints, fingerprints, durations) intact when the target is a copy of
//! the observed cluster.

use crate::clients::values::{or_zero, set_if_some, vec_from};
use crate::constants::BOOTSTRAP_NODE_POOL_NAME;
use crate::crd::container::{self as params, ClusterParameters};
use crate::gcp::container as gke;

/// Apply `p` onto `cluster` and name it `name`.
pub fn generate_cluster(name: &str, p: &ClusterParameters, cluster: &mut gke::Cluster) {
    cluster.name = name.to_string();

    generate_addons_config(p.addons_config.as_ref(), cluster);
    generate_authenticator_groups_config(p.authenticator_groups_config.as_ref(), cluster);
    generate_autoscaling(p.autoscaling.as_ref(), cluster);
    generate_binary_authorization(p.binary_authorization.as_ref(), cluster);
    set_if_some(&mut cluster.cluster_ipv4_cidr, p.cluster_ipv4_cidr.as_ref());
    generate_database_encryption(p.database_encryption.as_ref(), cluster);
    generate_default_max_pods_constraint(p.default_max_pods_constraint.as_ref(), cluster);
    set_if_some(&mut cluster.description, p.description.as_ref());
    set_if_some(&mut cluster.enable_kubernetes_alpha, p.enable_kubernetes_alpha.as_ref());
    set_if_some(&mut cluster.enable_tpu, p.enable_tpu.as_ref());
    set_if_some(&mut cluster.initial_cluster_version, p.initial_cluster_version.as_ref());
    generate_ip_allocation_policy(p.ip_allocation_policy.as_ref(), cluster);
    set_if_some(&mut cluster.label_fingerprint, p.label_fingerprint.as_ref());
    generate_legacy_abac(p.legacy_abac.as_ref(), cluster);
    if !p.locations.is_empty() {
        cluster.locations.clone_from(&p.locations);
    }
    set_if_some(&mut cluster.logging_service, p.logging_service.as_ref());
    generate_maintenance_policy(p.maintenance_policy.as_ref(), cluster);
    generate_master_auth(p.master_auth.as_ref(), cluster);
    generate_master_authorized_networks_config(p.master_authorized_networks_config.as_ref(), cluster);
    set_if_some(&mut cluster.monitoring_service, p.monitoring_service.as_ref());
    set_if_some(&mut cluster.network, p.network.as_ref());
    generate_network_config(p.network_config.as_ref(), cluster);
    generate_network_policy(p.network_policy.as_ref(), cluster);
    generate_pod_security_policy_config(p.pod_security_policy_config.as_ref(), cluster);
    generate_private_cluster_config(p.private_cluster_config.as_ref(), cluster);
    generate_release_channel(p.release_channel.as_ref(), cluster);
    if !p.resource_labels.is_empty() {
        cluster.resource_labels.clone_from(&p.resource_labels);
    }
    generate_resource_usage_export_config(p.resource_usage_export_config.as_ref(), cluster);
    generate_shielded_nodes(p.shielded_nodes.as_ref(), cluster);
    set_if_some(&mut cluster.subnetwork, p.subnetwork.as_ref());
    generate_vertical_pod_autoscaling(p.vertical_pod_autoscaling.as_ref(), cluster);
    generate_workload_identity_config(p.workload_identity_config.as_ref(), cluster);
}

/// Add the placeholder node pool the API requires at create time.
pub fn add_node_pool_for_create(cluster: &mut gke::Cluster) {
    cluster.node_pools.push(gke::NodePool {
        name: BOOTSTRAP_NODE_POOL_NAME.to_string(),
        initial_node_count: 0,
        ..gke::NodePool::default()
    });
}

/// Build the create request for a new cluster.
#[must_use]
pub fn new_create_request(name: &str, p: &ClusterParameters) -> gke::CreateClusterRequest {
    let mut cluster = gke::Cluster::default();
    generate_cluster(name, p, &mut cluster);
    add_node_pool_for_create(&mut cluster);
    gke::CreateClusterRequest { cluster }
}

pub fn generate_addons_config(p: Option<&params::AddonsConfig>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    let out = cluster.addons_config.get_or_insert_with(Default::default);

    if let Some(a) = &p.cloud_run_config {
        out.cloud_run_config = Some(gke::CloudRunConfig {
            disabled: a.disabled,
        });
    }
    if let Some(a) = &p.config_connector_config {
        out.config_connector_config = Some(gke::ConfigConnectorConfig { enabled: a.enabled });
    }
    if let Some(a) = &p.dns_cache_config {
        out.dns_cache_config = Some(gke::DnsCacheConfig { enabled: a.enabled });
    }
    if let Some(a) = &p.gce_persistent_disk_csi_driver_config {
        out.gce_persistent_disk_csi_driver_config =
            Some(gke::GcePersistentDiskCsiDriverConfig { enabled: a.enabled });
    }
    if let Some(a) = &p.horizontal_pod_autoscaling {
        out.horizontal_pod_autoscaling = Some(gke::HorizontalPodAutoscaling {
            disabled: a.disabled,
        });
    }
    if let Some(a) = &p.http_load_balancing {
        out.http_load_balancing = Some(gke::HttpLoadBalancing {
            disabled: a.disabled,
        });
    }
    if let Some(a) = &p.istio_config {
        out.istio_config = Some(gke::IstioConfig {
            disabled: or_zero(a.disabled.as_ref()),
            auth: or_zero(a.auth.as_ref()),
        });
    }
    if let Some(a) = &p.kalm_config {
        out.kalm_config = Some(gke::KalmConfig { enabled: a.enabled });
    }
    if let Some(a) = &p.kubernetes_dashboard {
        out.kubernetes_dashboard = Some(gke::KubernetesDashboard {
            disabled: a.disabled,
        });
    }
    if let Some(a) = &p.network_policy_config {
        out.network_policy_config = Some(gke::NetworkPolicyConfig {
            disabled: a.disabled,
        });
    }
}

pub fn generate_authenticator_groups_config(
    p: Option<&params::AuthenticatorGroupsConfig>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .authenticator_groups_config
        .get_or_insert_with(Default::default);
    out.enabled = or_zero(p.enabled.as_ref());
    out.security_group = or_zero(p.security_group.as_ref());
}

pub fn generate_autoscaling(p: Option<&params::ClusterAutoscaling>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    let out = cluster.autoscaling.get_or_insert_with(Default::default);

    out.autoprovisioning_locations.clone_from(&p.autoprovisioning_locations);
    if let Some(d) = &p.autoprovisioning_node_pool_defaults {
        let defaults = out
            .autoprovisioning_node_pool_defaults
            .get_or_insert_with(Default::default);
        defaults.oauth_scopes.clone_from(&d.oauth_scopes);
        defaults.service_account = or_zero(d.service_account.as_ref());
    }
    out.enable_node_autoprovisioning = or_zero(p.enable_node_autoprovisioning.as_ref());
    out.resource_limits = vec_from(&p.resource_limits, |limit| gke::ResourceLimit {
        resource_type: limit.resource_type.clone(),
        minimum: or_zero(limit.minimum.as_ref()),
        maximum: or_zero(limit.maximum.as_ref()),
    });
}

pub fn generate_binary_authorization(
    p: Option<&params::BinaryAuthorization>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    cluster
        .binary_authorization
        .get_or_insert_with(Default::default)
        .enabled = p.enabled;
}

pub fn generate_database_encryption(
    p: Option<&params::DatabaseEncryption>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .database_encryption
        .get_or_insert_with(Default::default);
    out.state = or_zero(p.state.as_ref());
    out.key_name = or_zero(p.key_name.as_ref());
}

pub fn generate_default_max_pods_constraint(
    p: Option<&params::MaxPodsConstraint>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    cluster
        .default_max_pods_constraint
        .get_or_insert_with(Default::default)
        .max_pods_per_node = p.max_pods_per_node;
}

pub fn generate_ip_allocation_policy(
    p: Option<&params::IpAllocationPolicy>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .ip_allocation_policy
        .get_or_insert_with(Default::default);
    out.use_ip_aliases = or_zero(p.use_ip_aliases.as_ref());
    out.create_subnetwork = or_zero(p.create_subnetwork.as_ref());
    out.subnetwork_name = or_zero(p.subnetwork_name.as_ref());
    out.cluster_secondary_range_name = or_zero(p.cluster_secondary_range_name.as_ref());
    out.services_secondary_range_name = or_zero(p.services_secondary_range_name.as_ref());
    out.cluster_ipv4_cidr_block = or_zero(p.cluster_ipv4_cidr_block.as_ref());
    out.node_ipv4_cidr_block = or_zero(p.node_ipv4_cidr_block.as_ref());
    out.services_ipv4_cidr_block = or_zero(p.services_ipv4_cidr_block.as_ref());
    out.tpu_ipv4_cidr_block = or_zero(p.tpu_ipv4_cidr_block.as_ref());
}

pub fn generate_legacy_abac(p: Option<&params::LegacyAbac>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    cluster
        .legacy_abac
        .get_or_insert_with(Default::default)
        .enabled = p.enabled;
}

pub fn generate_maintenance_policy(
    p: Option<&params::MaintenancePolicySpec>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let daily = cluster
        .maintenance_policy
        .get_or_insert_with(Default::default)
        .window
        .get_or_insert_with(Default::default)
        .daily_maintenance_window
        .get_or_insert_with(Default::default);
    daily
        .start_time
        .clone_from(&p.window.daily_maintenance_window.start_time);
}

pub fn generate_master_auth(p: Option<&params::MasterAuth>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    let out = cluster.master_auth.get_or_insert_with(Default::default);
    out.username = or_zero(p.username.as_ref());
    if let Some(c) = &p.client_certificate_config {
        out.client_certificate_config = Some(gke::ClientCertificateConfig {
            issue_client_certificate: c.issue_client_certificate,
        });
    }
}

pub fn generate_master_authorized_networks_config(
    p: Option<&params::MasterAuthorizedNetworksConfig>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .master_authorized_networks_config
        .get_or_insert_with(Default::default);
    out.enabled = or_zero(p.enabled.as_ref());
    out.cidr_blocks = vec_from(&p.cidr_blocks, |block| gke::CidrBlock {
        display_name: or_zero(block.display_name.as_ref()),
        cidr_block: block.cidr_block.clone(),
    });
}

pub fn generate_network_config(p: Option<&params::NetworkConfigSpec>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    cluster
        .network_config
        .get_or_insert_with(Default::default)
        .enable_intra_node_visibility = p.enable_intra_node_visibility;
}

pub fn generate_network_policy(p: Option<&params::NetworkPolicy>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    let out = cluster.network_policy.get_or_insert_with(Default::default);
    out.provider = or_zero(p.provider.as_ref());
    out.enabled = or_zero(p.enabled.as_ref());
}

pub fn generate_pod_security_policy_config(
    p: Option<&params::PodSecurityPolicyConfig>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    cluster
        .pod_security_policy_config
        .get_or_insert_with(Default::default)
        .enabled = p.enabled;
}

pub fn generate_private_cluster_config(
    p: Option<&params::PrivateClusterConfigSpec>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .private_cluster_config
        .get_or_insert_with(Default::default);
    out.enable_private_endpoint = or_zero(p.enable_private_endpoint.as_ref());
    out.enable_private_nodes = or_zero(p.enable_private_nodes.as_ref());
    out.master_ipv4_cidr_block = or_zero(p.master_ipv4_cidr_block.as_ref());
    if let Some(g) = &p.master_global_access_config {
        out.master_global_access_config = Some(gke::MasterGlobalAccessConfig { enabled: g.enabled });
    }
}

pub fn generate_release_channel(p: Option<&params::ReleaseChannel>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    cluster
        .release_channel
        .get_or_insert_with(Default::default)
        .channel = or_zero(p.channel.as_ref());
}

pub fn generate_resource_usage_export_config(
    p: Option<&params::ResourceUsageExportConfig>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    let out = cluster
        .resource_usage_export_config
        .get_or_insert_with(Default::default);
    if let Some(bq) = &p.bigquery_destination {
        out.bigquery_destination = Some(gke::BigQueryDestination {
            dataset_id: bq.dataset_id.clone(),
        });
    }
    if let Some(c) = &p.consumption_metering_config {
        out.consumption_metering_config = Some(gke::ConsumptionMeteringConfig { enabled: c.enabled });
    }
    out.enable_network_egress_metering = or_zero(p.enable_network_egress_metering.as_ref());
}

pub fn generate_shielded_nodes(p: Option<&params::ShieldedNodes>, cluster: &mut gke::Cluster) {
    let Some(p) = p else { return };
    cluster
        .shielded_nodes
        .get_or_insert_with(Default::default)
        .enabled = p.enabled;
}

pub fn generate_vertical_pod_autoscaling(
    p: Option<&params::VerticalPodAutoscaling>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    cluster
        .vertical_pod_autoscaling
        .get_or_insert_with(Default::default)
        .enabled = p.enabled;
}

pub fn generate_workload_identity_config(
    p: Option<&params::WorkloadIdentityConfig>,
    cluster: &mut gke::Cluster,
) {
    let Some(p) = p else { return };
    cluster
        .workload_identity_config
        .get_or_insert_with(Default::default)
        .workload_pool
        .clone_from(&p.workload_pool);
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod generate_tests;
