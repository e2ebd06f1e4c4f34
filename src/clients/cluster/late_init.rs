// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Fill unset `ClusterParameters` fields from the live cluster.
//!
//! Walks the same tree as [`super::generate`] in the opposite direction. A field the
//! user set is never touched; lists are only filled when the user left them empty.

use crate::clients::values::{late_init, late_init_map, late_init_vec, late_init_with, non_zero};
use crate::crd::container::{self as params, ClusterParameters};
use crate::gcp::container as gke;

/// Late-initialize `spec` from `observed`. Returns `true` if `spec` changed.
pub fn late_initialize_spec(spec: &mut ClusterParameters, observed: &gke::Cluster) -> bool {
    let before = spec.clone();

    late_init_with(
        &mut spec.addons_config,
        observed.addons_config.as_ref(),
        late_init_addons_config,
    );
    late_init_with(
        &mut spec.authenticator_groups_config,
        observed.authenticator_groups_config.as_ref(),
        |p, o| {
            late_init(&mut p.enabled, &o.enabled);
            late_init(&mut p.security_group, &o.security_group);
        },
    );
    late_init_with(
        &mut spec.autoscaling,
        observed.autoscaling.as_ref(),
        late_init_autoscaling,
    );
    fill_block(
        &mut spec.binary_authorization,
        observed.binary_authorization.as_ref().map(|b| params::EnabledFlag { enabled: b.enabled }),
    );
    late_init(&mut spec.cluster_ipv4_cidr, &observed.cluster_ipv4_cidr);
    late_init_with(
        &mut spec.database_encryption,
        observed.database_encryption.as_ref(),
        |p, o| {
            late_init(&mut p.state, &o.state);
            late_init(&mut p.key_name, &o.key_name);
        },
    );
    fill_block(
        &mut spec.default_max_pods_constraint,
        observed
            .default_max_pods_constraint
            .as_ref()
            .map(|m| params::MaxPodsConstraint {
                max_pods_per_node: m.max_pods_per_node,
            }),
    );
    late_init(&mut spec.description, &observed.description);
    late_init(&mut spec.enable_kubernetes_alpha, &observed.enable_kubernetes_alpha);
    late_init(&mut spec.enable_tpu, &observed.enable_tpu);
    late_init(&mut spec.initial_cluster_version, &observed.initial_cluster_version);
    late_init_with(
        &mut spec.ip_allocation_policy,
        observed.ip_allocation_policy.as_ref(),
        late_init_ip_allocation_policy,
    );
    late_init(&mut spec.label_fingerprint, &observed.label_fingerprint);
    fill_block(
        &mut spec.legacy_abac,
        observed.legacy_abac.as_ref().map(|l| params::EnabledFlag { enabled: l.enabled }),
    );
    late_init_vec(&mut spec.locations, &observed.locations, Clone::clone);
    late_init(&mut spec.logging_service, &observed.logging_service);
    fill_block(
        &mut spec.maintenance_policy,
        maintenance_start_time(observed).map(|start_time| params::MaintenancePolicySpec {
            window: params::MaintenanceWindowSpec {
                daily_maintenance_window: params::DailyMaintenanceWindowSpec { start_time },
            },
        }),
    );
    late_init_with(
        &mut spec.master_auth,
        observed.master_auth.as_ref(),
        |p, o| {
            late_init(&mut p.username, &o.username);
            fill_block(
                &mut p.client_certificate_config,
                o.client_certificate_config
                    .as_ref()
                    .map(|c| params::ClientCertificateConfig {
                        issue_client_certificate: c.issue_client_certificate,
                    }),
            );
        },
    );
    late_init_with(
        &mut spec.master_authorized_networks_config,
        observed.master_authorized_networks_config.as_ref(),
        |p, o| {
            late_init(&mut p.enabled, &o.enabled);
            late_init_vec(&mut p.cidr_blocks, &o.cidr_blocks, |b| params::CidrBlock {
                display_name: non_zero(b.display_name.clone()),
                cidr_block: b.cidr_block.clone(),
            });
        },
    );
    late_init(&mut spec.monitoring_service, &observed.monitoring_service);
    late_init(&mut spec.network, &observed.network);
    fill_block(
        &mut spec.network_config,
        observed
            .network_config
            .as_ref()
            .map(|n| params::NetworkConfigSpec {
                enable_intra_node_visibility: n.enable_intra_node_visibility,
            }),
    );
    late_init_with(
        &mut spec.network_policy,
        observed.network_policy.as_ref(),
        |p, o| {
            late_init(&mut p.provider, &o.provider);
            late_init(&mut p.enabled, &o.enabled);
        },
    );
    fill_block(
        &mut spec.pod_security_policy_config,
        observed
            .pod_security_policy_config
            .as_ref()
            .map(|c| params::EnabledFlag { enabled: c.enabled }),
    );
    late_init_with(
        &mut spec.private_cluster_config,
        observed.private_cluster_config.as_ref(),
        |p, o| {
            late_init(&mut p.enable_private_endpoint, &o.enable_private_endpoint);
            late_init(&mut p.enable_private_nodes, &o.enable_private_nodes);
            late_init(&mut p.master_ipv4_cidr_block, &o.master_ipv4_cidr_block);
            fill_block(
                &mut p.master_global_access_config,
                o.master_global_access_config
                    .as_ref()
                    .map(|g| params::EnabledFlag { enabled: g.enabled }),
            );
        },
    );
    late_init_with(
        &mut spec.release_channel,
        observed.release_channel.as_ref(),
        |p, o| {
            late_init(&mut p.channel, &o.channel);
        },
    );
    late_init_map(&mut spec.resource_labels, &observed.resource_labels);
    late_init_with(
        &mut spec.resource_usage_export_config,
        observed.resource_usage_export_config.as_ref(),
        |p, o| {
            fill_block(
                &mut p.bigquery_destination,
                o.bigquery_destination
                    .as_ref()
                    .map(|b| params::BigQueryDestination {
                        dataset_id: b.dataset_id.clone(),
                    }),
            );
            fill_block(
                &mut p.consumption_metering_config,
                o.consumption_metering_config
                    .as_ref()
                    .map(|c| params::EnabledFlag { enabled: c.enabled }),
            );
            late_init(
                &mut p.enable_network_egress_metering,
                &o.enable_network_egress_metering,
            );
        },
    );
    fill_block(
        &mut spec.shielded_nodes,
        observed.shielded_nodes.as_ref().map(|s| params::EnabledFlag { enabled: s.enabled }),
    );
    late_init(&mut spec.subnetwork, &observed.subnetwork);
    fill_block(
        &mut spec.vertical_pod_autoscaling,
        observed
            .vertical_pod_autoscaling
            .as_ref()
            .map(|v| params::EnabledFlag { enabled: v.enabled }),
    );
    fill_block(
        &mut spec.workload_identity_config,
        observed
            .workload_identity_config
            .as_ref()
            .filter(|w| !w.workload_pool.is_empty())
            .map(|w| params::WorkloadIdentityConfig {
                workload_pool: w.workload_pool.clone(),
            }),
    );

    *spec != before
}

/// Copy a whole observed block into an unset slot.
fn fill_block<T>(slot: &mut Option<T>, observed: Option<T>) {
    if slot.is_none() {
        *slot = observed;
    }
}

fn maintenance_start_time(observed: &gke::Cluster) -> Option<String> {
    observed
        .maintenance_policy
        .as_ref()?
        .window
        .as_ref()?
        .daily_maintenance_window
        .as_ref()
        .and_then(|daily| non_zero(daily.start_time.clone()))
}

fn late_init_addons_config(p: &mut params::AddonsConfig, o: &gke::AddonsConfig) {
    let disabled = |disabled: bool| params::DisabledFlag { disabled };
    let enabled = |enabled: bool| params::EnabledFlag { enabled };

    fill_block(
        &mut p.cloud_run_config,
        o.cloud_run_config.as_ref().map(|a| disabled(a.disabled)),
    );
    fill_block(
        &mut p.config_connector_config,
        o.config_connector_config.as_ref().map(|a| enabled(a.enabled)),
    );
    fill_block(
        &mut p.dns_cache_config,
        o.dns_cache_config.as_ref().map(|a| enabled(a.enabled)),
    );
    fill_block(
        &mut p.gce_persistent_disk_csi_driver_config,
        o.gce_persistent_disk_csi_driver_config
            .as_ref()
            .map(|a| enabled(a.enabled)),
    );
    fill_block(
        &mut p.horizontal_pod_autoscaling,
        o.horizontal_pod_autoscaling.as_ref().map(|a| disabled(a.disabled)),
    );
    fill_block(
        &mut p.http_load_balancing,
        o.http_load_balancing.as_ref().map(|a| disabled(a.disabled)),
    );
    late_init_with(&mut p.istio_config, o.istio_config.as_ref(), |p, o| {
        late_init(&mut p.disabled, &o.disabled);
        late_init(&mut p.auth, &o.auth);
    });
    fill_block(
        &mut p.kalm_config,
        o.kalm_config.as_ref().map(|a| enabled(a.enabled)),
    );
    fill_block(
        &mut p.kubernetes_dashboard,
        o.kubernetes_dashboard.as_ref().map(|a| disabled(a.disabled)),
    );
    fill_block(
        &mut p.network_policy_config,
        o.network_policy_config.as_ref().map(|a| disabled(a.disabled)),
    );
}

fn late_init_autoscaling(p: &mut params::ClusterAutoscaling, o: &gke::ClusterAutoscaling) {
    late_init_vec(
        &mut p.autoprovisioning_locations,
        &o.autoprovisioning_locations,
        Clone::clone,
    );
    late_init_with(
        &mut p.autoprovisioning_node_pool_defaults,
        o.autoprovisioning_node_pool_defaults.as_ref(),
        |p, o| {
            late_init_vec(&mut p.oauth_scopes, &o.oauth_scopes, Clone::clone);
            late_init(&mut p.service_account, &o.service_account);
        },
    );
    late_init(
        &mut p.enable_node_autoprovisioning,
        &o.enable_node_autoprovisioning,
    );
    late_init_vec(&mut p.resource_limits, &o.resource_limits, |l| params::ResourceLimit {
        resource_type: l.resource_type.clone(),
        minimum: non_zero(l.minimum),
        maximum: non_zero(l.maximum),
    });
}

fn late_init_ip_allocation_policy(p: &mut params::IpAllocationPolicy, o: &gke::IpAllocationPolicy) {
    late_init(&mut p.use_ip_aliases, &o.use_ip_aliases);
    late_init(&mut p.create_subnetwork, &o.create_subnetwork);
    late_init(&mut p.subnetwork_name, &o.subnetwork_name);
    late_init(
        &mut p.cluster_secondary_range_name,
        &o.cluster_secondary_range_name,
    );
    late_init(
        &mut p.services_secondary_range_name,
        &o.services_secondary_range_name,
    );
    late_init(&mut p.cluster_ipv4_cidr_block, &o.cluster_ipv4_cidr_block);
    late_init(&mut p.node_ipv4_cidr_block, &o.node_ipv4_cidr_block);
    late_init(&mut p.services_ipv4_cidr_block, &o.services_ipv4_cidr_block);
    late_init(&mut p.tpu_ipv4_cidr_block, &o.tpu_ipv4_cidr_block);
}

#[cfg(test)]
#[path = "late_init_tests.rs"]
mod late_init_tests;
