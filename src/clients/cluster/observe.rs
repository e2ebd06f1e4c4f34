// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! GKE `Cluster` -> `ClusterObservation`.

use crate::clients::values::vec_from;
use crate::crd::container::{
    AcceleratorConfigObservation, AutoUpgradeOptionsObservation, ClusterObservation,
    DailyMaintenanceWindowObservation, MaintenancePolicyObservation,
    MaintenanceWindowObservation, MaxPodsConstraint, NetworkConfigObservation,
    NodeConfigObservation, NodeManagementObservation, NodePoolAutoscalingObservation,
    NodePoolObservation, NodeTaintObservation, PrivateClusterConfigObservation,
    SandboxConfigObservation, ShieldedInstanceConfigObservation, StatusConditionObservation,
    WorkloadMetadataConfigObservation,
};
use crate::gcp::container as gke;

/// Copy every server-computed field of `cluster`.
#[must_use]
pub fn generate_observation(cluster: &gke::Cluster) -> ClusterObservation {
    ClusterObservation {
        conditions: vec_from(&cluster.conditions, observe_condition),
        create_time: cluster.create_time.clone(),
        current_master_version: cluster.current_master_version.clone(),
        current_node_count: cluster.current_node_count,
        current_node_version: cluster.current_node_version.clone(),
        endpoint: cluster.endpoint.clone(),
        expire_time: cluster.expire_time.clone(),
        location: cluster.location.clone(),
        maintenance_policy: cluster
            .maintenance_policy
            .as_ref()
            .map(|policy| MaintenancePolicyObservation {
                resource_version: policy.resource_version.clone(),
                window: policy.window.as_ref().map(|window| MaintenanceWindowObservation {
                    daily_maintenance_window: window.daily_maintenance_window.as_ref().map(
                        |daily| DailyMaintenanceWindowObservation {
                            duration: daily.duration.clone(),
                        },
                    ),
                }),
            }),
        network_config: cluster
            .network_config
            .as_ref()
            .map(|nc| NetworkConfigObservation {
                network: nc.network.clone(),
                subnetwork: nc.subnetwork.clone(),
            }),
        node_ipv4_cidr_size: cluster.node_ipv4_cidr_size,
        node_pools: vec_from(&cluster.node_pools, observe_node_pool),
        private_cluster_config: cluster.private_cluster_config.as_ref().map(|pcc| {
            PrivateClusterConfigObservation {
                private_endpoint: pcc.private_endpoint.clone(),
                public_endpoint: pcc.public_endpoint.clone(),
                peering_name: pcc.peering_name.clone(),
            }
        }),
        self_link: cluster.self_link.clone(),
        services_ipv4_cidr: cluster.services_ipv4_cidr.clone(),
        status: cluster.status.as_str().to_string(),
        status_message: cluster.status_message.clone(),
        tpu_ipv4_cidr_block: cluster.tpu_ipv4_cidr_block.clone(),
        zone: cluster.zone.clone(),
    }
}

fn observe_condition(condition: &gke::StatusCondition) -> StatusConditionObservation {
    StatusConditionObservation {
        code: condition.code.clone(),
        message: condition.message.clone(),
    }
}

fn observe_node_pool(pool: &gke::NodePool) -> NodePoolObservation {
    NodePoolObservation {
        name: pool.name.clone(),
        autoscaling: pool
            .autoscaling
            .as_ref()
            .map(|a| NodePoolAutoscalingObservation {
                autoprovisioned: a.autoprovisioned,
                enabled: a.enabled,
                max_node_count: a.max_node_count,
                min_node_count: a.min_node_count,
            }),
        conditions: vec_from(&pool.conditions, observe_condition),
        config: pool.config.as_ref().map(observe_node_config),
        initial_node_count: pool.initial_node_count,
        instance_group_urls: pool.instance_group_urls.clone(),
        locations: pool.locations.clone(),
        management: pool.management.as_ref().map(|m| NodeManagementObservation {
            auto_repair: m.auto_repair,
            auto_upgrade: m.auto_upgrade,
            upgrade_options: m
                .upgrade_options
                .as_ref()
                .map(|o| AutoUpgradeOptionsObservation {
                    auto_upgrade_start_time: o.auto_upgrade_start_time.clone(),
                    description: o.description.clone(),
                }),
        }),
        max_pods_constraint: pool.max_pods_constraint.as_ref().map(|m| MaxPodsConstraint {
            max_pods_per_node: m.max_pods_per_node,
        }),
        pod_ipv4_cidr_size: pool.pod_ipv4_cidr_size,
        self_link: pool.self_link.clone(),
        status: pool.status.clone(),
        status_message: pool.status_message.clone(),
        version: pool.version.clone(),
    }
}

fn observe_node_config(config: &gke::NodeConfig) -> NodeConfigObservation {
    NodeConfigObservation {
        accelerators: vec_from(&config.accelerators, |a| AcceleratorConfigObservation {
            accelerator_count: a.accelerator_count,
            accelerator_type: a.accelerator_type.clone(),
        }),
        disk_size_gb: config.disk_size_gb,
        disk_type: config.disk_type.clone(),
        image_type: config.image_type.clone(),
        labels: config.labels.clone(),
        local_ssd_count: config.local_ssd_count,
        machine_type: config.machine_type.clone(),
        metadata: config.metadata.clone(),
        min_cpu_platform: config.min_cpu_platform.clone(),
        oauth_scopes: config.oauth_scopes.clone(),
        preemptible: config.preemptible,
        sandbox_config: config
            .sandbox_config
            .as_ref()
            .map(|s| SandboxConfigObservation {
                sandbox_type: s.sandbox_type.clone(),
            }),
        service_account: config.service_account.clone(),
        shielded_instance_config: config.shielded_instance_config.as_ref().map(|s| {
            ShieldedInstanceConfigObservation {
                enable_integrity_monitoring: s.enable_integrity_monitoring,
                enable_secure_boot: s.enable_secure_boot,
            }
        }),
        tags: config.tags.clone(),
        taints: vec_from(&config.taints, |t| NodeTaintObservation {
            effect: t.effect.clone(),
            key: t.key.clone(),
            value: t.value.clone(),
        }),
        workload_metadata_config: config.workload_metadata_config.as_ref().map(|w| {
            WorkloadMetadataConfigObservation {
                node_metadata: w.node_metadata.clone(),
            }
        }),
    }
}

#[cfg(test)]
#[path = "observe_tests.rs"]
mod observe_tests;
