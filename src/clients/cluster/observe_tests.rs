// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the GKE cluster observer.

#[cfg(test)]
mod tests {
    use crate::clients::cluster::observe::generate_observation;
    use crate::crd::container::ClusterObservation;
    use crate::gcp::container as gke;

    #[test]
    fn test_empty_cluster_observes_unspecified_status() {
        let observation = generate_observation(&gke::Cluster::default());
        assert_eq!(
            observation,
            ClusterObservation {
                status: "STATUS_UNSPECIFIED".into(),
                ..ClusterObservation::default()
            }
        );
    }

    #[test]
    fn test_top_level_fields() {
        let cluster = gke::Cluster {
            endpoint: "34.1.2.3".into(),
            status: gke::ClusterStatus::Running,
            current_master_version: "1.29.1-gke.100".into(),
            current_node_count: 3,
            node_ipv4_cidr_size: 24,
            self_link: "https://container.googleapis.com/v1beta1/projects/p/locations/l/clusters/c".into(),
            zone: "us-central1-a".into(),
            ..gke::Cluster::default()
        };
        let observation = generate_observation(&cluster);
        assert_eq!(observation.endpoint, "34.1.2.3");
        assert_eq!(observation.status, "RUNNING");
        assert_eq!(observation.current_node_count, 3);
        assert_eq!(observation.node_ipv4_cidr_size, 24);
        assert_eq!(observation.zone, "us-central1-a");
    }

    #[test]
    fn test_node_pools_with_nested_blocks() {
        let cluster = gke::Cluster {
            node_pools: vec![gke::NodePool {
                name: "default".into(),
                status: "RUNNING".into(),
                config: Some(gke::NodeConfig {
                    machine_type: "e2-standard-4".into(),
                    accelerators: vec![gke::AcceleratorConfig {
                        accelerator_count: 2,
                        accelerator_type: "nvidia-tesla-t4".into(),
                    }],
                    taints: vec![gke::NodeTaint {
                        key: "dedicated".into(),
                        value: "gpu".into(),
                        effect: "NO_SCHEDULE".into(),
                    }],
                    shielded_instance_config: Some(gke::ShieldedInstanceConfig {
                        enable_secure_boot: true,
                        enable_integrity_monitoring: true,
                    }),
                    sandbox_config: Some(gke::SandboxConfig {
                        sandbox_type: "gvisor".into(),
                    }),
                    ..gke::NodeConfig::default()
                }),
                management: Some(gke::NodeManagement {
                    auto_repair: true,
                    auto_upgrade: true,
                    upgrade_options: None,
                }),
                ..gke::NodePool::default()
            }],
            ..gke::Cluster::default()
        };

        let observation = generate_observation(&cluster);
        assert_eq!(observation.node_pools.len(), 1);
        let pool = &observation.node_pools[0];
        assert_eq!(pool.name, "default");
        let config = pool.config.as_ref().unwrap();
        assert_eq!(config.machine_type, "e2-standard-4");
        assert_eq!(config.accelerators[0].accelerator_count, 2);
        assert_eq!(config.taints[0].effect, "NO_SCHEDULE");
        assert!(config.shielded_instance_config.as_ref().unwrap().enable_secure_boot);
        assert_eq!(config.sandbox_config.as_ref().unwrap().sandbox_type, "gvisor");
        let management = pool.management.as_ref().unwrap();
        assert!(management.auto_repair);
        assert!(management.upgrade_options.is_none());
    }

    #[test]
    fn test_server_only_sub_fields() {
        let cluster = gke::Cluster {
            maintenance_policy: Some(gke::MaintenancePolicy {
                resource_version: "rv1".into(),
                window: Some(gke::MaintenanceWindow {
                    daily_maintenance_window: Some(gke::DailyMaintenanceWindow {
                        start_time: "03:00".into(),
                        duration: "PT4H0M0S".into(),
                    }),
                }),
            }),
            private_cluster_config: Some(gke::PrivateClusterConfig {
                peering_name: "gke-peer".into(),
                ..gke::PrivateClusterConfig::default()
            }),
            network_config: Some(gke::NetworkConfig {
                network: "projects/p/global/networks/default".into(),
                ..gke::NetworkConfig::default()
            }),
            ..gke::Cluster::default()
        };

        let observation = generate_observation(&cluster);
        let policy = observation.maintenance_policy.unwrap();
        assert_eq!(policy.resource_version, "rv1");
        assert_eq!(
            policy.window.unwrap().daily_maintenance_window.unwrap().duration,
            "PT4H0M0S"
        );
        assert_eq!(observation.private_cluster_config.unwrap().peering_name, "gke-peer");
        assert_eq!(
            observation.network_config.unwrap().network,
            "projects/p/global/networks/default"
        );
    }
}
