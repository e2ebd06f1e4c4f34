// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the GKE cluster generator.

#[cfg(test)]
mod tests {
    use crate::clients::cluster::generate::*;
    use crate::constants::BOOTSTRAP_NODE_POOL_NAME;
    use crate::crd::container as params;
    use crate::crd::container::ClusterParameters;
    use crate::gcp::container as gke;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn params() -> ClusterParameters {
        ClusterParameters {
            location: "us-central1".into(),
            ..ClusterParameters::default()
        }
    }

    #[test]
    fn test_empty_parameters_only_set_name() {
        let mut cluster = gke::Cluster::default();
        generate_cluster("c1", &params(), &mut cluster);
        assert_eq!(
            cluster,
            gke::Cluster {
                name: "c1".into(),
                ..gke::Cluster::default()
            }
        );
    }

    #[test]
    fn test_unset_blocks_preserve_target() {
        let mut cluster = gke::Cluster {
            logging_service: "logging.googleapis.com".into(),
            legacy_abac: Some(gke::LegacyAbac { enabled: true }),
            locations: vec!["us-central1-a".into()],
            ..gke::Cluster::default()
        };
        let before = cluster.clone();
        generate_cluster(&before.name, &params(), &mut cluster);
        assert_eq!(cluster, before);
    }

    #[test]
    fn test_addons_force_send_false_flags() {
        let p = ClusterParameters {
            addons_config: Some(params::AddonsConfig {
                http_load_balancing: Some(params::DisabledFlag { disabled: false }),
                dns_cache_config: Some(params::EnabledFlag { enabled: false }),
                ..params::AddonsConfig::default()
            }),
            ..params()
        };
        let mut cluster = gke::Cluster::default();
        generate_cluster("c1", &p, &mut cluster);

        let value = serde_json::to_value(&cluster).unwrap();
        assert_eq!(
            value["addonsConfig"],
            json!({
                "httpLoadBalancing": {"disabled": false},
                "dnsCacheConfig": {"enabled": false}
            })
        );
    }

    #[test]
    fn test_maintenance_policy_keeps_server_fields() {
        let mut cluster = gke::Cluster {
            maintenance_policy: Some(gke::MaintenancePolicy {
                resource_version: "abc".into(),
                window: Some(gke::MaintenanceWindow {
                    daily_maintenance_window: Some(gke::DailyMaintenanceWindow {
                        start_time: "01:00".into(),
                        duration: "PT4H0M0S".into(),
                    }),
                }),
            }),
            ..gke::Cluster::default()
        };
        let p = ClusterParameters {
            maintenance_policy: Some(params::MaintenancePolicySpec {
                window: params::MaintenanceWindowSpec {
                    daily_maintenance_window: params::DailyMaintenanceWindowSpec {
                        start_time: "03:00".into(),
                    },
                },
            }),
            ..params()
        };
        generate_cluster("c1", &p, &mut cluster);

        let policy = cluster.maintenance_policy.unwrap();
        assert_eq!(policy.resource_version, "abc");
        let daily = policy.window.unwrap().daily_maintenance_window.unwrap();
        assert_eq!(daily.start_time, "03:00");
        assert_eq!(daily.duration, "PT4H0M0S");
    }

    #[test]
    fn test_private_cluster_config_keeps_endpoints() {
        let mut cluster = gke::Cluster {
            private_cluster_config: Some(gke::PrivateClusterConfig {
                private_endpoint: "10.0.0.2".into(),
                public_endpoint: "34.1.2.3".into(),
                ..gke::PrivateClusterConfig::default()
            }),
            ..gke::Cluster::default()
        };
        let p = ClusterParameters {
            private_cluster_config: Some(params::PrivateClusterConfigSpec {
                enable_private_nodes: Some(true),
                master_ipv4_cidr_block: Some("172.16.0.0/28".into()),
                ..params::PrivateClusterConfigSpec::default()
            }),
            ..params()
        };
        generate_cluster("c1", &p, &mut cluster);

        let pcc = cluster.private_cluster_config.unwrap();
        assert!(pcc.enable_private_nodes);
        assert_eq!(pcc.master_ipv4_cidr_block, "172.16.0.0/28");
        assert_eq!(pcc.private_endpoint, "10.0.0.2");
        assert_eq!(pcc.public_endpoint, "34.1.2.3");
    }

    #[test]
    fn test_lists_are_regenerated() {
        let mut cluster = gke::Cluster {
            master_authorized_networks_config: Some(gke::MasterAuthorizedNetworksConfig {
                enabled: true,
                cidr_blocks: vec![
                    gke::CidrBlock {
                        cidr_block: "1.1.1.1/32".into(),
                        ..gke::CidrBlock::default()
                    },
                    gke::CidrBlock {
                        cidr_block: "2.2.2.2/32".into(),
                        ..gke::CidrBlock::default()
                    },
                ],
            }),
            ..gke::Cluster::default()
        };
        let p = ClusterParameters {
            master_authorized_networks_config: Some(params::MasterAuthorizedNetworksConfig {
                enabled: Some(true),
                cidr_blocks: vec![params::CidrBlock {
                    display_name: Some("office".into()),
                    cidr_block: "3.3.3.3/32".into(),
                }],
            }),
            ..params()
        };
        generate_cluster("c1", &p, &mut cluster);

        let blocks = cluster.master_authorized_networks_config.unwrap().cidr_blocks;
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].display_name, "office");
        assert_eq!(blocks[0].cidr_block, "3.3.3.3/32");
    }

    #[test]
    fn test_autoscaling_resource_limits() {
        let p = ClusterParameters {
            autoscaling: Some(params::ClusterAutoscaling {
                enable_node_autoprovisioning: Some(true),
                resource_limits: vec![params::ResourceLimit {
                    resource_type: "cpu".into(),
                    minimum: None,
                    maximum: Some(64),
                }],
                ..params::ClusterAutoscaling::default()
            }),
            ..params()
        };
        let mut cluster = gke::Cluster::default();
        generate_cluster("c1", &p, &mut cluster);

        let autoscaling = cluster.autoscaling.unwrap();
        assert!(autoscaling.enable_node_autoprovisioning);
        assert_eq!(
            autoscaling.resource_limits,
            vec![gke::ResourceLimit {
                resource_type: "cpu".into(),
                minimum: 0,
                maximum: 64,
            }]
        );
    }

    #[test]
    fn test_labels_and_locations_only_override_when_set() {
        let mut cluster = gke::Cluster {
            resource_labels: BTreeMap::from([("a".to_string(), "1".to_string())]),
            ..gke::Cluster::default()
        };
        let p = ClusterParameters {
            locations: vec!["us-central1-a".into(), "us-central1-b".into()],
            ..params()
        };
        generate_cluster("c1", &p, &mut cluster);
        assert_eq!(cluster.locations.len(), 2);
        assert_eq!(cluster.resource_labels.len(), 1);
    }

    #[test]
    fn test_new_create_request_adds_bootstrap_pool() {
        let p = ClusterParameters {
            logging_service: Some("none".into()),
            ..params()
        };
        let request = new_create_request("c1", &p);

        assert_eq!(request.cluster.name, "c1");
        assert_eq!(request.cluster.logging_service, "none");
        assert_eq!(request.cluster.node_pools.len(), 1);
        assert_eq!(request.cluster.node_pools[0].name, BOOTSTRAP_NODE_POOL_NAME);
        assert_eq!(request.cluster.node_pools[0].initial_node_count, 0);
    }
}
