// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for GKE spec late-initialization.

#[cfg(test)]
mod tests {
    use crate::clients::cluster::late_init::late_initialize_spec;
    use crate::crd::container as params;
    use crate::crd::container::ClusterParameters;
    use crate::gcp::container as gke;
    use std::collections::BTreeMap;

    fn observed() -> gke::Cluster {
        gke::Cluster {
            name: "c1".into(),
            logging_service: "logging.googleapis.com/kubernetes".into(),
            monitoring_service: "monitoring.googleapis.com/kubernetes".into(),
            network: "default".into(),
            subnetwork: "default".into(),
            cluster_ipv4_cidr: "10.4.0.0/14".into(),
            locations: vec!["us-central1-a".into(), "us-central1-b".into()],
            label_fingerprint: "a9dc16a7".into(),
            resource_labels: BTreeMap::from([("env".to_string(), "prod".to_string())]),
            addons_config: Some(gke::AddonsConfig {
                http_load_balancing: Some(gke::HttpLoadBalancing { disabled: false }),
                kubernetes_dashboard: Some(gke::KubernetesDashboard { disabled: true }),
                ..gke::AddonsConfig::default()
            }),
            legacy_abac: Some(gke::LegacyAbac { enabled: false }),
            network_policy: Some(gke::NetworkPolicy {
                provider: "CALICO".into(),
                enabled: true,
            }),
            master_authorized_networks_config: Some(gke::MasterAuthorizedNetworksConfig {
                enabled: true,
                cidr_blocks: vec![gke::CidrBlock {
                    display_name: String::new(),
                    cidr_block: "10.0.0.0/8".into(),
                }],
            }),
            maintenance_policy: Some(gke::MaintenancePolicy {
                resource_version: "rv".into(),
                window: Some(gke::MaintenanceWindow {
                    daily_maintenance_window: Some(gke::DailyMaintenanceWindow {
                        start_time: "03:00".into(),
                        duration: "PT4H0M0S".into(),
                    }),
                }),
            }),
            ip_allocation_policy: Some(gke::IpAllocationPolicy {
                use_ip_aliases: true,
                cluster_ipv4_cidr_block: "10.4.0.0/14".into(),
                ..gke::IpAllocationPolicy::default()
            }),
            workload_identity_config: Some(gke::WorkloadIdentityConfig {
                workload_pool: String::new(),
            }),
            ..gke::Cluster::default()
        }
    }

    fn empty() -> ClusterParameters {
        ClusterParameters {
            location: "us-central1".into(),
            ..ClusterParameters::default()
        }
    }

    #[test]
    fn test_fills_unset_fields() {
        let mut spec = empty();
        assert!(late_initialize_spec(&mut spec, &observed()));

        assert_eq!(
            spec.logging_service.as_deref(),
            Some("logging.googleapis.com/kubernetes")
        );
        assert_eq!(spec.network.as_deref(), Some("default"));
        assert_eq!(spec.locations.len(), 2);
        assert_eq!(spec.label_fingerprint.as_deref(), Some("a9dc16a7"));
        assert_eq!(spec.resource_labels.get("env").map(String::as_str), Some("prod"));
        assert_eq!(spec.legacy_abac, Some(params::EnabledFlag { enabled: false }));

        let addons = spec.addons_config.as_ref().unwrap();
        assert_eq!(
            addons.kubernetes_dashboard,
            Some(params::DisabledFlag { disabled: true })
        );
        assert_eq!(
            addons.http_load_balancing,
            Some(params::DisabledFlag { disabled: false })
        );
        assert!(addons.istio_config.is_none());

        let policy = spec.network_policy.as_ref().unwrap();
        assert_eq!(policy.provider.as_deref(), Some("CALICO"));
        assert_eq!(policy.enabled, Some(true));

        let man = spec.master_authorized_networks_config.as_ref().unwrap();
        assert_eq!(man.cidr_blocks[0].display_name, None);
        assert_eq!(man.cidr_blocks[0].cidr_block, "10.0.0.0/8");

        assert_eq!(
            spec.maintenance_policy
                .as_ref()
                .unwrap()
                .window
                .daily_maintenance_window
                .start_time,
            "03:00"
        );
        assert_eq!(
            spec.ip_allocation_policy.as_ref().unwrap().use_ip_aliases,
            Some(true)
        );
        // An empty workload pool is not a value worth adopting.
        assert!(spec.workload_identity_config.is_none());
    }

    #[test]
    fn test_is_a_fixpoint() {
        let mut once = empty();
        late_initialize_spec(&mut once, &observed());

        let mut twice = once.clone();
        assert!(!late_initialize_spec(&mut twice, &observed()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_never_overwrites_user_values() {
        let user = ClusterParameters {
            location: "us-central1".into(),
            logging_service: Some("none".into()),
            network: Some("custom".into()),
            locations: vec!["us-central1-f".into()],
            resource_labels: BTreeMap::from([("team".to_string(), "a".to_string())]),
            legacy_abac: Some(params::EnabledFlag { enabled: true }),
            network_policy: Some(params::NetworkPolicy {
                provider: None,
                enabled: Some(false),
            }),
            master_authorized_networks_config: Some(params::MasterAuthorizedNetworksConfig {
                enabled: Some(false),
                cidr_blocks: vec![
                    params::CidrBlock {
                        display_name: None,
                        cidr_block: "1.1.1.1/32".into(),
                    },
                    params::CidrBlock {
                        display_name: None,
                        cidr_block: "2.2.2.2/32".into(),
                    },
                ],
            }),
            addons_config: Some(params::AddonsConfig {
                kubernetes_dashboard: Some(params::DisabledFlag { disabled: false }),
                ..params::AddonsConfig::default()
            }),
            ..ClusterParameters::default()
        };
        let mut spec = user.clone();
        late_initialize_spec(&mut spec, &observed());

        assert_eq!(spec.location, user.location);
        assert_eq!(spec.logging_service, user.logging_service);
        assert_eq!(spec.network, user.network);
        assert_eq!(spec.locations, user.locations);
        assert_eq!(spec.resource_labels, user.resource_labels);
        assert_eq!(spec.legacy_abac, user.legacy_abac);
        assert_eq!(
            spec.master_authorized_networks_config,
            user.master_authorized_networks_config
        );
        assert_eq!(
            spec.addons_config.as_ref().unwrap().kubernetes_dashboard,
            Some(params::DisabledFlag { disabled: false })
        );

        // Unset leaves inside a user block are still filled.
        let policy = spec.network_policy.unwrap();
        assert_eq!(policy.enabled, Some(false));
        assert_eq!(policy.provider.as_deref(), Some("CALICO"));
    }

    #[test]
    fn test_empty_observed_changes_nothing() {
        let mut spec = empty();
        assert!(!late_initialize_spec(&mut spec, &gke::Cluster::default()));
        assert_eq!(spec, empty());
    }
}
