// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for Cloud Memorystore conversions.

#[cfg(test)]
mod tests {
    use crate::clients::cloudmemorystore::{
        connection_details, fully_qualified_name, generate_observation, is_up_to_date,
        late_initialize_spec, new_create_instance_request, new_delete_instance_request,
        new_get_instance_request, new_update_instance_request, ready_reason,
    };
    use crate::crd::cache::CloudMemorystoreInstanceParameters;
    use crate::gcp::redis::{ConnectMode, Instance, State, Tier};
    use std::collections::BTreeMap;

    const PROJECT: &str = "my-project";
    const NAME: &str = "cache";

    fn params() -> CloudMemorystoreInstanceParameters {
        CloudMemorystoreInstanceParameters {
            region: "us-central1".into(),
            tier: "STANDARD_HA".into(),
            memory_size_gb: 1,
            ..CloudMemorystoreInstanceParameters::default()
        }
    }

    fn observed() -> Instance {
        Instance {
            name: fully_qualified_name(PROJECT, "us-central1", NAME),
            tier: Tier::StandardHa,
            memory_size_gb: 1,
            location_id: "us-central1-a".into(),
            alternative_location_id: "us-central1-f".into(),
            redis_version: "REDIS_6_X".into(),
            reserved_ip_range: "10.0.0.0/29".into(),
            authorized_network: "projects/my-project/global/networks/default".into(),
            connect_mode: ConnectMode::DirectPeering,
            host: "10.0.0.3".into(),
            port: 6379,
            state: State::Ready,
            create_time: "2024-01-01T00:00:00Z".into(),
            ..Instance::default()
        }
    }

    #[test]
    fn test_standard_ha_create_request_sets_only_required_fields() {
        let request = new_create_instance_request(NAME, PROJECT, &params());
        assert_eq!(request.parent, "projects/my-project/locations/us-central1");
        assert_eq!(request.instance_id, NAME);
        assert_eq!(
            request.instance,
            Instance {
                tier: Tier::StandardHa,
                memory_size_gb: 1,
                ..Instance::default()
            }
        );
    }

    #[test]
    fn test_create_request_carries_optional_fields() {
        let p = CloudMemorystoreInstanceParameters {
            display_name: Some("Cache".into()),
            redis_version: Some("REDIS_6_X".into()),
            connect_mode: Some("PRIVATE_SERVICE_ACCESS".into()),
            auth_enabled: Some(true),
            labels: BTreeMap::from([("env".to_string(), "dev".to_string())]),
            ..params()
        };
        let instance = new_create_instance_request(NAME, PROJECT, &p).instance;
        assert_eq!(instance.display_name, "Cache");
        assert_eq!(instance.redis_version, "REDIS_6_X");
        assert_eq!(instance.connect_mode, ConnectMode::PrivateServiceAccess);
        assert!(instance.auth_enabled);
        assert_eq!(instance.labels.len(), 1);
    }

    #[test]
    fn test_update_request_is_named_and_masked() {
        let request = new_update_instance_request(NAME, PROJECT, &params());
        assert_eq!(
            request.instance.name,
            "projects/my-project/locations/us-central1/instances/cache"
        );
        assert_eq!(
            request.update_mask.paths,
            vec!["display_name", "labels", "memory_size_gb", "redis_configs"]
        );
    }

    #[test]
    fn test_get_and_delete_requests() {
        let expected = "projects/my-project/locations/us-central1/instances/cache";
        assert_eq!(new_get_instance_request(NAME, PROJECT, &params()).name, expected);
        assert_eq!(new_delete_instance_request(NAME, PROJECT, &params()).name, expected);
    }

    #[test]
    fn test_observation() {
        let observation = generate_observation(&observed());
        assert_eq!(observation.host, "10.0.0.3");
        assert_eq!(observation.port, 6379);
        assert_eq!(observation.state, "READY");
        assert_eq!(observation.create_time, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_late_init_fills_and_is_a_fixpoint() {
        let mut spec = params();
        assert!(late_initialize_spec(&mut spec, &observed()));
        assert_eq!(spec.location_id.as_deref(), Some("us-central1-a"));
        assert_eq!(spec.redis_version.as_deref(), Some("REDIS_6_X"));
        assert_eq!(spec.connect_mode.as_deref(), Some("DIRECT_PEERING"));
        // false is the zero value and is not adopted
        assert_eq!(spec.auth_enabled, None);

        let once = spec.clone();
        assert!(!late_initialize_spec(&mut spec, &observed()));
        assert_eq!(spec, once);
    }

    #[test]
    fn test_late_init_keeps_user_values() {
        let mut spec = CloudMemorystoreInstanceParameters {
            location_id: Some("us-central1-b".into()),
            ..params()
        };
        late_initialize_spec(&mut spec, &observed());
        assert_eq!(spec.location_id.as_deref(), Some("us-central1-b"));
    }

    #[test]
    fn test_up_to_date_after_late_init() {
        let mut spec = params();
        late_initialize_spec(&mut spec, &observed());
        assert!(is_up_to_date(&spec, &observed()));
    }

    #[test]
    fn test_mutable_change_is_detected() {
        let spec = CloudMemorystoreInstanceParameters {
            memory_size_gb: 5,
            ..params()
        };
        assert!(!is_up_to_date(&spec, &observed()));

        let spec = CloudMemorystoreInstanceParameters {
            redis_configs: BTreeMap::from([(
                "maxmemory-policy".to_string(),
                "allkeys-lru".to_string(),
            )]),
            ..params()
        };
        assert!(!is_up_to_date(&spec, &observed()));
    }

    #[test]
    fn test_immutable_change_is_ignored() {
        let spec = CloudMemorystoreInstanceParameters {
            tier: "BASIC".into(),
            redis_version: Some("REDIS_7_0".into()),
            location_id: Some("us-central1-c".into()),
            ..params()
        };
        assert!(is_up_to_date(&spec, &observed()));
    }

    #[test]
    fn test_ready_reason() {
        assert_eq!(ready_reason(State::Ready), "Available");
        assert_eq!(ready_reason(State::Creating), "Creating");
        assert_eq!(ready_reason(State::Deleting), "Deleting");
        assert_eq!(ready_reason(State::Updating), "Unavailable");
        assert_eq!(ready_reason(State::Unspecified), "Unavailable");
    }

    #[test]
    fn test_connection_details() {
        let details = connection_details(&observed());
        assert_eq!(details["endpoint"], b"10.0.0.3");
        assert_eq!(details["port"], b"6379");
        assert!(connection_details(&Instance::default()).is_empty());
    }
}
