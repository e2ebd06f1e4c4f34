// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the GKE REST client and wire types.

#[cfg(test)]
mod tests {
    use crate::gcp::container::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CLUSTER: &str = "projects/p/locations/us-central1/clusters/c1";

    async fn client(server: &MockServer) -> ContainerClient {
        ContainerClient::new(
            reqwest::Client::new(),
            &format!("{}/v1beta1", server.uri()),
            "tok",
        )
    }

    #[tokio::test]
    async fn test_get_decodes_cluster() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/v1beta1/{CLUSTER}")))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "c1",
                "status": "RUNNING",
                "locations": ["us-central1-a"],
                "defaultMaxPodsConstraint": {"maxPodsPerNode": "110"},
                "someFutureField": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let cluster = client(&server).await.get(CLUSTER).await.unwrap();
        assert_eq!(cluster.name, "c1");
        assert_eq!(cluster.status, ClusterStatus::Running);
        assert_eq!(cluster.locations, vec!["us-central1-a".to_string()]);
        assert_eq!(
            cluster.default_max_pods_constraint.unwrap().max_pods_per_node,
            110
        );
    }

    #[tokio::test]
    async fn test_get_missing_cluster_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"code": 404, "message": "not found", "status": "NOT_FOUND"}
            })))
            .mount(&server)
            .await;

        let err = client(&server).await.get(CLUSTER).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_posts_to_parent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta1/projects/p/locations/us-central1/clusters"))
            .and(body_json(json!({"cluster": {"name": "c1"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "op-1"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = CreateClusterRequest {
            cluster: Cluster {
                name: "c1".into(),
                ..Cluster::default()
            },
        };
        let op = client(&server)
            .await
            .create("projects/p/locations/us-central1", &request)
            .await
            .unwrap();
        assert_eq!(op.name, "op-1");
    }

    #[tokio::test]
    async fn test_update_puts_single_desired_field() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("/v1beta1/{CLUSTER}")))
            .and(body_json(json!({
                "update": {"desiredLoggingService": "logging.googleapis.com"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "op-2"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdateClusterRequest {
            update: ClusterUpdate {
                desired_logging_service: "logging.googleapis.com".into(),
                ..ClusterUpdate::default()
            },
        };
        client(&server).await.update(CLUSTER, &request).await.unwrap();
    }

    #[tokio::test]
    async fn test_set_resource_labels_uses_custom_verb() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/v1beta1/{CLUSTER}:setResourceLabels")))
            .and(body_json(json!({
                "resourceLabels": {},
                "labelFingerprint": "abc"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let request = SetLabelsRequest {
            resource_labels: BTreeMap::new(),
            label_fingerprint: "abc".into(),
        };
        client(&server)
            .await
            .set_resource_labels(CLUSTER, &request)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_legacy_abac_sends_false() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(format!("/v1beta1/{CLUSTER}:setLegacyAbac")))
            .and(body_json(json!({"enabled": false})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .await
            .set_legacy_abac(CLUSTER, &SetLegacyAbacRequest { enabled: false })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_node_pool() {
        let server = MockServer::start().await;
        let pool = format!("{CLUSTER}/nodePools/crossplane-bootstrap");
        Mock::given(method("DELETE"))
            .and(path(format!("/v1beta1/{pool}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "op-3"})))
            .expect(1)
            .mount(&server)
            .await;

        let op = client(&server).await.delete_node_pool(&pool).await.unwrap();
        assert_eq!(op.name, "op-3");
    }

    #[test]
    fn test_addon_flags_are_always_serialized() {
        let addons = AddonsConfig {
            http_load_balancing: Some(HttpLoadBalancing { disabled: false }),
            ..AddonsConfig::default()
        };
        let value = serde_json::to_value(&addons).unwrap();
        assert_eq!(value, json!({"httpLoadBalancing": {"disabled": false}}));
    }

    #[test]
    fn test_zero_scalars_are_omitted() {
        let value = serde_json::to_value(Cluster::default()).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_unknown_status_falls_back_to_unspecified() {
        let cluster: Cluster = serde_json::from_value(json!({"status": "HIBERNATING"})).unwrap();
        assert_eq!(cluster.status, ClusterStatus::Unspecified);
    }
}
