// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the Cloud DNS REST client.

#[cfg(test)]
mod tests {
    use crate::gcp::dns::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> DnsClient {
        DnsClient::new(
            reqwest::Client::new(),
            &format!("{}/dns/v1", server.uri()),
            "tok",
        )
    }

    #[tokio::test]
    async fn test_get_decodes_string_id() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/dns/v1/projects/p/managedZones/example"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "kind": "dns#managedZone",
                "name": "example",
                "dnsName": "example.com.",
                "id": "8405391850139042851",
                "nameServers": ["ns-cloud-a1.googledomains.com."]
            })))
            .mount(&server)
            .await;

        let zone = client(&server).get("p", "example").await.unwrap();
        assert_eq!(zone.id, 8_405_391_850_139_042_851);
        assert_eq!(zone.name_servers.len(), 1);
    }

    #[tokio::test]
    async fn test_create_posts_zone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/dns/v1/projects/p/managedZones"))
            .and(body_json(json!({
                "kind": "dns#managedZone",
                "name": "example",
                "dnsName": "example.com."
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "example"})))
            .expect(1)
            .mount(&server)
            .await;

        let zone = ManagedZone {
            kind: "dns#managedZone".into(),
            name: "example".into(),
            dns_name: "example.com.".into(),
            ..ManagedZone::default()
        };
        client(&server).create("p", &zone).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/dns/v1/projects/p/managedZones/example"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).delete("p", "example").await.unwrap();
    }

    #[tokio::test]
    async fn test_patch_targets_zone() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/dns/v1/projects/p/managedZones/example"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "1", "status": "done", "type": "update"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let op = client(&server)
            .patch("p", "example", &ManagedZone::default())
            .await
            .unwrap();
        assert_eq!(op.status, "done");
        assert_eq!(op.operation_type, "update");
    }
}
