// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for GKE connection details.

#[cfg(test)]
mod tests {
    use crate::clients::cluster::connection::connection_details;
    use crate::errors::ProviderError;
    use crate::gcp::container as gke;
    use base64::{engine::general_purpose::STANDARD, Engine as _};

    fn cluster() -> gke::Cluster {
        gke::Cluster {
            name: "prod".into(),
            endpoint: "34.1.2.3".into(),
            master_auth: Some(gke::MasterAuth {
                username: "admin".into(),
                password: "s3cret".into(),
                cluster_ca_certificate: STANDARD.encode("CA PEM"),
                client_certificate: STANDARD.encode("CERT PEM"),
                client_key: STANDARD.encode("KEY PEM"),
                ..gke::MasterAuth::default()
            }),
            ..gke::Cluster::default()
        }
    }

    #[test]
    fn test_no_endpoint_yields_nothing() {
        let details = connection_details(&gke::Cluster::default()).unwrap();
        assert!(details.is_empty());
    }

    #[test]
    fn test_decoded_material_and_credentials() {
        let details = connection_details(&cluster()).unwrap();
        assert_eq!(details["endpoint"], b"https://34.1.2.3");
        assert_eq!(details["username"], b"admin");
        assert_eq!(details["password"], b"s3cret");
        assert_eq!(details["clusterCA"], b"CA PEM");
        assert_eq!(details["clientCert"], b"CERT PEM");
        assert_eq!(details["clientKey"], b"KEY PEM");
    }

    #[test]
    fn test_kubeconfig_embeds_encoded_material() {
        let details = connection_details(&cluster()).unwrap();
        let kubeconfig: serde_yaml::Value =
            serde_yaml::from_slice(&details["kubeconfig"]).unwrap();

        assert_eq!(kubeconfig["apiVersion"], "v1");
        assert_eq!(kubeconfig["kind"], "Config");
        assert_eq!(kubeconfig["current-context"], "prod");
        assert_eq!(kubeconfig["clusters"][0]["cluster"]["server"], "https://34.1.2.3");
        assert_eq!(
            kubeconfig["clusters"][0]["cluster"]["certificate-authority-data"],
            serde_yaml::Value::from(STANDARD.encode("CA PEM"))
        );
        assert_eq!(kubeconfig["users"][0]["user"]["username"], "admin");
        assert_eq!(kubeconfig["contexts"][0]["context"]["cluster"], "prod");
    }

    #[test]
    fn test_missing_master_auth_publishes_endpoint_and_kubeconfig() {
        let mut cluster = cluster();
        cluster.master_auth = None;
        let details = connection_details(&cluster).unwrap();
        let keys: Vec<&str> = details.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["endpoint", "kubeconfig"]);
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let mut cluster = cluster();
        cluster.master_auth.as_mut().unwrap().client_key = "%%%".into();
        let err = connection_details(&cluster).unwrap_err();
        assert!(matches!(err, ProviderError::ConnectionDetails { .. }));
        assert!(err.to_string().contains("clientKey"));
    }
}
