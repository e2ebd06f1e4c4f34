// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Connection details published for a GKE cluster.
//!
//! The master auth block carries base64-encoded PEM material. The Secret values
//! are the decoded bytes; the generated kubeconfig embeds the encoded form, as
//! kubeconfig `*-data` fields expect.

use crate::constants::{
    CONNECTION_KEY_CLIENT_CERT, CONNECTION_KEY_CLIENT_KEY, CONNECTION_KEY_CLUSTER_CA,
    CONNECTION_KEY_ENDPOINT, CONNECTION_KEY_KUBECONFIG, CONNECTION_KEY_PASSWORD,
    CONNECTION_KEY_USERNAME,
};
use crate::errors::ProviderError;
use crate::gcp::container as gke;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::collections::BTreeMap;

/// Build the connection Secret data for `cluster`.
///
/// Returns an empty map while the cluster has no endpoint yet.
///
/// # Errors
///
/// Returns [`ProviderError::ConnectionDetails`] when certificate material is not
/// valid base64 or the kubeconfig cannot be rendered.
pub fn connection_details(cluster: &gke::Cluster) -> Result<BTreeMap<String, Vec<u8>>, ProviderError> {
    let mut details = BTreeMap::new();
    if cluster.endpoint.is_empty() {
        return Ok(details);
    }

    let server = format!("https://{}", cluster.endpoint);
    details.insert(CONNECTION_KEY_ENDPOINT.to_string(), server.clone().into_bytes());

    let auth = cluster.master_auth.clone().unwrap_or_default();
    insert_non_empty(&mut details, CONNECTION_KEY_USERNAME, auth.username.as_bytes());
    insert_non_empty(&mut details, CONNECTION_KEY_PASSWORD, auth.password.as_bytes());
    insert_non_empty(
        &mut details,
        CONNECTION_KEY_CLUSTER_CA,
        &decode(CONNECTION_KEY_CLUSTER_CA, &auth.cluster_ca_certificate)?,
    );
    insert_non_empty(
        &mut details,
        CONNECTION_KEY_CLIENT_CERT,
        &decode(CONNECTION_KEY_CLIENT_CERT, &auth.client_certificate)?,
    );
    insert_non_empty(
        &mut details,
        CONNECTION_KEY_CLIENT_KEY,
        &decode(CONNECTION_KEY_CLIENT_KEY, &auth.client_key)?,
    );

    let kubeconfig = serde_yaml::to_string(&Kubeconfig::new(&cluster.name, server, &auth)).map_err(
        |e| ProviderError::ConnectionDetails {
            reason: format!("cannot render kubeconfig: {e}"),
        },
    )?;
    details.insert(CONNECTION_KEY_KUBECONFIG.to_string(), kubeconfig.into_bytes());

    Ok(details)
}

fn insert_non_empty(details: &mut BTreeMap<String, Vec<u8>>, key: &str, value: &[u8]) {
    if !value.is_empty() {
        details.insert(key.to_string(), value.to_vec());
    }
}

fn decode(key: &str, encoded: &str) -> Result<Vec<u8>, ProviderError> {
    STANDARD
        .decode(encoded)
        .map_err(|e| ProviderError::ConnectionDetails {
            reason: format!("{key} is not valid base64: {e}"),
        })
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct Kubeconfig {
    #[serde(rename = "apiVersion")]
    api_version: &'static str,
    kind: &'static str,
    clusters: Vec<NamedCluster>,
    users: Vec<NamedUser>,
    contexts: Vec<NamedContext>,
    current_context: String,
}

#[derive(Serialize)]
struct NamedCluster {
    name: String,
    cluster: KubeconfigCluster,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct KubeconfigCluster {
    server: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    certificate_authority_data: String,
}

#[derive(Serialize)]
struct NamedUser {
    name: String,
    user: KubeconfigUser,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct KubeconfigUser {
    #[serde(skip_serializing_if = "String::is_empty")]
    client_certificate_data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    client_key_data: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    password: String,
}

#[derive(Serialize)]
struct NamedContext {
    name: String,
    context: KubeconfigContext,
}

#[derive(Serialize)]
struct KubeconfigContext {
    cluster: String,
    user: String,
}

impl Kubeconfig {
    fn new(name: &str, server: String, auth: &gke::MasterAuth) -> Self {
        Self {
            api_version: "v1",
            kind: "Config",
            clusters: vec![NamedCluster {
                name: name.to_string(),
                cluster: KubeconfigCluster {
                    server,
                    certificate_authority_data: auth.cluster_ca_certificate.clone(),
                },
            }],
            users: vec![NamedUser {
                name: name.to_string(),
                user: KubeconfigUser {
                    client_certificate_data: auth.client_certificate.clone(),
                    client_key_data: auth.client_key.clone(),
                    username: auth.username.clone(),
                    password: auth.password.clone(),
                },
            }],
            contexts: vec![NamedContext {
                name: name.to_string(),
                context: KubeconfigContext {
                    cluster: name.to_string(),
                    user: name.to_string(),
                },
            }],
            current_context: name.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod connection_tests;
