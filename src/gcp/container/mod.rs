// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Google Kubernetes Engine service boundary.
//!
//! All methods take fully qualified resource names
//! (`projects/{project}/locations/{location}/clusters/{cluster}`) as built by
//! [`crate::clients::cluster`]. Mutating calls return the long-running
//! [`Operation`] without waiting for it.

pub mod types;

pub use types::*;

use crate::constants::GCP_SERVICE_CONTAINER;
use crate::errors::GcpError;
use crate::gcp::rest::RestClient;
use async_trait::async_trait;

/// GKE cluster RPCs used by the cluster reconciler.
#[async_trait]
pub trait ClusterService: Send + Sync {
    /// Fetch a cluster.
    async fn get(&self, name: &str) -> Result<Cluster, GcpError>;

    /// Create a cluster under `parent` (`projects/{p}/locations/{l}`).
    async fn create(&self, parent: &str, request: &CreateClusterRequest)
        -> Result<Operation, GcpError>;

    /// Apply a single `desired*` mutation.
    async fn update(&self, name: &str, request: &UpdateClusterRequest)
        -> Result<Operation, GcpError>;

    /// Delete a cluster.
    async fn delete(&self, name: &str) -> Result<Operation, GcpError>;

    async fn set_legacy_abac(
        &self,
        name: &str,
        request: &SetLegacyAbacRequest,
    ) -> Result<Operation, GcpError>;

    async fn set_maintenance_policy(
        &self,
        name: &str,
        request: &SetMaintenancePolicyRequest,
    ) -> Result<Operation, GcpError>;

    async fn set_network_policy(
        &self,
        name: &str,
        request: &SetNetworkPolicyRequest,
    ) -> Result<Operation, GcpError>;

    async fn set_resource_labels(
        &self,
        name: &str,
        request: &SetLabelsRequest,
    ) -> Result<Operation, GcpError>;

    /// Delete a node pool (`{cluster}/nodePools/{pool}`).
    async fn delete_node_pool(&self, name: &str) -> Result<Operation, GcpError>;
}

/// REST implementation of [`ClusterService`] against `container.googleapis.com/v1beta1`.
#[derive(Clone, Debug)]
pub struct ContainerClient {
    rest: RestClient,
}

impl ContainerClient {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: &str, token: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(http, endpoint, token, GCP_SERVICE_CONTAINER),
        }
    }
}

#[async_trait]
impl ClusterService for ContainerClient {
    async fn get(&self, name: &str) -> Result<Cluster, GcpError> {
        self.rest.get(name).await
    }

    async fn create(
        &self,
        parent: &str,
        request: &CreateClusterRequest,
    ) -> Result<Operation, GcpError> {
        self.rest
            .post(&format!("{parent}/clusters"), &[], request)
            .await
    }

    async fn update(
        &self,
        name: &str,
        request: &UpdateClusterRequest,
    ) -> Result<Operation, GcpError> {
        self.rest.put(name, request).await
    }

    async fn delete(&self, name: &str) -> Result<Operation, GcpError> {
        self.rest.delete(name).await
    }

    async fn set_legacy_abac(
        &self,
        name: &str,
        request: &SetLegacyAbacRequest,
    ) -> Result<Operation, GcpError> {
        self.rest
            .post(&format!("{name}:setLegacyAbac"), &[], request)
            .await
    }

    async fn set_maintenance_policy(
        &self,
        name: &str,
        request: &SetMaintenancePolicyRequest,
    ) -> Result<Operation, GcpError> {
        self.rest
            .post(&format!("{name}:setMaintenancePolicy"), &[], request)
            .await
    }

    async fn set_network_policy(
        &self,
        name: &str,
        request: &SetNetworkPolicyRequest,
    ) -> Result<Operation, GcpError> {
        self.rest
            .post(&format!("{name}:setNetworkPolicy"), &[], request)
            .await
    }

    async fn set_resource_labels(
        &self,
        name: &str,
        request: &SetLabelsRequest,
    ) -> Result<Operation, GcpError> {
        self.rest
            .post(&format!("{name}:setResourceLabels"), &[], request)
            .await
    }

    async fn delete_node_pool(&self, name: &str) -> Result<Operation, GcpError> {
        self.rest.delete(name).await
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod mod_tests;
