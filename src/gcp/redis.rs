// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cloud Memorystore for Redis (`redis.googleapis.com/v1`).

use crate::constants::GCP_SERVICE_REDIS;
use crate::errors::GcpError;
use crate::gcp::is_default;
use crate::gcp::rest::RestClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

string_enum! {
    /// Service tier of an instance.
    Tier {
        Unspecified => "TIER_UNSPECIFIED",
        Basic => "BASIC",
        StandardHa => "STANDARD_HA",
    }
}

string_enum! {
    /// Lifecycle state of an instance.
    State {
        Unspecified => "STATE_UNSPECIFIED",
        Creating => "CREATING",
        Ready => "READY",
        Updating => "UPDATING",
        Deleting => "DELETING",
        Repairing => "REPAIRING",
        Maintenance => "MAINTENANCE",
        Importing => "IMPORTING",
        FailingOver => "FAILING_OVER",
    }
}

string_enum! {
    /// How the instance is attached to the authorized network.
    ConnectMode {
        Unspecified => "CONNECT_MODE_UNSPECIFIED",
        DirectPeering => "DIRECT_PEERING",
        PrivateServiceAccess => "PRIVATE_SERVICE_ACCESS",
    }
}

/// A Redis instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Instance {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub display_name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub location_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub alternative_location_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub redis_version: String,
    #[serde(skip_serializing_if = "is_default")]
    pub reserved_ip_range: String,
    #[serde(skip_serializing_if = "is_default")]
    pub host: String,
    #[serde(skip_serializing_if = "is_default")]
    pub port: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub current_location_id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub create_time: String,
    #[serde(skip_serializing_if = "is_default")]
    pub state: State,
    #[serde(skip_serializing_if = "is_default")]
    pub status_message: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub redis_configs: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "is_default")]
    pub tier: Tier,
    #[serde(skip_serializing_if = "is_default")]
    pub memory_size_gb: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub authorized_network: String,
    #[serde(skip_serializing_if = "is_default")]
    pub persistence_iam_identity: String,
    #[serde(skip_serializing_if = "is_default")]
    pub connect_mode: ConnectMode,
    #[serde(skip_serializing_if = "is_default")]
    pub auth_enabled: bool,
}

/// `projects.locations.instances.get`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GetInstanceRequest {
    /// `projects/{project}/locations/{region}/instances/{instance}`
    pub name: String,
}

/// `projects.locations.instances.create`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreateInstanceRequest {
    /// `projects/{project}/locations/{region}`
    pub parent: String,
    pub instance_id: String,
    pub instance: Instance,
}

/// Paths of the fields an update replaces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMask {
    pub paths: Vec<String>,
}

/// `projects.locations.instances.patch`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateInstanceRequest {
    pub update_mask: FieldMask,
    /// Must carry the fully qualified `name`.
    pub instance: Instance,
}

/// `projects.locations.instances.delete`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeleteInstanceRequest {
    pub name: String,
}

/// Error carried by a failed long-running operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OperationError {
    pub code: i32,
    #[serde(skip_serializing_if = "is_default")]
    pub message: String,
}

/// A long-running operation (`google.longrunning.Operation`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub done: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OperationError>,
}

/// Memorystore RPCs used by the instance reconciler.
#[async_trait]
pub trait RedisService: Send + Sync {
    async fn get(&self, request: &GetInstanceRequest) -> Result<Instance, GcpError>;
    async fn create(&self, request: &CreateInstanceRequest) -> Result<Operation, GcpError>;
    async fn update(&self, request: &UpdateInstanceRequest) -> Result<Operation, GcpError>;
    async fn delete(&self, request: &DeleteInstanceRequest) -> Result<Operation, GcpError>;
}

/// REST implementation of [`RedisService`].
#[derive(Clone, Debug)]
pub struct RedisClient {
    rest: RestClient,
}

impl RedisClient {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: &str, token: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(http, endpoint, token, GCP_SERVICE_REDIS),
        }
    }
}

#[async_trait]
impl RedisService for RedisClient {
    async fn get(&self, request: &GetInstanceRequest) -> Result<Instance, GcpError> {
        self.rest.get(&request.name).await
    }

    async fn create(&self, request: &CreateInstanceRequest) -> Result<Operation, GcpError> {
        self.rest
            .post(
                &format!("{}/instances", request.parent),
                &[("instanceId", request.instance_id.as_str())],
                &request.instance,
            )
            .await
    }

    async fn update(&self, request: &UpdateInstanceRequest) -> Result<Operation, GcpError> {
        let mask = request.update_mask.paths.join(",");
        self.rest
            .patch(
                &request.instance.name,
                &[("updateMask", mask.as_str())],
                &request.instance,
            )
            .await
    }

    async fn delete(&self, request: &DeleteInstanceRequest) -> Result<Operation, GcpError> {
        self.rest.delete(&request.name).await
    }
}

#[cfg(test)]
#[path = "redis_tests.rs"]
mod redis_tests;
