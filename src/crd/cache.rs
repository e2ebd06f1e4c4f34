// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `CloudMemorystoreInstance` (`cache.gcp.crossplane.io/v1beta1`).
//!
//! # Example
//!
//! ```yaml
//! apiVersion: cache.gcp.crossplane.io/v1beta1
//! kind: CloudMemorystoreInstance
//! metadata:
//!   name: example
//! spec:
//!   forProvider:
//!     region: us-central1
//!     tier: STANDARD_HA
//!     memorySizeGb: 1
//! ```

use super::common::{Condition, DeletionPolicy, SecretReference};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of a Redis instance.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[kube(
    group = "cache.gcp.crossplane.io",
    version = "v1beta1",
    kind = "CloudMemorystoreInstance",
    shortname = "redis",
    doc = "CloudMemorystoreInstance is a managed resource that represents a Google Cloud Memorystore for Redis instance."
)]
#[kube(status = "CloudMemorystoreInstanceStatus")]
#[serde(rename_all = "camelCase")]
pub struct CloudMemorystoreInstanceSpec {
    pub for_provider: CloudMemorystoreInstanceParameters,

    #[serde(default)]
    pub deletion_policy: DeletionPolicy,

    /// Secret receiving `endpoint` and `port`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_connection_secret_to_ref: Option<SecretReference>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudMemorystoreInstanceStatus {
    #[serde(default)]
    pub at_provider: CloudMemorystoreInstanceObservation,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// User-declared instance configuration.
///
/// Only `displayName`, `labels`, `memorySizeGb` and `redisConfigs` can change
/// after creation.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CloudMemorystoreInstanceParameters {
    /// GCP region, e.g. `us-central1`. Immutable.
    pub region: String,

    /// `BASIC` or `STANDARD_HA`. Immutable.
    pub tier: String,

    /// Redis memory size in GiB.
    pub memory_size_gb: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// Zone of the primary node. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,

    /// Zone of the replica for `STANDARD_HA`. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative_location_id: Option<String>,

    /// e.g. `REDIS_5_0`. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redis_version: Option<String>,

    /// /29 CIDR reserved for the instance. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserved_ip_range: Option<String>,

    /// Redis configuration parameters, e.g. `maxmemory-policy`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub redis_configs: BTreeMap<String, String>,

    /// VPC network the instance is attached to. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorized_network: Option<String>,

    /// `DIRECT_PEERING` or `PRIVATE_SERVICE_ACCESS`. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_mode: Option<String>,

    /// Require AUTH. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_enabled: Option<bool>,
}

/// Server-computed instance fields.
#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudMemorystoreInstanceObservation {
    /// Fully qualified instance name.
    pub name: String,
    pub host: String,
    pub port: i32,
    pub current_location_id: String,
    pub create_time: String,
    pub state: String,
    pub status_message: String,
    pub persistence_iam_identity: String,
}
