// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `ManagedZone` (`dns.gcp.crossplane.io/v1alpha1`).
//!
//! # Example
//!
//! ```yaml
//! apiVersion: dns.gcp.crossplane.io/v1alpha1
//! kind: ManagedZone
//! metadata:
//!   name: example-com
//! spec:
//!   forProvider:
//!     dnsName: example.com.
//!     visibility: private
//!     privateVisibilityConfig:
//!       networks:
//!         - networkUrl: https://www.googleapis.com/compute/v1/projects/p/global/networks/default
//! ```

use super::common::{Condition, DeletionPolicy, SecretReference};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of a Cloud DNS managed zone.
#[derive(CustomResource, Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
#[kube(
    group = "dns.gcp.crossplane.io",
    version = "v1alpha1",
    kind = "ManagedZone",
    doc = "ManagedZone is a managed resource that represents a Google Cloud DNS managed zone."
)]
#[kube(status = "ManagedZoneStatus")]
#[serde(rename_all = "camelCase")]
pub struct ManagedZoneSpec {
    pub for_provider: ManagedZoneParameters,

    #[serde(default)]
    pub deletion_policy: DeletionPolicy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_connection_secret_to_ref: Option<SecretReference>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedZoneStatus {
    #[serde(default)]
    pub at_provider: ManagedZoneObservation,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedZoneParameters {
    /// Fully qualified DNS name of the zone, e.g. `example.com.`. Immutable.
    pub dns_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    /// `public` or `private`. Immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Networks that can see a private zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_visibility_config: Option<ManagedZonePrivateVisibilityConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedZonePrivateVisibilityConfig {
    #[serde(default)]
    pub networks: Vec<ManagedZonePrivateVisibilityConfigNetwork>,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManagedZonePrivateVisibilityConfigNetwork {
    /// Fully qualified URL of the VPC network.
    pub network_url: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagedZoneObservation {
    pub creation_time: String,
    pub id: u64,
    pub name_servers: Vec<String>,
}
