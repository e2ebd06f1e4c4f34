// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Cloud DNS managed zones (`dns.googleapis.com/dns/v1`).

use crate::constants::GCP_SERVICE_DNS;
use crate::errors::GcpError;
use crate::gcp::rest::RestClient;
use crate::gcp::{int64, is_default};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A Cloud DNS managed zone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagedZone {
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub dns_name: String,
    #[serde(skip_serializing_if = "is_default")]
    pub description: String,
    #[serde(with = "int64::unsigned", skip_serializing_if = "is_default")]
    pub id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<String>,
    #[serde(skip_serializing_if = "is_default")]
    pub name_server_set: String,
    #[serde(skip_serializing_if = "is_default")]
    pub creation_time: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    /// `public` or `private`
    #[serde(skip_serializing_if = "is_default")]
    pub visibility: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_visibility_config: Option<ManagedZonePrivateVisibilityConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagedZonePrivateVisibilityConfig {
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<ManagedZonePrivateVisibilityConfigNetwork>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManagedZonePrivateVisibilityConfigNetwork {
    #[serde(skip_serializing_if = "is_default")]
    pub kind: String,
    /// Fully qualified URL of a VPC network.
    #[serde(skip_serializing_if = "is_default")]
    pub network_url: String,
}

/// A Cloud DNS change operation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Operation {
    #[serde(skip_serializing_if = "is_default")]
    pub id: String,
    #[serde(skip_serializing_if = "is_default")]
    pub status: String,
    #[serde(rename = "type", skip_serializing_if = "is_default")]
    pub operation_type: String,
}

/// Cloud DNS RPCs used by the zone reconciler.
#[async_trait]
pub trait DnsService: Send + Sync {
    async fn get(&self, project: &str, zone: &str) -> Result<ManagedZone, GcpError>;
    async fn create(&self, project: &str, zone: &ManagedZone) -> Result<ManagedZone, GcpError>;
    async fn patch(
        &self,
        project: &str,
        zone_name: &str,
        zone: &ManagedZone,
    ) -> Result<Operation, GcpError>;
    async fn delete(&self, project: &str, zone: &str) -> Result<(), GcpError>;
}

/// REST implementation of [`DnsService`].
#[derive(Clone, Debug)]
pub struct DnsClient {
    rest: RestClient,
}

impl DnsClient {
    #[must_use]
    pub fn new(http: reqwest::Client, endpoint: &str, token: impl Into<String>) -> Self {
        Self {
            rest: RestClient::new(http, endpoint, token, GCP_SERVICE_DNS),
        }
    }
}

fn zones_path(project: &str) -> String {
    format!("projects/{project}/managedZones")
}

#[async_trait]
impl DnsService for DnsClient {
    async fn get(&self, project: &str, zone: &str) -> Result<ManagedZone, GcpError> {
        self.rest
            .get(&format!("{}/{zone}", zones_path(project)))
            .await
    }

    async fn create(&self, project: &str, zone: &ManagedZone) -> Result<ManagedZone, GcpError> {
        self.rest.post(&zones_path(project), &[], zone).await
    }

    async fn patch(
        &self,
        project: &str,
        zone_name: &str,
        zone: &ManagedZone,
    ) -> Result<Operation, GcpError> {
        self.rest
            .patch(&format!("{}/{zone_name}", zones_path(project)), &[], zone)
            .await
    }

    async fn delete(&self, project: &str, zone: &str) -> Result<(), GcpError> {
        let _: serde_json::Value = self
            .rest
            .delete(&format!("{}/{zone}", zones_path(project)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "dns_tests.rs"]
mod dns_tests;
