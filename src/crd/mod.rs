// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Custom Resource Definitions for the GCP managed resources.
//!
//! Every kind has the same shape:
//!
//! - `spec.forProvider` - user-declared parameters
//! - `spec.deletionPolicy` - `Delete` (default) or `Orphan`
//! - `spec.writeConnectionSecretToRef` - optional Secret for connection details
//! - `status.atProvider` - fields computed by GCP
//! - `status.conditions` - `Ready` and `Synced`
//!
//! All kinds are cluster-scoped.
//!
//! # Resource Types
//!
//! - [`GKECluster`] - Google Kubernetes Engine cluster
//! - [`CloudMemorystoreInstance`] - Memorystore for Redis instance
//! - [`ManagedZone`] - Cloud DNS managed zone

pub mod cache;
pub mod common;
pub mod container;
pub mod dns;

pub use cache::{
    CloudMemorystoreInstance, CloudMemorystoreInstanceObservation,
    CloudMemorystoreInstanceParameters, CloudMemorystoreInstanceSpec,
    CloudMemorystoreInstanceStatus,
};
pub use common::{Condition, DeletionPolicy, SecretReference};
pub use container::{ClusterObservation, ClusterParameters, GKECluster, GKEClusterSpec, GKEClusterStatus};
pub use dns::{
    ManagedZone, ManagedZoneObservation, ManagedZoneParameters, ManagedZoneSpec,
    ManagedZoneStatus,
};
