// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! GKE cluster conversions: generation, observation, late-initialization, the
//! up-to-date check and connection details.

pub mod connection;
pub mod generate;
pub mod late_init;
pub mod observe;
pub mod up_to_date;

pub use connection::connection_details;
pub use generate::{add_node_pool_for_create, generate_cluster, new_create_request};
pub use late_init::late_initialize_spec;
pub use observe::generate_observation;
pub use up_to_date::{is_up_to_date, DesiredCluster, FieldGroup, UpdateAction};

use crate::constants::BOOTSTRAP_NODE_POOL_NAME;
use crate::gcp::container::ClusterStatus;
use crate::status_reasons::{REASON_AVAILABLE, REASON_CREATING, REASON_DELETING, REASON_UNAVAILABLE};

/// `projects/{project}/locations/{location}`
#[must_use]
pub fn fully_qualified_parent(project: &str, location: &str) -> String {
    format!("projects/{project}/locations/{location}")
}

/// `projects/{project}/locations/{location}/clusters/{name}`
#[must_use]
pub fn fully_qualified_name(project: &str, location: &str, name: &str) -> String {
    format!("{}/clusters/{name}", fully_qualified_parent(project, location))
}

/// Node pool path of the bootstrap pool under a fully qualified cluster name.
#[must_use]
pub fn bootstrap_node_pool_name(cluster_name: &str) -> String {
    format!("{cluster_name}/nodePools/{BOOTSTRAP_NODE_POOL_NAME}")
}

/// `Ready` condition reason for an observed cluster status.
#[must_use]
pub fn ready_reason(status: ClusterStatus) -> &'static str {
    match status {
        ClusterStatus::Running | ClusterStatus::Reconciling => REASON_AVAILABLE,
        ClusterStatus::Provisioning => REASON_CREATING,
        ClusterStatus::Stopping => REASON_DELETING,
        _ => REASON_UNAVAILABLE,
    }
}

/// Whether the cluster is busy applying a previous mutation.
#[must_use]
pub fn is_busy(status: ClusterStatus) -> bool {
    matches!(status, ClusterStatus::Provisioning | ClusterStatus::Reconciling)
}
