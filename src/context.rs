// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Shared context for all controllers.
//!
//! All three controllers receive the same `Arc<Context>`: the Kubernetes client,
//! the GCP connector and the requeue intervals.

use crate::config::Config;
use crate::reconcilers::managed::GcpConnector;
use kube::Client;
use std::time::Duration;

/// Shared context passed to all controllers.
#[derive(Clone)]
pub struct Context {
    /// Kubernetes client for API operations
    pub client: Client,

    /// Builds authenticated GCP clients per reconcile
    pub connector: GcpConnector,

    /// Requeue interval for resources that are in sync
    pub poll_interval: Duration,

    /// Requeue interval after a mutating call, or while not ready
    pub short_wait: Duration,
}

impl Context {
    #[must_use]
    pub fn new(client: Client, connector: GcpConnector, config: &Config) -> Self {
        Self {
            client,
            connector,
            poll_interval: config.poll_interval(),
            short_wait: config.short_wait(),
        }
    }
}
