// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Kubernetes reconciliation controllers for GCP managed resources.
//!
//! Every kind is driven by the generic [`reconcile`] loop in [`managed`]. The
//! per-kind modules only provide an [`ExternalClient`] that knows how to
//! Observe, Create, Update and Delete one kind of cloud resource.
//!
//! # Reconciliation Architecture
//!
//! 1. **Watch** - Monitor managed resources via the Kubernetes API
//! 2. **Observe** - Fetch the external resource and diff it with `spec.forProvider`
//! 3. **Act** - Issue at most one mutating call per pass
//! 4. **Status** - Report `Ready`, `Synced` and `status.atProvider`
//!
//! # Adapters
//!
//! - [`cluster::ClusterExternal`] - GKE clusters, one update action per pass
//! - [`cloudmemorystore::CloudMemorystoreExternal`] - Memorystore for Redis instances
//! - [`managedzone::ManagedZoneExternal`] - Cloud DNS managed zones
//!
//! # Example: Running a Controller
//!
//! ```rust,no_run
//! use provider_gcp::context::Context;
//! use provider_gcp::crd::ManagedZone;
//! use provider_gcp::reconcilers::reconcile;
//! use std::sync::Arc;
//!
//! async fn reconcile_zone(ctx: Arc<Context>, zone: Arc<ManagedZone>) -> anyhow::Result<()> {
//!     let action = reconcile(zone, ctx).await?;
//!     println!("next pass: {action:?}");
//!     Ok(())
//! }
//! ```

pub mod cloudmemorystore;
pub mod cluster;
pub mod finalizers;
pub mod managed;
pub mod managedzone;
pub mod status;

pub use managed::{
    reconcile, sync_external, Connector, ExternalClient, ExternalObservation, GcpConnector,
    Managed, SyncOutcome,
};
