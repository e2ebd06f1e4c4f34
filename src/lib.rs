// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # provider-gcp - Google Cloud resources as Kubernetes objects
//!
//! A Kubernetes provider that reconciles cluster-scoped custom resources
//! against Google Cloud APIs.
//!
//! ## Managed Resources
//!
//! - `GKECluster` (`container.gcp.crossplane.io/v1beta2`) - Google Kubernetes Engine clusters
//! - `CloudMemorystoreInstance` (`cache.gcp.crossplane.io/v1beta1`) - Memorystore for Redis
//! - `ManagedZone` (`dns.gcp.crossplane.io/v1alpha1`) - Cloud DNS managed zones
//!
//! ## Modules
//!
//! - [`crd`] - Custom Resource Definition types
//! - [`gcp`] - Typed REST clients for the GCP APIs
//! - [`clients`] - Conversions between resource parameters and API objects
//! - [`reconcilers`] - The managed-resource driver and per-kind adapters
//! - [`context`] - Shared context for controllers
//! - [`config`] - Command line and environment configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use provider_gcp::clients::managedzone::generate_managed_zone;
//! use provider_gcp::crd::ManagedZoneParameters;
//! use provider_gcp::gcp::dns::ManagedZone;
//!
//! let params = ManagedZoneParameters {
//!     dns_name: "example.com.".to_string(),
//!     description: Some("public zone".to_string()),
//!     ..ManagedZoneParameters::default()
//! };
//!
//! let mut zone = ManagedZone {
//!     name: "example-com".to_string(),
//!     ..ManagedZone::default()
//! };
//! generate_managed_zone(&params, &mut zone);
//! assert_eq!(zone.dns_name, "example.com.");
//! ```

pub mod clients;
pub mod config;
pub mod constants;
pub mod context;
pub mod crd;
pub mod errors;
pub mod gcp;
pub mod metrics;
pub mod reconcilers;
pub mod status_reasons;
