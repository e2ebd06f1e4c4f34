// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Finalizer management for cluster-scoped managed resources.
//!
//! The reconcile driver holds [`crate::constants::FINALIZER_MANAGED_RESOURCE`]
//! while the external resource may still exist, so a `kubectl delete` always
//! reaches the adapter's Delete before the object disappears.
//!
//! # Example
//!
//! ```rust,no_run
//! # use provider_gcp::reconcilers::finalizers::{ensure_finalizer, remove_finalizer};
//! # use provider_gcp::crd::ManagedZone;
//! # use provider_gcp::constants::FINALIZER_MANAGED_RESOURCE;
//! # use kube::Client;
//! # async fn example(client: Client, zone: ManagedZone) -> Result<(), provider_gcp::errors::ProviderError> {
//! ensure_finalizer(&client, &zone, FINALIZER_MANAGED_RESOURCE).await?;
//! // ... external resource deleted ...
//! remove_finalizer(&client, &zone, FINALIZER_MANAGED_RESOURCE).await?;
//! # Ok(())
//! # }
//! ```

use crate::errors::ProviderError;
use kube::api::{Patch, PatchParams};
use kube::core::ClusterResourceScope;
use kube::{Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::fmt::Debug;
use tracing::info;

/// Whether `finalizer` is present on `resource`.
#[must_use]
pub fn has_finalizer<T: Resource>(resource: &T, finalizer: &str) -> bool {
    resource
        .meta()
        .finalizers
        .as_ref()
        .is_some_and(|f| f.iter().any(|existing| existing == finalizer))
}

/// Finalizer list with `finalizer` appended, or `None` if it is already present.
#[must_use]
pub fn with_finalizer<T: Resource>(resource: &T, finalizer: &str) -> Option<Vec<String>> {
    if has_finalizer(resource, finalizer) {
        return None;
    }
    let mut finalizers = resource.meta().finalizers.clone().unwrap_or_default();
    finalizers.push(finalizer.to_string());
    Some(finalizers)
}

/// Finalizer list with `finalizer` removed, or `None` if it is absent.
#[must_use]
pub fn without_finalizer<T: Resource>(resource: &T, finalizer: &str) -> Option<Vec<String>> {
    if !has_finalizer(resource, finalizer) {
        return None;
    }
    Some(
        resource
            .meta()
            .finalizers
            .iter()
            .flatten()
            .filter(|existing| *existing != finalizer)
            .cloned()
            .collect(),
    )
}

/// Add a finalizer to a cluster-scoped resource if not already present.
///
/// # Errors
///
/// Returns [`ProviderError::Kube`] if the patch fails.
pub async fn ensure_finalizer<T>(
    client: &Client,
    resource: &T,
    finalizer: &str,
) -> Result<(), ProviderError>
where
    T: Resource<DynamicType = (), Scope = ClusterResourceScope>
        + ResourceExt
        + Clone
        + Debug
        + DeserializeOwned,
{
    let Some(finalizers) = with_finalizer(resource, finalizer) else {
        return Ok(());
    };
    let name = resource.name_any();
    info!("Adding finalizer {} to {} {}", finalizer, T::kind(&()), name);

    patch_finalizers::<T>(client, &name, finalizers).await
}

/// Remove a finalizer from a cluster-scoped resource.
///
/// # Errors
///
/// Returns [`ProviderError::Kube`] if the patch fails.
pub async fn remove_finalizer<T>(
    client: &Client,
    resource: &T,
    finalizer: &str,
) -> Result<(), ProviderError>
where
    T: Resource<DynamicType = (), Scope = ClusterResourceScope>
        + ResourceExt
        + Clone
        + Debug
        + DeserializeOwned,
{
    let Some(finalizers) = without_finalizer(resource, finalizer) else {
        return Ok(());
    };
    let name = resource.name_any();
    info!("Removing finalizer {} from {} {}", finalizer, T::kind(&()), name);

    patch_finalizers::<T>(client, &name, finalizers).await
}

async fn patch_finalizers<T>(
    client: &Client,
    name: &str,
    finalizers: Vec<String>,
) -> Result<(), ProviderError>
where
    T: Resource<DynamicType = (), Scope = ClusterResourceScope> + Clone + Debug + DeserializeOwned,
{
    let api: Api<T> = Api::all(client.clone());
    let patch = json!({ "metadata": { "finalizers": finalizers } });
    api.patch(name, &PatchParams::default(), &Patch::Merge(&patch))
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "finalizers_tests.rs"]
mod finalizers_tests;
