// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Generic managed-resource reconciler.
//!
//! Each kind plugs into the driver through two traits:
//!
//! - [`Connector`] builds an authenticated [`ExternalClient`] for one reconcile
//! - [`ExternalClient`] implements Observe, Create, Update and Delete against
//!   the cloud API, mutating the managed resource in memory (late-initialized
//!   parameters, `status.atProvider`, the `Ready` condition)
//!
//! [`sync_external`] decides which verb runs after Observe and is free of
//! Kubernetes I/O. [`reconcile`] wraps it with finalizers, spec and status
//! patches, connection Secret publishing and the requeue decision.
//!
//! # Reconcile pass
//!
//! 1. Ensure the finalizer (skipped while deleting)
//! 2. Connect and Observe
//! 3. Deleting: Delete unless `deletionPolicy: Orphan`; drop the finalizer once
//!    the external resource is gone
//! 4. Absent: Create
//! 5. Not up to date: Update with the action chosen during Observe
//! 6. Persist late-initialized parameters, connection details and status

use crate::constants::{
    ANNOTATION_EXTERNAL_NAME, FIELD_MANAGER, FINALIZER_MANAGED_RESOURCE,
    KIND_CLOUD_MEMORYSTORE_INSTANCE, KIND_GKE_CLUSTER, KIND_MANAGED_ZONE,
};
use crate::context::Context;
use crate::crd::{
    CloudMemorystoreInstance, CloudMemorystoreInstanceParameters, CloudMemorystoreInstanceStatus,
    ClusterParameters, Condition, DeletionPolicy, GKECluster, GKEClusterStatus, ManagedZone,
    ManagedZoneParameters, ManagedZoneStatus, SecretReference,
};
use crate::errors::{GcpResultExt, ProviderError};
use crate::gcp::auth::TokenSource;
use crate::metrics::{
    record_error, record_external_operation, record_late_initialization,
    record_reconciliation_error, record_reconciliation_success,
};
use crate::reconcilers::finalizers::{ensure_finalizer, has_finalizer, remove_finalizer};
use crate::reconcilers::status::{is_ready, set_synced_condition};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::api::{Patch, PatchParams};
use kube::core::ClusterResourceScope;
use kube::runtime::controller::Action;
use kube::{Api, Client, Resource, ResourceExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

// ============================================================================
// Adapter contract
// ============================================================================

/// Result of Observe.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExternalObservation {
    /// The external resource exists.
    pub resource_exists: bool,
    /// The external resource matches the parameters.
    pub resource_up_to_date: bool,
    /// Observe filled previously unset parameters.
    pub resource_late_initialized: bool,
    /// Values for the connection Secret.
    pub connection_details: BTreeMap<String, Vec<u8>>,
}

impl ExternalObservation {
    /// The external resource does not exist.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }
}

impl Debug for ExternalObservation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalObservation")
            .field("resource_exists", &self.resource_exists)
            .field("resource_up_to_date", &self.resource_up_to_date)
            .field("resource_late_initialized", &self.resource_late_initialized)
            .field(
                "connection_details",
                &self.connection_details.keys().collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Observe, Create, Update and Delete for one kind.
///
/// An instance lives for a single reconcile pass. Observe may remember state
/// for the following Update, such as the pending GKE update action.
#[async_trait]
pub trait ExternalClient<K: Send + Sync>: Send {
    /// Fetch the external resource and compare it with the parameters.
    ///
    /// A missing external resource is reported through
    /// [`ExternalObservation::resource_exists`], never as an error.
    async fn observe(&mut self, resource: &mut K) -> Result<ExternalObservation, ProviderError>;

    /// Issue the create call without waiting for completion.
    async fn create(&mut self, resource: &mut K) -> Result<(), ProviderError>;

    /// Issue the update selected by the last Observe.
    ///
    /// Returns `false` when the update was deferred without a call.
    async fn update(&mut self, resource: &mut K) -> Result<bool, ProviderError>;

    /// Issue the delete call. An already missing resource is success.
    ///
    /// Returns `false` when no call was sent, e.g. the resource is already
    /// being removed.
    async fn delete(&mut self, resource: &mut K) -> Result<bool, ProviderError>;
}

/// Builds an authenticated [`ExternalClient`] for a managed resource.
#[async_trait]
pub trait Connector<K: Send + Sync>: Send + Sync {
    type External: ExternalClient<K>;

    /// # Errors
    ///
    /// Returns an error when no project is configured or no token can be obtained.
    async fn connect(&self, resource: &K) -> Result<Self::External, ProviderError>;
}

// ============================================================================
// Managed resource accessors
// ============================================================================

/// Accessors shared by every managed resource kind.
pub trait Managed:
    Resource<DynamicType = (), Scope = ClusterResourceScope>
    + Clone
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    type Parameters: Clone + PartialEq + Serialize + Send + Sync;
    type Status: Clone + Default + PartialEq + Serialize + Send + Sync;

    /// Kind name used in logs and metrics.
    const KIND: &'static str;

    fn parameters(&self) -> &Self::Parameters;
    fn deletion_policy(&self) -> DeletionPolicy;
    fn connection_secret_ref(&self) -> Option<&SecretReference>;
    fn managed_status(&self) -> Option<&Self::Status>;
    fn conditions(&self) -> &[Condition];
    fn conditions_mut(&mut self) -> &mut Vec<Condition>;
}

macro_rules! impl_managed {
    ($resource:ty, $params:ty, $status:ty, $kind:expr) => {
        impl Managed for $resource {
            type Parameters = $params;
            type Status = $status;

            const KIND: &'static str = $kind;

            fn parameters(&self) -> &$params {
                &self.spec.for_provider
            }

            fn deletion_policy(&self) -> DeletionPolicy {
                self.spec.deletion_policy
            }

            fn connection_secret_ref(&self) -> Option<&SecretReference> {
                self.spec.write_connection_secret_to_ref.as_ref()
            }

            fn managed_status(&self) -> Option<&$status> {
                self.status.as_ref()
            }

            fn conditions(&self) -> &[Condition] {
                self.status
                    .as_ref()
                    .map_or(&[], |status| status.conditions.as_slice())
            }

            fn conditions_mut(&mut self) -> &mut Vec<Condition> {
                &mut self.status.get_or_insert_with(Default::default).conditions
            }
        }
    };
}

impl_managed!(GKECluster, ClusterParameters, GKEClusterStatus, KIND_GKE_CLUSTER);
impl_managed!(
    CloudMemorystoreInstance,
    CloudMemorystoreInstanceParameters,
    CloudMemorystoreInstanceStatus,
    KIND_CLOUD_MEMORYSTORE_INSTANCE
);
impl_managed!(ManagedZone, ManagedZoneParameters, ManagedZoneStatus, KIND_MANAGED_ZONE);

/// Name of the external resource: the `crossplane.io/external-name`
/// annotation when set, otherwise `metadata.name`.
#[must_use]
pub fn external_name<K: Resource>(resource: &K) -> String {
    resource
        .annotations()
        .get(ANNOTATION_EXTERNAL_NAME)
        .filter(|name| !name.is_empty())
        .cloned()
        .unwrap_or_else(|| resource.name_any())
}

// ============================================================================
// Connector
// ============================================================================

/// GCP API base URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub container: String,
    pub redis: String,
    pub dns: String,
}

/// Connector shared by all kinds: one project, one token source.
///
/// The per-kind [`Connector`] implementations live next to their adapters.
#[derive(Clone)]
pub struct GcpConnector {
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
    project: String,
    endpoints: Endpoints,
}

impl GcpConnector {
    #[must_use]
    pub fn new(
        http: reqwest::Client,
        tokens: Arc<dyn TokenSource>,
        project: impl Into<String>,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            http,
            tokens,
            project: project.into(),
            endpoints,
        }
    }

    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Project and a fresh access token.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::MissingProject`] when no project is configured
    /// and [`ProviderError::Gcp`] when the token source fails.
    pub async fn session(&self) -> Result<(String, String), ProviderError> {
        if self.project.is_empty() {
            return Err(ProviderError::MissingProject);
        }
        let token = self
            .tokens
            .token()
            .await
            .context("cannot obtain GCP access token")?;
        Ok((self.project.clone(), token))
    }
}

// ============================================================================
// Sync
// ============================================================================

/// What a reconcile pass did to the external resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncOutcome {
    Created,
    /// The resource differed; an update was issued or deferred.
    Updated,
    Synced,
    /// The resource is still being removed.
    Deleting,
    /// The external resource is gone or orphaned; the finalizer may go.
    Deleted,
}

impl SyncOutcome {
    /// Whether the external resource is still changing after this pass.
    #[must_use]
    pub fn in_progress(self) -> bool {
        matches!(self, Self::Created | Self::Updated | Self::Deleting)
    }
}

/// Outcome of [`sync_external`] together with the observation it acted on.
#[derive(Debug)]
pub struct SyncResult {
    pub outcome: SyncOutcome,
    pub observation: ExternalObservation,
}

/// Observe, then run at most one of Create, Update or Delete.
///
/// # Errors
///
/// Propagates the first adapter error. No call is retried.
pub async fn sync_external<K, E>(external: &mut E, resource: &mut K) -> Result<SyncResult, ProviderError>
where
    K: Managed,
    E: ExternalClient<K> + ?Sized,
{
    let name = resource.name_any();
    let observation = external.observe(resource).await?;
    debug!(kind = K::KIND, name = %name, observation = ?observation, "Observed external resource");

    let outcome = if resource.meta().deletion_timestamp.is_some() {
        if !observation.resource_exists {
            SyncOutcome::Deleted
        } else if resource.deletion_policy() == DeletionPolicy::Orphan {
            info!(kind = K::KIND, name = %name, "Orphaning external resource");
            SyncOutcome::Deleted
        } else {
            if external.delete(resource).await? {
                record_external_operation(K::KIND, "delete");
            }
            SyncOutcome::Deleting
        }
    } else if !observation.resource_exists {
        external.create(resource).await?;
        record_external_operation(K::KIND, "create");
        SyncOutcome::Created
    } else if !observation.resource_up_to_date {
        if external.update(resource).await? {
            record_external_operation(K::KIND, "update");
        }
        SyncOutcome::Updated
    } else {
        SyncOutcome::Synced
    };

    Ok(SyncResult {
        outcome,
        observation,
    })
}

/// Requeue interval after a successful pass.
#[must_use]
pub fn requeue_after(
    outcome: SyncOutcome,
    ready: bool,
    short_wait: Duration,
    poll_interval: Duration,
) -> Duration {
    if outcome.in_progress() || !ready {
        short_wait
    } else {
        poll_interval
    }
}

// ============================================================================
// Reconcile
// ============================================================================

/// Reconcile one managed resource.
///
/// # Errors
///
/// Returns the adapter or Kubernetes error after recording it in the `Synced`
/// condition; the controller's error policy requeues the object.
pub async fn reconcile<K>(resource: Arc<K>, ctx: Arc<Context>) -> Result<Action, ProviderError>
where
    K: Managed,
    GcpConnector: Connector<K>,
{
    let start = Instant::now();
    let result = reconcile_inner(&resource, &ctx).await;
    match &result {
        Ok(_) => record_reconciliation_success(K::KIND, start.elapsed()),
        Err(e) => {
            record_reconciliation_error(K::KIND, start.elapsed());
            record_error(K::KIND, e.metric_label());
        }
    }
    result
}

async fn reconcile_inner<K>(resource: &K, ctx: &Context) -> Result<Action, ProviderError>
where
    K: Managed,
    GcpConnector: Connector<K>,
{
    let name = resource.name_any();
    let deleting = resource.meta().deletion_timestamp.is_some();

    if deleting && !has_finalizer(resource, FINALIZER_MANAGED_RESOURCE) {
        debug!(kind = K::KIND, name = %name, "Deleted resource holds no finalizer, nothing to do");
        return Ok(Action::await_change());
    }
    if !deleting {
        ensure_finalizer(&ctx.client, resource, FINALIZER_MANAGED_RESOURCE).await?;
    }

    let mut working = resource.clone();
    let result = async {
        let mut external = ctx.connector.connect(&working).await?;
        sync_external(&mut external, &mut working).await
    }
    .await;

    let sync = match result {
        Ok(sync) => sync,
        Err(e) => {
            error!(kind = K::KIND, name = %name, error = %e, "Reconcile failed");
            set_synced_condition(working.conditions_mut(), Some(&e.to_string()));
            if let Err(patch_err) = patch_status(&ctx.client, resource, &working).await {
                warn!(kind = K::KIND, name = %name, error = %patch_err, "Failed to record Synced=False");
            }
            return Err(e);
        }
    };

    if sync.observation.resource_late_initialized
        && working.parameters() != resource.parameters()
    {
        patch_parameters(&ctx.client, &working).await?;
        record_late_initialization(K::KIND);
    }

    if sync.outcome == SyncOutcome::Deleted {
        remove_finalizer(&ctx.client, resource, FINALIZER_MANAGED_RESOURCE).await?;
        info!(kind = K::KIND, name = %name, "External resource released");
        return Ok(Action::await_change());
    }

    if !deleting {
        if let Some(secret_ref) = working.connection_secret_ref() {
            publish_connection_details(
                &ctx.client,
                &working,
                secret_ref,
                &sync.observation.connection_details,
            )
            .await?;
        }
    }

    set_synced_condition(working.conditions_mut(), None);
    patch_status(&ctx.client, resource, &working).await?;

    let requeue = requeue_after(
        sync.outcome,
        is_ready(working.conditions()),
        ctx.short_wait,
        ctx.poll_interval,
    );
    debug!(kind = K::KIND, name = %name, outcome = ?sync.outcome, requeue_secs = requeue.as_secs(), "Reconcile complete");
    Ok(Action::requeue(requeue))
}

/// Merge-patch `spec.forProvider` with late-initialized parameters.
async fn patch_parameters<K: Managed>(client: &Client, resource: &K) -> Result<(), ProviderError> {
    let name = resource.name_any();
    info!(kind = K::KIND, name = %name, "Persisting late-initialized parameters");
    let patch = json!({ "spec": { "forProvider": resource.parameters() } });
    let api: Api<K> = Api::all(client.clone());
    api.patch(&name, &PatchParams::default(), &Patch::Merge(&patch))
        .await?;
    Ok(())
}

/// Patch the status subresource when it differs from `original`.
async fn patch_status<K: Managed>(
    client: &Client,
    original: &K,
    updated: &K,
) -> Result<(), ProviderError> {
    if original.managed_status() == updated.managed_status() {
        return Ok(());
    }
    let name = updated.name_any();
    debug!(kind = K::KIND, name = %name, "Patching status");
    let patch = json!({
        "status": merge_patch(
            &json!(original.managed_status()),
            &json!(updated.managed_status()),
        )
    });
    let api: Api<K> = Api::all(client.clone());
    api.patch_status(&name, &PatchParams::default(), &Patch::Merge(&patch))
        .await?;
    Ok(())
}

/// JSON merge patch turning `original` into `updated`.
///
/// Object keys present in `original` but missing from `updated` are sent as
/// `null` so the API server drops them. Arrays and scalars are replaced whole.
#[must_use]
pub fn merge_patch(original: &Value, updated: &Value) -> Value {
    let (Value::Object(before), Value::Object(after)) = (original, updated) else {
        return updated.clone();
    };
    let mut patch = after.clone();
    for (key, old) in before {
        match after.get(key) {
            None => {
                patch.insert(key.clone(), Value::Null);
            }
            Some(new) => {
                patch.insert(key.clone(), merge_patch(old, new));
            }
        }
    }
    Value::Object(patch)
}

/// Build the connection Secret owned by `resource`.
#[must_use]
pub fn connection_secret<K: Managed>(
    resource: &K,
    secret_ref: &SecretReference,
    details: &BTreeMap<String, Vec<u8>>,
) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(secret_ref.name.clone()),
            namespace: Some(secret_ref.namespace.clone()),
            owner_references: resource.controller_owner_ref(&()).map(|owner| vec![owner]),
            ..Default::default()
        },
        data: Some(
            details
                .iter()
                .map(|(key, value)| (key.clone(), ByteString(value.clone())))
                .collect(),
        ),
        ..Default::default()
    }
}

/// Server-side apply the connection Secret. Nothing is written until the
/// external resource reports connection details.
async fn publish_connection_details<K: Managed>(
    client: &Client,
    resource: &K,
    secret_ref: &SecretReference,
    details: &BTreeMap<String, Vec<u8>>,
) -> Result<(), ProviderError> {
    if details.is_empty() {
        return Ok(());
    }
    let secret = connection_secret(resource, secret_ref, details);
    debug!(
        kind = K::KIND,
        name = %resource.name_any(),
        secret = %secret_ref.name,
        namespace = %secret_ref.namespace,
        "Publishing connection details"
    );
    let api: Api<Secret> = Api::namespaced(client.clone(), &secret_ref.namespace);
    api.patch(
        &secret_ref.name,
        &PatchParams::apply(FIELD_MANAGER).force(),
        &Patch::Apply(&secret),
    )
    .await?;
    Ok(())
}

#[cfg(test)]
#[path = "managed_tests.rs"]
mod managed_tests;
