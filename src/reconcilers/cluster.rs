// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `GKECluster` external adapter.
//!
//! Observe selects at most one [`UpdateAction`] and keeps it for Update, because
//! the GKE API applies a single mutation per call. Convergence of several field
//! groups takes several reconcile passes.

use crate::clients::cluster::{
    connection_details, fully_qualified_name, fully_qualified_parent, generate_observation,
    is_busy, is_up_to_date, late_initialize_spec, new_create_request, ready_reason, UpdateAction,
};
use crate::constants::KIND_GKE_CLUSTER;
use crate::crd::GKECluster;
use crate::errors::{GcpResultExt, ProviderError};
use crate::gcp::container::{ClusterService, ClusterStatus, ContainerClient};
use crate::metrics::record_update_action;
use crate::reconcilers::managed::{
    external_name, Connector, ExternalClient, ExternalObservation, GcpConnector, Managed,
};
use crate::reconcilers::status::set_ready_condition;
use crate::status_reasons::{REASON_CREATING, REASON_DELETING};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Observe/Create/Update/Delete for one `GKECluster` during one reconcile.
pub struct ClusterExternal {
    service: Arc<dyn ClusterService>,
    project: String,
    pending: UpdateAction,
    status: ClusterStatus,
}

impl ClusterExternal {
    #[must_use]
    pub fn new(service: Arc<dyn ClusterService>, project: impl Into<String>) -> Self {
        Self {
            service,
            project: project.into(),
            pending: UpdateAction::NoOp,
            status: ClusterStatus::Unspecified,
        }
    }

    /// Action selected by the last Observe.
    #[must_use]
    pub fn pending(&self) -> &UpdateAction {
        &self.pending
    }

    fn location(cr: &GKECluster) -> Result<&str, ProviderError> {
        let location = cr.spec.for_provider.location.as_str();
        if location.is_empty() {
            return Err(ProviderError::MissingParameter {
                kind: KIND_GKE_CLUSTER,
                field: "location",
            });
        }
        Ok(location)
    }

    fn cluster_name(&self, cr: &GKECluster) -> Result<String, ProviderError> {
        Ok(fully_qualified_name(
            &self.project,
            Self::location(cr)?,
            &external_name(cr),
        ))
    }
}

#[async_trait]
impl Connector<GKECluster> for GcpConnector {
    type External = ClusterExternal;

    async fn connect(&self, _cr: &GKECluster) -> Result<ClusterExternal, ProviderError> {
        let (project, token) = self.session().await?;
        let service = ContainerClient::new(self.http().clone(), &self.endpoints().container, token);
        Ok(ClusterExternal::new(Arc::new(service), project))
    }
}

#[async_trait]
impl ExternalClient<GKECluster> for ClusterExternal {
    async fn observe(&mut self, cr: &mut GKECluster) -> Result<ExternalObservation, ProviderError> {
        let name = external_name(cr);
        let cluster_name = self.cluster_name(cr)?;

        let observed = match self.service.get(&cluster_name).await {
            Ok(cluster) => cluster,
            Err(e) if e.is_not_found() => {
                debug!(cluster = %cluster_name, "GKE cluster does not exist");
                return Ok(ExternalObservation::absent());
            }
            Err(e) => return Err(e).context("cannot get GKE cluster"),
        };

        cr.status.get_or_insert_with(Default::default).at_provider =
            generate_observation(&observed);
        let late_initialized = late_initialize_spec(&mut cr.spec.for_provider, &observed);
        set_ready_condition(
            cr.conditions_mut(),
            ready_reason(observed.status),
            &observed.status_message,
        );

        let (up_to_date, action) = is_up_to_date(&name, &cr.spec.for_provider, &observed);
        self.pending = action;
        self.status = observed.status;

        Ok(ExternalObservation {
            resource_exists: true,
            resource_up_to_date: up_to_date,
            resource_late_initialized: late_initialized,
            connection_details: connection_details(&observed)?,
        })
    }

    async fn create(&mut self, cr: &mut GKECluster) -> Result<(), ProviderError> {
        let name = external_name(cr);
        let parent = fully_qualified_parent(&self.project, Self::location(cr)?);
        set_ready_condition(cr.conditions_mut(), REASON_CREATING, "");

        let request = new_create_request(&name, &cr.spec.for_provider);
        let operation = self
            .service
            .create(&parent, &request)
            .await
            .context("cannot create GKE cluster")?;
        info!(cluster = %name, parent = %parent, operation = %operation.name, "GKE cluster create issued");
        Ok(())
    }

    async fn update(&mut self, cr: &mut GKECluster) -> Result<bool, ProviderError> {
        let cluster_name = self.cluster_name(cr)?;
        if is_busy(self.status) {
            info!(cluster = %cluster_name, status = %self.status, "GKE cluster is busy, deferring update");
            return Ok(false);
        }

        let action = std::mem::replace(&mut self.pending, UpdateAction::NoOp);
        if action == UpdateAction::NoOp {
            return Ok(false);
        }
        record_update_action(KIND_GKE_CLUSTER, action.label());

        if let Some(operation) = action
            .apply(self.service.as_ref(), &cluster_name)
            .await
            .context("cannot update GKE cluster")?
        {
            info!(
                cluster = %cluster_name,
                field_group = action.label(),
                operation = %operation.name,
                "GKE cluster update issued"
            );
        }
        Ok(true)
    }

    async fn delete(&mut self, cr: &mut GKECluster) -> Result<bool, ProviderError> {
        let cluster_name = self.cluster_name(cr)?;
        set_ready_condition(cr.conditions_mut(), REASON_DELETING, "");

        // GKE rejects a second delete while the first is running
        if self.status == ClusterStatus::Stopping {
            debug!(cluster = %cluster_name, "GKE cluster is already stopping");
            return Ok(false);
        }

        match self.service.delete(&cluster_name).await {
            Ok(operation) => {
                info!(cluster = %cluster_name, operation = %operation.name, "GKE cluster delete issued");
                Ok(true)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e).context("cannot delete GKE cluster"),
        }
    }
}

#[cfg(test)]
#[path = "cluster_tests.rs"]
mod cluster_tests;
