// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `CloudMemorystoreInstance` external adapter.

use crate::clients::cloudmemorystore::{
    connection_details, generate_observation, is_up_to_date, late_initialize_spec,
    new_create_instance_request, new_delete_instance_request, new_get_instance_request,
    new_update_instance_request, ready_reason,
};
use crate::constants::KIND_CLOUD_MEMORYSTORE_INSTANCE;
use crate::crd::CloudMemorystoreInstance;
use crate::errors::{GcpResultExt, ProviderError};
use crate::gcp::redis::{RedisClient, RedisService, State};
use crate::reconcilers::managed::{
    external_name, Connector, ExternalClient, ExternalObservation, GcpConnector, Managed,
};
use crate::reconcilers::status::set_ready_condition;
use crate::status_reasons::{REASON_CREATING, REASON_DELETING};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Observe/Create/Update/Delete for one `CloudMemorystoreInstance`.
pub struct CloudMemorystoreExternal {
    service: Arc<dyn RedisService>,
    project: String,
    state: State,
}

impl CloudMemorystoreExternal {
    #[must_use]
    pub fn new(service: Arc<dyn RedisService>, project: impl Into<String>) -> Self {
        Self {
            service,
            project: project.into(),
            state: State::Unspecified,
        }
    }

    fn require_region(cr: &CloudMemorystoreInstance) -> Result<(), ProviderError> {
        if cr.spec.for_provider.region.is_empty() {
            return Err(ProviderError::MissingParameter {
                kind: KIND_CLOUD_MEMORYSTORE_INSTANCE,
                field: "region",
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Connector<CloudMemorystoreInstance> for GcpConnector {
    type External = CloudMemorystoreExternal;

    async fn connect(
        &self,
        _cr: &CloudMemorystoreInstance,
    ) -> Result<CloudMemorystoreExternal, ProviderError> {
        let (project, token) = self.session().await?;
        let service = RedisClient::new(self.http().clone(), &self.endpoints().redis, token);
        Ok(CloudMemorystoreExternal::new(Arc::new(service), project))
    }
}

#[async_trait]
impl ExternalClient<CloudMemorystoreInstance> for CloudMemorystoreExternal {
    async fn observe(
        &mut self,
        cr: &mut CloudMemorystoreInstance,
    ) -> Result<ExternalObservation, ProviderError> {
        Self::require_region(cr)?;
        let request = new_get_instance_request(&external_name(cr), &self.project, &cr.spec.for_provider);

        let observed = match self.service.get(&request).await {
            Ok(instance) => instance,
            Err(e) if e.is_not_found() => {
                debug!(instance = %request.name, "CloudMemorystore instance does not exist");
                return Ok(ExternalObservation::absent());
            }
            Err(e) => return Err(e).context("cannot get CloudMemorystore instance"),
        };

        cr.status.get_or_insert_with(Default::default).at_provider =
            generate_observation(&observed);
        let late_initialized = late_initialize_spec(&mut cr.spec.for_provider, &observed);
        set_ready_condition(
            cr.conditions_mut(),
            ready_reason(observed.state),
            &observed.status_message,
        );
        self.state = observed.state;

        Ok(ExternalObservation {
            resource_exists: true,
            resource_up_to_date: is_up_to_date(&cr.spec.for_provider, &observed),
            resource_late_initialized: late_initialized,
            connection_details: connection_details(&observed),
        })
    }

    async fn create(&mut self, cr: &mut CloudMemorystoreInstance) -> Result<(), ProviderError> {
        Self::require_region(cr)?;
        set_ready_condition(cr.conditions_mut(), REASON_CREATING, "");

        let request =
            new_create_instance_request(&external_name(cr), &self.project, &cr.spec.for_provider);
        let operation = self
            .service
            .create(&request)
            .await
            .context("cannot create CloudMemorystore instance")?;
        info!(
            parent = %request.parent,
            instance = %request.instance_id,
            operation = %operation.name,
            "CloudMemorystore instance create issued"
        );
        Ok(())
    }

    async fn update(&mut self, cr: &mut CloudMemorystoreInstance) -> Result<bool, ProviderError> {
        Self::require_region(cr)?;
        let request =
            new_update_instance_request(&external_name(cr), &self.project, &cr.spec.for_provider);
        let operation = self
            .service
            .update(&request)
            .await
            .context("cannot update CloudMemorystore instance")?;
        info!(
            instance = %request.instance.name,
            operation = %operation.name,
            "CloudMemorystore instance update issued"
        );
        Ok(true)
    }

    async fn delete(&mut self, cr: &mut CloudMemorystoreInstance) -> Result<bool, ProviderError> {
        Self::require_region(cr)?;
        set_ready_condition(cr.conditions_mut(), REASON_DELETING, "");

        let request =
            new_delete_instance_request(&external_name(cr), &self.project, &cr.spec.for_provider);
        if self.state == State::Deleting {
            debug!(instance = %request.name, "CloudMemorystore instance is already being deleted");
            return Ok(false);
        }

        match self.service.delete(&request).await {
            Ok(operation) => {
                info!(instance = %request.name, operation = %operation.name, "CloudMemorystore instance delete issued");
                Ok(true)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e).context("cannot delete CloudMemorystore instance"),
        }
    }
}

#[cfg(test)]
#[path = "cloudmemorystore_tests.rs"]
mod cloudmemorystore_tests;
