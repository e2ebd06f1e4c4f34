// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! `ManagedZone` external adapter.
//!
//! Cloud DNS zones are usable as soon as they exist, so an observed zone is
//! always reported `Available`.

use crate::clients::managedzone::{
    generate_managed_zone, generate_observation, is_up_to_date, late_initialize_spec,
};
use crate::constants::KIND_MANAGED_ZONE;
use crate::crd::ManagedZone;
use crate::errors::{GcpResultExt, ProviderError};
use crate::gcp::dns::{self as cloud, DnsClient, DnsService};
use crate::reconcilers::managed::{
    external_name, Connector, ExternalClient, ExternalObservation, GcpConnector, Managed,
};
use crate::reconcilers::status::set_ready_condition;
use crate::status_reasons::{REASON_AVAILABLE, REASON_CREATING, REASON_DELETING};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Observe/Create/Update/Delete for one `ManagedZone`.
pub struct ManagedZoneExternal {
    service: Arc<dyn DnsService>,
    project: String,
}

impl ManagedZoneExternal {
    #[must_use]
    pub fn new(service: Arc<dyn DnsService>, project: impl Into<String>) -> Self {
        Self {
            service,
            project: project.into(),
        }
    }

    fn desired_zone(cr: &ManagedZone) -> cloud::ManagedZone {
        let mut zone = cloud::ManagedZone {
            name: external_name(cr),
            ..cloud::ManagedZone::default()
        };
        generate_managed_zone(&cr.spec.for_provider, &mut zone);
        zone
    }
}

#[async_trait]
impl Connector<ManagedZone> for GcpConnector {
    type External = ManagedZoneExternal;

    async fn connect(&self, _cr: &ManagedZone) -> Result<ManagedZoneExternal, ProviderError> {
        let (project, token) = self.session().await?;
        let service = DnsClient::new(self.http().clone(), &self.endpoints().dns, token);
        Ok(ManagedZoneExternal::new(Arc::new(service), project))
    }
}

#[async_trait]
impl ExternalClient<ManagedZone> for ManagedZoneExternal {
    async fn observe(&mut self, cr: &mut ManagedZone) -> Result<ExternalObservation, ProviderError> {
        let name = external_name(cr);
        let observed = match self.service.get(&self.project, &name).await {
            Ok(zone) => zone,
            Err(e) if e.is_not_found() => {
                debug!(zone = %name, project = %self.project, "managed zone does not exist");
                return Ok(ExternalObservation::absent());
            }
            Err(e) => return Err(e).context("cannot get managed zone"),
        };

        cr.status.get_or_insert_with(Default::default).at_provider =
            generate_observation(&observed);
        let late_initialized = late_initialize_spec(&mut cr.spec.for_provider, &observed);
        set_ready_condition(cr.conditions_mut(), REASON_AVAILABLE, "");

        Ok(ExternalObservation {
            resource_exists: true,
            resource_up_to_date: is_up_to_date(&cr.spec.for_provider, &observed),
            resource_late_initialized: late_initialized,
            connection_details: BTreeMap::new(),
        })
    }

    async fn create(&mut self, cr: &mut ManagedZone) -> Result<(), ProviderError> {
        if cr.spec.for_provider.dns_name.is_empty() {
            return Err(ProviderError::MissingParameter {
                kind: KIND_MANAGED_ZONE,
                field: "dnsName",
            });
        }
        set_ready_condition(cr.conditions_mut(), REASON_CREATING, "");

        let zone = Self::desired_zone(cr);
        let created = self
            .service
            .create(&self.project, &zone)
            .await
            .context("cannot create managed zone")?;
        info!(zone = %zone.name, dns_name = %zone.dns_name, id = created.id, "managed zone created");
        Ok(())
    }

    async fn update(&mut self, cr: &mut ManagedZone) -> Result<bool, ProviderError> {
        let zone = Self::desired_zone(cr);
        let operation = self
            .service
            .patch(&self.project, &zone.name, &zone)
            .await
            .context("cannot update managed zone")?;
        info!(zone = %zone.name, operation = %operation.id, "managed zone patch issued");
        Ok(true)
    }

    async fn delete(&mut self, cr: &mut ManagedZone) -> Result<bool, ProviderError> {
        let name = external_name(cr);
        set_ready_condition(cr.conditions_mut(), REASON_DELETING, "");

        match self.service.delete(&self.project, &name).await {
            Ok(()) => {
                info!(zone = %name, "managed zone deleted");
                Ok(true)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e).context("cannot delete managed zone"),
        }
    }
}

#[cfg(test)]
#[path = "managedzone_tests.rs"]
mod managedzone_tests;
