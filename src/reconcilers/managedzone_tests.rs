// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the `ManagedZone` adapter.

#[cfg(test)]
mod tests {
    use crate::crd::dns::{ManagedZone, ManagedZoneParameters, ManagedZoneSpec};
    use crate::crd::DeletionPolicy;
    use crate::errors::{GcpError, ProviderError};
    use crate::gcp::dns::{self as cloud, DnsService};
    use crate::reconcilers::managed::{ExternalClient, Managed};
    use crate::reconcilers::managedzone::ManagedZoneExternal;
    use crate::reconcilers::status::is_ready;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakeDns {
        zone: Mutex<Option<cloud::ManagedZone>>,
        created: Mutex<Vec<(String, cloud::ManagedZone)>>,
        patched: Mutex<Vec<(String, String, cloud::ManagedZone)>>,
    }

    fn not_found(zone: &str) -> GcpError {
        GcpError::NotFound {
            resource: zone.to_string(),
        }
    }

    #[async_trait]
    impl DnsService for FakeDns {
        async fn get(&self, _project: &str, zone: &str) -> Result<cloud::ManagedZone, GcpError> {
            self.zone.lock().unwrap().clone().ok_or_else(|| not_found(zone))
        }
        async fn create(
            &self,
            project: &str,
            zone: &cloud::ManagedZone,
        ) -> Result<cloud::ManagedZone, GcpError> {
            self.created
                .lock()
                .unwrap()
                .push((project.to_string(), zone.clone()));
            Ok(zone.clone())
        }
        async fn patch(
            &self,
            project: &str,
            zone_name: &str,
            zone: &cloud::ManagedZone,
        ) -> Result<cloud::Operation, GcpError> {
            self.patched.lock().unwrap().push((
                project.to_string(),
                zone_name.to_string(),
                zone.clone(),
            ));
            Ok(cloud::Operation::default())
        }
        async fn delete(&self, _project: &str, zone: &str) -> Result<(), GcpError> {
            match self.zone.lock().unwrap().take() {
                Some(_) => Ok(()),
                None => Err(not_found(zone)),
            }
        }
    }

    fn managed(p: ManagedZoneParameters) -> ManagedZone {
        ManagedZone::new(
            "example-com",
            ManagedZoneSpec {
                for_provider: p,
                deletion_policy: DeletionPolicy::Delete,
                write_connection_secret_to_ref: None,
            },
        )
    }

    fn params() -> ManagedZoneParameters {
        ManagedZoneParameters {
            dns_name: "example.com.".into(),
            description: Some("zone".into()),
            ..ManagedZoneParameters::default()
        }
    }

    fn observed() -> cloud::ManagedZone {
        cloud::ManagedZone {
            kind: "dns#managedZone".into(),
            name: "example-com".into(),
            dns_name: "example.com.".into(),
            description: "zone".into(),
            id: 42,
            visibility: "public".into(),
            name_servers: vec!["ns-cloud-a1.googledomains.com.".into()],
            ..cloud::ManagedZone::default()
        }
    }

    #[tokio::test]
    async fn test_observe_existing_zone_is_available() {
        let fake = Arc::new(FakeDns {
            zone: Mutex::new(Some(observed())),
            ..FakeDns::default()
        });
        let mut external = ManagedZoneExternal::new(fake, "my-project");
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(observation.resource_exists);
        assert!(observation.resource_up_to_date);
        assert!(observation.connection_details.is_empty());
        assert!(is_ready(cr.conditions()));
        assert_eq!(cr.spec.for_provider.visibility.as_deref(), Some("public"));
        assert_eq!(cr.status.as_ref().unwrap().at_provider.id, 42);
    }

    #[tokio::test]
    async fn test_observe_missing_zone() {
        let mut external = ManagedZoneExternal::new(Arc::new(FakeDns::default()), "my-project");
        let mut cr = managed(params());
        assert!(!external.observe(&mut cr).await.unwrap().resource_exists);
    }

    #[tokio::test]
    async fn test_create_names_zone_after_resource() {
        let fake = Arc::new(FakeDns::default());
        let mut external = ManagedZoneExternal::new(fake.clone(), "my-project");
        let mut cr = managed(params());

        external.create(&mut cr).await.unwrap();
        let created = fake.created.lock().unwrap();
        assert_eq!(created[0].0, "my-project");
        assert_eq!(created[0].1.name, "example-com");
        assert_eq!(created[0].1.kind, "dns#managedZone");
        assert_eq!(created[0].1.dns_name, "example.com.");
    }

    #[tokio::test]
    async fn test_create_requires_dns_name() {
        let mut external = ManagedZoneExternal::new(Arc::new(FakeDns::default()), "my-project");
        let mut cr = managed(ManagedZoneParameters::default());
        let err = external.create(&mut cr).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingParameter {
                field: "dnsName",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_description_change_is_patched() {
        let fake = Arc::new(FakeDns {
            zone: Mutex::new(Some(observed())),
            ..FakeDns::default()
        });
        let mut external = ManagedZoneExternal::new(fake.clone(), "my-project");
        let mut cr = managed(ManagedZoneParameters {
            description: Some("changed".into()),
            ..params()
        });

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(!observation.resource_up_to_date);
        assert!(external.update(&mut cr).await.unwrap());

        let patched = fake.patched.lock().unwrap();
        assert_eq!(patched[0].1, "example-com");
        assert_eq!(patched[0].2.description, "changed");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let fake = Arc::new(FakeDns {
            zone: Mutex::new(Some(observed())),
            ..FakeDns::default()
        });
        let mut external = ManagedZoneExternal::new(fake, "my-project");
        let mut cr = managed(params());
        assert!(external.delete(&mut cr).await.unwrap());
        assert!(!external.delete(&mut cr).await.unwrap());
        assert!(!is_ready(cr.conditions()));
    }
}
