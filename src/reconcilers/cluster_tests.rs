// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the `GKECluster` adapter.

#[cfg(test)]
mod tests {
    use crate::clients::cluster::{generate_cluster, UpdateAction};
    use crate::constants::{ANNOTATION_EXTERNAL_NAME, BOOTSTRAP_NODE_POOL_NAME};
    use crate::crd::container::{ClusterParameters, GKECluster, GKEClusterSpec};
    use crate::crd::DeletionPolicy;
    use crate::errors::{GcpError, ProviderError};
    use crate::gcp::container::{self as gke, ClusterService, ClusterStatus};
    use crate::reconcilers::cluster::ClusterExternal;
    use crate::reconcilers::managed::{ExternalClient, Managed};
    use crate::reconcilers::status::find_condition;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    const PROJECT: &str = "my-project";
    const FQ_NAME: &str = "projects/my-project/locations/us-central1/clusters/my-cluster";

    #[derive(Default)]
    struct FakeClusters {
        cluster: Mutex<Option<gke::Cluster>>,
        calls: Mutex<Vec<(&'static str, String)>>,
        created: Mutex<Option<gke::CreateClusterRequest>>,
    }

    impl FakeClusters {
        fn with(cluster: gke::Cluster) -> Arc<Self> {
            Arc::new(Self {
                cluster: Mutex::new(Some(cluster)),
                ..Self::default()
            })
        }

        fn record(&self, rpc: &'static str, name: &str) -> Result<gke::Operation, GcpError> {
            self.calls.lock().unwrap().push((rpc, name.to_string()));
            Ok(gke::Operation {
                name: format!("operation-{rpc}"),
                ..gke::Operation::default()
            })
        }

        fn calls(&self) -> Vec<(&'static str, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ClusterService for FakeClusters {
        async fn get(&self, name: &str) -> Result<gke::Cluster, GcpError> {
            self.calls.lock().unwrap().push(("get", name.to_string()));
            self.cluster
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| GcpError::NotFound {
                    resource: name.to_string(),
                })
        }
        async fn create(
            &self,
            parent: &str,
            request: &gke::CreateClusterRequest,
        ) -> Result<gke::Operation, GcpError> {
            *self.created.lock().unwrap() = Some(request.clone());
            self.record("create", parent)
        }
        async fn update(
            &self,
            name: &str,
            _: &gke::UpdateClusterRequest,
        ) -> Result<gke::Operation, GcpError> {
            self.record("update", name)
        }
        async fn delete(&self, name: &str) -> Result<gke::Operation, GcpError> {
            if self.cluster.lock().unwrap().is_none() {
                return Err(GcpError::NotFound {
                    resource: name.to_string(),
                });
            }
            self.record("delete", name)
        }
        async fn set_legacy_abac(
            &self,
            name: &str,
            _: &gke::SetLegacyAbacRequest,
        ) -> Result<gke::Operation, GcpError> {
            self.record("setLegacyAbac", name)
        }
        async fn set_maintenance_policy(
            &self,
            name: &str,
            _: &gke::SetMaintenancePolicyRequest,
        ) -> Result<gke::Operation, GcpError> {
            self.record("setMaintenancePolicy", name)
        }
        async fn set_network_policy(
            &self,
            name: &str,
            _: &gke::SetNetworkPolicyRequest,
        ) -> Result<gke::Operation, GcpError> {
            self.record("setNetworkPolicy", name)
        }
        async fn set_resource_labels(
            &self,
            name: &str,
            _: &gke::SetLabelsRequest,
        ) -> Result<gke::Operation, GcpError> {
            self.record("setResourceLabels", name)
        }
        async fn delete_node_pool(&self, name: &str) -> Result<gke::Operation, GcpError> {
            self.record("deleteNodePool", name)
        }
    }

    fn params() -> ClusterParameters {
        ClusterParameters {
            location: "us-central1".into(),
            logging_service: Some("logging.googleapis.com/kubernetes".into()),
            ..ClusterParameters::default()
        }
    }

    fn managed(p: ClusterParameters) -> GKECluster {
        GKECluster::new(
            "my-cluster",
            GKEClusterSpec {
                for_provider: p,
                deletion_policy: DeletionPolicy::Delete,
                write_connection_secret_to_ref: None,
            },
        )
    }

    fn running(p: &ClusterParameters) -> gke::Cluster {
        let mut cluster = gke::Cluster::default();
        generate_cluster("my-cluster", p, &mut cluster);
        cluster.status = ClusterStatus::Running;
        cluster.endpoint = "35.1.2.3".into();
        cluster
    }

    fn ready_reason(cr: &GKECluster) -> Option<String> {
        find_condition(cr.conditions(), "Ready").and_then(|c| c.reason.clone())
    }

    #[tokio::test]
    async fn test_observe_missing_cluster() {
        let service = Arc::new(FakeClusters::default());
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(!observation.resource_exists);
        assert!(cr.status.is_none());
        assert_eq!(service.calls(), vec![("get", FQ_NAME.to_string())]);
    }

    #[tokio::test]
    async fn test_observe_running_cluster_in_sync() {
        let service = FakeClusters::with(running(&params()));
        let mut external = ClusterExternal::new(service, PROJECT);
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(observation.resource_exists);
        assert!(observation.resource_up_to_date);
        assert_eq!(external.pending(), &UpdateAction::NoOp);
        assert_eq!(ready_reason(&cr).as_deref(), Some("Available"));

        let status = cr.status.as_ref().unwrap();
        assert_eq!(status.at_provider.status, "RUNNING");
        assert_eq!(status.at_provider.endpoint, "35.1.2.3");
        assert_eq!(
            observation.connection_details.get("endpoint").map(Vec::as_slice),
            Some(b"https://35.1.2.3".as_slice())
        );
    }

    #[tokio::test]
    async fn test_observe_late_initializes_unset_fields() {
        let mut observed = running(&params());
        observed.monitoring_service = "monitoring.googleapis.com/kubernetes".into();
        let service = FakeClusters::with(observed);
        let mut external = ClusterExternal::new(service, PROJECT);
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(observation.resource_late_initialized);
        assert_eq!(
            cr.spec.for_provider.monitoring_service.as_deref(),
            Some("monitoring.googleapis.com/kubernetes")
        );
        assert!(observation.resource_up_to_date);
    }

    #[tokio::test]
    async fn test_bootstrap_pool_is_deleted_first() {
        let mut observed = running(&params());
        observed.logging_service = "none".into();
        observed.node_pools.push(gke::NodePool {
            name: BOOTSTRAP_NODE_POOL_NAME.into(),
            ..gke::NodePool::default()
        });
        let service = FakeClusters::with(observed);
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(!observation.resource_up_to_date);
        assert_eq!(external.pending(), &UpdateAction::DeleteBootstrapNodePool);

        external.update(&mut cr).await.unwrap();
        assert_eq!(
            service.calls().last().unwrap(),
            &(
                "deleteNodePool",
                format!("{FQ_NAME}/nodePools/{BOOTSTRAP_NODE_POOL_NAME}")
            )
        );
    }

    #[tokio::test]
    async fn test_update_is_deferred_while_busy() {
        let mut observed = running(&params());
        observed.logging_service = "none".into();
        observed.status = ClusterStatus::Reconciling;
        let service = FakeClusters::with(observed);
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        let observation = external.observe(&mut cr).await.unwrap();
        assert!(!observation.resource_up_to_date);
        assert!(!external.update(&mut cr).await.unwrap());
        assert_eq!(service.calls(), vec![("get", FQ_NAME.to_string())]);
    }

    #[tokio::test]
    async fn test_update_issues_pending_action_once() {
        let mut observed = running(&params());
        observed.logging_service = "none".into();
        let service = FakeClusters::with(observed);
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        external.observe(&mut cr).await.unwrap();
        assert!(external.update(&mut cr).await.unwrap());
        assert!(!external.update(&mut cr).await.unwrap());
        assert_eq!(
            service.calls(),
            vec![("get", FQ_NAME.to_string()), ("update", FQ_NAME.to_string())]
        );
    }

    #[tokio::test]
    async fn test_create_injects_bootstrap_pool() {
        let service = Arc::new(FakeClusters::default());
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        external.create(&mut cr).await.unwrap();
        assert_eq!(ready_reason(&cr).as_deref(), Some("Creating"));
        assert_eq!(
            service.calls(),
            vec![("create", "projects/my-project/locations/us-central1".to_string())]
        );
        let request = service.created.lock().unwrap().clone().unwrap();
        assert_eq!(request.cluster.name, "my-cluster");
        assert_eq!(request.cluster.node_pools[0].name, BOOTSTRAP_NODE_POOL_NAME);
        assert_eq!(request.cluster.node_pools[0].initial_node_count, 0);
    }

    #[tokio::test]
    async fn test_delete_of_missing_cluster_succeeds() {
        let service = Arc::new(FakeClusters::default());
        let mut external = ClusterExternal::new(service, PROJECT);
        let mut cr = managed(params());

        assert!(!external.delete(&mut cr).await.unwrap());
        assert_eq!(ready_reason(&cr).as_deref(), Some("Deleting"));
    }

    #[tokio::test]
    async fn test_delete_of_running_cluster_is_issued() {
        let service = FakeClusters::with(running(&params()));
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        external.observe(&mut cr).await.unwrap();
        assert!(external.delete(&mut cr).await.unwrap());
        assert_eq!(service.calls().last().unwrap(), &("delete", FQ_NAME.to_string()));
    }

    #[tokio::test]
    async fn test_stopping_cluster_is_not_deleted_again() {
        let mut observed = running(&params());
        observed.status = ClusterStatus::Stopping;
        let service = FakeClusters::with(observed);
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());

        external.observe(&mut cr).await.unwrap();
        assert!(!external.delete(&mut cr).await.unwrap());
        assert_eq!(ready_reason(&cr).as_deref(), Some("Deleting"));
        assert_eq!(service.calls(), vec![("get", FQ_NAME.to_string())]);
    }

    #[tokio::test]
    async fn test_external_name_annotation() {
        let service = Arc::new(FakeClusters::default());
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(params());
        cr.metadata.annotations = Some(
            [(ANNOTATION_EXTERNAL_NAME.to_string(), "legacy-name".to_string())]
                .into_iter()
                .collect(),
        );

        external.observe(&mut cr).await.unwrap();
        assert_eq!(
            service.calls(),
            vec![(
                "get",
                "projects/my-project/locations/us-central1/clusters/legacy-name".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_location_is_rejected() {
        let service = Arc::new(FakeClusters::default());
        let mut external = ClusterExternal::new(service.clone(), PROJECT);
        let mut cr = managed(ClusterParameters::default());

        let err = external.observe(&mut cr).await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingParameter {
                field: "location",
                ..
            }
        ));
        assert!(service.calls().is_empty());
    }
}
