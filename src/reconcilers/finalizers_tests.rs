// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `finalizers.rs`

#[cfg(test)]
mod tests {
    use crate::crd::dns::{ManagedZone, ManagedZoneParameters, ManagedZoneSpec};
    use crate::crd::DeletionPolicy;
    use crate::reconcilers::finalizers::{has_finalizer, with_finalizer, without_finalizer};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    const TEST_FINALIZER: &str = "finalizer.managedresource.crossplane.io";
    const OTHER_FINALIZER: &str = "example.com/other";

    fn zone_with_finalizers(finalizers: Option<Vec<String>>) -> ManagedZone {
        ManagedZone {
            metadata: ObjectMeta {
                name: Some("example-com".to_string()),
                finalizers,
                ..Default::default()
            },
            spec: ManagedZoneSpec {
                for_provider: ManagedZoneParameters {
                    dns_name: "example.com.".into(),
                    ..ManagedZoneParameters::default()
                },
                deletion_policy: DeletionPolicy::Delete,
                write_connection_secret_to_ref: None,
            },
            status: None,
        }
    }

    #[test]
    fn test_has_finalizer() {
        assert!(!has_finalizer(&zone_with_finalizers(None), TEST_FINALIZER));
        assert!(!has_finalizer(
            &zone_with_finalizers(Some(vec![OTHER_FINALIZER.into()])),
            TEST_FINALIZER
        ));
        assert!(has_finalizer(
            &zone_with_finalizers(Some(vec![TEST_FINALIZER.into()])),
            TEST_FINALIZER
        ));
    }

    #[test]
    fn test_with_finalizer_appends_and_keeps_others() {
        let zone = zone_with_finalizers(Some(vec![OTHER_FINALIZER.into()]));
        assert_eq!(
            with_finalizer(&zone, TEST_FINALIZER),
            Some(vec![OTHER_FINALIZER.to_string(), TEST_FINALIZER.to_string()])
        );
        assert_eq!(
            with_finalizer(&zone_with_finalizers(None), TEST_FINALIZER),
            Some(vec![TEST_FINALIZER.to_string()])
        );
    }

    #[test]
    fn test_with_finalizer_is_idempotent() {
        let zone = zone_with_finalizers(Some(vec![TEST_FINALIZER.into()]));
        assert_eq!(with_finalizer(&zone, TEST_FINALIZER), None);
    }

    #[test]
    fn test_without_finalizer() {
        let zone = zone_with_finalizers(Some(vec![TEST_FINALIZER.into(), OTHER_FINALIZER.into()]));
        assert_eq!(
            without_finalizer(&zone, TEST_FINALIZER),
            Some(vec![OTHER_FINALIZER.to_string()])
        );
        assert_eq!(
            without_finalizer(&zone_with_finalizers(None), TEST_FINALIZER),
            None
        );
    }
}
