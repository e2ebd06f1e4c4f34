// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the error taxonomy.

#[cfg(test)]
mod tests {
    use crate::errors::{GcpError, GcpResultExt, ProviderError};

    fn api(status: u16, code: &str) -> GcpError {
        GcpError::Api {
            status,
            code: code.to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_not_found_classification() {
        assert!(GcpError::NotFound {
            resource: "x".into()
        }
        .is_not_found());
        assert!(api(404, "").is_not_found());
        assert!(api(400, "NOT_FOUND").is_not_found());
        assert!(!api(403, "PERMISSION_DENIED").is_not_found());
        assert!(!GcpError::Auth {
            reason: "nope".into()
        }
        .is_not_found());
    }

    #[test]
    fn test_context_wraps_error() {
        let result: Result<(), GcpError> = Err(api(500, "INTERNAL"));
        let err = result.context("cannot get CloudMemorystore instance").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Gcp {
                context: "cannot get CloudMemorystore instance",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "cannot get CloudMemorystore instance: GCP API error (HTTP 500, INTERNAL): boom"
        );
    }

    #[test]
    fn test_context_passes_ok_through() {
        let result: Result<u8, GcpError> = Ok(7);
        assert_eq!(result.context("unused").unwrap(), 7);
    }

    #[test]
    fn test_missing_parameter_message() {
        let err = ProviderError::MissingParameter {
            kind: "GKECluster",
            field: "location",
        };
        assert_eq!(err.to_string(), "GKECluster parameter location must be set");
    }

    #[test]
    fn test_metric_labels() {
        assert_eq!(ProviderError::MissingProject.metric_label(), "missing_project");
        let auth: Result<(), GcpError> = Err(GcpError::Auth {
            reason: "no token".into(),
        });
        assert_eq!(auth.context("cannot connect").unwrap_err().metric_label(), "gcp_auth");
        let denied: Result<(), GcpError> = Err(api(403, "PERMISSION_DENIED"));
        assert_eq!(denied.context("cannot get").unwrap_err().metric_label(), "gcp_api");
    }
}
