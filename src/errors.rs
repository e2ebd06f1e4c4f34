// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for cloud API calls and reconciler adapters.
//!
//! Two layers are distinguished:
//!
//! - [`GcpError`] - failures at the cloud RPC boundary (HTTP status, transport,
//!   decoding, authentication). Not-found is a variant of its own because callers
//!   treat it as a normal state rather than a failure.
//! - [`ProviderError`] - failures surfaced by the external adapters to the reconcile
//!   driver, each carrying a static contextual message.
//!
//! None of these errors are retried inside the provider. They propagate to the
//! controller, whose error policy requeues the object.

use thiserror::Error;

/// Errors returned by the Google Cloud REST services.
#[derive(Error, Debug)]
pub enum GcpError {
    /// The requested resource does not exist (HTTP 404 / `NOT_FOUND`).
    #[error("{resource} not found")]
    NotFound {
        /// Fully qualified resource path or URL that was requested
        resource: String,
    },

    /// The API answered with a non-success status.
    #[error("GCP API error (HTTP {status}, {code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Google canonical status (e.g. `PERMISSION_DENIED`), empty if absent
        code: String,
        /// Error message returned by the API
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("GCP API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("cannot decode GCP API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A request URL could not be built.
    #[error("invalid GCP API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// No access token could be obtained.
    #[error("cannot obtain GCP access token: {reason}")]
    Auth {
        /// Why token acquisition failed
        reason: String,
    },
}

impl GcpError {
    /// Whether this error means the resource is absent.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Api { status, code, .. } => *status == 404 || code == "NOT_FOUND",
            _ => false,
        }
    }
}

/// Errors returned by the external reconciler adapters.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// No GCP project is configured for the provider.
    #[error("no GCP project configured; set --project-id or GCP_PROJECT_ID")]
    MissingProject,

    /// A required parameter is empty.
    #[error("{kind} parameter {field} must be set")]
    MissingParameter {
        /// Kind being reconciled
        kind: &'static str,
        /// Parameter path
        field: &'static str,
    },

    /// A cloud API call failed.
    #[error("{context}: {source}")]
    Gcp {
        /// Static description of the failed operation
        context: &'static str,
        /// Underlying API error
        #[source]
        source: GcpError,
    },

    /// Connection details could not be derived from the observed resource.
    #[error("cannot build connection details: {reason}")]
    ConnectionDetails {
        /// What was malformed
        reason: String,
    },

    /// A Kubernetes API call failed.
    #[error("kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// Serialization of a Kubernetes patch failed.
    #[error("cannot serialize patch: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ProviderError {
    /// Short label for the `error_type` metric.
    #[must_use]
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::MissingProject => "missing_project",
            Self::MissingParameter { .. } => "missing_parameter",
            Self::Gcp { source, .. } => match source {
                GcpError::Auth { .. } => "gcp_auth",
                GcpError::Transport(_) => "gcp_transport",
                _ => "gcp_api",
            },
            Self::ConnectionDetails { .. } => "connection_details",
            Self::Kube(_) => "kubernetes",
            Self::Serialize(_) => "serialize",
        }
    }
}

/// Attach a static context message to a cloud API result.
pub trait GcpResultExt<T> {
    /// Wrap the error with `context`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Gcp`] when `self` is an error.
    fn context(self, context: &'static str) -> Result<T, ProviderError>;
}

impl<T> GcpResultExt<T> for Result<T, GcpError> {
    fn context(self, context: &'static str) -> Result<T, ProviderError> {
        self.map_err(|source| ProviderError::Gcp { context, source })
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod errors_tests;
