// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Access-token sources used when connecting to Google Cloud APIs.
//!
//! Connect obtains one OAuth2 access token per reconcile and binds it into the REST
//! clients. Two sources are supported:
//!
//! - [`MetadataServerToken`] - the GCE/GKE metadata server (Workload Identity or the
//!   node's service account)
//! - [`StaticToken`] - a token handed to the process, e.g. via `GCP_ACCESS_TOKEN`

use crate::constants::{METADATA_FLAVOR_HEADER, METADATA_TOKEN_URL, TOKEN_REFRESH_MARGIN_SECS};
use crate::errors::GcpError;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

/// Source of OAuth2 bearer tokens.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync {
    /// Return a currently valid access token.
    ///
    /// # Errors
    ///
    /// Returns [`GcpError::Auth`] if no token can be obtained.
    async fn token(&self) -> Result<String, GcpError>;
}

/// A fixed access token.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Wrap an already minted token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl std::fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticToken(<redacted>)")
    }
}

#[async_trait::async_trait]
impl TokenSource for StaticToken {
    async fn token(&self) -> Result<String, GcpError> {
        if self.0.is_empty() {
            return Err(GcpError::Auth {
                reason: "static access token is empty".to_string(),
            });
        }
        Ok(self.0.clone())
    }
}

#[derive(Deserialize)]
struct MetadataTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

struct CachedToken {
    value: String,
    refresh_at: Instant,
}

/// Tokens minted by the instance metadata server.
///
/// A token is reused until [`TOKEN_REFRESH_MARGIN_SECS`] before its
/// `expires_in` deadline; concurrent callers share one refresh.
#[derive(Clone)]
pub struct MetadataServerToken {
    http: HttpClient,
    url: String,
    cached: Arc<Mutex<Option<CachedToken>>>,
}

impl MetadataServerToken {
    /// Use the well-known metadata server endpoint.
    #[must_use]
    pub fn new(http: HttpClient) -> Self {
        Self::with_url(http, METADATA_TOKEN_URL)
    }

    /// Use a custom token endpoint.
    #[must_use]
    pub fn with_url(http: HttpClient, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            cached: Arc::new(Mutex::new(None)),
        }
    }

    async fn fetch(&self) -> Result<MetadataTokenResponse, GcpError> {
        let response = self
            .http
            .get(&self.url)
            .header(METADATA_FLAVOR_HEADER, "Google")
            .send()
            .await
            .map_err(|e| GcpError::Auth {
                reason: format!("metadata server unreachable: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(GcpError::Auth {
                reason: format!("metadata server answered HTTP {}", response.status()),
            });
        }

        response.json().await.map_err(|e| GcpError::Auth {
            reason: format!("malformed metadata token response: {e}"),
        })
    }
}

impl std::fmt::Debug for MetadataServerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataServerToken")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl TokenSource for MetadataServerToken {
    async fn token(&self) -> Result<String, GcpError> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.value.clone());
            }
        }

        let body = self.fetch().await?;
        let lifetime = Duration::from_secs(body.expires_in.saturating_sub(TOKEN_REFRESH_MARGIN_SECS));
        debug!(expires_in = body.expires_in, "Fetched access token from metadata server");
        *cached = Some(CachedToken {
            value: body.access_token.clone(),
            refresh_at: Instant::now() + lifetime,
        });
        Ok(body.access_token)
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod auth_tests;
