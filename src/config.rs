// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Operator configuration.
//!
//! Every option can be given as a flag or through its environment variable.
//!
//! ```text
//! provider-gcp --project-id my-project --token-source env
//! GCP_PROJECT_ID=my-project GCP_ACCESS_TOKEN=ya29... provider-gcp --token-source env
//! ```

use crate::constants::{
    DEFAULT_CONTAINER_ENDPOINT, DEFAULT_DNS_ENDPOINT, DEFAULT_METRICS_ADDR,
    DEFAULT_POLL_INTERVAL_SECS, DEFAULT_REDIS_ENDPOINT, DEFAULT_SHORT_WAIT_SECS,
};
use crate::errors::GcpError;
use crate::gcp::auth::{MetadataServerToken, StaticToken, TokenSource};
use crate::reconcilers::managed::Endpoints;
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use std::time::Duration;

/// Where access tokens for the GCP APIs come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum TokenSourceKind {
    /// The GCE/GKE metadata server (workload identity or node service account)
    #[default]
    Metadata,
    /// A fixed token from `GCP_ACCESS_TOKEN`
    Env,
}

/// Command-line and environment configuration of the provider.
#[derive(Parser, Debug, Clone)]
#[command(name = "provider-gcp", version, about, long_about = None)]
pub struct Config {
    /// GCP project that owns every managed resource
    #[arg(long, env = "GCP_PROJECT_ID", default_value = "")]
    pub project_id: String,

    /// Access token source
    #[arg(long, env = "GCP_TOKEN_SOURCE", value_enum, default_value_t = TokenSourceKind::Metadata)]
    pub token_source: TokenSourceKind,

    /// Static access token, used with `--token-source env`
    #[arg(long, env = "GCP_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// GKE API base URL
    #[arg(long, env = "GCP_CONTAINER_ENDPOINT", default_value = DEFAULT_CONTAINER_ENDPOINT)]
    pub container_endpoint: String,

    /// Memorystore API base URL
    #[arg(long, env = "GCP_REDIS_ENDPOINT", default_value = DEFAULT_REDIS_ENDPOINT)]
    pub redis_endpoint: String,

    /// Cloud DNS API base URL
    #[arg(long, env = "GCP_DNS_ENDPOINT", default_value = DEFAULT_DNS_ENDPOINT)]
    pub dns_endpoint: String,

    /// Requeue interval for resources that are in sync
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value_t = DEFAULT_POLL_INTERVAL_SECS)]
    pub poll_interval_secs: u64,

    /// Requeue interval after an external create, update or delete
    #[arg(long, env = "SHORT_WAIT_SECS", default_value_t = DEFAULT_SHORT_WAIT_SECS)]
    pub short_wait_secs: u64,

    /// Bind address of the metrics and health server
    #[arg(long, env = "METRICS_ADDR", default_value = DEFAULT_METRICS_ADDR)]
    pub metrics_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            token_source: TokenSourceKind::default(),
            access_token: None,
            container_endpoint: DEFAULT_CONTAINER_ENDPOINT.to_string(),
            redis_endpoint: DEFAULT_REDIS_ENDPOINT.to_string(),
            dns_endpoint: DEFAULT_DNS_ENDPOINT.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            short_wait_secs: DEFAULT_SHORT_WAIT_SECS,
            metrics_addr: DEFAULT_METRICS_ADDR.to_string(),
        }
    }
}

impl Config {
    /// API base URLs for the connector.
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            container: self.container_endpoint.clone(),
            redis: self.redis_endpoint.clone(),
            dns: self.dns_endpoint.clone(),
        }
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    #[must_use]
    pub fn short_wait(&self) -> Duration {
        Duration::from_secs(self.short_wait_secs)
    }

    /// Build the configured token source.
    ///
    /// # Errors
    ///
    /// Returns [`GcpError::Auth`] when `--token-source env` is selected without
    /// a token.
    pub fn token_source(&self, http: reqwest::Client) -> Result<Arc<dyn TokenSource>, GcpError> {
        match self.token_source {
            TokenSourceKind::Metadata => Ok(Arc::new(MetadataServerToken::new(http))),
            TokenSourceKind::Env => match self.access_token.as_deref() {
                Some(token) if !token.is_empty() => Ok(Arc::new(StaticToken::new(token))),
                _ => Err(GcpError::Auth {
                    reason: "GCP_ACCESS_TOKEN must be set when --token-source=env".to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
