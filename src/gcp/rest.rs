// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Authenticated JSON-over-HTTP client shared by the GCP REST services.
//!
//! Every call is a single synchronous request: there is no retry loop here. Failed
//! reconciles are requeued by the controller instead.

use crate::errors::GcpError;
use crate::metrics::record_gcp_api_call;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

/// Google error envelope: `{"error": {"code": 404, "message": "...", "status": "NOT_FOUND"}}`.
#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct ErrorBody {
    message: String,
    status: String,
}

/// HTTP client bound to one API endpoint and one access token.
#[derive(Clone, Debug)]
pub struct RestClient {
    http: HttpClient,
    base_url: String,
    token: Arc<String>,
    service: &'static str,
}

impl RestClient {
    /// Create a client for `base_url` (e.g. `https://redis.googleapis.com/v1`).
    ///
    /// `service` labels metrics and logs.
    #[must_use]
    pub fn new(
        http: HttpClient,
        base_url: &str,
        token: impl Into<String>,
        service: &'static str,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(token.into()),
            service,
        }
    }

    /// Build the absolute URL for a resource path relative to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GcpError::InvalidUrl`] if the result is not a valid URL.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, GcpError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        if query.is_empty() {
            Ok(Url::parse(&raw)?)
        } else {
            Ok(Url::parse_with_params(&raw, query)?)
        }
    }

    /// `GET` a resource.
    ///
    /// # Errors
    ///
    /// Returns [`GcpError::NotFound`] for HTTP 404 and other [`GcpError`] variants for
    /// any other failure.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GcpError> {
        let url = self.url(path, &[])?;
        self.execute("get", self.request(Method::GET, &url), &url)
            .await
    }

    /// `POST` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn post<B, T>(&self, path: &str, query: &[(&str, &str)], body: &B) -> Result<T, GcpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, query)?;
        self.execute("post", self.request(Method::POST, &url).json(body), &url)
            .await
    }

    /// `PUT` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, GcpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, &[])?;
        self.execute("put", self.request(Method::PUT, &url).json(body), &url)
            .await
    }

    /// `PATCH` a JSON body.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn patch<B, T>(&self, path: &str, query: &[(&str, &str)], body: &B) -> Result<T, GcpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path, query)?;
        self.execute("patch", self.request(Method::PATCH, &url).json(body), &url)
            .await
    }

    /// `DELETE` a resource.
    ///
    /// # Errors
    ///
    /// See [`RestClient::get`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, GcpError> {
        let url = self.url(path, &[])?;
        self.execute("delete", self.request(Method::DELETE, &url), &url)
            .await
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        self.http
            .request(method, url.clone())
            .bearer_auth(self.token.as_str())
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        verb: &'static str,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T, GcpError> {
        debug!(service = self.service, verb, url = %url, "GCP API request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                record_gcp_api_call(self.service, verb, "transport_error");
                warn!(service = self.service, verb, url = %url, error = %e, "GCP API request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let envelope: ErrorEnvelope = serde_json::from_str(&text).unwrap_or_default();

            if status.as_u16() == 404 {
                record_gcp_api_call(self.service, verb, "not_found");
                return Err(GcpError::NotFound {
                    resource: url.path().to_string(),
                });
            }

            record_gcp_api_call(self.service, verb, "error");
            warn!(
                service = self.service,
                verb,
                url = %url,
                status = %status,
                error = %envelope.error.message,
                "GCP API returned an error"
            );
            let message = if envelope.error.message.is_empty() {
                text
            } else {
                envelope.error.message
            };
            return Err(GcpError::Api {
                status: status.as_u16(),
                code: envelope.error.status,
                message,
            });
        }

        record_gcp_api_call(self.service, verb, "success");

        // Deletes may answer with an empty body.
        let body = if text.trim().is_empty() { "null" } else { text.as_str() };
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
#[path = "rest_tests.rs"]
mod rest_tests;
