// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! HTTP execution context for the Edge DNS API.
//!
//! [`Client`] owns the reqwest connection pool, the API base URL, optional
//! bearer-token authentication and the shared [`MutationCoordinator`]. The
//! request builders in [`crate::records`], [`crate::recordsets`] and
//! [`crate::zones`] are implemented as methods on `Client` and funnel through
//! the small "execute and decode" helpers here: send the request, check the
//! one expected success status, decode either the JSON payload or the
//! problem-details error body.
//!
//! Request signing beyond bearer tokens is the session layer's concern;
//! callers needing signed requests supply a pre-configured
//! [`reqwest::Client`] via [`Client::with_http_client`].
//!
//! # Example
//!
//! ```rust,no_run
//! use edgedns::client::Client;
//! use edgedns::records::GetRecordRequest;
//!
//! # async fn example() -> Result<(), edgedns::error::Error> {
//! let client = Client::new("https://dns.api.example.net")?;
//!
//! let record = client
//!     .get_record(GetRecordRequest {
//!         zone: "example.com".into(),
//!         name: "www.example.com".into(),
//!         record_type: "A".into(),
//!     })
//!     .await?;
//! println!("ttl={} rdata={:?}", record.ttl, record.target);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::coordinator::MutationCoordinator;
use crate::error::{ApiProblem, Error};

/// Async client for the hosted Edge DNS management API.
///
/// Cheap to clone is deliberately not offered; share a `Client` behind an
/// `Arc` instead so all callers funnel through one [`MutationCoordinator`].
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    token: Option<String>,
    coordinator: Arc<MutationCoordinator>,
}

impl Client {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// A default [`reqwest::Client`] and a fresh [`MutationCoordinator`] are
    /// used; see the `with_*` methods to override either.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: None,
            coordinator: Arc::new(MutationCoordinator::new()),
        })
    }

    /// Use a pre-configured HTTP client (timeouts, proxies, TLS, signing
    /// middleware).
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Share a mutation coordinator with other clients.
    ///
    /// All clients holding the same coordinator serialize their mutating
    /// calls against each other.
    #[must_use]
    pub fn with_coordinator(mut self, coordinator: Arc<MutationCoordinator>) -> Self {
        self.coordinator = coordinator;
        self
    }

    /// The coordinator serializing this client's mutating calls.
    #[must_use]
    pub fn coordinator(&self) -> &Arc<MutationCoordinator> {
        &self.coordinator
    }

    /// Resolve an API path against the configured base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    /// Start a request, attaching the bearer token when configured.
    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut builder = self.http.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
    }

    /// Execute a request, mapping connection-level failures to
    /// [`Error::Transport`].
    pub(crate) async fn send(&self, op: &'static str, builder: RequestBuilder) -> Result<Response, Error> {
        builder
            .send()
            .await
            .map_err(|source| Error::Transport { op, source })
    }

    /// Require exactly one success status; anything else decodes the
    /// problem-details body into [`Error::Api`].
    pub(crate) async fn expect_status(
        &self,
        op: &'static str,
        response: Response,
        expected: StatusCode,
    ) -> Result<Response, Error> {
        let status = response.status();
        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let problem = ApiProblem::from_body(&body);
        error!(op, status = %status, %problem, "unexpected API response status");
        Err(Error::Api {
            op,
            status,
            problem,
        })
    }

    /// Decode a success response body as JSON.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        op: &'static str,
        response: Response,
    ) -> Result<T, Error> {
        debug!(op, "decoding response body");
        response
            .json::<T>()
            .await
            .map_err(|source| Error::Transport { op, source })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
