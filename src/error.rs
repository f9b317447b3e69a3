// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Error types for the Edge DNS client.
//!
//! This module provides the crate-wide [`Error`] enum plus [`ApiProblem`],
//! the decoder for the structured problem-details JSON the backend returns
//! on non-success HTTP statuses.
//!
//! Every operation follows the same discipline:
//! - Missing required request fields surface as [`Error::Validation`] before
//!   any network access.
//! - Connection-level failures surface as [`Error::Transport`].
//! - A response with an unexpected status code is decoded into
//!   [`Error::Api`], carrying the parsed [`ApiProblem`].
//!
//! No retries happen at this layer; callers own retry policy.

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Structured error body returned by the DNS API on failure.
///
/// The backend reports errors as RFC 7807 style problem-details JSON:
///
/// ```json
/// {
///   "type": "https://problems.example.net/dns/error-types/BAD_REQUEST",
///   "title": "Bad Request",
///   "detail": "Invalid SOA record",
///   "instance": "abc-123",
///   "status": 400
/// }
/// ```
///
/// All fields are optional on the wire; a body that is not valid JSON at all
/// is preserved verbatim in `detail` so nothing is lost.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiProblem {
    /// URI identifying the problem type
    #[serde(rename = "type")]
    pub problem_type: Option<String>,
    /// Short human-readable summary
    pub title: Option<String>,
    /// Detailed explanation specific to this occurrence
    pub detail: Option<String>,
    /// Identifier for this specific occurrence
    pub instance: Option<String>,
    /// HTTP status code echoed in the body
    pub status: Option<u16>,
}

impl ApiProblem {
    /// Decode a problem-details body, falling back to the raw text.
    ///
    /// Never fails: a body that does not parse as problem-details JSON is
    /// stored verbatim as `detail`.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<ApiProblem>(body) {
            Ok(problem) => problem,
            Err(_) => ApiProblem {
                detail: if body.is_empty() {
                    None
                } else {
                    Some(body.to_string())
                },
                ..ApiProblem::default()
            },
        }
    }
}

impl std::fmt::Display for ApiProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.title, &self.detail) {
            (Some(title), Some(detail)) => write!(f, "{title}: {detail}"),
            (Some(title), None) => write!(f, "{title}"),
            (None, Some(detail)) => write!(f, "{detail}"),
            (None, None) => write!(f, "unknown API error"),
        }
    }
}

/// Errors returned by Edge DNS client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required request field was missing or invalid.
    ///
    /// Reported before any network call is made.
    #[error("{op}: request validation failed: {reason}")]
    Validation {
        /// The operation that rejected the request (e.g. `"create_record"`)
        op: &'static str,
        /// What was missing or invalid
        reason: String,
    },

    /// The HTTP request could not be completed (connect, timeout, decode).
    #[error("{op}: request failed: {source}")]
    Transport {
        /// The operation whose request failed
        op: &'static str,
        /// Underlying reqwest error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with an unexpected status code.
    ///
    /// Carries the decoded problem-details body for troubleshooting.
    #[error("{op}: unexpected status {status}: {problem}")]
    Api {
        /// The operation that received the response
        op: &'static str,
        /// The status code the server returned
        status: StatusCode,
        /// Decoded problem-details body
        problem: ApiProblem,
    },

    /// The configured base URL (or a path joined onto it) is invalid.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Shorthand used by request builders for missing-field reports.
    pub(crate) fn validation(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Validation {
            op,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
