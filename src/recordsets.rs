// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Bulk recordset operations: paged listing plus create/replace of many
//! recordsets in one call.
//!
//! The bulk writes share the [`WriteScope::Records`] lock with the
//! single-record writes in [`crate::records`]; every recordset in a bulk
//! request is validated before the network call.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::coordinator::WriteScope;
use crate::error::Error;

/// One recordset: owner name, type, TTL and the raw rdata values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    /// Owner name
    pub name: String,
    /// Record type tag
    #[serde(rename = "type")]
    pub record_type: String,
    /// Time to live in seconds
    pub ttl: i64,
    /// Raw rdata values, one presentation-format string per record instance
    pub rdata: Vec<String>,
}

/// Paging metadata echoed by recordset list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metadata {
    pub last_page: i64,
    pub page: i64,
    pub page_size: i64,
    pub show_all: bool,
    pub total_elements: i64,
}

/// Optional query arguments for [`Client::get_record_sets`].
///
/// Values are passed through unformatted; zero/empty fields are omitted from
/// the query string (except `showAll`, which is always sent).
#[derive(Debug, Clone, Default)]
pub struct RecordSetQueryArgs {
    pub page: i64,
    pub page_size: i64,
    pub search: String,
    pub show_all: bool,
    pub sort_by: String,
    pub types: String,
}

/// Recordset collection for bulk create/replace requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSets {
    #[serde(rename = "recordsets")]
    pub recordsets: Vec<RecordSet>,
}

impl RecordSets {
    fn validate(&self, op: &'static str) -> Result<(), Error> {
        if self.recordsets.is_empty() {
            return Err(Error::validation(op, "recordsets list is empty"));
        }
        for recordset in &self.recordsets {
            if recordset.name.is_empty() {
                return Err(Error::validation(op, "recordset is missing name"));
            }
            if recordset.record_type.is_empty() {
                return Err(Error::validation(op, "recordset is missing record type"));
            }
            if recordset.ttl == 0 {
                return Err(Error::validation(op, "recordset is missing ttl"));
            }
            if recordset.rdata.is_empty() {
                return Err(Error::validation(op, "recordset is missing rdata"));
            }
        }
        Ok(())
    }
}

/// Parameters for [`Client::get_record_sets`].
#[derive(Debug, Clone, Default)]
pub struct GetRecordSetsRequest {
    pub zone: String,
    pub query_args: Option<RecordSetQueryArgs>,
}

/// Response payload from [`Client::get_record_sets`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetRecordSetsResponse {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(rename = "recordsets", default)]
    pub recordsets: Vec<RecordSet>,
}

/// Parameters for [`Client::create_record_sets`].
#[derive(Debug, Clone, Default)]
pub struct CreateRecordSetsRequest {
    pub zone: String,
    pub record_sets: RecordSets,
    /// Bypass the records write lock; the caller asserts serialization is
    /// handled externally
    pub skip_lock: bool,
}

/// Parameters for [`Client::update_record_sets`].
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordSetsRequest {
    pub zone: String,
    pub record_sets: RecordSets,
    pub skip_lock: bool,
}

fn query_pairs(args: &RecordSetQueryArgs) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if args.page > 0 {
        pairs.push(("page", args.page.to_string()));
    }
    if args.page_size > 0 {
        pairs.push(("pageSize", args.page_size.to_string()));
    }
    if !args.search.is_empty() {
        pairs.push(("search", args.search.clone()));
    }
    pairs.push(("showAll", args.show_all.to_string()));
    if !args.sort_by.is_empty() {
        pairs.push(("sortBy", args.sort_by.clone()));
    }
    if !args.types.is_empty() {
        pairs.push(("types", args.types.clone()));
    }
    pairs
}

impl Client {
    /// List a zone's recordsets, optionally paged/filtered by `query_args`.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_record_sets(
        &self,
        params: GetRecordSetsRequest,
    ) -> Result<GetRecordSetsResponse, Error> {
        const OP: &str = "get_record_sets";
        debug!(zone = %params.zone, "get_record_sets");

        if params.zone.is_empty() {
            return Err(Error::validation(OP, "zone is required"));
        }

        let url = self.url(&format!("/config-dns/v2/zones/{}/recordsets", params.zone))?;
        let mut request = self.request(Method::GET, url);
        if let Some(args) = &params.query_args {
            request = request.query(&query_pairs(args));
        }
        let response = self.send(OP, request).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Create multiple recordsets in one call.
    ///
    /// Holds the records write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 204.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters or invalid recordsets,
    /// [`Error::Transport`] / [`Error::Api`] for request failures.
    pub async fn create_record_sets(&self, params: CreateRecordSetsRequest) -> Result<(), Error> {
        const OP: &str = "create_record_sets";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Records, params.skip_lock)
            .await;

        debug!(zone = %params.zone, count = params.record_sets.recordsets.len(), "create_record_sets");
        if params.zone.is_empty() {
            return Err(Error::validation(OP, "zone is required"));
        }
        params.record_sets.validate(OP)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/recordsets", params.zone))?;
        let response = self
            .send(OP, self.request(Method::POST, url).json(&params.record_sets))
            .await?;
        self.expect_status(OP, response, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Replace a zone's recordset list in one call.
    ///
    /// Holds the records write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 204.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters or invalid recordsets,
    /// [`Error::Transport`] / [`Error::Api`] for request failures.
    pub async fn update_record_sets(&self, params: UpdateRecordSetsRequest) -> Result<(), Error> {
        const OP: &str = "update_record_sets";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Records, params.skip_lock)
            .await;

        debug!(zone = %params.zone, count = params.record_sets.recordsets.len(), "update_record_sets");
        if params.zone.is_empty() {
            return Err(Error::validation(OP, "zone is required"));
        }
        params.record_sets.validate(OP)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/recordsets", params.zone))?;
        let response = self
            .send(OP, self.request(Method::PUT, url).json(&params.record_sets))
            .await?;
        self.expect_status(OP, response, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "recordsets_tests.rs"]
mod recordsets_tests;
