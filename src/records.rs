// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Single-recordset operations: read, create, update, delete, and the
//! normalized rdata read path.
//!
//! Record writes share the [`WriteScope::Records`] lock with the bulk
//! recordset writes in [`crate::recordsets`], so no two of them race the
//! backend's zone serial. Reads are never locked.
//!
//! [`Client::get_rdata`] composes a recordset list fetch with
//! [`crate::rdata::process_rdata`]: fetched values are filtered to the
//! requested owner name and normalized per record type (AAAA expansion, LOC
//! padding) without building full field maps.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Client;
use crate::coordinator::WriteScope;
use crate::error::Error;
use crate::rdata::process_rdata;
use crate::recordsets::{Metadata, RecordSet};

/// One recordset as sent to and returned by the record endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBody {
    /// Owner name, e.g. `www.example.com`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Record type tag, e.g. `A`, `SRV`
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub record_type: String,
    /// Time to live in seconds
    #[serde(default, skip_serializing_if = "is_zero")]
    pub ttl: i64,
    /// Whether the recordset is active
    #[serde(default, skip_serializing_if = "is_false")]
    pub active: bool,
    /// Raw rdata values, one presentation-format string per record instance
    #[serde(rename = "rdata", default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<String>,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !(*v)
}

impl RecordBody {
    fn validate(&self, op: &'static str) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(Error::validation(op, "record body is missing name"));
        }
        if self.record_type.is_empty() {
            return Err(Error::validation(op, "record body is missing record type"));
        }
        if self.ttl == 0 {
            return Err(Error::validation(op, "record body is missing ttl"));
        }
        if self.target.is_empty() {
            return Err(Error::validation(op, "record body is missing rdata"));
        }
        Ok(())
    }
}

/// Parameters for [`Client::get_record`].
#[derive(Debug, Clone, Default)]
pub struct GetRecordRequest {
    /// Zone containing the record
    pub zone: String,
    /// Record owner name
    pub name: String,
    /// Record type tag
    pub record_type: String,
}

/// Response payload from [`Client::get_record`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GetRecordResponse {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub record_type: String,
    #[serde(default)]
    pub ttl: i64,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "rdata", default)]
    pub target: Vec<String>,
}

/// Parameters for [`Client::get_record_list`].
#[derive(Debug, Clone, Default)]
pub struct GetRecordListRequest {
    pub zone: String,
    pub record_type: String,
}

/// Response payload from [`Client::get_record_list`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetRecordListResponse {
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(rename = "recordsets", default)]
    pub recordsets: Vec<RecordSet>,
}

/// Parameters for [`Client::get_rdata`].
#[derive(Debug, Clone, Default)]
pub struct GetRdataRequest {
    pub zone: String,
    pub name: String,
    pub record_type: String,
}

/// Parameters for [`Client::create_record`].
#[derive(Debug, Clone, Default)]
pub struct CreateRecordRequest {
    /// Zone receiving the record
    pub zone: String,
    /// The recordset to create
    pub record: RecordBody,
    /// Bypass the records write lock; the caller asserts serialization is
    /// handled externally
    pub skip_lock: bool,
}

/// Parameters for [`Client::update_record`].
#[derive(Debug, Clone, Default)]
pub struct UpdateRecordRequest {
    pub zone: String,
    pub record: RecordBody,
    pub skip_lock: bool,
}

/// Parameters for [`Client::delete_record`].
#[derive(Debug, Clone, Default)]
pub struct DeleteRecordRequest {
    pub zone: String,
    pub name: String,
    pub record_type: String,
    pub skip_lock: bool,
}

fn require(op: &'static str, field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::validation(op, format!("{field} is required")));
    }
    Ok(())
}

impl Client {
    /// Retrieve one recordset by zone, owner name and type.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_record(&self, params: GetRecordRequest) -> Result<GetRecordResponse, Error> {
        const OP: &str = "get_record";
        debug!(zone = %params.zone, name = %params.name, record_type = %params.record_type, "get_record");

        require(OP, "zone", &params.zone)?;
        require(OP, "name", &params.name)?;
        require(OP, "record type", &params.record_type)?;

        let url = self.url(&format!(
            "/config-dns/v2/zones/{}/names/{}/types/{}",
            params.zone, params.name, params.record_type
        ))?;
        let response = self.send(OP, self.request(Method::GET, url)).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Retrieve every recordset of one type in a zone.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_record_list(
        &self,
        params: GetRecordListRequest,
    ) -> Result<GetRecordListResponse, Error> {
        const OP: &str = "get_record_list";
        debug!(zone = %params.zone, record_type = %params.record_type, "get_record_list");

        require(OP, "zone", &params.zone)?;
        require(OP, "record type", &params.record_type)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/recordsets", params.zone))?;
        let request = self
            .request(Method::GET, url)
            .query(&[("types", params.record_type.as_str()), ("showAll", "true")]);
        let response = self.send(OP, request).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Fetch the normalized rdata values for one owner name.
    ///
    /// Lists the zone's recordsets of the requested type, keeps those whose
    /// owner name matches, and normalizes each value per record type (see
    /// [`crate::rdata::normalize_rdata`]). No field maps are built.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_rdata(&self, params: GetRdataRequest) -> Result<Vec<String>, Error> {
        const OP: &str = "get_rdata";
        debug!(zone = %params.zone, name = %params.name, record_type = %params.record_type, "get_rdata");

        require(OP, "zone", &params.zone)?;
        require(OP, "name", &params.name)?;
        require(OP, "record type", &params.record_type)?;

        let records = self
            .get_record_list(GetRecordListRequest {
                zone: params.zone,
                record_type: params.record_type.clone(),
            })
            .await?;

        let mut rdata = Vec::new();
        for recordset in &records.recordsets {
            if recordset.name == params.name {
                rdata.extend(process_rdata(&params.record_type, &recordset.rdata));
            }
        }
        Ok(rdata)
    }

    /// Create a recordset.
    ///
    /// Holds the records write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 201.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn create_record(&self, params: CreateRecordRequest) -> Result<(), Error> {
        const OP: &str = "create_record";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Records, params.skip_lock)
            .await;

        debug!(zone = %params.zone, record = ?params.record, "create_record");
        require(OP, "zone", &params.zone)?;
        params.record.validate(OP)?;

        let url = self.url(&format!(
            "/config-dns/v2/zones/{}/names/{}/types/{}",
            params.zone, params.record.name, params.record.record_type
        ))?;
        let response = self
            .send(OP, self.request(Method::POST, url).json(&params.record))
            .await?;
        self.expect_status(OP, response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Replace a recordset.
    ///
    /// Holds the records write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn update_record(&self, params: UpdateRecordRequest) -> Result<(), Error> {
        const OP: &str = "update_record";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Records, params.skip_lock)
            .await;

        debug!(zone = %params.zone, record = ?params.record, "update_record");
        require(OP, "zone", &params.zone)?;
        params.record.validate(OP)?;

        let url = self.url(&format!(
            "/config-dns/v2/zones/{}/names/{}/types/{}",
            params.zone, params.record.name, params.record.record_type
        ))?;
        let response = self
            .send(OP, self.request(Method::PUT, url).json(&params.record))
            .await?;
        self.expect_status(OP, response, StatusCode::OK).await?;
        Ok(())
    }

    /// Remove a recordset.
    ///
    /// Holds the records write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 204.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn delete_record(&self, params: DeleteRecordRequest) -> Result<(), Error> {
        const OP: &str = "delete_record";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Records, params.skip_lock)
            .await;

        debug!(zone = %params.zone, name = %params.name, record_type = %params.record_type, "delete_record");
        require(OP, "zone", &params.zone)?;
        require(OP, "name", &params.name)?;
        require(OP, "record type", &params.record_type)?;

        let url = self.url(&format!(
            "/config-dns/v2/zones/{}/names/{}/types/{}",
            params.zone, params.name, params.record_type
        ))?;
        let response = self.send(OP, self.request(Method::DELETE, url)).await?;
        self.expect_status(OP, response, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod records_tests;
