// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Zone lifecycle operations: CRUD, changelist save/submit, master zone file
//! transfer, owner-name enumeration and the DNSSEC status report.
//!
//! Zone writes go through [`WriteScope::Zones`], independent of the records
//! scope, so a zone mutation and a record mutation may run concurrently while
//! two zone mutations never do.
//!
//! Zone bodies are filtered per zone type before sending: `target` is only
//! meaningful for ALIAS zones, `masters` and `tsigKey` only for SECONDARY,
//! and the DNSSEC sign-and-serve fields are dropped for ALIAS. The filter
//! runs after [`validate_zone`], which rejects contradictory combinations
//! outright.

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::client::Client;
use crate::coordinator::WriteScope;
use crate::error::Error;

/// TSIG key attached to a SECONDARY zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigKey {
    pub name: String,
    pub algorithm: String,
    pub secret: String,
}

/// Zone definition for create and update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneCreate {
    pub zone: String,
    /// Zone type: `PRIMARY`, `SECONDARY` or `ALIAS` (case-insensitive)
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub masters: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default)]
    pub sign_and_serve: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sign_and_serve_algorithm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsig_key: Option<TsigKey>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_customer_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contract_id: String,
}

/// Zone representation returned by the read and list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneResponse {
    pub zone: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub masters: Vec<String>,
    pub comment: String,
    pub sign_and_serve: bool,
    pub sign_and_serve_algorithm: String,
    pub tsig_key: Option<TsigKey>,
    pub target: String,
    pub end_customer_id: String,
    pub contract_id: String,
    pub alias_count: i64,
    pub activation_state: String,
    pub last_activation_date: String,
    pub last_modified_by: String,
    pub last_modified_date: String,
    pub version_id: String,
}

/// Paging metadata on zone list responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListMetadata {
    pub contract_ids: Vec<String>,
    pub page: i64,
    pub page_size: i64,
    pub show_all: bool,
    pub total_elements: i64,
}

/// Response payload from [`Client::list_zones`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ZoneListResponse {
    pub metadata: ListMetadata,
    pub zones: Vec<ZoneResponse>,
}

/// Changelist metadata returned by [`Client::get_change_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetChangeListResponse {
    pub zone: String,
    pub change_tag: String,
    pub zone_version_id: String,
    pub last_modified_date: String,
    pub stale: bool,
}

/// Response payload from [`Client::get_zone_names`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetZoneNamesResponse {
    #[serde(default)]
    pub names: Vec<String>,
}

/// Response payload from [`Client::get_zone_name_types`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetZoneNameTypesResponse {
    #[serde(default)]
    pub types: Vec<String>,
}

/// One zone's DNSSEC record material.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecRecords {
    pub dnskey_record: String,
    pub ds_record: String,
    pub expected_ttl: i64,
    pub last_modified_date: String,
}

/// DNSSEC status for one zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SecStatus {
    pub zone: String,
    pub alerts: Vec<String>,
    pub current_records: SecRecords,
    pub new_records: Option<SecRecords>,
}

/// Parameters for [`Client::get_zones_dnssec_status`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetZonesDnssecStatusRequest {
    pub zones: Vec<String>,
}

/// Response payload from [`Client::get_zones_dnssec_status`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetZonesDnssecStatusResponse {
    #[serde(rename = "dnsSecStatuses", default)]
    pub dns_sec_statuses: Vec<SecStatus>,
}

/// Optional query arguments for [`Client::list_zones`].
///
/// Zero/empty fields are omitted from the query string (except `showAll`,
/// which is always sent).
#[derive(Debug, Clone, Default)]
pub struct ListZonesRequest {
    pub contract_ids: String,
    pub page: i64,
    pub page_size: i64,
    pub search: String,
    pub show_all: bool,
    pub sort_by: String,
    pub types: String,
}

/// Parameters for [`Client::get_zone`].
#[derive(Debug, Clone, Default)]
pub struct GetZoneRequest {
    pub zone: String,
}

/// Contract and group routing for zone creation.
#[derive(Debug, Clone, Default)]
pub struct ZoneQueryString {
    pub contract: String,
    pub group: String,
}

/// Parameters for [`Client::create_zone`].
#[derive(Debug, Clone, Default)]
pub struct CreateZoneRequest {
    pub create_zone: ZoneCreate,
    pub zone_query_string: ZoneQueryString,
    /// Bypass the zones write lock; the caller asserts serialization is
    /// handled externally
    pub skip_lock: bool,
}

/// Parameters for [`Client::update_zone`].
#[derive(Debug, Clone, Default)]
pub struct UpdateZoneRequest {
    pub create_zone: ZoneCreate,
    pub skip_lock: bool,
}

/// Parameters for [`Client::get_change_list`].
#[derive(Debug, Clone, Default)]
pub struct GetChangeListRequest {
    pub zone: String,
}

/// Parameters for [`Client::save_change_list`].
#[derive(Debug, Clone, Default)]
pub struct SaveChangeListRequest {
    pub zone: String,
    pub skip_lock: bool,
}

/// Parameters for [`Client::submit_change_list`].
#[derive(Debug, Clone, Default)]
pub struct SubmitChangeListRequest {
    pub zone: String,
    pub skip_lock: bool,
}

/// Parameters for [`Client::get_master_zone_file`].
#[derive(Debug, Clone, Default)]
pub struct GetMasterZoneFileRequest {
    pub zone: String,
}

/// Parameters for [`Client::post_master_zone_file`].
#[derive(Debug, Clone, Default)]
pub struct PostMasterZoneFileRequest {
    pub zone: String,
    /// Master zone file contents, RFC 1035 presentation format
    pub file_data: String,
    pub skip_lock: bool,
}

/// Parameters for [`Client::get_zone_names`].
#[derive(Debug, Clone, Default)]
pub struct GetZoneNamesRequest {
    pub zone: String,
}

/// Parameters for [`Client::get_zone_name_types`].
#[derive(Debug, Clone, Default)]
pub struct GetZoneNameTypesRequest {
    pub zone: String,
    pub zone_name: String,
}

/// Check a zone definition against the per-type rules.
///
/// ALIAS zones require a target and forbid masters and sign-and-serve.
/// PRIMARY and SECONDARY zones forbid a target, PRIMARY additionally forbids
/// masters, and a TSIG key is only valid on SECONDARY zones. The type tag is
/// matched case-insensitively.
///
/// # Errors
///
/// [`Error::Validation`] naming the first rule violated.
pub fn validate_zone(op: &'static str, zone: &ZoneCreate) -> Result<(), Error> {
    if zone.zone.is_empty() {
        return Err(Error::validation(op, "zone name is required"));
    }
    let zone_type = zone.zone_type.to_uppercase();
    if zone_type != "PRIMARY" && zone_type != "SECONDARY" && zone_type != "ALIAS" {
        return Err(Error::validation(op, "invalid zone type"));
    }
    if zone_type != "SECONDARY" && zone.tsig_key.is_some() {
        return Err(Error::validation(
            op,
            format!("tsigKey is invalid for {zone_type} zone type"),
        ));
    }
    if zone_type == "ALIAS" {
        if zone.target.is_empty() {
            return Err(Error::validation(op, "target is required for ALIAS zone type"));
        }
        if !zone.masters.is_empty() {
            return Err(Error::validation(op, "masters is invalid for ALIAS zone type"));
        }
        if zone.sign_and_serve {
            return Err(Error::validation(
                op,
                "signAndServe is invalid for ALIAS zone type",
            ));
        }
        if !zone.sign_and_serve_algorithm.is_empty() {
            return Err(Error::validation(
                op,
                "signAndServeAlgorithm is invalid for ALIAS zone type",
            ));
        }
        return Ok(());
    }
    // PRIMARY or SECONDARY
    if !zone.target.is_empty() {
        return Err(Error::validation(
            op,
            format!("target is invalid for {zone_type} zone type"),
        ));
    }
    if zone_type == "PRIMARY" && !zone.masters.is_empty() {
        return Err(Error::validation(op, "masters is invalid for PRIMARY zone type"));
    }
    Ok(())
}

/// Build the JSON body for a zone write, keeping only the fields meaningful
/// for the zone's type.
fn filtered_zone_body(zone: &ZoneCreate) -> Value {
    let zone_type = zone.zone_type.to_uppercase();
    let mut body = Map::new();
    body.insert("zone".into(), json!(zone.zone));
    body.insert("type".into(), json!(zone.zone_type));
    body.insert("comment".into(), json!(zone.comment));
    body.insert("endCustomerId".into(), json!(zone.end_customer_id));
    body.insert("contractId".into(), json!(zone.contract_id));
    if zone_type == "ALIAS" {
        body.insert("target".into(), json!(zone.target));
    } else {
        body.insert("signAndServe".into(), json!(zone.sign_and_serve));
        body.insert(
            "signAndServeAlgorithm".into(),
            json!(zone.sign_and_serve_algorithm),
        );
    }
    if zone_type == "SECONDARY" {
        body.insert("masters".into(), json!(zone.masters));
        body.insert("tsigKey".into(), json!(zone.tsig_key));
    }
    Value::Object(body)
}

fn require(op: &'static str, field: &'static str, value: &str) -> Result<(), Error> {
    if value.is_empty() {
        return Err(Error::validation(op, format!("{field} is required")));
    }
    Ok(())
}

impl Client {
    /// List zones visible to the caller, optionally paged/filtered.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Transport`] / [`Error::Api`] for request failures.
    pub async fn list_zones(&self, params: ListZonesRequest) -> Result<ZoneListResponse, Error> {
        const OP: &str = "list_zones";
        debug!("list_zones");

        let url = self.url("/config-dns/v2/zones")?;
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if params.page > 0 {
            pairs.push(("page", params.page.to_string()));
        }
        if params.page_size > 0 {
            pairs.push(("pageSize", params.page_size.to_string()));
        }
        if !params.search.is_empty() {
            pairs.push(("search", params.search.clone()));
        }
        pairs.push(("showAll", params.show_all.to_string()));
        if !params.sort_by.is_empty() {
            pairs.push(("sortBy", params.sort_by.clone()));
        }
        if !params.types.is_empty() {
            pairs.push(("types", params.types.clone()));
        }
        if !params.contract_ids.is_empty() {
            pairs.push(("contractIds", params.contract_ids.clone()));
        }
        let response = self
            .send(OP, self.request(Method::GET, url).query(&pairs))
            .await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Retrieve one zone's definition and activation state.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_zone(&self, params: GetZoneRequest) -> Result<ZoneResponse, Error> {
        const OP: &str = "get_zone";
        debug!(zone = %params.zone, "get_zone");

        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}", params.zone))?;
        let response = self.send(OP, self.request(Method::GET, url)).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Create a zone under a contract (and optionally a group).
    ///
    /// Holds the zones write lock for the duration of the call (unless
    /// `skip_lock` is set). The body is filtered per zone type; see
    /// [`validate_zone`] for the rules enforced first. Expects HTTP 201.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters or an invalid zone
    /// definition, [`Error::Transport`] / [`Error::Api`] for request
    /// failures.
    pub async fn create_zone(&self, params: CreateZoneRequest) -> Result<(), Error> {
        const OP: &str = "create_zone";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Zones, params.skip_lock)
            .await;

        debug!(zone = %params.create_zone.zone, "create_zone");
        require(OP, "contract", &params.zone_query_string.contract)?;
        validate_zone(OP, &params.create_zone)?;

        let mut path = format!(
            "/config-dns/v2/zones/?contractId={}",
            params.zone_query_string.contract
        );
        if !params.zone_query_string.group.is_empty() {
            path.push_str("&gid=");
            path.push_str(&params.zone_query_string.group);
        }
        let url = self.url(&path)?;
        let body = filtered_zone_body(&params.create_zone);
        let response = self
            .send(OP, self.request(Method::POST, url).json(&body))
            .await?;
        self.expect_status(OP, response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Replace a zone's definition.
    ///
    /// Holds the zones write lock for the duration of the call (unless
    /// `skip_lock` is set). Same validation and body filtering as
    /// [`Client::create_zone`]. Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for an invalid zone definition,
    /// [`Error::Transport`] / [`Error::Api`] for request failures.
    pub async fn update_zone(&self, params: UpdateZoneRequest) -> Result<(), Error> {
        const OP: &str = "update_zone";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Zones, params.skip_lock)
            .await;

        debug!(zone = %params.create_zone.zone, "update_zone");
        validate_zone(OP, &params.create_zone)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}", params.create_zone.zone))?;
        let body = filtered_zone_body(&params.create_zone);
        let response = self
            .send(OP, self.request(Method::PUT, url).json(&body))
            .await?;
        self.expect_status(OP, response, StatusCode::OK).await?;
        Ok(())
    }

    /// Fetch a zone's pending changelist metadata.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_change_list(
        &self,
        params: GetChangeListRequest,
    ) -> Result<GetChangeListResponse, Error> {
        const OP: &str = "get_change_list";
        debug!(zone = %params.zone, "get_change_list");

        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/changelists/{}", params.zone))?;
        let response = self.send(OP, self.request(Method::GET, url)).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Open a fresh changelist for a zone.
    ///
    /// Holds the zones write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 201.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn save_change_list(&self, params: SaveChangeListRequest) -> Result<(), Error> {
        const OP: &str = "save_change_list";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Zones, params.skip_lock)
            .await;

        debug!(zone = %params.zone, "save_change_list");
        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/changelists/?zone={}", params.zone))?;
        let response = self
            .send(OP, self.request(Method::POST, url).json(&""))
            .await?;
        self.expect_status(OP, response, StatusCode::CREATED).await?;
        Ok(())
    }

    /// Submit a zone's changelist for activation.
    ///
    /// Holds the zones write lock for the duration of the call (unless
    /// `skip_lock` is set). Expects HTTP 204.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn submit_change_list(&self, params: SubmitChangeListRequest) -> Result<(), Error> {
        const OP: &str = "submit_change_list";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Zones, params.skip_lock)
            .await;

        debug!(zone = %params.zone, "submit_change_list");
        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!(
            "/config-dns/v2/changelists/{}/submit",
            params.zone
        ))?;
        let response = self
            .send(OP, self.request(Method::POST, url).json(&""))
            .await?;
        self.expect_status(OP, response, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// Download a zone's master file in presentation format.
    ///
    /// Sends `Accept: text/dns` and returns the raw body. Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_master_zone_file(
        &self,
        params: GetMasterZoneFileRequest,
    ) -> Result<String, Error> {
        const OP: &str = "get_master_zone_file";
        debug!(zone = %params.zone, "get_master_zone_file");

        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/zone-file", params.zone))?;
        let request = self.request(Method::GET, url).header("Accept", "text/dns");
        let response = self.send(OP, request).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        response
            .text()
            .await
            .map_err(|source| Error::Transport { op: OP, source })
    }

    /// Upload a master zone file, replacing the zone's contents.
    ///
    /// Sends the file verbatim with `Content-Type: text/dns`. Holds the zones
    /// write lock for the duration of the call (unless `skip_lock` is set).
    /// Expects HTTP 204.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn post_master_zone_file(
        &self,
        params: PostMasterZoneFileRequest,
    ) -> Result<(), Error> {
        const OP: &str = "post_master_zone_file";
        let _guard = self
            .coordinator()
            .acquire(WriteScope::Zones, params.skip_lock)
            .await;

        debug!(zone = %params.zone, bytes = params.file_data.len(), "post_master_zone_file");
        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/zone-file", params.zone))?;
        let request = self
            .request(Method::POST, url)
            .header("Content-Type", "text/dns")
            .body(params.file_data);
        let response = self.send(OP, request).await?;
        self.expect_status(OP, response, StatusCode::NO_CONTENT)
            .await?;
        Ok(())
    }

    /// List the owner names present in a zone.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_zone_names(
        &self,
        params: GetZoneNamesRequest,
    ) -> Result<GetZoneNamesResponse, Error> {
        const OP: &str = "get_zone_names";
        debug!(zone = %params.zone, "get_zone_names");

        require(OP, "zone", &params.zone)?;

        let url = self.url(&format!("/config-dns/v2/zones/{}/names", params.zone))?;
        let response = self.send(OP, self.request(Method::GET, url)).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// List the record types present at one owner name.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] for missing parameters, [`Error::Transport`] /
    /// [`Error::Api`] for request failures.
    pub async fn get_zone_name_types(
        &self,
        params: GetZoneNameTypesRequest,
    ) -> Result<GetZoneNameTypesResponse, Error> {
        const OP: &str = "get_zone_name_types";
        debug!(zone = %params.zone, name = %params.zone_name, "get_zone_name_types");

        require(OP, "zone", &params.zone)?;
        require(OP, "zone name", &params.zone_name)?;

        let url = self.url(&format!(
            "/config-dns/v2/zones/{}/names/{}/types",
            params.zone, params.zone_name
        ))?;
        let response = self.send(OP, self.request(Method::GET, url)).await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }

    /// Report the DNSSEC status of one or more zones.
    ///
    /// Expects HTTP 200.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] if the zone list is empty, [`Error::Transport`]
    /// / [`Error::Api`] for request failures.
    pub async fn get_zones_dnssec_status(
        &self,
        params: GetZonesDnssecStatusRequest,
    ) -> Result<GetZonesDnssecStatusResponse, Error> {
        const OP: &str = "get_zones_dnssec_status";
        debug!(count = params.zones.len(), "get_zones_dnssec_status");

        if params.zones.is_empty() {
            return Err(Error::validation(OP, "zones list is empty"));
        }

        let url = self.url("/config-dns/v2/zones/dns-sec-status")?;
        let response = self
            .send(OP, self.request(Method::POST, url).json(&params))
            .await?;
        let response = self.expect_status(OP, response, StatusCode::OK).await?;
        self.read_json(OP, response).await
    }
}

#[cfg(test)]
#[path = "zones_tests.rs"]
mod zones_tests;
