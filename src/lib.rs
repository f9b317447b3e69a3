// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # Edgedns - Client for the hosted Edge DNS management API
//!
//! Edgedns is an async Rust client for a hosted authoritative DNS management
//! service: zone and recordset CRUD over HTTPS, plus the rdata handling the
//! service's presentation format requires.
//!
//! ## Overview
//!
//! This library provides:
//!
//! - Typed request/response models for zones, records and bulk recordsets
//! - An rdata codec decoding presentation-format strings into per-type field
//!   maps, and normalizing values (IPv6 expansion, LOC padding) for display
//! - Client-side write serialization so concurrent mutations never race the
//!   backend's per-zone serial number
//!
//! ## Modules
//!
//! - [`client`] - HTTP execution context and the API entry point
//! - [`coordinator`] - Write serialization for mutating calls
//! - [`rdata`] - Presentation-format rdata decoding and normalization
//! - [`records`] - Single-recordset operations
//! - [`recordsets`] - Bulk recordset operations and paged listing
//! - [`zones`] - Zone lifecycle, changelists, zone files, DNSSEC status
//! - [`error`] - Error type and RFC 7807 problem-details decoding
//!
//! ## Example
//!
//! ```rust,no_run
//! use edgedns::client::Client;
//! use edgedns::records::{CreateRecordRequest, RecordBody};
//!
//! # async fn example() -> Result<(), edgedns::error::Error> {
//! let client = Client::new("https://dns.api.example.net")?.with_token("token");
//!
//! client
//!     .create_record(CreateRecordRequest {
//!         zone: "example.com".into(),
//!         record: RecordBody {
//!             name: "www.example.com".into(),
//!             record_type: "A".into(),
//!             ttl: 300,
//!             active: true,
//!             target: vec!["192.0.2.1".into()],
//!         },
//!         skip_lock: false,
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod coordinator;
pub mod error;
pub mod rdata;
pub mod records;
pub mod recordsets;
pub mod zones;

pub use client::Client;
pub use coordinator::{MutationCoordinator, WriteScope};
pub use error::{ApiProblem, Error};
pub use rdata::{parse_rdata, parse_rdata_map, process_rdata, FieldMap, FieldValue, Rdata};
