// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! RDATA codec: typed decoding and normalization of DNS presentation-format
//! record data.
//!
//! The backend returns each resource record instance as one plain-text,
//! space-delimited string (RFC 1035 presentation format) inside a recordset's
//! `rdata` array. This module converts those strings two ways:
//!
//! - [`parse_rdata`]: decode a type-tagged rdata list into a strongly typed
//!   [`Rdata`] value; [`Rdata::to_field_map`] exposes the legacy string-keyed
//!   map shape at the serialization boundary.
//! - [`normalize_rdata`] / [`process_rdata`]: per-value rewrites (full IPv6
//!   expansion for AAAA, coordinate padding for LOC, identity otherwise) used
//!   by the record-read path without building field maps.
//!
//! Decoding is total: malformed or short input degrades to zero values,
//! partial fields, or sentinel strings. It never panics and never errors.

use std::collections::{BTreeMap, HashSet};
use std::net::Ipv6Addr;

use tracing::warn;

/// Map view of decoded rdata, keyed by wire field name.
pub type FieldMap = BTreeMap<String, FieldValue>;

/// One interpreted rdata field: integer, string, or ordered string list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Integer-valued field (unparseable tokens decode as 0)
    Int(i64),
    /// String-valued field
    Str(String),
    /// Ordered sequence of strings (the `target` field)
    List(Vec<String>),
}

impl FieldValue {
    fn str(s: impl Into<String>) -> Self {
        FieldValue::Str(s.into())
    }
}

/// Decoded rdata for one recordset, tagged by record type.
///
/// Variants carry the fields the wire schema defines for that type. Types
/// whose schema reads only the first rdata entry leave the remaining entries
/// undecoded, matching the backend contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Rdata {
    /// No rdata entries were supplied
    Empty,
    /// AFSDB: subtype from entry 0, target hosts from every entry
    Afsdb { subtype: i64, targets: Vec<String> },
    /// DNSKEY, first entry only; `key` may contain embedded spaces
    Dnskey {
        flags: i64,
        protocol: i64,
        algorithm: i64,
        key: String,
    },
    /// DS, first entry only; `digest` may contain embedded spaces
    Ds {
        keytag: i64,
        algorithm: i64,
        digest_type: i64,
        digest: String,
    },
    /// HINFO, first entry only
    Hinfo { hardware: String, software: String },
    /// NAPTR, first entry only
    Naptr {
        order: i64,
        preference: i64,
        flags: String,
        service: String,
        regexp: String,
        replacement: String,
    },
    /// NSEC3, first entry only
    Nsec3 {
        algorithm: i64,
        flags: i64,
        iterations: i64,
        salt: String,
        next_hashed_owner_name: String,
        type_bitmaps: String,
    },
    /// NSEC3PARAM, first entry only
    Nsec3Param {
        algorithm: i64,
        flags: i64,
        iterations: i64,
        salt: String,
    },
    /// RP, first entry only
    Rp { mailbox: String, txt: String },
    /// RRSIG, first entry only; `signature` may contain embedded spaces
    Rrsig {
        type_covered: String,
        algorithm: i64,
        labels: i64,
        original_ttl: i64,
        expiration: String,
        inception: String,
        keytag: i64,
        signer: String,
        signature: String,
    },
    /// SRV: scalar priority/weight/port only when identical across entries;
    /// heterogeneous entries keep the raw strings in `targets` instead
    Srv {
        priority: Option<i64>,
        weight: Option<i64>,
        port: Option<i64>,
        targets: Vec<String>,
    },
    /// SSHFP, first entry only
    Sshfp {
        algorithm: i64,
        fingerprint_type: i64,
        fingerprint: String,
    },
    /// SOA, first entry only
    Soa {
        name_server: String,
        email_address: String,
        serial: i64,
        refresh: i64,
        retry: i64,
        expiry: i64,
        nxdomain_ttl: i64,
    },
    /// AKAMAITLC, first entry only
    AkamaiTlc {
        answer_type: String,
        dns_name: String,
    },
    /// CERT, first entry only; field 0 decodes as `type_value` when it
    /// parses as an integer, `type_mnemonic` otherwise
    Cert {
        type_value: Option<i64>,
        type_mnemonic: Option<String>,
        keytag: i64,
        algorithm: i64,
        certificate: String,
    },
    /// TLSA, first entry only
    Tlsa {
        usage: i64,
        selector: i64,
        match_type: i64,
        certificate: String,
    },
    /// SVCB, first entry only; all `None` when the entry has fewer than two
    /// space-delimited segments
    Svcb {
        svc_priority: Option<i64>,
        target_name: Option<String>,
        svc_params: Option<String>,
    },
    /// HTTPS, same shape as SVCB
    Https {
        svc_priority: Option<i64>,
        target_name: Option<String>,
        svc_params: Option<String>,
    },
    /// SPF and TXT: every entry verbatim
    Txt { targets: Vec<String> },
    /// AAAA: every entry rewritten to the fully expanded address form
    Aaaa { targets: Vec<String> },
    /// LOC: every entry rewritten with padded coordinate fields
    Loc { targets: Vec<String> },
    /// Any other record type: every entry verbatim
    Other { targets: Vec<String> },
}

/// Decode a type-tagged rdata list into a typed [`Rdata`] value.
///
/// `record_type` is the wire type tag (e.g. `"AFSDB"`, `"SRV"`); unknown tags
/// fall through to [`Rdata::Other`] with the entries verbatim. An empty
/// `rdata` list yields [`Rdata::Empty`].
///
/// Total and deterministic over arbitrary input: unparseable integer tokens
/// decode as 0, missing tokens as empty strings.
///
/// # Example
///
/// ```rust
/// use edgedns::rdata::{parse_rdata, Rdata};
///
/// let decoded = parse_rdata("AFSDB", &["1 bar.com".to_string()]);
/// assert_eq!(
///     decoded,
///     Rdata::Afsdb { subtype: 1, targets: vec!["bar.com".to_string()] }
/// );
/// ```
#[must_use]
pub fn parse_rdata(record_type: &str, rdata: &[String]) -> Rdata {
    if rdata.is_empty() {
        return Rdata::Empty;
    }

    match record_type {
        "AFSDB" => decode_afsdb(rdata),
        "DNSKEY" => decode_dnskey(rdata),
        "DS" => decode_ds(rdata),
        "HINFO" => decode_hinfo(rdata),
        "NAPTR" => decode_naptr(rdata),
        "NSEC3" => decode_nsec3(rdata),
        "NSEC3PARAM" => decode_nsec3param(rdata),
        "RP" => decode_rp(rdata),
        "RRSIG" => decode_rrsig(rdata),
        "SRV" => decode_srv(rdata),
        "SSHFP" => decode_sshfp(rdata),
        "SOA" => decode_soa(rdata),
        "AKAMAITLC" => decode_akamaitlc(rdata),
        "SPF" | "TXT" => Rdata::Txt {
            targets: rdata.to_vec(),
        },
        "AAAA" => Rdata::Aaaa {
            targets: rdata.iter().map(|v| full_ipv6(v)).collect(),
        },
        "LOC" => Rdata::Loc {
            targets: rdata.iter().map(|v| pad_coordinates(v)).collect(),
        },
        "CERT" => decode_cert(rdata),
        "TLSA" => decode_tlsa(rdata),
        "SVCB" => {
            let (svc_priority, target_name, svc_params) = decode_svc_fields(&rdata[0]);
            Rdata::Svcb {
                svc_priority,
                target_name,
                svc_params,
            }
        }
        "HTTPS" => {
            let (svc_priority, target_name, svc_params) = decode_svc_fields(&rdata[0]);
            Rdata::Https {
                svc_priority,
                target_name,
                svc_params,
            }
        }
        _ => Rdata::Other {
            targets: rdata.to_vec(),
        },
    }
}

/// Decode a type-tagged rdata list straight to the string-keyed map shape.
///
/// Convenience for `parse_rdata(..).to_field_map()`.
#[must_use]
pub fn parse_rdata_map(record_type: &str, rdata: &[String]) -> FieldMap {
    parse_rdata(record_type, rdata).to_field_map()
}

impl Rdata {
    /// Generic map view of the decoded fields, for serialization and
    /// compatibility with map-shaped consumers.
    ///
    /// Every variant except [`Rdata::Empty`] includes a `target` entry; types
    /// whose schema reads only the first rdata entry report `target` as an
    /// empty list.
    #[must_use]
    pub fn to_field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        match self {
            Rdata::Empty => return map,
            Rdata::Afsdb { subtype, targets } => {
                map.insert("subtype".into(), FieldValue::Int(*subtype));
                map.insert("target".into(), FieldValue::List(targets.clone()));
            }
            Rdata::Dnskey {
                flags,
                protocol,
                algorithm,
                key,
            } => {
                map.insert("flags".into(), FieldValue::Int(*flags));
                map.insert("protocol".into(), FieldValue::Int(*protocol));
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("key".into(), FieldValue::str(key));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Ds {
                keytag,
                algorithm,
                digest_type,
                digest,
            } => {
                map.insert("keytag".into(), FieldValue::Int(*keytag));
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("digest_type".into(), FieldValue::Int(*digest_type));
                map.insert("digest".into(), FieldValue::str(digest));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Hinfo { hardware, software } => {
                map.insert("hardware".into(), FieldValue::str(hardware));
                map.insert("software".into(), FieldValue::str(software));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Naptr {
                order,
                preference,
                flags,
                service,
                regexp,
                replacement,
            } => {
                map.insert("order".into(), FieldValue::Int(*order));
                map.insert("preference".into(), FieldValue::Int(*preference));
                map.insert("flagsnaptr".into(), FieldValue::str(flags));
                map.insert("service".into(), FieldValue::str(service));
                map.insert("regexp".into(), FieldValue::str(regexp));
                map.insert("replacement".into(), FieldValue::str(replacement));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Nsec3 {
                algorithm,
                flags,
                iterations,
                salt,
                next_hashed_owner_name,
                type_bitmaps,
            } => {
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("flags".into(), FieldValue::Int(*flags));
                map.insert("iterations".into(), FieldValue::Int(*iterations));
                map.insert("salt".into(), FieldValue::str(salt));
                map.insert(
                    "next_hashed_owner_name".into(),
                    FieldValue::str(next_hashed_owner_name),
                );
                map.insert("type_bitmaps".into(), FieldValue::str(type_bitmaps));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Nsec3Param {
                algorithm,
                flags,
                iterations,
                salt,
            } => {
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("flags".into(), FieldValue::Int(*flags));
                map.insert("iterations".into(), FieldValue::Int(*iterations));
                map.insert("salt".into(), FieldValue::str(salt));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Rp { mailbox, txt } => {
                map.insert("mailbox".into(), FieldValue::str(mailbox));
                map.insert("txt".into(), FieldValue::str(txt));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Rrsig {
                type_covered,
                algorithm,
                labels,
                original_ttl,
                expiration,
                inception,
                keytag,
                signer,
                signature,
            } => {
                map.insert("type_covered".into(), FieldValue::str(type_covered));
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("labels".into(), FieldValue::Int(*labels));
                map.insert("original_ttl".into(), FieldValue::Int(*original_ttl));
                map.insert("expiration".into(), FieldValue::str(expiration));
                map.insert("inception".into(), FieldValue::str(inception));
                map.insert("keytag".into(), FieldValue::Int(*keytag));
                map.insert("signer".into(), FieldValue::str(signer));
                map.insert("signature".into(), FieldValue::str(signature));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Srv {
                priority,
                weight,
                port,
                targets,
            } => {
                if let (Some(priority), Some(weight), Some(port)) = (priority, weight, port) {
                    map.insert("priority".into(), FieldValue::Int(*priority));
                    map.insert("weight".into(), FieldValue::Int(*weight));
                    map.insert("port".into(), FieldValue::Int(*port));
                }
                map.insert("target".into(), FieldValue::List(targets.clone()));
            }
            Rdata::Sshfp {
                algorithm,
                fingerprint_type,
                fingerprint,
            } => {
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("fingerprint_type".into(), FieldValue::Int(*fingerprint_type));
                map.insert("fingerprint".into(), FieldValue::str(fingerprint));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Soa {
                name_server,
                email_address,
                serial,
                refresh,
                retry,
                expiry,
                nxdomain_ttl,
            } => {
                map.insert("name_server".into(), FieldValue::str(name_server));
                map.insert("email_address".into(), FieldValue::str(email_address));
                map.insert("serial".into(), FieldValue::Int(*serial));
                map.insert("refresh".into(), FieldValue::Int(*refresh));
                map.insert("retry".into(), FieldValue::Int(*retry));
                map.insert("expiry".into(), FieldValue::Int(*expiry));
                map.insert("nxdomain_ttl".into(), FieldValue::Int(*nxdomain_ttl));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::AkamaiTlc {
                answer_type,
                dns_name,
            } => {
                map.insert("answer_type".into(), FieldValue::str(answer_type));
                map.insert("dns_name".into(), FieldValue::str(dns_name));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Cert {
                type_value,
                type_mnemonic,
                keytag,
                algorithm,
                certificate,
            } => {
                if let Some(value) = type_value {
                    map.insert("type_value".into(), FieldValue::Int(*value));
                }
                if let Some(mnemonic) = type_mnemonic {
                    map.insert("type_mnemonic".into(), FieldValue::str(mnemonic));
                }
                map.insert("keytag".into(), FieldValue::Int(*keytag));
                map.insert("algorithm".into(), FieldValue::Int(*algorithm));
                map.insert("certificate".into(), FieldValue::str(certificate));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Tlsa {
                usage,
                selector,
                match_type,
                certificate,
            } => {
                map.insert("usage".into(), FieldValue::Int(*usage));
                map.insert("selector".into(), FieldValue::Int(*selector));
                map.insert("match_type".into(), FieldValue::Int(*match_type));
                map.insert("certificate".into(), FieldValue::str(certificate));
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Svcb {
                svc_priority,
                target_name,
                svc_params,
            }
            | Rdata::Https {
                svc_priority,
                target_name,
                svc_params,
            } => {
                if let Some(priority) = svc_priority {
                    map.insert("svc_priority".into(), FieldValue::Int(*priority));
                }
                if let Some(name) = target_name {
                    map.insert("target_name".into(), FieldValue::str(name));
                }
                if let Some(params) = svc_params {
                    map.insert("svc_params".into(), FieldValue::str(params));
                }
                map.insert("target".into(), FieldValue::List(Vec::new()));
            }
            Rdata::Txt { targets }
            | Rdata::Aaaa { targets }
            | Rdata::Loc { targets }
            | Rdata::Other { targets } => {
                map.insert("target".into(), FieldValue::List(targets.clone()));
            }
        }
        map
    }
}

/// Normalize one rdata value for `record_type`.
///
/// - `AAAA`: expand to eight lowercase 4-hex-digit groups (no `::`
///   compression); an unparseable address is logged and passed through.
/// - `LOC`: pad altitude/size/precision fields to two decimal places with the
///   `m` suffix; fewer than 12 tokens yields `""`, an unparseable numeric
///   token the `"FAIL"` sentinel.
/// - all other types: identity.
///
/// # Example
///
/// ```rust
/// use edgedns::rdata::normalize_rdata;
///
/// assert_eq!(
///     normalize_rdata("AAAA", "2001:db8::1"),
///     "2001:0db8:0000:0000:0000:0000:0000:0001"
/// );
/// assert_eq!(normalize_rdata("MX", "10 mail.example.com."), "10 mail.example.com.");
/// ```
#[must_use]
pub fn normalize_rdata(record_type: &str, value: &str) -> String {
    match record_type {
        "AAAA" => full_ipv6(value),
        "LOC" => pad_coordinates(value),
        _ => value.to_string(),
    }
}

/// Normalize every value in an rdata list; see [`normalize_rdata`].
///
/// Used by the record-read path to post-process fetched values without
/// building field maps.
#[must_use]
pub fn process_rdata(record_type: &str, rdata: &[String]) -> Vec<String> {
    rdata
        .iter()
        .map(|value| normalize_rdata(record_type, value))
        .collect()
}

// Integer token at `idx`; unparseable or missing tokens decode as 0.
fn int_at(parts: &[&str], idx: usize) -> i64 {
    parts
        .get(idx)
        .and_then(|token| token.parse::<i64>().ok())
        .unwrap_or(0)
}

// String token at `idx`, empty when missing.
fn str_at(parts: &[&str], idx: usize) -> String {
    parts.get(idx).copied().unwrap_or_default().to_string()
}

// Tokens from `idx` onward rejoined with single spaces, for trailing fields
// that may contain embedded whitespace (DNSKEY key, DS digest, RRSIG
// signature).
fn rest_from(parts: &[&str], idx: usize) -> String {
    if parts.len() <= idx {
        return String::new();
    }
    parts[idx..].join(" ")
}

fn decode_afsdb(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    let subtype = int_at(&parts, 0);
    let targets = rdata
        .iter()
        .map(|entry| {
            let parts: Vec<&str> = entry.split(' ').collect();
            str_at(&parts, 1)
        })
        .collect();
    Rdata::Afsdb { subtype, targets }
}

fn decode_dnskey(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Dnskey {
        flags: int_at(&parts, 0),
        protocol: int_at(&parts, 1),
        algorithm: int_at(&parts, 2),
        key: rest_from(&parts, 3),
    }
}

fn decode_ds(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Ds {
        keytag: int_at(&parts, 0),
        algorithm: int_at(&parts, 1),
        digest_type: int_at(&parts, 2),
        digest: rest_from(&parts, 3),
    }
}

fn decode_hinfo(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Hinfo {
        hardware: str_at(&parts, 0),
        software: str_at(&parts, 1),
    }
}

fn decode_naptr(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Naptr {
        order: int_at(&parts, 0),
        preference: int_at(&parts, 1),
        flags: str_at(&parts, 2),
        service: str_at(&parts, 3),
        regexp: str_at(&parts, 4),
        replacement: str_at(&parts, 5),
    }
}

fn decode_nsec3(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Nsec3 {
        algorithm: int_at(&parts, 0),
        flags: int_at(&parts, 1),
        iterations: int_at(&parts, 2),
        salt: str_at(&parts, 3),
        next_hashed_owner_name: str_at(&parts, 4),
        type_bitmaps: str_at(&parts, 5),
    }
}

fn decode_nsec3param(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Nsec3Param {
        algorithm: int_at(&parts, 0),
        flags: int_at(&parts, 1),
        iterations: int_at(&parts, 2),
        salt: str_at(&parts, 3),
    }
}

fn decode_rp(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Rp {
        mailbox: str_at(&parts, 0),
        txt: str_at(&parts, 1),
    }
}

fn decode_rrsig(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Rrsig {
        type_covered: str_at(&parts, 0),
        algorithm: int_at(&parts, 1),
        labels: int_at(&parts, 2),
        original_ttl: int_at(&parts, 3),
        expiration: str_at(&parts, 4),
        inception: str_at(&parts, 5),
        keytag: int_at(&parts, 6),
        signer: str_at(&parts, 7),
        signature: rest_from(&parts, 8),
    }
}

// Priority, weight and port hoist to scalar fields only when every entry
// agrees on all three; otherwise the entries are kept verbatim and the
// per-entry decomposition is skipped entirely.
fn decode_srv(rdata: &[String]) -> Rdata {
    let mut priorities = HashSet::new();
    let mut weights = HashSet::new();
    let mut ports = HashSet::new();
    for entry in rdata {
        let parts: Vec<&str> = entry.split(' ').collect();
        priorities.insert(int_at(&parts, 0));
        weights.insert(int_at(&parts, 1));
        ports.insert(int_at(&parts, 2));
    }

    if priorities.len() == 1 && weights.len() == 1 && ports.len() == 1 {
        let parts: Vec<&str> = rdata[0].split(' ').collect();
        let targets = rdata
            .iter()
            .map(|entry| {
                let parts: Vec<&str> = entry.split(' ').collect();
                str_at(&parts, 3)
            })
            .collect();
        Rdata::Srv {
            priority: Some(int_at(&parts, 0)),
            weight: Some(int_at(&parts, 1)),
            port: Some(int_at(&parts, 2)),
            targets,
        }
    } else {
        Rdata::Srv {
            priority: None,
            weight: None,
            port: None,
            targets: rdata.to_vec(),
        }
    }
}

fn decode_sshfp(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Sshfp {
        algorithm: int_at(&parts, 0),
        fingerprint_type: int_at(&parts, 1),
        fingerprint: str_at(&parts, 2),
    }
}

fn decode_soa(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Soa {
        name_server: str_at(&parts, 0),
        email_address: str_at(&parts, 1),
        serial: int_at(&parts, 2),
        refresh: int_at(&parts, 3),
        retry: int_at(&parts, 4),
        expiry: int_at(&parts, 5),
        nxdomain_ttl: int_at(&parts, 6),
    }
}

fn decode_akamaitlc(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::AkamaiTlc {
        answer_type: str_at(&parts, 0),
        dns_name: str_at(&parts, 1),
    }
}

fn decode_cert(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    let (type_value, type_mnemonic) = match parts.first().and_then(|t| t.parse::<i64>().ok()) {
        Some(value) => (Some(value), None),
        None => (None, Some(str_at(&parts, 0))),
    };
    Rdata::Cert {
        type_value,
        type_mnemonic,
        keytag: int_at(&parts, 1),
        algorithm: int_at(&parts, 2),
        certificate: str_at(&parts, 3),
    }
}

fn decode_tlsa(rdata: &[String]) -> Rdata {
    let parts: Vec<&str> = rdata[0].split(' ').collect();
    Rdata::Tlsa {
        usage: int_at(&parts, 0),
        selector: int_at(&parts, 1),
        match_type: int_at(&parts, 2),
        certificate: str_at(&parts, 3),
    }
}

// SVCB/HTTPS entries split into at most three segments so svc params stay one
// unsplit string. Fewer than two segments leaves every field unset.
fn decode_svc_fields(entry: &str) -> (Option<i64>, Option<String>, Option<String>) {
    let parts: Vec<&str> = entry.splitn(3, ' ').collect();
    if parts.len() < 2 {
        return (None, None, None);
    }
    let svc_priority = parts[0].parse::<i64>().unwrap_or(0);
    let target_name = parts[1].to_string();
    let svc_params = parts.get(2).map(|s| (*s).to_string());
    (Some(svc_priority), Some(target_name), svc_params)
}

/// Expand an IPv6 address to eight lowercase 4-hex-digit groups.
///
/// An input that does not parse as an IPv6 address is logged and returned
/// unchanged rather than silently replaced with garbage.
fn full_ipv6(value: &str) -> String {
    let Ok(addr) = value.parse::<Ipv6Addr>() else {
        warn!(value, "unparseable AAAA rdata, passing through unnormalized");
        return value.to_string();
    };
    let segments = addr.segments();
    segments
        .iter()
        .map(|segment| format!("{segment:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

// Strip `m` markers, reparse and reformat to exactly two decimal places.
// The "FAIL" sentinel for unparseable tokens is inherited wire behavior.
fn pad_value(token: &str) -> String {
    let cleaned: String = token.chars().filter(|c| *c != 'm').collect();
    match cleaned.parse::<f32>() {
        Ok(value) => format!("{value:.2}"),
        Err(_) => "FAIL".to_string(),
    }
}

/// Pad the altitude, size and precision fields of a LOC presentation string.
///
/// The input must carry exactly 12 space-delimited tokens (lat d/m/s/dir,
/// lon d/m/s/dir, altitude, size, horizontal precision, vertical precision);
/// anything shorter yields the empty string.
fn pad_coordinates(value: &str) -> String {
    let tokens: Vec<&str> = value.split(' ').collect();
    if tokens.len() < 12 {
        return String::new();
    }
    format!(
        "{} {} {} {} {} {} {} {} {}m {}m {}m {}m",
        tokens[0],
        tokens[1],
        tokens[2],
        tokens[3],
        tokens[4],
        tokens[5],
        tokens[6],
        tokens[7],
        pad_value(tokens[8]),
        pad_value(tokens[9]),
        pad_value(tokens[10]),
        pad_value(tokens[11]),
    )
}

#[cfg(test)]
#[path = "rdata_tests.rs"]
mod rdata_tests;
