// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! End-to-end workflow tests against a mock API server.
//!
//! These exercise the full publish cycle a caller would run: create a zone,
//! write records into its changelist, submit, and read the result back. The
//! mock server asserts paths, query routing, headers and body shapes, so a
//! drift in any layer of the client fails here.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use edgedns::client::Client;
use edgedns::coordinator::MutationCoordinator;
use edgedns::records::{CreateRecordRequest, GetRdataRequest, RecordBody};
use edgedns::zones::{
    CreateZoneRequest, GetZoneRequest, SaveChangeListRequest, SubmitChangeListRequest, ZoneCreate,
    ZoneQueryString,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("edgedns=debug")),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn test_full_zone_publish_workflow() {
    init_tracing();
    let server = MockServer::start().await;

    // 1. Create the zone under a contract.
    Mock::given(method("POST"))
        .and(path("/config-dns/v2/zones/"))
        .and(query_param("contractId", "C-1FRYVV3"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "zone": "example.com",
            "type": "PRIMARY",
            "activationState": "NEW"
        })))
        .expect(1)
        .mount(&server)
        .await;

    // 2. Open a changelist for it.
    Mock::given(method("POST"))
        .and(path("/config-dns/v2/changelists/"))
        .and(query_param("zone", "example.com"))
        .and(body_json(json!("")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // 3. Add a record.
    Mock::given(method("POST"))
        .and(path("/config-dns/v2/zones/example.com/names/www.example.com/types/A"))
        .and(body_json(json!({
            "name": "www.example.com",
            "type": "A",
            "ttl": 300,
            "active": true,
            "rdata": ["192.0.2.1"]
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    // 4. Submit the changelist.
    Mock::given(method("POST"))
        .and(path("/config-dns/v2/changelists/example.com/submit"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // 5. Read the zone and the record back.
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zone": "example.com",
            "type": "PRIMARY",
            "activationState": "ACTIVE"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/example.com/recordsets"))
        .and(query_param("types", "A"))
        .and(query_param("showAll", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "recordsets": [
                {"name": "www.example.com", "type": "A", "ttl": 300, "rdata": ["192.0.2.1"]}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap().with_token("test-token");

    client
        .create_zone(CreateZoneRequest {
            create_zone: ZoneCreate {
                zone: "example.com".into(),
                zone_type: "PRIMARY".into(),
                contract_id: "C-1FRYVV3".into(),
                ..ZoneCreate::default()
            },
            zone_query_string: ZoneQueryString {
                contract: "C-1FRYVV3".into(),
                group: String::new(),
            },
            skip_lock: false,
        })
        .await
        .expect("create zone");

    client
        .save_change_list(SaveChangeListRequest {
            zone: "example.com".into(),
            skip_lock: false,
        })
        .await
        .expect("save changelist");

    client
        .create_record(CreateRecordRequest {
            zone: "example.com".into(),
            record: RecordBody {
                name: "www.example.com".into(),
                record_type: "A".into(),
                ttl: 300,
                active: true,
                target: vec!["192.0.2.1".into()],
            },
            skip_lock: false,
        })
        .await
        .expect("create record");

    client
        .submit_change_list(SubmitChangeListRequest {
            zone: "example.com".into(),
            skip_lock: false,
        })
        .await
        .expect("submit changelist");

    let zone = client
        .get_zone(GetZoneRequest {
            zone: "example.com".into(),
        })
        .await
        .expect("get zone");
    assert_eq!(zone.activation_state, "ACTIVE");

    let rdata = client
        .get_rdata(GetRdataRequest {
            zone: "example.com".into(),
            name: "www.example.com".into(),
            record_type: "A".into(),
        })
        .await
        .expect("get rdata");
    assert_eq!(rdata, vec!["192.0.2.1"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_record_writes_through_shared_coordinator() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/config-dns/v2/zones/example.com/names/www.example.com/types/TXT",
        ))
        .respond_with(ResponseTemplate::new(201).set_delay(std::time::Duration::from_millis(10)))
        .expect(4)
        .mount(&server)
        .await;

    // Two clients, one coordinator: their writes serialize against each other.
    let coordinator = Arc::new(MutationCoordinator::new());
    let client_a = Arc::new(
        Client::new(&server.uri())
            .unwrap()
            .with_coordinator(Arc::clone(&coordinator)),
    );
    let client_b = Arc::new(
        Client::new(&server.uri())
            .unwrap()
            .with_coordinator(Arc::clone(&coordinator)),
    );

    let mut handles = Vec::new();
    for client in [client_a, client_b] {
        for _ in 0..2 {
            let client = Arc::clone(&client);
            handles.push(tokio::spawn(async move {
                client
                    .create_record(CreateRecordRequest {
                        zone: "example.com".into(),
                        record: RecordBody {
                            name: "www.example.com".into(),
                            record_type: "TXT".into(),
                            ttl: 300,
                            active: true,
                            target: vec!["\"v=spf1 -all\"".into()],
                        },
                        skip_lock: false,
                    })
                    .await
            }));
        }
    }
    for handle in handles {
        handle.await.unwrap().expect("create record");
    }
}
