// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `client.rs`

use super::*;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::zones::GetZoneRequest;

#[test]
fn test_new_rejects_invalid_base_url() {
    let result = Client::new("not a url");
    assert!(matches!(result, Err(Error::Url(_))));
}

#[tokio::test]
async fn test_bearer_token_attached_to_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/example.com"))
        .and(header("Authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zone": "example.com",
            "type": "PRIMARY"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap().with_token("sekrit");
    let zone = client
        .get_zone(GetZoneRequest {
            zone: "example.com".into(),
        })
        .await
        .unwrap();
    assert_eq!(zone.zone, "example.com");
}

#[tokio::test]
async fn test_no_token_means_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "zone": "example.com"
        })))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    client
        .get_zone(GetZoneRequest {
            zone: "example.com".into(),
        })
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("Authorization"));
}

#[tokio::test]
async fn test_unexpected_status_decodes_problem_details() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/missing.com"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "type": "https://problems.example.net/dns/error-types/ZONE_NOT_FOUND",
            "title": "Not Found",
            "detail": "zone missing.com does not exist",
            "status": 404
        })))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let err = client
        .get_zone(GetZoneRequest {
            zone: "missing.com".into(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { op, status, problem } => {
            assert_eq!(op, "get_zone");
            assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
            assert_eq!(problem.title.as_deref(), Some("Not Found"));
            assert_eq!(problem.detail.as_deref(), Some("zone missing.com does not exist"));
        }
        other => panic!("expected Error::Api, got {other}"),
    }
}

#[tokio::test]
async fn test_unexpected_status_with_non_json_body_keeps_raw_detail() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/config-dns/v2/zones/example.com"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let err = client
        .get_zone(GetZoneRequest {
            zone: "example.com".into(),
        })
        .await
        .unwrap_err();

    match err {
        Error::Api { problem, .. } => {
            assert_eq!(problem.detail.as_deref(), Some("bad gateway"));
        }
        other => panic!("expected Error::Api, got {other}"),
    }
}

#[tokio::test]
async fn test_connection_failure_surfaces_as_transport() {
    // Reserved TEST-NET-1 address with nothing listening.
    let client = Client::new("http://192.0.2.1:9").unwrap().with_http_client(
        reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(200))
            .build()
            .unwrap(),
    );
    let err = client
        .get_zone(GetZoneRequest {
            zone: "example.com".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport { op: "get_zone", .. }));
}

#[tokio::test]
async fn test_shared_coordinator_is_the_one_configured() {
    let coordinator = std::sync::Arc::new(MutationCoordinator::new());
    let client = Client::new("http://localhost")
        .unwrap()
        .with_coordinator(std::sync::Arc::clone(&coordinator));
    assert!(std::sync::Arc::ptr_eq(client.coordinator(), &coordinator));
}
