//! Integration tests for the request pipeline, using an in-memory transport.
//!
//! These tests inspect the exact wire request the client produces and feed
//! it canned responses, without any network I/O.

mod common;

use std::collections::HashMap;

use dnsimple::{
    AccessToken, ApiError, Client, DnsimpleConfig, Filter, HttpError, HttpMethod, ListOptions,
    TransportError,
};
use serde_json::json;

use common::{scripted_client, ScriptedTransport, TOKEN};

// ============================================================================
// Outgoing requests
// ============================================================================

#[test]
fn test_get_request_has_auth_and_no_body() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"data": []}"#);
    let client = scripted_client(&transport);

    tokio_test::block_on(client.zones().list_zones("1010", None)).unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Get);
    assert_eq!(request.url, "https://api.dnsimple.com/v2/1010/zones");
    assert_eq!(request.headers["Authorization"], format!("Bearer {TOKEN}"));
    assert_eq!(request.headers["Accept"], "application/json");
    assert!(request.headers["User-Agent"].starts_with("dnsimple-rust/"));
    assert!(!request.headers.contains_key("Content-Type"));
    assert!(request.body.is_none());
}

#[test]
fn test_post_request_carries_json_body() {
    let transport = ScriptedTransport::new();
    transport.respond(201, r#"{"data": {"id": 1, "url": "https://webhook.test"}}"#);
    let client = scripted_client(&transport);

    tokio_test::block_on(
        client
            .webhooks()
            .create_webhook("1010", &json!({"url": "https://webhook.test"})),
    )
    .unwrap();

    let request = transport.last_request();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.headers["Content-Type"], "application/json");
    let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"url": "https://webhook.test"}));
}

#[test]
fn test_list_options_are_encoded_in_order() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"data": []}"#);
    let client = scripted_client(&transport);

    let options = ListOptions::new()
        .sort("expires_on:asc")
        .page(2)
        .filter(Filter::new("name_like", "example"));
    tokio_test::block_on(client.domains().list_domains("1010", Some(&options))).unwrap();

    assert_eq!(
        transport.last_request().url,
        "https://api.dnsimple.com/v2/1010/domains?name_like=example&page=2&sort=expires_on%3Aasc"
    );
}

#[test]
fn test_user_agent_prefix_and_missing_token() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"data": {"account": null, "user": null}}"#);
    let config = DnsimpleConfig::builder()
        .user_agent_prefix("my-app/1.0")
        .sandbox()
        .build();
    let client = Client::with_transport(config, transport.clone());

    tokio_test::block_on(client.identity().whoami()).unwrap();

    let request = transport.last_request();
    assert_eq!(request.url, "https://api.sandbox.dnsimple.com/v2/whoami");
    assert!(request.headers["User-Agent"].starts_with("my-app/1.0 | dnsimple-rust/"));
    assert!(!request.headers.contains_key("Authorization"));
}

#[test]
fn test_clones_share_the_transport() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"data": []}"#);
    transport.respond(200, r#"{"data": []}"#);
    let config = DnsimpleConfig::builder()
        .access_token(AccessToken::new(TOKEN).unwrap())
        .build();
    let client = Client::with_transport(config, transport.clone());
    let other = client.clone();

    tokio_test::block_on(async {
        client.accounts().list_accounts().await.unwrap();
        other.tlds().list_tlds(None).await.unwrap();
    });

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "https://api.dnsimple.com/v2/accounts",
            "https://api.dnsimple.com/v2/tlds"
        ]
    );
}

// ============================================================================
// Responses and errors
// ============================================================================

#[test]
fn test_response_metadata_is_kept() {
    let transport = ScriptedTransport::new();
    let mut headers = HashMap::new();
    headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);
    transport.respond_with_headers(200, headers, r#"{"data": {"id": 1, "name": "example.com"}}"#);
    let client = scripted_client(&transport);

    let response = tokio_test::block_on(client.zones().get_zone("1010", "example.com")).unwrap();

    assert_eq!(response.http_response().request_id(), Some("abc-123"));
    assert_eq!(response.request().method, HttpMethod::Get);
    assert!(response.request().body.is_none());
    assert_eq!(response.data().unwrap().name.as_deref(), Some("example.com"));
}

#[test]
fn test_non_json_error_uses_status_line() {
    let transport = ScriptedTransport::new();
    transport.respond(502, "<html>Bad Gateway</html>");
    let client = scripted_client(&transport);

    let error = tokio_test::block_on(client.zones().list_zones("1010", None)).unwrap_err();

    match error {
        HttpError::Api(ApiError::Response { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "502 Bad Gateway");
        }
        other => panic!("Expected Response error, got: {other:?}"),
    }
}

#[test]
fn test_not_found_without_body() {
    let transport = ScriptedTransport::new();
    transport.respond(404, "");
    let client = scripted_client(&transport);

    let error =
        tokio_test::block_on(client.domains().get_domain("1010", "missing.com")).unwrap_err();

    assert!(error.is_not_found());
    match error {
        HttpError::Api(ApiError::NotFound { message }) => assert_eq!(message, "404 Not Found"),
        other => panic!("Expected NotFound, got: {other:?}"),
    }
}

#[test]
fn test_undecodable_success_body() {
    let transport = ScriptedTransport::new();
    transport.respond(200, r#"{"data": {"id": "not-a-number"}}"#);
    let client = scripted_client(&transport);

    let error = tokio_test::block_on(client.zones().get_zone("1010", "example.com")).unwrap_err();

    assert!(matches!(error, HttpError::Deserialize { status: 200, .. }));
}

#[test]
fn test_transport_failure_is_not_an_api_error() {
    let transport = ScriptedTransport::new();
    transport.fail(TransportError::Timeout {
        detail: "operation timed out".to_string(),
    });
    let client = scripted_client(&transport);

    let error = tokio_test::block_on(client.accounts().list_accounts()).unwrap_err();

    assert!(!error.is_not_found());
    assert!(matches!(
        error,
        HttpError::Transport(TransportError::Timeout { .. })
    ));
}

#[test]
fn test_whitespace_body_is_empty_payload() {
    let transport = ScriptedTransport::new();
    transport.respond(200, "  \n");
    let client = scripted_client(&transport);

    let response =
        tokio_test::block_on(client.registrar().enable_auto_renewal("1010", "example.com"))
            .unwrap();

    assert!(response.data().is_none());
    assert_eq!(transport.last_request().method, HttpMethod::Put);
}
