//! Integration tests for domains, email forwards and pushes.

mod common;

use chrono::NaiveDate;
use dnsimple::rest::resources::{Domain, EmailForward};
use dnsimple::{ApiError, HttpError, ListOptions};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

fn domain_json() -> serde_json::Value {
    json!({
        "id": 181984,
        "account_id": 1385,
        "registrant_id": 2715,
        "name": "example-alpha.com",
        "unicode_name": "example-alpha.com",
        "token": "domain-token",
        "state": "registered",
        "auto_renew": false,
        "private_whois": false,
        "expires_on": "2021-06-05",
        "created_at": "2014-12-06T15:56:55Z",
        "updated_at": "2015-12-09T00:20:56Z"
    })
}

// ============================================================================
// Domains
// ============================================================================

#[tokio::test]
async fn test_list_domains_sorted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/1385/domains"))
        .and(query_param("sort", "expires_on:asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [domain_json()],
            "pagination": {"current_page": 1, "per_page": 30, "total_entries": 1, "total_pages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let options = ListOptions::new().sort("expires_on:asc");
    let response = client
        .domains()
        .list_domains("1385", Some(&options))
        .await
        .unwrap();

    assert!(response.request().url.ends_with("?sort=expires_on%3Aasc"));
    let domain = &response.data().unwrap()[0];
    assert_eq!(domain.registrant_id, Some(2715));
    assert_eq!(domain.expires_on, NaiveDate::from_ymd_opt(2021, 6, 5));
    assert_eq!(domain.state.as_deref(), Some("registered"));
}

#[tokio::test]
async fn test_create_domain_sends_name_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/1385/domains"))
        .and(body_json(json!({"name": "example-alpha.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": domain_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let attributes = Domain {
        id: Some(1),
        name: Some("example-alpha.com".to_string()),
        auto_renew: Some(true),
        ..Default::default()
    };

    let client = client_for(&server);
    let domain = client
        .domains()
        .create_domain("1385", &attributes)
        .await
        .unwrap()
        .into_data()
        .unwrap();

    assert_eq!(domain.id, Some(181_984));
}

#[tokio::test]
async fn test_delete_domain_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/1385/domains/example-alpha.com"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .domains()
        .delete_domain("1385", "example-alpha.com")
        .await
        .unwrap();

    assert!(response.data().is_none());
}

#[tokio::test]
async fn test_reset_domain_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/1385/domains/example-alpha.com/token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": domain_json()})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .domains()
        .reset_domain_token("1385", "example-alpha.com")
        .await
        .unwrap();

    assert!(response.request().body.is_none());
    assert_eq!(
        response.data().unwrap().token.as_deref(),
        Some("domain-token")
    );
}

#[tokio::test]
async fn test_get_domain_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/1385/domains/example.com"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"message": "Authentication failed"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = client
        .domains()
        .get_domain("1385", "example.com")
        .await
        .unwrap_err();

    match error {
        HttpError::Api(ApiError::Response { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "Authentication failed");
        }
        other => panic!("Expected Response error, got: {other:?}"),
    }
}

// ============================================================================
// Email forwards
// ============================================================================

#[tokio::test]
async fn test_email_forward_lifecycle() {
    let server = MockServer::start().await;
    let forward = json!({
        "id": 17706,
        "domain_id": 228963,
        "from": "jim@a-domain.com",
        "to": "jim@another.com",
        "created_at": "2016-02-04T14:26:50Z",
        "updated_at": "2016-02-04T14:26:50Z"
    });

    Mock::given(method("POST"))
        .and(path("/v2/1010/domains/228963/email_forwards"))
        .and(body_json(json!({"from": "jim", "to": "jim@another.com"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": forward})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/1010/domains/228963/email_forwards/17706"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": forward})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/1010/domains/228963/email_forwards/17706"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let attributes = EmailForward {
        from: Some("jim".to_string()),
        to: Some("jim@another.com".to_string()),
        ..Default::default()
    };

    let created = client
        .domains()
        .create_email_forward("1010", "228963", &attributes)
        .await
        .unwrap();
    assert_eq!(created.data().unwrap().id, Some(17706));

    let fetched = client
        .domains()
        .get_email_forward("1010", "228963", "17706")
        .await
        .unwrap();
    assert_eq!(fetched.data().unwrap().from.as_deref(), Some("jim@a-domain.com"));

    client
        .domains()
        .delete_email_forward("1010", "228963", "17706")
        .await
        .unwrap();
}

// ============================================================================
// Pushes
// ============================================================================

#[tokio::test]
async fn test_push_flow() {
    let server = MockServer::start().await;
    let push = json!({
        "id": 1,
        "domain_id": 100,
        "contact_id": null,
        "account_id": 2020,
        "created_at": "2016-08-11T10:16:03Z",
        "updated_at": "2016-08-11T10:16:03Z",
        "accepted_at": null
    });

    Mock::given(method("POST"))
        .and(path("/v2/1010/domains/example.com/pushes"))
        .and(body_json(json!({"new_account_email": "admin@target-account.test"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": push})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/2020/pushes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [push],
            "pagination": {"current_page": 1, "per_page": 30, "total_entries": 1, "total_pages": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v2/2020/pushes/1"))
        .and(body_json(json!({"contact_id": 2})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v2/2020/pushes/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let domains = client.domains();

    let initiated = domains
        .initiate_push(
            "1010",
            "example.com",
            &json!({"new_account_email": "admin@target-account.test"}),
        )
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(initiated.account_id, Some(2020));
    assert!(initiated.contact_id.is_none());
    assert!(initiated.accepted_at.is_none());

    let pending = domains.list_pushes("2020").await.unwrap();
    assert_eq!(pending.data().unwrap().len(), 1);

    let accepted = domains
        .accept_push("2020", "1", &json!({"contact_id": 2}))
        .await
        .unwrap();
    assert_eq!(accepted.status(), 204);

    domains.reject_push("2020", "1").await.unwrap();
}
