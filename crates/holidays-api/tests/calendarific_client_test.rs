#![allow(clippy::unwrap_used)]
// Integration tests for `CalendarificClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use holidays_api::calendarific::models::CalendarificStates;
use holidays_api::{CalendarificClient, Error};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup(api_key: Option<&str>) -> (MockServer, CalendarificClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api/v2", server.uri())).unwrap();
    let client = CalendarificClient::with_client(
        reqwest::Client::new(),
        base_url,
        api_key.map(|k| SecretString::from(k.to_string())),
    );
    (server, client)
}

// ── Happy path ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_holidays_unwraps_envelope() {
    let (server, client) = setup(Some("test-key")).await;

    let body = json!({
        "meta": { "code": 200 },
        "response": {
            "holidays": [
                {
                    "name": "New Year's Day",
                    "description": "New Year's Day is the first day of the Gregorian calendar.",
                    "country": { "id": "us", "name": "United States" },
                    "date": {
                        "iso": "2025-01-01",
                        "datetime": { "year": 2025, "month": 1, "day": 1 }
                    },
                    "type": ["National holiday"],
                    "primary_type": "Federal Holiday",
                    "locations": "All",
                    "states": "All"
                },
                {
                    "name": "Lincoln's Birthday",
                    "description": "Observed in some states.",
                    "date": {
                        "iso": "2025-02-12",
                        "datetime": { "year": 2025, "month": 2, "day": 12 }
                    },
                    "type": ["Local holiday"],
                    "locations": "CT, IL",
                    "states": [
                        { "id": 7, "abbrev": "CT", "name": "Connecticut", "exception": null, "iso": "us-ct" },
                        { "id": 14, "abbrev": "IL", "name": "Illinois", "exception": null, "iso": "us-il" }
                    ]
                }
            ]
        }
    });

    Mock::given(method("GET"))
        .and(path("/api/v2/holidays"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("country", "US"))
        .and(query_param("year", "2025"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let holidays = client.holidays("US", 2025).await.unwrap();

    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].name, "New Year's Day");
    assert_eq!(holidays[0].date.iso, "2025-01-01");
    assert_eq!(holidays[0].kinds, vec!["National holiday"]);
    assert_eq!(holidays[0].states, Some(CalendarificStates::All("All".into())));

    match &holidays[1].states {
        Some(CalendarificStates::List(states)) => {
            assert_eq!(states.len(), 2);
            assert_eq!(states[0].name, "Connecticut");
        }
        other => panic!("expected state list, got: {other:?}"),
    }
}

// ── Failure modes ───────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_api_key_fails_without_request() {
    let (server, client) = setup(None).await;

    let result = client.holidays("US", 2025).await;

    assert!(
        matches!(result, Err(Error::MissingApiKey { .. })),
        "expected MissingApiKey, got: {result:?}"
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_meta_error_code_is_provider_error() {
    let (server, client) = setup(Some("bad-key")).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {
                "code": 401,
                "error_type": "auth failed",
                "error_detail": "Missing or invalid api credentials."
            },
            "response": []
        })))
        .mount(&server)
        .await;

    let result = client.holidays("US", 2025).await;

    match result {
        Err(Error::Provider { code, message }) => {
            assert_eq!(code, 401);
            assert_eq!(message, "Missing or invalid api credentials.");
        }
        other => panic!("expected Provider error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_response_shape_is_decode_error() {
    let (server, client) = setup(Some("test-key")).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/holidays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": { "code": 200 },
            "response": { "days": [] }
        })))
        .mount(&server)
        .await;

    let result = client.holidays("US", 2025).await;

    assert!(
        matches!(result, Err(ref e) if e.is_decode()),
        "expected Deserialization error, got: {result:?}"
    );
}

#[tokio::test]
async fn test_http_error_status() {
    let (server, client) = setup(Some("test-key")).await;

    Mock::given(method("GET"))
        .and(path("/api/v2/holidays"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client.holidays("US", 2025).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(
        !err.to_string().contains("test-key"),
        "API key leaked into error message: {err}"
    );
}
