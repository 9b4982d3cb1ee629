#![allow(clippy::unwrap_used)]
// Integration tests for `NagerClient` using wiremock.

use chrono::NaiveDate;
use serde_json::json;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use holidays_api::{Error, NagerClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, NagerClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&format!("{}/api/v3", server.uri())).unwrap();
    let client = NagerClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

// ── Countries ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_available_countries() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/AvailableCountries"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "countryCode": "AD", "name": "Andorra" },
            { "countryCode": "US", "name": "United States" },
        ])))
        .mount(&server)
        .await;

    let countries = client.available_countries().await.unwrap();

    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].country_code, "AD");
    assert_eq!(countries[1].name, "United States");
}

#[tokio::test]
async fn test_available_countries_http_error_carries_status() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/AvailableCountries"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.available_countries().await.unwrap_err();

    assert!(matches!(err, Error::Http { status: 503, .. }), "got: {err:?}");
    assert!(err.is_transient());
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_available_countries_malformed_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/AvailableCountries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let result = client.available_countries().await;

    assert!(
        matches!(result, Err(ref e) if e.is_decode()),
        "expected Deserialization error, got: {result:?}"
    );
}

// ── Holidays ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_public_holidays() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "date": "2025-01-01",
            "localName": "New Year's Day",
            "name": "New Year's Day",
            "countryCode": "US",
            "fixed": false,
            "global": true,
            "counties": null,
            "launchYear": null,
            "types": ["Public"]
        },
        {
            "date": "2025-04-18",
            "localName": "Good Friday",
            "name": "Good Friday",
            "countryCode": "US",
            "fixed": false,
            "global": false,
            "counties": ["US-CT", "US-NC"],
            "launchYear": null,
            "types": ["Bank", "School"]
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let holidays = client.public_holidays(2025, "US").await.unwrap();

    assert_eq!(holidays.len(), 2);
    assert_eq!(holidays[0].date, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    assert!(holidays[0].global);
    assert!(holidays[0].counties.is_none());
    assert!(!holidays[1].global);
    assert_eq!(
        holidays[1].counties.as_deref(),
        Some(&["US-CT".to_string(), "US-NC".to_string()][..])
    );
    assert_eq!(holidays[1].types, vec!["Bank", "School"]);
}

#[tokio::test]
async fn test_public_holidays_minimal_fields() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/DE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "2025-10-03", "name": "German Unity Day" }
        ])))
        .mount(&server)
        .await;

    let holidays = client.public_holidays(2025, "DE").await.unwrap();

    assert_eq!(holidays.len(), 1);
    assert!(holidays[0].local_name.is_none());
    assert!(holidays[0].global, "global defaults to true when absent");
    assert!(holidays[0].types.is_empty());
}

#[tokio::test]
async fn test_public_holidays_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/ZZ"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let result = client.public_holidays(2025, "ZZ").await;

    match result {
        Err(Error::Http { status, path }) => {
            assert_eq!(status, 404);
            assert_eq!(path, "/api/v3/PublicHolidays/2025/ZZ");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_public_holidays_bad_date_is_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/PublicHolidays/2025/FR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "date": "not-a-date", "name": "Bastille Day" }
        ])))
        .mount(&server)
        .await;

    let result = client.public_holidays(2025, "FR").await;

    match result {
        Err(Error::Deserialization { body, .. }) => assert!(body.contains("not-a-date")),
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
