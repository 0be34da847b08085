//! Brreg client against a local stand-in for the registry API.

#![cfg(feature = "server")]

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use maktkart::brreg::{BrregClient, RegistryLookup, SEARCH_PAGE_SIZE};
use maktkart::BrregConfig;

const KNOWN: &str = "886581432";
const FAILING: &str = "500500500";

fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "application/json")
}

async fn enhet(Path(orgnr): Path<String>, headers: HeaderMap) -> Response {
    if !wants_json(&headers) {
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    match orgnr.as_str() {
        KNOWN => Json(json!({
            "organisasjonsnummer": KNOWN,
            "navn": "AKER ASA",
            "organisasjonsform": { "kode": "ASA", "beskrivelse": "Allmennaksjeselskap" },
            "institusjonellSektorkode": { "kode": "2100", "beskrivelse": "Private aksjeselskaper mv." }
        }))
        .into_response(),
        FAILING => (StatusCode::INTERNAL_SERVER_ERROR, "upstream down").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn roller(Path(orgnr): Path<String>) -> Response {
    match orgnr.as_str() {
        KNOWN => Json(json!({
            "rollegrupper": [{
                "type": { "kode": "STYR", "beskrivelse": "Styre" },
                "sistEndret": "2024-05-02",
                "roller": [{
                    "type": { "kode": "LEDE", "beskrivelse": "Styrets leder" },
                    "person": { "navn": { "fornavn": "Kari", "etternavn": "Nordmann" } },
                    "fratradt": false
                }]
            }]
        }))
        .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    let navn = params.get("navn").cloned().unwrap_or_default();
    let size = params.get("size").cloned().unwrap_or_default();
    match navn.as_str() {
        "ingen treff" => Json(json!({ "page": { "size": 20, "totalElements": 0 } })).into_response(),
        "kaputt" => (StatusCode::OK, "<html>not json</html>").into_response(),
        _ => Json(json!({
            "_embedded": {
                "enheter": [{ "organisasjonsnummer": KNOWN, "navn": format!("{navn} (size={size})") }]
            },
            "page": { "size": 20, "totalElements": 1 }
        }))
        .into_response(),
    }
}

async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/api/enheter", get(search))
        .route("/api/enheter/:orgnr", get(enhet))
        .route("/api/enheter/:orgnr/roller", get(roller));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

async fn client() -> BrregClient {
    BrregClient::from_config(&BrregConfig {
        base_url: spawn_upstream().await,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

#[tokio::test]
async fn fetches_enhet_and_keeps_unknown_fields() {
    let client = client().await;
    let enhet = client.fetch_enhet(KNOWN).await.unwrap().unwrap();

    assert_eq!(enhet.navn, "AKER ASA");
    assert!(enhet.other.contains_key("institusjonellSektorkode"));
}

#[tokio::test]
async fn not_found_is_none() {
    let client = client().await;
    assert!(client.fetch_enhet("123456789").await.unwrap().is_none());
    assert!(client.fetch_roller("123456789").await.unwrap().is_none());
}

#[tokio::test]
async fn server_error_is_err() {
    let client = client().await;
    let err = client.fetch_enhet(FAILING).await.unwrap_err();
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn fetches_roller() {
    let client = client().await;
    let roller = client.fetch_roller(KNOWN).await.unwrap().unwrap();

    assert_eq!(roller.rollegrupper.len(), 1);
    assert_eq!(roller.rollegrupper[0].roller[0].rolle_type.kode, "LEDE");
    assert!(roller.rollegrupper[0].other.contains_key("sistEndret"));
}

#[tokio::test]
async fn search_sends_name_and_page_size() {
    let client = client().await;
    let hits = client.search_enheter("Aker & Co").await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].navn, format!("Aker & Co (size={SEARCH_PAGE_SIZE})"));
}

#[tokio::test]
async fn search_without_hits_is_empty() {
    let client = client().await;
    assert!(client.search_enheter("ingen treff").await.unwrap().is_empty());
}

#[tokio::test]
async fn undecodable_body_is_err() {
    let client = client().await;
    assert!(client.search_enheter("kaputt").await.is_err());
}

#[tokio::test]
async fn unreachable_upstream_is_err() {
    let client = BrregClient::from_config(&BrregConfig {
        base_url: "http://127.0.0.1:1/api".to_string(),
        timeout: Duration::from_secs(2),
    })
    .unwrap();
    assert!(client.fetch_enhet(KNOWN).await.is_err());
}
