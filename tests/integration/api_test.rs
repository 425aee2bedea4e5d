//! Integration tests for the HTTP API

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use edge_engine::api::{self, AppState, ComputeResponse};
use edge_engine::config::EngineConfig;
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower::ServiceExt;

fn filtering_config() -> EngineConfig {
    EngineConfig {
        threshold: dec!(2.0),
        reject_non_positive_prices: true,
    }
}

async fn post_json(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/compute")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_raw(app: axum::Router, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/compute")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn default_app() -> axum::Router {
    api::router(AppState::new(EngineConfig::default()))
}

#[tokio::test]
async fn test_missing_match_key_scores_empty_match() {
    let (status, body) = post_json(default_app(), json!({"candidates": []})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signals": []}));

    let (status, body) = post_raw(default_app(), "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signals": []}));
}

#[tokio::test]
async fn test_candidate_missing_fields_default() {
    // offered defaults to 0, which drags the mean down for the priced quote
    let body = json!({"match": {"id": "m", "candidates": [
        {"bookmaker": "a", "team": "A"},
        {"team": "A", "offered": 2.0}
    ]}});
    let (status, body) = post_json(default_app(), body).await;

    assert_eq!(status, StatusCode::OK);
    let signals = body["signals"].as_array().unwrap();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0]["bookmaker"], "");
    assert_eq!(signals[0]["fair"], 1.0);
    assert_eq!(signals[0]["edgePercent"], 100.0);
}

#[tokio::test]
async fn test_trailing_data_after_request_ignored() {
    let (status, body) = post_raw(
        default_app(),
        r#"{"match":{"id":"m","candidates":[{"bookmaker":"a","team":"A","offered":2}]}} {"x":1}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signals": []}));
}

#[tokio::test]
async fn test_empty_body_is_bad_request() {
    let (status, body) = post_raw(default_app(), "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad json");
}

#[tokio::test]
async fn test_string_price_is_bad_request() {
    let body = json!({"match": {"id": "m", "candidates": [
        {"bookmaker": "a", "team": "A", "offered": "2.2"}
    ]}});
    let (status, body) = post_json(default_app(), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad json");
}

#[tokio::test]
async fn test_unrepresentable_prices_are_bad_request() {
    for raw in [
        r#"{"match":{"id":"m","candidates":[{"bookmaker":"a","team":"A","offered":1e-30}]}}"#,
        r#"{"match":{"id":"m","candidates":[{"bookmaker":"a","team":"A","offered":1e29}]}}"#,
    ] {
        let (status, body) = post_raw(default_app(), raw).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(body["error"], "bad json");
    }
}

#[tokio::test]
async fn test_null_price_reads_as_zero() {
    let (status, body) = post_raw(
        default_app(),
        r#"{"match":{"id":"m","candidates":[{"bookmaker":"a","team":"A","offered":null}]}}"#,
    )
    .await;

    // lone zero quote: fair price 0, no edge defined
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signals": []}));
}

#[tokio::test]
async fn test_filter_rejects_non_positive_price() {
    let app = api::router(AppState::new(filtering_config()));
    let body = json!({"match": {"id": "m", "candidates": [
        {"bookmaker": "a", "team": "A", "offered": 2.0},
        {"bookmaker": "b", "team": "A", "offered": -1.5}
    ]}});
    let (status, body) = post_json(app, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "candidate 1 has non-positive offered price -1.5"
    );
}

#[tokio::test]
async fn test_filter_passes_valid_match() {
    let app = api::router(AppState::new(filtering_config()));
    let body = json!({"match": {"id": "m", "candidates": [
        {"bookmaker": "a", "team": "A", "offered": 1.9},
        {"bookmaker": "b", "team": "A", "offered": 2.2}
    ]}});
    let (status, body) = post_json(app, body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["signals"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_garbage_prices_scored_when_filter_disabled() {
    let app = api::router(AppState::new(EngineConfig {
        threshold: dec!(-1000),
        reject_non_positive_prices: false,
    }));
    let body = json!({"match": {"id": "m", "candidates": [
        {"bookmaker": "a", "team": "A", "offered": 1},
        {"bookmaker": "b", "team": "A", "offered": -1}
    ]}});
    let (status, body) = post_json(app, body).await;

    // zero fair price: no edge is defined for anyone
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"signals": []}));
}

#[tokio::test]
async fn test_live_server_round_trip() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel::<()>();

    let server = tokio::spawn(api::serve_on(
        listener,
        AppState::new(EngineConfig {
            threshold: dec!(1),
            reject_non_positive_prices: false,
        }),
        async {
            let _ = rx.await;
        },
    ));

    let client = reqwest::Client::new();

    let health: Value = client
        .get(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health, json!({"status": "ok", "service": "edge-engine"}));

    let response = client
        .post(format!("http://{addr}/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .post(format!("http://{addr}/compute"))
        .json(&json!({"match": {"id": "m1", "candidates": [
            {"bookmaker": "a", "team": "A", "offered": 1.9},
            {"bookmaker": "b", "team": "A", "offered": 2.2}
        ]}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: ComputeResponse = response.json().await.unwrap();
    assert_eq!(body.signals.len(), 1);
    assert_eq!(body.signals[0].match_id, "m1");
    assert_eq!(body.signals[0].edge_percent, dec!(7.32));
    assert_eq!(body.signals[0].fair, dec!(2.05));

    let response = client
        .put(format!("http://{addr}/compute"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);

    tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
