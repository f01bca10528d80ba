//! HTTP-level tests for the mock agent endpoints
//!
//! Requests go through the real route table in-process via `oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::Value;
use theioptera_backend::agents::AgentKind;
use theioptera_backend::api::router;
use tower::ServiceExt;

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let resp = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn confidence(body: &Value) -> f64 {
    body["confidence"].as_f64().unwrap()
}

#[tokio::test]
async fn test_health_returns_200() {
    let (status, body) = get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_thesis_default_scenario() {
    let (status, body) = get_json("/api/thesis?q=default").await;
    assert_eq!(status, StatusCode::OK);

    let confidence = confidence(&body);
    assert!((0.70..=0.95).contains(&confidence), "confidence {}", confidence);
    assert_eq!(body["input_used"], "default");
    assert!(body["result"].as_str().unwrap().contains("default"));
}

#[tokio::test]
async fn test_missing_and_empty_query_default() {
    for uri in ["/api/trend", "/api/trend?q="] {
        let (status, body) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["input_used"], "default");
    }
}

#[tokio::test]
async fn test_query_is_url_decoded() {
    let (_, body) = get_json("/api/summarize?q=tau%20%26%20amyloid%20%C3%A9").await;
    assert_eq!(body["input_used"], "tau & amyloid é");
    assert!(body["result"]
        .as_str()
        .unwrap()
        .contains("tau & amyloid é"));
}

#[tokio::test]
async fn test_every_endpoint_honours_base_contract() {
    for kind in AgentKind::ALL {
        let (low, high) = kind.confidence_range();
        for _ in 0..20 {
            let (status, body) = get_json(&format!("{}?q=neuroinflammation", kind.endpoint())).await;
            assert_eq!(status, StatusCode::OK, "{}", kind);

            let confidence = confidence(&body);
            assert!(
                (low..=high).contains(&confidence),
                "{} confidence {} outside [{}, {}]",
                kind,
                confidence,
                low,
                high
            );
            assert_eq!(body["input_used"], "neuroinflammation");
            assert!(body["warnings"].is_array());
            assert!(body["sources"].is_array());
            assert!(body["result"]
                .as_str()
                .unwrap()
                .contains("neuroinflammation"));
        }
    }
}

#[tokio::test]
async fn test_extended_payload_fields() {
    let (_, evidence) = get_json("/api/evidence?q=statins").await;
    assert!(evidence["supporting"].is_array());
    assert!(evidence["opposing"].is_array());
    assert_eq!(evidence["supporting"][0]["stance"], "support");

    let (_, map) = get_json("/api/map?q=statins").await;
    assert_eq!(map["format"], "mermaid");
    assert!(map["map"].as_str().unwrap().starts_with("graph TD"));

    let (_, thinking) = get_json("/api/thinking?q=statins").await;
    let questions = thinking["questions"].as_array().unwrap();
    assert!((4..=6).contains(&questions.len()));
}

#[tokio::test]
async fn test_malformed_query_is_rejected() {
    let (status, body) = get_json("/api/search?q=a&q=b").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
}

#[tokio::test]
async fn test_agent_catalog() {
    let (status, body) = get_json("/api/agents").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 9);

    let (status, body) = get_json("/api/agents/map").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Map Agent");
    assert_eq!(body["confidence_min"], 0.85);

    let (status, _) = get_json("/api/agents/oracle").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
