//! Index provisioning tests.
//!
//! # Invariants
//! - An existing index is never POSTed again
//! - A type mismatch is reported, not "fixed"

mod common;

use common::*;
use sst_client::IndexKind;
use sst_client::provision::{IndexOutcome, create_index};

async fn mount_index_list(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(ns("data/indexes")))
        .respond_with(ResponseTemplate::new(200).set_body_json(entries(body)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_creates_absent_event_index() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;
    mount_index_list(&server, json!([{"name": "main", "content": {"datatype": "event"}}])).await;

    Mock::given(method("POST"))
        .and(path(ns("data/indexes")))
        .and(body_string_contains("name=otel"))
        .respond_with(created())
        .expect(1)
        .mount(&server)
        .await;

    let outcome = create_index(&mut client, "otel", IndexKind::Event).await.unwrap();
    assert_eq!(outcome, IndexOutcome::Created);

    let posts = server.received_requests().await.unwrap();
    let post = posts.iter().find(|r| r.method.as_str() == "POST" && r.url.path() == ns("data/indexes")).unwrap();
    assert!(!String::from_utf8_lossy(&post.body).contains("datatype"));
}

#[tokio::test]
async fn test_metric_index_sends_datatype() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;
    mount_index_list(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path(ns("data/indexes")))
        .and(body_string_contains("name=otel_metrics"))
        .and(body_string_contains("datatype=metric"))
        .respond_with(created())
        .expect(1)
        .mount(&server)
        .await;

    let outcome = create_index(&mut client, "otel_metrics", IndexKind::Metric)
        .await
        .unwrap();
    assert_eq!(outcome, IndexOutcome::Created);
}

#[tokio::test]
async fn test_existing_index_is_not_posted() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;
    mount_index_list(&server, json!([{"name": "otel", "content": {"datatype": "event"}}])).await;

    Mock::given(method("POST"))
        .and(path(ns("data/indexes")))
        .respond_with(created())
        .expect(0)
        .mount(&server)
        .await;

    let outcome = create_index(&mut client, "otel", IndexKind::Event).await.unwrap();
    assert_eq!(outcome, IndexOutcome::AlreadyExists);
}

#[tokio::test]
async fn test_kind_mismatch_is_reported() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;
    mount_index_list(
        &server,
        json!([{"name": "otel_metrics", "content": {"datatype": "event"}}]),
    )
    .await;

    Mock::given(method("POST"))
        .and(path(ns("data/indexes")))
        .respond_with(created())
        .expect(0)
        .mount(&server)
        .await;

    let outcome = create_index(&mut client, "otel_metrics", IndexKind::Metric)
        .await
        .unwrap();
    assert_eq!(
        outcome,
        IndexOutcome::KindMismatch {
            existing: IndexKind::Event,
            requested: IndexKind::Metric,
        }
    );
}

#[tokio::test]
async fn test_create_failure_names_the_index() {
    let server = MockServer::start().await;
    let mut client = client(&server).await;
    mount_index_list(&server, json!([])).await;

    Mock::given(method("POST"))
        .and(path(ns("data/indexes")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "messages": [{"type": "ERROR", "text": "Argument \"datatype\" is not supported"}]
        })))
        .mount(&server)
        .await;

    let err = create_index(&mut client, "otel", IndexKind::Event)
        .await
        .unwrap_err();
    let text = err.to_string();
    assert!(text.contains("Failed to create index 'otel'"), "{text}");
    assert!(text.contains("datatype"), "{text}");
}
