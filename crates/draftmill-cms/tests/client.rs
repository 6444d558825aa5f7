//! Integration tests for `CmsClient` using wiremock HTTP mocks.

use draftmill_core::NewDocument;
use draftmill_cms::{CmsClient, CmsError};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_document(publish_now: bool) -> NewDocument {
    let mut metadata = serde_json::Map::new();
    metadata.insert("draftmill_content_id".to_string(), serde_json::json!(41));
    metadata.insert("draftmill_campaign_id".to_string(), serde_json::json!(7));

    NewDocument {
        title: "Solar Panels Explained".to_string(),
        body: "<p>Body</p>".to_string(),
        publish_now,
        author_id: Some(3),
        category_ids: vec![5],
        meta_description: Some("A short summary.".to_string()),
        metadata,
    }
}

#[tokio::test]
async fn create_post_returns_document_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(body_partial_json(serde_json::json!({
            "title": "Solar Panels Explained",
            "status": "publish",
            "author": 3,
            "categories": [5],
            "meta": { "draftmill_content_id": 41, "draftmill_campaign_id": 7 }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 982 })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), None, 30).expect("client should build");
    let id = client
        .create_post(&test_document(true))
        .await
        .expect("should create post");

    assert_eq!(id, 982);
}

#[tokio::test]
async fn create_post_maps_draft_mode_to_draft_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(body_partial_json(serde_json::json!({ "status": "draft" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 7 })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), None, 30).expect("client should build");
    let id = client
        .create_post(&test_document(false))
        .await
        .expect("should create draft");

    assert_eq!(id, 7);
}

#[tokio::test]
async fn create_post_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .and(header("authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": 1 })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), Some("sekrit"), 30).expect("client should build");
    client
        .create_post(&test_document(true))
        .await
        .expect("authorized request should succeed");
}

#[tokio::test]
async fn create_post_surfaces_api_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": "rest_cannot_create",
            "message": "Sorry, you are not allowed to create posts."
        })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), None, 30).expect("client should build");
    let result = client.create_post(&test_document(true)).await;

    match result {
        Err(CmsError::Api { status, message }) => {
            assert_eq!(status, 403);
            assert!(message.contains("not allowed"), "got message: {message}");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn create_post_missing_id_is_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wp-json/wp/v2/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "ok": true })))
        .mount(&server)
        .await;

    let client = CmsClient::new(&server.uri(), None, 30).expect("client should build");
    let result = client.create_post(&test_document(true)).await;

    assert!(
        matches!(result, Err(CmsError::Deserialize { .. })),
        "got: {result:?}"
    );
}
