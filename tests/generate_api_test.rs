//! NexoraClient endpoint tests using wiremock.
//!
//! Verify the request path and payload key per mode, result extraction,
//! and the collapse of failures into a single user-visible message.

use nexora::api::{ApiError, NexoraClient, GENERIC_ERROR};
use nexora::modes::Mode;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NexoraClient {
    NexoraClient::with_base_url(server.uri())
}

#[tokio::test]
async fn test_plan_request_shape_and_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/plan"))
        .and(body_json(serde_json::json!({"goal": "Launch a startup"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"plan": "# Hello"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .generate(Mode::Plan, "Launch a startup")
        .await;
    assert_eq!(result.unwrap(), "# Hello");
}

#[tokio::test]
async fn test_blog_uses_topic_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/blog"))
        .and(body_json(serde_json::json!({"topic": "AI in 2025"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"blog": "## Draft"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server).generate(Mode::Blog, "AI in 2025").await;
    assert_eq!(result.unwrap(), "## Draft");
}

#[tokio::test]
async fn test_research_uses_query_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/research"))
        .and(body_json(serde_json::json!({"query": "EV trends"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"research": "- trend"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .generate(Mode::Research, "EV trends")
        .await;
    assert_eq!(result.unwrap(), "- trend");
}

#[tokio::test]
async fn test_structured_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(serde_json::json!({"error": "Rate limited"})),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(Mode::Plan, "goal")
        .await
        .unwrap_err();
    match &err {
        ApiError::Server { status, message } => {
            assert_eq!(*status, 429);
            assert_eq!(message, "Rate limited");
        }
        other => panic!("expected server error, got {other:?}"),
    }
    assert_eq!(err.user_message(), "Rate limited");
}

#[tokio::test]
async fn test_failure_without_body_uses_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(Mode::Plan, "goal")
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), GENERIC_ERROR);
}

#[tokio::test]
async fn test_success_without_mode_key_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(Mode::Plan, "goal")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingResult(Mode::Plan)));
    assert_eq!(err.user_message(), GENERIC_ERROR);
}

#[tokio::test]
async fn test_transport_failure_collapses_to_generic() {
    let client = NexoraClient::with_base_url("http://127.0.0.1:59999/api".to_string());
    let err = client.generate(Mode::Blog, "topic").await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.user_message(), GENERIC_ERROR);
}
