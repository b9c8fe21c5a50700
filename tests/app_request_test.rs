//! End-to-end request flow through the App: submit against a mock server,
//! receive the completion message, and check the resulting session state.

use nexora::api::{NexoraClient, GENERIC_ERROR};
use nexora::app::{App, AppMessage};
use nexora::markdown::{self, Block};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn app_for(server: &MockServer) -> App {
    App::with_client(NexoraClient::with_base_url(server.uri()))
}

/// Pump one message from the app channel into the app.
async fn pump_one(app: &mut App) {
    let mut rx = app.message_rx.take().expect("receiver available");
    let msg = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("message within timeout")
        .expect("channel open");
    app.message_rx = Some(rx);
    app.handle_message(msg);
}

#[tokio::test]
async fn successful_plan_submission_renders_heading_and_no_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"plan": "# Hello"})),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.insert_str("Launch a tech startup in 2025");
    app.submit();
    assert!(app.session.loading);

    pump_one(&mut app).await;

    assert!(!app.session.loading, "loading indicator must be gone");
    assert_eq!(app.session.error, None, "no error region on success");
    let result = app.session.result.as_deref().expect("result present");

    // The rendered output contains exactly one top-level heading "Hello".
    let doc = markdown::parse(result);
    let headings: Vec<_> = doc
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level: 1, runs } => Some(runs[0].text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(headings, vec!["Hello".to_string()]);
}

#[tokio::test]
async fn failed_submission_shows_structured_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/blog"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(serde_json::json!({"error": "Rate limited"})),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.next_mode(); // Plan -> Blog
    app.insert_str("AI trends");
    app.submit();

    pump_one(&mut app).await;

    assert!(!app.session.loading);
    assert_eq!(app.session.result, None);
    assert_eq!(app.session.error.as_deref(), Some("Rate limited"));
}

#[tokio::test]
async fn failure_without_body_shows_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.insert_str("goal");
    app.submit();

    pump_one(&mut app).await;

    assert_eq!(app.session.error.as_deref(), Some(GENERIC_ERROR));
}

#[tokio::test]
async fn mode_switch_discards_late_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"plan": "# Stale"})),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.insert_str("goal");
    app.submit();
    let stale_generation = app.session.generation;

    // User navigates away while the request is in flight.
    app.next_mode();
    assert!(!app.session.loading);

    // Even if the old completion were delivered, it must be discarded.
    app.handle_message(AppMessage::RequestSucceeded {
        generation: stale_generation,
        markdown: "# Stale".to_string(),
    });
    assert_eq!(app.session.result, None);
    assert_eq!(app.session.error, None);
}

#[tokio::test]
async fn submit_control_disabled_while_loading() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/plan"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"plan": "# Ok"}))
                .set_delay(std::time::Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server).await;
    app.insert_str("goal");
    app.submit();
    let generation = app.session.generation;

    // A second submit while loading is rejected outright.
    app.submit();
    assert_eq!(app.session.generation, generation);

    pump_one(&mut app).await;
    assert!(!app.session.loading);
    assert_eq!(app.session.result.as_deref(), Some("# Ok"));
}
