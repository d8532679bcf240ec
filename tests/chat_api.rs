// tests/chat_api.rs
// Endpoint adapter tests over the real router, with the completion
// capability replaced by a scripted double.

use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use viva::api::http::app_router;
use viva::llm::{CompletionProvider, CompletionRequest};
use viva::persona::{PersonaPreset, CANDIDATE_ANSWERS};
use viva::relay::FALLBACK_SYSTEM_PROMPT;
use viva::state::AppState;

/// Scripted completion capability; records every request it receives.
struct ScriptedProvider {
    calls: Mutex<Vec<CompletionRequest>>,
    response: Result<String, String>,
}

impl ScriptedProvider {
    fn succeeding(text: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Ok(text.to_string()),
        })
    }

    fn failing(detail: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            response: Err(detail.to_string()),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn complete(&self, request: CompletionRequest) -> anyhow::Result<String> {
        self.calls.lock().unwrap().push(request);
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(detail) => Err(anyhow!("{}", detail)),
        }
    }
}

fn test_app(provider: Arc<ScriptedProvider>) -> Router {
    let state = Arc::new(AppState::with_provider(provider));
    app_router(state, "public")
}

async fn post_chat(app: &Router, payload: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn chat_returns_provider_text() {
    let provider = ScriptedProvider::succeeding("Hello there.");
    let app = test_app(provider.clone());

    let (status, body) = post_chat(&app, json!({ "message": "Say hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "Hello there." }));
}

#[tokio::test]
async fn chat_trims_provider_output() {
    let provider = ScriptedProvider::succeeding("  Hi!  ");
    let app = test_app(provider.clone());

    let (status, body) = post_chat(&app, json!({ "message": "Say hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "text": "Hi!" }));
}

#[tokio::test]
async fn chat_sends_system_then_user() {
    let provider = ScriptedProvider::succeeding("ok");
    let app = test_app(provider.clone());

    let payload = json!({
        "message": "What's your superpower?",
        "persona": { "system": "Be brief." }
    });
    let (status, _) = post_chat(&app, payload).await;
    assert_eq!(status, StatusCode::OK);

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    let messages = &calls[0].messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, "system");
    assert_eq!(messages[0].content, "Be brief.");
    assert_eq!(messages[1].role, "user");
    assert_eq!(messages[1].content, "What's your superpower?");
}

#[tokio::test]
async fn chat_accepts_client_resolved_default_persona() {
    let provider = ScriptedProvider::succeeding("ok");
    let app = test_app(provider.clone());

    // The shipped client resolves its preset before sending.
    let persona = PersonaPreset::parse(Some("anything-else")).resolve();
    let (status, _) = post_chat(
        &app,
        json!({ "message": "Tell me your life story", "persona": persona }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // The adapter forwards the resolved persona verbatim; the default
    // prompt carries all five canned answers.
    let calls = provider.calls.lock().unwrap();
    let system = &calls[0].messages[0].content;
    assert!(system.contains(CANDIDATE_ANSWERS.life_story));
    assert!(system.contains(CANDIDATE_ANSWERS.superpower));
    assert!(system.contains(CANDIDATE_ANSWERS.top_growth));
    assert!(system.contains(CANDIDATE_ANSWERS.misconception));
    assert!(system.contains(CANDIDATE_ANSWERS.push_boundaries));
}

#[tokio::test]
async fn chat_falls_back_when_persona_missing_or_empty() {
    let provider = ScriptedProvider::succeeding("ok");
    let app = test_app(provider.clone());

    let (status, _) = post_chat(&app, json!({ "message": "hi" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = post_chat(&app, json!({ "message": "hi", "persona": { "system": "" } })).await;
    assert_eq!(status, StatusCode::OK);

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls[0].messages[0].content, FALLBACK_SYSTEM_PROMPT);
    assert_eq!(calls[1].messages[0].content, FALLBACK_SYSTEM_PROMPT);
}

#[tokio::test]
async fn missing_message_is_rejected_without_provider_call() {
    let provider = ScriptedProvider::succeeding("ok");
    let app = test_app(provider.clone());

    let (status, body) = post_chat(&app, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "message is required" }));

    let (status, body) = post_chat(&app, json!({ "message": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "message is required" }));

    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_maps_to_500() {
    let provider = ScriptedProvider::failing("auth: invalid api key");
    let app = test_app(provider.clone());

    let (status, body) = post_chat(&app, json!({ "message": "hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.get("error").is_some_and(Value::is_string));
    assert!(body.get("text").is_none());
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("auth: invalid api key"));
}

#[tokio::test]
async fn repeated_requests_keep_status_category() {
    let provider = ScriptedProvider::succeeding("Hello there.");
    let app = test_app(provider.clone());
    let payload = json!({ "message": "Say hi" });

    let (first, _) = post_chat(&app, payload.clone()).await;
    let (second, _) = post_chat(&app, payload).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_json_is_a_client_error() {
    let provider = ScriptedProvider::succeeding("ok");
    let app = test_app(provider.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not:json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
    assert_eq!(provider.call_count(), 0);
}

#[tokio::test]
async fn health_is_ok_regardless_of_provider() {
    // Even a failing provider never touches the liveness path.
    let provider = ScriptedProvider::failing("provider down");
    let app = test_app(provider.clone());

    let request = Request::builder()
        .method("GET")
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(provider.call_count(), 0);
}
