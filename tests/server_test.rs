// Integration tests for the HTTP API
//
// Drives the router directly with tower's oneshot; no sockets, no real
// gateway. Provider behavior is stubbed through the LlmProvider trait.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use salesdesk::providers::LlmProvider;
use salesdesk::retrieval::SYSTEM_INSTRUCTION;
use salesdesk::server::{
    create_router, AppState, QUESTION_REQUIRED_MSG, SERVICE_UNAVAILABLE_MSG,
};
use salesdesk::store::{DataStore, SalesRep};

/// Echoes the prompt back so tests can inspect what the gateway would see.
struct EchoProvider;

#[async_trait::async_trait]
impl LlmProvider for EchoProvider {
    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(format!("echo:{prompt}"))
    }

    fn name(&self) -> &str {
        "echo"
    }

    fn default_model(&self) -> &str {
        "echo-1"
    }
}

/// Always fails, standing in for a gateway outage.
struct FailingProvider;

#[async_trait::async_trait]
impl LlmProvider for FailingProvider {
    async fn generate(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("connection refused")
    }

    fn name(&self) -> &str {
        "failing"
    }

    fn default_model(&self) -> &str {
        "failing-1"
    }
}

fn sample_store() -> DataStore {
    let reps: Vec<SalesRep> = serde_json::from_str(
        r#"[
            {
                "id": 1,
                "name": "Alice",
                "role": "Senior Sales Executive",
                "region": "North America",
                "skills": ["Negotiation"],
                "deals": [
                    { "client": "Acme Corp", "value": 120000, "status": "Closed Won" }
                ]
            },
            {
                "id": 2,
                "name": "Bob",
                "role": "Sales Representative",
                "region": "Europe",
                "deals": [
                    { "client": "Gamma Inc", "value": 75000, "status": "In Progress" }
                ]
            }
        ]"#,
    )
    .unwrap();
    DataStore::from_reps(reps)
}

fn state_with(provider: Option<Arc<dyn LlmProvider>>) -> Arc<AppState> {
    Arc::new(AppState {
        store: sample_store(),
        provider,
    })
}

async fn get_json(state: Arc<AppState>, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn post_ai(state: Arc<AppState>, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/ai")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = create_router(state).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_sales_reps_returns_dataset() {
    let (status, body) = get_json(state_with(None), "/api/sales-reps").await;

    assert_eq!(status, StatusCode::OK);
    let reps = body.as_array().unwrap();
    assert_eq!(reps.len(), 2);
    assert_eq!(reps[0]["name"], "Alice");
    assert_eq!(reps[1]["deals"][0]["client"], "Gamma Inc");
    // Uninterpreted source fields pass through
    assert_eq!(reps[0]["skills"][0], "Negotiation");
    assert_eq!(reps[1]["deals"][0]["value"], 75000);
}

#[tokio::test]
async fn test_sales_reps_empty_store_returns_empty_array() {
    let state = Arc::new(AppState {
        store: DataStore::default(),
        provider: None,
    });

    let (status, body) = get_json(state, "/api/sales-reps").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_ai_without_provider_returns_unavailable_message() {
    let state = state_with(None);

    // Regardless of question content
    let (status, body) = post_ai(state.clone(), r#"{"question":"Tell me about Alice"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], SERVICE_UNAVAILABLE_MSG);

    let (_, body) = post_ai(state, "{}").await;
    assert_eq!(body["answer"], SERVICE_UNAVAILABLE_MSG);
}

#[tokio::test]
async fn test_ai_empty_body_returns_question_required() {
    let state = state_with(Some(Arc::new(EchoProvider)));

    let (status, body) = post_ai(state, "{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], QUESTION_REQUIRED_MSG);
}

#[tokio::test]
async fn test_ai_empty_question_returns_question_required() {
    let state = state_with(Some(Arc::new(EchoProvider)));

    let (_, body) = post_ai(state, r#"{"question":""}"#).await;
    assert_eq!(body["answer"], QUESTION_REQUIRED_MSG);
}

#[tokio::test]
async fn test_ai_malformed_body_treated_as_missing_question() {
    let state = state_with(Some(Arc::new(EchoProvider)));

    let (status, body) = post_ai(state, "not json at all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["answer"], QUESTION_REQUIRED_MSG);
}

#[tokio::test]
async fn test_ai_matching_question_sends_data_aware_prompt() {
    let state = state_with(Some(Arc::new(EchoProvider)));

    let (_, body) = post_ai(state, r#"{"question":"What deals is Alice working on?"}"#).await;
    let answer = body["answer"].as_str().unwrap();

    assert!(answer.starts_with("echo:"));
    assert!(answer.contains(SYSTEM_INSTRUCTION));
    assert!(answer.contains("\"name\": \"Alice\""));
    assert!(answer.contains("User Question: What deals is Alice working on?"));
}

#[tokio::test]
async fn test_ai_unrelated_question_sends_raw_prompt() {
    let state = state_with(Some(Arc::new(EchoProvider)));

    let (_, body) = post_ai(state, r#"{"question":"What's the weather today?"}"#).await;
    assert_eq!(body["answer"], "echo:What's the weather today?");
}

#[tokio::test]
async fn test_ai_gateway_failure_embeds_error_text() {
    let state = state_with(Some(Arc::new(FailingProvider)));

    let (status, body) = post_ai(state, r#"{"question":"Tell me about Bob"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let answer = body["answer"].as_str().unwrap();
    assert!(answer.starts_with("Error getting response from AI:"));
    assert!(answer.contains("connection refused"));
}
