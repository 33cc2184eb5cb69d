// Request handlers for the two public endpoints
//
// Every AI-endpoint outcome, including failures, is a 200 response with a
// JSON answer field; the frontend renders whatever lands there.

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppState;
use crate::retrieval::{build_prompt, retrieve_context};
use crate::store::SalesRep;

/// Answer when no Gemini API key is configured.
pub const SERVICE_UNAVAILABLE_MSG: &str =
    "AI service is currently unavailable (API key missing or configuration failed).";

/// Answer when the request carries no question.
pub const QUESTION_REQUIRED_MSG: &str = "Please provide a question.";

#[derive(Debug, Default, Deserialize)]
pub struct AiRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AiResponse {
    pub answer: String,
}

/// Build the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/sales-reps", get(handle_sales_reps))
        .route("/api/ai", post(handle_ai))
        .with_state(state)
}

/// GET /api/sales-reps
///
/// The stored dataset as JSON; `[]` when the store is empty or degraded.
pub async fn handle_sales_reps(State(state): State<Arc<AppState>>) -> Json<Vec<SalesRep>> {
    Json(state.store.reps().to_vec())
}

/// POST /api/ai
///
/// Retrieves context for the question, builds a data-aware or general
/// prompt, and forwards it to the gateway. A missing or malformed body is
/// treated as a missing question rather than a protocol error.
pub async fn handle_ai(
    State(state): State<Arc<AppState>>,
    body: Option<Json<AiRequest>>,
) -> Json<AiResponse> {
    let question = body.map(|Json(req)| req.question).unwrap_or_default();

    let Some(provider) = state.provider.as_ref() else {
        tracing::warn!("AI endpoint called but no provider is configured");
        return answer(SERVICE_UNAVAILABLE_MSG);
    };

    if question.is_empty() {
        return answer(QUESTION_REQUIRED_MSG);
    }

    let context = retrieve_context(&question, state.store.reps());
    if context.is_empty() {
        tracing::info!("No relevant data found; sending general prompt");
    } else {
        tracing::info!(
            "Found {} context items; sending data-aware prompt",
            context.len()
        );
    }

    let prompt = build_prompt(&question, &context);

    match provider.generate(&prompt).await {
        Ok(text) => answer(&text),
        Err(e) => {
            tracing::error!("{} call failed: {:#}", provider.name(), e);
            answer(&format!("Error getting response from AI: {:#}", e))
        }
    }
}

fn answer(text: &str) -> Json<AiResponse> {
    Json(AiResponse {
        answer: text.to_string(),
    })
}
