//! HTTP handlers for the story generation API.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use storyloom_core::Scene;
use storyloom_error::{StoryloomError, StoryloomErrorKind};
use storyloom_interface::Storyteller;
use tracing::{error, instrument};

/// Shared state: the provider selected at startup.
#[derive(Clone)]
pub struct ApiState {
    storyteller: Arc<dyn Storyteller>,
}

impl ApiState {
    /// Creates new API state around a provider.
    pub fn new(storyteller: Arc<dyn Storyteller>) -> Self {
        Self { storyteller }
    }
}

/// Request body for `POST /api/story/start`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartRequest {
    /// Story premise; required and non-empty
    #[serde(default)]
    pub prompt: Option<String>,
    /// Genre; defaults to "fantasy" when absent
    #[serde(default)]
    pub genre: Option<String>,
}

/// Request body for `POST /api/story/next`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextRequest {
    /// Canonical scene path so far; must include the scene the choice was
    /// made against
    #[serde(default)]
    pub history: Vec<Scene>,
    /// Selected choice id, or a free-form user action
    #[serde(default)]
    pub choice_id: Option<String>,
    /// Seconds the user took to decide; drives the pacing hint
    #[serde(default)]
    pub time_taken: Option<f64>,
}

/// JSON error body returned on failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// User-facing failure description
    pub error: String,
    /// Underlying error detail, when available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Creates the story API router.
pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/story/start", post(start_story))
        .route("/api/story/next", post(next_scene))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// Map a generation failure to an HTTP status.
///
/// Transport failures surface as 502 from the upstream model; everything
/// else in the generation path is a 500. Validation never reaches here,
/// it is rejected with 400 before a provider runs.
fn failure_status(err: &StoryloomError) -> StatusCode {
    match err.kind() {
        StoryloomErrorKind::Validation(_) => StatusCode::BAD_REQUEST,
        StoryloomErrorKind::Transport(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
            details: None,
        }),
    )
        .into_response()
}

#[instrument(skip(state, body), fields(provider = state.storyteller.provider_name()))]
async fn start_story(State(state): State<ApiState>, Json(body): Json<StartRequest>) -> Response {
    let Some(prompt) = body.prompt.filter(|p| !p.trim().is_empty()) else {
        return bad_request("Prompt is required");
    };
    let genre = body
        .genre
        .filter(|g| !g.trim().is_empty())
        .unwrap_or_else(|| "fantasy".to_string());

    match state.storyteller.generate_start(&prompt, &genre).await {
        Ok(scene) => (StatusCode::OK, Json(scene)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to start story");
            (
                failure_status(&e),
                Json(ErrorBody {
                    error: "Failed to start story".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}

#[instrument(
    skip(state, body),
    fields(provider = state.storyteller.provider_name(), history_len = body.history.len())
)]
async fn next_scene(State(state): State<ApiState>, Json(body): Json<NextRequest>) -> Response {
    let Some(choice_id) = body.choice_id.filter(|c| !c.is_empty()) else {
        return bad_request("History and choiceId are required");
    };
    if body.history.is_empty() {
        return bad_request("History and choiceId are required");
    }

    match state
        .storyteller
        .generate_next_scene(&body.history, &choice_id, body.time_taken)
        .await
    {
        Ok(scene) => (StatusCode::OK, Json(scene)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to generate next scene");
            (
                failure_status(&e),
                Json(ErrorBody {
                    error: "Failed to generate next scene".to_string(),
                    details: Some(e.to_string()),
                }),
            )
                .into_response()
        }
    }
}
