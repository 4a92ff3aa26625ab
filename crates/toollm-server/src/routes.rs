//! HTTP routes.
//!
//! `POST /chat` is the only route the browser UI needs; `/health` and
//! `/stats` are for operators.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, info, Instrument};

use toollm_common::{new_correlation_id, SessionId};

use crate::state::AppState;

const MISSING_FIELDS: &str = "All fields are required";
const GENERIC_FAILURE: &str = "Something went wrong";

/// Request body of `POST /chat`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body of `POST /chat`, success or not.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    sessions: usize,
}

/// Build the application router with permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/chat", post(chat))
        .route("/health", get(health))
        .route("/stats", get(stats))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn welcome() -> &'static str {
    "Welcome to ToolLM!"
}

/// Handler for POST /chat
///
/// Both fields must be present and non-empty. Engine failures are logged
/// and reported as a bare 500; the UI shows its own apology.
async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!(error = %rejection, "Rejected chat body");
            return reply(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };

    let (message, session_id) = match (
        non_empty(request.message),
        non_empty(request.session_id),
    ) {
        (Some(message), Some(session_id)) => (message, SessionId::from(session_id)),
        _ => return reply(StatusCode::BAD_REQUEST, MISSING_FIELDS),
    };

    let span = tracing::info_span!(
        "chat",
        request_id = %new_correlation_id(),
        session = %session_id
    );

    async move {
        info!(chars = message.chars().count(), "Chat request");
        match state.engine.generate(&message, &session_id).await {
            Ok(answer) => reply(StatusCode::OK, answer),
            Err(e) => {
                error!(error = %e, "Chat request failed");
                reply(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE)
            }
        }
    }
    .instrument(span)
    .await
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sessions: state.engine.sessions().len().await,
    })
}

async fn stats(State(state): State<AppState>) -> Json<toollm_ai::UsageSnapshot> {
    Json(state.engine.token_usage().await)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn reply(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ChatResponse {
            message: message.into(),
        }),
    )
        .into_response()
}
