use crate::models::{ChatRequest, ChatResponse};
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Relay a chat message to the configured text provider.
///
/// Every backend failure maps to the same 500 envelope with an `"Error: "`
/// prefix; the response body always carries the `response` field.
pub async fn chatbot(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = req.message.unwrap_or_default();

    match state.text_provider.generate(&message).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                response: reply.text,
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatResponse {
                response: format!("Error: {}", e),
            }),
        ),
    }
}
