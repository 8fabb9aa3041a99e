use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

#[tracing::instrument(name = "chat", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            tracing::warn!(%rejection, "Unreadable chat request body");
            return Err(AppError::MissingMessage);
        }
    };

    let Some(prompt) = payload.prompt() else {
        return Err(AppError::MissingMessage);
    };

    let generator = &state.generator;
    match generator.generate(prompt).await {
        Ok(text) => Ok(Json(ChatResponse::success(text, generator.model()))),
        Err(err) => {
            let err = AppError::from(err);
            tracing::error!(error = %err, kind = ?err.kind(), "API Error");
            Err(err)
        }
    }
}
