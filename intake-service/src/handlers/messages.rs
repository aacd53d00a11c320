use crate::dtos::CreateMessageRequest;
use crate::models::MessageRequest;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::AppJson;

#[tracing::instrument(skip(state, request))]
pub async fn create_message(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateMessageRequest>,
) -> Result<Json<MessageRequest>, AppError> {
    let message = state.submissions.create_message(request).await?;
    Ok(Json(message))
}

#[tracing::instrument(skip(state))]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<MessageRequest>>, AppError> {
    Ok(Json(state.submissions.list_messages().await?))
}
