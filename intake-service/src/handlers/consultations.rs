use crate::dtos::CreateConsultationRequest;
use crate::models::ConsultationRequest;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::extract::AppJson;

#[tracing::instrument(skip(state, request))]
pub async fn create_consultation(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateConsultationRequest>,
) -> Result<Json<ConsultationRequest>, AppError> {
    let consultation = state.submissions.create_consultation(request).await?;
    Ok(Json(consultation))
}

#[tracing::instrument(skip(state))]
pub async fn list_consultations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConsultationRequest>>, AppError> {
    Ok(Json(state.submissions.list_consultations().await?))
}
