use crate::dtos::{CreateConsultationRequest, CreateMessageRequest};
use crate::models::{ConsultationRequest, MessageRequest};
use crate::services::gateway::StorageGateway;
use service_core::error::AppError;
use validator::Validate;

/// Accepts and lists website submissions. Every create is a single
/// validate-then-insert step; nothing is written for rejected input.
#[derive(Clone)]
pub struct SubmissionService {
    gateway: StorageGateway,
    list_limit: i64,
}

impl SubmissionService {
    pub fn new(gateway: StorageGateway, list_limit: i64) -> Self {
        Self {
            gateway,
            list_limit,
        }
    }

    pub fn gateway(&self) -> &StorageGateway {
        &self.gateway
    }

    pub async fn create_consultation(
        &self,
        input: CreateConsultationRequest,
    ) -> Result<ConsultationRequest, AppError> {
        input.validate()?;

        let consultation = ConsultationRequest::new(
            input.name,
            input.email,
            input.phone,
            input.country_code,
            input.looking_for,
        );
        self.gateway.insert(&consultation).await?;

        tracing::info!(consultation_id = %consultation.id, "Consultation request stored");
        Ok(consultation)
    }

    pub async fn list_consultations(&self) -> Result<Vec<ConsultationRequest>, AppError> {
        let consultations = self.gateway.find_all(self.list_limit).await?;
        tracing::debug!(count = consultations.len(), "Listed consultation requests");
        Ok(consultations)
    }

    pub async fn create_message(
        &self,
        input: CreateMessageRequest,
    ) -> Result<MessageRequest, AppError> {
        input.validate()?;

        let message = MessageRequest::new(input.name, input.email, input.message);
        self.gateway.insert(&message).await?;

        tracing::info!(message_id = %message.id, "Contact message stored");
        Ok(message)
    }

    pub async fn list_messages(&self) -> Result<Vec<MessageRequest>, AppError> {
        let messages = self.gateway.find_all(self.list_limit).await?;
        tracing::debug!(count = messages.len(), "Listed contact messages");
        Ok(messages)
    }
}
