use crate::models::Collection;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;

/// Raw document persistence for submission collections.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, collection: Collection, document: Document) -> Result<(), AppError>;

    /// Documents in storage order. A non-positive `limit` means no limit.
    async fn find_all(&self, collection: Collection, limit: i64)
        -> Result<Vec<Document>, AppError>;

    async fn ensure_indexes(&self) -> Result<(), AppError>;

    async fn health_check(&self) -> Result<(), AppError>;

    /// Release connections. Called once after the server has drained.
    async fn shutdown(&self);
}
