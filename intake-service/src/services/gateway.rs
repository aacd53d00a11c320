use crate::models::Submission;
use crate::services::store::SubmissionStore;
use mongodb::bson;
use service_core::error::AppError;
use std::sync::Arc;

/// Typed access to the submission collections.
///
/// Records are encoded with their serde representation, which is where the
/// structured timestamp becomes an ISO-8601 string and back again.
#[derive(Clone)]
pub struct StorageGateway {
    store: Arc<dyn SubmissionStore>,
}

impl StorageGateway {
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    pub async fn insert<T: Submission>(&self, record: &T) -> Result<(), AppError> {
        let document = bson::to_document(record)?;
        self.store.insert(T::COLLECTION, document).await
    }

    pub async fn find_all<T: Submission>(&self, limit: i64) -> Result<Vec<T>, AppError> {
        let collection = T::COLLECTION;
        self.store
            .find_all(collection, limit)
            .await?
            .into_iter()
            .map(|document| {
                bson::from_document(document).map_err(|e| {
                    tracing::error!(collection = %collection, "Unreadable stored record: {}", e);
                    AppError::from(e)
                })
            })
            .collect()
    }

    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        self.store.ensure_indexes().await
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.store.health_check().await
    }

    pub async fn shutdown(&self) {
        self.store.shutdown().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, ConsultationRequest, MessageRequest};
    use crate::services::InMemoryStore;
    use mongodb::bson::{doc, Bson};

    #[tokio::test]
    async fn timestamp_is_stored_as_iso_string() {
        let store = Arc::new(InMemoryStore::new());
        let gateway = StorageGateway::new(store.clone());
        let record = MessageRequest::new(Some("Jane".to_string()), None, "hi".to_string());

        gateway.insert(&record).await.unwrap();

        let raw = store.find_all(Collection::Messages, 0).await.unwrap();
        assert_eq!(
            raw[0].get("timestamp"),
            Some(&Bson::String(crate::models::timestamp::format(&record.timestamp)))
        );
        assert_eq!(raw[0].get("email"), Some(&Bson::Null));
    }

    #[tokio::test]
    async fn records_read_back_equal_to_written() {
        let gateway = StorageGateway::new(Arc::new(InMemoryStore::new()));
        let record = ConsultationRequest::new(
            "John Doe".to_string(),
            "john.doe@example.com".to_string(),
            "1234567890".to_string(),
            "+1".to_string(),
            "litigation help".to_string(),
        );

        gateway.insert(&record).await.unwrap();

        let stored: Vec<ConsultationRequest> = gateway.find_all(0).await.unwrap();
        assert_eq!(stored, vec![record]);
    }

    #[tokio::test]
    async fn reads_legacy_naive_timestamps() {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert(
                Collection::Messages,
                doc! {
                    "id": "legacy-1",
                    "name": Bson::Null,
                    "email": Bson::Null,
                    "message": "from the old site",
                    "timestamp": "2024-11-02T08:15:00.123456",
                },
            )
            .await
            .unwrap();

        let gateway = StorageGateway::new(store);
        let stored: Vec<MessageRequest> = gateway.find_all(0).await.unwrap();
        assert_eq!(
            crate::models::timestamp::format(&stored[0].timestamp),
            "2024-11-02T08:15:00.123456+00:00"
        );
    }

    #[tokio::test]
    async fn reads_native_datetime_timestamps() {
        use chrono::{TimeZone, Utc};

        let written = Utc.with_ymd_and_hms(2024, 11, 2, 8, 15, 0).unwrap();
        let store = Arc::new(InMemoryStore::new());
        store
            .insert(
                Collection::Consultations,
                doc! {
                    "id": "imported-1",
                    "name": "John Doe",
                    "email": "john@example.com",
                    "phone": "1234567890",
                    "country_code": "+1",
                    "looking_for": "Legal consultation",
                    "timestamp": bson::DateTime::from_chrono(written),
                },
            )
            .await
            .unwrap();

        let gateway = StorageGateway::new(store);
        let stored: Vec<ConsultationRequest> = gateway.find_all(0).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].timestamp, written);
    }

    #[tokio::test]
    async fn corrupt_timestamp_is_a_database_error() {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert(
                Collection::Messages,
                doc! { "id": "bad", "message": "x", "timestamp": "not a time" },
            )
            .await
            .unwrap();

        let gateway = StorageGateway::new(store);
        let err = gateway.find_all::<MessageRequest>(0).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
