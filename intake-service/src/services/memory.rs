use crate::models::Collection;
use crate::services::store::SubmissionStore;
use async_trait::async_trait;
use mongodb::bson::Document;
use service_core::error::AppError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

/// Process-local store for development and tests. Contents are lost on exit.
#[derive(Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
    insert_count: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful inserts across all collections.
    pub fn insert_count(&self) -> u64 {
        self.insert_count.load(Ordering::SeqCst)
    }
}

fn poisoned() -> AppError {
    AppError::InternalError(anyhow::anyhow!("In-memory store lock poisoned"))
}

#[async_trait]
impl SubmissionStore for InMemoryStore {
    async fn insert(&self, collection: Collection, document: Document) -> Result<(), AppError> {
        let mut collections = self.collections.write().map_err(|_| poisoned())?;
        let records = collections.entry(collection).or_default();

        // Same rule as the unique index on `id` in MongoDB.
        if let Ok(id) = document.get_str("id") {
            let taken = records
                .iter()
                .any(|r| r.get_str("id").map_or(false, |existing| existing == id));
            if taken {
                return Err(AppError::Conflict(anyhow::anyhow!(
                    "Record with the same id already exists"
                )));
            }
        }

        records.push(document);
        self.insert_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn find_all(
        &self,
        collection: Collection,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        let records = collections.get(&collection).map(Vec::as_slice).unwrap_or(&[]);

        let take = if limit > 0 {
            limit as usize
        } else {
            records.len()
        };
        Ok(records.iter().take(take).cloned().collect())
    }

    async fn ensure_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("[MEMORY] Store dropped with {} inserts", self.insert_count());
    }
}
