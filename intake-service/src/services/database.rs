use crate::models::Collection;
use crate::services::store::SubmissionStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.db.collection(collection.name())
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl SubmissionStore for MongoStore {
    async fn insert(&self, collection: Collection, document: Document) -> Result<(), AppError> {
        self.collection(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to insert document: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn find_all(
        &self,
        collection: Collection,
        limit: i64,
    ) -> Result<Vec<Document>, AppError> {
        // Callers never see Mongo's own _id.
        let mut options = FindOptions::builder()
            .projection(doc! { "_id": 0 })
            .build();
        if limit > 0 {
            options.limit = Some(limit);
        }

        let cursor = self
            .collection(collection)
            .find(doc! {}, options)
            .await
            .map_err(|e| {
                tracing::error!(collection = %collection, "Failed to query documents: {}", e);
                AppError::from(e)
            })?;

        cursor.try_collect().await.map_err(|e| {
            tracing::error!(collection = %collection, "Failed to read cursor: {}", e);
            AppError::from(e)
        })
    }

    async fn ensure_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for intake-service");

        for collection in Collection::ALL {
            // Generated ids are UUIDs; the index turns a collision into an error.
            let id_index = IndexModel::builder()
                .keys(doc! { "id": 1 })
                .options(
                    IndexOptions::builder()
                        .name("id_unique".to_string())
                        .unique(true)
                        .build(),
                )
                .build();

            self.collection(collection)
                .create_index(id_index, None)
                .await
                .map_err(|e| {
                    tracing::error!(collection = %collection, "Failed to create id index: {}", e);
                    AppError::from(e)
                })?;
            tracing::info!("Created unique index on {}.id", collection);
        }

        Ok(())
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn shutdown(&self) {
        tracing::info!("Closing MongoDB connection");
        self.client.clone().shutdown().await;
    }
}
