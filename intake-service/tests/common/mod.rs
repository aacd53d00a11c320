#![allow(dead_code)]

use intake_service::config::{
    ApiConfig, CorsConfig, IntakeConfig, MongoConfig, StoreBackend, StoreConfig,
};
use intake_service::services::{InMemoryStore, SubmissionStore};
use intake_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<InMemoryStore>,
}

pub fn test_config(backend: StoreBackend, uri: String, database: String) -> IntakeConfig {
    IntakeConfig {
        common: CoreConfig {
            port: 0, // Random port for testing
            log_level: "info".to_string(),
        },
        store: StoreConfig { backend },
        mongodb: MongoConfig { uri, database },
        cors: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        api: ApiConfig {
            prefix: "/api".to_string(),
            list_limit: 1000,
        },
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(test_config(
            StoreBackend::Memory,
            String::new(),
            String::new(),
        ))
        .await
    }

    pub async fn spawn_with(config: IntakeConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let app = Application::build_with_store(config, store.clone() as Arc<dyn SubmissionStore>)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        wait_until_healthy(&address).await;

        TestApp {
            address,
            port,
            store,
        }
    }

    pub fn api(&self, path: &str) -> String {
        format!("{}/api{}", self.address, path)
    }
}

/// Poll the health endpoint until the server answers.
pub async fn wait_until_healthy(address: &str) {
    let client = reqwest::Client::new();
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }
}

pub fn john_doe() -> serde_json::Value {
    serde_json::json!({
        "name": "John Doe",
        "email": "john.doe@example.com",
        "phone": "1234567890",
        "country_code": "+1",
        "looking_for": "litigation help"
    })
}
