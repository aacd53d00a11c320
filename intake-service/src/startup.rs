//! Application startup and lifecycle management.

use crate::config::{CorsConfig, IntakeConfig, StoreBackend};
use crate::handlers;
use crate::services::{InMemoryStore, MongoStore, StorageGateway, SubmissionService, SubmissionStore};
use axum::{
    http::HeaderValue,
    middleware::from_fn,
    routing::get,
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    make_request_span, request_id_middleware, security_headers_middleware,
};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: IntakeConfig,
    pub submissions: SubmissionService,
}

pub fn build_router(state: AppState) -> Router {
    let prefix = state.config.api.prefix.clone();

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route(&format!("{}/", prefix), get(handlers::api_root))
        .route(
            &format!("{}/consultations", prefix),
            get(handlers::list_consultations).post(handlers::create_consultation),
        )
        .route(
            &format!("{}/messages", prefix),
            get(handlers::list_messages).post(handlers::create_message),
        );

    // `/api` and `/api/` both answer; with no prefix `/` already does.
    if !prefix.is_empty() {
        router = router.route(&prefix, get(handlers::api_root));
    }

    router
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors_layer(&state.config.cors))
        .with_state(state)
}

fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.allows_any_origin() {
        // Browsers refuse credentials with a wildcard origin, so none are offered.
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins = cors
        .allowed_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Invalid CORS origin '{}': {}. Skipping.", o, e);
                None
            }
        })
        .collect::<Vec<HeaderValue>>();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application, connecting to the configured store.
    pub async fn build(config: IntakeConfig) -> Result<Self, AppError> {
        let store: Arc<dyn SubmissionStore> = match config.store.backend {
            StoreBackend::Mongodb => Arc::new(
                MongoStore::connect(&config.mongodb.uri, &config.mongodb.database)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to connect to MongoDB: {}", e);
                        e
                    })?,
            ),
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory store; submissions will not survive a restart");
                Arc::new(InMemoryStore::new())
            }
        };

        Self::build_with_store(config, store).await
    }

    /// Build the application on top of an already constructed store.
    pub async fn build_with_store(
        config: IntakeConfig,
        store: Arc<dyn SubmissionStore>,
    ) -> Result<Self, AppError> {
        let gateway = StorageGateway::new(store);
        gateway.ensure_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let state = AppState {
            submissions: SubmissionService::new(gateway, config.api.list_limit),
            config: config.clone(),
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port = port,
            prefix = %config.api.prefix,
            "Intake service listening"
        );

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the HTTP port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run until SIGINT/SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.run_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` resolves, drain in-flight requests, then close the store.
    pub async fn run_with_shutdown<F>(self, signal: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let gateway = self.state.submissions.gateway().clone();
        let app = build_router(self.state);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(signal)
            .await?;

        gateway.shutdown().await;
        tracing::info!("Service shutdown complete");
        Ok(())
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
