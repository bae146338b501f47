// API Server Implementation

use crate::api::{config::ApiConfig, middleware, openapi::ApiDoc, routes, state::AppState};
use crate::db::DirectoryDatabase;
use anyhow::Result;
use axum::{routing::get, Json, Router};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tracing::info;
use utoipa::OpenApi;

/// Path the OpenAPI document is served from
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

/// API Server
pub struct ApiServer {
    config: ApiConfig,
    state: Arc<AppState>,
}

impl ApiServer {
    /// Create new API server
    pub fn new(config: ApiConfig, db: Arc<DirectoryDatabase>) -> Self {
        let state = Arc::new(AppState::new(config.clone(), db));

        Self { config, state }
    }

    /// Build the router
    pub fn build_router(&self) -> Router {
        // Every page also answers with a trailing slash
        let pages = Router::new()
            .route("/", get(routes::pages::index))
            .route("/about", get(routes::pages::about))
            .route("/about/", get(routes::pages::about))
            .route("/cs", get(routes::cipher_suites::index_cs))
            .route("/cs/", get(routes::cipher_suites::index_cs))
            .route("/cs/:name", get(routes::cipher_suites::detail_cs))
            .route("/cs/:name/", get(routes::cipher_suites::detail_cs))
            .route("/rfc", get(routes::rfcs::index_rfc))
            .route("/rfc/", get(routes::rfcs::index_rfc))
            .route("/rfc/:number", get(routes::rfcs::detail_rfc))
            .route("/rfc/:number/", get(routes::rfcs::detail_rfc))
            .route("/search", get(routes::search::search))
            .route("/search/", get(routes::search::search))
            .route("/health", get(routes::health::health_check));

        let router = pages.merge(self.openapi_routes());

        let router = if self.config.enable_cors {
            if self.config.cors_origins.is_empty() {
                router.layer(middleware::cors_layer())
            } else {
                router.layer(middleware::cors_layer_with_origins(&self.config.cors_origins))
            }
        } else {
            router
        };

        router
            // Add compression
            .layer(CompressionLayer::new())
            // Add logging
            .layer(middleware::logging_layer())
            // Add shared state
            .with_state(self.state.clone())
    }

    /// Build OpenAPI document route
    fn openapi_routes(&self) -> Router<Arc<AppState>> {
        if self.config.enable_openapi {
            Router::new().route(OPENAPI_PATH, get(|| async { Json(ApiDoc::openapi()) }))
        } else {
            Router::new()
        }
    }

    /// Run the server
    pub async fn run(self) -> Result<()> {
        let app = self.build_router();

        let addr = self.config.bind_address();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("CipherDir server listening on {}", addr);
        if self.config.enable_openapi {
            info!("OpenAPI document available at: http://{}{}", addr, OPENAPI_PATH);
        }
        info!("Health check endpoint: http://{}/health", addr);

        axum::serve(listener, app).await?;

        self.state.db.close().await;
        Ok(())
    }
}
