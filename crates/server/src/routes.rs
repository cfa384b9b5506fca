use std::sync::Arc;

use axum::{routing::{get, post}, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::content::{domain::DEFAULT_NAV_LIMIT, repository::ContentRepository, CatalogService};
use service::leads::{repository::LeadRepository, LeadService};

use crate::openapi::ApiDoc;

pub mod content;
pub mod leads;

/// Shared handler state. Services hold their repositories as trait objects so
/// the router runs the same over Postgres and in-memory stores.
#[derive(Clone)]
pub struct ServerState {
    pub catalog: Arc<CatalogService<dyn ContentRepository>>,
    pub leads: Arc<LeadService<dyn LeadRepository>>,
    pub nav_limit: u64,
}

impl ServerState {
    pub fn new(content: Arc<dyn ContentRepository>, leads: Arc<dyn LeadRepository>) -> Self {
        Self {
            catalog: Arc::new(CatalogService::new(content)),
            leads: Arc::new(LeadService::new(leads)),
            nav_limit: DEFAULT_NAV_LIMIT,
        }
    }

    pub fn with_nav_limit(mut self, limit: u64) -> Self {
        self.nav_limit = limit;
        self
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the application router: JSON API, API docs and the static frontend fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, frontend_dir: &str) -> Router {
    let index = format!("{}/index.html", frontend_dir.trim_end_matches('/'));
    let static_dir = ServeDir::new(frontend_dir).fallback(ServeFile::new(index));

    let api = Router::new()
        .route("/api/services", get(content::list_services))
        .route("/api/services/:slug", get(content::get_service))
        .route("/api/service-categories", get(content::list_categories))
        .route("/api/service-categories/:slug", get(content::get_category))
        .route("/api/navigation", get(content::navigation))
        .route("/api/leads", post(leads::submit));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_dir)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
