use axum::{extract::{Path, Query, State}, Json};
use serde::Deserialize;
use tracing::info;

use service::content::domain::{Category, NavigationEntry, ServiceView, ServiceWithDetails, MAX_NAV_LIMIT};

use crate::{errors::JsonApiError, routes::ServerState};

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ServicesQuery {
    /// Category slug; unknown slugs yield an empty list.
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct NavigationQuery {
    /// Services per category, clamped to 1..=50.
    pub limit: Option<u64>,
}

#[utoipa::path(
    get, path = "/api/services", tag = "catalog",
    params(ServicesQuery),
    responses(
        (status = 200, description = "Services ordered by title", body = [crate::openapi::ServiceDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_services(
    State(state): State<ServerState>,
    Query(q): Query<ServicesQuery>,
) -> Result<Json<Vec<ServiceView>>, JsonApiError> {
    let category = q.category.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let services = state.catalog.list_services(category).await?;
    info!(category = category.unwrap_or("*"), count = services.len(), "list services");
    Ok(Json(services))
}

#[utoipa::path(
    get, path = "/api/services/{slug}", tag = "catalog",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service with category, details and related services", body = crate::openapi::ServiceDetailDoc),
        (status = 404, description = "No such service", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_service(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<ServiceWithDetails>, JsonApiError> {
    match state.catalog.get_service_by_slug(&slug).await? {
        Some(service) => Ok(Json(service)),
        None => Err(JsonApiError::not_found("service")),
    }
}

#[utoipa::path(
    get, path = "/api/service-categories", tag = "catalog",
    responses(
        (status = 200, description = "Categories ordered by name", body = [crate::openapi::CategoryDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list_categories(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, JsonApiError> {
    Ok(Json(state.catalog.list_categories().await?))
}

#[utoipa::path(
    get, path = "/api/service-categories/{slug}", tag = "catalog",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category", body = crate::openapi::CategoryDoc),
        (status = 404, description = "No such category", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get_category(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>, JsonApiError> {
    state
        .catalog
        .get_category_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("category"))
}

/// Categories with their first services, for navigation menus. Degrades to
/// partial or empty groups instead of failing.
#[utoipa::path(
    get, path = "/api/navigation", tag = "catalog",
    params(NavigationQuery),
    responses((status = 200, description = "Navigation groups in category order", body = [crate::openapi::NavigationEntryDoc]))
)]
pub async fn navigation(
    State(state): State<ServerState>,
    Query(q): Query<NavigationQuery>,
) -> Json<Vec<NavigationEntry>> {
    let limit = q.limit.unwrap_or(state.nav_limit).clamp(1, MAX_NAV_LIMIT);
    Json(state.catalog.navigation(limit).await)
}
